/// Color mode named by a magic tag, before depth is known.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// 1-bit black and white.
    Bitmap,
    /// Single channel grayscale, depth chosen from maxval.
    Gray,
    Rgb,
    Rgba,
    Cmyk,
    /// 8-bit palette indices (no palette is stored in the file).
    Palette,
}

impl ColorMode {
    /// Whether the header carries a maxval field.
    pub fn has_maxval(self) -> bool {
        !matches!(self, Self::Bitmap)
    }
}

/// Pixel memory layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// One byte per pixel: 0x00 is ink (black), 0xFF is paper (white).
    Bitmap,
    /// Single channel, 8-bit grayscale.
    Gray8,
    /// Single channel, 16-bit grayscale (native endian).
    Gray16,
    /// Single channel, 32-bit grayscale (native endian).
    Gray32,
    /// 3 channels, 8-bit RGB.
    Rgb8,
    /// 4 channels, 8-bit RGBA.
    Rgba8,
    /// 4 channels, 8-bit CMYK.
    Cmyk8,
    /// Single channel, 8-bit palette index.
    Indexed8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Bitmap | Self::Gray8 | Self::Indexed8 => 1,
            Self::Gray16 => 2,
            Self::Rgb8 => 3,
            Self::Gray32 | Self::Rgba8 | Self::Cmyk8 => 4,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Bitmap | Self::Gray8 | Self::Gray16 | Self::Gray32 | Self::Indexed8 => 1,
            Self::Rgb8 => 3,
            Self::Rgba8 | Self::Cmyk8 => 4,
        }
    }

    /// Bytes per channel sample.
    pub fn bytes_per_sample(&self) -> usize {
        self.bytes_per_pixel() / self.channels()
    }

    /// Color mode this layout belongs to.
    pub fn color_mode(&self) -> ColorMode {
        match self {
            Self::Bitmap => ColorMode::Bitmap,
            Self::Gray8 | Self::Gray16 | Self::Gray32 => ColorMode::Gray,
            Self::Rgb8 => ColorMode::Rgb,
            Self::Rgba8 => ColorMode::Rgba,
            Self::Cmyk8 => ColorMode::Cmyk,
            Self::Indexed8 => ColorMode::Palette,
        }
    }
}

/// Pixel types that can be viewed directly over decoded bytes.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    /// Layout whose memory matches this pixel type.
    fn layout() -> PixelLayout;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgb8
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn layout() -> PixelLayout {
        PixelLayout::Rgba8
    }
}
