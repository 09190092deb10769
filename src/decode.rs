use alloc::borrow::Cow;
use alloc::vec::Vec;

use enough::Stop;
#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::pnm::{self, FormatDescriptor, Magic, PnmHeader};

/// Decoded image output. Pixels may be borrowed (zero-copy) or owned.
#[derive(Clone, Debug)]
pub struct DecodeOutput<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    /// Maxval declared in the header (1 for bitmaps).
    pub maxval: u32,
    pub layout: PixelLayout,
    pub magic: Magic,
    pub format: FormatDescriptor,
}

impl<'a> DecodeOutput<'a> {
    pub(crate) fn new(pixels: Cow<'a, [u8]>, header: &PnmHeader) -> Self {
        Self {
            pixels,
            width: header.width,
            height: header.height,
            maxval: header.maxval,
            layout: header.layout,
            magic: header.magic,
            format: header.format,
        }
    }

    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take the pixel data as an owned buffer (copies if borrowed).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels.into_owned()
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            maxval: self.maxval,
            layout: self.layout,
            magic: self.magic,
            format: self.format,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    /// Iterate 16-bit gray samples.
    ///
    /// Returns [`PnmError::UnsupportedModeForFormat`] unless the layout is `Gray16`.
    pub fn gray16_samples(&self) -> Result<impl Iterator<Item = u16> + '_, PnmError> {
        if self.layout != PixelLayout::Gray16 {
            return Err(PnmError::UnsupportedModeForFormat(self.layout));
        }
        Ok(self
            .pixels()
            .chunks_exact(2)
            .map(|c| u16::from_ne_bytes([c[0], c[1]])))
    }

    /// Iterate 32-bit gray samples.
    ///
    /// Returns [`PnmError::UnsupportedModeForFormat`] unless the layout is `Gray32`.
    pub fn gray32_samples(&self) -> Result<impl Iterator<Item = u32> + '_, PnmError> {
        if self.layout != PixelLayout::Gray32 {
            return Err(PnmError::UnsupportedModeForFormat(self.layout));
        }
        Ok(self
            .pixels()
            .chunks_exact(4)
            .map(|c| u32::from_ne_bytes([c[0], c[1], c[2], c[3]])))
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`PnmError::UnsupportedModeForFormat`] if the layout doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&[P], PnmError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        if self.layout != P::layout() {
            return Err(PnmError::UnsupportedModeForFormat(self.layout));
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of typed pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'_, P>, PnmError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}

/// Builder for a decode call.
///
/// ```
/// use zenpnm::{DecodeRequest, Limits, PixelLayout, Unstoppable};
///
/// let limits = Limits { max_pixels: Some(1 << 20), ..Default::default() };
/// let out = DecodeRequest::new(b"P2 2 1 255 7 9")
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(out.layout, PixelLayout::Gray8);
/// assert_eq!(out.pixels(), &[7, 9]);
/// # Ok::<(), zenpnm::PnmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject images exceeding `limits` before allocating.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode<S: Stop>(self, stop: S) -> Result<DecodeOutput<'a>, PnmError> {
        pnm::decode(self.data, self.limits, &stop)
    }
}

/// Decode from a buffered reader, leaving it positioned after the last
/// sample consumed.
#[cfg(feature = "std")]
pub fn decode_reader<R: std::io::BufRead, S: Stop>(
    reader: &mut R,
    limits: Option<&Limits>,
    stop: S,
) -> Result<DecodeOutput<'static>, PnmError> {
    pnm::decode_reader(reader, limits, &stop)
}
