//! Magic tag table, MIME mapping, sniffing and depth selection.

use alloc::string::String;

use crate::error::PnmError;
use crate::pixel::{ColorMode, PixelLayout};

/// MIME type for Netpbm streams whose tag has no specific display type.
pub const FALLBACK_MIME_TYPE: &str = "image/x-portable-anymap";

/// File extensions conventionally used for Netpbm files.
pub const EXTENSIONS: &[&str] = &["pbm", "pgm", "ppm", "pnm"];

/// How samples are stored after the header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Binary samples, packed (1-bit) or big-endian fixed width.
    Raw,
    /// Whitespace-separated ASCII decimals.
    Plain,
}

/// Encoding and color mode named by a magic tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatDescriptor {
    pub encoding: Encoding,
    pub mode: ColorMode,
}

/// Recognized magic tags.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Magic {
    /// Plain PBM.
    P1,
    /// Plain PGM.
    P2,
    /// Plain PPM.
    P3,
    /// Raw PBM.
    P4,
    /// Raw PGM.
    P5,
    /// Raw PPM.
    P6,
    /// Raw CMYK.
    P0Cmyk,
    /// Raw palette indices (test extension).
    PyP,
    /// Raw RGBA (test extension).
    PyRgba,
    /// Raw CMYK (test extension).
    PyCmyk,
}

struct Entry {
    tag: &'static [u8],
    magic: Magic,
    descriptor: FormatDescriptor,
    mime: Option<&'static str>,
}

const fn entry(
    tag: &'static [u8],
    magic: Magic,
    encoding: Encoding,
    mode: ColorMode,
    mime: Option<&'static str>,
) -> Entry {
    Entry {
        tag,
        magic,
        descriptor: FormatDescriptor { encoding, mode },
        mime,
    }
}

const PBM: Option<&str> = Some("image/x-portable-bitmap");
const PGM: Option<&str> = Some("image/x-portable-graymap");
const PPM: Option<&str> = Some("image/x-portable-pixmap");

static TABLE: [Entry; 10] = [
    entry(b"P1", Magic::P1, Encoding::Plain, ColorMode::Bitmap, PBM),
    entry(b"P2", Magic::P2, Encoding::Plain, ColorMode::Gray, PGM),
    entry(b"P3", Magic::P3, Encoding::Plain, ColorMode::Rgb, PPM),
    entry(b"P4", Magic::P4, Encoding::Raw, ColorMode::Bitmap, PBM),
    entry(b"P5", Magic::P5, Encoding::Raw, ColorMode::Gray, PGM),
    entry(b"P6", Magic::P6, Encoding::Raw, ColorMode::Rgb, PPM),
    entry(b"P0CMYK", Magic::P0Cmyk, Encoding::Raw, ColorMode::Cmyk, None),
    entry(b"PyP", Magic::PyP, Encoding::Raw, ColorMode::Palette, None),
    entry(b"PyRGBA", Magic::PyRgba, Encoding::Raw, ColorMode::Rgba, None),
    entry(b"PyCMYK", Magic::PyCmyk, Encoding::Raw, ColorMode::Cmyk, None),
];

impl Magic {
    fn entry(self) -> &'static Entry {
        // TABLE rows follow declaration order.
        &TABLE[self as usize]
    }

    /// Look up a magic tag by its exact bytes.
    pub fn from_bytes(tag: &[u8]) -> Option<Self> {
        TABLE.iter().find(|e| e.tag == tag).map(|e| e.magic)
    }

    /// Look up a magic tag, failing with [`PnmError::NotARecognizedFormat`].
    pub fn resolve(tag: &[u8]) -> Result<Self, PnmError> {
        Self::from_bytes(tag).ok_or_else(|| {
            PnmError::NotARecognizedFormat(String::from_utf8_lossy(tag).into_owned())
        })
    }

    pub fn as_bytes(self) -> &'static [u8] {
        self.entry().tag
    }

    pub fn descriptor(self) -> FormatDescriptor {
        self.entry().descriptor
    }

    /// Display MIME type, if the tag has one.
    pub fn mime_type(self) -> Option<&'static str> {
        self.entry().mime
    }

    /// Display MIME type, falling back to [`FALLBACK_MIME_TYPE`].
    pub fn mime_type_or_default(self) -> &'static str {
        self.mime_type().unwrap_or(FALLBACK_MIME_TYPE)
    }
}

/// Cheap prefix test for format dispatch: `P` followed by one of `0123456y`.
///
/// False positives are caught later when the full tag fails to resolve.
pub fn sniff(prefix: &[u8]) -> bool {
    matches!(prefix, [b'P', second, ..] if b"0123456y".contains(second))
}

/// Pick the output layout for a color mode and maxval.
///
/// Only grayscale may go past 8 bits: up to 255 is 8-bit, up to 65535 is
/// 16-bit and anything larger is 32-bit. A zero maxval is rejected here.
pub(crate) fn layout_for(mode: ColorMode, maxval: u32) -> Result<PixelLayout, PnmError> {
    if maxval == 0 {
        return Err(PnmError::NonDecimalHeaderValue(
            "maxval must be at least 1, got 0".into(),
        ));
    }
    if maxval > 255 && mode != ColorMode::Gray {
        return Err(PnmError::TooManyColorsForMode { maxval, mode });
    }
    Ok(match mode {
        ColorMode::Bitmap => PixelLayout::Bitmap,
        ColorMode::Gray => match maxval {
            0..=255 => PixelLayout::Gray8,
            256..=65535 => PixelLayout::Gray16,
            _ => PixelLayout::Gray32,
        },
        ColorMode::Rgb => PixelLayout::Rgb8,
        ColorMode::Rgba => PixelLayout::Rgba8,
        ColorMode::Cmyk => PixelLayout::Cmyk8,
        ColorMode::Palette => PixelLayout::Indexed8,
    })
}
