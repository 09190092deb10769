//! Netpbm family: P1–P6 plus the CMYK, RGBA and palette raw extensions.
//!
//! Credits: decoder structure draws from [zune-ppm](https://github.com/etemesi254/zune-image)
//! by Caleb Etemesi (MIT/Apache-2.0/Zlib licensed).

mod cursor;
mod decode;
mod encode;
mod format;
mod token;

#[cfg(feature = "std")]
pub use cursor::ReaderCursor;
pub use cursor::{ByteSource, SliceCursor};
pub use encode::GRAY32_MAXVAL;
pub use format::{EXTENSIONS, FALLBACK_MIME_TYPE, Encoding, FormatDescriptor, Magic, sniff};

use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::decode::DecodeOutput;
use crate::error::PnmError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use enough::Stop;

/// Parsed PNM header.
///
/// Built once per decode, before any sample byte is read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PnmHeader {
    pub magic: Magic,
    pub format: FormatDescriptor,
    pub width: u32,
    pub height: u32,
    /// Declared maxval; 1 for bitmaps, which carry none.
    pub maxval: u32,
    /// Layout the samples decode to.
    pub layout: PixelLayout,
    /// Byte offset of the first pixel-data byte.
    pub data_offset: u64,
}

/// Parse a header from `src`, leaving it positioned on the first
/// pixel-data byte.
///
/// The position is unspecified if an error is returned.
pub fn read_header<S: ByteSource>(src: &mut S) -> Result<PnmHeader, PnmError> {
    decode::read_header(src)
}

fn check_limits(limits: Option<&Limits>, header: &PnmHeader) -> Result<(), PnmError> {
    let Some(limits) = limits else {
        return Ok(());
    };
    limits.check(header.width, header.height)?;
    let out_bytes = (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(header.layout.bytes_per_pixel()))
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })?;
    limits.check_memory(out_bytes)
}

/// Decode PNM data (called from DecodeRequest).
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, PnmError> {
    let mut cursor = SliceCursor::new(data);
    let header = decode::read_header(&mut cursor)?;
    check_limits(limits, &header)?;
    stop.check()?;

    let pixels = match header.format.encoding {
        Encoding::Raw => decode::decode_raw(cursor.remaining(), &header, stop)?,
        Encoding::Plain => Cow::Owned(decode::decode_plain(&mut cursor, &header, stop)?),
    };
    Ok(DecodeOutput::new(pixels, &header))
}

/// Decode PNM data from a buffered reader.
///
/// On success the reader is left just past the last sample consumed.
#[cfg(feature = "std")]
pub(crate) fn decode_reader<R: std::io::BufRead>(
    reader: &mut R,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'static>, PnmError> {
    use std::io::Read;

    let mut cursor = ReaderCursor::new(reader);
    let header = decode::read_header(&mut cursor)?;
    check_limits(limits, &header)?;
    stop.check()?;

    let pixels = match header.format.encoding {
        Encoding::Raw => {
            let needed = decode::raw_len(&header)?;
            let mut raw = Vec::with_capacity(needed.min(decode::PREALLOC_LIMIT));
            cursor
                .get_mut()
                .take(needed as u64)
                .read_to_end(&mut raw)?;
            let converted = match decode::decode_raw(&raw, &header, stop)? {
                Cow::Owned(v) => Some(v),
                Cow::Borrowed(_) => None,
            };
            converted.unwrap_or(raw)
        }
        Encoding::Plain => decode::decode_plain(&mut cursor, &header, stop)?,
    };
    Ok(DecodeOutput::new(Cow::Owned(pixels), &header))
}

/// Encode to raw PNM (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    encode::encode_pnm(pixels, width, height, layout, stop)
}
