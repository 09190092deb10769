//! Header assembly and sample decoding for raw and plain encodings.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use enough::Stop;

use super::PnmHeader;
use super::cursor::ByteSource;
use super::format::{self, Magic};
use super::token;
use crate::error::PnmError;
use crate::log::{debug, trace};
use crate::pixel::PixelLayout;

/// Ink and paper values of the one-byte-per-pixel bitmap layout.
const INK: u8 = 0x00;
const PAPER: u8 = 0xFF;

/// Largest buffer reserved up front from header geometry alone.
pub(crate) const PREALLOC_LIMIT: usize = 1 << 20;

/// Rows decoded between cancellation checks.
const ROWS_PER_STOP_CHECK: usize = 16;

/// Parse a full header, leaving `src` on the first pixel-data byte.
pub(crate) fn read_header<S: ByteSource>(src: &mut S) -> Result<PnmHeader, PnmError> {
    let tag = token::read_magic(src)?;
    let magic = Magic::resolve(tag.as_bytes())?;
    let format = magic.descriptor();

    let width = token::read_header_field(src)?;
    let height = token::read_header_field(src)?;
    let maxval = if format.mode.has_maxval() {
        token::read_header_field(src)?
    } else {
        1
    };

    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(alloc::format!(
            "width and height must be positive, got {width}x{height}"
        )));
    }
    let layout = format::layout_for(format.mode, maxval)?;
    debug_assert_eq!(layout.color_mode(), format.mode);

    debug!(
        "{magic:?}: {width}x{height} maxval {maxval} -> {layout:?} ({:?})",
        format.encoding
    );

    Ok(PnmHeader {
        magic,
        format,
        width,
        height,
        maxval,
        layout,
        data_offset: src.position(),
    })
}

fn too_large(header: &PnmHeader) -> PnmError {
    PnmError::DimensionsTooLarge {
        width: header.width,
        height: header.height,
    }
}

/// Bytes of raw sample data the geometry requires.
///
/// Bitmap rows are packed eight pixels per byte, rounded up per row.
pub(crate) fn raw_len(header: &PnmHeader) -> Result<usize, PnmError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let row = match header.layout {
        PixelLayout::Bitmap => w.div_ceil(8),
        layout => w
            .checked_mul(layout.bytes_per_pixel())
            .ok_or_else(|| too_large(header))?,
    };
    row.checked_mul(h).ok_or_else(|| too_large(header))
}

/// Number of scalar samples a plain stream must carry.
fn plain_sample_count(header: &PnmHeader) -> Result<usize, PnmError> {
    (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|wh| wh.checked_mul(header.layout.channels()))
        .ok_or_else(|| too_large(header))
}

/// Decode raw samples that follow the header.
///
/// 8-bit layouts are returned borrowed. Bitmaps are unpacked to one byte per
/// pixel and 16/32-bit gray is converted from big endian to native endian.
pub(crate) fn decode_raw<'a>(
    data: &'a [u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Cow<'a, [u8]>, PnmError> {
    let needed = raw_len(header)?;
    let src = data.get(..needed).ok_or(PnmError::TruncatedPixelData {
        needed,
        actual: data.len(),
    })?;

    let w = header.width as usize;
    let h = header.height as usize;

    match header.layout {
        PixelLayout::Bitmap => {
            let mut out = Vec::with_capacity(w * h);
            for (y, row) in src.chunks_exact(w.div_ceil(8)).enumerate() {
                if y % ROWS_PER_STOP_CHECK == 0 {
                    stop.check()?;
                }
                out.extend((0..w).map(|x| {
                    if row[x / 8] & (0x80 >> (x % 8)) != 0 {
                        INK
                    } else {
                        PAPER
                    }
                }));
            }
            Ok(Cow::Owned(out))
        }
        PixelLayout::Gray16 => {
            let mut out = Vec::with_capacity(needed);
            for (y, row) in src.chunks_exact(w * 2).enumerate() {
                if y % ROWS_PER_STOP_CHECK == 0 {
                    stop.check()?;
                }
                for pair in row.chunks_exact(2) {
                    let v = u16::from_be_bytes([pair[0], pair[1]]);
                    out.extend_from_slice(&v.to_ne_bytes());
                }
            }
            Ok(Cow::Owned(out))
        }
        PixelLayout::Gray32 => {
            let mut out = Vec::with_capacity(needed);
            for (y, row) in src.chunks_exact(w * 4).enumerate() {
                if y % ROWS_PER_STOP_CHECK == 0 {
                    stop.check()?;
                }
                for quad in row.chunks_exact(4) {
                    let v = u32::from_be_bytes([quad[0], quad[1], quad[2], quad[3]]);
                    out.extend_from_slice(&v.to_ne_bytes());
                }
            }
            Ok(Cow::Owned(out))
        }
        _ => Ok(Cow::Borrowed(src)),
    }
}

/// Decode whitespace-separated ASCII samples from `src`.
///
/// Reads exactly as many samples as the geometry needs; anything after the
/// last one is left unread.
pub(crate) fn decode_plain<S: ByteSource>(
    src: &mut S,
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let count = plain_sample_count(header)?;
    let row_samples = header.width as usize * header.layout.channels();
    let check_every = row_samples.saturating_mul(ROWS_PER_STOP_CHECK);
    let bytes_per_sample = header.layout.bytes_per_sample();
    // The header is untrusted; grow with the samples actually present.
    let mut out = Vec::with_capacity(count.saturating_mul(bytes_per_sample).min(PREALLOC_LIMIT));
    let truncated = |actual| PnmError::TruncatedPixelData {
        needed: count,
        actual,
    };

    for i in 0..count {
        if i % check_every == 0 {
            stop.check()?;
        }

        if header.layout == PixelLayout::Bitmap {
            // One character per sample; separators are optional.
            let b = token::skip_to_token(src)?.ok_or_else(|| truncated(i))?;
            out.push(match b {
                b'1' => INK,
                b'0' => PAPER,
                b'2'..=b'9' => {
                    return Err(PnmError::ValueOutOfRange {
                        value: u64::from(b - b'0'),
                        maxval: 1,
                    });
                }
                other => {
                    return Err(PnmError::NonDecimalHeaderValue(String::from(char::from(
                        other,
                    ))));
                }
            });
            continue;
        }

        let value = token::next_token(src)?
            .ok_or_else(|| truncated(i))?
            .parse_decimal()?;
        if value > u64::from(header.maxval) {
            return Err(PnmError::ValueOutOfRange {
                value,
                maxval: header.maxval,
            });
        }
        // maxval bounds the value to the layout's sample width.
        match bytes_per_sample {
            1 => out.push(value as u8),
            2 => out.extend_from_slice(&(value as u16).to_ne_bytes()),
            _ => out.extend_from_slice(&(value as u32).to_ne_bytes()),
        }
    }

    trace!("plain decode read {count} samples, stopped at byte {}", src.position());
    Ok(out)
}
