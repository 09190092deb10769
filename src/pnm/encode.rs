//! Raw PNM encoder: P4, P5 and P6.
//!
//! Plain (ASCII) variants are read-only; output is always raw.

use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

use super::format::Magic;
use crate::error::PnmError;
use crate::log::{debug, warn};
use crate::pixel::PixelLayout;

/// Maxval written for 32-bit grayscale.
///
/// This is 2^31, not 2^32 - 1. Any maxval above 65535 selects 32-bit
/// samples on decode.
///
/// The sample width follows the layout, not the pixel values: `Gray32` is
/// always written 32-bit. Pass `Gray16` to get 16-bit output with maxval
/// 65535.
pub const GRAY32_MAXVAL: u32 = 1 << 31;

/// Magic tag and maxval line (if any) for each encodable layout.
fn target(layout: PixelLayout) -> Result<(Magic, Option<u32>), PnmError> {
    Ok(match layout {
        PixelLayout::Bitmap => (Magic::P4, None),
        PixelLayout::Gray8 => (Magic::P5, Some(255)),
        PixelLayout::Gray16 => (Magic::P5, Some(65535)),
        PixelLayout::Gray32 => (Magic::P5, Some(GRAY32_MAXVAL)),
        PixelLayout::Rgb8 | PixelLayout::Rgba8 => (Magic::P6, Some(255)),
        other => return Err(PnmError::UnsupportedModeForFormat(other)),
    })
}

/// Encode pixels as a raw PNM file.
pub(crate) fn encode_pnm(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let (magic, maxval) = target(layout)?;

    if width == 0 || height == 0 {
        return Err(PnmError::InvalidHeader(format!(
            "cannot encode a {width}x{height} image"
        )));
    }
    let w = width as usize;
    let h = height as usize;
    let row_in = w
        .checked_mul(layout.bytes_per_pixel())
        .ok_or(PnmError::DimensionsTooLarge { width, height })?;
    let expected = row_in
        .checked_mul(h)
        .ok_or(PnmError::DimensionsTooLarge { width, height })?;
    if pixels.len() < expected {
        return Err(PnmError::BufferTooSmall {
            needed: expected,
            actual: pixels.len(),
        });
    }

    let row_out = match layout {
        PixelLayout::Bitmap => w.div_ceil(8),
        PixelLayout::Rgba8 => w * 3,
        _ => row_in,
    };

    let mut out = Vec::with_capacity(32 + row_out * h);
    out.extend_from_slice(magic.as_bytes());
    out.extend_from_slice(format!("\n{width} {height}\n").as_bytes());
    if let Some(maxval) = maxval {
        out.extend_from_slice(format!("{maxval}\n").as_bytes());
    }

    debug!("encoding {layout:?} {width}x{height} as {magic:?} maxval {maxval:?}");
    if layout == PixelLayout::Rgba8 {
        warn!("PNM has no alpha channel; writing {width}x{height} RGBA as RGB");
    }
    stop.check()?;

    for (y, row) in pixels[..expected].chunks_exact(row_in).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        match layout {
            PixelLayout::Bitmap => {
                // Ink (zero) sets the bit; rows pad to a whole byte.
                for chunk in row.chunks(8) {
                    let packed = chunk
                        .iter()
                        .enumerate()
                        .filter(|&(_, &p)| p == 0)
                        .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
                    out.push(packed);
                }
            }
            PixelLayout::Gray16 => {
                for pair in row.chunks_exact(2) {
                    let v = u16::from_ne_bytes([pair[0], pair[1]]);
                    out.extend_from_slice(&v.to_be_bytes());
                }
            }
            PixelLayout::Gray32 => {
                for quad in row.chunks_exact(4) {
                    let v = u32::from_ne_bytes([quad[0], quad[1], quad[2], quad[3]]);
                    out.extend_from_slice(&v.to_be_bytes());
                }
            }
            PixelLayout::Rgba8 => {
                for px in row.chunks_exact(4) {
                    out.extend_from_slice(&px[..3]);
                }
            }
            _ => out.extend_from_slice(row),
        }
    }

    Ok(out)
}
