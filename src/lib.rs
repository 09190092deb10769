//! # zenpnm
//!
//! Netpbm decoder and encoder: PBM bitmaps, PGM graymaps and PPM pixmaps in
//! both raw and plain (ASCII) encodings, plus raw CMYK, RGBA and palette
//! extensions.
//!
//! ## Zero-Copy Decoding
//!
//! Raw 8-bit samples (P5 with maxval ≤ 255, P6, and the extensions) are
//! returned as a slice borrowed from the input. Bitmaps, 16/32-bit gray and
//! all plain files are converted into an owned buffer.
//!
//! ## Supported Formats
//!
//! | Tag | Encoding | Decodes to |
//! |---|---|---|
//! | `P1`, `P4` | plain, raw | [`PixelLayout::Bitmap`] |
//! | `P2`, `P5` | plain, raw | `Gray8`, `Gray16` or `Gray32` by maxval |
//! | `P3`, `P6` | plain, raw | `Rgb8` |
//! | `P0CMYK`, `PyCMYK` | raw | `Cmyk8` |
//! | `PyRGBA` | raw | `Rgba8` |
//! | `PyP` | raw | `Indexed8` |
//!
//! Sample values are returned as stored; they are not rescaled by maxval.
//! The encoder always writes raw P4, P5 or P6.
//!
//! ## Non-Goals
//!
//! - PAM (P7) and PFM
//! - Repairing corrupt or truncated sample data
//! - Incremental decoding
//!
//! ## Usage
//!
//! ```
//! use zenpnm::{DecodeRequest, EncodeRequest, ImageInfo, PixelLayout, Unstoppable};
//!
//! let data: &[u8] = b"P3\n2 1\n255\n255 0 0  0 0 255\n";
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! assert_eq!((info.width, info.height), (2, 1));
//!
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels(), &[255, 0, 0, 0, 0, 255]);
//!
//! // Re-encode as raw PPM
//! let encoded = EncodeRequest::new(decoded.layout)
//!     .encode(decoded.pixels(), decoded.width, decoded.height, Unstoppable)?;
//! assert!(encoded.starts_with(b"P6\n2 1\n255\n"));
//! # Ok::<(), zenpnm::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod log;
mod pixel;

pub mod pnm;

mod decode;
mod encode;

// Re-exports
#[cfg(feature = "std")]
pub use decode::decode_reader;
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use info::ImageInfo;
pub use limits::Limits;
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{ColorMode, PixelLayout};
pub use pnm::{PnmHeader, sniff};

/// Decode a complete PNM file held in memory.
pub fn decode<S: Stop>(data: &[u8], stop: S) -> Result<DecodeOutput<'_>, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode pixels as raw PNM, picking the tag from `layout`.
pub fn encode<S: Stop>(
    pixels: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    stop: S,
) -> Result<alloc::vec::Vec<u8>, PnmError> {
    EncodeRequest::new(layout).encode(pixels, width, height, stop)
}

/// Parse only the header of an in-memory PNM file.
pub fn read_header(data: &[u8]) -> Result<PnmHeader, PnmError> {
    pnm::read_header(&mut pnm::SliceCursor::new(data))
}
