use alloc::string::String;
use enough::StopReason;

use crate::pixel::{ColorMode, PixelLayout};

/// Errors from Netpbm decoding and encoding.
///
/// Every error is terminal. Once one is returned, no header or pixel data
/// produced by the same call should be considered valid.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    /// The magic tag is not in the lookup table. The stream is not a
    /// Netpbm file at all, as opposed to a malformed one.
    #[error("not a PNM file: unrecognized magic {0:?}")]
    NotARecognizedFormat(String),

    /// End of input reached before a header token started.
    #[error("unexpected end of input while reading header")]
    UnexpectedEndOfHeader,

    /// A header or plain-sample token exceeded 10 bytes.
    #[error("token too long: {0:?}")]
    TokenTooLong(String),

    /// A token is empty, contains a non-digit byte, overflows, or is a zero maxval.
    #[error("non-decimal ASCII value: {0:?}")]
    NonDecimalHeaderValue(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Maxval above 255 for a mode other than grayscale.
    #[error("too many colors for {mode:?}: maxval {maxval}")]
    TooManyColorsForMode { maxval: u32, mode: ColorMode },

    /// A plain sample is larger than the declared maxval.
    #[error("sample value {value} exceeds maxval {maxval}")]
    ValueOutOfRange { value: u64, maxval: u32 },

    /// Fewer samples than the geometry requires. Units are bytes for raw
    /// encodings and sample tokens for plain encodings.
    #[error("truncated pixel data: need {needed}, got {actual}")]
    TruncatedPixelData { needed: usize, actual: usize },

    #[error("cannot encode {0:?} as PNM")]
    UnsupportedModeForFormat(PixelLayout),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
