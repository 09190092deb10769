use alloc::format;

use crate::error::PnmError;

/// Resource limits applied after the header is parsed and before any
/// sample buffer is allocated.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the decoded pixel buffer.
    pub max_memory_bytes: Option<u64>,
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    match limit {
        Some(max) if value > max => Err(PnmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Check header geometry against the configured limits.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// Check an output allocation against the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), PnmError> {
        exceeds("allocation of", bytes as u64, self.max_memory_bytes)
    }
}
