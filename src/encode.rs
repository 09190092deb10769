use alloc::vec::Vec;

use enough::Stop;

use crate::error::PnmError;
use crate::pixel::PixelLayout;
use crate::pnm;

/// Builder for an encode call.
///
/// Output is always raw; the magic tag and maxval follow from the layout:
/// `Bitmap` writes P4, `Gray8`/`Gray16`/`Gray32` write P5, and `Rgb8`/`Rgba8`
/// write P6 (alpha dropped). Other layouts are rejected.
///
/// Gray depth is never narrowed: to write 16-bit samples, pass `Gray16`
/// rather than `Gray32` holding small values.
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    layout: PixelLayout,
}

impl EncodeRequest {
    pub fn new(layout: PixelLayout) -> Self {
        Self { layout }
    }

    /// Encode into a new buffer.
    pub fn encode<S: Stop>(
        self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: S,
    ) -> Result<Vec<u8>, PnmError> {
        pnm::encode(pixels, width, height, self.layout, &stop)
    }

    /// Encode and write the complete file to `sink`.
    ///
    /// A write failure is returned as-is; nothing is rolled back.
    #[cfg(feature = "std")]
    pub fn encode_to<W: std::io::Write, S: Stop>(
        self,
        sink: &mut W,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: S,
    ) -> Result<(), PnmError> {
        let encoded = self.encode(pixels, width, height, stop)?;
        sink.write_all(&encoded)?;
        Ok(())
    }
}
