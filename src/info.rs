use crate::error::PnmError;
use crate::pixel::PixelLayout;
use crate::pnm::{self, FormatDescriptor, Magic, SliceCursor};

/// Header facts available without decoding samples.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub maxval: u32,
    pub magic: Magic,
    pub format: FormatDescriptor,
    pub native_layout: PixelLayout,
    /// Display MIME type, or `image/x-portable-anymap` if the tag has none.
    pub mime_type: &'static str,
    /// Offset of the first pixel-data byte.
    pub data_offset: u64,
}

impl ImageInfo {
    /// Probe the header only.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let header = pnm::read_header(&mut SliceCursor::new(data))?;
        Ok(Self {
            width: header.width,
            height: header.height,
            maxval: header.maxval,
            magic: header.magic,
            format: header.format,
            native_layout: header.layout,
            mime_type: header.magic.mime_type_or_default(),
            data_offset: header.data_offset,
        })
    }
}
