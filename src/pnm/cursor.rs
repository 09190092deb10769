//! Single-byte read primitive shared by the header tokenizer and the plain
//! sample decoder.

use crate::error::PnmError;

/// A sequential byte source.
///
/// `Ok(None)` is end of input. EOF is never reported as a zero byte.
pub trait ByteSource {
    /// Read the next byte, or `None` at end of input.
    fn read_byte(&mut self) -> Result<Option<u8>, PnmError>;

    /// Number of bytes consumed so far.
    fn position(&self) -> u64;
}

/// Cursor over an in-memory buffer.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }
}

impl ByteSource for SliceCursor<'_> {
    #[inline]
    fn read_byte(&mut self) -> Result<Option<u8>, PnmError> {
        let b = self.data.get(self.pos).copied();
        if b.is_some() {
            self.pos += 1;
        }
        Ok(b)
    }

    fn position(&self) -> u64 {
        self.pos as u64
    }
}

/// Cursor over a buffered reader.
///
/// Consumes exactly the bytes it returns, so after a header parse the
/// reader sits on the first pixel-data byte.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct ReaderCursor<R> {
    inner: R,
    pos: u64,
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> ReaderCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, pos: 0 }
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> ByteSource for ReaderCursor<R> {
    fn read_byte(&mut self) -> Result<Option<u8>, PnmError> {
        loop {
            match self.inner.fill_buf() {
                Ok([]) => return Ok(None),
                Ok(buf) => {
                    let b = buf[0];
                    self.inner.consume(1);
                    self.pos += 1;
                    return Ok(Some(b));
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn position(&self) -> u64 {
        self.pos
    }
}
