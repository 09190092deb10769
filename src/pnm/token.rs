//! Header tokenizer: magic scan, whitespace/comment skipping and bounded
//! decimal tokens.
//!
//! Comments run from `#` to the next CR or LF and are passed over without
//! being buffered, so their length costs time but no memory.

use alloc::string::String;

use super::cursor::ByteSource;
use crate::error::PnmError;

/// Longest magic tag accepted before the scan gives up.
pub(crate) const MAX_MAGIC_LEN: usize = 6;

/// Longest header or plain-sample token.
pub(crate) const MAX_TOKEN_LEN: usize = 10;

/// Netpbm whitespace: space, HT, LF, VT, FF, CR.
#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

fn lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Raw magic bytes as read from the stream, at most one byte past the cap.
pub(crate) struct MagicBytes {
    buf: [u8; MAX_MAGIC_LEN + 1],
    len: usize,
}

impl MagicBytes {
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }
}

/// Read the magic tag: everything up to the first whitespace byte or EOF.
///
/// Stops after `MAX_MAGIC_LEN + 1` bytes; such a tag never resolves.
pub(crate) fn read_magic<S: ByteSource>(src: &mut S) -> Result<MagicBytes, PnmError> {
    let mut magic = MagicBytes {
        buf: [0; MAX_MAGIC_LEN + 1],
        len: 0,
    };
    while let Some(b) = src.read_byte()? {
        if is_whitespace(b) {
            break;
        }
        magic.buf[magic.len] = b;
        magic.len += 1;
        if magic.len > MAX_MAGIC_LEN {
            break;
        }
    }
    Ok(magic)
}

/// Pass over a comment body, up to and including the next CR or LF.
/// End of input also ends the comment.
pub(crate) fn skip_comment<S: ByteSource>(src: &mut S) -> Result<(), PnmError> {
    while let Some(b) = src.read_byte()? {
        if b == b'\r' || b == b'\n' {
            break;
        }
    }
    Ok(())
}

/// A bounded run of non-whitespace bytes.
pub(crate) struct Token {
    buf: [u8; MAX_TOKEN_LEN],
    len: usize,
}

impl Token {
    fn new() -> Self {
        Self {
            buf: [0; MAX_TOKEN_LEN],
            len: 0,
        }
    }

    fn push(&mut self, b: u8) -> Result<(), PnmError> {
        if self.len == MAX_TOKEN_LEN {
            let mut partial = lossy(&self.buf);
            partial.push(char::from(b));
            return Err(PnmError::TokenTooLong(partial));
        }
        self.buf[self.len] = b;
        self.len += 1;
        Ok(())
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Parse as a non-negative base-10 integer. Ten digits always fit in u64.
    pub(crate) fn parse_decimal(&self) -> Result<u64, PnmError> {
        let bytes = self.as_bytes();
        if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(PnmError::NonDecimalHeaderValue(lossy(bytes)));
        }
        Ok(bytes
            .iter()
            .fold(0u64, |acc, &d| acc * 10 + u64::from(d - b'0')))
    }

    /// Parse as a decimal that must fit in u32.
    pub(crate) fn parse_u32(&self) -> Result<u32, PnmError> {
        let value = self.parse_decimal()?;
        u32::try_from(value).map_err(|_| PnmError::NonDecimalHeaderValue(lossy(self.as_bytes())))
    }
}

/// Skip whitespace and comments and return the first byte of the next
/// token, or `None` if input ends first.
pub(crate) fn skip_to_token<S: ByteSource>(src: &mut S) -> Result<Option<u8>, PnmError> {
    loop {
        match src.read_byte()? {
            None => return Ok(None),
            Some(b'#') => skip_comment(src)?,
            Some(b) if is_whitespace(b) => {}
            Some(b) => return Ok(Some(b)),
        }
    }
}

/// Read the next token, or `None` if input ends before one starts.
///
/// A comment inside a token is excised and the token continues after it,
/// so `12#note\n8` reads as `128`.
pub(crate) fn next_token<S: ByteSource>(src: &mut S) -> Result<Option<Token>, PnmError> {
    let Some(first) = skip_to_token(src)? else {
        return Ok(None);
    };
    let mut token = Token::new();
    token.push(first)?;
    loop {
        match src.read_byte()? {
            None => break,
            Some(b'#') => skip_comment(src)?,
            Some(b) if is_whitespace(b) => break,
            Some(b) => token.push(b)?,
        }
    }
    Ok(Some(token))
}

/// Read a numeric header field.
pub(crate) fn read_header_field<S: ByteSource>(src: &mut S) -> Result<u32, PnmError> {
    next_token(src)?
        .ok_or(PnmError::UnexpectedEndOfHeader)?
        .parse_u32()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pnm::cursor::SliceCursor;
    use alloc::vec::Vec;

    fn tokens(data: &[u8]) -> Result<Vec<u64>, PnmError> {
        let mut c = SliceCursor::new(data);
        let mut out = Vec::new();
        while let Some(t) = next_token(&mut c)? {
            out.push(t.parse_decimal()?);
        }
        Ok(out)
    }

    #[test]
    fn magic_stops_at_whitespace_or_eof() {
        let mut c = SliceCursor::new(b"P6\n1");
        assert_eq!(read_magic(&mut c).unwrap().as_bytes(), b"P6");
        assert_eq!(c.remaining(), b"1");

        let mut c = SliceCursor::new(b"P6");
        assert_eq!(read_magic(&mut c).unwrap().as_bytes(), b"P6");
    }

    #[test]
    fn magic_scan_is_capped() {
        let mut c = SliceCursor::new(b"PyInvalidMagic 1 1");
        let magic = read_magic(&mut c).unwrap();
        assert_eq!(magic.as_bytes(), b"PyInval");
    }

    #[test]
    fn ten_byte_token_ok_eleven_fails() {
        assert_eq!(tokens(b"0123456789").unwrap(), [123456789]);
        match tokens(b" 01234567891 ") {
            Err(PnmError::TokenTooLong(t)) => assert_eq!(t, "01234567891"),
            other => panic!("expected TokenTooLong, got {other:?}"),
        }
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(
            tokens(b" #comment\n#comment\r 12#comment\r8\n128 #c\n255").unwrap(),
            [128, 128, 255]
        );
    }

    #[test]
    fn long_comment_is_not_tokenized() {
        let mut data = b"7 #".to_vec();
        data.extend(core::iter::repeat_n(b'x', 100_000));
        data.extend_from_slice(b"\n9");
        assert_eq!(tokens(&data).unwrap(), [7, 9]);
    }

    #[test]
    fn unterminated_comment_is_eof() {
        let mut c = SliceCursor::new(b"  # no newline");
        assert!(next_token(&mut c).unwrap().is_none());
        let mut c = SliceCursor::new(b"  # no newline");
        assert!(matches!(
            read_header_field(&mut c),
            Err(PnmError::UnexpectedEndOfHeader)
        ));
    }

    #[test]
    fn non_decimal_tokens_rejected() {
        for bad in [&b"128\x00"[..], b"-1", b"+5", b"12a", b"0x10"] {
            let mut c = SliceCursor::new(bad);
            assert!(
                matches!(
                    read_header_field(&mut c),
                    Err(PnmError::NonDecimalHeaderValue(_))
                ),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn header_field_overflow() {
        let mut c = SliceCursor::new(b"4294967295 4294967296");
        assert_eq!(read_header_field(&mut c).unwrap(), u32::MAX);
        assert!(matches!(
            read_header_field(&mut c),
            Err(PnmError::NonDecimalHeaderValue(_))
        ));
    }
}
