//! Test corpus: hand-built plain and raw files, comment handling, and
//! malformed input.

use enough::Unstoppable;
use zenpnm::*;

/// A comment line far longer than any token.
fn long_comment() -> Vec<u8> {
    b"# veeery long comment".repeat(50_000)
}

fn expect_err(data: &[u8]) -> PnmError {
    match decode(data, Unstoppable) {
        Ok(out) => panic!("expected an error, decoded {}x{}", out.width, out.height),
        Err(e) => e,
    }
}

// ── Plain bitmap ─────────────────────────────────────────────────────

#[test]
fn plain_pbm_without_separators() {
    let decoded = decode(b"P1\n2 2\n\n1010", Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Bitmap);
    assert_eq!(decoded.magic, pnm::Magic::P1);
    // 1 is ink (0x00), 0 is paper (0xFF)
    assert_eq!(decoded.pixels(), &[0x00, 0xFF, 0x00, 0xFF]);
}

#[test]
fn plain_pbm_data_with_comments() {
    let plain = decode(b"P1\n2 2\n\n1010", Unstoppable).unwrap();

    let comment = long_comment();
    let mut commented = b"P1\n2 2\n".to_vec();
    commented.extend_from_slice(&comment);
    commented.extend_from_slice(b"\n1010");
    commented.extend_from_slice(&comment);

    let decoded = decode(&commented, Unstoppable).unwrap();
    assert_eq!(decoded.width, 2);
    assert_eq!(decoded.height, 2);
    assert_eq!(decoded.pixels(), plain.pixels());
}

#[test]
fn plain_pbm_matches_raw_pbm() {
    let plain = decode(b"P1\n# 10x2\n10 2\n1100000001\n0 0 1 1 1 1 1 1 0 0\n", Unstoppable).unwrap();
    let raw = decode(b"P4\n10 2\n\xC0\x40\x3F\x00", Unstoppable).unwrap();
    assert_eq!(plain.pixels(), raw.pixels());
}

#[test]
fn plain_pbm_truncated_data() {
    assert!(matches!(
        expect_err(b"P1\n128 128\n"),
        PnmError::TruncatedPixelData { actual: 0, .. }
    ));
}

#[test]
fn plain_pbm_invalid_data() {
    assert!(matches!(
        expect_err(b"P1\n128 128\n1009"),
        PnmError::ValueOutOfRange { value: 9, maxval: 1 }
    ));
    assert!(matches!(
        expect_err(b"P1\n2 1\n1x"),
        PnmError::NonDecimalHeaderValue(_)
    ));
}

// ── Plain graymap / pixmap ───────────────────────────────────────────

#[test]
fn plain_ppm_row_major() {
    let decoded = decode(b"P3\n2 2\n255\n0 0 0 1 1 1 2 2 2 255 255 255", Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Rgb8);
    assert_eq!(
        decoded.pixels(),
        &[0, 0, 0, 1, 1, 1, 2, 2, 2, 255, 255, 255]
    );
}

#[test]
fn plain_ppm_data_with_comments() {
    let plain = decode(
        b"P3\n2 2\n255\n0 0 0 001 1 1 2 2 2 255 255 255",
        Unstoppable,
    )
    .unwrap();

    let comment = long_comment();
    let mut commented = b"P3\n2 2\n255\n".to_vec();
    commented.extend_from_slice(&comment);
    commented.extend_from_slice(b"\n0 0 0 001 1 1 2 2 2 255 255 255");
    commented.extend_from_slice(&comment);

    let decoded = decode(&commented, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), plain.pixels());
}

#[test]
fn comments_between_every_token() {
    let decoded = decode(b"P2 #a\n3 #b\n1 #c\n9 #d\n1 #e\n2 #f\n3 #g", Unstoppable).unwrap();
    assert_eq!((decoded.width, decoded.height, decoded.maxval), (3, 1, 9));
    assert_eq!(decoded.pixels(), &[1, 2, 3]);
}

#[test]
fn comment_inside_token_is_excised() {
    // The comment splits the digits but not the token.
    let header = read_header(b"P2 3#b\n1 1 9 ").unwrap();
    assert_eq!((header.width, header.height, header.maxval), (31, 1, 9));
}

#[test]
fn plain_ppm_truncated_data() {
    assert!(matches!(
        expect_err(b"P3\n128 128\n255\n"),
        PnmError::TruncatedPixelData { .. }
    ));
    assert!(matches!(
        expect_err(b"P3\n1 1\n255\n1 2"),
        PnmError::TruncatedPixelData {
            needed: 3,
            actual: 2
        }
    ));
}

#[test]
fn plain_ppm_invalid_data() {
    assert!(matches!(
        expect_err(b"P3\n128 128\n255\n100A"),
        PnmError::NonDecimalHeaderValue(_)
    ));
}

#[test]
fn plain_ppm_half_token_too_long() {
    assert!(matches!(
        expect_err(b"P3\n128 128\n255\n012345678910"),
        PnmError::TokenTooLong(_)
    ));
}

#[test]
fn plain_ppm_token_too_long() {
    assert!(matches!(
        expect_err(b"P3\n128 128\n255\n012345678910 0"),
        PnmError::TokenTooLong(_)
    ));
}

#[test]
fn plain_ppm_value_too_large() {
    assert!(matches!(
        expect_err(b"P3\n128 128\n255\n256"),
        PnmError::ValueOutOfRange {
            value: 256,
            maxval: 255
        }
    ));
}

#[test]
fn plain_pgm_respects_small_maxval() {
    let decoded = decode(b"P2 2 1 15 15 0", Unstoppable).unwrap();
    assert_eq!(decoded.maxval, 15);
    assert_eq!(decoded.pixels(), &[15, 0]);
    assert!(matches!(
        expect_err(b"P2 2 1 15 15 16"),
        PnmError::ValueOutOfRange { value: 16, maxval: 15 }
    ));
}

#[test]
fn plain_pgm_16_and_32_bit() {
    let decoded = decode(b"P2\n2 1\n65535\n0 65535\n", Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Gray16);
    assert_eq!(
        decoded.gray16_samples().unwrap().collect::<Vec<_>>(),
        [0, 65535]
    );

    let decoded = decode(b"P2\n2 1\n4294967295\n4294967295 70000\n", Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Gray32);
    assert_eq!(
        decoded.gray32_samples().unwrap().collect::<Vec<_>>(),
        [u32::MAX, 70000]
    );
}

#[test]
fn extra_plain_tokens_are_ignored() {
    let decoded = decode(b"P2 1 1 255 7 8 9 garbage", Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[7]);
}

// ── Raw ──────────────────────────────────────────────────────────────

#[test]
fn raw_16bit_pgm_is_big_endian() {
    let mut file = b"P5\n3 1\n65535\n".to_vec();
    let raw = [0x00, 0x01, 0x12, 0x34, 0xFF, 0xFF];
    file.extend_from_slice(&raw);

    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Gray16);
    let expected: Vec<u16> = raw
        .chunks_exact(2)
        .map(|c| u16::from_be_bytes([c[0], c[1]]))
        .collect();
    assert_eq!(decoded.gray16_samples().unwrap().collect::<Vec<_>>(), expected);
}

#[test]
fn raw_32bit_pgm_is_big_endian() {
    let mut file = b"P5 1 1 100000 ".to_vec();
    file.extend_from_slice(&[0x00, 0x01, 0x86, 0xA0]);
    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!(decoded.layout, PixelLayout::Gray32);
    assert_eq!(decoded.gray32_samples().unwrap().next(), Some(100_000));
}

#[test]
fn raw_truncated() {
    assert!(matches!(
        expect_err(b"P6\n2 2\n255\n\x01\x02\x03"),
        PnmError::TruncatedPixelData {
            needed: 12,
            actual: 3
        }
    ));
    // Bitmap rows round up to whole bytes.
    assert!(matches!(
        expect_err(b"P4\n9 2\n\x00\x00\x00"),
        PnmError::TruncatedPixelData {
            needed: 4,
            actual: 3
        }
    ));
}

// ── Header ───────────────────────────────────────────────────────────

#[test]
fn header_with_comments() {
    let header = read_header(b"P6 #comment\n#comment\r 12#comment\r8\n128 #comment\n255\n").unwrap();
    assert_eq!(header.width, 128);
    assert_eq!(header.height, 128);
    assert_eq!(header.maxval, 255);
}

#[test]
fn header_comment_longer_than_token_cap() {
    let mut file = b"P5\n".to_vec();
    file.extend_from_slice(&long_comment());
    file.extend_from_slice(b"\n1 1 255 \x2A");
    let decoded = decode(&file, Unstoppable).unwrap();
    assert_eq!(decoded.pixels(), &[0x2A]);
}

#[test]
fn header_token_length_boundary() {
    // Ten bytes with leading zeros is fine.
    let header = read_header(b"P5 0000000002 0000000001 0000000255 ").unwrap();
    assert_eq!((header.width, header.height, header.maxval), (2, 1, 255));

    match read_header(b"P6\n 012345678910") {
        Err(PnmError::TokenTooLong(token)) => assert_eq!(token, "01234567891"),
        other => panic!("expected TokenTooLong, got {other:?}"),
    }
}

#[test]
fn nondecimal_header() {
    assert!(matches!(
        read_header(b"P6\n128\x00"),
        Err(PnmError::NonDecimalHeaderValue(_))
    ));
}

#[test]
fn negative_size_is_not_a_number() {
    assert!(matches!(
        read_header(b"P6\n-1 1\n255\n"),
        Err(PnmError::NonDecimalHeaderValue(_))
    ));
}

#[test]
fn zero_size_rejected() {
    assert!(matches!(
        read_header(b"P6\n0 1\n255\n"),
        Err(PnmError::InvalidHeader(_))
    ));
}

#[test]
fn too_many_colors() {
    assert!(matches!(
        read_header(b"P6\n1 1\n1000\n"),
        Err(PnmError::TooManyColorsForMode { maxval: 1000, mode: ColorMode::Rgb })
    ));
}

#[test]
fn truncated_header() {
    assert!(matches!(read_header(b"P6"), Err(PnmError::UnexpectedEndOfHeader)));
    assert!(matches!(read_header(b"P6 1 1"), Err(PnmError::UnexpectedEndOfHeader)));
    assert!(matches!(
        read_header(b"P6 1 1 # no maxval"),
        Err(PnmError::UnexpectedEndOfHeader)
    ));
}

#[test]
fn not_ppm() {
    assert!(sniff(b"PyInvalid"));
    assert!(matches!(
        expect_err(b"PyInvalid"),
        PnmError::NotARecognizedFormat(_)
    ));
    assert!(matches!(
        expect_err(b"Pz 1 1 255 "),
        PnmError::NotARecognizedFormat(_)
    ));
}

#[test]
fn mimetypes() {
    let info = ImageInfo::from_bytes(b"P4\n128 128\n255").unwrap();
    assert_eq!(info.mime_type, "image/x-portable-bitmap");

    let info = ImageInfo::from_bytes(b"PyCMYK\n128 128\n255").unwrap();
    assert_eq!(info.mime_type, pnm::FALLBACK_MIME_TYPE);
    assert_eq!(info.mime_type, "image/x-portable-anymap");
}
