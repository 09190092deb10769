#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // Plain formats
    fs::write(format!("{dir}/p1_2x2.pbm"), b"P1\n2 2\n\n1010").unwrap();
    fs::write(format!("{dir}/p2_3x1.pgm"), b"P2\n3 1\n255\n0 128 255\n").unwrap();
    fs::write(
        format!("{dir}/p3_2x2.ppm"),
        b"P3\n2 2\n255\n0 0 0 1 1 1 2 2 2 255 255 255",
    )
    .unwrap();

    // Raw formats
    fs::write(format!("{dir}/p4_9x1.pbm"), b"P4\n9 1\n\x90\x80").unwrap();
    fs::write(format!("{dir}/p5_3x2.pgm"), b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64").unwrap();
    fs::write(format!("{dir}/p5_16bit.pgm"), b"P5\n2 1\n65535\n\x12\x34\xff\xff").unwrap();
    fs::write(
        format!("{dir}/p6_2x2.ppm"),
        b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80",
    )
    .unwrap();
    fs::write(format!("{dir}/p0cmyk_1x1.bin"), b"P0CMYK 1 1 255 \x01\x02\x03\x04").unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/comment_eof.bin"), b"P6 # no newline").unwrap();
    fs::write(format!("{dir}/long_token.bin"), b"P6\n 012345678910").unwrap();
    fs::write(format!("{dir}/too_many_colors.bin"), b"P6\n1 1\n1000\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
