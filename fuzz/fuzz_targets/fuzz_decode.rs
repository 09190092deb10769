#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenpnm::read_header(data);
    let _ = zenpnm::decode(data, enough::Unstoppable);

    // The reader path must agree with the in-memory path
    let mut reader = data;
    let streamed = zenpnm::decode_reader(&mut reader, None, enough::Unstoppable);
    if let (Ok(a), Ok(b)) = (zenpnm::decode(data, enough::Unstoppable), streamed) {
        assert_eq!(a.pixels(), b.pixels());
    }
});
