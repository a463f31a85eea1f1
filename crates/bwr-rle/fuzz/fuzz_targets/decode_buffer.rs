#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // fuzzed code goes here

    if data.len() < 2 {
        return;
    }
    let width = usize::from(data[0]);
    let height = usize::from(data[1]);

    let decoder = bwr_rle::BwrRleDecoder::new(&data[2..], width, height);
    let _ = decoder.decode();
});
