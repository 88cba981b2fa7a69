#![no_main]

use std::hint::black_box;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let output = mipshex_asm::parse_lines(data);

    for instruction in output.instructions {
        // anything the parser accepts has to encode.
        let word = mipshex_encode::instruction(&instruction).unwrap();
        black_box(word);
    }

    black_box(output.errors);
});
