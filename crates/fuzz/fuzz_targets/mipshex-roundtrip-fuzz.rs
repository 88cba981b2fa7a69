#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|word: u32| {
    let hex = mipshex_encode::to_hex(word);

    assert_eq!(mipshex::is_valid_hex(&hex), mipshex::translate_hex_to_mips(&hex).is_ok());

    let Ok(mips) = mipshex::translate_hex_to_mips(&hex) else {
        return;
    };

    assert!(mipshex::is_valid_mips(&mips), "`{mips}` ({hex}) doesn't parse");

    let instruction = mipshex_decode::instruction(word).unwrap();
    assert_eq!(mipshex_encode::instruction(&instruction), Ok(word));

    assert_eq!(mipshex::translate_mips_to_hex(&mips).as_deref(), Ok(hex.as_str()));
});
