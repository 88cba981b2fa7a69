extern crate std;

use std::fmt::Write;
use std::string::String;

use expect_test::expect;
use mipshex_core::Mnemonic;

use crate::{DecodeError, FormatError};

fn print_words(words: &[u32]) -> String {
    let mut output = String::new();
    for &word in words {
        match crate::disassemble(word) {
            Ok(text) => writeln!(&mut output, "{word:08x}: {text}").unwrap(),
            Err(e) => writeln!(&mut output, "{word:08x}: error: {e}").unwrap(),
        }
    }

    output
}

#[test]
fn known_words() {
    let words = [
        0x01c3_8333,
        0x41c3_8333,
        0x00a3_8313,
        0xfff0_0513,
        0x4033_d313,
        0x0003_a303,
        0xfe63_ae23,
        0x0073_0863,
        0xfe00_0fe3,
        0x8000_1063,
        0x0200_00ef,
        0xffff_f06f,
        0x0003_8367,
        0x0040_0337,
        0xffff_f317,
    ];

    expect![[r#"
        01c38333: add $t1 $t2 $t3
        41c38333: sub $t1 $t2 $t3
        00a38313: addi $t1 $t2 10
        fff00513: addi $a0 $zero -1
        4033d313: srai $t1 $t2 3
        0003a303: lw $t1 0($t2)
        fe63ae23: sw $t1 -4($t2)
        00730863: beq $t1 $t2 8
        fe000fe3: beq $zero $zero -1
        80001063: bne $zero $zero -2048
        020000ef: jal $ra 16
        fffff06f: jal $zero -1
        00038367: jalr $t1 0($t2)
        00400337: lui $t1 1024
        fffff317: auipc $t1 1048575
    "#]]
    .assert_eq(&print_words(&words));
}

#[test]
fn unknown_words() {
    let words = [
        0x0000_0000,
        0xffff_ffff,
        // fence
        0x0ff0_000f,
        // ecall
        0x0000_0073,
        // mul
        0x0273_8333,
        // slli with a non zero funct7
        0x0213_9313,
    ];

    expect![[r#"
        00000000: error: unknown instruction encoding `00000000`
        ffffffff: error: unknown instruction encoding `ffffffff`
        0ff0000f: error: unknown instruction encoding `0ff0000f`
        00000073: error: unknown instruction encoding `00000073`
        02738333: error: unknown instruction encoding `02738333`
        02139313: error: unknown instruction encoding `02139313`
    "#]]
    .assert_eq(&print_words(&words));
}

#[test]
fn shift_amount_ignores_funct7() {
    let srai = crate::instruction(0x41f3_d313).unwrap();

    assert_eq!(srai.mnemonic(), Mnemonic::SRAI);
    assert_eq!(std::format!("{srai}"), "srai $t1 $t2 31");
}

#[test]
fn parse_hex() {
    assert_eq!(crate::parse_hex("01c38333"), Ok(0x01c3_8333));
    assert_eq!(crate::parse_hex("FE000FE3"), Ok(0xfe00_0fe3));
    assert_eq!(crate::parse_hex("Fe000fE3"), Ok(0xfe00_0fe3));

    assert_eq!(
        crate::parse_hex("12G45678"),
        Err(DecodeError::Format(FormatError::NonHex { index: 2, found: 'G' }))
    );
    assert_eq!(
        crate::parse_hex("0x1c38333"),
        Err(DecodeError::Format(FormatError::NonHex { index: 1, found: 'x' }))
    );
    // everything before the first bad character is an ASCII digit, so this is also the char index.
    assert_eq!(
        crate::parse_hex("12é45678"),
        Err(DecodeError::Format(FormatError::NonHex { index: 2, found: 'é' }))
    );
    assert_eq!(
        crate::parse_hex("€€345678"),
        Err(DecodeError::Format(FormatError::NonHex { index: 0, found: '€' }))
    );
    assert_eq!(crate::parse_hex(""), Err(DecodeError::Format(FormatError::Length(0))));
    assert_eq!(crate::parse_hex("1c38333"), Err(DecodeError::Format(FormatError::Length(7))));
    assert_eq!(crate::parse_hex("001c38333"), Err(DecodeError::Format(FormatError::Length(9))));
}

#[test]
fn hex_to_text() {
    assert_eq!(crate::hex_to_text("0003A303").as_deref(), Ok("lw $t1 0($t2)"));
    assert_eq!(crate::hex_to_text("00000000"), Err(DecodeError::UnknownEncoding(0)));
}
