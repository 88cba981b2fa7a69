use std::fmt::Write;

use expect_test::expect;
use mipshex_asm::ParseError;
use mipshex_core::opcode::TABLE;
use mipshex_decode::{DecodeError, FormatError};

use crate::{
    BatchEntry, Direction, TranslateError, TranslationPair, detect, import_pairs, is_valid_hex,
    is_valid_mips, memory_image, template, translate, translate_batch, translate_hex_to_mips,
    translate_mips_to_hex,
};

#[track_caller]
fn assert_roundtrip(mips: &str, hex: &str) {
    assert_eq!(translate_mips_to_hex(mips).as_deref(), Ok(hex), "assembling `{mips}`");
    assert_eq!(translate_hex_to_mips(hex).as_deref(), Ok(mips), "disassembling `{hex}`");
}

#[test]
fn register_arithmetic() {
    assert_roundtrip("add $t1 $t2 $t3", "01c38333");
}

#[test]
fn immediate_arithmetic() {
    assert_roundtrip("addi $t1 $t2 10", "00a38313");
}

#[test]
fn load() {
    assert_roundtrip("lw $t1 0($t2)", "0003a303");
}

#[test]
fn branch() {
    assert_roundtrip("beq $t1 $t2 8", "00730863");
}

#[test]
fn unknown_mnemonic() {
    assert!(!is_valid_mips("foo $t1 $t2"));
    assert_eq!(
        translate_mips_to_hex("foo $t1 $t2"),
        Err(TranslateError::Parse(ParseError::UnknownMnemonic("foo".to_owned())))
    );
}

#[test]
fn non_hex_digit() {
    assert!(!is_valid_hex("12G45678"));
    assert_eq!(
        translate_hex_to_mips("12G45678"),
        Err(TranslateError::Decode(DecodeError::Format(FormatError::NonHex {
            index: 2,
            found: 'G'
        })))
    );
}

#[test]
fn boundaries() {
    assert_roundtrip("addi $t1 $t2 -2048", "80038313");
    assert_roundtrip("addi $t1 $t2 2047", "7ff38313");
    assert_roundtrip("slli $t1 $t2 31", "01f39313");
    assert_roundtrip("sw $t1 -4($t2)", "fe63ae23");
    assert_roundtrip("beq $zero $zero -1", "fe000fe3");
    assert_roundtrip("bne $zero $zero -2048", "80001063");
    assert_roundtrip("jal $ra 16", "020000ef");
    assert_roundtrip("jal $zero -1", "fffff06f");
    assert_roundtrip("lui $t1 1024", "00400337");
    assert_roundtrip("auipc $t1 1048575", "fffff317");

    for text in
        ["addi $t1 $t2 2048", "addi $t1 $t2 -2049", "beq $t1 $t2 2048", "jal $t1 524288"]
    {
        assert!(
            matches!(
                translate_mips_to_hex(text),
                Err(TranslateError::Parse(ParseError::OutOfRange { .. }))
            ),
            "`{text}` should be out of range"
        );
    }
}

#[test]
fn input_is_trimmed() {
    assert_eq!(translate_mips_to_hex("  add $t1 $t2 $t3\n").as_deref(), Ok("01c38333"));
    assert_eq!(translate_hex_to_mips(" 01C38333 ").as_deref(), Ok("add $t1 $t2 $t3"));
}

#[test]
fn one_instruction_per_call() {
    assert!(!is_valid_mips("add $t1\n$t2 $t3"));
    assert_eq!(
        translate_mips_to_hex("add $t1\n$t2 $t3"),
        Err(TranslateError::Parse(ParseError::LineBreak))
    );
}

#[test]
fn validators_agree_with_translation() {
    let inputs = [
        "add $t1 $t2 $t3",
        "ADD $t1, $t2, $t3",
        "add $t1 $t2",
        "addi $t1 $t2 4096",
        "lw $t1 0($t2)",
        "lw $t1 0 $t2",
        "add $t1\n$t2 $t3",
        "jal $t1 16",
        "",
        "   ",
        "01c38333",
        "01C38333",
        "00000000",
        "ffffffff",
        "0x01c38333",
        "1c38333",
        "12G45678",
        "deadbeef",
    ];

    for input in inputs {
        assert_eq!(is_valid_mips(input), translate_mips_to_hex(input).is_ok(), "{input:?}");
        assert_eq!(is_valid_hex(input), translate_hex_to_mips(input).is_ok(), "{input:?}");
    }
}

#[test]
fn hex_must_decode() {
    // syntactically fine, but not an instruction.
    assert!(!is_valid_hex("00000000"));
    assert_eq!(
        translate_hex_to_mips("00000000"),
        Err(TranslateError::Decode(DecodeError::UnknownEncoding(0)))
    );
}

#[test]
fn detection() {
    assert_eq!(detect("01c38333"), Some(Direction::HexToMips));
    assert_eq!(detect("add $t1 $t2 $t3"), Some(Direction::MipsToHex));
    assert_eq!(detect("add $t1"), None);
    assert_eq!(detect("00000000"), None);

    assert_eq!(Direction::guess("00000000"), Direction::HexToMips);
    assert_eq!(Direction::guess("add $t1"), Direction::MipsToHex);
    assert_eq!(Direction::guess(""), Direction::MipsToHex);
}

#[test]
fn auto_translate() {
    let pair = TranslationPair { mips: "lui $t1 1024".to_owned(), hex: "00400337".to_owned() };

    assert_eq!(translate("lui $t1 1024"), Ok(pair.clone()));
    assert_eq!(translate("00400337"), Ok(pair.clone()));
    assert_eq!(
        translate("00400337").map(|it| it.output(Direction::HexToMips).to_owned()),
        Ok(pair.mips)
    );

    assert!(matches!(translate("00000000"), Err(TranslateError::Decode(_))));
    assert!(matches!(translate("lui $t1"), Err(TranslateError::Parse(_))));
}

#[test]
fn every_template_is_valid() {
    for entry in &TABLE {
        let text = template(entry.mnemonic.as_str()).unwrap();

        let hex = translate_mips_to_hex(&text)
            .unwrap_or_else(|e| panic!("template `{text}` failed: {e}"));

        assert_eq!(translate_hex_to_mips(&hex), Ok(text));
    }

    assert_eq!(template("foo"), None);
}

#[test]
fn templates() {
    let mut output = String::new();
    for name in ["add", "addi", "slli", "lw", "sb", "bgeu", "jal", "jalr", "auipc"] {
        writeln!(&mut output, "{}", template(name).unwrap()).unwrap();
    }

    expect![[r#"
        add $t1 $t2 $t3
        addi $t1 $t2 10
        slli $t1 $t2 2
        lw $t1 0($t2)
        sb $t1 0($t2)
        bgeu $t1 $t2 8
        jal $t1 16
        jalr $t1 0($t2)
        auipc $t1 1024
    "#]]
    .assert_eq(&output);
}

fn print_batch(entries: &[BatchEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        match &entry.result {
            Ok(pair) => writeln!(&mut output, "{}: [{}] {pair}", entry.line, entry.direction),
            Err(e) => writeln!(&mut output, "{}: [{}] error: {e}", entry.line, entry.direction),
        }
        .unwrap();
    }

    output
}

#[test]
fn batch_auto() {
    let input = r#"
add $t1 $t2 $t3
00A38313
; a comment

lw $t1 0($t2) # trailing
00000000
add $t1
beq $t1 $t2 8
"#;

    expect![[r#"
        2: [mips -> hex] add $t1 $t2 $t3	01c38333
        3: [hex -> mips] addi $t1 $t2 10	00a38313
        6: [mips -> hex] lw $t1 0($t2)	0003a303
        7: [hex -> mips] error: unknown instruction encoding `00000000`
        8: [mips -> hex] error: Expected 3 argument(s) for `add`, found `1`
        9: [mips -> hex] beq $t1 $t2 8	00730863
    "#]]
    .assert_eq(&print_batch(&translate_batch(input, None)));
}

#[test]
fn batch_forced_direction() {
    let entries = translate_batch("01c38333\nadd $t1 $t2 $t3", Some(Direction::HexToMips));

    assert_eq!(entries.len(), 2);
    assert!(entries[0].result.is_ok());
    assert!(matches!(entries[1].result, Err(TranslateError::Decode(DecodeError::Format(_)))));
}

#[test]
fn batch_keeps_order() {
    let lines: Vec<String> = (0..2048).map(|imm| format!("addi $a0 $zero {imm}")).collect();
    let entries = translate_batch(&lines.join("\n"), Some(Direction::MipsToHex));

    assert_eq!(entries.len(), lines.len());
    for (idx, (entry, text)) in entries.iter().zip(&lines).enumerate() {
        assert_eq!(entry.line, idx + 1);
        assert_eq!(entry.result.as_ref().map(|it| it.mips.as_str()), Ok(text.as_str()));
    }
}

#[test]
fn pairs_import() {
    let pairs = import_pairs("01c38333\r\n00a38313\n0003a303", "add $t1 $t2 $t3\naddi $t1 $t2 10");

    expect![[r#"
        [
            TranslationPair {
                mips: "add $t1 $t2 $t3",
                hex: "01c38333",
            },
            TranslationPair {
                mips: "addi $t1 $t2 10",
                hex: "00a38313",
            },
            TranslationPair {
                mips: "",
                hex: "0003a303",
            },
        ]
    "#]]
    .assert_debug_eq(&pairs);

    assert_eq!(memory_image(&pairs), "01c38333\n00a38313\n0003a303\n");
    assert_eq!(memory_image(&[]), "");
}
