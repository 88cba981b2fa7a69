use mipshex_core::{Format, Mnemonic};

/// Sample text for `mnemonic` with placeholder operands, as offered by an
/// instruction picker. Every template is a valid instruction.
#[must_use]
pub fn template(mnemonic: &str) -> Option<String> {
    let mnemonic = Mnemonic::from_name(mnemonic)?;

    let operands = match mnemonic.format() {
        Format::R => "$t1 $t2 $t3",
        Format::I => "$t1 $t2 10",
        Format::IShift => "$t1 $t2 2",
        Format::Load | Format::S | Format::IJump => "$t1 0($t2)",
        Format::B => "$t1 $t2 8",
        Format::J => "$t1 16",
        Format::U => "$t1 1024",
    };

    Some(format!("{mnemonic} {operands}"))
}
