use mipshex_core::instruction::Instruction;
use mipshex_core::{Format, Mnemonic, Register};

use crate::error::{LineError, ParseError};

mod instruction;


#[derive(Debug, Default)]
pub struct ParseOutput {
    pub instructions: Vec<Instruction>,
    pub errors: Vec<LineError>,
}

/// Drops a trailing `;` or `#` comment.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.split_once([';', '#']).map_or(line, |(line, _comment)| line)
}

/// Parses every line of `input`, skipping blank lines and comments.
///
/// Unlike [`parse`] this doesn't stop at the first bad line, every error is
/// collected along with its line number.
#[must_use]
pub fn parse_lines(input: &str) -> ParseOutput {
    let mut output = ParseOutput::default();

    for (idx, line) in input.lines().enumerate() {
        let line = strip_comment(line).trim();

        if line.is_empty() {
            continue;
        }

        match parse(line) {
            Ok(instruction) => output.instructions.push(instruction),
            Err(error) => output.errors.push(LineError { line: idx + 1, error }),
        }
    }

    output
}

/// Parses a single instruction such as `addi $t1 $t2 10`.
///
/// Operands are separated by spaces or tabs, commas are accepted as well.
///
/// # Errors
/// If `line` contains a line break, the mnemonic is unknown, the operand
/// count is wrong, or any operand doesn't resolve. Nothing is returned for a
/// partially valid line.
pub fn parse(line: &str) -> Result<Instruction, ParseError> {
    if line.contains(['\n', '\r']) {
        return Err(ParseError::LineBreak);
    }

    let mut tokens = line.split(|c: char| c.is_whitespace() || c == ',').filter(|it| !it.is_empty());

    let op = tokens.next().ok_or(ParseError::Empty)?;

    let mnemonic =
        Mnemonic::from_name(op).ok_or_else(|| ParseError::UnknownMnemonic(op.to_owned()))?;

    let args: Vec<_> = tokens.collect();

    match mnemonic.format() {
        Format::R => instruction::r_32(mnemonic, &args),
        Format::I => instruction::i_32(mnemonic, &args),
        Format::IShift => instruction::shift_32(mnemonic, &args),
        Format::Load => instruction::load_32(mnemonic, &args),
        Format::S => instruction::s_32(mnemonic, &args),
        Format::B => instruction::b_32(mnemonic, &args),
        Format::J => instruction::j_32(mnemonic, &args),
        Format::IJump => instruction::ijump_32(mnemonic, &args),
        Format::U => instruction::u_32(mnemonic, &args),
    }
}

fn test_len(mnemonic: Mnemonic, expected: usize, args: &[&str]) -> Result<(), ParseError> {
    match args.len() == expected {
        true => Ok(()),
        false => Err(ParseError::ArgCount { mnemonic, expected, found: args.len() }),
    }
}

fn integer_register(register: &str) -> Result<Register, ParseError> {
    Register::from_name(register).ok_or_else(|| ParseError::UnknownRegister(register.to_owned()))
}

/// Parses an integer literal, returning it widened so that nothing a user can
/// type wraps around before the range check.
fn parse_immediate(src: &str) -> Result<i128, ParseError> {
    fn parse_lit(src: &str) -> Option<u64> {
        let (src, base) = if let Some(src) = src.strip_prefix("0x") {
            (src, 16)
        } else if let Some(src) = src.strip_prefix("0o") {
            (src, 8)
        } else if let Some(src) = src.strip_prefix("0b") {
            (src, 2)
        } else {
            (src, 10)
        };

        if src.is_empty() || !src.chars().all(|c| c.is_digit(base)) {
            return None;
        }

        // only overflow is left, saturating keeps it out of every range.
        Some(u64::from_str_radix(src, base).unwrap_or(u64::MAX))
    }

    let (lit, negative) = match src.strip_prefix('-') {
        Some(lit) => (lit, true),
        None => (src, false),
    };

    let value = i128::from(parse_lit(lit).ok_or_else(|| ParseError::InvalidNumber(src.to_owned()))?);

    match negative {
        true => Ok(-value),
        false => Ok(value),
    }
}

fn in_range(src: &str, min: i64, max: i64) -> Result<i64, ParseError> {
    let value = parse_immediate(src)?;

    match i128::from(min) <= value && value <= i128::from(max) {
        true => Ok(value as i64),
        false => Err(ParseError::OutOfRange { literal: src.to_owned(), min, max }),
    }
}

/// A two's complement immediate of `bits` bits.
fn parse_imm_signed(src: &str, bits: u8) -> Result<i32, ParseError> {
    let max = (1_i64 << (bits - 1)) - 1;
    let min = -(1_i64 << (bits - 1));

    in_range(src, min, max).map(|it| it as i32)
}

fn parse_imm_unsigned(src: &str, bits: u8) -> Result<u32, ParseError> {
    let max = (1_i64 << bits) - 1;

    in_range(src, 0, max).map(|it| it as u32)
}
