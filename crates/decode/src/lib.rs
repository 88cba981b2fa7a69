#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::match_bool
)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

use alloc::string::{String, ToString};

use mipshex_core::instruction::{self, Instruction};
use mipshex_core::{Format, Register, opcode};

mod error;
mod imm;
pub use error::{DecodeError, FormatError};

#[inline]
const fn decode_register(instruction: u32) -> Register {
    Register::from_bits(instruction)
}

#[must_use]
fn decode_rs(instruction: u32) -> (Register, Register) {
    let rs1 = decode_register(instruction >> 15);
    let rs2 = decode_register(instruction >> 20);
    (rs1, rs2)
}

#[must_use]
fn decode_rd(instruction: u32) -> Register {
    decode_register(instruction >> 7)
}

#[must_use]
const fn sign_extend(value: u16, data_bits: u8) -> i16 {
    let mask = u16::BITS - (data_bits as u32);
    ((value << mask) as i16) >> mask
}

#[must_use]
const fn sign_extend_32(value: u32, data_bits: u8) -> i32 {
    let mask = u32::BITS - (data_bits as u32);
    ((value << mask) as i32) >> mask
}

/// Parses a word written as exactly 8 hex digits, in either case.
///
/// # Errors
/// [`DecodeError::Format`] if `text` contains anything but hex digits, or
/// has the wrong number of them.
pub fn parse_hex(text: &str) -> Result<u32, DecodeError> {
    let mut word = 0_u32;
    let mut len = 0;

    for (index, found) in text.char_indices() {
        let Some(digit) = found.to_digit(16) else {
            return Err(FormatError::NonHex { index, found }.into());
        };

        word = (word << 4) | digit;
        len += 1;
    }

    match len {
        8 => Ok(word),
        _ => Err(FormatError::Length(len).into()),
    }
}

/// Splits `instruction` into its fields according to the opcode table.
///
/// # Errors
/// [`DecodeError::UnknownEncoding`] if no table entry matches the word.
pub fn instruction(instruction: u32) -> Result<Instruction, DecodeError> {
    let entry =
        opcode::lookup_by_bits(instruction).ok_or(DecodeError::UnknownEncoding(instruction))?;

    let mnemonic = entry.mnemonic;
    let (rs1, rs2) = decode_rs(instruction);
    let rd = decode_rd(instruction);

    Ok(match entry.format {
        Format::R => instruction::R::new(rd, rs1, rs2, mnemonic).into(),
        Format::I => instruction::I::new(imm::i(instruction), rs1, rd, mnemonic).into(),
        Format::IShift => {
            instruction::IShift::new(imm::shamt(instruction), rs1, rd, mnemonic).into()
        }
        Format::Load => instruction::Load::new(imm::i(instruction), rs1, rd, mnemonic).into(),
        Format::S => instruction::S::new(imm::s(instruction), rs1, rs2, mnemonic).into(),
        Format::B => instruction::B::new(imm::b(instruction), rs1, rs2, mnemonic).into(),
        Format::J => instruction::J::new(imm::j(instruction), rd, mnemonic).into(),
        Format::IJump => instruction::IJump::new(imm::i(instruction), rs1, rd, mnemonic).into(),
        Format::U => instruction::U::new(imm::u(instruction), rd, mnemonic).into(),
    })
}

/// Decodes `word` into its canonical text form.
///
/// # Errors
/// See [`instruction`].
pub fn disassemble(word: u32) -> Result<String, DecodeError> {
    instruction(word).map(|it| it.to_string())
}

/// [`parse_hex`] followed by [`disassemble`].
///
/// # Errors
/// See [`parse_hex`] and [`instruction`].
pub fn hex_to_text(text: &str) -> Result<String, DecodeError> {
    disassemble(parse_hex(text)?)
}

#[cfg(test)]
mod tests;
