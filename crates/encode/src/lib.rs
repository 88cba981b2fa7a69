#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::match_bool
)]

use core::fmt;

use mipshex_core::instruction::{self, Instruction};
use mipshex_core::{Format, Mnemonic, Register};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EncodeError {
    /// the mnemonic's table entry has a different format than the instruction carrying it.
    FormatMismatch { mnemonic: Mnemonic, format: Format },
    /// an immediate doesn't fit in its field.
    ImmediateOutOfRange { mnemonic: Mnemonic, value: i64, bits: u8 },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FormatMismatch { mnemonic, format } => write!(
                f,
                "`{mnemonic}` is a {} instruction, not {format}",
                mnemonic.format()
            ),
            Self::ImmediateOutOfRange { mnemonic, value, bits } => {
                write!(f, "immediate {value} doesn't fit in the {bits}bit field of `{mnemonic}`")
            }
        }
    }
}

impl std::error::Error for EncodeError {}

#[inline]
const fn encode_register(register: Register) -> u32 {
    register.get() as u32
}

#[must_use]
fn encode_rs(rs1: Register, rs2: Register) -> u32 {
    let rs1 = encode_register(rs1) << 15;
    let rs2 = encode_register(rs2) << 20;

    rs1 | rs2
}

#[must_use]
fn encode_rd(rd: Register) -> u32 {
    encode_register(rd) << 7
}

#[inline]
fn signed_truncate<const BITS: u8>(mnemonic: Mnemonic, imm: i32) -> Result<u32, EncodeError> {
    debug_assert!(BITS > 0 && BITS < 32);

    // truncate from 32 bits to BITS, erroring if that would change the value.
    let min = -(1_i32 << (BITS - 1));
    let max = (1_i32 << (BITS - 1)) - 1;

    if !(min..=max).contains(&imm) {
        return Err(EncodeError::ImmediateOutOfRange { mnemonic, value: imm.into(), bits: BITS });
    }

    let mask = u32::MAX.wrapping_shr(u32::BITS - u32::from(BITS));

    Ok(imm as u32 & mask)
}

#[inline]
fn unsigned_truncate<const BITS: u8>(mnemonic: Mnemonic, imm: u32) -> Result<u32, EncodeError> {
    debug_assert!(BITS > 0 && BITS < 32);

    let mask = u32::MAX.wrapping_shr(u32::BITS - u32::from(BITS));

    match imm & mask == imm {
        true => Ok(imm),
        false => {
            Err(EncodeError::ImmediateOutOfRange { mnemonic, value: imm.into(), bits: BITS })
        }
    }
}

fn i_32(regs: u32, mnemonic: Mnemonic, imm: i16) -> Result<u32, EncodeError> {
    let imm = signed_truncate::<12>(mnemonic, imm.into())? << 20;

    Ok(regs | imm)
}

/// Packs `instruction` into a word.
///
/// # Errors
/// If the mnemonic doesn't belong to the instruction's format, or if an
/// immediate doesn't fit. Neither can happen for instructions produced by
/// the parser or the decoder.
pub fn instruction(instruction: &Instruction) -> Result<u32, EncodeError> {
    let mnemonic = instruction.mnemonic();
    let entry = mnemonic.entry();

    if entry.format != instruction.format() {
        return Err(EncodeError::FormatMismatch { mnemonic, format: instruction.format() });
    }

    let operands = match *instruction {
        Instruction::R(instruction::R { rd, rs1, rs2, .. }) => {
            encode_rs(rs1, rs2) | encode_rd(rd)
        }

        Instruction::I(instruction::I { imm, rs1, rd, .. })
        | Instruction::Load(instruction::Load { imm, rs1, rd, .. })
        | Instruction::IJump(instruction::IJump { imm, rs1, rd, .. }) => {
            let regs = encode_rs(rs1, Register::ZERO) | encode_rd(rd);

            i_32(regs, mnemonic, imm)?
        }

        Instruction::IShift(instruction::IShift { shamt, rs1, rd, .. }) => {
            let regs = encode_rs(rs1, Register::ZERO) | encode_rd(rd);

            // the upper 7 bits of the immediate are funct7, which comes from the table.
            let shamt = unsigned_truncate::<5>(mnemonic, shamt.into())? << 20;

            regs | shamt
        }

        Instruction::S(instruction::S { imm, rs1, rs2, .. }) => {
            let regs = encode_rs(rs1, rs2);

            let imm = signed_truncate::<12>(mnemonic, imm.into())?;
            let imm = ((imm & !0b1_1111) << 20) | ((imm & 0b1_1111) << 7);

            regs | imm
        }

        Instruction::B(instruction::B { rs1, rs2, imm, .. }) => {
            let regs = encode_rs(rs1, rs2);

            // halfwords -> 13 bit byte offset (bit 0 is always zero)
            let imm = signed_truncate::<12>(mnemonic, imm.into())? << 1;

            let imm = ((imm & 0b0001_0000_0000_0000) << 19)
                | ((imm & 0b0000_0111_1110_0000) << 20)
                | ((imm & 0b0000_1000_0000_0000) >> 4)
                | ((imm & 0b0000_0000_0001_1110) << 7);

            regs | imm
        }

        Instruction::J(instruction::J { imm, rd, .. }) => {
            let regs = encode_rd(rd);

            let imm = signed_truncate::<20>(mnemonic, imm)? << 1;

            // 000a_dddd_dddd_cbbb_bbbb_bbb0 -> abbb_bbbb_bbbc_dddd_dddd_xxxx_xxxx_xxxx
            let imm = ((imm & 0b0001_0000_0000_0000_0000_0000) << 11)
                | ((imm & 0b0000_0000_0000_0111_1111_1110) << 20)
                | ((imm & 0b0000_0000_0000_1000_0000_0000) << 9)
                | (imm & 0b0000_1111_1111_0000_0000_0000);

            regs | imm
        }

        Instruction::U(instruction::U { imm, rd, .. }) => {
            let regs = encode_rd(rd);

            let imm = unsigned_truncate::<20>(mnemonic, imm)?;

            (imm << 12) | regs
        }
    };

    Ok(operands | entry.bits())
}

/// Canonical text of a word: 8 lowercase, zero padded hex digits.
#[must_use]
pub fn to_hex(word: u32) -> String {
    format!("{word:08x}")
}
