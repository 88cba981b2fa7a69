use mipshex_core::instruction::{self, Instruction};
use mipshex_core::{Mnemonic, Register};

use super::{integer_register, parse_imm_signed, parse_imm_unsigned, test_len};
use crate::error::ParseError;

pub(super) fn r_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    test_len(op, 3, args)?;

    let rd = integer_register(args[0])?;
    let rs1 = integer_register(args[1])?;
    let rs2 = integer_register(args[2])?;

    Ok(instruction::R::new(rd, rs1, rs2, op).into())
}

pub(super) fn i_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let ([rd, rs1], imm) = rri_args(op, args, |src| parse_imm_signed(src, 12))?;

    Ok(instruction::I::new(imm as i16, rs1, rd, op).into())
}

pub(super) fn shift_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let ([rd, rs1], shamt) = rri_args(op, args, |src| parse_imm_unsigned(src, 5))?;

    Ok(instruction::IShift::new(shamt as u8, rs1, rd, op).into())
}

pub(super) fn b_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    // the offset counts halfwords, the encoder does the `<< 1`.
    let ([rs1, rs2], imm) = rri_args(op, args, |src| parse_imm_signed(src, 12))?;

    Ok(instruction::B::new(imm as i16, rs1, rs2, op).into())
}

fn rri_args<T>(
    op: Mnemonic,
    args: &[&str],
    imm: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<([Register; 2], T), ParseError> {
    test_len(op, 3, args)?;

    let r1 = integer_register(args[0])?;
    let r2 = integer_register(args[1])?;
    let imm = imm(args[2])?;

    Ok(([r1, r2], imm))
}

pub(super) fn load_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let (rd, imm, rs1) = rir_args(op, args)?;

    Ok(instruction::Load::new(imm, rs1, rd, op).into())
}

pub(super) fn ijump_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let (rd, imm, rs1) = rir_args(op, args)?;

    Ok(instruction::IJump::new(imm, rs1, rd, op).into())
}

pub(super) fn s_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let (rs2, imm, rs1) = rir_args(op, args)?;

    Ok(instruction::S::new(imm, rs1, rs2, op).into())
}

fn split_offset_index(arg: &str) -> Result<(&str, &str), ParseError> {
    arg.split_once('(')
        .and_then(|(imm, r)| r.strip_suffix(')').map(|r| (imm, r)))
        .ok_or_else(|| ParseError::MalformedOffset(arg.to_owned()))
}

/// `r1 offset(index)` with a 12 bit signed offset.
fn rir_args(op: Mnemonic, args: &[&str]) -> Result<(Register, i16, Register), ParseError> {
    test_len(op, 2, args)?;

    let r1 = integer_register(args[0])?;

    let (offset, index) = split_offset_index(args[1])?;

    let offset = parse_imm_signed(offset, 12)?;
    let index = integer_register(index)?;

    Ok((r1, offset as i16, index))
}

pub(super) fn j_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    // the offset counts halfwords, the encoder does the `<< 1`.
    let (rd, imm) = ri_args(op, args, |src| parse_imm_signed(src, 20))?;

    Ok(instruction::J::new(imm, rd, op).into())
}

pub(super) fn u_32(op: Mnemonic, args: &[&str]) -> Result<Instruction, ParseError> {
    let (rd, imm) = ri_args(op, args, |src| parse_imm_unsigned(src, 20))?;

    Ok(instruction::U::new(imm, rd, op).into())
}

fn ri_args<T>(
    op: Mnemonic,
    args: &[&str],
    imm: impl FnOnce(&str) -> Result<T, ParseError>,
) -> Result<(Register, T), ParseError> {
    test_len(op, 2, args)?;

    let rd = integer_register(args[0])?;
    let imm = imm(args[1])?;

    Ok((rd, imm))
}
