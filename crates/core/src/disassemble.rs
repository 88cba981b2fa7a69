//! Canonical text form of an [`Instruction`].
//!
//! The output is exactly what the parser accepts: the mnemonic and its
//! operands separated by single spaces, decimal immediates, and memory
//! operands written as `offset($base)`.

use core::fmt;

use crate::instruction::{self, Instruction};

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::R(instruction::R { rd, rs1, rs2, mnemonic }) => {
                write!(f, "{mnemonic} {rd} {rs1} {rs2}")
            }

            Self::I(instruction::I { imm, rs1, rd, mnemonic }) => {
                write!(f, "{mnemonic} {rd} {rs1} {imm}")
            }

            Self::IShift(instruction::IShift { shamt, rs1, rd, mnemonic }) => {
                write!(f, "{mnemonic} {rd} {rs1} {shamt}")
            }

            Self::Load(instruction::Load { imm, rs1, rd, mnemonic }) => {
                write!(f, "{mnemonic} {rd} {imm}({rs1})")
            }

            Self::S(instruction::S { imm, rs1, rs2, mnemonic }) => {
                write!(f, "{mnemonic} {rs2} {imm}({rs1})")
            }

            Self::B(instruction::B { rs1, rs2, imm, mnemonic }) => {
                write!(f, "{mnemonic} {rs1} {rs2} {imm}")
            }

            Self::J(instruction::J { imm, rd, mnemonic }) => write!(f, "{mnemonic} {rd} {imm}"),

            Self::IJump(instruction::IJump { imm, rs1, rd, mnemonic }) => {
                write!(f, "{mnemonic} {rd} {imm}({rs1})")
            }

            Self::U(instruction::U { imm, rd, mnemonic }) => write!(f, "{mnemonic} {rd} {imm}"),
        }
    }
}
