#![forbid(unsafe_code)]
#![allow(clippy::match_bool)]
#![warn(clippy::must_use_candidate, clippy::clone_on_copy)]

#[cfg(feature = "disassemble")]
pub mod disassemble;
pub mod instruction;
pub mod opcode;
pub mod register;

pub use instruction::Instruction;
pub use opcode::{Entry, Format, Mnemonic};
pub use register::Register;
