use crate::opcode::{Format, Mnemonic};
use crate::register::Register;

/// A single instruction with its operands resolved.
///
/// Immediates are stored as the value written in the text form, not as the
/// bit pattern in the word: branch and jump offsets count halfwords, and the
/// `U` immediate is the upper 20 bits before shifting.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Instruction {
    R(R),
    I(I),
    IShift(IShift),
    Load(Load),
    S(S),
    B(B),
    J(J),
    IJump(IJump),
    U(U),
}

impl Instruction {
    #[must_use]
    pub const fn mnemonic(&self) -> Mnemonic {
        match self {
            Self::R(it) => it.mnemonic,
            Self::I(it) => it.mnemonic,
            Self::IShift(it) => it.mnemonic,
            Self::Load(it) => it.mnemonic,
            Self::S(it) => it.mnemonic,
            Self::B(it) => it.mnemonic,
            Self::J(it) => it.mnemonic,
            Self::IJump(it) => it.mnemonic,
            Self::U(it) => it.mnemonic,
        }
    }

    /// The format implied by the variant, which may disagree with the
    /// mnemonic's table entry for hand built instructions.
    #[must_use]
    pub const fn format(&self) -> Format {
        match self {
            Self::R(_) => Format::R,
            Self::I(_) => Format::I,
            Self::IShift(_) => Format::IShift,
            Self::Load(_) => Format::Load,
            Self::S(_) => Format::S,
            Self::B(_) => Format::B,
            Self::J(_) => Format::J,
            Self::IJump(_) => Format::IJump,
            Self::U(_) => Format::U,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct R {
    pub rd: Register,
    pub rs1: Register,
    pub rs2: Register,
    pub mnemonic: Mnemonic,
}

impl R {
    #[must_use]
    #[inline(always)]
    pub const fn new(rd: Register, rs1: Register, rs2: Register, mnemonic: Mnemonic) -> Self {
        Self { rd, rs1, rs2, mnemonic }
    }
}

impl From<R> for Instruction {
    #[inline(always)]
    fn from(value: R) -> Self {
        Self::R(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct I {
    pub imm: i16,
    pub rs1: Register,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl I {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i16, rs1: Register, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rs1, rd, mnemonic }
    }
}

impl From<I> for Instruction {
    #[inline(always)]
    fn from(value: I) -> Self {
        Self::I(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IShift {
    pub shamt: u8,
    pub rs1: Register,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl IShift {
    #[must_use]
    #[inline(always)]
    pub const fn new(shamt: u8, rs1: Register, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { shamt, rs1, rd, mnemonic }
    }
}

impl From<IShift> for Instruction {
    #[inline(always)]
    fn from(value: IShift) -> Self {
        Self::IShift(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Load {
    pub imm: i16,
    pub rs1: Register,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl Load {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i16, rs1: Register, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rs1, rd, mnemonic }
    }
}

impl From<Load> for Instruction {
    #[inline(always)]
    fn from(value: Load) -> Self {
        Self::Load(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct S {
    pub imm: i16,
    pub rs1: Register,
    pub rs2: Register,
    pub mnemonic: Mnemonic,
}

impl S {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i16, rs1: Register, rs2: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rs1, rs2, mnemonic }
    }
}

impl From<S> for Instruction {
    #[inline(always)]
    fn from(value: S) -> Self {
        Self::S(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct B {
    pub rs1: Register,
    pub rs2: Register,
    pub imm: i16,
    pub mnemonic: Mnemonic,
}

impl B {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i16, rs1: Register, rs2: Register, mnemonic: Mnemonic) -> Self {
        Self { rs1, rs2, imm, mnemonic }
    }
}

impl From<B> for Instruction {
    #[inline(always)]
    fn from(value: B) -> Self {
        Self::B(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct J {
    pub imm: i32,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl J {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i32, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rd, mnemonic }
    }
}

impl From<J> for Instruction {
    #[inline(always)]
    fn from(value: J) -> Self {
        Self::J(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IJump {
    pub imm: i16,
    pub rs1: Register,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl IJump {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: i16, rs1: Register, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rs1, rd, mnemonic }
    }
}

impl From<IJump> for Instruction {
    #[inline(always)]
    fn from(value: IJump) -> Self {
        Self::IJump(value)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct U {
    pub imm: u32,
    pub rd: Register,
    pub mnemonic: Mnemonic,
}

impl U {
    #[must_use]
    #[inline(always)]
    pub const fn new(imm: u32, rd: Register, mnemonic: Mnemonic) -> Self {
        Self { imm, rd, mnemonic }
    }
}

impl From<U> for Instruction {
    #[inline(always)]
    fn from(value: U) -> Self {
        Self::U(value)
    }
}
