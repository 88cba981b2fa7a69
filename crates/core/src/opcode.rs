// these opcode names are _exact_, and naming rules don't apply to them

use core::fmt;

/// Field layout of a word, which also decides the operand grammar.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Format {
    /// `rd rs1 rs2`
    R,
    /// `rd rs1 imm`, 12 bit signed immediate.
    I,
    /// `rd rs1 shamt`, 5 bit unsigned shift amount.
    IShift,
    /// `rd offset(rs1)`
    Load,
    /// `rs2 offset(rs1)`
    S,
    /// `rs1 rs2 imm`, 12 bit signed offset in halfwords.
    B,
    /// `rd imm`, 20 bit signed offset in halfwords.
    J,
    /// `rd offset(rs1)`
    IJump,
    /// `rd imm`, 20 bit unsigned upper immediate.
    U,
}

impl Format {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::IShift => "I-shift",
            Self::Load => "I-load",
            Self::S => "S",
            Self::B => "B",
            Self::J => "J",
            Self::IJump => "I-jump",
            Self::U => "U",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// note: the discriminants index `TABLE`, keep the order in sync.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[repr(u8)]
pub enum Mnemonic {
    ADD,
    SUB,
    SLL,
    SLT,
    SLTU,
    XOR,
    SRL,
    SRA,
    OR,
    AND,
    ADDI,
    SLTI,
    SLTIU,
    XORI,
    ORI,
    ANDI,
    SLLI,
    SRLI,
    SRAI,
    LB,
    LH,
    LW,
    LBU,
    LHU,
    SB,
    SH,
    SW,
    BEQ,
    BNE,
    BLT,
    BGE,
    BLTU,
    BGEU,
    JAL,
    JALR,
    LUI,
    AUIPC,
}

impl Mnemonic {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ADD => "add",
            Self::SUB => "sub",
            Self::SLL => "sll",
            Self::SLT => "slt",
            Self::SLTU => "sltu",
            Self::XOR => "xor",
            Self::SRL => "srl",
            Self::SRA => "sra",
            Self::OR => "or",
            Self::AND => "and",
            Self::ADDI => "addi",
            Self::SLTI => "slti",
            Self::SLTIU => "sltiu",
            Self::XORI => "xori",
            Self::ORI => "ori",
            Self::ANDI => "andi",
            Self::SLLI => "slli",
            Self::SRLI => "srli",
            Self::SRAI => "srai",
            Self::LB => "lb",
            Self::LH => "lh",
            Self::LW => "lw",
            Self::LBU => "lbu",
            Self::LHU => "lhu",
            Self::SB => "sb",
            Self::SH => "sh",
            Self::SW => "sw",
            Self::BEQ => "beq",
            Self::BNE => "bne",
            Self::BLT => "blt",
            Self::BGE => "bge",
            Self::BLTU => "bltu",
            Self::BGEU => "bgeu",
            Self::JAL => "jal",
            Self::JALR => "jalr",
            Self::LUI => "lui",
            Self::AUIPC => "auipc",
        }
    }

    #[must_use]
    pub fn entry(self) -> &'static Entry {
        &TABLE[self as usize]
    }

    #[must_use]
    pub fn format(self) -> Format {
        self.entry().format
    }

    /// Case insensitive lookup of a mnemonic by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.as_bytes();

        hashify::tiny_map_ignore_case!(
            name,
            "add" => Self::ADD,
            "sub" => Self::SUB,
            "sll" => Self::SLL,
            "slt" => Self::SLT,
            "sltu" => Self::SLTU,
            "xor" => Self::XOR,
            "srl" => Self::SRL,
            "sra" => Self::SRA,
            "or" => Self::OR,
            "and" => Self::AND,
            "addi" => Self::ADDI,
            "slti" => Self::SLTI,
            "sltiu" => Self::SLTIU,
            "xori" => Self::XORI,
            "ori" => Self::ORI,
            "andi" => Self::ANDI,
            "slli" => Self::SLLI,
            "srli" => Self::SRLI,
            "srai" => Self::SRAI,
            "lb" => Self::LB,
            "lh" => Self::LH,
            "lw" => Self::LW,
            "lbu" => Self::LBU,
            "lhu" => Self::LHU,
            "sb" => Self::SB,
            "sh" => Self::SH,
            "sw" => Self::SW,
            "beq" => Self::BEQ,
            "bne" => Self::BNE,
            "blt" => Self::BLT,
            "bge" => Self::BGE,
            "bltu" => Self::BLTU,
            "bgeu" => Self::BGEU,
            "jal" => Self::JAL,
            "jalr" => Self::JALR,
            "lui" => Self::LUI,
            "auipc" => Self::AUIPC,
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the opcode table.
///
/// `funct3` and `funct7` are `None` when the format doesn't have (or doesn't
/// constrain) that field. For the immediate shifts `funct7` is the upper 7
/// bits of the immediate field, which select between the logical and the
/// arithmetic shift.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Entry {
    pub mnemonic: Mnemonic,
    pub format: Format,
    pub opcode: u8,
    pub funct3: Option<u8>,
    pub funct7: Option<u8>,
}

impl Entry {
    const fn new(
        mnemonic: Mnemonic,
        format: Format,
        opcode: u8,
        funct3: Option<u8>,
        funct7: Option<u8>,
    ) -> Self {
        Self { mnemonic, format, opcode, funct3, funct7 }
    }

    /// The bits this entry fixes in every word it encodes.
    #[must_use]
    pub const fn bits(&self) -> u32 {
        let funct3 = match self.funct3 {
            Some(it) => (it as u32) << 12,
            None => 0,
        };

        let funct7 = match self.funct7 {
            Some(it) => (it as u32) << 25,
            None => 0,
        };

        funct7 | funct3 | self.opcode as u32
    }

    #[must_use]
    pub const fn matches(&self, word: u32) -> bool {
        let opcode = (word & 0b111_1111) as u8;
        let funct3 = ((word >> 12) & 0b111) as u8;
        let funct7 = ((word >> 25) & 0b111_1111) as u8;

        if opcode != self.opcode {
            return false;
        }

        let funct3_ok = match self.funct3 {
            Some(it) => it == funct3,
            None => true,
        };

        let funct7_ok = match self.funct7 {
            Some(it) => it == funct7,
            None => true,
        };

        funct3_ok && funct7_ok
    }
}

const OP: u8 = 0b011_0011;
const OP_IMM: u8 = 0b001_0011;
const LOAD: u8 = 0b000_0011;
const STORE: u8 = 0b010_0011;
const BRANCH: u8 = 0b110_0011;
const JAL: u8 = 0b110_1111;
const JALR: u8 = 0b110_0111;
const LUI: u8 = 0b011_0111;
const AUIPC: u8 = 0b001_0111;

const fn r(mnemonic: Mnemonic, funct3: u8, funct7: u8) -> Entry {
    Entry::new(mnemonic, Format::R, OP, Some(funct3), Some(funct7))
}

const fn i(mnemonic: Mnemonic, funct3: u8) -> Entry {
    Entry::new(mnemonic, Format::I, OP_IMM, Some(funct3), None)
}

const fn shift(mnemonic: Mnemonic, funct3: u8, funct7: u8) -> Entry {
    Entry::new(mnemonic, Format::IShift, OP_IMM, Some(funct3), Some(funct7))
}

const fn load(mnemonic: Mnemonic, funct3: u8) -> Entry {
    Entry::new(mnemonic, Format::Load, LOAD, Some(funct3), None)
}

const fn store(mnemonic: Mnemonic, funct3: u8) -> Entry {
    Entry::new(mnemonic, Format::S, STORE, Some(funct3), None)
}

const fn branch(mnemonic: Mnemonic, funct3: u8) -> Entry {
    Entry::new(mnemonic, Format::B, BRANCH, Some(funct3), None)
}

pub static TABLE: [Entry; 37] = [
    r(Mnemonic::ADD, 0b000, 0b000_0000),
    r(Mnemonic::SUB, 0b000, 0b010_0000),
    r(Mnemonic::SLL, 0b001, 0b000_0000),
    r(Mnemonic::SLT, 0b010, 0b000_0000),
    r(Mnemonic::SLTU, 0b011, 0b000_0000),
    r(Mnemonic::XOR, 0b100, 0b000_0000),
    r(Mnemonic::SRL, 0b101, 0b000_0000),
    r(Mnemonic::SRA, 0b101, 0b010_0000),
    r(Mnemonic::OR, 0b110, 0b000_0000),
    r(Mnemonic::AND, 0b111, 0b000_0000),
    i(Mnemonic::ADDI, 0b000),
    i(Mnemonic::SLTI, 0b010),
    i(Mnemonic::SLTIU, 0b011),
    i(Mnemonic::XORI, 0b100),
    i(Mnemonic::ORI, 0b110),
    i(Mnemonic::ANDI, 0b111),
    shift(Mnemonic::SLLI, 0b001, 0b000_0000),
    shift(Mnemonic::SRLI, 0b101, 0b000_0000),
    shift(Mnemonic::SRAI, 0b101, 0b010_0000),
    load(Mnemonic::LB, 0b000),
    load(Mnemonic::LH, 0b001),
    load(Mnemonic::LW, 0b010),
    load(Mnemonic::LBU, 0b100),
    load(Mnemonic::LHU, 0b101),
    store(Mnemonic::SB, 0b000),
    store(Mnemonic::SH, 0b001),
    store(Mnemonic::SW, 0b010),
    branch(Mnemonic::BEQ, 0b000),
    branch(Mnemonic::BNE, 0b001),
    branch(Mnemonic::BLT, 0b100),
    branch(Mnemonic::BGE, 0b101),
    branch(Mnemonic::BLTU, 0b110),
    branch(Mnemonic::BGEU, 0b111),
    Entry::new(Mnemonic::JAL, Format::J, JAL, None, None),
    Entry::new(Mnemonic::JALR, Format::IJump, JALR, Some(0b000), None),
    Entry::new(Mnemonic::LUI, Format::U, LUI, None, None),
    Entry::new(Mnemonic::AUIPC, Format::U, AUIPC, None, None),
];

#[must_use]
pub fn lookup_by_mnemonic(name: &str) -> Option<&'static Entry> {
    Mnemonic::from_name(name).map(Mnemonic::entry)
}

/// Finds the entry whose fixed bits match `word`, if any.
#[must_use]
pub fn lookup_by_bits(word: u32) -> Option<&'static Entry> {
    TABLE.iter().find(|entry| entry.matches(word))
}
