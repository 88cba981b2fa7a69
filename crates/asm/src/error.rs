use core::fmt;

use mipshex_core::Mnemonic;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ParseError {
    /// nothing but whitespace.
    Empty,
    /// a line break inside a single instruction.
    LineBreak,
    UnknownMnemonic(String),
    ArgCount { mnemonic: Mnemonic, expected: usize, found: usize },
    UnknownRegister(String),
    /// an immediate that isn't a number at all.
    InvalidNumber(String),
    /// an immediate that's a number, but doesn't fit its field.
    OutOfRange { literal: String, min: i64, max: i64 },
    /// a memory operand not in the form `offset($base)`.
    MalformedOffset(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("expected an instruction"),
            Self::LineBreak => f.write_str("expected a single line"),
            Self::UnknownMnemonic(op) => write!(f, "Unknown instruction `{op}`"),
            Self::ArgCount { mnemonic, expected, found } => {
                write!(f, "Expected {expected} argument(s) for `{mnemonic}`, found `{found}`")
            }
            Self::UnknownRegister(register) => write!(f, "Unexpected register name `{register}`"),
            Self::InvalidNumber(src) => write!(f, "invalid number: `{src}`"),
            Self::OutOfRange { literal, min, max } => {
                write!(f, "immediate `{literal}` out of range ({min}..={max})")
            }
            Self::MalformedOffset(arg) => {
                write!(f, "expected an arg in the format 0($t0), found `{arg}`")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// A [`ParseError`] tagged with the (1 based) line it came from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineError {
    pub line: usize,
    pub error: ParseError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for LineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
