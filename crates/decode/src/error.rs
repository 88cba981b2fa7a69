use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DecodeError {
    /// the text isn't a word written as 8 hex digits.
    Format(FormatError),
    /// no entry in the opcode table matches the word.
    UnknownEncoding(u32),
}

impl From<FormatError> for DecodeError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Format(e) => fmt::Display::fmt(e, f),
            Self::UnknownEncoding(word) => write!(f, "unknown instruction encoding `{word:08x}`"),
        }
    }
}

impl core::error::Error for DecodeError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FormatError {
    /// the text has the wrong number of digits.
    Length(usize),
    NonHex { index: usize, found: char },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "expected 8 hex digits, found {len}"),
            Self::NonHex { index, found } => {
                write!(f, "invalid hex digit `{found}` at position {index}")
            }
        }
    }
}

impl core::error::Error for FormatError {}
