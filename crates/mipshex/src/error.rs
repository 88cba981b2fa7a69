use core::fmt;

use mipshex_asm::ParseError;
use mipshex_decode::DecodeError;
use mipshex_encode::EncodeError;

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TranslateError {
    Parse(ParseError),
    Encode(EncodeError),
    Decode(DecodeError),
}

impl From<ParseError> for TranslateError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<EncodeError> for TranslateError {
    fn from(e: EncodeError) -> Self {
        Self::Encode(e)
    }
}

impl From<DecodeError> for TranslateError {
    fn from(e: DecodeError) -> Self {
        Self::Decode(e)
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => fmt::Display::fmt(e, f),
            Self::Encode(e) => fmt::Display::fmt(e, f),
            Self::Decode(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Encode(e) => Some(e),
            Self::Decode(e) => Some(e),
        }
    }
}
