#![forbid(unsafe_code)]
#![allow(clippy::match_bool)]
#![warn(clippy::must_use_candidate)]

use core::fmt;

mod batch;
mod error;
mod pairs;
mod template;

pub use batch::{BatchEntry, translate_batch};
pub use error::TranslateError;
pub use pairs::{TranslationPair, import_pairs, memory_image};
pub use template::template;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Direction {
    MipsToHex,
    HexToMips,
}

impl Direction {
    /// Picks a direction from the shape of `text` alone: anything made only
    /// of hex digits is treated as a word.
    #[must_use]
    pub fn guess(text: &str) -> Self {
        let text = text.trim();

        match !text.is_empty() && text.chars().all(|c| c.is_ascii_hexdigit()) {
            true => Self::HexToMips,
            false => Self::MipsToHex,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MipsToHex => f.write_str("mips -> hex"),
            Self::HexToMips => f.write_str("hex -> mips"),
        }
    }
}

/// Assembles a single instruction into its 8 digit hex word.
///
/// # Errors
/// [`TranslateError::Parse`] if `text` isn't a valid instruction.
pub fn translate_mips_to_hex(text: &str) -> Result<String, TranslateError> {
    let text = text.trim();

    let instruction = mipshex_asm::parse(text)?;
    let word = mipshex_encode::instruction(&instruction)?;
    let hex = mipshex_encode::to_hex(word);

    tracing::debug!(mips = text, %hex, "translated");

    Ok(hex)
}

/// Disassembles an 8 digit hex word into its canonical text.
///
/// # Errors
/// [`TranslateError::Decode`] if `text` isn't 8 hex digits or doesn't encode
/// a known instruction.
pub fn translate_hex_to_mips(text: &str) -> Result<String, TranslateError> {
    let text = text.trim();

    let word = mipshex_decode::parse_hex(text)?;

    tracing::debug!("instruction: {word:032b}");

    let mips = mipshex_decode::disassemble(word)?;

    tracing::debug!(hex = text, %mips, "translated");

    Ok(mips)
}

/// Whether [`translate_hex_to_mips`] would succeed: 8 hex digits that decode
/// to a known instruction.
#[must_use]
pub fn is_valid_hex(text: &str) -> bool {
    let valid = mipshex_decode::parse_hex(text.trim()).and_then(mipshex_decode::instruction).is_ok();

    tracing::trace!(text, valid, "hex check");

    valid
}

/// Whether [`translate_mips_to_hex`] would succeed.
#[must_use]
pub fn is_valid_mips(text: &str) -> bool {
    let valid = mipshex_asm::parse(text.trim()).is_ok();

    tracing::trace!(text, valid, "mips check");

    valid
}

/// Which way `text` can be translated, if at all. Hex wins if both apply.
#[must_use]
pub fn detect(text: &str) -> Option<Direction> {
    if is_valid_hex(text) {
        Some(Direction::HexToMips)
    } else if is_valid_mips(text) {
        Some(Direction::MipsToHex)
    } else {
        None
    }
}

/// Translates `text` in the given direction, recording both sides.
///
/// # Errors
/// See [`translate_mips_to_hex`] and [`translate_hex_to_mips`].
pub fn translate_in(text: &str, direction: Direction) -> Result<TranslationPair, TranslateError> {
    let text = text.trim();

    match direction {
        Direction::MipsToHex => translate_mips_to_hex(text)
            .map(|hex| TranslationPair { mips: text.to_owned(), hex }),
        Direction::HexToMips => translate_hex_to_mips(text)
            .map(|mips| TranslationPair { mips, hex: text.to_ascii_lowercase() }),
    }
}

/// Translates `text` in whichever direction it's valid for.
///
/// When it isn't valid either way the error comes from the direction its
/// shape suggests (see [`Direction::guess`]).
///
/// # Errors
/// See [`translate_in`].
pub fn translate(text: &str) -> Result<TranslationPair, TranslateError> {
    let direction = detect(text).unwrap_or_else(|| Direction::guess(text));

    translate_in(text, direction)
}

#[cfg(test)]
mod tests;
