use core::fmt;

use crate::Direction;

/// Both sides of one completed translation.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct TranslationPair {
    pub mips: String,
    pub hex: String,
}

impl TranslationPair {
    /// The side produced by translating in `direction`.
    #[must_use]
    pub fn output(&self, direction: Direction) -> &str {
        match direction {
            Direction::MipsToHex => &self.hex,
            Direction::HexToMips => &self.mips,
        }
    }
}

impl fmt::Display for TranslationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.mips, self.hex)
    }
}

/// Pairs up a newline separated list of words with a newline separated list
/// of instructions, line by line.
///
/// Nothing is translated or validated. If one list is longer, the other
/// side of the extra pairs is left empty.
#[must_use]
pub fn import_pairs(hex_list: &str, mips_list: &str) -> Vec<TranslationPair> {
    let mut hex = hex_list.lines();
    let mut mips = mips_list.lines();

    std::iter::from_fn(|| match (hex.next(), mips.next()) {
        (None, None) => None,
        (h, m) => Some(TranslationPair {
            mips: m.unwrap_or_default().trim().to_owned(),
            hex: h.unwrap_or_default().trim().to_owned(),
        }),
    })
    .collect()
}

/// The hex side of `pairs`, one word per line.
#[must_use]
pub fn memory_image(pairs: &[TranslationPair]) -> String {
    let mut image = String::with_capacity(pairs.len() * 9);
    for pair in pairs {
        image.push_str(&pair.hex);
        image.push('\n');
    }

    image
}
