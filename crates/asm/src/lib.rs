#![forbid(unsafe_code)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::match_bool
)]
#![warn(clippy::must_use_candidate)]

mod error;
mod parse;

pub use error::{LineError, ParseError};
pub use parse::{ParseOutput, parse, parse_lines, strip_comment};
