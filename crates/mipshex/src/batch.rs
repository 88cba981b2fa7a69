use rayon::prelude::*;

use crate::{Direction, TranslateError, TranslationPair};

/// The outcome of translating one line of a batch.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct BatchEntry {
    /// 1 based line number in the input.
    pub line: usize,
    pub direction: Direction,
    pub result: Result<TranslationPair, TranslateError>,
}

/// Translates every line of `input`, skipping blank lines and comments.
///
/// With `direction` set every line is translated that way, otherwise each
/// line picks its own (see [`crate::translate`]). Lines are independent and
/// are translated in parallel, the output keeps input order.
#[must_use]
pub fn translate_batch(input: &str, direction: Option<Direction>) -> Vec<BatchEntry> {
    let lines: Vec<_> = input
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, mipshex_asm::strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let span = tracing::debug_span!("translate_batch", lines = lines.len());
    let _guard = span.enter();

    lines
        .into_par_iter()
        .map(|(line, text)| {
            // the guard above only covers this thread, not rayon's workers.
            span.in_scope(|| {
                let direction = direction
                    .or_else(|| crate::detect(text))
                    .unwrap_or_else(|| Direction::guess(text));

                let result = crate::translate_in(text, direction);

                if let Err(e) = &result {
                    tracing::debug!(line, text, %e, "translation failed");
                }

                BatchEntry { line, direction, result }
            })
        })
        .collect()
}
