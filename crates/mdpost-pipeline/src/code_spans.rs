//! Code-span detection for prose-only rewriting passes.
//!
//! Link normalization and escaping must never touch fenced or inline code,
//! so both run their rewrites through [`map_prose`] instead of substituting
//! over the whole document.

/// Fenced code delimiter.
const FENCED: &str = "```";
/// Inline code delimiter.
const INLINE: &str = "`";

/// Scanner state while splitting a page into prose and code segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Outside any code span; rewrites apply.
    Prose,
    /// Inside a code span opened by the current delimiter.
    Code,
}

/// Run `rewrite` over the segments of `text` outside code spans,
/// reassembling delimiters and code content verbatim.
///
/// Single left-to-right scan. A fenced delimiter is preferred over an
/// inline one when three backticks are adjacent, and a span is closed only
/// by the delimiter that opened it. An unterminated span runs to the end of
/// the input and is left untouched.
pub(crate) fn map_prose(text: &str, mut rewrite: impl FnMut(&str) -> String) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    let mut state = State::Prose;
    let mut delimiter = INLINE;

    loop {
        match state {
            State::Prose => {
                let Some(start) = rest.find('`') else {
                    output.push_str(&rewrite(rest));
                    return output;
                };
                delimiter = if rest[start..].starts_with(FENCED) {
                    FENCED
                } else {
                    INLINE
                };
                output.push_str(&rewrite(&rest[..start]));
                output.push_str(delimiter);
                rest = &rest[start + delimiter.len()..];
                state = State::Code;
            }
            State::Code => {
                let Some(end) = rest.find(delimiter) else {
                    output.push_str(rest);
                    return output;
                };
                let after = end + delimiter.len();
                output.push_str(&rest[..after]);
                rest = &rest[after..];
                state = State::Prose;
            }
        }
    }
}
