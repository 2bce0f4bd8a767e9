//! Fixpoint trimming of trailing incomplete tokens.
//!
//! A truncated document usually ends mid-token: a dangling escape, half a
//! `\uXXXX` sequence, an opening quote with no content, or a human note
//! appended after the cut (`... (truncated)`). The trimmer strips these from
//! the end, one rule per pass, until no rule shortens the text any further.

use once_cell::sync::Lazy;
use regex::Regex;

/// A trailing `\u` with fewer than 4 hex digits, i.e. a truncated escape.
/// A complete `\uXXXX` never matches: the fourth digit keeps `$` from
/// anchoring inside it.
static PARTIAL_UNICODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u[0-9a-fA-F]{0,3}$").unwrap());

/// Strip trailing incomplete tokens from `candidate`.
///
/// Returns `(trimmed, suffix)` as subslices of the input, so
/// `trimmed.len() + suffix.len() == candidate.len()` always holds. The loop
/// is monotonically non-increasing in length and therefore terminates.
pub(crate) fn trim_truncated(candidate: &str) -> (&str, &str) {
    let mut end = candidate.len();
    loop {
        let before = end;
        end = candidate[..end].trim_end().len();
        end = apply_first_rule(&candidate[..end]);
        if end == before {
            break;
        }
    }
    (&candidate[..end], &candidate[end..])
}

/// Apply the highest-priority matching rule and return the new end offset.
/// Returns the input length unchanged when no rule matches.
fn apply_first_rule(text: &str) -> usize {
    let len = text.len();

    // 1. Dangling escape: a trailing backslash with nothing after it.
    if text.ends_with('\\') {
        return len - 1;
    }

    // 2. Truncated unicode escape, e.g. `\u4e`.
    if let Some(m) = PARTIAL_UNICODE.find(text) {
        return m.start();
    }

    // 3. Trailing comma.
    if text.ends_with(',') {
        return len - 1;
    }

    // 4. A trailing quote (plain or escaped) right after `,`, `{` or `[` is
    //    the opening quote of a truncated string with no content yet.
    if text.ends_with('"') {
        let quote_len = if text[..len - 1].ends_with('\\') { 2 } else { 1 };
        let body = text[..len - quote_len].trim_end();
        if body.ends_with([',', '{', '[']) {
            return len - quote_len;
        }
    }

    // 5. Parenthetical trailing annotation, e.g. `(truncated after 1000 chars)`.
    if text.ends_with(')') {
        if let Some(open) = text.rfind('(') {
            return open;
        }
    }

    // 6. Trailing period.
    if text.ends_with('.') {
        return len - 1;
    }

    // 7. Angle-bracket trailing annotation, e.g. `<cut>`.
    if text.ends_with('>') {
        if let Some(open) = text.rfind('<') {
            return open;
        }
    }

    len
}
