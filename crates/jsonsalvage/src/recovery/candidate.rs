//! Locating the start of JSON-like content in raw text.

/// Split `text` at the first `{` or `[`, whichever comes first.
///
/// Returns `(prefix, candidate)` as borrowed slices: the prefix is everything
/// before the bracket and is never altered or interpreted, the candidate runs
/// from the bracket to the end of the input. `None` when the text contains
/// neither bracket.
pub(crate) fn split_candidate(text: &str) -> Option<(&str, &str)> {
    let start = text.find(['{', '['])?;
    Some((&text[..start], &text[start..]))
}
