//! Text-level decoders shared by the recovery strategies.
//!
//! All three functions return [`Cow`] and borrow the input when nothing
//! needed decoding.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A literal backslash-u followed by exactly 4 hex digits.
static UNICODE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").unwrap());

/// Decode literal `\uXXXX` sequences into the characters they encode.
///
/// Sequences that do not decode to a valid scalar value (lone surrogates)
/// are left in place, as are malformed escapes like `\u12` or `\uGGGG`.
/// In a string containing `\\u0041` the escape starts at the second
/// backslash, so the result is `\A`.
pub fn decode_unicode_escapes(text: &str) -> Cow<'_, str> {
    UNICODE_ESCAPE.replace_all(text, |caps: &Captures| {
        let hex = &caps[1];
        match u32::from_str_radix(hex, 16).ok().and_then(char::from_u32) {
            Some(c) => c.to_string(),
            None => caps[0].to_string(),
        }
    })
}

/// Replace every `\"` with `"`.
///
/// Targets JSON that was itself embedded, quote-escaped, inside another
/// string value.
pub fn unescape_quotes(text: &str) -> Cow<'_, str> {
    if text.contains("\\\"") {
        Cow::Owned(text.replace("\\\"", "\""))
    } else {
        Cow::Borrowed(text)
    }
}

const NAMED_ENTITIES: &[(&str, char)] = &[
    ("&quot;", '"'),
    ("&amp;", '&'),
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&apos;", '\''),
];

/// Decode common HTML entities (`&quot;`, `&amp;`, `&lt;`, `&gt;`, `&apos;`
/// and the numeric `&#NN;` / `&#xHH;` forms).
///
/// Anything that does not parse as an entity passes through verbatim.
pub fn decode_html_entities(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find('&') else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut rest = &text[first..];
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match decode_entity(rest) {
            Some((c, len)) => {
                out.push(c);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Decode one entity at the start of `s`, returning the character and the
/// byte length consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    for (name, c) in NAMED_ENTITIES {
        if s.starts_with(name) {
            return Some((*c, name.len()));
        }
    }

    // Numeric: &#NN; or &#xHH;
    let body = s.strip_prefix("&#")?;
    let semi = body.find(';')?;
    let digits = &body[..semi];
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    let c = char::from_u32(code)?;
    Some((c, 2 + semi + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_unicode_decode() {
        let text = "Hello \\u4f60\\u597d World";
        assert_eq!(decode_unicode_escapes(text), "Hello 你好 World");
    }

    #[test]
    fn test_invalid_escapes_left_alone() {
        // Too short, not hex, and an escaped backslash before the escape.
        let text = "Valid: \\u0041, Invalid: \\u123, \\uGGGG, Literal: \\\\u0041";
        let expected = "Valid: A, Invalid: \\u123, \\uGGGG, Literal: \\A";
        assert_eq!(decode_unicode_escapes(text), expected);
    }

    #[test]
    fn test_double_escaped_sequence() {
        assert_eq!(
            decode_unicode_escapes(r"Prefix \\u5e94 Suffix"),
            "Prefix \\应 Suffix"
        );
    }

    #[test]
    fn test_lone_surrogate_left_alone() {
        assert_eq!(decode_unicode_escapes(r"bad \ud83d escape"), r"bad \ud83d escape");
    }

    #[test]
    fn test_no_escapes_borrows() {
        let text = "Hello World";
        assert!(matches!(decode_unicode_escapes(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_quotes() {
        assert_eq!(unescape_quotes(r#"{\"key\": 1}"#), r#"{"key": 1}"#);
        assert!(matches!(unescape_quotes("{}"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_named_entities() {
        assert_eq!(
            decode_html_entities("{&quot;key&quot;: &quot;value&quot;}"),
            r#"{"key": "value"}"#
        );
        assert_eq!(decode_html_entities("a &amp; b &lt; c &gt; d"), "a & b < c > d");
    }

    #[test]
    fn test_numeric_entities() {
        assert_eq!(decode_html_entities("&#34;hi&#34;"), "\"hi\"");
        assert_eq!(decode_html_entities("&#x4f60;&#x597d;"), "你好");
    }

    #[test]
    fn test_unknown_entity_passes_through() {
        assert_eq!(decode_html_entities("fish &chips; &#zz; &"), "fish &chips; &#zz; &");
    }
}
