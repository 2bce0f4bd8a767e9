//! Last-resort key/value harvesting.
//!
//! When no strategy can make the document as a whole parse, this scanner
//! walks the text looking for `"key": value` shapes and collects whatever it
//! can decode, without ever requiring the surrounding structure to be valid.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Deserializer, Map, Value};

use crate::escape::{decode_unicode_escapes, unescape_quotes};
use crate::recovery::strategy::balance_json;

/// A quoted key (escapes allowed inside) followed by a colon.
static KEY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)"\s*:"#).unwrap());

/// Harvest `"key": value` pairs from text that is not globally valid JSON.
///
/// Quote-unescapes the whole text first, then repeatedly: find the next key,
/// decode Unicode escapes in it eagerly, and decode exactly one JSON value
/// after the colon with an incremental parser. When the incremental parse
/// fails, resynchronization is best effort: a `{` gets one balance-and-parse
/// attempt, a `"` is read through to the next quote (or to the end of input,
/// which also ends the scan), anything else advances the scan by one
/// character. Later duplicate keys overwrite earlier ones.
///
/// Returns `None` only when zero pairs were recovered.
pub(crate) fn scan_key_values(candidate: &str) -> Option<Value> {
    let unescaped = unescape_quotes(candidate);
    let text = unescaped.as_ref();
    let mut pairs: Map<String, Value> = Map::new();
    let mut pos = 0;

    while let Some(caps) = KEY_PATTERN.captures(&text[pos..]) {
        let Some(whole) = caps.get(0) else { break };
        let key = decode_unicode_escapes(&caps[1]).into_owned();

        // Skip whitespace between the colon and the value.
        let after_colon = pos + whole.end();
        let rest = &text[after_colon..];
        let vstart = after_colon + (rest.len() - rest.trim_start().len());
        let rest = &text[vstart..];

        let mut stream = Deserializer::from_str(rest).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => {
                let consumed = stream.byte_offset();
                pairs.insert(key, value);
                pos = vstart + consumed;
            }
            _ if rest.starts_with('{') => {
                // One balance attempt for the nested fragment, then resume
                // scanning one character past the value start.
                if let Ok(value) = serde_json::from_str(&balance_json(rest)) {
                    pairs.insert(key, value);
                }
                pos = vstart + 1;
            }
            _ if rest.starts_with('"') => {
                match rest[1..].find('"') {
                    Some(close) => {
                        pairs.insert(key, Value::String(rest[1..1 + close].to_string()));
                        pos = vstart + 1 + close + 1;
                    }
                    None => {
                        // Unterminated string: take the tail and stop.
                        pairs.insert(key, Value::String(rest[1..].to_string()));
                        break;
                    }
                }
            }
            _ => {
                // Nothing decodable here; step forward one character and
                // look for the next key.
                match rest.chars().next() {
                    Some(c) => pos = vstart + c.len_utf8(),
                    None => break,
                }
            }
        }
    }

    if pairs.is_empty() {
        None
    } else {
        Some(Value::Object(pairs))
    }
}
