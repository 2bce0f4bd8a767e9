//! Post-parse repair of double-escaped Unicode sequences.
//!
//! JSON nested inside a JSON string gets its escapes doubled; after one round
//! of parsing, keys and string values still carry literal `\uXXXX` text. This
//! pass walks the parsed tree and collapses those sequences. The walk uses an
//! explicit work stack instead of call-stack recursion so that deeply nested
//! input cannot overflow the stack.

use std::borrow::Cow;
use std::mem;

use serde_json::Value;

use crate::escape::decode_unicode_escapes;

/// Collapse literal `\uXXXX` sequences in every object key and string value.
///
/// Best-effort: a string whose escapes do not decode is left unchanged.
/// String values are rewritten in place; a decoded key changes the string's
/// identity, so affected objects are rebuilt (insertion order kept, and a key
/// that collides with an existing one after decoding overwrites it).
pub(crate) fn normalize_escapes(root: &mut Value) {
    let mut stack: Vec<&mut Value> = vec![root];

    while let Some(node) = stack.pop() {
        match node {
            Value::String(s) => {
                if s.contains("\\u") {
                    if let Cow::Owned(decoded) = decode_unicode_escapes(s) {
                        *s = decoded;
                    }
                }
            }
            Value::Array(items) => stack.extend(items.iter_mut()),
            Value::Object(map) => {
                if map.keys().any(|k| k.contains("\\u")) {
                    let entries = mem::take(map);
                    for (key, value) in entries {
                        map.insert(decode_unicode_escapes(&key).into_owned(), value);
                    }
                }
                stack.extend(map.values_mut());
            }
            _ => {}
        }
    }
}
