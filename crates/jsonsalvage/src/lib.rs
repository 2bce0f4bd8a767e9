//! jsonsalvage: best-effort recovery of JSON from mangled text.
//!
//! Text that is *supposed* to contain a JSON object or array often arrives
//! damaged: truncated mid-token, quote-escaped because it was embedded inside
//! another string, polluted with HTML entities, or carrying double-escaped
//! `\uXXXX` sequences. This crate runs an ordered chain of repair strategies
//! against such text and returns the best structured value it can, together
//! with the unconsumed leading and trailing text.
//!
//! Recovery never panics on arbitrary input. It either succeeds or fails with
//! one of exactly two typed errors: [`SalvageError::NoJsonStructure`] when
//! the input contains no `{` or `[` at all, and
//! [`SalvageError::AllStrategiesFailed`] when every strategy was exhausted.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//!
//! // Truncated mid-string, with a leading label.
//! let result = jsonsalvage::recover_with_boundaries(r#"PREFIX: {"key": "val"#).unwrap();
//!
//! assert_eq!(result.prefix, "PREFIX: ");
//! assert_eq!(result.data, json!({"key": "val"}));
//! assert_eq!(result.full_string(), r#"PREFIX: {"key":"val"}"#);
//! ```

pub mod error;
pub mod escape;
pub mod recovery;

pub use error::{Result, SalvageError};
pub use escape::{decode_html_entities, decode_unicode_escapes};
pub use recovery::{ExtractionResult, RecoveryPipeline, Strategy, recover, recover_with_boundaries};
