//! The recovery pipeline: candidate extraction, the strategy chain, and the
//! two public entry points.

mod candidate;
mod normalize;
mod scan;
mod strategy;
mod trim;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, SalvageError};
use candidate::split_candidate;
use normalize::normalize_escapes;
use strategy::Recovered;

pub use strategy::Strategy;

/// Boundary-aware recovery result.
///
/// `prefix` is the text before the first bracket, untouched. `suffix` is
/// trailing text the winning strategy explicitly declined to consume (empty
/// unless the truncation-aware strategy won). Reassembling
/// `prefix + serialized data + suffix` reconstructs the meaningful content of
/// the original text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Text before the first `{` or `[`.
    pub prefix: String,
    /// The recovered value.
    pub data: Value,
    /// Trailing text not consumed by the winning strategy.
    pub suffix: String,
}

impl ExtractionResult {
    /// The recovered value re-serialized as compact JSON.
    pub fn json_string(&self) -> String {
        serde_json::to_string(&self.data).unwrap_or_default()
    }

    /// `prefix + json_string() + suffix` as one string.
    pub fn full_string(&self) -> String {
        format!("{}{}{}", self.prefix, self.json_string(), self.suffix)
    }
}

/// The recovery pipeline: an ordered list of strategies tried against the
/// candidate until one succeeds.
///
/// Each call is a pure function of its input; the pipeline holds no state
/// between invocations and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct RecoveryPipeline {
    strategies: Vec<Strategy>,
}

impl RecoveryPipeline {
    /// Pipeline with the full default chain, strict to permissive.
    pub fn new() -> Self {
        Self {
            strategies: Strategy::CHAIN.to_vec(),
        }
    }

    /// Pipeline restricted to a custom strategy list, tried in the given
    /// order.
    pub fn with_strategies(strategies: Vec<Strategy>) -> Self {
        Self { strategies }
    }

    /// Recover a JSON value from `text`.
    ///
    /// Fails with [`SalvageError::NoJsonStructure`] when the text contains
    /// no `{` or `[`, and [`SalvageError::AllStrategiesFailed`] when every
    /// strategy returns no match.
    pub fn recover(&self, text: &str) -> Result<Value> {
        let (_, candidate) = split_candidate(text).ok_or(SalvageError::NoJsonStructure)?;
        Ok(self.run_chain(candidate)?.value)
    }

    /// Recover a JSON value plus the surrounding prefix and suffix text.
    pub fn recover_with_boundaries(&self, text: &str) -> Result<ExtractionResult> {
        let (prefix, candidate) = split_candidate(text).ok_or(SalvageError::NoJsonStructure)?;
        let recovered = self.run_chain(candidate)?;
        Ok(ExtractionResult {
            prefix: prefix.to_string(),
            data: recovered.value,
            suffix: recovered.suffix,
        })
    }

    fn run_chain(&self, candidate: &str) -> Result<Recovered> {
        for strategy in &self.strategies {
            if let Some(mut recovered) = strategy.apply(candidate) {
                normalize_escapes(&mut recovered.value);
                return Ok(recovered);
            }
        }
        Err(SalvageError::AllStrategiesFailed)
    }
}

impl Default for RecoveryPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover a JSON value from `text` with the default pipeline.
pub fn recover(text: &str) -> Result<Value> {
    RecoveryPipeline::new().recover(text)
}

/// Boundary-aware recovery with the default pipeline.
pub fn recover_with_boundaries(text: &str) -> Result<ExtractionResult> {
    RecoveryPipeline::new().recover_with_boundaries(text)
}
