//! Serialized boundary for hosts that are not rustc.
//!
//! A request carries one declaration, an optional marker display name, and an
//! opaque anchor that is echoed back on any diagnostic.

use crate::engine::{DEFAULT_MARKER, Outcome, evaluate_with};
use crate::error::Result;
use crate::model::Declaration;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EvaluationRequest {
    pub declaration: Declaration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
    #[serde(default)]
    pub anchor: Value,
}

impl EvaluationRequest {
    pub fn evaluate(&self) -> Outcome<Value> {
        let marker = self.marker.as_deref().unwrap_or(DEFAULT_MARKER);
        evaluate_with(&self.declaration, self.anchor.clone(), marker)
    }
}

/// Parses a JSON request and returns the pretty-printed JSON outcome.
pub fn evaluate_json(input: &str) -> Result<String> {
    let request: EvaluationRequest = serde_json::from_str(input)?;
    debug!(
        "Evaluating serialized {} `{}`",
        request.declaration.kind, request.declaration.name
    );
    let outcome = request.evaluate();
    Ok(serde_json::to_string_pretty(&outcome)?)
}
