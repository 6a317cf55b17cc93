//! Decoding and normalization of the JSON data specification.
//!
//! One top-level JSON value describes a whole batch. [`DataSpec`] keeps the
//! three possible shapes explicit so normalization is a total case analysis
//! instead of a runtime "is it iterable?" probe.

use serde_json::{Map, Value};

use crate::error::BatchError;

/// Decoded form of the JSON data specification.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSpec {
    /// Top-level array: one variable set per element, in input order.
    /// Elements that are not objects are kept verbatim here and rejected at
    /// their index by the render step.
    Sets(Vec<Value>),

    /// Top-level object: a single variable set.
    Single(Map<String, Value>),

    /// Any other top-level value (string, number, bool, null). Coerced to a
    /// one-element batch; the render step rejects it, since a variable set
    /// must be a mapping.
    Scalar(Value),
}

impl DataSpec {
    /// Decodes a JSON string into a `DataSpec`.
    ///
    /// Fails with [`BatchError::InvalidInput`] when `data_json` is not
    /// valid JSON, carrying the parser's description.
    pub fn parse(data_json: &str) -> Result<Self, BatchError> {
        let value: Value = serde_json::from_str(data_json)?;
        Ok(match value {
            Value::Array(items) => DataSpec::Sets(items),
            Value::Object(map) => DataSpec::Single(map),
            other => DataSpec::Scalar(other),
        })
    }

    /// Number of variable sets this specification describes.
    pub fn len(&self) -> usize {
        match self {
            DataSpec::Sets(items) => items.len(),
            DataSpec::Single(_) | DataSpec::Scalar(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Normalizes the specification into an ordered list of binding
    /// contexts, one per render pass.
    pub fn into_contexts(self) -> Vec<Value> {
        match self {
            DataSpec::Sets(items) => items,
            DataSpec::Single(map) => vec![Value::Object(map)],
            DataSpec::Scalar(value) => vec![value],
        }
    }
}
