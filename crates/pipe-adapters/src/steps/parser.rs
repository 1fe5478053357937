use pipe_core::Step;
use serde_json::Value;

use crate::error::AdapterError;

/// Bytes -> JSON. Cualquier fallo de serde aquí es de sintaxis.
pub fn parse(bytes: Vec<u8>) -> Result<Value, AdapterError> {
    serde_json::from_slice(&bytes).map_err(|e| AdapterError::Parse(e.to_string()))
}

pub fn parse_step() -> Step<Vec<u8>, Value, AdapterError> {
    Step::result_map(parse)
}
