//! Errores de los steps de demostración.
//!
//! Es el único tipo de error que recorre el pipeline de ejemplo; el core lo
//! reenvía sin inspeccionarlo.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdapterError {
    #[error("no route for {0}")]
    NotFound(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid JSON payload: {0}")]
    Parse(String),
    #[error("unexpected JSON shape: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for AdapterError {
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match err.classify() {
            Category::Data => Self::Decode(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Self::Parse(err.to_string()),
        }
    }
}
