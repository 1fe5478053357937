use pipe_adapters::AdapterError;
use thiserror::Error;

/// Errores del binario de demostración.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("el pipeline '{0}' sigue siendo asíncrono después de `blocking`")]
    StillAsync(&'static str),
    #[error("no se pudo crear el runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("variable {var}={value} inválida: {reason}")]
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("falló el pipeline: {0}")]
    Pipeline(#[from] AdapterError),
}
