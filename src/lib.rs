//! pipeflow: librería del demo
//!
//! Este crate agrupa lo que necesita el binario de demostración:
//! - `errors`: errores de nivel aplicación.
//! - `config`: configuración desde entorno (.env).
//! - `logging`: inicialización de logs.
//!
//! El álgebra vive en `pipe-core` y los steps de ejemplo en `pipe-adapters`;
//! ambos se re-exportan para comodidad.

pub mod config;
pub mod errors;
pub mod logging;

pub use pipe_adapters;
pub use pipe_core;

