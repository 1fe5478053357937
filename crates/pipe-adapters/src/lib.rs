//! pipe-adapters: colaboradores de demostración para `pipe-core`.
//!
//! Este crate provee:
//! - Modelos (`HttpRequest`, `Page<T>`, `Person`) serializables con serde.
//! - Un step por forma que usa el pipeline de ejemplo (`steps`).
//! - `AdapterError`, el único tipo de error que recorre ese pipeline.
//!
//! Nota: el core no conoce nada de esto; cualquier colaborador que respete
//! uno de los seis kinds es intercambiable.

pub mod error;
pub mod fixtures;
pub mod models;
pub mod pipeline;
pub mod steps;

pub use error::AdapterError;
pub use models::{HttpRequest, Page, Person};
pub use pipeline::{people_pipeline, people_pipeline_with_mirror};
