//! Álgebra de composición de steps.
//!
//! Un step es un callable con una forma fija (ver `StepKind`). Este módulo
//! define:
//! - `Step` (un input) y `Source` (sin input, emisores) como enums etiquetados
//!   por kind.
//! - `then` (pipeline.rs): composición secuencial con cortocircuito.
//! - `or_else` (fallback.rs): respaldo con el input original.
//! - `tap` (tap.rs): observador del valor de éxito.
//! - `blocking` (blocking.rs): puente asíncrono -> síncrono.
//!
//! Todos los operadores consumen sus operandos y devuelven un step nuevo del
//! kind que dicta la tabla de promoción; nunca ejecutan nada al componer.

mod blocking;
pub mod definition;
mod fallback;
pub mod kind;
pub mod pipeline;
pub mod source;
mod tap;

pub use definition::{AsyncMapFn, Completion, MapFn, ResultMapFn, Step};
pub use kind::{Arity, Mode, StepKind};
pub use source::{AsyncResultEmitterFn, EmitterFn, ResultEmitterFn, Source};
