//! pipe-core: álgebra de composición de pipelines.
//!
//! Une steps definidos de forma independiente (síncronos o asíncronos,
//! infalibles o falibles) en un único step ejecutable, sin que el caller
//! escriba adaptadores entre formas. El crate no hace IO, no planifica ni
//! reintenta: sólo ordena los steps que recibe.
//!
//! ```ignore
//! let pipe = people
//!     .then(request)
//!     .tap(log_value)
//!     .then(fetch)
//!     .then(parse)
//!     .or_else(cached);
//! ```
pub mod step;

pub use step::{Arity, Completion, Mode, Source, Step, StepKind};
