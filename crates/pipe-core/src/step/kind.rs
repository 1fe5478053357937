//! Taxonomía de steps y tabla de promoción.
//!
//! Un step se clasifica en dos ejes independientes:
//! - `Arity`: recibe un input (`Unary`) o no recibe nada (`Nullary`, emisor).
//! - `Mode`: síncrono infalible, síncrono falible o asíncrono falible.
//!
//! El cruce produce los seis `StepKind`. Componer dos steps nunca sale de
//! esta taxonomía: el modo resultante es el máximo de ambos modos
//! (`Infallible < Fallible < Async`) y la aridad es la del operando izquierdo.

use std::fmt;

/// Modo de ejecución de un step.
///
/// El orden importa: la promoción toma el máximo, así que lo asíncrono y lo
/// falible son "contagiosos".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    /// Devuelve un valor plano.
    Infallible,
    /// Devuelve un `Result`.
    Fallible,
    /// Recibe un `Completion` que se invoca exactamente una vez.
    Async,
}

impl Mode {
    /// Modo del step que resulta de combinar `self` con `other`.
    #[inline]
    pub fn promote(self, other: Mode) -> Mode {
        self.max(other)
    }
}

/// Aridad de entrada de un step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Nullary,
}

/// Los seis tipos concretos de step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    Map,
    ResultMap,
    AsyncMap,
    Emitter,
    ResultEmitter,
    AsyncResultEmitter,
}

impl StepKind {
    pub fn new(arity: Arity, mode: Mode) -> Self {
        match (arity, mode) {
            (Arity::Unary, Mode::Infallible) => StepKind::Map,
            (Arity::Unary, Mode::Fallible) => StepKind::ResultMap,
            (Arity::Unary, Mode::Async) => StepKind::AsyncMap,
            (Arity::Nullary, Mode::Infallible) => StepKind::Emitter,
            (Arity::Nullary, Mode::Fallible) => StepKind::ResultEmitter,
            (Arity::Nullary, Mode::Async) => StepKind::AsyncResultEmitter,
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            StepKind::Map | StepKind::ResultMap | StepKind::AsyncMap => Arity::Unary,
            StepKind::Emitter | StepKind::ResultEmitter | StepKind::AsyncResultEmitter => Arity::Nullary,
        }
    }

    pub fn mode(self) -> Mode {
        match self {
            StepKind::Map | StepKind::Emitter => Mode::Infallible,
            StepKind::ResultMap | StepKind::ResultEmitter => Mode::Fallible,
            StepKind::AsyncMap | StepKind::AsyncResultEmitter => Mode::Async,
        }
    }

    pub fn is_async(self) -> bool {
        self.mode() == Mode::Async
    }

    /// Kind del step compuesto `self` ∘ `rhs` (aplica a `then` y `or_else`).
    ///
    /// La aridad se conserva del lado izquierdo; el modo se promueve.
    pub fn promote(self, rhs: StepKind) -> StepKind {
        StepKind::new(self.arity(), self.mode().promote(rhs.mode()))
    }

    /// Kind tras aplicar el puente bloqueante: lo asíncrono pasa a falible,
    /// lo síncrono queda igual.
    pub fn unblocked(self) -> StepKind {
        match self.mode() {
            Mode::Async => StepKind::new(self.arity(), Mode::Fallible),
            _ => self,
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Map => "Map",
            StepKind::ResultMap => "ResultMap",
            StepKind::AsyncMap => "AsyncMap",
            StepKind::Emitter => "Emitter",
            StepKind::ResultEmitter => "ResultEmitter",
            StepKind::AsyncResultEmitter => "AsyncResultEmitter",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [StepKind; 6] = [StepKind::Map,
                                StepKind::ResultMap,
                                StepKind::AsyncMap,
                                StepKind::Emitter,
                                StepKind::ResultEmitter,
                                StepKind::AsyncResultEmitter];

    #[test]
    fn new_inverts_arity_and_mode() {
        for k in ALL {
            assert_eq!(StepKind::new(k.arity(), k.mode()), k);
        }
    }

    #[test]
    fn async_is_infectious() {
        for k in ALL {
            assert_eq!(k.promote(StepKind::AsyncMap).mode(), Mode::Async);
            assert_eq!(StepKind::AsyncMap.promote(k), StepKind::AsyncMap);
        }
    }

    #[test]
    fn fallibility_is_infectious_among_sync_kinds() {
        assert_eq!(StepKind::Map.promote(StepKind::ResultMap), StepKind::ResultMap);
        assert_eq!(StepKind::ResultMap.promote(StepKind::Map), StepKind::ResultMap);
        assert_eq!(StepKind::Emitter.promote(StepKind::ResultMap), StepKind::ResultEmitter);
        assert_eq!(StepKind::Map.promote(StepKind::Map), StepKind::Map);
    }

    #[test]
    fn left_operand_decides_arity() {
        assert_eq!(StepKind::Emitter.promote(StepKind::AsyncMap), StepKind::AsyncResultEmitter);
        assert_eq!(StepKind::ResultEmitter.promote(StepKind::Map), StepKind::ResultEmitter);
    }

    #[test]
    fn unblocked_only_touches_async_kinds() {
        assert_eq!(StepKind::AsyncMap.unblocked(), StepKind::ResultMap);
        assert_eq!(StepKind::AsyncResultEmitter.unblocked(), StepKind::ResultEmitter);
        assert_eq!(StepKind::Map.unblocked(), StepKind::Map);
        assert_eq!(StepKind::ResultEmitter.unblocked(), StepKind::ResultEmitter);
    }

    #[test]
    fn display_uses_kind_names() {
        assert_eq!(StepKind::AsyncResultEmitter.to_string(), "AsyncResultEmitter");
    }
}
