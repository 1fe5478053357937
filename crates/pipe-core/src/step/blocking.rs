//! Puente bloqueante: convierte un step asíncrono en uno síncrono falible.
//!
//! # Deadlock
//! El step resultante bloquea el hilo que lo invoca hasta que el step
//! asíncrono llama a su `Completion`. Si ese `Completion` se ejecuta en el
//! mismo contexto de ejecución que quedó bloqueado (p.ej. un reactor de un
//! solo hilo que el caller también ocupa), la llamada no retorna nunca. El
//! puente no detecta esta situación ni aplica timeout: garantizar que el step
//! complete en otro contexto es responsabilidad del caller.
//!
//! La espera no consulta el contexto de tokio: se puede invocar desde dentro
//! de `Runtime::block_on` siempre que el step complete en otro hilo.
//!
//! # Panics
//! Si el step asíncrono descarta su `Completion` sin invocarlo.

use std::sync::mpsc;

use log::debug;

use super::{Completion, Source, Step, StepKind};

/// Un `Completion` descartado sin invocarse rompe el contrato del step: no
/// hay `Result` que entregar.
pub(crate) fn completion_dropped(kind: StepKind) -> ! {
    panic!("{kind} step dropped its completion without invoking it")
}

impl<X, Y, E> Step<X, Y, E>
    where X: Send + 'static,
          Y: Send + 'static,
          E: Send + 'static
{
    /// `AsyncMap` -> `ResultMap` esperando la finalización en el hilo actual.
    /// Sobre un step síncrono es la identidad. Ver la documentación del
    /// módulo sobre el riesgo de deadlock.
    pub fn blocking(self) -> Step<X, Y, E> {
        debug!("blocking: {} => {}", self.kind(), self.kind().unblocked());
        self.unblock()
    }

    pub(crate) fn unblock(self) -> Step<X, Y, E> {
        match self {
            Step::AsyncMap(f) => Step::result_map(move |x: X| {
                let (tx, rx) = mpsc::sync_channel(1);
                f(x,
                  Box::new(move |res: Result<Y, E>| {
                      let _ = tx.send(res);
                  }) as Completion<Y, E>);
                match rx.recv() {
                    Ok(res) => res,
                    Err(_) => completion_dropped(StepKind::AsyncMap),
                }
            }),
            sync => sync,
        }
    }
}

impl<X, E> Source<X, E>
    where X: Send + 'static,
          E: Send + 'static
{
    /// `AsyncResultEmitter` -> `ResultEmitter`. Mismo riesgo de deadlock que
    /// `Step::blocking`.
    pub fn blocking(self) -> Source<X, E> {
        debug!("blocking: {} => {}", self.kind(), self.kind().unblocked());
        Source::from_step(self.into_step().unblock())
    }
}
