//! Operador de respaldo (`or_else`).
//!
//! `a.or_else(b)` ejecuta `a`; si falla, ejecuta `b` con el input ORIGINAL
//! (nunca con el error de `a`) y devuelve su resultado tal cual. Si `a` tiene
//! éxito, `b` no se invoca. Ambos comparten input, output y tipo de error.
//!
//! La promoción de kinds es la misma que en `then`. Un `b` de tipo `Map` no
//! puede fallar, así que su valor se envuelve como éxito.

use std::sync::Arc;

use log::{debug, trace};

use super::{Completion, Source, Step};

impl<X, Y, E> Step<X, Y, E>
    where X: Clone + Send + 'static,
          Y: Send + 'static,
          E: Send + 'static
{
    /// Intenta `self`; si falla, `fallback` con el mismo input.
    pub fn or_else(self, fallback: Step<X, Y, E>) -> Step<X, Y, E> {
        debug!("or_else: {} | {} => {}",
               self.kind(),
               fallback.kind(),
               self.kind().promote(fallback.kind()));
        self.fallback_to(fallback)
    }

    pub(crate) fn fallback_to(self, fallback: Step<X, Y, E>) -> Step<X, Y, E> {
        match (self, fallback) {
            // Un Map nunca falla: el respaldo queda inalcanzable.
            (Step::Map(f), Step::Map(_)) => Step::Map(f),
            (Step::Map(f), Step::ResultMap(_)) => Step::result_map(move |x: X| Ok(f(x))),
            (Step::ResultMap(f), Step::Map(g)) => Step::result_map(move |x: X| match f(x.clone()) {
                Ok(y) => Ok(y),
                Err(_) => {
                    trace!("or_else: primary failed, running fallback");
                    Ok(g(x))
                }
            }),
            (Step::ResultMap(f), Step::ResultMap(g)) => Step::result_map(move |x: X| match f(x.clone()) {
                Ok(y) => Ok(y),
                Err(_) => {
                    trace!("or_else: primary failed, running fallback");
                    g(x)
                }
            }),
            (lhs, rhs) => {
                let f = lhs.into_async();
                let g = rhs.into_async();
                Step::async_map(move |x: X, done: Completion<Y, E>| {
                    let g = Arc::clone(&g);
                    let original = x.clone();
                    f(x,
                      Box::new(move |res: Result<Y, E>| match res {
                          Ok(y) => done(Ok(y)),
                          Err(_) => {
                              trace!("or_else: primary failed, running fallback");
                              g(original, done)
                          }
                      }));
                })
            }
        }
    }
}

impl<X, E> Source<X, E>
    where X: Send + 'static,
          E: Send + 'static
{
    /// Intenta este emisor; si falla, emite desde `fallback`.
    pub fn or_else(self, fallback: Source<X, E>) -> Source<X, E> {
        debug!("or_else: {} | {} => {}",
               self.kind(),
               fallback.kind(),
               self.kind().promote(fallback.kind()));
        Source::from_step(self.into_step().fallback_to(fallback.into_step()))
    }
}
