//! Composición secuencial (`then`).
//!
//! `a.then(b)` produce un step `X -> Z` que ejecuta `a` y, sólo si tiene
//! éxito, ejecuta `b` con su valor. Un fallo de `a` termina el pipeline con
//! ese mismo error y `b` nunca se invoca.
//!
//! El kind del resultado sigue la tabla de promoción:
//!
//! | a \ b      | Map       | ResultMap | AsyncMap |
//! |------------|-----------|-----------|----------|
//! | Map        | Map       | ResultMap | AsyncMap |
//! | ResultMap  | ResultMap | ResultMap | AsyncMap |
//! | AsyncMap   | AsyncMap  | AsyncMap  | AsyncMap |
//!
//! Uso:
//!   let pipe = fetch.then(parse).then(decode);

use std::sync::Arc;

use log::{debug, trace};

use super::{Completion, Source, Step};

impl<X, Y, E> Step<X, Y, E>
    where X: Send + 'static,
          Y: Send + 'static,
          E: Send + 'static
{
    /// Encadena `next` tras `self`. Ver tabla del módulo.
    pub fn then<Z>(self, next: Step<Y, Z, E>) -> Step<X, Z, E>
        where Z: Send + 'static
    {
        debug!("then: {} -> {} => {}", self.kind(), next.kind(), self.kind().promote(next.kind()));
        self.chain(next)
    }

    pub(crate) fn chain<Z>(self, next: Step<Y, Z, E>) -> Step<X, Z, E>
        where Z: Send + 'static
    {
        match (self, next) {
            (Step::Map(f), Step::Map(g)) => Step::map(move |x: X| g(f(x))),
            (Step::Map(f), Step::ResultMap(g)) => Step::result_map(move |x: X| g(f(x))),
            (Step::ResultMap(f), Step::Map(g)) => Step::result_map(move |x: X| f(x).map(|y| g(y))),
            (Step::ResultMap(f), Step::ResultMap(g)) => Step::result_map(move |x: X| match f(x) {
                Ok(y) => g(y),
                Err(e) => {
                    trace!("then: short-circuit, skipping second step");
                    Err(e)
                }
            }),
            // Cualquier lado asíncrono hace asíncrono al resultado. El lado
            // síncrono se eleva y completa inline.
            (lhs, rhs) => {
                let f = lhs.into_async();
                let g = rhs.into_async();
                Step::async_map(move |x: X, done: Completion<Z, E>| {
                    let g = Arc::clone(&g);
                    f(x,
                      Box::new(move |res: Result<Y, E>| match res {
                          Ok(y) => g(y, done),
                          Err(e) => {
                              trace!("then: short-circuit, skipping second step");
                              done(Err(e))
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
    /// Encadena `next` tras el emisor; el resultado sigue siendo un emisor.
    pub fn then<Z>(self, next: Step<X, Z, E>) -> Source<Z, E>
        where Z: Send + 'static
    {
        debug!("then: {} -> {} => {}", self.kind(), next.kind(), self.kind().promote(next.kind()));
        Source::from_step(self.into_step().chain(next))
    }
}
