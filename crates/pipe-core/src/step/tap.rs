//! Passthrough (`tap`): observa el valor de éxito sin alterar el pipeline.
//!
//! El observador recibe `&Y` justo antes de que el valor se reenvíe, una vez
//! por ejecución exitosa y nunca ante un fallo. Kind, input, output y errores
//! del step no cambian.
//!
//! Con métodos encadenados la precedencia queda explícita:
//! `a.tap(log).or_else(b)` sólo observa `a`, mientras que
//! `a.or_else(b).tap(log)` observa el resultado combinado.

use std::sync::Arc;

use log::debug;

use super::{Completion, Source, Step};

impl<X, Y, E> Step<X, Y, E>
    where X: Send + 'static,
          Y: Send + 'static,
          E: Send + 'static
{
    pub fn tap<O>(self, observer: O) -> Step<X, Y, E>
        where O: Fn(&Y) + Send + Sync + 'static
    {
        debug!("tap: {}", self.kind());
        self.observe(Arc::new(observer))
    }

    pub(crate) fn observe(self, observer: Arc<dyn Fn(&Y) + Send + Sync>) -> Step<X, Y, E> {
        match self {
            Step::Map(f) => Step::map(move |x: X| {
                let y = f(x);
                observer(&y);
                y
            }),
            Step::ResultMap(f) => Step::result_map(move |x: X| {
                let res = f(x);
                if let Ok(y) = &res {
                    observer(y);
                }
                res
            }),
            Step::AsyncMap(f) => Step::async_map(move |x: X, done: Completion<Y, E>| {
                let observer = Arc::clone(&observer);
                f(x,
                  Box::new(move |res: Result<Y, E>| {
                      if let Ok(y) = &res {
                          observer(y);
                      }
                      done(res)
                  }));
            }),
        }
    }
}

impl<X, E> Source<X, E>
    where X: Send + 'static,
          E: Send + 'static
{
    pub fn tap<O>(self, observer: O) -> Source<X, E>
        where O: Fn(&X) + Send + Sync + 'static
    {
        debug!("tap: {}", self.kind());
        Source::from_step(self.into_step().observe(Arc::new(observer)))
    }
}
