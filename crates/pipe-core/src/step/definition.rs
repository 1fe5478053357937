use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;

use super::blocking::completion_dropped;
use super::{Source, StepKind};

/// Callback de finalización de un step asíncrono.
///
/// Es `FnOnce`: el sistema de tipos garantiza que se invoca a lo sumo una
/// vez. El contrato de un step asíncrono exige invocarlo exactamente una vez.
pub type Completion<Y, E> = Box<dyn FnOnce(Result<Y, E>) + Send + 'static>;

pub type MapFn<X, Y> = Arc<dyn Fn(X) -> Y + Send + Sync + 'static>;
pub type ResultMapFn<X, Y, E> = Arc<dyn Fn(X) -> Result<Y, E> + Send + Sync + 'static>;
pub type AsyncMapFn<X, Y, E> = Arc<dyn Fn(X, Completion<Y, E>) + Send + Sync + 'static>;

/// Step con un input `X` y output `Y` que puede fallar con `E`.
///
/// Cada variante es un tipo concreto de la taxonomía. Los operadores
/// (`then`, `or_else`, `tap`, `blocking`) resuelven la variante al componer,
/// nunca al invocar.
pub enum Step<X, Y, E> {
    /// `(X) -> Y`
    Map(MapFn<X, Y>),
    /// `(X) -> Result<Y, E>`
    ResultMap(ResultMapFn<X, Y, E>),
    /// `(X, Completion<Y, E>)`
    AsyncMap(AsyncMapFn<X, Y, E>),
}

impl<X, Y, E> Step<X, Y, E>
    where X: Send + 'static,
          Y: Send + 'static,
          E: Send + 'static
{
    pub fn map<F>(f: F) -> Self
        where F: Fn(X) -> Y + Send + Sync + 'static
    {
        Step::Map(Arc::new(f))
    }

    pub fn result_map<F>(f: F) -> Self
        where F: Fn(X) -> Result<Y, E> + Send + Sync + 'static
    {
        Step::ResultMap(Arc::new(f))
    }

    /// Construye un step asíncrono. `f` debe invocar el `Completion` recibido
    /// exactamente una vez, desde el contexto de ejecución que prefiera.
    pub fn async_map<F>(f: F) -> Self
        where F: Fn(X, Completion<Y, E>) + Send + Sync + 'static
    {
        Step::AsyncMap(Arc::new(f))
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Step::Map(_) => StepKind::Map,
            Step::ResultMap(_) => StepKind::ResultMap,
            Step::AsyncMap(_) => StepKind::AsyncMap,
        }
    }

    /// Invocación uniforme para cualquier kind. Los steps síncronos llaman a
    /// `done` antes de retornar.
    pub fn call<F>(&self, input: X, done: F)
        where F: FnOnce(Result<Y, E>) + Send + 'static
    {
        match self {
            Step::Map(f) => done(Ok(f(input))),
            Step::ResultMap(f) => done(f(input)),
            Step::AsyncMap(f) => f(input, Box::new(done)),
        }
    }

    /// Ejecuta un step síncrono en el hilo actual.
    ///
    /// Devuelve `None` sin invocar nada si el step es asíncrono; para esperar
    /// uno asíncrono hay que usar `call_async` o, explícitamente, `blocking`.
    pub fn run_sync(&self, input: X) -> Option<Result<Y, E>> {
        match self {
            Step::Map(f) => Some(Ok(f(input))),
            Step::ResultMap(f) => Some(f(input)),
            Step::AsyncMap(_) => None,
        }
    }

    /// Ejecuta el step como future de un solo disparo. Nunca bloquea.
    ///
    /// # Panics
    /// Si un step asíncrono descarta su `Completion` sin invocarlo.
    pub async fn call_async(&self, input: X) -> Result<Y, E> {
        match self {
            Step::Map(f) => Ok(f(input)),
            Step::ResultMap(f) => f(input),
            Step::AsyncMap(f) => {
                let (tx, rx) = oneshot::channel();
                f(input,
                  Box::new(move |res: Result<Y, E>| {
                      let _ = tx.send(res);
                  }));
                match rx.await {
                    Ok(res) => res,
                    Err(_) => completion_dropped(StepKind::AsyncMap),
                }
            }
        }
    }

    /// Aplicación parcial: fija el input y devuelve un emisor del mismo modo.
    pub fn bind(self, input: X) -> Source<Y, E>
        where X: Clone + Sync
    {
        match self {
            Step::Map(f) => Source::emitter(move || f(input.clone())),
            Step::ResultMap(f) => Source::result_emitter(move || f(input.clone())),
            Step::AsyncMap(f) => Source::async_emitter(move |done: Completion<Y, E>| f(input.clone(), done)),
        }
    }

    /// Eleva cualquier kind a la forma asíncrona. Los síncronos completan
    /// inline.
    pub(crate) fn into_async(self) -> AsyncMapFn<X, Y, E> {
        match self {
            Step::Map(f) => {
                let lifted: AsyncMapFn<X, Y, E> = Arc::new(move |x: X, done: Completion<Y, E>| done(Ok(f(x))));
                lifted
            }
            Step::ResultMap(f) => {
                let lifted: AsyncMapFn<X, Y, E> = Arc::new(move |x: X, done: Completion<Y, E>| done(f(x)));
                lifted
            }
            Step::AsyncMap(f) => f,
        }
    }
}

impl<X, Y, E> Clone for Step<X, Y, E> {
    fn clone(&self) -> Self {
        match self {
            Step::Map(f) => Step::Map(Arc::clone(f)),
            Step::ResultMap(f) => Step::ResultMap(Arc::clone(f)),
            Step::AsyncMap(f) => Step::AsyncMap(Arc::clone(f)),
        }
    }
}

impl<X, Y, E> fmt::Debug for Step<X, Y, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Step::Map(_) => StepKind::Map,
            Step::ResultMap(_) => StepKind::ResultMap,
            Step::AsyncMap(_) => StepKind::AsyncMap,
        };
        f.debug_tuple("Step").field(&kind).finish()
    }
}
