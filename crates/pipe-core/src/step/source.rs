//! Steps sin input (emisores).
//!
//! `Source<X, E>` es la contraparte de aridad cero de `Step`. Los operadores
//! sobre un `Source` reutilizan la implementación de `Step` viendo el emisor
//! como un `Step<(), X, E>`.

use std::fmt;
use std::sync::Arc;

use tokio::sync::oneshot;

use super::blocking::completion_dropped;
use super::{Completion, Step, StepKind};

pub type EmitterFn<X> = Arc<dyn Fn() -> X + Send + Sync + 'static>;
pub type ResultEmitterFn<X, E> = Arc<dyn Fn() -> Result<X, E> + Send + Sync + 'static>;
pub type AsyncResultEmitterFn<X, E> = Arc<dyn Fn(Completion<X, E>) + Send + Sync + 'static>;

/// Productor de valores `X` que puede fallar con `E`.
pub enum Source<X, E> {
    /// `() -> X`
    Emitter(EmitterFn<X>),
    /// `() -> Result<X, E>`
    ResultEmitter(ResultEmitterFn<X, E>),
    /// `(Completion<X, E>)`
    AsyncResultEmitter(AsyncResultEmitterFn<X, E>),
}

impl<X, E> Source<X, E>
    where X: Send + 'static,
          E: Send + 'static
{
    pub fn emitter<F>(f: F) -> Self
        where F: Fn() -> X + Send + Sync + 'static
    {
        Source::Emitter(Arc::new(f))
    }

    pub fn result_emitter<F>(f: F) -> Self
        where F: Fn() -> Result<X, E> + Send + Sync + 'static
    {
        Source::ResultEmitter(Arc::new(f))
    }

    pub fn async_emitter<F>(f: F) -> Self
        where F: Fn(Completion<X, E>) + Send + Sync + 'static
    {
        Source::AsyncResultEmitter(Arc::new(f))
    }

    pub fn kind(&self) -> StepKind {
        match self {
            Source::Emitter(_) => StepKind::Emitter,
            Source::ResultEmitter(_) => StepKind::ResultEmitter,
            Source::AsyncResultEmitter(_) => StepKind::AsyncResultEmitter,
        }
    }

    pub fn call<F>(&self, done: F)
        where F: FnOnce(Result<X, E>) + Send + 'static
    {
        match self {
            Source::Emitter(f) => done(Ok(f())),
            Source::ResultEmitter(f) => done(f()),
            Source::AsyncResultEmitter(f) => f(Box::new(done)),
        }
    }

    /// `None` (sin invocar) si el emisor es asíncrono.
    pub fn run_sync(&self) -> Option<Result<X, E>> {
        match self {
            Source::Emitter(f) => Some(Ok(f())),
            Source::ResultEmitter(f) => Some(f()),
            Source::AsyncResultEmitter(_) => None,
        }
    }

    /// # Panics
    /// Si un emisor asíncrono descarta su `Completion` sin invocarlo.
    pub async fn call_async(&self) -> Result<X, E> {
        match self {
            Source::Emitter(f) => Ok(f()),
            Source::ResultEmitter(f) => f(),
            Source::AsyncResultEmitter(f) => {
                let (tx, rx) = oneshot::channel();
                f(Box::new(move |res: Result<X, E>| {
                      let _ = tx.send(res);
                  }));
                match rx.await {
                    Ok(res) => res,
                    Err(_) => completion_dropped(StepKind::AsyncResultEmitter),
                }
            }
        }
    }

    pub(crate) fn into_step(self) -> Step<(), X, E> {
        match self {
            Source::Emitter(f) => Step::map(move |_: ()| f()),
            Source::ResultEmitter(f) => Step::result_map(move |_: ()| f()),
            Source::AsyncResultEmitter(f) => Step::async_map(move |_: (), done: Completion<X, E>| f(done)),
        }
    }

    pub(crate) fn from_step(step: Step<(), X, E>) -> Self {
        match step {
            Step::Map(f) => Source::emitter(move || f(())),
            Step::ResultMap(f) => Source::result_emitter(move || f(())),
            Step::AsyncMap(f) => Source::async_emitter(move |done: Completion<X, E>| f((), done)),
        }
    }
}

impl<X, E> Clone for Source<X, E> {
    fn clone(&self) -> Self {
        match self {
            Source::Emitter(f) => Source::Emitter(Arc::clone(f)),
            Source::ResultEmitter(f) => Source::ResultEmitter(Arc::clone(f)),
            Source::AsyncResultEmitter(f) => Source::AsyncResultEmitter(Arc::clone(f)),
        }
    }
}

impl<X, E> fmt::Debug for Source<X, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Source::Emitter(_) => StepKind::Emitter,
            Source::ResultEmitter(_) => StepKind::ResultEmitter,
            Source::AsyncResultEmitter(_) => StepKind::AsyncResultEmitter,
        };
        f.debug_tuple("Source").field(&kind).finish()
    }
}
