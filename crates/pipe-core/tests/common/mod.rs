//! Steps de prueba compartidos por los tests de integración.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;

use pipe_core::{Completion, Source, Step};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestError {
    E1,
    E2,
}

pub type IntStep = Step<i32, i32, TestError>;

/// AsyncMap que suma 2 y completa inline.
pub fn add_two() -> IntStep {
    Step::async_map(|x: i32, done: Completion<i32, TestError>| done(Ok(x + 2)))
}

pub fn add_two_failing() -> IntStep {
    Step::async_map(|_: i32, done: Completion<i32, TestError>| done(Err(TestError::E1)))
}

/// AsyncMap que resta 3 desde otro hilo.
pub fn subtract_three() -> IntStep {
    Step::async_map(|x: i32, done: Completion<i32, TestError>| {
        std::thread::spawn(move || done(Ok(x - 3)));
    })
}

pub fn double() -> IntStep {
    Step::result_map(|x: i32| Ok(x * 2))
}

pub fn double_failing() -> IntStep {
    Step::result_map(|_: i32| Err(TestError::E2))
}

pub fn triple() -> IntStep {
    Step::map(|x: i32| x * 3)
}

pub fn stringify() -> Step<i32, String, TestError> {
    Step::result_map(|x: i32| Ok(x.to_string()))
}

pub fn create_six() -> Source<i32, TestError> {
    Source::emitter(|| 6)
}

pub fn create_four() -> Source<i32, TestError> {
    Source::result_emitter(|| Ok(4))
}

pub fn create_seven() -> Source<i32, TestError> {
    Source::async_emitter(|done: Completion<i32, TestError>| done(Ok(7)))
}

/// Un step de cada kind unario, para recorrer la tabla de promoción.
pub fn unary_kinds() -> Vec<IntStep> {
    vec![triple(), double(), add_two()]
}

pub fn nullary_kinds() -> Vec<Source<i32, TestError>> {
    vec![create_six(), create_four(), create_seven()]
}

/// Envuelve `step` contando sus invocaciones y registrando los inputs.
pub fn spy(step: IntStep) -> (IntStep, Arc<AtomicUsize>, mpsc::Receiver<i32>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let (tx, rx) = mpsc::channel();
    let counter = Arc::clone(&calls);
    let tx = std::sync::Mutex::new(tx);
    let probe: IntStep = Step::map(move |x: i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        let _ = tx.lock().unwrap().send(x);
        x
    });
    (probe.then(step), calls, rx)
}

/// Invoca `step` y espera su finalización (inline o desde otro hilo).
pub fn outcome<X, Y>(step: &Step<X, Y, TestError>, x: X) -> Result<Y, TestError>
    where X: Send + 'static,
          Y: Send + 'static
{
    let (tx, rx) = mpsc::channel();
    step.call(x, move |r| {
            let _ = tx.send(r);
        });
    rx.recv().expect("completion should fire exactly once")
}

pub fn source_outcome<X>(source: &Source<X, TestError>) -> Result<X, TestError>
    where X: Send + 'static
{
    let (tx, rx) = mpsc::channel();
    source.call(move |r| {
              let _ = tx.send(r);
          });
    rx.recv().expect("completion should fire exactly once")
}
