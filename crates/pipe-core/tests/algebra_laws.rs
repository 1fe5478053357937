//! Leyes del álgebra: cortocircuito, respaldo, pureza del tap y cierre de
//! kinds.

mod common;

use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};

use common::*;
use pipe_core::{Arity, Step, StepKind};

#[test]
fn then_short_circuits_on_failure() {
    for failing in [add_two_failing(), double_failing()] {
        let (next, calls, _) = spy(triple());
        let expected = outcome(&failing, 1);
        assert!(expected.is_err());
        assert_eq!(outcome(&failing.then(next), 1), expected);
        assert_eq!(calls.load(Ordering::SeqCst), 0, "second step must not run");
    }
}

#[test]
fn or_else_retries_with_original_input() {
    for failing in [add_two_failing(), double_failing()] {
        let (fallback, calls, inputs) = spy(subtract_three());
        assert_eq!(outcome(&failing.or_else(fallback), 5), Ok(2));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(inputs.recv().expect("fallback input"), 5);
    }
}

#[test]
fn or_else_skips_fallback_on_success() {
    for primary in unary_kinds() {
        let (fallback, calls, _) = spy(double());
        let expected = outcome(&primary, 3);
        assert_eq!(outcome(&primary.or_else(fallback), 3), expected);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}

#[test]
fn tap_is_pure() {
    for step in unary_kinds() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let expected = outcome(&step, 4);
        let tapped = step.clone().tap(move |y: &i32| sink.lock().unwrap().push(*y));
        assert_eq!(tapped.kind(), step.kind());
        let got = outcome(&tapped, 4);
        assert_eq!(got, expected);
        assert_eq!(*seen.lock().unwrap(), vec![got.expect("success")]);
    }
    for failing in [add_two_failing(), double_failing()] {
        let seen = Arc::new(Mutex::new(0));
        let sink = Arc::clone(&seen);
        let tapped = failing.tap(move |_: &i32| *sink.lock().unwrap() += 1);
        assert!(outcome(&tapped, 4).is_err());
        assert_eq!(*seen.lock().unwrap(), 0);
    }
}

#[test]
fn every_pairing_stays_in_the_taxonomy() {
    for lhs in unary_kinds() {
        for rhs in unary_kinds() {
            let expected = lhs.kind().promote(rhs.kind());
            assert_eq!(expected.arity(), Arity::Unary);
            let chained = lhs.clone().then(rhs.clone());
            let fallback = lhs.clone().or_else(rhs.clone());
            assert_eq!(chained.kind(), expected, "{} then {}", lhs.kind(), rhs.kind());
            assert_eq!(fallback.kind(), expected, "{} or_else {}", lhs.kind(), rhs.kind());
            assert_eq!(outcome(&chained, 1), outcome(&rhs, outcome(&lhs, 1).expect("lhs")));
        }
    }
    for src in nullary_kinds() {
        for rhs in unary_kinds() {
            let expected = src.kind().promote(rhs.kind());
            assert_eq!(expected.arity(), Arity::Nullary);
            assert_eq!(src.clone().then(rhs).kind(), expected);
        }
        for other in nullary_kinds() {
            let expected = src.kind().promote(other.kind());
            assert_eq!(src.clone().or_else(other).kind(), expected);
        }
    }
}

#[test]
fn tap_binds_tighter_than_or_else() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let (a, b) = (Arc::clone(&seen), Arc::clone(&seen));
    let left_only = add_two_failing().tap(move |y: &i32| a.lock().unwrap().push(*y)).or_else(subtract_three());
    assert_eq!(outcome(&left_only, 5), Ok(2));
    assert!(seen.lock().unwrap().is_empty());

    let combined = add_two_failing().or_else(subtract_three()).tap(move |y: &i32| b.lock().unwrap().push(*y));
    assert_eq!(outcome(&combined, 5), Ok(2));
    assert_eq!(*seen.lock().unwrap(), vec![2]);
}

#[test]
fn emitters_feed_pipelines() {
    let log = Arc::new(Mutex::new(Vec::new()));
    for src in nullary_kinds() {
        let sink = Arc::clone(&log);
        let pipe = src.tap(move |x: &i32| sink.lock().unwrap().push(*x)).then(stringify());
        let out = source_outcome(&pipe).expect("emitter pipeline");
        assert!(["6", "4", "7"].contains(&out.as_str()));
    }
    assert_eq!(*log.lock().unwrap(), vec![6, 4, 7]);

    let broken: pipe_core::Source<i32, TestError> = pipe_core::Source::result_emitter(|| Err(TestError::E2));
    let (next, calls, _) = spy(triple());
    assert_eq!(source_outcome(&broken.then(next)), Err(TestError::E2));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn sync_only_pipelines_never_need_a_completion() {
    let pipe: Step<i32, String, TestError> = triple().then(double()).then(stringify());
    assert_eq!(pipe.kind(), StepKind::ResultMap);
    assert_eq!(pipe.run_sync(1), Some(Ok("6".to_string())));
}
