//! Helpers shared by the test suites.

use crate::core::engine::{Cont, Engine, Retry};
use std::cell::Cell;
use std::rc::Rc;

/// Run `goal` to exhaustion and report whether it produced any solution.
pub fn has_solution(goal: impl FnOnce(&mut Engine, Cont, Retry)) -> bool {
    let mut engine = Engine::new();
    let found = Rc::new(Cell::new(false));
    let flag = Rc::clone(&found);
    engine.solve(goal, move || {
        flag.set(true);
        true
    });
    found.get()
}

/// Assert that a goal succeeds at least once.
pub fn succeeds(goal: impl FnOnce(&mut Engine, Cont, Retry)) {
    assert!(has_solution(goal), "expected the goal to succeed");
}

/// Assert that a goal fails.
pub fn fails(goal: impl FnOnce(&mut Engine, Cont, Retry)) {
    assert!(!has_solution(goal), "expected the goal to fail");
}
