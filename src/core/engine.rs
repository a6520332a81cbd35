//! Control flow for nondeterministic resolution.
//!
//! Predicates and the unification engine never return a result; they hand
//! their outcome to one of two continuations. The success continuation
//! receives the current failure continuation, so a caller can later retry
//! past the success from an up-to-date point. The failure continuation
//! restores the trail to its checkpoint before anything else, then proceeds
//! to the next alternative. A choice point is nothing more than such a
//! closure holding a checkpoint.
//!
//! Continuations are not invoked directly. Every invocation is scheduled on
//! the engine and executed by a work loop, so straight-line chains of
//! successes run in constant call-stack space no matter how long they get.

use crate::core::term::{Term, Variable};
use crate::core::trail::{Checkpoint, Trail};
use std::cell::RefCell;
use std::rc::Rc;

/// Failure continuation: roll back to the choice point, then try the next
/// alternative or escalate.
pub type Retry = Rc<dyn Fn(&mut Engine)>;

/// Success continuation: carry on, keeping the [`Retry`] at hand in case
/// the caller comes back for more solutions.
pub type Cont = Rc<dyn Fn(&mut Engine, Retry)>;

type Thunk = Box<dyn FnOnce(&mut Engine)>;

/// The resolution context.
///
/// Owns the trail — the only mutable state shared across a resolution — and
/// the one-slot trampoline that drives scheduled continuations.
pub struct Engine {
    trail: Trail,
    pending: Option<Thunk>,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Engine {
            trail: Trail::new(),
            pending: None,
        }
    }

    /// Capture the current trail position.
    pub fn checkpoint(&self) -> Checkpoint {
        self.trail.checkpoint()
    }

    /// Roll the trail back to `mark`, unbinding in reverse binding order.
    pub fn undo_to(&mut self, mark: Checkpoint) {
        self.trail.undo_to(mark);
    }

    /// Bind an unbound variable and record the binding for rollback.
    pub(crate) fn bind(&mut self, var: &Rc<Variable>, value: Term) {
        var.bind(value);
        self.trail.record(Rc::clone(var));
    }

    /// Schedule the success continuation, handing it the retry point.
    pub fn succeed(&mut self, cont: Cont, retry: Retry) {
        self.schedule(move |engine: &mut Engine| (*cont)(engine, retry));
    }

    /// Schedule the failure continuation.
    pub fn fail(&mut self, retry: Retry) {
        self.schedule(move |engine: &mut Engine| (*retry)(engine));
    }

    fn schedule(&mut self, thunk: impl FnOnce(&mut Engine) + 'static) {
        debug_assert!(
            self.pending.is_none(),
            "a continuation was invoked twice on the same path"
        );
        self.pending = Some(Box::new(thunk));
    }

    /// Drive scheduled continuations until the computation goes quiet.
    pub fn run(&mut self) {
        while let Some(thunk) = self.pending.take() {
            thunk(self);
        }
    }

    /// Run `goal`, reporting each solution to `on_solution`.
    ///
    /// The callback decides whether to keep searching: `true` invokes the
    /// failure continuation delivered with the solution (backtrack and try
    /// the next alternative), `false` ends the search with the current
    /// solution's bindings still in place. When the alternatives are
    /// exhausted the search ends; by then the failure-continuation chain
    /// has rolled back every binding guarded by a choice point.
    pub fn solve<G, F>(&mut self, goal: G, on_solution: F)
    where
        G: FnOnce(&mut Engine, Cont, Retry),
        F: FnMut() -> bool + 'static,
    {
        let on_solution = RefCell::new(on_solution);
        let report: Cont = Rc::new(move |engine: &mut Engine, retry: Retry| {
            let keep_searching = (&mut *on_solution.borrow_mut())();
            if keep_searching {
                engine.fail(retry);
            }
        });
        let exhausted: Retry = Rc::new(|_: &mut Engine| {});

        goal(self, report, exhausted);
        self.run();
    }

    /// Collect the fully resolved value of `watch` for every solution of
    /// `goal`, in the order the solutions are produced.
    pub fn collect<G>(&mut self, watch: &Term, goal: G) -> Vec<Term>
    where
        G: FnOnce(&mut Engine, Cont, Retry),
    {
        let solutions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&solutions);
        let watch = watch.clone();
        self.solve(goal, move || {
            sink.borrow_mut().push(watch.walk_star());
            true
        });
        solutions.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::unify::unify;
    use std::cell::Cell;

    #[test]
    fn scheduled_continuations_run_in_sequence() {
        let mut engine = Engine::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let trace = Rc::clone(&order);
        let retry: Retry = Rc::new(move |_: &mut Engine| trace.borrow_mut().push("retry"));
        let trace = Rc::clone(&order);
        let cont: Cont = Rc::new(move |engine: &mut Engine, retry: Retry| {
            trace.borrow_mut().push("success");
            engine.fail(retry);
        });

        engine.succeed(cont, retry);
        engine.run();

        assert_eq!(*order.borrow(), vec!["success", "retry"]);
    }

    #[test]
    fn solving_a_trivial_goal_reports_one_solution() {
        let mut engine = Engine::new();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);

        engine.solve(
            |engine, cont, retry| unify(engine, &Term::atom("a"), &Term::atom("a"), cont, retry),
            move || {
                seen.set(seen.get() + 1);
                true
            },
        );

        assert_eq!(count.get(), 1);
    }

    #[test]
    fn stopping_early_keeps_the_solution_bindings() {
        let x = Term::fresh();
        let probe = x.clone();
        let mut engine = Engine::new();

        engine.solve(
            move |engine, cont, retry| unify(engine, &probe, &Term::atom("a"), cont, retry),
            || false,
        );

        assert_eq!(x.walk_star(), Term::atom("a"));
    }

    #[test]
    fn unifying_a_long_list_does_not_grow_the_call_stack() {
        let mut items = Term::nil();
        let mut pattern = Term::nil();
        for _ in 0..2_500 {
            items = Term::cons(Term::atom("x"), items);
            pattern = Term::cons(Term::fresh(), pattern);
        }

        let mut engine = Engine::new();
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        engine.solve(
            move |engine, cont, retry| unify(engine, &items, &pattern, cont, retry),
            move || {
                seen.set(seen.get() + 1);
                true
            },
        );

        assert_eq!(count.get(), 1);
    }
}
