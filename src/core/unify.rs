//! The unification engine.
//!
//! [`unify`] matches two terms, binding unbound variables until both sides
//! are equal, and hands control to one of its two continuations. All
//! bindings go through the trail, so a failure continuation can always
//! restore the state that held when its choice point was created.

use crate::core::engine::{Cont, Engine, Retry};
use crate::core::term::{Compound, Term};
use std::rc::Rc;

/// Unify two terms.
///
/// On success every newly bound variable has been recorded on the trail and
/// `on_success` runs with an up-to-date retry point. On failure `on_failure`
/// runs; once the failure-continuation chain has finished, no net bindings
/// from this call remain. Rollback is owned by the failure continuations,
/// never by `unify` itself.
pub fn unify(engine: &mut Engine, t0: &Term, t1: &Term, on_success: Cont, on_failure: Retry) {
    let t0 = t0.walk();
    let t1 = t1.walk();
    match (&t0, &t1) {
        // The same unbound variable on both sides is already equal, and
        // binding it here would create a cycle.
        (Term::Var(v0), Term::Var(v1)) if Rc::ptr_eq(v0, v1) => {
            engine.succeed(on_success, on_failure);
        }
        // An unbound variable takes the other side's value. When both sides
        // are variables, the left one binds to the right.
        (Term::Var(v0), _) => {
            engine.bind(v0, t1.clone());
            engine.succeed(on_success, on_failure);
        }
        (_, Term::Var(v1)) => {
            engine.bind(v1, t0.clone());
            engine.succeed(on_success, on_failure);
        }
        (Term::Compound(c0), Term::Compound(c1)) => {
            if c0.name() == c1.name() && c0.arity() == c1.arity() {
                unify_args(engine, Rc::clone(c0), Rc::clone(c1), 0, on_success, on_failure);
            } else {
                engine.fail(on_failure);
            }
        }
    }
}

/// Unify corresponding argument pairs, left to right.
///
/// Each position captures its own checkpoint and wraps the failure
/// continuation so that failing at position `k` first undoes the bindings
/// made from position `k` onward, then escalates outward. The caller
/// checked the arity, so both compounds have the same number of arguments.
fn unify_args(
    engine: &mut Engine,
    c0: Rc<Compound>,
    c1: Rc<Compound>,
    position: usize,
    on_success: Cont,
    on_failure: Retry,
) {
    if position == c0.arity() {
        engine.succeed(on_success, on_failure);
        return;
    }

    let mark = engine.checkpoint();
    let undo_then_escalate: Retry = {
        let on_failure = on_failure.clone();
        Rc::new(move |engine: &mut Engine| {
            engine.undo_to(mark);
            engine.fail(on_failure.clone());
        })
    };

    let rest: Cont = {
        let c0 = Rc::clone(&c0);
        let c1 = Rc::clone(&c1);
        Rc::new(move |engine: &mut Engine, retry: Retry| {
            unify_args(
                engine,
                Rc::clone(&c0),
                Rc::clone(&c1),
                position + 1,
                on_success.clone(),
                retry,
            )
        })
    };

    unify(
        engine,
        &c0.args()[position],
        &c1.args()[position],
        rest,
        undo_then_escalate,
    );
}
