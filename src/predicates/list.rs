//! List predicates.
//!
//! [`member`] is the classic two-clause predicate
//!
//! ```prolog
//! member(X, [X|_]).
//! member(X, [_|T]) :- member(X, T).
//! ```
//!
//! expressed directly in continuation-passing style. Each clause builds the
//! template for its head, unifies it against the arguments, and wires the
//! fall-through to the next clause into the failure continuation. Clause
//! order is what makes solutions arrive in list order.

use crate::core::engine::{Cont, Engine, Retry};
use crate::core::term::Term;
use crate::core::unify::unify;
use std::rc::Rc;

/// Succeeds once for every occurrence of `item` in `list`, in list order.
///
/// Retrying yields the next occurrence; after the last one the failure
/// continuation escalates to the caller.
pub fn member(engine: &mut Engine, item: &Term, list: &Term, on_success: Cont, on_failure: Retry) {
    member_specific(engine, item, list, on_success, on_failure)
}

/// The first clause, `member(X, [X|_])`: the item heads the list.
///
/// Falls through to [`member_general`] when the head does not match.
pub fn member_specific(
    engine: &mut Engine,
    item: &Term,
    list: &Term,
    on_success: Cont,
    on_failure: Retry,
) {
    let head = Term::cons(item.clone(), Term::fresh());

    let mark = engine.checkpoint();
    let next_clause: Retry = {
        let item = item.clone();
        let list = list.clone();
        let on_success = on_success.clone();
        let on_failure = on_failure.clone();
        Rc::new(move |engine: &mut Engine| {
            engine.undo_to(mark);
            member_general(engine, &item, &list, on_success.clone(), on_failure.clone());
        })
    };

    // The clause body is empty, so success goes straight back to the caller.
    unify(engine, list, &head, on_success, next_clause);
}

/// The second clause, `member(X, [_|T]) :- member(X, T)`: search the tail.
///
/// This is the last clause, so when it fails the caller's failure
/// continuation takes over.
pub fn member_general(
    engine: &mut Engine,
    item: &Term,
    list: &Term,
    on_success: Cont,
    on_failure: Retry,
) {
    let tail = Term::fresh();
    let head = Term::cons(Term::fresh(), tail.clone());

    let mark = engine.checkpoint();
    let exhausted: Retry = {
        let on_failure = on_failure.clone();
        Rc::new(move |engine: &mut Engine| {
            engine.undo_to(mark);
            engine.fail(on_failure.clone());
        })
    };

    let body: Cont = {
        let item = item.clone();
        Rc::new(move |engine: &mut Engine, retry: Retry| {
            member_specific(engine, &item, &tail, on_success.clone(), retry)
        })
    };

    unify(engine, list, &head, body, exhausted);
}
