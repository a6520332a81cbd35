//! Common members of two lists: the query
//!
//!     member(Item, [cat, dog, frog]),
//!     member(Item, [cat, monkey, frog]).
//!
//! printed one solution at a time while backtracking through both
//! predicates.

use mini_prolog::list;
use mini_prolog::prelude::*;
use std::rc::Rc;

fn main() {
    let item = Term::fresh();
    let first = list![Term::atom("cat"), Term::atom("dog"), Term::atom("frog")];
    let second = list![Term::atom("cat"), Term::atom("monkey"), Term::atom("frog")];

    let mut engine = Engine::new();
    let probe = item.clone();
    let shown = item.clone();
    engine.solve(
        move |engine, on_success, on_failure| {
            let also_in_second: Cont = {
                let item = probe.clone();
                Rc::new(move |engine: &mut Engine, retry: Retry| {
                    member(engine, &item, &second, on_success.clone(), retry)
                })
            };
            member(engine, &probe, &first, also_in_second, on_failure)
        },
        move || {
            println!("Item = {:?}", shown.walk_star());
            true
        },
    );
}
