use crate::prelude::*;
use crate::testing::fails;
use crate::{list, structure};
use std::rc::Rc;

#[test]
fn unifying_matching_structures_binds_the_open_argument() {
    let x = Term::fresh();
    let left = structure!("foo", x, Term::atom("bar"));
    let right = structure!("foo", Term::atom("baz"), Term::atom("bar"));

    let mut engine = Engine::new();
    engine.solve(
        move |engine, cont, retry| unify(engine, &left, &right, cont, retry),
        || false,
    );

    assert_eq!(x.walk_star(), Term::atom("baz"));
}

#[test]
fn unifying_clashing_structures_fails_without_residue() {
    let x = Term::fresh();
    let left = structure!("foo", x, Term::atom("bar"));
    let right = structure!("foo", Term::atom("baz"), Term::atom("qux"));

    fails(move |engine, cont, retry| unify(engine, &left, &right, cont, retry));

    assert!(x.is_unbound());
}

#[test]
fn retrying_member_yields_every_list_element_then_exhaustion() {
    let item = Term::fresh();
    let animals = list![Term::atom("cat"), Term::atom("dog"), Term::atom("frog")];

    let mut engine = Engine::new();
    let probe = item.clone();
    let found = engine.collect(&item, move |engine, cont, retry| {
        member(engine, &probe, &animals, cont, retry)
    });

    assert_eq!(
        found,
        vec![Term::atom("cat"), Term::atom("dog"), Term::atom("frog")]
    );
    // Exhaustion reached the outermost failure continuation and rolled
    // every binding back.
    assert!(item.is_unbound());
}

#[test]
fn intersecting_two_lists_skips_the_unshared_members() {
    let item = Term::fresh();
    let first = list![Term::atom("cat"), Term::atom("dog"), Term::atom("frog")];
    let second = list![Term::atom("cat"), Term::atom("monkey"), Term::atom("frog")];

    let mut engine = Engine::new();
    let probe = item.clone();
    let found = engine.collect(&item, move |engine, on_success, on_failure| {
        // member(Item, first), member(Item, second): the second goal runs
        // in the success continuation of the first, and failing it retries
        // the first.
        let also_in_second: Cont = {
            let item = probe.clone();
            Rc::new(move |engine: &mut Engine, retry: Retry| {
                member(engine, &item, &second, on_success.clone(), retry)
            })
        };
        member(engine, &probe, &first, also_in_second, on_failure)
    });

    assert_eq!(found, vec![Term::atom("cat"), Term::atom("frog")]);
}

#[test]
fn clause_order_determines_solution_order() {
    let item = Term::fresh();
    let repeated = list![Term::atom("a"), Term::atom("b"), Term::atom("a")];

    let mut engine = Engine::new();
    let probe = item.clone();
    let found = engine.collect(&item, move |engine, cont, retry| {
        member(engine, &probe, &repeated, cont, retry)
    });

    assert_eq!(
        found,
        vec![Term::atom("a"), Term::atom("b"), Term::atom("a")]
    );
}
