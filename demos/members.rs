//! Enumerate the members of a list by retrying after every solution.

use mini_prolog::list;
use mini_prolog::prelude::*;

fn main() {
    let item = Term::fresh();
    let animals = list![Term::atom("cat"), Term::atom("dog"), Term::atom("frog")];

    let mut engine = Engine::new();
    let probe = item.clone();
    let solutions = engine.collect(&item, move |engine, on_success, on_failure| {
        member(engine, &probe, &animals, on_success, on_failure)
    });

    for solution in solutions {
        println!("Item = {:?}", solution);
    }
}
