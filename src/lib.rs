//! Prolog-style operational semantics: terms, unification, and
//! backtracking expressed through success and failure continuations.

#[macro_use]
pub mod macros;
pub mod core;
pub mod predicates;
pub mod prelude;
pub mod testing;

#[cfg(test)]
mod acceptance_tests;
