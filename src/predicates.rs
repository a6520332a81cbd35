//! Library of predicates built on the unification engine

pub mod list;
