pub use crate::{
    core::{
        engine::{Cont, Engine, Retry},
        term::{Compound, Term, Variable},
        trail::{Checkpoint, Trail},
        unify::unify,
    },
    predicates::list::{member, member_general, member_specific},
};
