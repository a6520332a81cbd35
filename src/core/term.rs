//! The term model.
//!
//! Everything the engine manipulates is a [`Term`]: either a logic variable
//! or a compound structure. Compounds are immutable shared structure;
//! variables carry the only mutable state in the whole model, their binding
//! slot.

use std::cell::RefCell;
use std::fmt::Formatter;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

static VAR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A well-formed binding chain is never longer than the number of bindings
/// ever made. Debug builds treat anything past this bound as a cycle.
const WALK_LIMIT: usize = 1 << 24;

/// A logic term: a variable or a compound structure.
#[derive(Clone)]
pub enum Term {
    Var(Rc<Variable>),
    Compound(Rc<Compound>),
}

/// A logic variable.
///
/// Any newly created variable is different from all previously created
/// variables. Cloning the surrounding [`Term`] preserves identity. The
/// binding slot is mutated exclusively through bind and reset; everything
/// else only reads it.
pub struct Variable {
    id: usize,
    binding: RefCell<Option<Term>>,
}

impl Variable {
    fn new() -> Self {
        let id = VAR_COUNTER.fetch_add(1, Ordering::Relaxed);
        Variable {
            id,
            binding: RefCell::new(None),
        }
    }

    /// The variable's unique id. Purely for display.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Is the variable currently bound?
    pub fn is_bound(&self) -> bool {
        self.binding.borrow().is_some()
    }

    pub(crate) fn binding(&self) -> Option<Term> {
        self.binding.borrow().clone()
    }

    /// Bind the variable. The caller is responsible for recording the
    /// binding on the trail.
    pub(crate) fn bind(&self, value: Term) {
        let mut slot = self.binding.borrow_mut();
        assert!(slot.is_none(), "bind is defined only on unbound variables");
        *slot = Some(value);
    }

    pub(crate) fn reset(&self) {
        *self.binding.borrow_mut() = None;
    }
}

/// A compound structure: a functor name applied to ordered sub-terms.
///
/// Arity 0 is what Prolog calls an atom. Immutable once constructed, so a
/// compound can be shared between any number of parent terms.
pub struct Compound {
    name: Rc<str>,
    args: Vec<Term>,
}

impl Compound {
    /// The functor name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered sub-terms.
    pub fn args(&self) -> &[Term] {
        &self.args
    }

    /// Number of sub-terms.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl Term {
    /// Create a fresh, unbound variable.
    pub fn fresh() -> Self {
        Term::Var(Rc::new(Variable::new()))
    }

    /// Create a compound term from a functor name and its arguments.
    pub fn compound(name: impl Into<Rc<str>>, args: Vec<Term>) -> Self {
        Term::Compound(Rc::new(Compound {
            name: name.into(),
            args,
        }))
    }

    /// Create an atom, a compound of arity 0.
    pub fn atom(name: impl Into<Rc<str>>) -> Self {
        Term::compound(name, vec![])
    }

    /// Create a list cell `"."(head, tail)`.
    pub fn cons(head: Term, tail: Term) -> Self {
        Term::compound(".", vec![head, tail])
    }

    /// The empty list atom `"[]"`.
    pub fn nil() -> Self {
        Term::atom("[]")
    }

    /// Resolve the term through its binding chain.
    ///
    /// Returns the first term in the chain that is a compound or an unbound
    /// variable. No side effects. Termination relies on chains being
    /// acyclic; debug builds bound the number of steps so a cyclic chain (a
    /// bug in the caller) fails fast instead of spinning forever.
    pub fn walk(&self) -> Term {
        let mut current = self.clone();
        let mut steps = 0;
        loop {
            let next = match &current {
                Term::Var(var) => match var.binding() {
                    Some(next) => next,
                    None => break,
                },
                Term::Compound(_) => break,
            };
            steps += 1;
            debug_assert!(steps < WALK_LIMIT, "binding chain does not terminate");
            current = next;
        }
        current
    }

    /// Resolve the term and all its sub-terms.
    ///
    /// Backtracking undoes bindings, so a caller that wants to keep a
    /// solution must take a deep snapshot of it first.
    pub fn walk_star(&self) -> Term {
        match self.walk() {
            t @ Term::Var(_) => t,
            Term::Compound(c) => {
                if c.args.is_empty() {
                    Term::Compound(c)
                } else {
                    let args = c.args.iter().map(Term::walk_star).collect();
                    Term::Compound(Rc::new(Compound {
                        name: Rc::clone(&c.name),
                        args,
                    }))
                }
            }
        }
    }

    /// True if the term resolves to an unbound variable.
    pub fn is_unbound(&self) -> bool {
        match self.walk() {
            Term::Var(_) => true,
            Term::Compound(_) => false,
        }
    }
}

/// Equality reads through bindings: variables compare by identity, compounds
/// by name, arity and element-wise arguments.
impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        match (self.walk(), other.walk()) {
            (Term::Var(a), Term::Var(b)) => Rc::ptr_eq(&a, &b),
            (Term::Compound(a), Term::Compound(b)) => {
                Rc::ptr_eq(&a, &b) || (a.name == b.name && a.args == b.args)
            }
            _ => false,
        }
    }
}

fn fmt_compound(c: &Compound, f: &mut Formatter) -> std::fmt::Result {
    write!(f, "{}", c.name)?;
    if let Some((first, rest)) = c.args.split_first() {
        write!(f, "({:?}", first)?;
        for arg in rest {
            write!(f, ", {:?}", arg)?;
        }
        write!(f, ")")?;
    }
    Ok(())
}

impl std::fmt::Debug for Term {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.walk() {
            Term::Var(v) => write!(f, "{:?}", v),
            Term::Compound(c) => fmt_compound(&c, f),
        }
    }
}

impl std::fmt::Debug for Variable {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "_{}", self.id)
    }
}

impl std::fmt::Debug for Compound {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        fmt_compound(self, f)
    }
}
