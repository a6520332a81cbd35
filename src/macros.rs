//! Macros for building terms

/// Build a compound term from a functor name and argument terms.
///
/// `structure!("foo", x, Term::atom("bar"))` is `foo(x, bar)`. With no
/// arguments the result is an atom.
#[macro_export]
macro_rules! structure {
    ($name:expr) => {
        $crate::prelude::Term::atom($name)
    };

    ($name:expr, $($arg:expr),* $(,)?) => {
        $crate::prelude::Term::compound($name, vec![$($arg.clone()),*])
    };
}

/// Build a proper list term out of `"."`/2 cells ending in `"[]"`.
///
/// `list![a, b ; t]` puts `t` in tail position instead of the empty list.
#[macro_export]
macro_rules! list {
    () => { $crate::prelude::Term::nil() };

    ($item:expr) => {
        $crate::prelude::Term::cons($item.clone(), $crate::prelude::Term::nil())
    };

    ($item:expr ; $tail:expr) => {
        $crate::prelude::Term::cons($item.clone(), $tail.clone())
    };

    ($item:expr, $($rest:tt)*) => {
        $crate::prelude::Term::cons($item.clone(), $crate::list![$($rest)*])
    };
}
