//! Names of variables and functions, and the generators that mint them.
//!
//! A name is made of two parts: an **identifier**, which is what makes two names equal, and a
//! **label**, which is only used for display. Identifiers come from a single process-wide counter,
//! so two names created separately can never collide, even if they share the same label:
//!
//! ```
//! use alg_expr::name::VariableName;
//!
//! let a = VariableName::labeled("x");
//! let b = VariableName::labeled("x");
//! assert_ne!(a, b);
//! assert_eq!(a.label(), b.label());
//! ```
//!
//! Labels that are not chosen by the caller are produced by a [`NameGenerator`]. Functions that
//! need fresh names come in two flavors: one that takes a `&mut NameGenerator` explicitly, and one
//! that uses the default generator of the current thread. The default generator can be reset
//! with [`reset_default_names`], which makes generated labels deterministic in tests.

use std::{
    cell::RefCell,
    fmt::{self, Display, Formatter},
    hash::{Hash, Hasher},
    sync::atomic::{AtomicU64, Ordering},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The next identifier to hand out. Identifiers are never reused.
static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Makes sure identifiers handed out from now on are greater than `id`.
#[cfg(feature = "serde")]
fn reserve_id(id: u64) {
    NEXT_ID.fetch_max(id.saturating_add(1), Ordering::Relaxed);
}

/// Serialized form of a name. Converting it back into a name keeps the identifier and reserves
/// it, so that names minted afterwards cannot collide with it.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawName {
    id: u64,
    label: String,
}

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident, $fresh:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[cfg_attr(feature = "serde", serde(from = "RawName"))]
        pub struct $name {
            id: u64,
            label: String,
        }

        impl $name {
            /// Creates a fresh name, labeled by the default generator of the current thread.
            pub fn new() -> Self {
                with_default_names(|names| names.$fresh())
            }

            /// Creates a fresh name with the given label.
            pub fn labeled(label: impl Into<String>) -> Self {
                Self { id: next_id(), label: label.into() }
            }

            /// Returns the unique identifier of this name.
            pub fn id(&self) -> u64 {
                self.id
            }

            /// Returns the display label of this name.
            pub fn label(&self) -> &str {
                &self.label
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $name {}

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.label)
            }
        }

        #[cfg(feature = "serde")]
        impl From<RawName> for $name {
            fn from(raw: RawName) -> Self {
                reserve_id(raw.id);
                Self { id: raw.id, label: raw.label }
            }
        }
    };
}

name_type!(
    /// The name of a variable.
    ///
    /// Variable names cannot appear in an expression directly; they are wrapped in an
    /// [`Expr::Variable`](crate::expr::Expr::Variable) or
    /// [`Expr::Placeholder`](crate::expr::Expr::Placeholder) node.
    VariableName,
    fresh_variable
);

name_type!(
    /// The name of a function, used by [`Expr::Call`](crate::expr::Expr::Call).
    FunctionName,
    fresh_function
);

/// Produces labels for fresh names.
///
/// Each call to [`NameGenerator::fresh_variable`] or [`NameGenerator::fresh_function`] returns a
/// name with a new identifier and a label made of a prefix and an increasing counter, such as `x1`,
/// `x2`, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameGenerator {
    variable_prefix: String,
    function_prefix: String,
    next_variable: u64,
    next_function: u64,
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::with_prefixes("x", "f")
    }
}

impl NameGenerator {
    /// Creates a generator that labels variables `x1`, `x2`, ... and functions `f1`, `f2`, ...
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with custom label prefixes.
    pub fn with_prefixes(variable_prefix: impl Into<String>, function_prefix: impl Into<String>) -> Self {
        Self {
            variable_prefix: variable_prefix.into(),
            function_prefix: function_prefix.into(),
            next_variable: 1,
            next_function: 1,
        }
    }

    /// Mints a fresh variable name.
    pub fn fresh_variable(&mut self) -> VariableName {
        let label = format!("{}{}", self.variable_prefix, self.next_variable);
        self.next_variable += 1;
        VariableName::labeled(label)
    }

    /// Mints a fresh function name.
    pub fn fresh_function(&mut self) -> FunctionName {
        let label = format!("{}{}", self.function_prefix, self.next_function);
        self.next_function += 1;
        FunctionName::labeled(label)
    }

    /// Restarts the label counters. Identifiers are unaffected, so names minted after a reset
    /// are still distinct from every earlier name.
    pub fn reset(&mut self) {
        self.next_variable = 1;
        self.next_function = 1;
    }
}

thread_local! {
    static DEFAULT_NAMES: RefCell<NameGenerator> = RefCell::new(NameGenerator::default());
}

/// Runs `f` with the default name generator of the current thread.
///
/// If the default generator is already in use further up the stack (for example when `f` calls
/// [`VariableName::new`]), `f` gets a new generator instead. Its labels may repeat labels handed
/// out by the default generator, but identifiers stay unique.
pub fn with_default_names<T>(f: impl FnOnce(&mut NameGenerator) -> T) -> T {
    DEFAULT_NAMES.with(|names| match names.try_borrow_mut() {
        Ok(mut names) => f(&mut names),
        Err(_) => f(&mut NameGenerator::default()),
    })
}

/// Resets the label counters of the default name generator of the current thread.
pub fn reset_default_names() {
    with_default_names(NameGenerator::reset);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn same_label_distinct_names() {
        let a = VariableName::labeled("a");
        let b = VariableName::labeled("a");
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn generator_labels() {
        let mut names = NameGenerator::with_prefixes("t", "g");
        assert_eq!(names.fresh_variable().label(), "t1");
        assert_eq!(names.fresh_variable().label(), "t2");
        assert_eq!(names.fresh_function().label(), "g1");

        names.reset();
        let again = names.fresh_variable();
        assert_eq!(again.label(), "t1");
    }

    #[test]
    fn reset_keeps_identity_fresh() {
        reset_default_names();
        let first = VariableName::new();
        reset_default_names();
        let second = VariableName::new();
        assert_eq!(first.label(), second.label());
        assert_ne!(first, second);
    }

    #[test]
    fn nested_default_generator() {
        reset_default_names();
        let (outer, inner) = with_default_names(|names| {
            let outer = names.fresh_variable();
            (outer, VariableName::new())
        });
        assert_eq!(outer.label(), "x1");
        assert_eq!(inner.label(), "x1");
        assert_ne!(outer, inner);

        // the default generator itself was only advanced by the outer call
        assert_eq!(VariableName::new().label(), "x2");
    }
}
