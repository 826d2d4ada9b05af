//! Algebraic expression trees, compared up to renaming of variables, and a rule-based engine to
//! rewrite them.
//!
//! - [`expr`]: the [`Expr`] tree, with alpha-equality and alpha-hashing.
//! - [`name`]: names of variables and functions, and the generators that mint fresh ones.
//! - [`rewrite`]: the [`Rewriter`] visitor, and variable renaming built on top of it.
//! - [`pattern`]: matching patterns containing placeholders against expressions.
//! - [`equivalence`]: rewrite rules made of two patterns, and a catalogue of identities.
//! - [`fmt`]: prefix notation and MathML rendering.
//!
//! ```
//! use alg_expr::{Expr, Identity, PatternBasedRewriter, VariableName};
//!
//! let a = Expr::Variable(VariableName::labeled("a"));
//! let b = Expr::Variable(VariableName::labeled("b"));
//!
//! // (a + b) + (-(a + b))
//! let sum = a + b;
//! let expr = sum.clone() + -sum;
//!
//! let rule = Identity::AMinusA.equivalence();
//! assert_eq!(rule.matches(&expr), 1);
//! assert_eq!(rule.apply(&expr, 0).unwrap(), Expr::constant(0.0));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for expressions and names.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html

pub mod equivalence;
pub mod expr;
pub mod fmt;
pub mod name;
pub mod pattern;
pub mod rewrite;

pub use equivalence::{Equivalence, Identity, PatternBasedRewriter};
pub use expr::{BinaryOpKind, Expr, UnaryOpKind};
pub use fmt::MathMl;
pub use name::{FunctionName, NameGenerator, VariableName};
pub use pattern::MatchSubstitutions;
pub use rewrite::Rewriter;
