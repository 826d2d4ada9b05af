//! Numerical evaluation of the expressions built with [`alg_expr`].
//!
//! An [`Expr`](alg_expr::Expr) is evaluated against a [`Ctxt`], which holds the values of
//! variables, the functions that calls refer to, and the precision that constants are evaluated
//! with. The default context binds the constants in [`consts`].
//!
//! ```
//! use alg_eval::{ctxt::Ctxt, eval::Eval, value::Value};
//! use alg_expr::{Expr, VariableName};
//!
//! let x = VariableName::labeled("x");
//! let mut ctxt = Ctxt::default();
//! ctxt.add_var(&x, 2.0);
//!
//! // (+ 3 x)
//! let expr = Expr::constant(3.0) + Expr::variable(&x);
//! assert_eq!(expr.eval(&ctxt).unwrap(), Value::Double(5.0));
//! ```
//!
//! Errors carry spans into the prefix notation of the evaluated expression, so they can be
//! rendered with [`ariadne`] the same way as errors from [`alg_expr`].
//!
//! # Features
//!
//! - `serde`: Derives [`Serialize`] and [`Deserialize`] for values, and the serialization traits
//!   of [`serde_repr`] for the settings of a context.
//!
//! [`Serialize`]: https://docs.rs/serde/latest/serde/trait.Serialize.html
//! [`Deserialize`]: https://docs.rs/serde/latest/serde/trait.Deserialize.html
//! [`serde_repr`]: https://docs.rs/serde_repr/latest/serde_repr/

pub mod consts;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;

pub use ctxt::{Ctxt, Precision, TrigMode};
pub use eval::{eval, Eval};
pub use value::{Complex, Value};
