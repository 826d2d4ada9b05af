//! Names of the constants bound by the default context.
//!
//! Variables are identified by their name, not their label, so an expression must be built from
//! these exact names for the default bindings to apply:
//!
//! ```
//! use alg_eval::{consts::PI, eval::Eval};
//! use alg_expr::Expr;
//!
//! let expr = Expr::variable(&PI).cos();
//! assert_eq!(expr.eval_default().unwrap().as_f64(), Some(-1.0));
//! ```

use alg_expr::VariableName;
use once_cell::sync::Lazy;

/// Euler's number.
pub static E: Lazy<VariableName> = Lazy::new(|| VariableName::labeled("e"));

pub static PI: Lazy<VariableName> = Lazy::new(|| VariableName::labeled("pi"));

/// The imaginary unit.
pub static I: Lazy<VariableName> = Lazy::new(|| VariableName::labeled("i"));
