//! Errors that can occur while evaluating an expression.
//!
//! Evaluation returns an [`alg_error::Error`], whose spans point into the prefix notation of the
//! evaluated expression. The concrete kinds are in [`kind`].

pub mod kind;

pub use alg_error::Error;
