use alg_attrs::ErrorKind;
use alg_error::EXPR;
use ariadne::Fmt;

/// The pattern an equivalence rewrites from contains an ordinary variable.
///
/// The span of this error points into the prefix notation of the pattern.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the pattern contains the free variable `{}`", self.name),
    labels = ["this variable"],
    help = format!("replace `{}` with a placeholder", (&self.name).fg(EXPR)),
)]
pub struct FreeVariableInPattern {
    /// The label of the variable.
    pub name: String,
}

/// The replacement of an equivalence uses a placeholder that never appears in the pattern it
/// rewrites from, so the placeholder can never be bound to anything.
///
/// The span of this error points into the prefix notation of the replacement.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the placeholder `{}` is never bound", self.name),
    labels = ["this placeholder"],
    help = "every placeholder in the replacement must also appear in the pattern",
)]
pub struct UnboundPlaceholder {
    /// The label of the placeholder.
    pub name: String,
}

/// Attempted to apply an equivalence at a match that does not exist.
///
/// The span of this error points into the prefix notation of the expression being rewritten.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("there is no match at index {}", self.index),
    labels = ["this expression"],
    help = match self.matches {
        0 => "the pattern does not match anywhere in this expression".to_string(),
        1 => format!("the only valid index is {}", "0".fg(EXPR)),
        n => format!("valid indices are {} to {}", "0".fg(EXPR), (n - 1).fg(EXPR)),
    },
)]
pub struct MatchIndexOutOfRange {
    /// The index that was requested.
    pub index: usize,

    /// The number of matches in the expression.
    pub matches: usize,
}
