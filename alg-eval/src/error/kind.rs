use alg_attrs::ErrorKind;
use alg_error::EXPR;
use ariadne::Fmt;

/// Formats a "did you mean" hint from a list of similar names.
fn suggest(kind: &str, suggestions: &[String], fallback: &str) -> String {
    match suggestions {
        [] => fallback.to_string(),
        [one] => format!("did you mean the `{}` {}?", one.fg(EXPR), kind),
        many => format!(
            "did you mean one of these {}s? {}",
            kind,
            many.iter()
                .map(|s| format!("`{}`", s.fg(EXPR)))
                .collect::<Vec<_>>()
                .join(", ")
        ),
    }
}

/// The given binary operation was applied to operands of different representations.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to these operands", self.op),
    labels = [
        format!("this operand has type `{}`", self.left),
        "this operator".to_string(),
        format!("this operand has type `{}`", self.right),
    ],
    help = "both operands must have the same type",
)]
pub struct TypeMismatch {
    /// The symbol of the operator that was used.
    pub op: &'static str,

    /// The type the left side evaluated to.
    pub left: &'static str,

    /// The type the right side evaluated to.
    pub right: &'static str,
}

/// The given operation is not defined for values of the given type.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot apply the `{}` operator to a value of type `{}`", self.op, self.operand),
    labels = [
        format!("this operand has type `{}`", self.operand),
        "this operator".to_string(),
    ],
    help = "this operation is only defined for real numbers",
)]
pub struct UnsupportedOperation {
    /// The symbol of the operator that was used.
    pub op: &'static str,

    /// The type of the operand the operation was applied to.
    pub operand: &'static str,
}

/// The variable has no value in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` has no value", self.name),
    labels = ["this variable"],
    help = suggest("variable", &self.suggestions, "add a value for it to the context"),
)]
pub struct MissingBinding {
    /// The label of the variable.
    pub name: String,

    /// The labels of similarly named variables in the context, if any.
    pub suggestions: Vec<String>,
}

/// The function is not defined in the context.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function does not exist", self.name),
    labels = ["this function"],
    help = suggest("function", &self.suggestions, "add it to the context"),
)]
pub struct UndefinedFunction {
    /// The label of the function.
    pub name: String,

    /// The labels of similarly named functions in the context, if any.
    pub suggestions: Vec<String>,
}

/// The function could not be applied to the given arguments.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the `{}` function could not be applied to its arguments", self.name),
    labels = ["this function call"],
    help = if self.args.is_empty() {
        "no arguments were given".to_string()
    } else {
        format!("the arguments have types: {}", self.args.join(", "))
    },
)]
pub struct FunctionFailed {
    /// The label of the function.
    pub name: String,

    /// The types of the arguments that were given.
    pub args: Vec<&'static str>,
}

/// Placeholders only stand for sub-expressions inside patterns, so they have no value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot evaluate the placeholder `{}`", self.name),
    labels = ["this placeholder"],
    note = "placeholders can only be used in patterns",
)]
pub struct PlaceholderNotEvaluable {
    /// The label of the placeholder.
    pub name: String,
}
