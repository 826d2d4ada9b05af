//! MathML output.
//!
//! MathML support varies across browsers, so the output of this module may not display
//! correctly everywhere.

use crate::expr::{BinaryOpKind, Expr, UnaryOpKind};
use std::fmt::{Display, Formatter, Result};

/// A trait for types that can be formatted as MathML presentation markup.
pub trait MathMl {
    /// Format the value as MathML.
    fn fmt_mathml(&self, f: &mut Formatter) -> Result;

    /// Wraps the value in a [`MathMlFormatter`], which implements [`Display`].
    fn as_display(&self) -> MathMlFormatter<'_, Self> {
        MathMlFormatter(self)
    }

    /// Outputs the value as MathML.
    fn to_mathml(&self) -> String {
        self.as_display().to_string()
    }

    /// Outputs the value as HTML, by wrapping the MathML in a `<math>` tag.
    fn to_html(&self) -> String {
        format!("<math><mrow>{}</mrow></math>", self.as_display())
    }
}

/// A wrapper type that implements [`Display`] for any type that implements [`MathMl`].
pub struct MathMlFormatter<'a, T: ?Sized>(&'a T);

impl<T: ?Sized> Display for MathMlFormatter<'_, T>
where
    T: MathMl,
{
    fn fmt(&self, f: &mut Formatter) -> Result {
        self.0.fmt_mathml(f)
    }
}

/// Writes text, escaping the characters that are special in markup.
fn escaped(f: &mut Formatter, text: &str) -> Result {
    for c in text.chars() {
        match c {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            c => write!(f, "{}", c)?,
        }
    }
    Ok(())
}

fn fenced(f: &mut Formatter, inner: impl FnOnce(&mut Formatter) -> Result) -> Result {
    write!(f, "<mrow><mfenced separators=\"\">")?;
    inner(&mut *f)?;
    write!(f, "</mfenced></mrow>")
}

fn row(f: &mut Formatter, expr: &Expr) -> Result {
    write!(f, "<mrow>")?;
    expr.fmt_mathml(f)?;
    write!(f, "</mrow>")
}

impl MathMl for Expr {
    fn fmt_mathml(&self, f: &mut Formatter) -> Result {
        match self {
            Expr::Constant(value) => write!(f, "<mn>{}</mn>", value),
            Expr::Variable(name) | Expr::Placeholder(name) => {
                write!(f, "<mi>")?;
                escaped(f, name.label())?;
                write!(f, "</mi>")
            },
            Expr::Binary(BinaryOpKind::Divide, lhs, rhs) => {
                write!(f, "<mrow><mfrac>")?;
                row(f, lhs)?;
                row(f, rhs)?;
                write!(f, "</mfrac></mrow>")
            },
            Expr::Binary(BinaryOpKind::Exponentiate, lhs, rhs) => {
                write!(f, "<mrow><msup>")?;
                row(f, lhs)?;
                row(f, rhs)?;
                write!(f, "</msup></mrow>")
            },
            Expr::Binary(kind, lhs, rhs) => fenced(f, |f| {
                row(f, lhs)?;
                write!(f, "<mo>{}</mo>", kind.symbol())?;
                row(f, rhs)
            }),
            Expr::Unary(UnaryOpKind::Negate, operand) => fenced(f, |f| {
                write!(f, "<mo>-</mo>")?;
                row(f, operand)
            }),
            Expr::Unary(kind, operand) => fenced(f, |f| {
                write!(f, "<mi>{}</mi><mo>&ApplyFunction;</mo>", kind.symbol())?;
                row(f, operand)
            }),
            Expr::Call(name, args) => fenced(f, |f| {
                write!(f, "<mi>")?;
                escaped(f, name.label())?;
                write!(f, "</mi><mo>&ApplyFunction;</mo><mo>(</mo>")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, "<mo>,</mo>")?;
                    }
                    row(f, arg)?;
                }
                write!(f, "<mo>)</mo>")
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::name::{FunctionName, VariableName};
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn binary_and_unary() {
        let a = Expr::Variable(VariableName::labeled("a"));
        let expr = Expr::constant(2.0) * a.clone().cos();
        assert_eq!(
            expr.to_mathml(),
            "<mrow><mfenced separators=\"\">\
            <mrow><mn>2</mn></mrow>\
            <mo>*</mo>\
            <mrow><mrow><mfenced separators=\"\"><mi>cos</mi><mo>&ApplyFunction;</mo><mrow><mi>a</mi></mrow></mfenced></mrow></mrow>\
            </mfenced></mrow>",
        );
    }

    #[test]
    fn fraction_html() {
        let a = Expr::Variable(VariableName::labeled("a<b"));
        let expr = a / Expr::constant(3.0);
        assert_eq!(
            expr.to_html(),
            "<math><mrow><mrow><mfrac><mrow><mi>a&lt;b</mi></mrow><mrow><mn>3</mn></mrow></mfrac></mrow></mrow></math>",
        );
    }

    #[test]
    fn call_arguments() {
        let f = FunctionName::labeled("f");
        let expr = Expr::call(&f, vec![Expr::constant(1.0), Expr::constant(2.0)]);
        assert!(expr.to_mathml().contains("<mn>1</mn></mrow><mo>,</mo><mrow><mn>2</mn>"));
    }
}
