use alg_error::ErrorKind;
use alg_expr::BinaryOpKind;
use crate::{
    error::kind::{TypeMismatch, UnsupportedOperation},
    value::{Complex, FieldElement, Real, Value},
};

/// Evaluates a binary expression with two real operands.
fn eval_real_operands<T: Real>(op: BinaryOpKind, left: T, right: T) -> T {
    match op {
        BinaryOpKind::Add => FieldElement::add(left, right),
        BinaryOpKind::Multiply => FieldElement::mul(left, right),
        BinaryOpKind::Divide => Real::div(left, right),
        BinaryOpKind::Exponentiate => Real::pow(left, right),
    }
}

/// Evaluates a binary expression with two complex operands.
fn eval_complex_operands<T: Real>(
    op: BinaryOpKind,
    left: Complex<T>,
    right: Complex<T>,
    typename: &'static str,
) -> Result<Complex<T>, Box<dyn ErrorKind>> {
    Ok(match op {
        BinaryOpKind::Add => FieldElement::add(left, right),
        BinaryOpKind::Multiply => FieldElement::mul(left, right),
        BinaryOpKind::Divide => left.div(right),
        BinaryOpKind::Exponentiate => return Err(Box::new(UnsupportedOperation {
            op: op.symbol(),
            operand: typename,
        })),
    })
}

/// Evaluates the binary expression given the operator, and the left and right operands.
pub(crate) fn eval_operands(
    op: BinaryOpKind,
    left: Value,
    right: Value,
) -> Result<Value, Box<dyn ErrorKind>> {
    let typename = left.type_name();
    match (left, right) {
        (Value::Single(left), Value::Single(right)) => {
            Ok(Value::Single(eval_real_operands(op, left, right)))
        },
        (Value::Double(left), Value::Double(right)) => {
            Ok(Value::Double(eval_real_operands(op, left, right)))
        },
        (Value::SingleComplex(left), Value::SingleComplex(right)) => {
            eval_complex_operands(op, left, right, typename).map(Value::SingleComplex)
        },
        (Value::DoubleComplex(left), Value::DoubleComplex(right)) => {
            eval_complex_operands(op, left, right, typename).map(Value::DoubleComplex)
        },
        _ => Err(Box::new(TypeMismatch {
            op: op.symbol(),
            left: typename,
            right: right.type_name(),
        })),
    }
}
