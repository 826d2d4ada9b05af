use alg_error::ErrorKind;
use alg_expr::UnaryOpKind;
use crate::{
    ctxt::TrigMode,
    error::kind::UnsupportedOperation,
    value::{FieldElement, Real, Value},
};

/// Evaluates a unary expression with a real operand.
fn eval_real_operand<T: Real>(op: UnaryOpKind, operand: T, trig_mode: TrigMode) -> T {
    match op {
        UnaryOpKind::Negate => FieldElement::neg(operand),
        UnaryOpKind::NaturalLog => Real::ln(operand),
        UnaryOpKind::Cosine => match trig_mode {
            TrigMode::Radians => Real::cos(operand),
            TrigMode::Degrees => Real::cos(Real::to_radians(operand)),
        },
    }
}

/// Evaluates the unary expression given the operator and the operand.
///
/// Negation is defined for every value. The other operations are only defined for real numbers.
pub(crate) fn eval_operand(
    op: UnaryOpKind,
    operand: Value,
    trig_mode: TrigMode,
) -> Result<Value, Box<dyn ErrorKind>> {
    match operand {
        Value::Single(n) => Ok(Value::Single(eval_real_operand(op, n, trig_mode))),
        Value::Double(n) => Ok(Value::Double(eval_real_operand(op, n, trig_mode))),
        Value::SingleComplex(c) if op == UnaryOpKind::Negate => {
            Ok(Value::SingleComplex(FieldElement::neg(c)))
        },
        Value::DoubleComplex(c) if op == UnaryOpKind::Negate => {
            Ok(Value::DoubleComplex(FieldElement::neg(c)))
        },
        Value::SingleComplex(_) | Value::DoubleComplex(_) => Err(Box::new(UnsupportedOperation {
            op: op.symbol(),
            operand: operand.type_name(),
        })),
    }
}
