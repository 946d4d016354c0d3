//! Unary operator semantics.

use lox_ir::UnaryOp;

use crate::{EvalErrorKind, Value};

/// Apply `op` to an evaluated operand.
///
/// `!` negates truthiness and accepts any value; `-` requires a number.
pub fn evaluate_unary(value: &Value, op: UnaryOp) -> Result<Value, EvalErrorKind> {
    match (value, op) {
        (_, UnaryOp::Not) => Ok(Value::Bool(!value.is_truthy())),
        (Value::Number(n), UnaryOp::Neg) => Ok(Value::Number(-n)),
        (_, UnaryOp::Neg) => Err(EvalErrorKind::OperandNotNumber {
            found: value.type_name(),
        }),
    }
}
