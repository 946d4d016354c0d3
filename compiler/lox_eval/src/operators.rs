//! Binary operator semantics.
//!
//! Independent of tree walking: operands arrive already evaluated, and a
//! failure comes back as a bare [`EvalErrorKind`] for the caller to
//! locate at the operator token.

use std::rc::Rc;

use lox_ir::BinaryOp;

use crate::{EvalErrorKind, Value};

/// Apply `op` to two evaluated operands.
///
/// `==`/`!=` accept any pair. `+` takes two numbers or two strings. Every
/// other operator requires two numbers and follows IEEE-754, so division
/// by zero yields an infinity or NaN rather than an error.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers hand over freshly evaluated operands"
)]
pub fn evaluate_binary(left: Value, right: Value, op: BinaryOp) -> Result<Value, EvalErrorKind> {
    match op {
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        BinaryOp::Add => add(&left, &right),
        BinaryOp::Sub => numbers(&left, &right).map(|(a, b)| Value::Number(a - b)),
        BinaryOp::Mul => numbers(&left, &right).map(|(a, b)| Value::Number(a * b)),
        BinaryOp::Div => numbers(&left, &right).map(|(a, b)| Value::Number(a / b)),
        BinaryOp::Gt => numbers(&left, &right).map(|(a, b)| Value::Bool(a > b)),
        BinaryOp::GtEq => numbers(&left, &right).map(|(a, b)| Value::Bool(a >= b)),
        BinaryOp::Lt => numbers(&left, &right).map(|(a, b)| Value::Bool(a < b)),
        BinaryOp::LtEq => numbers(&left, &right).map(|(a, b)| Value::Bool(a <= b)),
    }
}

fn add(left: &Value, right: &Value) -> Result<Value, EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(a), Value::Str(b)) => {
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        _ => Err(EvalErrorKind::InvalidAddOperands {
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

#[inline]
fn numbers(left: &Value, right: &Value) -> Result<(f64, f64), EvalErrorKind> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(EvalErrorKind::OperandsNotNumbers {
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}
