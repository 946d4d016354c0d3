//! Tests for binary operator semantics.

use crate::{evaluate_binary, EvalErrorKind, Value};
use lox_ir::BinaryOp;
use pretty_assertions::assert_eq;

fn num(n: f64) -> Value {
    Value::Number(n)
}

fn s(text: &str) -> Value {
    Value::string(text)
}

#[test]
fn test_arithmetic() {
    assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Add), Ok(num(3.0)));
    assert_eq!(evaluate_binary(num(5.0), num(3.0), BinaryOp::Sub), Ok(num(2.0)));
    assert_eq!(evaluate_binary(num(2.0), num(3.5), BinaryOp::Mul), Ok(num(7.0)));
    assert_eq!(evaluate_binary(num(7.0), num(2.0), BinaryOp::Div), Ok(num(3.5)));
}

#[test]
fn test_division_by_zero_follows_ieee() {
    assert_eq!(
        evaluate_binary(num(1.0), num(0.0), BinaryOp::Div),
        Ok(num(f64::INFINITY))
    );
    assert_eq!(
        evaluate_binary(num(-1.0), num(0.0), BinaryOp::Div),
        Ok(num(f64::NEG_INFINITY))
    );
    let nan = evaluate_binary(num(0.0), num(0.0), BinaryOp::Div);
    assert!(matches!(nan, Ok(Value::Number(n)) if n.is_nan()));
}

#[test]
fn test_string_concatenation() {
    assert_eq!(evaluate_binary(s("a"), s("b"), BinaryOp::Add), Ok(s("ab")));
    assert_eq!(evaluate_binary(s(""), s(""), BinaryOp::Add), Ok(s("")));
}

#[test]
fn test_add_rejects_mixed_kinds() {
    assert_eq!(
        evaluate_binary(num(1.0), s("a"), BinaryOp::Add),
        Err(EvalErrorKind::InvalidAddOperands {
            left: "number",
            right: "string",
        })
    );
    assert_eq!(
        evaluate_binary(Value::Nil, Value::Nil, BinaryOp::Add),
        Err(EvalErrorKind::InvalidAddOperands {
            left: "nil",
            right: "nil",
        })
    );
}

#[test]
fn test_numeric_operators_reject_non_numbers() {
    for op in [
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Gt,
        BinaryOp::GtEq,
        BinaryOp::Lt,
        BinaryOp::LtEq,
    ] {
        let result = evaluate_binary(s("a"), s("b"), op);
        assert_eq!(
            result,
            Err(EvalErrorKind::OperandsNotNumbers {
                left: "string",
                right: "string",
            }),
            "{op:?}"
        );
    }
}

#[test]
fn test_comparisons() {
    assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Lt), Ok(Value::Bool(true)));
    assert_eq!(evaluate_binary(num(2.0), num(2.0), BinaryOp::LtEq), Ok(Value::Bool(true)));
    assert_eq!(evaluate_binary(num(1.0), num(2.0), BinaryOp::Gt), Ok(Value::Bool(false)));
    assert_eq!(evaluate_binary(num(2.0), num(2.0), BinaryOp::GtEq), Ok(Value::Bool(true)));
}

#[test]
fn test_equality_never_fails() {
    let eq = |a: Value, b: Value| evaluate_binary(a, b, BinaryOp::Eq);
    assert_eq!(eq(Value::Nil, Value::Nil), Ok(Value::Bool(true)));
    assert_eq!(eq(num(1.0), s("1")), Ok(Value::Bool(false)));
    assert_eq!(eq(num(1.0), num(1.0)), Ok(Value::Bool(true)));
    assert_eq!(eq(Value::Nil, Value::Bool(false)), Ok(Value::Bool(false)));
    assert_eq!(eq(s("ab"), s("ab")), Ok(Value::Bool(true)));
    assert_eq!(
        evaluate_binary(Value::Bool(true), num(1.0), BinaryOp::NotEq),
        Ok(Value::Bool(true))
    );
}
