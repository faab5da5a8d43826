//! Arithmetic procedures. Overflow wraps silently, matching plain 64-bit
//! machine-integer semantics rather than a bignum tower.

use crate::{error::{InterpError, InterpResult}, value::Value};

fn as_number(value: Value) -> InterpResult<i64> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(InterpError::runtime("expected a number")),
    }
}

fn numbers(args: &[Value]) -> InterpResult<Vec<i64>> {
    args.iter().copied().map(as_number).collect()
}

pub(super) fn add(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    Ok(Value::Number(ns.into_iter().fold(0i64, i64::wrapping_add)))
}

pub(super) fn sub(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    match ns.split_first() {
        None => Err(InterpError::runtime("- expects at least one argument")),
        Some((&first, &[])) => Ok(Value::Number(0i64.wrapping_sub(first))),
        Some((&first, rest)) => Ok(Value::Number(rest.iter().fold(first, |acc, n| acc.wrapping_sub(*n)))),
    }
}

pub(super) fn mul(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    Ok(Value::Number(ns.into_iter().fold(1i64, i64::wrapping_mul)))
}

pub(super) fn div(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    let result = match ns.split_first() {
        None => return Err(InterpError::runtime("/ expects at least one argument")),
        Some((&first, &[])) => checked_div(1, first)?,
        Some((&first, rest)) => rest.iter().try_fold(first, |acc, n| checked_div(acc, *n))?,
    };
    Ok(Value::Number(result))
}

fn checked_div(a: i64, b: i64) -> InterpResult<i64> {
    if b == 0 {
        return Err(InterpError::runtime("division by zero"));
    }
    Ok(a.wrapping_div(b))
}

pub(super) fn max(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    ns.into_iter()
        .reduce(i64::max)
        .map(Value::Number)
        .ok_or_else(|| InterpError::runtime("max expects at least one argument"))
}

pub(super) fn min(args: &[Value]) -> InterpResult<Value> {
    let ns = numbers(args)?;
    ns.into_iter()
        .reduce(i64::min)
        .map(Value::Number)
        .ok_or_else(|| InterpError::runtime("min expects at least one argument"))
}

pub(super) fn abs(args: &[Value]) -> InterpResult<Value> {
    match args {
        [value] => Ok(Value::Number(as_number(*value)?.wrapping_abs())),
        _ => Err(InterpError::runtime("abs expects exactly one argument")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_folds_with_zero_identity() {
        assert_eq!(add(&[]).unwrap(), Value::Number(0));
        assert_eq!(add(&[Value::Number(2), Value::Number(3)]).unwrap(), Value::Number(5));
    }

    #[test]
    fn sub_single_argument_negates() {
        assert_eq!(sub(&[Value::Number(5)]).unwrap(), Value::Number(-5));
    }

    #[test]
    fn div_by_zero_is_runtime_error() {
        assert!(div(&[Value::Number(1), Value::Number(0)]).is_err());
    }

    #[test]
    fn wrapping_add_overflows_silently() {
        assert_eq!(
            add(&[Value::Number(i64::MAX), Value::Number(1)]).unwrap(),
            Value::Number(i64::MIN)
        );
    }

    #[test]
    fn non_number_argument_is_runtime_error() {
        assert!(add(&[Value::Boolean(true)]).is_err());
    }
}
