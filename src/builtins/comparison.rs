//! Numeric comparison procedures. Each is variadic and chains pairwise,
//! e.g. `(< 1 2 3)` checks `1 < 2` and `2 < 3`.

use crate::{error::{InterpError, InterpResult}, value::Value};

fn as_number(value: Value) -> InterpResult<i64> {
    match value {
        Value::Number(n) => Ok(n),
        _ => Err(InterpError::runtime("expected a number")),
    }
}

fn chain(args: &[Value], op: impl Fn(i64, i64) -> bool) -> InterpResult<Value> {
    let ns: Vec<i64> = args.iter().copied().map(as_number).collect::<InterpResult<_>>()?;
    let holds = ns.windows(2).all(|pair| op(pair[0], pair[1]));
    Ok(Value::Boolean(holds))
}

pub(super) fn eq(args: &[Value]) -> InterpResult<Value> {
    chain(args, |a, b| a == b)
}

pub(super) fn lt(args: &[Value]) -> InterpResult<Value> {
    chain(args, |a, b| a < b)
}

pub(super) fn gt(args: &[Value]) -> InterpResult<Value> {
    chain(args, |a, b| a > b)
}

pub(super) fn le(args: &[Value]) -> InterpResult<Value> {
    chain(args, |a, b| a <= b)
}

pub(super) fn ge(args: &[Value]) -> InterpResult<Value> {
    chain(args, |a, b| a >= b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_less_than() {
        assert_eq!(
            lt(&[Value::Number(1), Value::Number(2), Value::Number(3)]).unwrap(),
            Value::Boolean(true)
        );
        assert_eq!(
            lt(&[Value::Number(1), Value::Number(3), Value::Number(2)]).unwrap(),
            Value::Boolean(false)
        );
    }

    #[test]
    fn single_argument_is_trivially_true() {
        assert_eq!(eq(&[Value::Number(5)]).unwrap(), Value::Boolean(true));
    }

    #[test]
    fn non_number_is_runtime_error() {
        assert!(lt(&[Value::Number(1), Value::Boolean(true)]).is_err());
    }
}
