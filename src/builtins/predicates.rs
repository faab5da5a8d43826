//! Boolean negation and type predicates.

use crate::{
    error::{InterpError, InterpResult},
    eval::list_to_vec,
    heap::{CellData, Heap, HeapData},
    value::Value,
};

fn one_arg(args: &[Value], name: &str) -> InterpResult<Value> {
    match args {
        [single] => Ok(*single),
        _ => Err(InterpError::runtime(format!("{name} expects exactly one argument"))),
    }
}

pub(super) fn not(args: &[Value]) -> InterpResult<Value> {
    Ok(Value::Boolean(!one_arg(args, "not")?.is_truthy()))
}

pub(super) fn is_boolean(args: &[Value]) -> InterpResult<Value> {
    Ok(Value::Boolean(matches!(one_arg(args, "boolean?")?, Value::Boolean(_))))
}

pub(super) fn is_number(args: &[Value]) -> InterpResult<Value> {
    Ok(Value::Boolean(matches!(one_arg(args, "number?")?, Value::Number(_))))
}

pub(super) fn is_symbol(args: &[Value]) -> InterpResult<Value> {
    Ok(Value::Boolean(matches!(one_arg(args, "symbol?")?, Value::Symbol(_))))
}

/// `pair?` is true iff its argument is a Cell whose list-interpretation
/// holds exactly two elements — a proper two-element list and a dotted pair
/// like `(cons 1 2)` both qualify, but a one-element or three-or-more
/// element list does not.
pub(super) fn is_pair(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    let value = one_arg(args, "pair?")?;
    let Value::Ref(id) = value else {
        return Ok(Value::Boolean(false));
    };
    let HeapData::Cell(cell) = heap.get(id) else {
        return Ok(Value::Boolean(false));
    };
    Ok(Value::Boolean(cell_element_count(heap, cell) == 2))
}

/// Counts the elements of a Cell in list-interpretation: each `first` down
/// the spine, plus a final improper tail if the spine doesn't end in `Nil`.
fn cell_element_count(heap: &Heap, cell: &CellData) -> usize {
    let mut count = 1;
    let mut rest = cell.rest;
    loop {
        match rest {
            Value::Nil => break,
            Value::Ref(id) => match heap.get(id) {
                HeapData::Cell(next) => {
                    count += 1;
                    rest = next.rest;
                }
                _ => {
                    count += 1;
                    break;
                }
            },
            _ => {
                count += 1;
                break;
            }
        }
    }
    count
}

pub(super) fn is_null(args: &[Value]) -> InterpResult<Value> {
    Ok(Value::Boolean(one_arg(args, "null?")?.is_nil()))
}

/// A value is a list if it is `Nil` or a chain of pairs ending in `Nil`.
pub(super) fn is_list(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    let value = one_arg(args, "list?")?;
    Ok(Value::Boolean(list_to_vec(value, heap).is_ok()))
}
