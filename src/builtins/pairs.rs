//! Pair and list procedures.

use crate::{
    error::{InterpError, InterpResult},
    eval::list_to_vec,
    heap::{CellData, Heap, HeapData},
    value::Value,
};

pub(super) fn cons(args: &[Value], heap: &mut Heap) -> InterpResult<Value> {
    match args {
        [first, rest] => Ok(Value::Ref(heap.allocate(HeapData::Cell(CellData {
            first: *first,
            rest: *rest,
        })))),
        _ => Err(InterpError::runtime("cons expects exactly two arguments")),
    }
}

fn as_cell(value: Value, heap: &Heap, name: &str) -> InterpResult<CellData> {
    match value {
        Value::Ref(id) => match heap.get(id) {
            HeapData::Cell(cell) => Ok(cell.clone()),
            _ => Err(InterpError::runtime(format!("{name} expects a pair"))),
        },
        _ => Err(InterpError::runtime(format!("{name} expects a pair"))),
    }
}

pub(super) fn car(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    match args {
        [pair] => Ok(as_cell(*pair, heap, "car")?.first),
        _ => Err(InterpError::runtime("car expects exactly one argument")),
    }
}

pub(super) fn cdr(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    match args {
        [pair] => Ok(as_cell(*pair, heap, "cdr")?.rest),
        _ => Err(InterpError::runtime("cdr expects exactly one argument")),
    }
}

pub(super) fn list(args: &[Value], heap: &mut Heap) -> InterpResult<Value> {
    let mut result = Value::Nil;
    for value in args.iter().rev() {
        result = Value::Ref(heap.allocate(HeapData::Cell(CellData {
            first: *value,
            rest: result,
        })));
    }
    Ok(result)
}

fn as_index(value: Value, name: &str) -> InterpResult<usize> {
    match value {
        Value::Number(n) if n >= 0 => Ok(n as usize),
        Value::Number(_) => Err(InterpError::runtime(format!("{name} expects a non-negative index"))),
        _ => Err(InterpError::runtime(format!("{name} expects a number"))),
    }
}

pub(super) fn list_ref(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    match args {
        [list, index] => {
            let index = as_index(*index, "list-ref")?;
            let items = list_to_vec(*list, heap)
                .map_err(|_| InterpError::runtime("list-ref expects a proper list"))?;
            items
                .get(index)
                .copied()
                .ok_or_else(|| InterpError::runtime("list-ref index out of range"))
        }
        _ => Err(InterpError::runtime("list-ref expects a list and an index")),
    }
}

pub(super) fn list_tail(args: &[Value], heap: &Heap) -> InterpResult<Value> {
    match args {
        [list, index] => {
            let index = as_index(*index, "list-tail")?;
            let mut current = *list;
            for _ in 0..index {
                current = as_cell(current, heap, "list-tail")?.rest;
            }
            Ok(current)
        }
        _ => Err(InterpError::runtime("list-tail expects a list and an index")),
    }
}
