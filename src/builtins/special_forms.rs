//! Special forms: receive their operand forms unevaluated.

use crate::{
    error::{InterpError, InterpResult},
    eval::{self, EvalContext},
    heap::{CellData, HeapData, HeapId, LambdaData},
    scope,
    tracer::Tracer,
    value::{Builtin, Value},
};

/// Dispatches a special form to its implementation.
pub(super) fn apply<T: Tracer>(
    b: Builtin,
    args: Value,
    scope_id: HeapId,
    ctx: &mut EvalContext<T>,
) -> InterpResult<Value> {
    let forms = eval::list_to_vec(args, ctx.heap)?;
    match b {
        Builtin::Quote => quote(&forms),
        Builtin::If => if_form(&forms, scope_id, ctx),
        Builtin::Define => define(&forms, scope_id, ctx),
        Builtin::Set => set(&forms, scope_id, ctx),
        Builtin::SetCar => set_car(&forms, scope_id, ctx),
        Builtin::SetCdr => set_cdr(&forms, scope_id, ctx),
        Builtin::Lambda => lambda(&forms, scope_id, ctx),
        Builtin::And => and(&forms, scope_id, ctx),
        Builtin::Or => or(&forms, scope_id, ctx),
        _ => unreachable!("apply called with a non-special-form builtin"),
    }
}

fn quote(forms: &[Value]) -> InterpResult<Value> {
    match forms {
        [single] => Ok(*single),
        _ => Err(InterpError::syntax("quote expects exactly one argument")),
    }
}

fn if_form<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    match forms {
        [cond, then, els] => {
            if eval::eval(*cond, scope_id, ctx)?.is_truthy() {
                eval::eval(*then, scope_id, ctx)
            } else {
                eval::eval(*els, scope_id, ctx)
            }
        }
        [cond, then] => {
            if eval::eval(*cond, scope_id, ctx)?.is_truthy() {
                eval::eval(*then, scope_id, ctx)
            } else {
                Ok(Value::Nil)
            }
        }
        // A bare condition with no branches evaluates neither; matches the
        // reference implementation's quirk of returning an empty pair.
        [_cond_only] => Ok(Value::Ref(ctx.heap.allocate(HeapData::Cell(CellData {
            first: Value::Nil,
            rest: Value::Nil,
        })))),
        _ => Err(InterpError::syntax("if expects a condition and 1 or 2 branches")),
    }
}

fn symbol_name(value: Value) -> InterpResult<crate::intern::SymbolId> {
    match value {
        Value::Symbol(name) => Ok(name),
        _ => Err(InterpError::syntax("expected a symbol")),
    }
}

/// Handles both `(define name value)` and the procedure shorthand
/// `(define (name params...) body...)`, which desugars to
/// `(define name (lambda (params...) body...))`.
fn define<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    let [target, rest @ ..] = forms else {
        return Err(InterpError::syntax("define expects a name or a (name params...) header"));
    };
    match *target {
        Value::Symbol(name) => {
            let [value_form] = rest else {
                return Err(InterpError::syntax("define expects exactly one value form"));
            };
            let value = eval::eval(*value_form, scope_id, ctx)?;
            scope::define(ctx.heap, scope_id, name, value);
            Ok(Value::Nil)
        }
        Value::Ref(_) => {
            let header = eval::list_to_vec(*target, ctx.heap)?;
            let [name_form, params @ ..] = header.as_slice() else {
                return Err(InterpError::syntax("define function header must name a procedure"));
            };
            let name = symbol_name(*name_form)?;
            let lambda_value = build_lambda(params, rest, scope_id, ctx)?;
            scope::define(ctx.heap, scope_id, name, lambda_value);
            Ok(Value::Nil)
        }
        _ => Err(InterpError::syntax("define expects a symbol or a procedure header")),
    }
}

fn set<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    match forms {
        [name, value_form] => {
            let name = symbol_name(*name)?;
            let value = eval::eval(*value_form, scope_id, ctx)?;
            let display_name = ctx.interner.resolve(name).to_string();
            scope::set(ctx.heap, scope_id, name, value, &display_name)?;
            Ok(Value::Nil)
        }
        _ => Err(InterpError::syntax("set! expects a name and a value")),
    }
}

fn as_cell_id(value: Value) -> InterpResult<HeapId> {
    match value {
        Value::Ref(id) => Ok(id),
        _ => Err(InterpError::runtime("expected a pair")),
    }
}

fn set_car<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    match forms {
        [pair_form, value_form] => {
            let pair = eval::eval(*pair_form, scope_id, ctx)?;
            let value = eval::eval(*value_form, scope_id, ctx)?;
            let id = as_cell_id(pair)?;
            let cell = ctx
                .heap
                .get_mut(id)
                .as_cell_mut()
                .ok_or_else(|| InterpError::runtime("expected a pair"))?;
            cell.first = value;
            Ok(Value::Nil)
        }
        _ => Err(InterpError::syntax("set-car! expects a pair and a value")),
    }
}

fn set_cdr<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    match forms {
        [pair_form, value_form] => {
            let pair = eval::eval(*pair_form, scope_id, ctx)?;
            let value = eval::eval(*value_form, scope_id, ctx)?;
            let id = as_cell_id(pair)?;
            let cell = ctx
                .heap
                .get_mut(id)
                .as_cell_mut()
                .ok_or_else(|| InterpError::runtime("expected a pair"))?;
            cell.rest = value;
            Ok(Value::Nil)
        }
        _ => Err(InterpError::syntax("set-cdr! expects a pair and a value")),
    }
}

fn lambda<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    let [params_form, body @ ..] = forms else {
        return Err(InterpError::syntax("lambda expects a parameter list and a body"));
    };
    let params = eval::list_to_vec(*params_form, ctx.heap)?;
    build_lambda(&params, body, scope_id, ctx)
}

/// Builds a closure value from already-separated parameter symbols and body
/// forms, capturing `scope_id`. Shared by `lambda` and the `define`
/// procedure-header shorthand.
fn build_lambda<T: Tracer>(
    params: &[Value],
    body: &[Value],
    scope_id: HeapId,
    ctx: &mut EvalContext<T>,
) -> InterpResult<Value> {
    if body.is_empty() {
        return Err(InterpError::syntax("lambda body must have at least one form"));
    }
    let mut param_ids = Vec::with_capacity(params.len());
    for form in params {
        param_ids.push(symbol_name(*form)?);
    }
    let id = ctx.heap.allocate(HeapData::Lambda(LambdaData {
        params: param_ids,
        body: body.to_vec(),
        captured_scope: scope_id,
    }));
    Ok(Value::Ref(id))
}

fn and<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    let mut result = Value::Boolean(true);
    for form in forms {
        result = eval::eval(*form, scope_id, ctx)?;
        if !result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(result)
}

fn or<T: Tracer>(forms: &[Value], scope_id: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    for form in forms {
        let result = eval::eval(*form, scope_id, ctx)?;
        if result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(Value::Boolean(false))
}
