//! The tree-walking evaluator.
//!
//! `eval` dispatches on the shape of a `Value`: atoms are self-evaluating
//! (or, for symbols, looked up in scope); a `Cell` form applies whatever its
//! head evaluates to, either as a special form (unevaluated arguments) or as
//! an ordinary procedure (evaluated arguments).

use smallvec::SmallVec;

use crate::{
    builtins,
    error::{InterpError, InterpResult},
    heap::{Heap, HeapData, HeapId},
    intern::Interner,
    scope,
    tracer::Tracer,
    value::{Builtin, Value},
};

/// Evaluated-argument buffer. Most calls pass a handful of arguments, so a
/// small inline buffer avoids a heap allocation per application.
type ArgVec = SmallVec<[Value; 4]>;

/// Shared mutable state threaded through every evaluation step.
///
/// Generic over the tracer implementation rather than holding a `dyn Tracer`
/// so that `NoopTracer`'s empty hooks monomorphize away entirely instead of
/// going through a vtable on every call.
pub(crate) struct EvalContext<'a, T: Tracer> {
    pub heap: &'a mut Heap,
    pub interner: &'a mut Interner,
    pub tracer: &'a mut T,
}

/// Evaluates `value` in `scope`.
pub(crate) fn eval<T: Tracer>(value: Value, scope: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    match value {
        Value::Number(_) | Value::Boolean(_) | Value::Nil | Value::Builtin(_) => Ok(value),
        Value::Symbol(name) => {
            let display_name = ctx.interner.resolve(name).to_string();
            scope::get(ctx.heap, scope, name, &display_name)
        }
        Value::Ref(id) => match ctx.heap.get(id).clone() {
            HeapData::Cell(cell) => {
                let description = describe(value, ctx);
                ctx.tracer.on_eval_form(&description);
                eval_form(cell.first, cell.rest, scope, ctx)
            }
            HeapData::Lambda(_) | HeapData::Scope(_) => Ok(value),
        },
    }
}

fn eval_form<T: Tracer>(head: Value, args: Value, scope: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<Value> {
    if let Value::Symbol(name) = head {
        if ctx.interner.resolve(name) == "." {
            return Err(InterpError::syntax("cannot evaluate a literal dotted pair"));
        }
    }
    let operator = eval(head, scope, ctx)?;
    match operator {
        Value::Builtin(b) if b.is_special_form() => {
            builtins::apply_special_form(b, args, scope, ctx)
        }
        Value::Builtin(b) => {
            let evaluated = eval_list(args, scope, ctx)?;
            ctx.tracer.on_apply_builtin(b.name());
            builtins::apply_procedure(b, &evaluated, ctx)
        }
        Value::Ref(id) => match ctx.heap.get(id).clone() {
            HeapData::Lambda(lambda) => {
                ctx.tracer.on_apply_lambda();
                let evaluated = eval_list(args, scope, ctx)?;
                apply_lambda(&lambda, &evaluated, ctx)
            }
            _ => Err(InterpError::runtime("cannot apply a non-procedure value")),
        },
        _ => Err(InterpError::runtime("cannot apply a non-procedure value")),
    }
}

/// Applies a closure to already-evaluated arguments.
pub(crate) fn apply_lambda<T: Tracer>(
    lambda: &crate::heap::LambdaData,
    args: &[Value],
    ctx: &mut EvalContext<T>,
) -> InterpResult<Value> {
    if args.len() != lambda.params.len() {
        return Err(InterpError::runtime(format!(
            "lambda expected {} argument(s), got {}",
            lambda.params.len(),
            args.len()
        )));
    }
    let call_scope = scope::new_scope(ctx.heap, Some(lambda.captured_scope));
    for (param, arg) in lambda.params.iter().zip(args) {
        scope::define(ctx.heap, call_scope, *param, *arg);
    }
    let mut result = Value::Nil;
    for form in &lambda.body {
        result = eval(*form, call_scope, ctx)?;
    }
    Ok(result)
}

/// Walks a proper cons-spine list, evaluating each element.
fn eval_list<T: Tracer>(mut list: Value, scope: HeapId, ctx: &mut EvalContext<T>) -> InterpResult<ArgVec> {
    let mut out = ArgVec::new();
    loop {
        match list {
            Value::Nil => return Ok(out),
            Value::Ref(id) => match ctx.heap.get(id).clone() {
                HeapData::Cell(cell) => {
                    out.push(eval(cell.first, scope, ctx)?);
                    list = cell.rest;
                }
                _ => return Err(InterpError::syntax("improper argument list")),
            },
            _ => return Err(InterpError::syntax("improper argument list")),
        }
    }
}

/// Walks a proper cons-spine list into a `Vec<Value>` without evaluating
/// its elements. Used by special forms that need their raw argument forms.
pub(crate) fn list_to_vec(mut list: Value, heap: &Heap) -> InterpResult<Vec<Value>> {
    let mut out = Vec::new();
    loop {
        match list {
            Value::Nil => return Ok(out),
            Value::Ref(id) => match heap.get(id) {
                HeapData::Cell(cell) => {
                    out.push(cell.first);
                    list = cell.rest;
                }
                _ => return Err(InterpError::syntax("improper list")),
            },
            _ => return Err(InterpError::syntax("improper list")),
        }
    }
}

fn describe<T: Tracer>(value: Value, ctx: &EvalContext<T>) -> String {
    match value {
        Value::Ref(id) => match ctx.heap.get(id) {
            HeapData::Cell(cell) => match cell.first {
                Value::Symbol(name) => ctx.interner.resolve(name).to_string(),
                _ => "<form>".to_string(),
            },
            _ => "<form>".to_string(),
        },
        _ => "<form>".to_string(),
    }
}
