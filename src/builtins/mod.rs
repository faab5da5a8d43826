//! The builtin procedure and special-form catalog.
//!
//! Special forms are dispatched through [`apply_special_form`] with their
//! argument forms unevaluated; ordinary procedures go through
//! [`apply_procedure`] with arguments already evaluated by `crate::eval`.

mod arithmetic;
mod comparison;
mod pairs;
mod predicates;
mod special_forms;

use crate::{
    error::InterpResult,
    eval::EvalContext,
    heap::HeapId,
    tracer::Tracer,
    value::{Builtin, Value},
};

pub(crate) fn apply_special_form<T: Tracer>(
    b: Builtin,
    args: Value,
    scope: HeapId,
    ctx: &mut EvalContext<T>,
) -> InterpResult<Value> {
    special_forms::apply(b, args, scope, ctx)
}

pub(crate) fn apply_procedure<T: Tracer>(
    b: Builtin,
    args: &[Value],
    ctx: &mut EvalContext<T>,
) -> InterpResult<Value> {
    match b {
        Builtin::Add => arithmetic::add(args),
        Builtin::Sub => arithmetic::sub(args),
        Builtin::Mul => arithmetic::mul(args),
        Builtin::Div => arithmetic::div(args),
        Builtin::Max => arithmetic::max(args),
        Builtin::Min => arithmetic::min(args),
        Builtin::Abs => arithmetic::abs(args),

        Builtin::Eq => comparison::eq(args),
        Builtin::Lt => comparison::lt(args),
        Builtin::Gt => comparison::gt(args),
        Builtin::Le => comparison::le(args),
        Builtin::Ge => comparison::ge(args),

        Builtin::Not => predicates::not(args),
        Builtin::IsBoolean => predicates::is_boolean(args),
        Builtin::IsNumber => predicates::is_number(args),
        Builtin::IsSymbol => predicates::is_symbol(args),
        Builtin::IsPair => predicates::is_pair(args, ctx.heap),
        Builtin::IsNull => predicates::is_null(args),
        Builtin::IsList => predicates::is_list(args, ctx.heap),

        Builtin::Cons => pairs::cons(args, ctx.heap),
        Builtin::Car => pairs::car(args, ctx.heap),
        Builtin::Cdr => pairs::cdr(args, ctx.heap),
        Builtin::List => pairs::list(args, ctx.heap),
        Builtin::ListRef => pairs::list_ref(args, ctx.heap),
        Builtin::ListTail => pairs::list_tail(args, ctx.heap),

        _ => unreachable!("apply_procedure called with a special form"),
    }
}
