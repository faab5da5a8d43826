//! The embeddable interpreter façade.

use crate::{
    error::InterpResult,
    eval::{self, EvalContext},
    gc,
    heap::{Heap, HeapId},
    intern::Interner,
    parser,
    scope,
    serialize,
    tracer::{NoopTracer, Tracer},
    value::{Builtin, Value},
};

/// A single interpreter instance, owning its own heap, symbol table, and
/// global scope.
///
/// Each instance is independent: nothing here is process-global, so
/// multiple `Interpreter`s can run in the same process without interfering.
/// State persists across calls to [`Interpreter::run`] on the same
/// instance — a `define` in one call is visible to a later call.
///
/// Generic over the tracer implementation `T` rather than boxing a trait
/// object: with the default `NoopTracer`, every hook call monomorphizes to
/// its empty `#[inline]` body and is erased by the compiler, so tracing
/// costs nothing unless a real tracer is plugged in via
/// [`Interpreter::new_with_tracer`].
pub struct Interpreter<T: Tracer = NoopTracer> {
    heap: Heap,
    interner: Interner,
    global_scope: HeapId,
    tracer: T,
}

impl Interpreter<NoopTracer> {
    /// Creates an interpreter with tracing disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::new_with_tracer(NoopTracer)
    }
}

impl<T: Tracer> Interpreter<T> {
    /// Creates an interpreter that reports execution events to `tracer`.
    #[must_use]
    pub fn new_with_tracer(tracer: T) -> Self {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let global_scope = scope::new_scope(&mut heap, None);
        for builtin in Builtin::ALL {
            let name = interner.intern(builtin.name());
            scope::define(&mut heap, global_scope, name, Value::Builtin(*builtin));
        }
        Self {
            heap,
            interner,
            global_scope,
            tracer,
        }
    }

    /// Parses exactly one top-level datum from `code`, evaluates it, runs a
    /// garbage-collection sweep, and returns the textual representation of
    /// the result.
    ///
    /// A caller wanting to run several forms in sequence (to build up
    /// definitions, then use them) calls `run` once per form on the same
    /// `Interpreter` — state persists across calls on one instance.
    /// Trailing tokens after the datum, or no datum at all, are syntax
    /// errors; nothing is evaluated or collected in that case.
    pub fn run(&mut self, code: &str) -> InterpResult<String> {
        let form = parser::parse_one(code, &mut self.heap, &mut self.interner)?;

        let result = {
            let mut ctx = EvalContext {
                heap: &mut self.heap,
                interner: &mut self.interner,
                tracer: &mut self.tracer,
            };
            eval::eval(form, self.global_scope, &mut ctx)?
        };

        let mut roots = vec![self.global_scope];
        if let Value::Ref(id) = result {
            roots.push(id);
        }
        gc::collect(&mut self.heap, &roots, &mut self.tracer);

        Ok(serialize::to_text(result, &self.heap, &self.interner))
    }
}

impl Default for Interpreter<NoopTracer> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracer::StderrTracer;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_input_is_a_syntax_error() {
        let mut interp = Interpreter::new();
        let err = interp.run("").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::SyntaxError);
    }

    #[test]
    fn trailing_tokens_after_a_datum_is_a_syntax_error() {
        let mut interp = Interpreter::new();
        assert!(interp.run("1 2").is_err());
    }

    #[test]
    fn arithmetic_round_trip() {
        let mut interp = Interpreter::new();
        assert_eq!(interp.run("(+ 1 2 3)").unwrap(), "6");
    }

    #[test]
    fn define_persists_across_run_calls() {
        let mut interp = Interpreter::new();
        interp.run("(define x 10)").unwrap();
        assert_eq!(interp.run("(+ x 1)").unwrap(), "11");
    }

    #[test]
    fn lambda_closes_over_defining_scope() {
        let mut interp = Interpreter::new();
        interp.run("(define make-adder (lambda (n) (lambda (x) (+ x n))))").unwrap();
        interp.run("(define add5 (make-adder 5))").unwrap();
        assert_eq!(interp.run("(add5 10)").unwrap(), "15");
    }

    #[test]
    fn mutation_survives_a_collection_sweep() {
        let mut interp = Interpreter::new();
        interp.run("(define cell (cons 1 2))").unwrap();
        interp.run("(set-car! cell 99)").unwrap();
        assert_eq!(interp.run("(car cell)").unwrap(), "99");
    }

    #[test]
    fn unbound_variable_surfaces_as_name_error() {
        let mut interp = Interpreter::new();
        let err = interp.run("undefined-name").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::NameError);
    }

    #[test]
    fn tracer_variant_runs_without_panicking() {
        let mut interp = Interpreter::new_with_tracer(StderrTracer);
        assert_eq!(interp.run("(+ 1 1)").unwrap(), "2");
    }
}
