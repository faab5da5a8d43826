//! Execution tracing hooks.
//!
//! The interpreter has no I/O or logging dependency of its own; instead it
//! exposes a small trait with hook points at the moments a host would want
//! to observe (entering a compound form, applying a procedure, running the
//! collector). [`NoopTracer`] is the default and compiles away to nothing;
//! [`StderrTracer`] is a ready-made implementation for interactive
//! debugging.

/// Hook points fired by the evaluator and collector.
///
/// Implementations are free to ignore any hook; the default bodies are
/// no-ops so a tracer only needs to override what it cares about.
pub trait Tracer {
    /// Called before evaluating a compound (cell) form.
    #[inline]
    fn on_eval_form(&mut self, _form: &str) {}

    /// Called before a builtin procedure is applied.
    #[inline]
    fn on_apply_builtin(&mut self, _name: &str) {}

    /// Called before a lambda (closure) is applied.
    #[inline]
    fn on_apply_lambda(&mut self) {}

    /// Called when a garbage-collection sweep starts, with the live count
    /// observed before marking.
    #[inline]
    fn on_gc_start(&mut self, _live_before: usize) {}

    /// Called when a garbage-collection sweep finishes, with the live count
    /// remaining after sweeping.
    #[inline]
    fn on_gc_end(&mut self, _live_after: usize) {}
}

/// A tracer that does nothing. All hooks are `#[inline]` empty bodies, so
/// the compiler erases every call site — this is the tracer
/// [`crate::Interpreter::new`] uses.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTracer;

impl Tracer for NoopTracer {}

/// A tracer that prints a one-line message to stderr for each hook.
///
/// Intended for interactively debugging evaluation order or GC behavior,
/// not for production use.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrTracer;

impl Tracer for StderrTracer {
    fn on_eval_form(&mut self, form: &str) {
        eprintln!("eval: {form}");
    }

    fn on_apply_builtin(&mut self, name: &str) {
        eprintln!("apply builtin: {name}");
    }

    fn on_apply_lambda(&mut self) {
        eprintln!("apply lambda");
    }

    fn on_gc_start(&mut self, live_before: usize) {
        eprintln!("gc: sweeping, {live_before} live objects before mark");
    }

    fn on_gc_end(&mut self, live_after: usize) {
        eprintln!("gc: done, {live_after} live objects after sweep");
    }
}
