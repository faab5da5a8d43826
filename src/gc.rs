//! Mark-and-sweep garbage collection over the heap arena.
//!
//! Collection is not automatic on every allocation; `Interpreter::run`
//! triggers a sweep once per call, after evaluating its form. Marking walks
//! outward from the given roots through cells, lambdas, and scopes;
//! anything left unmarked afterward is freed.

use ahash::AHashSet;

use crate::{
    heap::{Heap, HeapData, HeapId},
    tracer::Tracer,
    value::Value,
};

/// Runs a full mark-and-sweep collection rooted at `roots`.
pub(crate) fn collect<T: Tracer>(heap: &mut Heap, roots: &[HeapId], tracer: &mut T) {
    tracer.on_gc_start(heap.live_count());

    let mut marked = AHashSet::default();
    let mut stack: Vec<HeapId> = roots.to_vec();
    while let Some(id) = stack.pop() {
        if !marked.insert(id) {
            continue;
        }
        match heap.get(id) {
            HeapData::Cell(cell) => {
                push_value(cell.first, &mut stack);
                push_value(cell.rest, &mut stack);
            }
            HeapData::Lambda(lambda) => {
                for form in &lambda.body {
                    push_value(*form, &mut stack);
                }
                stack.push(lambda.captured_scope);
            }
            HeapData::Scope(scope) => {
                for value in scope.bindings.values() {
                    push_value(*value, &mut stack);
                }
                if let Some(parent) = scope.parent {
                    stack.push(parent);
                }
            }
        }
    }

    let garbage: Vec<HeapId> = heap
        .objects()
        .into_iter()
        .filter(|id| !marked.contains(id))
        .collect();
    for id in garbage {
        heap.destroy(id);
    }

    tracer.on_gc_end(heap.live_count());
}

fn push_value(value: Value, stack: &mut Vec<HeapId>) {
    if let Value::Ref(id) = value {
        stack.push(id);
    }
}
