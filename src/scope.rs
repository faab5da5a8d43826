//! Lexical environments.
//!
//! A scope is a heap-allocated frame of bindings with an optional parent;
//! lookup walks outward from a starting scope to the global frame. Scopes
//! are ordinary heap citizens (see `crate::heap::ScopeData`) so lambdas can
//! capture them and the collector can reclaim ones no longer reachable.

use crate::{
    error::{InterpError, InterpResult},
    heap::{Heap, HeapData, HeapId},
    intern::SymbolId,
    value::Value,
};

/// Creates a new scope with `parent` as its enclosing frame and returns its id.
pub(crate) fn new_scope(heap: &mut Heap, parent: Option<HeapId>) -> HeapId {
    heap.allocate(HeapData::Scope(crate::heap::ScopeData {
        bindings: Default::default(),
        parent,
    }))
}

/// Binds `name` to `value` directly in `scope`, shadowing any outer binding.
///
/// Used for `define`, which always creates or replaces a binding in the
/// current frame rather than walking outward.
pub(crate) fn define(heap: &mut Heap, scope: HeapId, name: SymbolId, value: Value) {
    let data = heap
        .get_mut(scope)
        .as_scope_mut()
        .expect("scope id must reference a Scope");
    data.bindings.insert(name, value);
}

/// Finds the innermost scope in the chain starting at `scope` that binds
/// `name` directly, if any.
fn find(heap: &Heap, scope: HeapId, name: SymbolId) -> Option<HeapId> {
    let mut current = Some(scope);
    while let Some(id) = current {
        let data = heap.get(id).as_scope().expect("scope id must reference a Scope");
        if data.bindings.contains_key(&name) {
            return Some(id);
        }
        current = data.parent;
    }
    None
}

/// Looks up `name` starting at `scope`, walking outward through parents.
pub(crate) fn get(heap: &Heap, scope: HeapId, name: SymbolId, display_name: &str) -> InterpResult<Value> {
    let owner = find(heap, scope, name)
        .ok_or_else(|| InterpError::name(format!("unbound variable: {display_name}")))?;
    let data = heap.get(owner).as_scope().expect("scope id must reference a Scope");
    Ok(*data
        .bindings
        .get(&name)
        .expect("find only returns scopes that contain the key"))
}

/// Mutates an existing binding for `name`, walking outward through parents.
/// Unlike `define`, this never creates a new binding: `set!` on an unbound
/// name is a `NameError`.
pub(crate) fn set(
    heap: &mut Heap,
    scope: HeapId,
    name: SymbolId,
    value: Value,
    display_name: &str,
) -> InterpResult<()> {
    let owner = find(heap, scope, name)
        .ok_or_else(|| InterpError::name(format!("unbound variable: {display_name}")))?;
    let data = heap
        .get_mut(owner)
        .as_scope_mut()
        .expect("scope id must reference a Scope");
    data.bindings.insert(name, value);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::Interner;

    #[test]
    fn define_and_get_round_trip() {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let root = new_scope(&mut heap, None);
        let x = interner.intern("x");
        define(&mut heap, root, x, Value::Number(42));
        assert_eq!(get(&heap, root, x, "x").unwrap(), Value::Number(42));
    }

    #[test]
    fn get_walks_to_parent() {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let root = new_scope(&mut heap, None);
        let x = interner.intern("x");
        define(&mut heap, root, x, Value::Number(1));
        let child = new_scope(&mut heap, Some(root));
        assert_eq!(get(&heap, child, x, "x").unwrap(), Value::Number(1));
    }

    #[test]
    fn get_unbound_is_name_error() {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let root = new_scope(&mut heap, None);
        let y = interner.intern("y");
        assert!(get(&heap, root, y, "y").is_err());
    }

    #[test]
    fn set_mutates_owning_frame_not_local() {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let root = new_scope(&mut heap, None);
        let x = interner.intern("x");
        define(&mut heap, root, x, Value::Number(1));
        let child = new_scope(&mut heap, Some(root));
        set(&mut heap, child, x, Value::Number(2), "x").unwrap();
        assert_eq!(get(&heap, root, x, "x").unwrap(), Value::Number(2));
        assert!(find(&heap, child, x) == Some(root));
    }

    #[test]
    fn set_unbound_is_name_error() {
        let mut heap = Heap::new();
        let mut interner = Interner::new();
        let root = new_scope(&mut heap, None);
        let z = interner.intern("z");
        assert!(set(&mut heap, root, z, Value::Number(1), "z").is_err());
    }
}
