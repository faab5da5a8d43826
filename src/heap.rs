//! The interpreter's heap arena.
//!
//! Every `Cell`, `Lambda`, and `Scope` value lives here, addressed by a
//! stable [`HeapId`] rather than a raw pointer. The arena is owned by a
//! single [`crate::Interpreter`] instance rather than a process-wide
//! singleton, so multiple interpreters can coexist in one process without
//! cross-talk.

use ahash::AHashMap;

use crate::{intern::SymbolId, value::Value};

/// A stable index into the heap arena.
///
/// Analogous to the reference implementation's raw `Object*`, but an index
/// rather than a pointer: cheap to copy, never dangles, and trivially
/// revalidated against `Heap::get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct HeapId(usize);

impl HeapId {
    #[inline]
    fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A cons cell: two mutable fields, `first` and `rest`.
#[derive(Debug, Clone)]
pub(crate) struct CellData {
    pub first: Value,
    pub rest: Value,
}

/// A closure: formal parameters, body forms, and the scope it closed over.
#[derive(Debug, Clone)]
pub(crate) struct LambdaData {
    pub params: Vec<SymbolId>,
    pub body: Vec<Value>,
    pub captured_scope: HeapId,
}

/// A lexical environment frame: local bindings plus an optional parent.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScopeData {
    pub bindings: AHashMap<SymbolId, Value>,
    pub parent: Option<HeapId>,
}

/// The three heap-allocated value kinds.
#[derive(Debug, Clone)]
pub(crate) enum HeapData {
    Cell(CellData),
    Lambda(LambdaData),
    Scope(ScopeData),
}

impl HeapData {
    pub fn as_cell(&self) -> Option<&CellData> {
        match self {
            Self::Cell(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_cell_mut(&mut self) -> Option<&mut CellData> {
        match self {
            Self::Cell(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_lambda(&self) -> Option<&LambdaData> {
        match self {
            Self::Lambda(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_scope(&self) -> Option<&ScopeData> {
        match self {
            Self::Scope(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_scope_mut(&mut self) -> Option<&mut ScopeData> {
        match self {
            Self::Scope(s) => Some(s),
            _ => None,
        }
    }
}

/// Arena of all live heap-allocated values for one interpreter instance.
///
/// Backed by a `Vec<Option<HeapData>>`: a `None` slot is a freed slot, kept
/// on `free_slots` for reuse so `HeapId`s stay dense and allocation doesn't
/// grow the vector once the working set is warm.
#[derive(Debug, Default)]
pub(crate) struct Heap {
    slots: Vec<Option<HeapData>>,
    free_slots: Vec<usize>,
}

impl Heap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `data`, returning its id.
    pub fn allocate(&mut self, data: HeapData) -> HeapId {
        if let Some(index) = self.free_slots.pop() {
            self.slots[index] = Some(data);
            HeapId::new(index)
        } else {
            self.slots.push(Some(data));
            HeapId::new(self.slots.len() - 1)
        }
    }

    /// Returns a reference to the value at `id`.
    ///
    /// # Panics
    /// Panics if `id` does not refer to a live value. Every `HeapId` handed
    /// to callers is produced by `allocate` and never outlives the
    /// interpreter's `run` call in which it was created without being
    /// re-validated through the mark phase, so this should never fire in
    /// practice.
    pub fn get(&self, id: HeapId) -> &HeapData {
        self.slots[id.index()]
            .as_ref()
            .expect("dereferenced a freed HeapId")
    }

    /// Returns a mutable reference to the value at `id`. See `get` for panics.
    pub fn get_mut(&mut self, id: HeapId) -> &mut HeapData {
        self.slots[id.index()]
            .as_mut()
            .expect("dereferenced a freed HeapId")
    }

    /// Removes and deallocates the value at `id`. Idempotent: freeing an
    /// already-freed or unknown id is a no-op.
    pub fn destroy(&mut self, id: HeapId) {
        if id.index() < self.slots.len() && self.slots[id.index()].is_some() {
            self.slots[id.index()] = None;
            self.free_slots.push(id.index());
        }
    }

    /// Snapshot of every currently-live id.
    pub fn objects(&self) -> Vec<HeapId> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.is_some().then(|| HeapId::new(i)))
            .collect()
    }

    /// Number of currently-live values.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Forgets every value without any further processing. Used only when
    /// an `Interpreter` is dropped.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocate_and_destroy_reuses_slot() {
        let mut heap = Heap::new();
        let a = heap.allocate(HeapData::Scope(ScopeData::default()));
        heap.destroy(a);
        let b = heap.allocate(HeapData::Scope(ScopeData::default()));
        assert_eq!(a.index(), b.index());
    }

    #[test]
    fn destroy_is_idempotent() {
        let mut heap = Heap::new();
        let a = heap.allocate(HeapData::Scope(ScopeData::default()));
        heap.destroy(a);
        heap.destroy(a);
        assert_eq!(heap.live_count(), 0);
    }

    #[test]
    fn objects_reports_only_live_ids() {
        let mut heap = Heap::new();
        let a = heap.allocate(HeapData::Scope(ScopeData::default()));
        let _b = heap.allocate(HeapData::Scope(ScopeData::default()));
        heap.destroy(a);
        assert_eq!(heap.objects().len(), 1);
    }
}
