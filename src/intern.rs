//! Small string interner for symbol and builtin names.
//!
//! Symbols recur constantly during both parsing and environment lookup, so
//! interning avoids re-allocating identical identifier strings on every
//! occurrence. Each distinct string is stored once; callers hold a cheap
//! `Copy` [`SymbolId`] instead of an owned `String`.

use ahash::AHashMap;

/// Identifier for an interned string.
///
/// Stable for the lifetime of the [`Interner`] that produced it: interning
/// the same text twice always returns the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SymbolId(u32);

impl SymbolId {
    #[inline]
    fn new(index: usize) -> Self {
        Self(index.try_into().expect("interner overflowed u32 ids"))
    }

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Interns identifier strings and hands back stable ids for them.
#[derive(Debug, Default)]
pub(crate) struct Interner {
    strings: Vec<Box<str>>,
    lookup: AHashMap<Box<str>, SymbolId>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `text`, returning its id. Reuses the existing id if `text`
    /// was already interned.
    pub fn intern(&mut self, text: &str) -> SymbolId {
        if let Some(&id) = self.lookup.get(text) {
            return id;
        }
        let id = SymbolId::new(self.strings.len());
        let boxed: Box<str> = text.into();
        self.strings.push(boxed.clone());
        self.lookup.insert(boxed, id);
        id
    }

    /// Resolves an id back to its text.
    ///
    /// # Panics
    /// Panics if `id` was not produced by this interner.
    pub fn resolve(&self, id: SymbolId) -> &str {
        &self.strings[id.index()]
    }
}
