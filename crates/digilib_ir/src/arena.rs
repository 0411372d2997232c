//! Append-only, ID-indexed storage.
//!
//! Components keep their lines in an [`Arena`]: IDs are handed out in
//! allocation order and stay valid for the lifetime of the component.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use std::ops::Index;

/// Trait for opaque ID types used as arena keys.
///
/// Implementors must provide a bijection between `u32` indices and the ID type.
pub trait ArenaId: Copy {
    /// Creates an ID from a raw `u32` index.
    fn from_raw(index: u32) -> Self;

    /// Returns the raw `u32` index.
    fn as_raw(self) -> u32;
}

/// A dense container whose items are never reordered or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena<I: ArenaId, T> {
    items: Vec<T>,
    #[serde(skip)]
    _marker: PhantomData<I>,
}

impl<I: ArenaId, T> Default for Arena<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: ArenaId, T> Arena<I, T> {
    /// Creates a new, empty arena.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Returns the ID the next [`alloc`](Self::alloc) will hand out.
    pub fn next_id(&self) -> I {
        I::from_raw(self.items.len() as u32)
    }

    /// Stores an item and returns its ID.
    pub fn alloc(&mut self, item: T) -> I {
        let id = self.next_id();
        self.items.push(item);
        id
    }

    /// Returns the number of items in the arena.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Iterates over `(ID, &T)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (I::from_raw(i as u32), item))
    }

    /// Iterates over references to items in allocation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

/// # Panics
///
/// Indexing panics if the ID is out of bounds.
impl<I: ArenaId, T> Index<I> for Arena<I, T> {
    type Output = T;

    fn index(&self, id: I) -> &T {
        &self.items[id.as_raw() as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::LineId;

    #[test]
    fn alloc_and_index() {
        let mut arena: Arena<LineId, &str> = Arena::new();
        let a = arena.alloc("d0");
        let b = arena.alloc("d1");
        assert_eq!(arena[a], "d0");
        assert_eq!(arena[b], "d1");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn next_id_predicts_alloc() {
        let mut arena: Arena<LineId, u8> = Arena::new();
        let predicted = arena.next_id();
        assert_eq!(arena.alloc(7), predicted);
    }

    #[test]
    fn default_is_empty() {
        let arena: Arena<LineId, u8> = Arena::default();
        assert_eq!(arena.len(), 0);
        assert_eq!(arena.next_id(), LineId::from_raw(0));
    }

    #[test]
    fn iter_in_allocation_order() {
        let mut arena: Arena<LineId, &str> = Arena::new();
        arena.alloc("s0");
        arena.alloc("s1");
        let ids: Vec<u32> = arena.iter().map(|(id, _)| id.as_raw()).collect();
        assert_eq!(ids, vec![0, 1]);
        let names: Vec<&str> = arena.values().copied().collect();
        assert_eq!(names, vec!["s0", "s1"]);
    }

    #[test]
    fn serde_roundtrip() {
        let mut arena: Arena<LineId, String> = Arena::new();
        arena.alloc("sum".to_string());
        arena.alloc("carry".to_string());
        let json = serde_json::to_string(&arena).unwrap();
        let restored: Arena<LineId, String> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, arena);
    }
}
