//! Entity identifiers and allocation.
//!
//! An [`EntityId`] is an opaque 64-bit handle. Identifiers are handed out in
//! strictly increasing order starting at zero and are never recycled, so a
//! destroyed entity's identifier can never alias a newer entity.

use std::fmt;

// ---------------------------------------------------------------------------
// EntityId
// ---------------------------------------------------------------------------

/// An opaque entity identifier. Carries no data of its own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl EntityId {
    /// Raw `u64` representation.
    #[inline]
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Reconstruct from a raw `u64`.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// EntityAllocator
// ---------------------------------------------------------------------------

/// Hands out fresh [`EntityId`]s.
///
/// The allocator is a monotonic counter. There is no free list: the lifetime
/// of a process is far too short to exhaust a `u64`, and never reusing an
/// identifier means stale handles simply find no components.
#[derive(Debug, Default)]
pub struct EntityAllocator {
    next: u64,
}

impl EntityAllocator {
    /// Create a new allocator whose first identifier is `0`.
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocate a never-before-used [`EntityId`].
    pub fn allocate(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn allocated_count(&self) -> u64 {
        self.next
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_starts_at_zero_and_increases() {
        let mut alloc = EntityAllocator::new();
        let ids: Vec<u64> = (0..5).map(|_| alloc.allocate().to_raw()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(alloc.allocated_count(), 5);
    }

    #[test]
    fn allocate_unique_ids() {
        let mut alloc = EntityAllocator::new();
        let mut ids: Vec<EntityId> = (0..100).map(|_| alloc.allocate()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn entity_id_roundtrip() {
        let id = EntityId::from_raw(42);
        assert_eq!(id.to_raw(), 42);
        assert_eq!(format!("{id}"), "e42");
        assert_eq!(format!("{id:?}"), "EntityId(42)");
    }
}
