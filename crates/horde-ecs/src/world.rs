//! The [`World`] is the top-level container for the ECS. It owns the entity
//! allocator (the entity directory) and the component store.

use tracing::trace;

use crate::component::{Component, ComponentStore};
use crate::entity::{EntityAllocator, EntityId};

// ---------------------------------------------------------------------------
// World
// ---------------------------------------------------------------------------

/// The top-level ECS container.
///
/// Entity creation and destruction go through the world; component access can
/// go through the world's delegating methods or directly through
/// [`store`](Self::store) / [`store_mut`](Self::store_mut).
#[derive(Debug, Default)]
pub struct World {
    /// Entity ID allocator.
    allocator: EntityAllocator,
    /// All component data.
    store: ComponentStore,
}

impl World {
    /// Create a new, empty world.
    pub fn new() -> Self {
        Self {
            allocator: EntityAllocator::new(),
            store: ComponentStore::new(),
        }
    }

    // -- entity lifecycle ---------------------------------------------------

    /// Allocate a fresh entity with no components.
    pub fn create_entity(&mut self) -> EntityId {
        self.allocator.allocate()
    }

    /// Destroy an entity by removing it from every component kind.
    ///
    /// Immediate and synchronous. Destroying an entity that holds nothing is a
    /// no-op. The identifier is never handed out again.
    pub fn destroy_entity(&mut self, entity: EntityId) {
        let removed = self.store.remove_entity(entity);
        trace!(%entity, removed, "destroyed entity");
    }

    /// Number of entity identifiers allocated so far.
    pub fn allocated_count(&self) -> u64 {
        self.allocator.allocated_count()
    }

    // -- store access -------------------------------------------------------

    /// Read-only access to the component store.
    pub fn store(&self) -> &ComponentStore {
        &self.store
    }

    /// Mutable access to the component store.
    pub fn store_mut(&mut self) -> &mut ComponentStore {
        &mut self.store
    }

    // -- component shortcuts ------------------------------------------------

    /// Attach (or overwrite) a component. See [`ComponentStore::set`].
    pub fn set<T: Component>(&mut self, entity: EntityId, value: T) -> Option<T> {
        self.store.set(entity, value)
    }

    /// See [`ComponentStore::get`].
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        self.store.get(entity)
    }

    /// See [`ComponentStore::get_mut`].
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        self.store.get_mut(entity)
    }

    /// See [`ComponentStore::has`].
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.store.has::<T>(entity)
    }

    /// See [`ComponentStore::remove`].
    pub fn remove<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        self.store.remove(entity)
    }

    /// See [`ComponentStore::entities_with`].
    pub fn entities_with<T: Component>(&self) -> Vec<EntityId> {
        self.store.entities_with::<T>()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
