//! Component kinds and the type-erased [`ComponentStore`].
//!
//! Every component kind gets its own column, keyed by the Rust `TypeId` of the
//! component type. A column maps [`EntityId`] to the component value, so all
//! per-(entity, kind) operations are O(1) amortized and a query over one kind
//! only touches the entities that carry it.
//!
//! The store knows nothing about what the components mean. Absence is always
//! reported as `None`/`false`, never as an error.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::entity::EntityId;

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// A plain data record that can be attached to an entity.
///
/// `NAME` is only used for diagnostics.
pub trait Component: 'static {
    /// Human-readable kind name, e.g. `"position"`.
    const NAME: &'static str;
}

// ---------------------------------------------------------------------------
// Columns
// ---------------------------------------------------------------------------

/// Object-safe view of a [`Column`] so columns of different component types
/// can live in one map.
trait ErasedColumn {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn remove_entity(&mut self, entity: EntityId) -> bool;
    fn len(&self) -> usize;
    fn kind_name(&self) -> &'static str;
}

/// Storage for one component kind.
struct Column<T> {
    values: HashMap<EntityId, T>,
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<T: Component> ErasedColumn for Column<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn remove_entity(&mut self, entity: EntityId) -> bool {
        self.values.remove(&entity).is_some()
    }

    fn len(&self) -> usize {
        self.values.len()
    }

    fn kind_name(&self) -> &'static str {
        T::NAME
    }
}

// ---------------------------------------------------------------------------
// ComponentStore
// ---------------------------------------------------------------------------

/// Generic keyed bag mapping `(entity, kind)` to a component value.
#[derive(Default)]
pub struct ComponentStore {
    /// TypeId of the component type -> its column.
    columns: HashMap<TypeId, Box<dyn ErasedColumn>>,
}

impl std::fmt::Debug for ComponentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentStore")
            .field("kinds", &self.kind_names())
            .finish()
    }
}

impl ComponentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            columns: HashMap::new(),
        }
    }

    fn column<T: Component>(&self) -> Option<&Column<T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<Column<T>>())
    }

    fn column_mut<T: Component>(&mut self) -> Option<&mut Column<T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut::<Column<T>>())
    }

    fn column_or_insert<T: Component>(&mut self) -> &mut Column<T> {
        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Column::<T>::default()));
        match column.as_any_mut().downcast_mut::<Column<T>>() {
            Some(column) => column,
            None => unreachable!("column for '{}' keyed by a foreign TypeId", T::NAME),
        }
    }

    /// Attach `value` to `entity`, overwriting any existing value of the same
    /// kind. Returns the previous value, if any.
    pub fn set<T: Component>(&mut self, entity: EntityId, value: T) -> Option<T> {
        self.column_or_insert::<T>().values.insert(entity, value)
    }

    /// The component of kind `T` on `entity`, or `None` if not attached.
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        self.column::<T>().and_then(|c| c.values.get(&entity))
    }

    /// Mutable access to the component of kind `T` on `entity`.
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        self.column_mut::<T>().and_then(|c| c.values.get_mut(&entity))
    }

    /// Whether `entity` carries a component of kind `T`.
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.column::<T>()
            .is_some_and(|c| c.values.contains_key(&entity))
    }

    /// Detach the component of kind `T` from `entity`. No-op if absent.
    pub fn remove<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        self.column_mut::<T>().and_then(|c| c.values.remove(&entity))
    }

    /// Every `(entity, value)` association for kind `T`, in unspecified order.
    pub fn get_all<T: Component>(&self) -> impl Iterator<Item = (EntityId, &T)> + '_ {
        self.column::<T>()
            .into_iter()
            .flat_map(|c| c.values.iter().map(|(e, v)| (*e, v)))
    }

    /// Snapshot of the entities carrying kind `T`.
    ///
    /// The returned vector is owned, so the caller may mutate or destroy
    /// entities while walking it. Order is unspecified and may differ between
    /// calls.
    pub fn entities_with<T: Component>(&self) -> Vec<EntityId> {
        self.column::<T>()
            .map(|c| c.values.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of entities carrying kind `T`.
    pub fn count<T: Component>(&self) -> usize {
        self.column::<T>().map_or(0, |c| c.values.len())
    }

    /// Detach every component kind from `entity`. Returns how many kinds were
    /// removed (zero if the entity held nothing).
    pub fn remove_entity(&mut self, entity: EntityId) -> usize {
        self.columns
            .values_mut()
            .map(|c| c.remove_entity(entity))
            .filter(|removed| *removed)
            .count()
    }

    /// Names of all component kinds ever stored, sorted.
    pub fn kind_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.columns.values().map(|c| c.kind_name()).collect();
        names.sort_unstable();
        names
    }

    /// Total number of `(entity, kind)` associations across all kinds.
    pub fn association_count(&self) -> usize {
        self.columns.values().map(|c| c.len()).sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
