// Copyright 2025 the ecs-physics authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Component storage
//!
//! Components are plain data fragments attached to entities. Each component
//! type gets its own sparse map from entity id to value; the map is the only
//! place component data lives, and every access goes through a fresh lookup
//! by entity id.

use crate::ecs::Entity;
use std::collections::HashMap;

/// Marker trait for component types
///
/// Components should be plain data without behavior. Keep them small; an
/// entity carries any subset of the known component types.
pub trait Component: 'static {}

/// Sparse map from entity to component value
///
/// Values are stored densely in insertion order with a side index from entity
/// id to slot, so lookups are O(1) and iteration walks a contiguous vec.
/// Removal swaps the last slot into the hole, which perturbs iteration order;
/// no system depends on order for correctness, and the order stays
/// deterministic for a given sequence of operations, which keeps
/// floating-point accumulation reproducible across runs.
///
/// # Examples
///
/// ```
/// use ecs_physics::ecs::{ComponentMap, Entity};
/// use ecs_physics::ecs::components::Position;
///
/// let mut positions = ComponentMap::new();
/// let entity = Entity::new(1);
///
/// positions.insert(entity, Position::new(1.0, 2.0));
/// assert!(positions.contains(entity));
/// assert_eq!(positions.get(entity).unwrap().0.x, 1.0);
/// ```
pub struct ComponentMap<T: Component> {
    /// Entity id to dense slot
    sparse: HashMap<Entity, usize>,
    /// Dense slot back to entity id, for swap-removal
    entities: Vec<Entity>,
    /// Component values, parallel to `entities`
    values: Vec<T>,
}

impl<T: Component> ComponentMap<T> {
    /// Create an empty map
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty map with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        ComponentMap {
            sparse: HashMap::with_capacity(capacity),
            entities: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Insert or overwrite the component for `entity`
    pub fn insert(&mut self, entity: Entity, value: T) {
        if let Some(&slot) = self.sparse.get(&entity) {
            self.values[slot] = value;
        } else {
            let slot = self.values.len();
            self.sparse.insert(entity, slot);
            self.entities.push(entity);
            self.values.push(value);

            debug_assert_eq!(self.sparse.len(), self.entities.len());
            debug_assert_eq!(self.sparse.len(), self.values.len());
        }
    }

    /// Remove and return the component for `entity`, if present
    pub fn remove(&mut self, entity: Entity) -> Option<T> {
        let slot = self.sparse.remove(&entity)?;

        // Swap the last slot into the hole so the dense vecs stay gapless.
        let last = self.values.len() - 1;
        if slot != last {
            self.entities.swap(slot, last);
            self.values.swap(slot, last);
            self.sparse.insert(self.entities[slot], slot);
        }
        self.entities.pop();

        debug_assert_eq!(self.sparse.len(), self.entities.len());

        self.values.pop()
    }

    /// Get a shared reference to the component for `entity`
    pub fn get(&self, entity: Entity) -> Option<&T> {
        let slot = self.sparse.get(&entity)?;
        Some(&self.values[*slot])
    }

    /// Get a mutable reference to the component for `entity`
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let slot = self.sparse.get(&entity)?;
        Some(&mut self.values[*slot])
    }

    /// Check whether `entity` has this component
    pub fn contains(&self, entity: Entity) -> bool {
        self.sparse.contains_key(&entity)
    }

    /// Number of stored components
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove every component
    pub fn clear(&mut self) {
        self.sparse.clear();
        self.entities.clear();
        self.values.clear();
    }

    /// Iterate `(entity, &component)` pairs in dense order
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.entities.iter().copied().zip(self.values.iter())
    }

    /// Iterate `(entity, &mut component)` pairs in dense order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        self.entities.iter().copied().zip(self.values.iter_mut())
    }

    /// Iterate the entities that have this component
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter().copied()
    }

    /// Iterate shared references to the values only
    ///
    /// Bulk read access for callers that do not care which entity a value
    /// belongs to (a renderer walking every drawable, for instance).
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    /// Iterate mutable references to the values only
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.values.iter_mut()
    }
}

impl<T: Component> Default for ComponentMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Tag {
        value: f64,
    }

    impl Component for Tag {}

    #[test]
    fn test_insert_get_remove() {
        let mut map = ComponentMap::new();
        let entity = Entity::new(1);

        map.insert(entity, Tag { value: 10.0 });
        assert!(map.contains(entity));
        assert_eq!(map.get(entity).unwrap().value, 10.0);

        let removed = map.remove(entity);
        assert_eq!(removed, Some(Tag { value: 10.0 }));
        assert!(!map.contains(entity));
        assert!(map.get(entity).is_none());
    }

    #[test]
    fn test_insert_overwrites() {
        let mut map = ComponentMap::new();
        let entity = Entity::new(1);

        map.insert(entity, Tag { value: 1.0 });
        map.insert(entity, Tag { value: 2.0 });

        assert_eq!(map.len(), 1);
        assert_eq!(map.get(entity).unwrap().value, 2.0);
    }

    #[test]
    fn test_remove_missing_is_none() {
        let mut map = ComponentMap::<Tag>::new();
        assert!(map.remove(Entity::new(99)).is_none());
    }

    #[test]
    fn test_swap_removal_keeps_survivors() {
        let mut map = ComponentMap::new();
        let e1 = Entity::new(1);
        let e2 = Entity::new(2);
        let e3 = Entity::new(3);

        map.insert(e1, Tag { value: 1.0 });
        map.insert(e2, Tag { value: 2.0 });
        map.insert(e3, Tag { value: 3.0 });

        // Removing the middle slot swaps e3 into its place.
        map.remove(e2);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(e1).unwrap().value, 1.0);
        assert_eq!(map.get(e3).unwrap().value, 3.0);
        assert!(!map.contains(e2));
    }

    #[test]
    fn test_get_mut() {
        let mut map = ComponentMap::new();
        let entity = Entity::new(1);
        map.insert(entity, Tag { value: 1.0 });

        map.get_mut(entity).unwrap().value = 100.0;
        assert_eq!(map.get(entity).unwrap().value, 100.0);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut map = ComponentMap::new();
        for i in 0..10 {
            map.insert(Entity::new(i), Tag { value: i as f64 });
        }

        let ids: Vec<u64> = map.iter().map(|(e, _)| e.raw()).collect();
        assert_eq!(ids, (0..10).collect::<Vec<u64>>());
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut map = ComponentMap::new();
        map.insert(Entity::new(1), Tag { value: 1.0 });
        map.insert(Entity::new(2), Tag { value: 2.0 });

        for (_, tag) in map.iter_mut() {
            tag.value *= 10.0;
        }

        let sum: f64 = map.values().map(|t| t.value).sum();
        assert_eq!(sum, 30.0);
    }

    #[test]
    fn test_clear() {
        let mut map = ComponentMap::new();
        map.insert(Entity::new(1), Tag { value: 1.0 });
        map.insert(Entity::new(2), Tag { value: 2.0 });

        map.clear();
        assert!(map.is_empty());
        assert!(!map.contains(Entity::new(1)));
    }

    #[test]
    fn test_churn() {
        let mut map = ComponentMap::new();
        for i in 0..100 {
            map.insert(Entity::new(i), Tag { value: i as f64 });
        }
        for i in (1..100).step_by(2) {
            map.remove(Entity::new(i));
        }

        assert_eq!(map.len(), 50);
        for i in (0..100).step_by(2) {
            assert_eq!(map.get(Entity::new(i)).unwrap().value, i as f64);
        }
    }
}
