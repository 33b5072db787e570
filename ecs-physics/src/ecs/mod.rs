//! Entity Component System core
//!
//! This module provides the storage and query engine:
//! - Entity lifecycle (monotonic ids, alive set)
//! - One sparse component map per component type
//! - Multi-component intersection queries
//! - Sequential system execution

mod component;
mod entity;
mod system;
mod world;

pub mod components;
pub mod query;

pub use component::{Component, ComponentMap};
pub use components::ComponentBag;
pub use entity::Entity;
pub use system::{Schedule, System};
pub use world::World;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_creation() {
        let world = World::new();
        assert_eq!(world.entity_count(), 0);
    }

    #[test]
    fn test_entity_creation() {
        let mut world = World::new();
        let entity = world.create_entity();
        assert_eq!(world.entity_count(), 1);
        assert!(world.is_alive(entity));
    }
}
