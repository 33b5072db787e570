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
//! Entity identities
//!
//! An entity is an opaque integer identity with no data of its own; it is
//! purely a lookup key into the per-type component maps. The [`World`]
//! allocates ids from a monotonic counter and never reuses them, so a stale
//! id held by a constraint component is detected by alive-set membership
//! rather than by a generation counter.
//!
//! [`World`]: crate::ecs::World

use std::fmt;

/// Unique identifier for an entity
///
/// Entities are normally obtained from [`World::create_entity`] or
/// [`World::spawn`]; constructing one directly is mainly useful in tests.
///
/// [`World::create_entity`]: crate::ecs::World::create_entity
/// [`World::spawn`]: crate::ecs::World::spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Entity(u64);

impl Entity {
    /// Create an entity handle from a raw id
    pub fn new(id: u64) -> Self {
        Entity(id)
    }

    /// Get the raw u64 id
    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_roundtrip() {
        let entity = Entity::new(42);
        assert_eq!(entity.raw(), 42);
    }

    #[test]
    fn test_entity_equality_and_order() {
        let e1 = Entity::new(1);
        let e2 = Entity::new(1);
        let e3 = Entity::new(2);
        assert_eq!(e1, e2);
        assert_ne!(e1, e3);
        assert!(e1 < e3);
    }

    #[test]
    fn test_entity_display() {
        assert_eq!(Entity::new(7).to_string(), "Entity(7)");
    }
}
