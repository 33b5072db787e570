//! World management
//!
//! The World is the aggregate root for all ECS data: the entity id counter,
//! the alive-entity set, and one sparse component map per known component
//! type. The world exclusively owns component storage; nothing holds
//! long-lived references into the maps, which is what makes cross-entity
//! references (springs) safe to express as plain entity ids.

use crate::ecs::components::{
    Acceleration, ComponentBag, Force, Mass, Position, Spring, UserControlled, Velocity,
};
use crate::ecs::{ComponentMap, Entity};
use std::collections::HashSet;

/// The ECS world
///
/// Component maps are public fields: systems and external collaborators (a
/// renderer, scenario init code) access them directly, either through the
/// query functions in [`crate::ecs::query`] or by bulk iteration over a
/// single map. The entity lifecycle state is private; go through
/// [`World::create_entity`], [`World::spawn`] and [`World::destroy_entity`]
/// so the alive set and the maps never disagree.
pub struct World {
    last_assigned_id: u64,
    alive: HashSet<Entity>,
    time: f64,
    /// Position components
    pub positions: ComponentMap<Position>,
    /// Velocity components
    pub velocities: ComponentMap<Velocity>,
    /// Acceleration components
    pub accelerations: ComponentMap<Acceleration>,
    /// Force accumulators
    pub forces: ComponentMap<Force>,
    /// Mass components
    pub masses: ComponentMap<Mass>,
    /// Spring constraints
    pub springs: ComponentMap<Spring>,
    /// User-control markers
    pub user_controlled: ComponentMap<UserControlled>,
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        World {
            last_assigned_id: 0,
            alive: HashSet::new(),
            time: 0.0,
            positions: ComponentMap::new(),
            velocities: ComponentMap::new(),
            accelerations: ComponentMap::new(),
            forces: ComponentMap::new(),
            masses: ComponentMap::new(),
            springs: ComponentMap::new(),
            user_controlled: ComponentMap::new(),
        }
    }

    /// Create a new entity with no components
    ///
    /// Ids increase monotonically and are never reused for the lifetime of
    /// the world.
    pub fn create_entity(&mut self) -> Entity {
        self.last_assigned_id += 1;
        let entity = Entity::new(self.last_assigned_id);
        self.alive.insert(entity);
        entity
    }

    /// Create an entity and attach every component present in `bag`
    pub fn spawn(&mut self, bag: ComponentBag) -> Entity {
        let entity = self.create_entity();
        if let Some(position) = bag.position {
            self.positions.insert(entity, position);
        }
        if let Some(velocity) = bag.velocity {
            self.velocities.insert(entity, velocity);
        }
        if let Some(acceleration) = bag.acceleration {
            self.accelerations.insert(entity, acceleration);
        }
        if let Some(force) = bag.force {
            self.forces.insert(entity, force);
        }
        if let Some(mass) = bag.mass {
            self.masses.insert(entity, mass);
        }
        if let Some(spring) = bag.spring {
            self.springs.insert(entity, spring);
        }
        if let Some(marker) = bag.user_controlled {
            self.user_controlled.insert(entity, marker);
        }
        entity
    }

    /// Destroy an entity, removing its data from every component map
    ///
    /// Idempotent: destroying an already-dead entity is a no-op. Returns
    /// whether the entity was alive. Alive → Dead is the only lifecycle
    /// transition and it is irreversible; constraints referencing the dead
    /// entity are collected by the spring system on its next run.
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.alive.remove(&entity) {
            return false;
        }
        self.positions.remove(entity);
        self.velocities.remove(entity);
        self.accelerations.remove(entity);
        self.forces.remove(entity);
        self.masses.remove(entity);
        self.springs.remove(entity);
        self.user_controlled.remove(entity);
        true
    }

    /// Check whether an entity is alive
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.alive.contains(&entity)
    }

    /// Number of alive entities
    pub fn entity_count(&self) -> usize {
        self.alive.len()
    }

    /// Iterate over all alive entities (unordered)
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.alive.iter().copied()
    }

    /// Simulation clock, the sum of all deltas ticked so far
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance the simulation clock
    ///
    /// # Panics
    ///
    /// Panics if `delta` is negative or not finite; the clock must increase
    /// monotonically.
    pub fn advance_time(&mut self, delta: f64) {
        assert!(
            delta >= 0.0 && delta.is_finite(),
            "Time delta must be non-negative and finite"
        );
        self.time += delta;
    }

    /// Remove all entities and components, resetting the id counter and clock
    pub fn clear(&mut self) {
        self.last_assigned_id = 0;
        self.alive.clear();
        self.time = 0.0;
        self.positions.clear();
        self.velocities.clear();
        self.accelerations.clear();
        self.forces.clear();
        self.masses.clear();
        self.springs.clear();
        self.user_controlled.clear();
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
