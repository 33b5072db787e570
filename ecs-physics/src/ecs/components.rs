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
//! Physics components
//!
//! The component family for Newtonian 2D mechanics: position, velocity,
//! acceleration, force, mass, plus the spring constraint and the
//! user-control marker. An entity may carry any subset; a system that needs
//! a component the entity lacks simply skips that entity.

use crate::ecs::{Component, Entity};
use crate::math::Vec2;

/// Position of an entity in world space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position(pub Vec2);

impl Position {
    /// Create a position from coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Position(Vec2::new(x, y))
    }

    /// Position at the origin
    pub fn zero() -> Self {
        Position(Vec2::zero())
    }
}

impl Component for Position {}

/// Rate of change of position, in world units per time unit
///
/// The time unit is whatever the scenario feeds to the pipeline as `delta`;
/// it only has to be consistent across velocity, acceleration and `delta`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

impl Velocity {
    /// Create a velocity from components
    pub fn new(x: f64, y: f64) -> Self {
        Velocity(Vec2::new(x, y))
    }

    /// Velocity at rest
    pub fn zero() -> Self {
        Velocity(Vec2::zero())
    }
}

impl Component for Velocity {}

/// Rate of change of velocity
///
/// Overwritten each frame by the apply-force system for entities that carry
/// mass and force; otherwise whatever the scenario set it to.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Acceleration(pub Vec2);

impl Acceleration {
    /// Create an acceleration from components
    pub fn new(x: f64, y: f64) -> Self {
        Acceleration(Vec2::new(x, y))
    }

    /// Zero acceleration
    pub fn zero() -> Self {
        Acceleration(Vec2::zero())
    }
}

impl Component for Acceleration {}

/// Force accumulator
///
/// Zeroed at the start of every frame, then accumulated into by gravity and
/// spring systems before being converted to acceleration.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force(pub Vec2);

impl Force {
    /// Create a force from components
    pub fn new(x: f64, y: f64) -> Self {
        Force(Vec2::new(x, y))
    }

    /// Zero force
    pub fn zero() -> Self {
        Force(Vec2::zero())
    }
}

impl Component for Force {}

/// Mass of an entity
///
/// Zero (or near-zero) mass marks a body as immovable by forces: the
/// apply-force system skips it rather than divide by zero, so such a body is
/// kinematically driven; it still moves by its own velocity if it has one.
///
/// # Examples
///
/// ```
/// use ecs_physics::ecs::components::Mass;
///
/// let mass = Mass::new(10.5);
/// assert!(!mass.is_immovable());
///
/// let anchor = Mass::immovable();
/// assert!(anchor.is_immovable());
/// assert_eq!(anchor.inverse(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mass {
    value: f64,
}

impl Mass {
    /// Threshold below which mass is treated as zero (immovable)
    pub const IMMOVABLE_THRESHOLD: f64 = 1e-10;

    /// Create a mass with the given value
    ///
    /// # Panics
    ///
    /// Panics if the value is negative or not finite. Use [`Mass::try_new`]
    /// for fallible construction.
    pub fn new(value: f64) -> Self {
        assert!(
            value >= 0.0 && value.is_finite(),
            "Mass must be non-negative and finite"
        );
        Mass { value }
    }

    /// Try to create a mass, returning `None` for negative or non-finite values
    pub fn try_new(value: f64) -> Option<Self> {
        if value >= 0.0 && value.is_finite() {
            Some(Mass { value })
        } else {
            None
        }
    }

    /// Create an immovable (effectively infinite) mass
    pub fn immovable() -> Self {
        Mass { value: 0.0 }
    }

    /// Get the mass value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Whether this body is exempt from force-derived acceleration
    pub fn is_immovable(&self) -> bool {
        self.value < Self::IMMOVABLE_THRESHOLD
    }

    /// Inverse mass, `0.0` for immovable bodies
    pub fn inverse(&self) -> f64 {
        if self.is_immovable() {
            0.0
        } else {
            1.0 / self.value
        }
    }
}

impl Component for Mass {}

impl Default for Mass {
    fn default() -> Self {
        Mass::new(1.0)
    }
}

/// Spring constraint between two entities
///
/// Stores entity *identities*, never references to their component data;
/// endpoints are re-resolved through the maps every frame, so a destroyed
/// endpoint is detected by alive-set membership and the constraint entity is
/// garbage-collected by the spring system.
///
/// The spring is attached to its own, otherwise componentless, entity so it
/// can be created, queried and destroyed like anything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    /// First endpoint
    pub entity1: Entity,
    /// Second endpoint
    pub entity2: Entity,
    /// Stiffness coefficient
    pub k: f64,
    /// Separation at which the spring applies no force
    pub rest_length: f64,
}

impl Spring {
    /// Create a spring between two entities
    ///
    /// # Panics
    ///
    /// Panics if `k` or `rest_length` is negative or not finite.
    pub fn new(entity1: Entity, entity2: Entity, k: f64, rest_length: f64) -> Self {
        assert!(
            k >= 0.0 && k.is_finite(),
            "Spring stiffness must be non-negative and finite"
        );
        assert!(
            rest_length >= 0.0 && rest_length.is_finite(),
            "Spring rest length must be non-negative and finite"
        );
        Spring {
            entity1,
            entity2,
            k,
            rest_length,
        }
    }
}

impl Component for Spring {}

/// Marker for entities steered by user input
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserControlled;

impl Component for UserControlled {}

/// Optional component set for spawning an entity in one call
///
/// Each field is an explicit, typed slot; [`World::spawn`] inserts every
/// `Some` into its map. Use struct-update syntax for the rest:
///
/// ```
/// use ecs_physics::ecs::{ComponentBag, World};
/// use ecs_physics::ecs::components::{Mass, Position, Velocity};
///
/// let mut world = World::new();
/// let entity = world.spawn(ComponentBag {
///     position: Some(Position::new(10.0, 20.0)),
///     velocity: Some(Velocity::zero()),
///     mass: Some(Mass::new(5.0)),
///     ..ComponentBag::default()
/// });
/// assert!(world.is_alive(entity));
/// ```
///
/// [`World::spawn`]: crate::ecs::World::spawn
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentBag {
    /// Position slot
    pub position: Option<Position>,
    /// Velocity slot
    pub velocity: Option<Velocity>,
    /// Acceleration slot
    pub acceleration: Option<Acceleration>,
    /// Force slot
    pub force: Option<Force>,
    /// Mass slot
    pub mass: Option<Mass>,
    /// Spring slot
    pub spring: Option<Spring>,
    /// User-control marker slot
    pub user_controlled: Option<UserControlled>,
}
