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
//! The fixed frame pipeline
//!
//! [`Physics`] bundles every built-in system behind a single [`tick`] that
//! runs them in the one canonical order:
//!
//! 1. advance world time
//! 2. reset force accumulators
//! 3. accumulate gravity
//! 4. relax springs (and collect dangling ones)
//! 5. convert forces to acceleration
//! 6. integrate velocities
//! 7. integrate positions
//! 8. bounce off the world bounds
//!
//! Velocities integrate before positions, so a position update always sees
//! the acceleration of the same frame (semi-implicit Euler). Running the
//! same scenario twice with the same deltas produces bit-identical worlds.
//!
//! [`tick`]: Physics::tick

use crate::ecs::{System, World};
use crate::systems::{
    apply_forces, apply_input, integrate_positions, integrate_velocities, relax_springs,
    reset_forces, Bounce, Gravity, InputState, GRAVITATIONAL_CONSTANT,
};

/// Scenario-level tuning knobs for the pipeline
///
/// The defaults describe a 1000 × 500 world with SI gravitation and a
/// strongly damped bounce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    /// Gravitational constant, non-negative and finite
    pub gravitational_constant: f64,
    /// World width, positive and finite
    pub world_width: f64,
    /// World height, positive and finite
    pub world_height: f64,
    /// Boundary restitution, in `[-1, 0]`
    pub restitution: f64,
    /// Velocity delta per pressed direction per frame
    pub control_impulse: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        PhysicsConfig {
            gravitational_constant: GRAVITATIONAL_CONSTANT,
            world_width: 1000.0,
            world_height: 500.0,
            restitution: -0.2,
            control_impulse: 0.02,
        }
    }
}

/// The complete frame-stepped physics pipeline
///
/// # Examples
///
/// ```
/// use ecs_physics::ecs::components::{ComponentBag, Force, Mass, Position, Velocity};
/// use ecs_physics::{Physics, PhysicsConfig, World};
///
/// let mut world = World::new();
/// world.spawn(ComponentBag {
///     position: Some(Position::new(100.0, 100.0)),
///     velocity: Some(Velocity::new(1.0, 0.0)),
///     force: Some(Force::zero()),
///     mass: Some(Mass::new(10.0)),
///     ..ComponentBag::default()
/// });
///
/// let mut physics = Physics::new(PhysicsConfig::default());
/// physics.tick(&mut world, 1.0);
/// assert_eq!(world.time(), 1.0);
/// ```
#[derive(Debug)]
pub struct Physics {
    gravity: Gravity,
    bounce: Bounce,
    control_impulse: f64,
}

impl Physics {
    /// Build the pipeline from a config
    ///
    /// # Panics
    ///
    /// Panics if any config field is out of range; see [`PhysicsConfig`]
    /// field docs for the valid ranges.
    pub fn new(config: PhysicsConfig) -> Self {
        assert!(
            config.control_impulse.is_finite(),
            "Control impulse must be finite"
        );
        Physics {
            gravity: Gravity::new(config.gravitational_constant),
            bounce: Bounce::new(config.world_width, config.world_height, config.restitution),
            control_impulse: config.control_impulse,
        }
    }

    /// Advance the world by one frame of `delta` seconds
    pub fn tick(&mut self, world: &mut World, delta: f64) {
        world.advance_time(delta);

        reset_forces(&mut world.forces);
        self.gravity
            .accumulate(&world.positions, &world.masses, &mut world.forces);
        relax_springs(world);
        apply_forces(&mut world.accelerations, &world.masses, &world.forces);
        integrate_velocities(&mut world.velocities, &world.accelerations, delta);
        integrate_positions(&mut world.positions, &world.velocities, delta);
        self.bounce.apply(&mut world.positions, &mut world.velocities);

        log::trace!(
            "tick complete: time={} entities={}",
            world.time(),
            world.entity_count()
        );
    }

    /// Steer every user-controlled entity with this frame's input snapshot
    ///
    /// Separate from [`tick`] so callers decide when input lands relative to
    /// the frame step (typically just before it).
    ///
    /// [`tick`]: Physics::tick
    pub fn apply_input(&self, world: &mut World, input: InputState) -> usize {
        apply_input(
            &mut world.velocities,
            &world.user_controlled,
            input,
            self.control_impulse,
        )
    }
}

impl System for Physics {
    fn run(&mut self, world: &mut World, delta: f64) {
        self.tick(world, delta);
    }

    fn name(&self) -> &str {
        "physics"
    }
}
