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
//! # ecs-physics
//!
//! A minimal ECS (Entity Component System) runtime with a deterministic,
//! frame-stepped 2D physics pipeline.
//!
//! ## Features
//!
//! - **ECS Core**: Opaque entity ids, map-per-type component storage,
//!   multi-component queries
//! - **Newtonian Physics**: N-body gravitation, Hookean springs, force
//!   accumulation, semi-implicit Euler integration
//! - **Boundary Bounce**: Clamp-and-reflect collision with the world bounds
//! - **Determinism**: Single-threaded, fixed system order; identical inputs
//!   produce bit-identical worlds
//!
//! ## Example
//!
//! ```rust
//! use ecs_physics::ecs::components::{ComponentBag, Force, Mass, Position, Velocity};
//! use ecs_physics::{Physics, PhysicsConfig, World};
//!
//! let mut world = World::new();
//! world.spawn(ComponentBag {
//!     position: Some(Position::new(100.0, 100.0)),
//!     velocity: Some(Velocity::new(0.5, 0.0)),
//!     force: Some(Force::zero()),
//!     mass: Some(Mass::new(10.0)),
//!     ..ComponentBag::default()
//! });
//!
//! let mut physics = Physics::new(PhysicsConfig::default());
//! for _ in 0..60 {
//!     physics.tick(&mut world, 1.0 / 60.0);
//! }
//! ```

#![warn(missing_docs)]

/// Entity Component System implementation
pub mod ecs;

/// 2D vector math
pub mod math;

/// The fixed frame pipeline
pub mod pipeline;

/// Built-in physics systems
pub mod systems;

pub use ecs::{Entity, World};
pub use pipeline::{Physics, PhysicsConfig};
