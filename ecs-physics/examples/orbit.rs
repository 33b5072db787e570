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
//! Two-body orbit demo
//!
//! A light satellite circles a heavy primary. The tangential launch speed
//! is the circular-orbit speed sqrt(G*M/r), so the separation should hold
//! roughly steady over the run.
//!
//! Run with `RUST_LOG=debug` for per-system logging.

use ecs_physics::ecs::components::{Acceleration, ComponentBag, Force, Mass, Position, Velocity};
use ecs_physics::ecs::{query, World};
use ecs_physics::{Physics, PhysicsConfig};

const G: f64 = 6.67e-5;
const PRIMARY_MASS: f64 = 1e9;
const RADIUS: f64 = 1000.0;

fn main() {
    env_logger::init();

    let mut world = World::new();
    let primary = world.spawn(ComponentBag {
        position: Some(Position::new(5000.0, 5000.0)),
        velocity: Some(Velocity::zero()),
        acceleration: Some(Acceleration::zero()),
        force: Some(Force::zero()),
        mass: Some(Mass::new(PRIMARY_MASS)),
        ..ComponentBag::default()
    });

    let orbital_speed = (G * PRIMARY_MASS / RADIUS).sqrt();
    let satellite = world.spawn(ComponentBag {
        position: Some(Position::new(5000.0 + RADIUS, 5000.0)),
        velocity: Some(Velocity::new(0.0, orbital_speed)),
        acceleration: Some(Acceleration::zero()),
        force: Some(Force::zero()),
        mass: Some(Mass::new(1.0)),
        ..ComponentBag::default()
    });

    let mut physics = Physics::new(PhysicsConfig {
        gravitational_constant: G,
        world_width: 10_000.0,
        world_height: 10_000.0,
        restitution: 0.0,
        ..PhysicsConfig::default()
    });

    println!("launching at {orbital_speed:.3} units/s, radius {RADIUS}");

    for frame in 0..=1000 {
        physics.tick(&mut world, 0.1);

        if frame % 100 == 0 {
            let p1 = world.positions.get(primary).unwrap().0;
            let p2 = world.positions.get(satellite).unwrap().0;
            let separation = (p2 - p1).length();
            println!(
                "t={:7.1}  satellite=({:8.2}, {:8.2})  separation={:8.2}",
                world.time(),
                p2.x,
                p2.y,
                separation
            );
        }
    }

    let moving = query::join2(&world.positions, &world.velocities).count();
    println!("done: {moving} bodies still in motion");
}
