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
//! Particle cloud with random spring links
//!
//! Scatters particles across the world, links random pairs with springs,
//! then drops one endpoint partway through the run to show constraint
//! garbage collection in action.

use ecs_physics::ecs::components::{
    Acceleration, ComponentBag, Force, Mass, Position, Spring, Velocity,
};
use ecs_physics::ecs::{Entity, World};
use ecs_physics::{Physics, PhysicsConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PARTICLES: usize = 40;
const SPRINGS: usize = 15;

fn main() {
    env_logger::init();

    let mut rng = StdRng::seed_from_u64(7);
    let mut world = World::new();

    let mut particles: Vec<Entity> = Vec::with_capacity(PARTICLES);
    for _ in 0..PARTICLES {
        particles.push(world.spawn(ComponentBag {
            position: Some(Position::new(
                rng.gen_range(100.0..900.0),
                rng.gen_range(100.0..400.0),
            )),
            velocity: Some(Velocity::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )),
            acceleration: Some(Acceleration::zero()),
            force: Some(Force::zero()),
            mass: Some(Mass::new(rng.gen_range(1.0..50.0))),
            ..ComponentBag::default()
        }));
    }

    for _ in 0..SPRINGS {
        let i = rng.gen_range(0..PARTICLES);
        let mut j = rng.gen_range(0..PARTICLES);
        while j == i {
            j = rng.gen_range(0..PARTICLES);
        }
        world.spawn(ComponentBag {
            spring: Some(Spring::new(
                particles[i],
                particles[j],
                1e-3,
                rng.gen_range(50.0..150.0),
            )),
            ..ComponentBag::default()
        });
    }

    let mut physics = Physics::new(PhysicsConfig {
        gravitational_constant: 6.67e-5,
        ..PhysicsConfig::default()
    });

    println!(
        "{} particles, {} springs, {} entities total",
        PARTICLES,
        world.springs.len(),
        world.entity_count()
    );

    for frame in 1..=600 {
        physics.tick(&mut world, 0.1);

        // Drop a particle mid-run; springs attached to it get collected on
        // the next frame.
        if frame == 300 {
            let victim = particles[0];
            world.destroy_entity(victim);
            println!("t={:5.1}  destroyed {victim}", world.time());
        }

        if frame % 100 == 0 {
            println!(
                "t={:5.1}  entities={}  springs={}",
                world.time(),
                world.entity_count(),
                world.springs.len()
            );
        }
    }
}
