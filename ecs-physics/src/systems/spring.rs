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
//! Spring constraint relaxation and garbage collection
//!
//! Each spring links two endpoint entities by id. Per frame the system
//! resolves both endpoints fresh through the maps: a dead endpoint means the
//! constraint itself is destroyed (a constraint must not outlive either
//! endpoint), while a merely missing Position or Force is transient and the
//! spring simply sits out the frame.

use crate::ecs::components::Spring;
use crate::ecs::{Entity, World};

/// Apply Hookean restoring forces for every live spring
///
/// Force magnitude is `-(rest_length - distance) * k / distance`, applied
/// along the displacement to endpoint 1 and negated to endpoint 2: the
/// spring pulls the endpoints together when stretched past its rest length
/// and pushes them apart when compressed. Coincident endpoints are skipped
/// for the frame (no defined direction).
///
/// Dangling springs are collected here: destroying the constraint entity
/// happens on a snapshot of the spring map, never mid-iteration over it.
/// Returns the number of springs that applied force this frame.
pub fn relax_springs(world: &mut World) -> usize {
    // Snapshot: collecting a dangling spring removes it from the map being
    // walked, so iterate a copy of the rows.
    let springs: Vec<(Entity, Spring)> = world.springs.iter().map(|(e, s)| (e, *s)).collect();

    let mut relaxed = 0;

    for (constraint, spring) in springs {
        if !world.is_alive(spring.entity1) || !world.is_alive(spring.entity2) {
            log::debug!("collecting dangling spring {constraint}");
            world.destroy_entity(constraint);
            continue;
        }

        let position1 = match world.positions.get(spring.entity1) {
            Some(p) => p.0,
            None => continue,
        };
        let position2 = match world.positions.get(spring.entity2) {
            Some(p) => p.0,
            None => continue,
        };
        if !world.forces.contains(spring.entity1) || !world.forces.contains(spring.entity2) {
            continue;
        }

        let d = position2 - position1;
        if d.is_zero() {
            continue;
        }

        let distance = d.length();
        let magnitude = -(spring.rest_length - distance) * spring.k / distance;
        let f = d * magnitude;
        if !f.is_valid() {
            log::warn!("non-finite spring force for {constraint}, skipping");
            continue;
        }

        if let Some(force1) = world.forces.get_mut(spring.entity1) {
            force1.0 += f;
        }
        if let Some(force2) = world.forces.get_mut(spring.entity2) {
            force2.0 -= f;
        }
        relaxed += 1;
    }

    relaxed
}
