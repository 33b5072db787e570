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
//! Euler integration of velocity and position
//!
//! Split into two passes so the frame driver can fix their order: running
//! velocity integration before position integration makes an acceleration
//! affect the same frame's displacement (semi-implicit Euler).

use crate::ecs::components::{Acceleration, Position, Velocity};
use crate::ecs::ComponentMap;

/// `position += velocity * delta` for every entity with both components
///
/// Returns the number of entities moved.
pub fn integrate_positions(
    positions: &mut ComponentMap<Position>,
    velocities: &ComponentMap<Velocity>,
    delta: f64,
) -> usize {
    let mut updated = 0;

    for (entity, velocity) in velocities.iter() {
        let position = match positions.get_mut(entity) {
            Some(p) => p,
            None => continue,
        };
        position.0.add_scaled(velocity.0, delta);
        updated += 1;
    }

    updated
}

/// `velocity += acceleration * delta` for every entity with both components
///
/// Returns the number of entities updated.
pub fn integrate_velocities(
    velocities: &mut ComponentMap<Velocity>,
    accelerations: &ComponentMap<Acceleration>,
    delta: f64,
) -> usize {
    let mut updated = 0;

    for (entity, acceleration) in accelerations.iter() {
        let velocity = match velocities.get_mut(entity) {
            Some(v) => v,
            None => continue,
        };
        velocity.0.add_scaled(acceleration.0, delta);
        updated += 1;
    }

    updated
}
