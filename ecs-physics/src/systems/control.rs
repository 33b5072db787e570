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
//! User-controlled velocity input
//!
//! Translates a per-frame input snapshot into velocity deltas for entities
//! carrying the [`UserControlled`] marker. How the snapshot is captured
//! (keyboard polling, a replay file, a test fixture) is the caller's
//! business; this system only ever sees the plain snapshot passed to the
//! call, so there is no process-wide input singleton.
//!
//! [`UserControlled`]: crate::ecs::components::UserControlled

use crate::ecs::components::{UserControlled, Velocity};
use crate::ecs::ComponentMap;

/// Direction snapshot for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    /// Steer up (negative y)
    pub up: bool,
    /// Steer down (positive y)
    pub down: bool,
    /// Steer left (negative x)
    pub left: bool,
    /// Steer right (positive x)
    pub right: bool,
}

/// Add `impulse` per pressed direction to every controlled entity's velocity
///
/// Opposing directions cancel. Entities with the marker but no velocity are
/// skipped. Returns the number of entities steered.
pub fn apply_input(
    velocities: &mut ComponentMap<Velocity>,
    controlled: &ComponentMap<UserControlled>,
    input: InputState,
    impulse: f64,
) -> usize {
    let mut steered = 0;

    for (entity, _) in controlled.iter() {
        let velocity = match velocities.get_mut(entity) {
            Some(v) => v,
            None => continue,
        };

        if input.right {
            velocity.0.x += impulse;
        }
        if input.left {
            velocity.0.x -= impulse;
        }
        if input.up {
            velocity.0.y -= impulse;
        }
        if input.down {
            velocity.0.y += impulse;
        }
        steered += 1;
    }

    steered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;
    use crate::math::Vec2;

    #[test]
    fn test_input_steers_marked_entities() {
        let mut velocities = ComponentMap::new();
        let mut controlled = ComponentMap::new();
        let player = Entity::new(1);
        let npc = Entity::new(2);

        velocities.insert(player, Velocity::zero());
        velocities.insert(npc, Velocity::zero());
        controlled.insert(player, UserControlled);

        let input = InputState {
            right: true,
            up: true,
            ..InputState::default()
        };
        let steered = apply_input(&mut velocities, &controlled, input, 0.02);

        assert_eq!(steered, 1);
        assert_eq!(velocities.get(player).unwrap().0, Vec2::new(0.02, -0.02));
        assert_eq!(velocities.get(npc).unwrap().0, Vec2::zero());
    }

    #[test]
    fn test_opposing_directions_cancel() {
        let mut velocities = ComponentMap::new();
        let mut controlled = ComponentMap::new();
        let player = Entity::new(1);
        velocities.insert(player, Velocity::new(1.0, 1.0));
        controlled.insert(player, UserControlled);

        let input = InputState {
            left: true,
            right: true,
            ..InputState::default()
        };
        apply_input(&mut velocities, &controlled, input, 0.02);
        assert_eq!(velocities.get(player).unwrap().0, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_marker_without_velocity_is_skipped() {
        let mut velocities = ComponentMap::new();
        let mut controlled = ComponentMap::new();
        controlled.insert(Entity::new(1), UserControlled);

        let input = InputState {
            down: true,
            ..InputState::default()
        };
        assert_eq!(apply_input(&mut velocities, &controlled, input, 0.02), 0);
    }
}
