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
//! Force bookkeeping: per-frame reset and Newton's second law
//!
//! Forces accumulate over one frame only. The reset pass runs before any
//! force-accumulating system; the apply pass runs after all of them and
//! overwrites acceleration with `F / m`.

use crate::ecs::components::{Acceleration, Force, Mass};
use crate::ecs::ComponentMap;

/// Zero every force accumulator
///
/// Must run before gravity and spring accumulation in the same frame, and
/// after the previous frame's forces have been converted to acceleration.
pub fn reset_forces(forces: &mut ComponentMap<Force>) {
    for force in forces.values_mut() {
        force.0.set_zero();
    }
}

/// `acceleration = force / mass` for every entity with all three components
///
/// The acceleration is overwritten, not accumulated. Immovable (zero-mass)
/// bodies are skipped: they are exempt from force-derived acceleration, so a
/// kinematically driven body keeps whatever acceleration the scenario gave
/// it. Returns the number of entities updated.
pub fn apply_forces(
    accelerations: &mut ComponentMap<Acceleration>,
    masses: &ComponentMap<Mass>,
    forces: &ComponentMap<Force>,
) -> usize {
    let mut updated = 0;

    for (entity, mass) in masses.iter() {
        if mass.is_immovable() {
            continue;
        }
        let force = match forces.get(entity) {
            Some(f) => f,
            None => continue,
        };
        let acceleration = match accelerations.get_mut(entity) {
            Some(a) => a,
            None => continue,
        };

        let next = force.0 * mass.inverse();
        if !next.is_valid() {
            log::warn!("non-finite acceleration for {entity}, skipping");
            continue;
        }
        acceleration.0 = next;
        updated += 1;
    }

    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;
    use crate::math::Vec2;

    #[test]
    fn test_reset_forces() {
        let mut forces = ComponentMap::new();
        forces.insert(Entity::new(1), Force::new(5.0, -3.0));
        forces.insert(Entity::new(2), Force::new(1.0, 1.0));

        reset_forces(&mut forces);

        for force in forces.values() {
            assert!(force.0.is_zero());
        }
    }

    #[test]
    fn test_apply_forces_overwrites() {
        let mut accelerations = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        let entity = Entity::new(1);

        accelerations.insert(entity, Acceleration::new(99.0, 99.0));
        masses.insert(entity, Mass::new(10.0));
        forces.insert(entity, Force::new(20.0, -40.0));

        let updated = apply_forces(&mut accelerations, &masses, &forces);
        assert_eq!(updated, 1);
        assert_eq!(accelerations.get(entity).unwrap().0, Vec2::new(2.0, -4.0));
    }

    #[test]
    fn test_zero_mass_is_skipped() {
        let mut accelerations = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        let entity = Entity::new(1);

        accelerations.insert(entity, Acceleration::new(7.0, 7.0));
        masses.insert(entity, Mass::immovable());
        forces.insert(entity, Force::new(1000.0, 0.0));

        let updated = apply_forces(&mut accelerations, &masses, &forces);
        assert_eq!(updated, 0);
        // The scenario-provided acceleration survives untouched.
        assert_eq!(accelerations.get(entity).unwrap().0, Vec2::new(7.0, 7.0));
    }

    #[test]
    fn test_partial_component_sets_are_skipped() {
        let mut accelerations = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let forces = ComponentMap::new(); // nobody has a force

        masses.insert(Entity::new(1), Mass::new(1.0));
        accelerations.insert(Entity::new(1), Acceleration::zero());

        assert_eq!(apply_forces(&mut accelerations, &masses, &forces), 0);
    }
}
