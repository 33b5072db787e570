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
//! N-body gravitation
//!
//! Newton's law of universal gravitation over every unordered pair of
//! entities carrying mass, position and a force accumulator:
//!
//! **F = G * m₁ * m₂ / r²**
//!
//! applied along the displacement direction, with the equal-and-opposite
//! reaction written structurally into the other body's accumulator. The scan
//! is a full O(n²) pairwise evaluation with no spatial acceleration
//! structure.

use crate::ecs::components::{Force, Mass, Position};
use crate::ecs::{query, ComponentMap, Entity};
use crate::math::Vec2;

/// Gravitational constant in SI units (m³/(kg⋅s²)), CODATA 2018
///
/// Scenarios with non-SI units typically configure a scaled constant
/// instead; see [`crate::pipeline::PhysicsConfig`].
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Pairwise gravitational force accumulator
///
/// # Examples
///
/// ```
/// use ecs_physics::systems::gravity::{Gravity, GRAVITATIONAL_CONSTANT};
///
/// let gravity = Gravity::new(GRAVITATIONAL_CONSTANT);
/// assert_eq!(gravity.g(), GRAVITATIONAL_CONSTANT);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gravity {
    g: f64,
}

impl Gravity {
    /// Create a gravitation system with the given constant
    ///
    /// # Panics
    ///
    /// Panics if `g` is negative or not finite.
    pub fn new(g: f64) -> Self {
        assert!(
            g >= 0.0 && g.is_finite(),
            "Gravitational constant must be non-negative and finite"
        );
        Gravity { g }
    }

    /// The configured gravitational constant
    pub fn g(&self) -> f64 {
        self.g
    }

    /// Accumulate gravitational forces for every qualifying pair
    ///
    /// Entities must have all of {Mass, Position, Force} to participate;
    /// each unordered pair is visited exactly once. A coincident pair (zero
    /// displacement) is skipped whole: direction would be undefined and
    /// the accumulators must not pick up NaN. Returns the number of pairs
    /// that contributed force.
    pub fn accumulate(
        &self,
        positions: &ComponentMap<Position>,
        masses: &ComponentMap<Mass>,
        forces: &mut ComponentMap<Force>,
    ) -> usize {
        // Snapshot the qualifying bodies so pairs can be indexed while the
        // force map is mutated.
        let bodies: Vec<(Entity, Vec2, f64)> = query::join3(positions, masses, &*forces)
            .map(|(entity, position, mass, _)| (entity, position.0, mass.value()))
            .collect();

        let mut contributing = 0;

        for i in 0..bodies.len() {
            let (entity1, position1, mass1) = bodies[i];
            for &(entity2, position2, mass2) in &bodies[i + 1..] {
                let d = position2 - position1;
                if d.is_zero() {
                    continue;
                }

                let r_squared = d.length_squared();
                let r = r_squared.sqrt();
                let magnitude = self.g * mass1 * mass2 / r_squared;

                // f = magnitude * d/r
                let f = d * (magnitude / r);
                if !f.is_valid() {
                    log::warn!("non-finite gravity between {entity1} and {entity2}, skipping pair");
                    continue;
                }

                if let Some(force1) = forces.get_mut(entity1) {
                    force1.0 += f;
                }
                if let Some(force2) = forces.get_mut(entity2) {
                    force2.0 -= f;
                }
                contributing += 1;
            }
        }

        contributing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::Entity;

    fn body(
        positions: &mut ComponentMap<Position>,
        masses: &mut ComponentMap<Mass>,
        forces: &mut ComponentMap<Force>,
        id: u64,
        x: f64,
        y: f64,
        mass: f64,
    ) -> Entity {
        let entity = Entity::new(id);
        positions.insert(entity, Position::new(x, y));
        masses.insert(entity, Mass::new(mass));
        forces.insert(entity, Force::zero());
        entity
    }

    #[test]
    #[should_panic(expected = "Gravitational constant must be non-negative and finite")]
    fn test_negative_g_panics() {
        Gravity::new(-1.0);
    }

    #[test]
    fn test_two_body_attraction() {
        let mut positions = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        let e1 = body(&mut positions, &mut masses, &mut forces, 1, 0.0, 0.0, 1000.0);
        let e2 = body(&mut positions, &mut masses, &mut forces, 2, 100.0, 0.0, 1000.0);

        let gravity = Gravity::new(6.67e-5);
        let pairs = gravity.accumulate(&positions, &masses, &mut forces);
        assert_eq!(pairs, 1);

        let f1 = forces.get(e1).unwrap().0;
        let f2 = forces.get(e2).unwrap().0;

        // e1 is pulled toward e2 and vice versa.
        assert!(f1.x > 0.0);
        assert!(f2.x < 0.0);
        assert_eq!(f1.y, 0.0);

        // Expected magnitude: G * m1 * m2 / r^2
        let expected = 6.67e-5 * 1000.0 * 1000.0 / (100.0 * 100.0);
        assert!((f1.x - expected).abs() < 1e-12);
    }

    #[test]
    fn test_newtons_third_law() {
        let mut positions = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        let e1 = body(&mut positions, &mut masses, &mut forces, 1, 3.0, -7.0, 10.0);
        let e2 = body(&mut positions, &mut masses, &mut forces, 2, 42.0, 19.0, 1000.0);

        Gravity::new(6.67e-5).accumulate(&positions, &masses, &mut forces);

        let f1 = forces.get(e1).unwrap().0;
        let f2 = forces.get(e2).unwrap().0;
        assert_eq!(f1.x, -f2.x);
        assert_eq!(f1.y, -f2.y);
    }

    #[test]
    fn test_coincident_pair_is_skipped() {
        let mut positions = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        let e1 = body(&mut positions, &mut masses, &mut forces, 1, 5.0, 5.0, 100.0);
        let e2 = body(&mut positions, &mut masses, &mut forces, 2, 5.0, 5.0, 100.0);

        let pairs = Gravity::new(6.67e-5).accumulate(&positions, &masses, &mut forces);
        assert_eq!(pairs, 0);

        for entity in [e1, e2] {
            let f = forces.get(entity).unwrap().0;
            assert!(f.is_valid());
            assert!(f.is_zero());
        }
    }

    #[test]
    fn test_entities_missing_components_do_not_participate() {
        let mut positions = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        body(&mut positions, &mut masses, &mut forces, 1, 0.0, 0.0, 10.0);

        // Massless bystander at a different position: no pair forms.
        let bystander = Entity::new(2);
        positions.insert(bystander, Position::new(50.0, 0.0));
        forces.insert(bystander, Force::zero());

        let pairs = Gravity::new(6.67e-5).accumulate(&positions, &masses, &mut forces);
        assert_eq!(pairs, 0);
        assert!(forces.get(bystander).unwrap().0.is_zero());
    }

    #[test]
    fn test_three_bodies_visit_each_pair_once() {
        let mut positions = ComponentMap::new();
        let mut masses = ComponentMap::new();
        let mut forces = ComponentMap::new();
        for (id, x) in [(1, 0.0), (2, 100.0), (3, 200.0)] {
            body(&mut positions, &mut masses, &mut forces, id, x, 0.0, 50.0);
        }

        let pairs = Gravity::new(6.67e-5).accumulate(&positions, &masses, &mut forces);
        assert_eq!(pairs, 3);

        // Total momentum change must cancel across the system.
        let sum: f64 = forces.values().map(|f| f.0.x).sum();
        assert!(sum.abs() < 1e-15);
    }
}
