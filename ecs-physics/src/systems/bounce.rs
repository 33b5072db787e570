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
//! Boundary collision response
//!
//! Clamps entities into the world rectangle `[0, width] × [0, height]` and
//! scales the offending velocity component by the restitution coefficient.
//! The axes are independent; a corner hit triggers both in one step.

use crate::ecs::components::{Position, Velocity};
use crate::ecs::ComponentMap;

/// World-boundary bounce with configurable restitution
///
/// The restitution coefficient is the multiplier applied to the velocity
/// component that crossed a bound. It is expected to lie in `[-1, 0]`:
/// `-1.0` is a fully elastic reflection, `-0.2` a strongly damped one, and
/// `0.0` kills the component outright.
#[derive(Debug, Clone, Copy)]
pub struct Bounce {
    width: f64,
    height: f64,
    restitution: f64,
}

impl Bounce {
    /// Create a bounce system for the given world rectangle
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not positive and finite, or if the
    /// restitution lies outside `[-1, 0]`.
    pub fn new(width: f64, height: f64, restitution: f64) -> Self {
        assert!(
            width > 0.0 && width.is_finite() && height > 0.0 && height.is_finite(),
            "World bounds must be positive and finite"
        );
        assert!(
            (-1.0..=0.0).contains(&restitution),
            "Restitution must lie in [-1, 0]"
        );
        Bounce {
            width,
            height,
            restitution,
        }
    }

    /// World width
    pub fn width(&self) -> f64 {
        self.width
    }

    /// World height
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Configured restitution coefficient
    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    /// Clamp and reflect every entity with {Position, Velocity}
    ///
    /// Returns the number of entities that hit a bound this step.
    pub fn apply(
        &self,
        positions: &mut ComponentMap<Position>,
        velocities: &mut ComponentMap<Velocity>,
    ) -> usize {
        let mut bounced = 0;

        for (entity, velocity) in velocities.iter_mut() {
            let position = match positions.get_mut(entity) {
                Some(p) => p,
                None => continue,
            };

            let mut hit = false;
            if position.0.x > self.width {
                position.0.x = self.width;
                velocity.0.x *= self.restitution;
                hit = true;
            } else if position.0.x < 0.0 {
                position.0.x = 0.0;
                velocity.0.x *= self.restitution;
                hit = true;
            }

            if position.0.y > self.height {
                position.0.y = self.height;
                velocity.0.y *= self.restitution;
                hit = true;
            } else if position.0.y < 0.0 {
                position.0.y = 0.0;
                velocity.0.y *= self.restitution;
                hit = true;
            }

            if hit {
                bounced += 1;
            }
        }

        bounced
    }
}
