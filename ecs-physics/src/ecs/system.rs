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
//! System execution framework
//!
//! Systems hold the logic that reads and mutates component data. Execution
//! is strictly single-threaded and synchronous: a schedule runs its systems
//! in registration order, each to completion, once per frame. The fixed
//! total order between systems is the frame's only ordering guarantee;
//! within one system, iteration order over a map carries no meaning.

use crate::ecs::World;

/// A procedure run once per frame over the world
///
/// Systems carry no cross-frame state beyond their configuration; all
/// simulation state lives in the world's component maps.
pub trait System {
    /// Execute the system. `delta` is the elapsed time since the last frame,
    /// in the scenario's time unit.
    fn run(&mut self, world: &mut World, delta: f64);

    /// Name for debug logging
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Ordered, sequential system executor
///
/// Registration order is execution order; the schedule re-runs the same
/// fixed sequence every frame. External collaborators (a renderer reading
/// positions, scenario glue) append their systems after the physics step.
///
/// # Examples
///
/// ```
/// use ecs_physics::ecs::{Schedule, System, World};
///
/// struct Noop;
/// impl System for Noop {
///     fn run(&mut self, _world: &mut World, _delta: f64) {}
/// }
///
/// let mut schedule = Schedule::new();
/// schedule.add_system(Noop);
///
/// let mut world = World::new();
/// schedule.run(&mut world, 16.0);
/// ```
pub struct Schedule {
    systems: Vec<Box<dyn System>>,
}

impl Schedule {
    /// Create an empty schedule
    pub fn new() -> Self {
        Schedule {
            systems: Vec::new(),
        }
    }

    /// Append a system; it will run after everything added before it
    pub fn add_system<S: System + 'static>(&mut self, system: S) {
        self.systems.push(Box::new(system));
    }

    /// Run every system once, in registration order
    pub fn run(&mut self, world: &mut World, delta: f64) {
        for system in &mut self.systems {
            log::trace!("running system {}", system.name());
            system.run(world, delta);
        }
    }

    /// Number of registered systems
    pub fn system_count(&self) -> usize {
        self.systems.len()
    }

    /// Remove all systems
    pub fn clear(&mut self) {
        self.systems.clear();
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        label: &'static str,
        trace: Rc<RefCell<Vec<&'static str>>>,
    }

    impl System for Recorder {
        fn run(&mut self, _world: &mut World, _delta: f64) {
            self.trace.borrow_mut().push(self.label);
        }

        fn name(&self) -> &str {
            self.label
        }
    }

    #[test]
    fn test_empty_schedule_is_noop() {
        let mut schedule = Schedule::new();
        let mut world = World::new();
        schedule.run(&mut world, 1.0);
        assert_eq!(schedule.system_count(), 0);
    }

    #[test]
    fn test_registration_order_is_execution_order() {
        let trace = Rc::new(RefCell::new(Vec::new()));
        let mut schedule = Schedule::new();
        for label in ["first", "second", "third"] {
            schedule.add_system(Recorder {
                label,
                trace: Rc::clone(&trace),
            });
        }

        let mut world = World::new();
        schedule.run(&mut world, 1.0);
        schedule.run(&mut world, 1.0);

        assert_eq!(
            *trace.borrow(),
            vec!["first", "second", "third", "first", "second", "third"]
        );
    }

    #[test]
    fn test_clear() {
        let mut schedule = Schedule::new();
        schedule.add_system(Recorder {
            label: "x",
            trace: Rc::new(RefCell::new(Vec::new())),
        });
        assert_eq!(schedule.system_count(), 1);

        schedule.clear();
        assert_eq!(schedule.system_count(), 0);
    }
}
