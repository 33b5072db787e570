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
//! Multi-component intersection queries
//!
//! A query is an inner join across component maps: it yields one row per
//! entity present in *every* listed map, pairing the entity with a reference
//! to each of its components. Entities lacking any listed component are
//! skipped silently; missing data is a filter, not an error.
//!
//! The first map drives the iteration and the rest are probed per entity,
//! short-circuiting on the first miss. The choice of driving map affects
//! only performance, never the result set, so pass the smallest map first
//! when it matters.
//!
//! Each requested component type is a typed map handle, checked at compile
//! time; there is no runtime type registry to miss. Systems that need
//! mutable access take the maps they write as `&mut` (the world's maps are
//! separate fields, so disjoint borrows come for free) and run their own
//! probe loop in the same shape as these joins.

use crate::ecs::{Component, ComponentMap, Entity};

/// Join one map: every `(entity, component)` pair it holds
///
/// Present for symmetry with the wider joins; a single-type query is just
/// the map's own key set.
pub fn join1<A: Component>(a: &ComponentMap<A>) -> impl Iterator<Item = (Entity, &A)> {
    a.iter()
}

/// Join two maps: entities present in both
///
/// # Examples
///
/// ```
/// use ecs_physics::ecs::components::{ComponentBag, Position, Velocity};
/// use ecs_physics::ecs::{query, World};
///
/// let mut world = World::new();
/// let moving = world.spawn(ComponentBag {
///     position: Some(Position::zero()),
///     velocity: Some(Velocity::new(1.0, 0.0)),
///     ..ComponentBag::default()
/// });
/// world.spawn(ComponentBag {
///     position: Some(Position::zero()),
///     ..ComponentBag::default()
/// });
///
/// let rows: Vec<_> = query::join2(&world.positions, &world.velocities).collect();
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].0, moving);
/// ```
pub fn join2<'w, A: Component, B: Component>(
    a: &'w ComponentMap<A>,
    b: &'w ComponentMap<B>,
) -> impl Iterator<Item = (Entity, &'w A, &'w B)> {
    a.iter()
        .filter_map(move |(entity, av)| Some((entity, av, b.get(entity)?)))
}

/// Join three maps: entities present in all three
pub fn join3<'w, A: Component, B: Component, C: Component>(
    a: &'w ComponentMap<A>,
    b: &'w ComponentMap<B>,
    c: &'w ComponentMap<C>,
) -> impl Iterator<Item = (Entity, &'w A, &'w B, &'w C)> {
    a.iter()
        .filter_map(move |(entity, av)| Some((entity, av, b.get(entity)?, c.get(entity)?)))
}

/// Join four maps: entities present in all four
pub fn join4<'w, A: Component, B: Component, C: Component, D: Component>(
    a: &'w ComponentMap<A>,
    b: &'w ComponentMap<B>,
    c: &'w ComponentMap<C>,
    d: &'w ComponentMap<D>,
) -> impl Iterator<Item = (Entity, &'w A, &'w B, &'w C, &'w D)> {
    a.iter().filter_map(move |(entity, av)| {
        Some((entity, av, b.get(entity)?, c.get(entity)?, d.get(entity)?))
    })
}
