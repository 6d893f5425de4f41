//! Fixed-step integration of the world: pairwise gravity, a velocity pass,
//! a position pass, then impulse-based collision resolution.
//!
//! The velocity pass completes for every body before any position moves,
//! so a step is deterministic for a given ordered body list and dt.

use crate::trail;
use crate::world::World;
use itertools::izip;
use log::warn;
use nalgebra::Vector2;
use ordered_float::OrderedFloat;

/// Per-step instrumentation for the status display. Carries no simulation
/// semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct StepDiagnostics {
    pub max_acceleration: f64,
    pub max_velocity: f64,
}

/// Gravitational acceleration on each body from every other body.
///
/// The magnitude denominator uses the separation clipped to the sum of the
/// two radii, which bounds the acceleration for overlapping or near
/// pairs. The direction uses the unclipped separation; an exactly
/// coincident pair has no direction and contributes nothing.
pub fn accelerations(world: &World) -> Vec<Vector2<f64>> {
    let bodies = world.bodies();
    let n = bodies.len();
    let g = world.params.g;
    let mut accels = vec![Vector2::zeros(); n];

    for i in 0..n {
        for (j, other) in bodies.iter().enumerate() {
            if i == j {
                continue;
            }
            let r = other.position - bodies[i].position;
            let dist = r.norm();
            if dist == 0.0 {
                continue;
            }
            let clipped = dist.max(bodies[i].radius + other.radius);
            let strength = g * other.mass / (clipped * clipped);
            accels[i] += strength * (r / dist);
        }
    }
    accels
}

/// Advance the world by one step of `dt` simulated seconds. `dt` is the
/// frame delta already scaled by the speed multiplier.
///
/// A zero `dt` leaves velocities and positions alone but still runs the
/// collision pass, since bodies may overlap after external edits. The
/// clock advances by `dt` regardless of body count.
pub fn step(world: &mut World, dt: f64) -> StepDiagnostics {
    let mut diag = StepDiagnostics::default();
    if world.is_empty() {
        world.elapsed_time += dt;
        return diag;
    }

    let accels = accelerations(world);
    diag.max_acceleration = accels
        .iter()
        .map(|a| OrderedFloat(a.norm()))
        .max()
        .map_or(0.0, |m| m.0);

    // Velocity pass for every body, then the position pass. Interleaving
    // them would make later bodies see half-updated state.
    for (body, accel) in izip!(world.bodies_mut(), &accels) {
        body.velocity += accel * dt;
    }
    diag.max_velocity = world
        .bodies()
        .iter()
        .map(|b| OrderedFloat(b.speed()))
        .max()
        .map_or(0.0, |m| m.0);

    for body in world.bodies_mut() {
        body.position += body.velocity * dt;
    }

    resolve_collisions(world);

    world.elapsed_time += dt;
    trail::record_samples(world);
    diag
}

/// Impulse response plus positional correction for every overlapping pair,
/// in a single pass over unordered pairs. Stacked overlaps involving three
/// or more bodies may need several steps to fully separate.
fn resolve_collisions(world: &mut World) {
    let cor = world.params.cor;
    let n = world.len();
    let bodies = world.bodies_mut();

    for i in 0..n {
        for j in (i + 1)..n {
            let (a, b) = pair_mut(bodies, i, j);

            let d = a.position - b.position;
            let dist = d.norm();
            if dist > a.radius + b.radius {
                continue;
            }
            if dist == 0.0 {
                // Exactly coincident centres have no collision normal.
                // Skip the pair for this step; gravity clipping keeps the
                // rest of the simulation finite.
                warn!(
                    "bodies {} and {} are exactly coincident, skipping collision resolution",
                    a.id, b.id
                );
                continue;
            }

            let normal = d / dist;
            let v_rel = (a.velocity - b.velocity).dot(&normal);
            if v_rel > 0.0 {
                // Already separating.
                continue;
            }

            // Pair restitution: the global coefficient damped by the mean
            // of the two bodies' shock absorption.
            let absorption = 0.5 * (a.shock_absorption() + b.shock_absorption());
            let restitution = (cor * (1.0 - absorption)).clamp(0.0, 1.0);

            let impulse = -(1.0 + restitution) * v_rel / (1.0 / a.mass + 1.0 / b.mass);
            a.velocity += impulse * normal / a.mass;
            b.velocity -= impulse * normal / b.mass;

            // Mass-weighted separation: the heavier body moves less, in
            // proportion with the impulse weighting.
            let overlap = (a.radius + b.radius) - dist;
            let combined = a.mass + b.mass;
            a.position += normal * overlap * (b.mass / combined);
            b.position -= normal * overlap * (a.mass / combined);
        }
    }
}

fn pair_mut<T>(slice: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j);
    let (left, right) = slice.split_at_mut(j);
    (&mut left[i], &mut right[0])
}
