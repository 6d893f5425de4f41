//! Owning container for all simulated bodies plus the global simulation
//! state: the clock, pause flag, speed multiplier, display toggles, and the
//! tunable physical parameters.

use crate::body::{Body, BodyId, BodySpec};
use crate::constants::{
    COEFFICIENT_OF_RESTITUTION, G, MASS_MAX, MASS_MIN, RADIUS_MAX, RADIUS_MIN,
    TRAIL_DEFAULT_LENGTH,
};
use crate::error::SimError;
use crate::trail::Trail;
use nalgebra::Vector2;

/// Tunable physical parameters, fixed for the lifetime of a world unless a
/// caller overrides them up front.
#[derive(Debug, Clone, Copy)]
pub struct SimParams {
    /// Gravitational constant.
    pub g: f64,
    /// Coefficient of restitution in [0, 1] for body-body collisions.
    pub cor: f64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            g: G,
            cor: COEFFICIENT_OF_RESTITUTION,
        }
    }
}

/// How the sampled field is presented by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    Vector,
    Heatmap,
}

#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    next_id: u64,
    /// Simulated seconds elapsed, advanced by the integrator.
    pub elapsed_time: f64,
    pub paused: bool,
    speed_multiplier: f64,
    pub trail_enabled: bool,
    pub vectors_enabled: bool,
    pub field_mode: FieldMode,
    /// Trail length setting in seconds. The effective age limit also scales
    /// with the speed multiplier.
    pub trail_length: f64,
    pub params: SimParams,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    pub fn new() -> Self {
        Self::with_params(SimParams::default())
    }

    pub fn with_params(params: SimParams) -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
            elapsed_time: 0.0,
            paused: false,
            speed_multiplier: 1.0,
            trail_enabled: true,
            vectors_enabled: true,
            field_mode: FieldMode::Vector,
            trail_length: TRAIL_DEFAULT_LENGTH,
            params,
        }
    }

    /// Validate a spec and append a new body, returning its id. Mass and
    /// radius are clamped to their bounds; any non-finite scalar is
    /// rejected.
    pub fn create_body(&mut self, spec: BodySpec) -> Result<BodyId, SimError> {
        let checked = [
            ("mass", spec.mass),
            ("radius", spec.radius),
            ("position.x", spec.position[0]),
            ("position.y", spec.position[1]),
            ("velocity.x", spec.velocity[0]),
            ("velocity.y", spec.velocity[1]),
        ];
        for (field, value) in checked {
            if !value.is_finite() {
                return Err(SimError::Validation { field, value });
            }
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            name: spec.name,
            position: Vector2::new(spec.position[0], spec.position[1]),
            velocity: Vector2::new(spec.velocity[0], spec.velocity[1]),
            mass: spec.mass.clamp(MASS_MIN, MASS_MAX),
            radius: spec.radius.clamp(RADIUS_MIN, RADIUS_MAX),
            trail: Trail::new(),
        });
        Ok(id)
    }

    /// Remove a body. Returns false when the id is unknown. Ids are not
    /// recycled afterwards.
    pub fn delete_body(&mut self, id: BodyId) -> bool {
        let before = self.bodies.len();
        self.bodies.retain(|b| b.id != id);
        self.bodies.len() != before
    }

    pub fn get_body(&self, id: BodyId) -> Result<&Body, SimError> {
        self.bodies
            .iter()
            .find(|b| b.id == id)
            .ok_or(SimError::NotFound(id))
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Result<&mut Body, SimError> {
        self.bodies
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(SimError::NotFound(id))
    }

    /// Bodies in creation order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Clear all bodies and rewind the clock. Toggles, parameters, and the
    /// id counter are kept; a session never reuses an id.
    pub fn reset(&mut self) {
        self.bodies.clear();
        self.elapsed_time = 0.0;
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Non-positive or non-finite input falls back to 1.0 instead of
    /// failing, matching how the interactive layer treats bad input.
    pub fn set_speed_multiplier(&mut self, multiplier: f64) {
        self.speed_multiplier = if multiplier.is_finite() && multiplier > 0.0 {
            multiplier
        } else {
            1.0
        };
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Frame delta scaled by the speed multiplier, zero while paused.
    pub fn effective_dt(&self, frame_dt: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            frame_dt * self.speed_multiplier
        }
    }

    pub fn set_trail_enabled(&mut self, enabled: bool) {
        self.trail_enabled = enabled;
    }

    pub fn set_trail_length(&mut self, seconds: f64) {
        self.trail_length = if seconds.is_finite() && seconds >= 0.0 {
            seconds
        } else {
            TRAIL_DEFAULT_LENGTH
        };
    }

    pub fn set_vectors_enabled(&mut self, enabled: bool) {
        self.vectors_enabled = enabled;
    }

    pub fn set_field_mode(&mut self, mode: FieldMode) {
        self.field_mode = mode;
    }
}
