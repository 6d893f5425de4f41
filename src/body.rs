// src/body.rs

use crate::constants::{SHOCK_ABSORPTION_CAP, SHOCK_ABSORPTION_PER_KG};
use crate::trail::Trail;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a body. Assigned monotonically by the world and
/// never reused within a session, even after deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: Option<String>,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub mass: f64,
    pub radius: f64,
    pub trail: Trail,
}

impl Body {
    /// Per-body inelasticity factor, proportional to mass and capped so the
    /// pairwise mean stays below 1. Colliding pairs combine theirs by
    /// arithmetic mean.
    pub fn shock_absorption(&self) -> f64 {
        (SHOCK_ABSORPTION_PER_KG * self.mass).min(SHOCK_ABSORPTION_CAP)
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.norm()
    }

    /// Display label, `"3 (Earth)"` when named and `"3"` otherwise.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.id, name),
            None => self.id.to_string(),
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Body(id={}, m={:.2e}, r={:.2e}, p=[{:.2e}, {:.2e}], v=[{:.2e}, {:.2e}])",
            self.id,
            self.mass,
            self.radius,
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y
        )
    }
}

/// Caller-supplied scalars for creating a body. Mass and radius are clamped
/// to the configured bounds on creation; non-finite values are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodySpec {
    #[serde(default)]
    pub name: Option<String>,
    pub mass: f64,
    pub radius: f64,
    #[serde(default)]
    pub position: [f64; 2],
    #[serde(default)]
    pub velocity: [f64; 2],
}

impl BodySpec {
    pub fn new(mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> Self {
        Self {
            name: None,
            mass,
            radius,
            position,
            velocity,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
