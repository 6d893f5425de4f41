//! Physical constants and clamping bounds for the simulation.

/// Gravitational constant in m³/(kg·s²).
pub const G: f64 = 6.6743e-11;

/// Default coefficient of restitution for body-body collisions.
/// 1.0 is perfectly elastic, 0.0 fully plastic.
pub const COEFFICIENT_OF_RESTITUTION: f64 = 0.1;

/// Lower bound for body mass in kg. Inputs below this are clamped up.
pub const MASS_MIN: f64 = 1.0;

/// Upper bound for body mass in kg.
pub const MASS_MAX: f64 = 1e40;

/// Lower bound for body radius in m. Inputs below this are clamped up.
pub const RADIUS_MIN: f64 = 1.0;

/// Upper bound for body radius in m.
pub const RADIUS_MAX: f64 = 1e12;

/// Per-kilogram inelasticity factor. A body's shock absorption is
/// `SHOCK_ABSORPTION_PER_KG * mass`, capped below.
pub const SHOCK_ABSORPTION_PER_KG: f64 = 0.001;

/// Cap on a single body's shock absorption so the pair restitution
/// stays non-negative.
pub const SHOCK_ABSORPTION_CAP: f64 = 0.5;

/// Default trail length in seconds of simulated time.
pub const TRAIL_DEFAULT_LENGTH: f64 = 3.0;

/// Safety cap on a trail's cumulative arc length in metres. Large enough
/// to be unreachable in normal use.
pub const TRAIL_ARC_LENGTH_CAP: f64 = 1e30;
