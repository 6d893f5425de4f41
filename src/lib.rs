pub mod body;
pub mod constants;
pub mod diagnostics;
pub mod error;
pub mod field;
pub mod integrator;
pub mod presets;
pub mod recorder;
pub mod trail;
pub mod world;

pub use body::{Body, BodyId, BodySpec};
pub use error::SimError;
pub use field::{sample_field, FieldGrid, Region};
pub use integrator::{accelerations, step, StepDiagnostics};
pub use trail::{Trail, TrailSample};
pub use world::{FieldMode, SimParams, World};
