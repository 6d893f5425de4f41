use crate::diagnostics;
use crate::world::World;
use chrono::Utc;
use serde::Serialize;
use std::error::Error;
use std::path::Path;

/// One body's state at one recorded step.
#[derive(Serialize)]
struct SnapshotRow {
    step: usize,
    time: f64,
    body_id: u64,
    name: String,
    mass: f64,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

/// Summary line appended to the shared runs file after a headless run.
#[derive(Serialize)]
pub struct RunSummary {
    pub date: String,
    pub bodies: usize,
    pub steps: usize,
    pub step_size: f64,
    pub simulated_seconds: f64,
    pub initial_energy: f64,
    pub final_energy: f64,
    pub max_velocity: f64,
    pub max_acceleration: f64,
    pub notes: String,
}

impl RunSummary {
    pub fn stamped() -> Self {
        Self {
            date: Utc::now().to_rfc3339(),
            bodies: 0,
            steps: 0,
            step_size: 0.0,
            simulated_seconds: 0.0,
            initial_energy: 0.0,
            final_energy: 0.0,
            max_velocity: 0.0,
            max_acceleration: 0.0,
            notes: String::new(),
        }
    }
}

/// Collects body snapshots over a run for offline plotting.
#[derive(Default)]
pub struct Recorder {
    rows: Vec<SnapshotRow>,
    energy: Vec<f64>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: usize, world: &World) {
        for body in world.bodies() {
            self.rows.push(SnapshotRow {
                step,
                time: world.elapsed_time,
                body_id: body.id.0,
                name: body.name.clone().unwrap_or_default(),
                mass: body.mass,
                x: body.position.x,
                y: body.position.y,
                vx: body.velocity.x,
                vy: body.velocity.y,
            });
        }
        self.energy.push(diagnostics::total_energy(world));
    }

    pub fn recorded_steps(&self) -> usize {
        self.energy.len()
    }

    pub fn energy_history(&self) -> &[f64] {
        &self.energy
    }

    pub fn save_to_csv(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let mut wtr = csv::Writer::from_path(path)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

/// Append a run summary, writing the header only when the file is new.
pub fn append_summary(path: impl AsRef<Path>, summary: &RunSummary) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let file_exists = path.exists();
    let file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);
    wtr.serialize(summary)?;
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodySpec;

    #[test]
    fn recorder_keeps_one_row_per_body_per_step() {
        let mut world = World::new();
        world
            .create_body(BodySpec::new(10.0, 1.0, [0.0, 0.0], [0.0, 0.0]))
            .unwrap();
        world
            .create_body(BodySpec::new(10.0, 1.0, [20.0, 0.0], [0.0, 0.0]))
            .unwrap();

        let mut recorder = Recorder::new();
        recorder.record(0, &world);
        recorder.record(1, &world);

        assert_eq!(recorder.recorded_steps(), 2);
        assert_eq!(recorder.rows.len(), 4);
        assert_eq!(recorder.energy_history().len(), 2);
    }
}
