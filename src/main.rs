use gravsim::recorder::{append_summary, Recorder, RunSummary};
use gravsim::{diagnostics, integrator, presets, sample_field, Region};
use indicatif::{ProgressBar, ProgressStyle};
use std::error::Error;

const DT: f64 = 60.0;
const NUM_STEPS: usize = 50_000;
const RECORD_INTERVAL: usize = 100;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut world = presets::demo_world();
    log::info!(
        "starting run: {} bodies, dt {} s, {} steps",
        world.len(),
        DT,
        NUM_STEPS
    );

    let pb = ProgressBar::new(NUM_STEPS as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("#>-"),
    );

    let initial_energy = diagnostics::total_energy(&world);
    let mut recorder = Recorder::new();
    let mut max_velocity: f64 = 0.0;
    let mut max_acceleration: f64 = 0.0;

    for step in 0..NUM_STEPS {
        let diag = integrator::step(&mut world, DT);
        max_velocity = max_velocity.max(diag.max_velocity);
        max_acceleration = max_acceleration.max(diag.max_acceleration);

        if step % RECORD_INTERVAL == 0 {
            recorder.record(step, &world);
            pb.set_position(step as u64);
        }
    }
    pb.finish_with_message("simulation complete");

    // One field sample over the scene bounds, the same read the renderer
    // makes each frame.
    let grid = sample_field(&world, Region::new([-5e8, -5e8], [5e8, 5e8]), 1e8);
    log::info!("sampled {} field points", grid.len());

    let final_energy = diagnostics::total_energy(&world);
    std::fs::create_dir_all("run_data")?;
    recorder.save_to_csv("run_data/positions.csv")?;

    let mut summary = RunSummary::stamped();
    summary.bodies = world.len();
    summary.steps = NUM_STEPS;
    summary.step_size = DT;
    summary.simulated_seconds = world.elapsed_time;
    summary.initial_energy = initial_energy;
    summary.final_energy = final_energy;
    summary.max_velocity = max_velocity;
    summary.max_acceleration = max_acceleration;
    summary.notes = "earth-moon demo".to_string();
    append_summary("run_data/runs.csv", &summary)?;

    println!(
        "simulated {} ({} steps), energy drift {:.3e}",
        diagnostics::format_elapsed(world.elapsed_time),
        NUM_STEPS,
        (final_energy - initial_energy).abs()
    );
    Ok(())
}
