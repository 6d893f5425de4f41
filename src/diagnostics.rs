use crate::world::World;
use itertools::Itertools;
use nalgebra::Vector2;

pub fn kinetic_energy(world: &World) -> f64 {
    world.bodies().iter().map(|b| b.kinetic_energy()).sum()
}

/// Pairwise gravitational potential energy, each pair counted once.
/// Coincident pairs contribute nothing, matching the force law.
pub fn potential_energy(world: &World) -> f64 {
    let g = world.params.g;
    world
        .bodies()
        .iter()
        .tuple_combinations()
        .map(|(a, b)| {
            let r = (a.position - b.position).norm();
            if r > 0.0 {
                -g * a.mass * b.mass / r
            } else {
                0.0
            }
        })
        .sum()
}

pub fn total_energy(world: &World) -> f64 {
    kinetic_energy(world) + potential_energy(world)
}

pub fn net_momentum(world: &World) -> Vector2<f64> {
    world
        .bodies()
        .iter()
        .map(|b| b.momentum())
        .fold(Vector2::zeros(), |acc, p| acc + p)
}

/// Render simulated seconds as a compact unit breakdown for the status
/// line, `"1 hr 1 min 1 s"` style. Sub-second values come out as `"0 s"`.
pub fn format_elapsed(seconds: f64) -> String {
    const INTERVALS: [(&str, u64); 6] = [
        ("yr", 60 * 60 * 24 * 7 * 52),
        ("wk", 60 * 60 * 24 * 7),
        ("d", 60 * 60 * 24),
        ("hr", 60 * 60),
        ("min", 60),
        ("s", 1),
    ];

    let mut remaining = seconds.max(0.0) as u64;
    let mut parts = Vec::new();
    for (name, count) in INTERVALS {
        let value = remaining / count;
        if value > 0 {
            parts.push(format!("{value} {name}"));
            remaining %= count;
        }
    }

    if parts.is_empty() {
        "0 s".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodySpec;

    #[test]
    fn two_body_energy_terms() {
        let mut world = World::new();
        world
            .create_body(BodySpec::new(2.0, 1.0, [0.0, 0.0], [3.0, 0.0]))
            .unwrap();
        world
            .create_body(BodySpec::new(4.0, 1.0, [10.0, 0.0], [0.0, 0.0]))
            .unwrap();

        assert_eq!(kinetic_energy(&world), 9.0);
        let expected_pe = -world.params.g * 2.0 * 4.0 / 10.0;
        assert!((potential_energy(&world) - expected_pe).abs() < 1e-25);
        assert_eq!(total_energy(&world), kinetic_energy(&world) + potential_energy(&world));
    }

    #[test]
    fn coincident_pair_has_zero_potential() {
        let mut world = World::new();
        world
            .create_body(BodySpec::new(2.0, 1.0, [1.0, 1.0], [0.0, 0.0]))
            .unwrap();
        world
            .create_body(BodySpec::new(4.0, 1.0, [1.0, 1.0], [0.0, 0.0]))
            .unwrap();
        assert_eq!(potential_energy(&world), 0.0);
    }

    #[test]
    fn net_momentum_sums_bodies() {
        let mut world = World::new();
        world
            .create_body(BodySpec::new(2.0, 1.0, [0.0, 0.0], [1.0, 0.0]))
            .unwrap();
        world
            .create_body(BodySpec::new(3.0, 1.0, [5.0, 0.0], [0.0, -1.0]))
            .unwrap();
        assert_eq!(net_momentum(&world), Vector2::new(2.0, -3.0));
    }

    #[test]
    fn elapsed_time_formatting() {
        assert_eq!(format_elapsed(0.0), "0 s");
        assert_eq!(format_elapsed(0.4), "0 s");
        assert_eq!(format_elapsed(59.0), "59 s");
        assert_eq!(format_elapsed(3661.0), "1 hr 1 min 1 s");
        assert_eq!(format_elapsed(60.0 * 60.0 * 24.0 * 8.0), "1 wk 1 d");
    }
}
