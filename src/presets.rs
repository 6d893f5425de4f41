// src/presets.rs

use crate::body::BodySpec;
use crate::field::Region;
use crate::world::World;
use rand::Rng;
use rand_distr::Uniform;

/// Named bodies with real masses and radii, offered by the add-object UI.
const PRESETS: [(&str, f64, f64); 3] = [
    ("Earth", 5.972e24, 6.371e6),
    ("Moon", 7.342e22, 1.737e6),
    ("Sun", 1.989e30, 6.9634e8),
];

pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _, _)| *name).collect()
}

/// Look up a preset body at rest at the origin.
pub fn preset(name: &str) -> Option<BodySpec> {
    PRESETS
        .iter()
        .find(|(n, _, _)| *n == name)
        .map(|&(n, mass, radius)| BodySpec::new(mass, radius, [0.0, 0.0], [0.0, 0.0]).named(n))
}

/// Fallback values used when the add-object inputs are left blank.
pub fn default_spec() -> BodySpec {
    BodySpec::new(5.972e24, 6.371e6, [0.0, 0.0], [10.0, 10.0]).named("Earth")
}

/// A body with random properties somewhere in `region`: mass uniform in
/// [10, 1000] kg, radius proportional to mass, at rest.
pub fn random_spec(region: Region) -> BodySpec {
    let mut rng = rand::rng();
    let x_range = Uniform::new_inclusive(region.min.x, region.max.x).unwrap();
    let y_range = Uniform::new_inclusive(region.min.y, region.max.y).unwrap();

    let mass = rng.random_range(10.0..=1000.0);
    BodySpec::new(
        mass,
        mass / 50.0,
        [rng.sample(&x_range), rng.sample(&y_range)],
        [0.0, 0.0],
    )
}

/// Parse a list of body specs from JSON, for callers that assemble a scene
/// from a file or a text panel.
pub fn specs_from_json(json: &str) -> Result<Vec<BodySpec>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Earth with the Moon on a circular orbit, a stable two-body scene for
/// the headless driver and examples.
pub fn demo_world() -> World {
    let mut world = World::new();
    let earth = preset("Earth").expect("Earth preset exists");
    let moon_distance = 3.844e8;
    let orbital_speed = (world.params.g * earth.mass / moon_distance).sqrt();

    world.create_body(earth).expect("preset values are finite");
    let mut moon = preset("Moon").expect("Moon preset exists");
    moon.position = [moon_distance, 0.0];
    moon.velocity = [0.0, orbital_speed];
    world.create_body(moon).expect("preset values are finite");
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_by_name() {
        let earth = preset("Earth").unwrap();
        assert_eq!(earth.mass, 5.972e24);
        assert_eq!(earth.name.as_deref(), Some("Earth"));
        assert!(preset("Pluto").is_none());
        assert_eq!(preset_names(), vec!["Earth", "Moon", "Sun"]);
    }

    #[test]
    fn random_spec_stays_in_bounds() {
        let region = Region::new([-50.0, -20.0], [50.0, 20.0]);
        for _ in 0..100 {
            let spec = random_spec(region);
            assert!((10.0..=1000.0).contains(&spec.mass));
            assert_eq!(spec.radius, spec.mass / 50.0);
            assert!((-50.0..=50.0).contains(&spec.position[0]));
            assert!((-20.0..=20.0).contains(&spec.position[1]));
            assert_eq!(spec.velocity, [0.0, 0.0]);
        }
    }

    #[test]
    fn demo_world_has_a_bound_pair() {
        let world = demo_world();
        assert_eq!(world.len(), 2);
        let moon = &world.bodies()[1];
        assert!(moon.velocity.y > 0.0);
        assert!(moon.velocity.y < 2000.0);
    }

    #[test]
    fn specs_parse_from_json() {
        let json = r#"[
            {"name": "probe", "mass": 12.0, "radius": 2.0,
             "position": [1.0, 2.0], "velocity": [0.0, -1.0]},
            {"mass": 50.0, "radius": 1.0}
        ]"#;
        let specs = specs_from_json(json).unwrap();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].name.as_deref(), Some("probe"));
        assert_eq!(specs[1].position, [0.0, 0.0]);
    }
}
