//! Gravitational-acceleration field sampling over a rectangular lattice,
//! used by the rendering layer for the vector and heatmap overlays.

use crate::world::World;
use nalgebra::Vector2;

/// Axis-aligned sampling region in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min: Vector2<f64>,
    pub max: Vector2<f64>,
}

impl Region {
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        Self {
            min: Vector2::new(min[0], min[1]),
            max: Vector2::new(max[0], max[1]),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Row-major lattice of sample positions and the net acceleration at each.
/// The two vectors are parallel, `rows * cols` entries each.
#[derive(Debug, Clone)]
pub struct FieldGrid {
    pub rows: usize,
    pub cols: usize,
    pub positions: Vec<Vector2<f64>>,
    pub vectors: Vec<Vector2<f64>>,
}

impl FieldGrid {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn magnitude(&self, index: usize) -> f64 {
        self.vectors[index].norm()
    }
}

/// Sample the net gravitational acceleration on a lattice covering
/// `region` at `spacing` metres between points.
///
/// Each body contributes `G * mass / d²` with the sample-to-body distance
/// floored at that body's radius, so samples at or inside a body stay
/// finite. A sample exactly on a body's centre receives no contribution
/// from it. Pure read of the world; callable at any rate, paused or not.
pub fn sample_field(world: &World, region: Region, spacing: f64) -> FieldGrid {
    let mut grid = FieldGrid {
        rows: 0,
        cols: 0,
        positions: Vec::new(),
        vectors: Vec::new(),
    };
    let finite = region.min.x.is_finite()
        && region.min.y.is_finite()
        && region.max.x.is_finite()
        && region.max.y.is_finite();
    if !finite
        || !(spacing.is_finite() && spacing > 0.0)
        || region.width() < 0.0
        || region.height() < 0.0
    {
        return grid;
    }

    let cols = (region.width() / spacing).floor() as usize + 1;
    let rows = (region.height() / spacing).floor() as usize + 1;
    let g = world.params.g;
    grid.rows = rows;
    grid.cols = cols;
    grid.positions.reserve(rows * cols);
    grid.vectors.reserve(rows * cols);

    for row in 0..rows {
        for col in 0..cols {
            let point = Vector2::new(
                region.min.x + col as f64 * spacing,
                region.min.y + row as f64 * spacing,
            );

            let mut net = Vector2::zeros();
            for body in world.bodies() {
                let d = point - body.position;
                let dist = d.norm();
                let floored = dist.max(body.radius);
                if floored == 0.0 {
                    continue;
                }
                let accel = g * body.mass / (floored * floored);
                // The direction shares the floored denominator, so the
                // field tapers smoothly inside a body instead of jumping.
                net -= accel * (d / floored);
            }
            grid.positions.push(point);
            grid.vectors.push(net);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodySpec;
    use crate::world::World;

    fn world_with(specs: &[BodySpec]) -> World {
        let mut world = World::new();
        for spec in specs {
            world.create_body(spec.clone()).unwrap();
        }
        world
    }

    #[test]
    fn empty_world_yields_zero_vectors_without_nan() {
        let world = World::new();
        let grid = sample_field(&world, Region::new([0.0, 0.0], [40.0, 20.0]), 20.0);

        assert_eq!(grid.rows, 2);
        assert_eq!(grid.cols, 3);
        assert_eq!(grid.len(), 6);
        for i in 0..grid.len() {
            assert_eq!(grid.vectors[i], Vector2::zeros());
            assert_eq!(grid.magnitude(i), 0.0);
        }
    }

    #[test]
    fn sample_points_toward_a_single_body() {
        let world = world_with(&[BodySpec::new(1e20, 1.0, [100.0, 0.0], [0.0, 0.0])]);
        let grid = sample_field(&world, Region::new([0.0, 0.0], [0.0, 0.0]), 10.0);

        assert_eq!(grid.len(), 1);
        let v = grid.vectors[0];
        // The field at the origin pulls in +x toward the body.
        assert!(v.x > 0.0);
        assert_eq!(v.y, 0.0);
        let expected = world.params.g * 1e20 / (100.0 * 100.0);
        assert!((v.norm() - expected).abs() < expected * 1e-12);
    }

    #[test]
    fn magnitude_is_floored_at_the_body_radius() {
        let world = world_with(&[BodySpec::new(1e20, 50.0, [0.0, 0.0], [0.0, 0.0])]);
        // 10 m from the centre, well inside the 50 m radius.
        let grid = sample_field(&world, Region::new([10.0, 0.0], [10.0, 0.0]), 1.0);

        let cap = world.params.g * 1e20 / (50.0 * 50.0);
        assert!(grid.magnitude(0) <= cap);
        assert!(grid.vectors[0].x.is_finite());
    }

    #[test]
    fn sample_on_a_body_centre_is_finite() {
        let world = world_with(&[BodySpec::new(1e20, 5.0, [0.0, 0.0], [0.0, 0.0])]);
        let grid = sample_field(&world, Region::new([0.0, 0.0], [0.0, 0.0]), 1.0);

        assert_eq!(grid.vectors[0], Vector2::zeros());
    }

    #[test]
    fn symmetric_bodies_cancel_at_the_midpoint() {
        let world = world_with(&[
            BodySpec::new(1e20, 1.0, [-100.0, 0.0], [0.0, 0.0]),
            BodySpec::new(1e20, 1.0, [100.0, 0.0], [0.0, 0.0]),
        ]);
        let grid = sample_field(&world, Region::new([0.0, 0.0], [0.0, 0.0]), 1.0);

        assert!(grid.magnitude(0) < 1e-30);
    }

    #[test]
    fn degenerate_spacing_produces_an_empty_grid() {
        let world = World::new();
        assert!(sample_field(&world, Region::new([0.0, 0.0], [10.0, 10.0]), 0.0).is_empty());
        assert!(
            sample_field(&world, Region::new([0.0, 0.0], [10.0, 10.0]), f64::NAN).is_empty()
        );
    }
}
