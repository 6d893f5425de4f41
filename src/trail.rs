//! Bounded, time-decayed position history for rendering motion trails.
//!
//! A trail holds `(position, timestamp)` samples oldest-first. After each
//! append it is trimmed from the oldest end, walking newest-to-oldest and
//! accumulating sample age and segment arc length until either limit is
//! exceeded.

use crate::constants::TRAIL_ARC_LENGTH_CAP;
use crate::world::World;
use nalgebra::Vector2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub position: Vector2<f64>,
    pub time: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Trail {
    samples: Vec<TrailSample>,
}

impl Trail {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample at `now` and trim. Timestamps are expected to be
    /// non-decreasing across calls; the trim keeps that ordering intact.
    pub fn record(&mut self, position: Vector2<f64>, now: f64, max_age: f64) {
        self.samples.push(TrailSample { position, time: now });

        // Walk newest-to-oldest, keeping samples while both the age and
        // the accumulated arc length stay within bounds.
        let mut kept = Vec::with_capacity(self.samples.len());
        let mut total_length = 0.0;
        let mut last = position;
        for sample in self.samples.iter().rev() {
            let age = now - sample.time;
            total_length += (last - sample.position).norm();
            if age <= max_age && total_length <= TRAIL_ARC_LENGTH_CAP {
                kept.push(*sample);
                last = sample.position;
            } else {
                break;
            }
        }
        kept.reverse();
        self.samples = kept;
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Samples oldest-first.
    pub fn samples(&self) -> &[TrailSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Record one trail sample per body at the world's current clock, or wipe
/// all trails when the toggle is off. Disabling discards history rather
/// than pausing it.
pub fn record_samples(world: &mut World) {
    let now = world.elapsed_time;
    let max_age = world.trail_length * world.speed_multiplier();
    let enabled = world.trail_enabled;
    for body in world.bodies_mut() {
        if enabled {
            let position = body.position;
            body.trail.record(position, now, max_age);
        } else {
            body.trail.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_older_than_max_age_are_dropped() {
        let mut trail = Trail::new();
        for t in 1..=10 {
            trail.record(Vector2::new(t as f64, 0.0), t as f64, 5.0);
        }

        // At t = 10 with max_age = 5 only samples from t = 5 onward survive.
        assert_eq!(trail.len(), 6);
        for sample in trail.samples() {
            assert!(10.0 - sample.time <= 5.0);
        }
    }

    #[test]
    fn samples_stay_oldest_first() {
        let mut trail = Trail::new();
        for t in 0..20 {
            trail.record(Vector2::new(t as f64, t as f64), t as f64, 8.0);
        }
        let times: Vec<f64> = trail.samples().iter().map(|s| s.time).collect();
        let mut sorted = times.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(times, sorted);
    }

    #[test]
    fn newest_sample_is_always_kept() {
        let mut trail = Trail::new();
        trail.record(Vector2::new(0.0, 0.0), 0.0, 5.0);
        trail.record(Vector2::new(1.0, 0.0), 100.0, 5.0);
        assert_eq!(trail.len(), 1);
        assert_eq!(trail.samples()[0].time, 100.0);
    }

    #[test]
    fn zero_max_age_keeps_only_the_current_sample() {
        let mut trail = Trail::new();
        for t in 0..5 {
            trail.record(Vector2::new(t as f64, 0.0), t as f64, 0.0);
        }
        assert_eq!(trail.len(), 1);
    }
}
