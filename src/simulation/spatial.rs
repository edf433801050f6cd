//! Displacement and distance under the two world topologies.
//!
//! In a periodic (`Teleport`) world the shortest path between two points may
//! cross an edge, so force direction and magnitude must both come from the
//! per-axis minimal displacement. Scalar distance is always derived from the
//! same displacement vector to keep the two consistent.

use glam::Vec3;

use crate::simulation::boundary::BoundaryMode;

/// Strategy for measuring displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpatialMetric {
    /// Plain `to - from`.
    Euclidean,
    /// Per-axis minimal delta on a torus with the given extents.
    Toroidal { extents: Vec3 },
}

impl SpatialMetric {
    /// The metric matching a boundary mode. Periodic boundaries require
    /// periodic interaction distances; decoupling the two makes particles
    /// near opposite edges ignore each other.
    pub fn for_boundary(mode: BoundaryMode, extents: Vec3) -> Self {
        match mode {
            BoundaryMode::Bounce => Self::Euclidean,
            BoundaryMode::Teleport => Self::Toroidal { extents },
        }
    }

    /// Minimal displacement from `from` to `to`.
    pub fn displacement(&self, from: Vec3, to: Vec3) -> Vec3 {
        match self {
            Self::Euclidean => to - from,
            Self::Toroidal { extents } => Vec3::new(
                wrap_axis(to.x - from.x, extents.x),
                wrap_axis(to.y - from.y, extents.y),
                wrap_axis(to.z - from.z, extents.z),
            ),
        }
    }

    /// Magnitude of the minimal displacement.
    pub fn distance(&self, a: Vec3, b: Vec3) -> f32 {
        self.displacement(a, b).length()
    }
}

/// Shortest signed delta along one axis of a torus.
fn wrap_axis(delta: f32, extent: f32) -> f32 {
    if delta.abs() <= extent * 0.5 {
        delta
    } else {
        delta - extent * delta.signum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENTS: Vec3 = Vec3::new(400.0, 400.0, 400.0);

    #[test]
    fn test_euclidean_is_plain_subtraction() {
        let metric = SpatialMetric::Euclidean;
        let from = Vec3::new(-150.0, 20.0, 0.0);
        let to = Vec3::new(150.0, -30.0, 10.0);
        assert_eq!(metric.displacement(from, to), to - from);
        assert_eq!(metric.distance(from, to), (to - from).length());
    }

    #[test]
    fn test_toroidal_takes_shorter_path_through_edge() {
        let metric = SpatialMetric::Toroidal { extents: EXTENTS };
        let a = Vec3::new(-199.0, 0.0, 0.0);
        let b = Vec3::new(199.0, 0.0, 0.0);
        // raw delta is 398; through the edge it is only 2, pointing -x
        assert_eq!(metric.displacement(a, b), Vec3::new(-2.0, 0.0, 0.0));
        assert_eq!(metric.distance(a, b), 2.0);
    }

    #[test]
    fn test_toroidal_keeps_short_deltas() {
        let metric = SpatialMetric::Toroidal { extents: EXTENTS };
        let a = Vec3::new(10.0, -40.0, 5.0);
        let b = Vec3::new(60.0, 40.0, -15.0);
        assert_eq!(metric.displacement(a, b), b - a);
    }

    #[test]
    fn test_toroidal_distance_is_symmetric() {
        let metric = SpatialMetric::Toroidal { extents: EXTENTS };
        let points = [
            (Vec3::new(-199.0, 180.0, 0.0), Vec3::new(195.0, -170.0, 50.0)),
            (Vec3::new(0.0, 0.0, 0.0), Vec3::new(200.0, 200.0, 200.0)),
            (Vec3::new(-35.0, 12.0, -198.0), Vec3::new(40.0, -9.0, 199.0)),
        ];
        for (a, b) in points {
            assert_eq!(metric.distance(a, b), metric.distance(b, a));
        }
    }

    #[test]
    fn test_toroidal_distance_bounded_by_half_diagonal() {
        let metric = SpatialMetric::Toroidal { extents: EXTENTS };
        let half_diagonal = (EXTENTS * 0.5).length();
        // worst case: every axis is exactly half an extent apart
        let a = Vec3::new(-100.0, -100.0, -100.0);
        let b = Vec3::new(100.0, 100.0, 100.0);
        assert!(metric.distance(a, b) <= half_diagonal);

        let samples = [
            (Vec3::new(-180.0, 150.0, 30.0), Vec3::new(170.0, -160.0, -190.0)),
            (Vec3::new(5.0, -195.0, 120.0), Vec3::new(-15.0, 185.0, -120.0)),
        ];
        for (a, b) in samples {
            assert!(metric.distance(a, b) <= half_diagonal);
        }
    }
}
