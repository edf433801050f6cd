//! The distance-dependent force law.
//!
//! Pairwise forces operate in normalized space: the caller divides
//! displacements by `max_force_range` before calling in, and multiplies the
//! returned acceleration by `max_force_range` on the way out. The kernel
//! shape is therefore independent of the configured interaction radius.

use glam::Vec3;

/// Effective radius of a food item; controls the falloff knee of the
/// food-attraction curve.
pub const FOOD_RADIUS: f32 = 2.0;

/// Food coefficients at or below this magnitude skip the food scan entirely.
pub const FOOD_FORCE_EPSILON: f32 = 1e-3;

/// Distances below this are treated as coincident and exert no force.
pub const DISTANCE_EPSILON: f32 = 1e-3;

/// Acceleration between two particles at normalized displacement
/// `displacement` (|displacement| and `min_r` both in [0, 1]).
///
/// Below `min_r` the force is pure repulsion, rising linearly from -1 at
/// contact to 0 at `min_r`. Beyond it, a triangular kernel zero at `min_r`
/// and 1.0, peaking halfway between, scaled and signed by the genome-decoded
/// `attraction` coefficient.
pub fn pairwise_acceleration(min_r: f32, displacement: Vec3, attraction: f32) -> Vec3 {
    let dist = displacement.length();
    if dist < DISTANCE_EPSILON {
        return Vec3::ZERO;
    }

    let force = if dist < min_r {
        // repulsion, always <= 0
        dist / min_r - 1.0
    } else {
        attraction * (1.0 - (1.0 + min_r - 2.0 * dist).abs() / (1.0 - min_r))
    };

    displacement * force / dist
}

/// Acceleration toward (or away from) a food item at world-space
/// `displacement` and `distance`. Soft falloff, capped at full strength once
/// the particle is within `2 * FOOD_RADIUS`.
pub fn food_acceleration(displacement: Vec3, distance: f32, food_force: f32) -> Vec3 {
    let direction = displacement / distance;
    let distance_factor = ((FOOD_RADIUS * 2.0) / distance).min(1.0).powf(0.5);
    direction * food_force * distance_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIN_R: f32 = 0.05;

    #[test]
    fn test_coincident_particles_exert_no_force() {
        let acceleration = pairwise_acceleration(MIN_R, Vec3::ZERO, 40.0);
        assert_eq!(acceleration, Vec3::ZERO);
    }

    #[test]
    fn test_short_range_is_repulsive_regardless_of_genome() {
        for attraction in [-80.0, 0.0, 80.0] {
            let displacement = Vec3::new(MIN_R * 0.5, 0.0, 0.0);
            let acceleration = pairwise_acceleration(MIN_R, displacement, attraction);
            // force points away from the other particle
            assert!(acceleration.x < 0.0, "attraction {attraction}");
            assert_eq!(acceleration.y, 0.0);
        }
    }

    #[test]
    fn test_force_vanishes_at_repulsion_onset() {
        // d == min_r is the seam: repulsion has decayed to zero and the
        // triangular kernel starts at zero
        let displacement = Vec3::new(MIN_R, 0.0, 0.0);
        let acceleration = pairwise_acceleration(MIN_R, displacement, 0.0);
        assert_eq!(acceleration, Vec3::ZERO);
    }

    #[test]
    fn test_kernel_peaks_at_midpoint_with_genome_sign() {
        let peak = (1.0 + MIN_R) * 0.5;
        let displacement = Vec3::new(peak, 0.0, 0.0);

        let attract = pairwise_acceleration(MIN_R, displacement, 80.0);
        assert!(attract.x > 0.0); // pulled toward the other particle

        let repel = pairwise_acceleration(MIN_R, displacement, -80.0);
        assert!(repel.x < 0.0);

        // peak magnitude equals the coefficient (kernel value 1) over distance
        assert!((attract.x - 80.0).abs() < 1e-3);
    }

    #[test]
    fn test_kernel_is_zero_at_cutoff() {
        let displacement = Vec3::new(1.0, 0.0, 0.0);
        let acceleration = pairwise_acceleration(MIN_R, displacement, 80.0);
        assert!(acceleration.length() < 1e-4);
    }

    #[test]
    fn test_force_acts_along_displacement() {
        let displacement = Vec3::new(0.3, 0.4, 0.0);
        let acceleration = pairwise_acceleration(MIN_R, displacement, 80.0);
        let cross = acceleration.cross(displacement);
        assert!(cross.length() < 1e-4);
    }

    #[test]
    fn test_food_pull_points_at_food() {
        let displacement = Vec3::new(30.0, 40.0, 0.0);
        let acceleration = food_acceleration(displacement, 50.0, 80.0);
        assert!(acceleration.dot(displacement) > 0.0);
        // negative affinity pushes away
        let aversion = food_acceleration(displacement, 50.0, -80.0);
        assert!(aversion.dot(displacement) < 0.0);
    }

    #[test]
    fn test_food_factor_caps_at_full_strength() {
        // inside 2 * FOOD_RADIUS the falloff factor saturates at 1
        let displacement = Vec3::new(FOOD_RADIUS, 0.0, 0.0);
        let acceleration = food_acceleration(displacement, FOOD_RADIUS, 80.0);
        assert_eq!(acceleration.x, 80.0);

        // farther out the pull weakens
        let far = food_acceleration(Vec3::new(100.0, 0.0, 0.0), 100.0, 80.0);
        assert!(far.x < 80.0 && far.x > 0.0);
    }
}
