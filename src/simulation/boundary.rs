//! Boundary enforcement at the edges of the simulation volume.
//!
//! Two modes: `Bounce` reflects particles off the walls with damping,
//! `Teleport` wraps them around to the opposite side (toroidal world).
//! In `Teleport` mode interaction distances must also be computed on the
//! torus; see [`crate::simulation::spatial::SpatialMetric::for_boundary`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Collision radius used when clamping against the walls in `Bounce` mode.
pub const PARTICLE_RADIUS: f32 = 5.0;

/// Velocity retained (and inverted) on the reflected axis after a wall hit.
pub const WALL_DAMPING: f32 = 0.5;

/// How the simulation volume treats particles reaching its edges.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundaryMode {
    /// Reflect off the walls, damping the velocity on the touching axis.
    #[default]
    Bounce,
    /// Wrap around to the opposite side (periodic world).
    Teleport,
}

/// Apply the boundary rule to a freshly integrated position.
///
/// Returns the corrected `(position, velocity)` pair. Axes resolve
/// independently; a particle in a corner reflects or wraps on each touching
/// axis separately.
pub fn apply_bounds(
    position: Vec3,
    velocity: Vec3,
    extents: Vec3,
    mode: BoundaryMode,
) -> (Vec3, Vec3) {
    match mode {
        BoundaryMode::Bounce => {
            let (px, vx) = bounce_axis(position.x, velocity.x, extents.x * 0.5);
            let (py, vy) = bounce_axis(position.y, velocity.y, extents.y * 0.5);
            let (pz, vz) = bounce_axis(position.z, velocity.z, extents.z * 0.5);
            (Vec3::new(px, py, pz), Vec3::new(vx, vy, vz))
        }
        BoundaryMode::Teleport => {
            let wrapped = Vec3::new(
                teleport_axis(position.x, extents.x * 0.5),
                teleport_axis(position.y, extents.y * 0.5),
                teleport_axis(position.z, extents.z * 0.5),
            );
            (wrapped, velocity)
        }
    }
}

/// Clamp one axis against the wall and invert-and-damp its velocity.
fn bounce_axis(position: f32, velocity: f32, half_extent: f32) -> (f32, f32) {
    let limit = half_extent - PARTICLE_RADIUS;
    if position > limit {
        (limit, -velocity * WALL_DAMPING)
    } else if position < -limit {
        (-limit, -velocity * WALL_DAMPING)
    } else {
        (position, velocity)
    }
}

/// Wrap one axis past either half-extent. A particle overshooting by more
/// than a full extent in one step only wraps once; keeping |velocity * dt|
/// below the extent is the caller's concern.
fn teleport_axis(position: f32, half_extent: f32) -> f32 {
    if position > half_extent {
        -half_extent + (position - half_extent)
    } else if position < -half_extent {
        half_extent + (position + half_extent)
    } else {
        position
    }
}
