//! Simulation parameters shared by every tick of the force step.
//!
//! The host that owns configuration loading fills this in once and passes it
//! to the tick driver. All values are validated at the tick boundary; the
//! per-particle update itself assumes they hold.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use glam::Vec3;

use crate::simulation::boundary::BoundaryMode;

/// Configuration for one batch of simulation instances.
///
/// The same parameters apply to every instance in the batch; only the genome
/// table differs per instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Integration timestep in seconds (fixed, not frame delta)
    pub delta_time: f32,

    /// Expected length of the particle buffers
    pub particle_count: usize,

    /// Number of independent simulation instances in the batch
    pub simulation_count: usize,

    /// Number of particle types; bounds every `particle_type` tag
    pub type_count: u32,

    /// Interaction cutoff radius in world units
    pub max_force_range: f32,

    /// Repulsion-onset radius; must stay below `max_force_range` or the
    /// attraction kernel degenerates (division by `1 - min_distance/range`)
    pub min_distance: f32,

    /// Simulation volume extent along X
    pub grid_width: f32,
    /// Simulation volume extent along Y
    pub grid_height: f32,
    /// Simulation volume extent along Z
    pub grid_depth: f32,

    /// Edge behavior; `Teleport` also switches interaction distances to the
    /// toroidal metric
    pub boundary_mode: BoundaryMode,

    /// Half-life of velocity decay in seconds. Damping is applied as
    /// `0.5^(delta_time / velocity_half_life)` so the decay rate is
    /// independent of the tick rate.
    pub velocity_half_life: f32,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            delta_time: 1.0 / 60.0, // 60 Hz
            particle_count: 100,
            simulation_count: 1,
            type_count: 3,
            max_force_range: 200.0,
            min_distance: 10.0,
            grid_width: 400.0,
            grid_height: 400.0,
            grid_depth: 400.0,
            boundary_mode: BoundaryMode::Bounce,
            velocity_half_life: 0.043,
        }
    }
}

/// Rejection reasons for malformed parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimParamsError {
    #[error("delta_time must be positive, got {0}")]
    DeltaTime(f32),
    #[error("type_count must be at least 1")]
    ZeroTypeCount,
    #[error("max_force_range must be positive, got {0}")]
    ForceRange(f32),
    #[error("min_distance {min_distance} must be in (0, {max_force_range})")]
    MinDistance {
        min_distance: f32,
        max_force_range: f32,
    },
    #[error("grid extents must be positive, got ({0}, {1}, {2})")]
    GridExtents(f32, f32, f32),
    #[error("velocity_half_life must be positive, got {0}")]
    HalfLife(f32),
}

impl SimulationParams {
    /// Volume extents as a vector.
    pub fn extents(&self) -> Vec3 {
        Vec3::new(self.grid_width, self.grid_height, self.grid_depth)
    }

    /// Check every precondition the per-particle update relies on.
    ///
    /// The tick driver calls this before dispatching; hosts that bypass the
    /// driver should call it themselves whenever parameters change.
    pub fn validate(&self) -> Result<(), SimParamsError> {
        if !(self.delta_time > 0.0) {
            return Err(SimParamsError::DeltaTime(self.delta_time));
        }
        if self.type_count == 0 {
            return Err(SimParamsError::ZeroTypeCount);
        }
        if !(self.max_force_range > 0.0) {
            return Err(SimParamsError::ForceRange(self.max_force_range));
        }
        if !(self.min_distance > 0.0) || self.min_distance >= self.max_force_range {
            return Err(SimParamsError::MinDistance {
                min_distance: self.min_distance,
                max_force_range: self.max_force_range,
            });
        }
        if !(self.grid_width > 0.0 && self.grid_height > 0.0 && self.grid_depth > 0.0) {
            return Err(SimParamsError::GridExtents(
                self.grid_width,
                self.grid_height,
                self.grid_depth,
            ));
        }
        if !(self.velocity_half_life > 0.0) {
            return Err(SimParamsError::HalfLife(self.velocity_half_life));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_are_valid() {
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_degenerate_force_ratio() {
        let mut params = SimulationParams::default();
        params.min_distance = params.max_force_range;
        assert!(matches!(
            params.validate(),
            Err(SimParamsError::MinDistance { .. })
        ));

        params.min_distance = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_scalars() {
        let mut params = SimulationParams::default();
        params.delta_time = 0.0;
        assert_eq!(params.validate(), Err(SimParamsError::DeltaTime(0.0)));

        let mut params = SimulationParams::default();
        params.type_count = 0;
        assert_eq!(params.validate(), Err(SimParamsError::ZeroTypeCount));

        let mut params = SimulationParams::default();
        params.grid_depth = -1.0;
        assert!(matches!(
            params.validate(),
            Err(SimParamsError::GridExtents(..))
        ));

        let mut params = SimulationParams::default();
        params.velocity_half_life = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_nan_delta_time_is_rejected() {
        let mut params = SimulationParams::default();
        params.delta_time = f32::NAN;
        assert!(params.validate().is_err());
    }
}
