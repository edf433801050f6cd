//! Particle and food records shared between the CPU core and the GPU host.
//!
//! Both structs are `repr(C)` + `Pod` so the external host can upload them to
//! storage buffers unchanged. Field order and widths must stay in sync with
//! the compute shader's struct declarations.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// A single simulated particle.
///
/// Particles are created by an external initializer and updated exactly once
/// per tick by the step integrator. Particles with different `simulation_id`
/// values belong to independent populations and never exert forces on each
/// other.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// World-space position.
    pub position: Vec3,
    /// World-space velocity (units per second).
    pub velocity: Vec3,
    /// Type tag, 0 <= particle_type < type_count.
    pub particle_type: u32,
    /// Which independent simulation instance owns this particle.
    pub simulation_id: u32,
}

impl Particle {
    pub fn new(position: Vec3, velocity: Vec3, particle_type: u32, simulation_id: u32) -> Self {
        Self {
            position,
            velocity,
            particle_type,
            simulation_id,
        }
    }
}

/// A food item. Activation state is a u32 for GPU layout compatibility.
///
/// Food is immutable for the duration of a tick; consumption and respawn are
/// handled outside this core.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Food {
    /// World-space position.
    pub position: Vec3,
    /// 1 if the item can attract particles this tick, 0 otherwise.
    pub is_active: u32,
}

impl Food {
    pub fn new(position: Vec3, active: bool) -> Self {
        Self {
            position,
            is_active: active as u32,
        }
    }

    #[inline]
    pub fn active(&self) -> bool {
        self.is_active != 0
    }
}
