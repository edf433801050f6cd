//! Per-particle force integration.
//!
//! One tick reads every particle from a frozen current snapshot and writes
//! each updated particle into its own slot of the next snapshot. The update
//! for a particle depends only on the snapshot, the genome table, the food
//! table, and the parameters, so particles can be processed in any order or
//! fully in parallel with identical results.

use glam::Vec3;
use rayon::prelude::*;

use crate::genome::GenomeRecord;
use crate::simulation::boundary::apply_bounds;
use crate::simulation::forces::{
    food_acceleration, pairwise_acceleration, DISTANCE_EPSILON, FOOD_FORCE_EPSILON,
};
use crate::simulation::sim_params::SimulationParams;
use crate::simulation::spatial::SpatialMetric;
use crate::simulation::state::{Food, Particle};

/// Accepted pairwise interactions per particle per tick. Contributions past
/// the cap are dropped in scan order, not by proximity; this bounds the
/// worst case in dense neighborhoods at the cost of exactness there.
pub const MAX_INTERACTIONS: usize = 100;

/// Hard speed limit in world units per second, applied direction-preserving.
pub const MAX_VELOCITY: f32 = 200.0;

// ============================================================================
// Force Accumulation
// ============================================================================

/// Sum pairwise accelerations from every in-range particle of the same
/// simulation instance, up to [`MAX_INTERACTIONS`] accepted contributions.
fn pairwise_forces(
    index: usize,
    particle: &Particle,
    current: &[Particle],
    record: &GenomeRecord,
    metric: &SpatialMetric,
    params: &SimulationParams,
) -> Vec3 {
    let range_squared = params.max_force_range * params.max_force_range;
    let min_r = params.min_distance / params.max_force_range;

    let mut total = Vec3::ZERO;
    let mut accepted = 0;

    for (other_index, other) in current.iter().enumerate() {
        if other_index == index || other.simulation_id != particle.simulation_id {
            continue;
        }
        if accepted >= MAX_INTERACTIONS {
            break;
        }

        let displacement = metric.displacement(particle.position, other.position);
        let distance_squared = displacement.length_squared();

        // skip out-of-range and near-coincident pairs
        if distance_squared > range_squared || distance_squared < DISTANCE_EPSILON {
            continue;
        }
        accepted += 1;

        let attraction =
            record.pair_force(particle.particle_type, other.particle_type, params.type_count);
        let acceleration =
            pairwise_acceleration(min_r, displacement / params.max_force_range, attraction);

        total += acceleration * params.max_force_range;
    }

    total
}

/// Sum food accelerations from every active in-range food item.
fn food_forces(
    particle: &Particle,
    food: &[Food],
    food_force: f32,
    metric: &SpatialMetric,
    params: &SimulationParams,
) -> Vec3 {
    let mut total = Vec3::ZERO;

    for item in food {
        if !item.active() {
            continue;
        }

        let displacement = metric.displacement(particle.position, item.position);
        let distance = displacement.length();

        if distance > DISTANCE_EPSILON && distance < params.max_force_range {
            total += food_acceleration(displacement, distance, food_force);
        }
    }

    total
}

// ============================================================================
// Per-Particle Update
// ============================================================================

/// Compute the next state of the particle at `index`.
///
/// Pure over its inputs: the current snapshot, genome table, and food table
/// are never written, and the result is independent of the order other
/// particles are processed in. A `simulation_id` with no genome record
/// yields no forces (the particle only drifts and damps).
pub fn integrate_particle(
    index: usize,
    current: &[Particle],
    genomes: &[GenomeRecord],
    food: &[Food],
    params: &SimulationParams,
) -> Particle {
    let particle = current[index];
    let metric = SpatialMetric::for_boundary(params.boundary_mode, params.extents());

    let mut total_force = Vec3::ZERO;

    if let Some(record) = genomes.get(particle.simulation_id as usize) {
        total_force += pairwise_forces(index, &particle, current, record, &metric, params);

        let food_force = record.food_force(particle.particle_type, params.type_count);
        if food_force.abs() > FOOD_FORCE_EPSILON {
            total_force += food_forces(&particle, food, food_force, &metric, params);
        }
    }

    // unit mass: force and acceleration are interchangeable
    let mut velocity = particle.velocity + total_force * params.delta_time;

    // frame-rate-independent exponential decay
    velocity *= 0.5_f32.powf(params.delta_time / params.velocity_half_life);

    if velocity.length() > MAX_VELOCITY {
        velocity = velocity.normalize() * MAX_VELOCITY;
    }

    let position = particle.position + velocity * params.delta_time;
    let (position, velocity) = apply_bounds(position, velocity, params.extents(), params.boundary_mode);

    Particle {
        position,
        velocity,
        ..particle
    }
}

// ============================================================================
// Tick Drivers
// ============================================================================

/// Sequential reference driver: update every particle in index order.
pub fn step_simulation_st(
    current: &[Particle],
    next: &mut [Particle],
    genomes: &[GenomeRecord],
    food: &[Food],
    params: &SimulationParams,
) {
    for index in 0..current.len() {
        next[index] = integrate_particle(index, current, genomes, food, params);
    }
}

/// Parallel driver: one rayon task per particle, each writing only its own
/// slot of `next`. Produces bit-identical output to [`step_simulation_st`].
pub fn step_simulation(
    current: &[Particle],
    next: &mut [Particle],
    genomes: &[GenomeRecord],
    food: &[Food],
    params: &SimulationParams,
) {
    next.par_iter_mut().enumerate().for_each(|(index, slot)| {
        *slot = integrate_particle(index, current, genomes, food, params);
    });
}
