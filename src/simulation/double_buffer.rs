//! Double-buffered tick driver.
//!
//! A tick reads every particle from the frozen `current` array and writes
//! each result into its own slot of the disjoint `next` array; the two swap
//! roles afterward. This is what makes the parallel update race-free and the
//! per-particle results independent of processing order. `advance` returns
//! only once every slot of the tick is written, which is the synchronization
//! barrier the next tick relies on.

use thiserror::Error;

use crate::genome::GenomeRecord;
use crate::simulation::sim_params::{SimParamsError, SimulationParams};
use crate::simulation::state::{Food, Particle};
use crate::simulation::step::{step_simulation, step_simulation_st};

/// Rejection reasons at the tick boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TickError {
    #[error(transparent)]
    Params(#[from] SimParamsError),
    #[error("particle buffer holds {actual} particles, params expect {expected}")]
    ParticleCount { expected: usize, actual: usize },
    #[error("genome table holds {actual} records, need one per simulation ({expected})")]
    GenomeTable { expected: usize, actual: usize },
}

/// The current/next particle snapshots for one batch of simulations.
///
/// Outside observers only ever see completed ticks: `current()` is the last
/// fully written snapshot, and a failed `advance` leaves it untouched.
pub struct TickBuffers {
    current: Vec<Particle>,
    next: Vec<Particle>,
    tick: u64,
}

impl TickBuffers {
    /// Wrap an externally initialized particle population.
    pub fn new(particles: Vec<Particle>) -> Self {
        let next = particles.clone();
        Self {
            current: particles,
            next,
            tick: 0,
        }
    }

    /// The last completed snapshot.
    pub fn current(&self) -> &[Particle] {
        &self.current
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run one parallel tick and swap the buffers.
    pub fn advance(
        &mut self,
        genomes: &[GenomeRecord],
        food: &[Food],
        params: &SimulationParams,
    ) -> Result<(), TickError> {
        self.check_inputs(genomes, params)?;
        step_simulation(&self.current, &mut self.next, genomes, food, params);
        self.finish_tick();
        Ok(())
    }

    /// Run one sequential tick and swap the buffers. Produces bit-identical
    /// snapshots to [`TickBuffers::advance`]; useful as a reference when
    /// validating ports of the step to other backends.
    pub fn advance_st(
        &mut self,
        genomes: &[GenomeRecord],
        food: &[Food],
        params: &SimulationParams,
    ) -> Result<(), TickError> {
        self.check_inputs(genomes, params)?;
        step_simulation_st(&self.current, &mut self.next, genomes, food, params);
        self.finish_tick();
        Ok(())
    }

    fn finish_tick(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.tick += 1;
    }

    /// Fail fast on malformed configuration instead of computing garbage.
    fn check_inputs(
        &self,
        genomes: &[GenomeRecord],
        params: &SimulationParams,
    ) -> Result<(), TickError> {
        if let Err(err) = params.validate() {
            log::warn!("rejecting tick {}: {}", self.tick, err);
            return Err(err.into());
        }
        if self.current.len() != params.particle_count {
            log::warn!(
                "rejecting tick {}: particle buffer length {} != particle_count {}",
                self.tick,
                self.current.len(),
                params.particle_count
            );
            return Err(TickError::ParticleCount {
                expected: params.particle_count,
                actual: self.current.len(),
            });
        }
        if genomes.len() < params.simulation_count {
            log::warn!(
                "rejecting tick {}: {} genome records for {} simulations",
                self.tick,
                genomes.len(),
                params.simulation_count
            );
            return Err(TickError::GenomeTable {
                expected: params.simulation_count,
                actual: genomes.len(),
            });
        }
        Ok(())
    }
}
