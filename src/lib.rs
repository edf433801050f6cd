//! # GeneLife: Genome-Driven Particle Life Core
//!
//! GeneLife is the per-tick force-and-motion update for a batch of
//! genetically parameterized particle-life simulations. Many independent
//! populations run in one pass: each particle belongs to a simulation
//! instance whose bit-packed genome decodes into pairwise
//! attraction/repulsion coefficients between particle types and per-type
//! food affinities.
//!
//! ## Architecture Overview
//!
//! ### 1. Genome Codec ([`genome`])
//!
//! - [`genome::GenomeRecord`] - packed four-word record, one per instance
//! - 64-bit ordered-pair interaction matrix, 16-bit food affinities
//! - Overrunning fields decode to neutral 0.0; decoding is total and pure
//!
//! ### 2. Simulation Core ([`simulation`])
//!
//! - [`simulation::SimulationParams`] - validated tick configuration
//! - [`simulation::spatial`] - Euclidean or toroidal displacement, coupled
//!   to the boundary mode
//! - [`simulation::forces`] - repulsion-then-attraction kernel over
//!   normalized distances, plus food attraction
//! - [`simulation::boundary`] - bounce (reflect + damp) or teleport (wrap)
//! - [`simulation::step`] - per-particle integrator with sequential and
//!   rayon-parallel drivers
//! - [`simulation::TickBuffers`] - double-buffered current/next snapshots
//!
//! ## Key Design
//!
//! One tick is embarrassingly data-parallel: every particle is an
//! independent unit of work that reads the frozen current snapshot and
//! writes exactly one slot of the next snapshot. Results are bit-for-bit
//! independent of processing order, so the same logic can back a sequential
//! loop, a rayon pool, or a GPU dispatch. The records in
//! [`simulation::state`] and [`genome`] are `repr(C)` + `Pod` so an external
//! GPU host can upload them unchanged.
//!
//! ## Data Flow
//!
//! ```text
//! current snapshot + genome table + food table + params
//!     -> per-particle force accumulation (capped brute-force scan)
//!     -> damping, speed clamp, position advance, boundary rule
//!     -> next snapshot, swap at tick boundary
//! ```
//!
//! Genome creation, food consumption, rendering, and buffer scheduling are
//! external concerns; this crate only consumes genomes and emits updated
//! particle state.

pub mod genome;
pub mod simulation;
