pub mod boundary;
pub mod double_buffer;
pub mod forces;
pub mod sim_params;
pub mod spatial;
pub mod state;
pub mod step;

pub use boundary::BoundaryMode;
pub use double_buffer::{TickBuffers, TickError};
pub use sim_params::{SimParamsError, SimulationParams};
pub use spatial::SpatialMetric;
pub use state::{Food, Particle};
