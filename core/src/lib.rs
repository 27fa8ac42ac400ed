//! Placement and channel-optimization core for the Wi-Fi interference
//! simulator.
//!
//! The modules cover the three algorithmic stages of a run: constrained
//! random hotspot placement, interference-graph construction over the
//! current placement, and the stochastic channel-reassignment loop that
//! consumes the graph. Persistence and rendering live in the driver crate.

pub mod interference;
pub mod math;
pub mod model;
pub mod optimizer;
pub mod placement;
pub mod prelude;
pub mod telemetry;

pub use interference::{InterferenceModel, InterferenceReport, PairwiseInterference};
pub use model::Hotspot;
pub use optimizer::ChannelOptimizer;
pub use placement::PlacementGenerator;
pub use prelude::{SimError, SimResult, SimulationParams};
pub use telemetry::InterferenceTrend;
