use crate::workflow::config::SimulationConfig;
use rand::Rng;
use wificore::interference::{InterferenceModel, InterferenceReport, PairwiseInterference};
use wificore::model::Hotspot;
use wificore::optimizer::ChannelOptimizer;
use wificore::placement::PlacementGenerator;
use wificore::prelude::SimResult;
use wificore::telemetry::InterferenceTrend;

/// Result of the optimization phase: the trend plus the interference graph
/// recomputed against the final placement.
pub struct OptimizeOutcome {
    pub trend: InterferenceTrend,
    pub final_report: InterferenceReport,
}

/// Wires the core components together for one run.
#[derive(Clone)]
pub struct Runner {
    config: SimulationConfig,
}

impl Runner {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> SimResult<Vec<Hotspot>> {
        let generator = PlacementGenerator::new(self.config.to_params(), self.config.max_attempts);
        generator.generate(rng)
    }

    pub fn optimize<R: Rng>(&self, hotspots: &mut [Hotspot], rng: &mut R) -> OptimizeOutcome {
        let model = PairwiseInterference::new(self.config.interference_distance);
        let optimizer =
            ChannelOptimizer::new(self.config.num_channels, self.config.max_iterations);
        let trend = optimizer.optimize(hotspots, &model, rng);
        let final_report = model.find_interference(hotspots);
        OptimizeOutcome {
            trend,
            final_report,
        }
    }
}
