use crate::interference::InterferenceModel;
use crate::model::Hotspot;
use crate::telemetry::InterferenceTrend;
use log::{debug, info, warn};
use rand::Rng;

/// Stochastic local-search loop that reassigns one channel at a time.
///
/// Each iteration rebuilds the interference graph from scratch, records the
/// interfering-node count, and either stops (graph clear) or moves one
/// random involved hotspot to a random different channel. The count is not
/// guaranteed to decrease monotonically; a single reassignment can create
/// new same-channel proximity elsewhere. Hitting the iteration budget while
/// still interfering is a normal outcome, not an error.
pub struct ChannelOptimizer {
    num_channels: u8,
    max_iterations: usize,
}

impl ChannelOptimizer {
    pub fn new(num_channels: u8, max_iterations: usize) -> Self {
        Self {
            num_channels,
            max_iterations,
        }
    }

    /// Mutates channels in place (positions are never touched) and returns
    /// the per-iteration interference history, at most `max_iterations`
    /// entries long.
    pub fn optimize<R, M>(
        &self,
        hotspots: &mut [Hotspot],
        model: &M,
        rng: &mut R,
    ) -> InterferenceTrend
    where
        R: Rng,
        M: InterferenceModel,
    {
        let mut trend = InterferenceTrend::new();

        for iteration in 0..self.max_iterations {
            let report = model.find_interference(hotspots);
            trend.record(report.node_count());

            if report.is_clear() {
                info!("interference cleared after {} iterations", iteration);
                break;
            }

            let involved: Vec<usize> = report.involved.iter().copied().collect();
            let target = involved[rng.gen_range(0..involved.len())];
            let current = hotspots[target].channel;
            let alternatives: Vec<u8> = (1..=self.num_channels)
                .filter(|&ch| ch != current)
                .collect();
            if alternatives.is_empty() {
                warn!("no alternative channel available, stopping");
                break;
            }
            let replacement = alternatives[rng.gen_range(0..alternatives.len())];

            debug!(
                "iteration {}: {} interfering, moving hotspot {} from channel {} to {}",
                iteration,
                report.node_count(),
                target,
                current,
                replacement
            );
            hotspots[target].channel = replacement;
        }

        if !trend.converged() {
            info!(
                "iteration budget reached with {} hotspots still interfering",
                trend.last().unwrap_or(0)
            );
        }
        trend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interference::PairwiseInterference;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn clear_placement_yields_single_zero_entry() {
        let mut hotspots = vec![
            Hotspot::new(0.0, 0.0, 1),
            Hotspot::new(100.0, 0.0, 2),
            Hotspot::new(5000.0, 5000.0, 1),
        ];
        let model = PairwiseInterference::new(275.0);
        let optimizer = ChannelOptimizer::new(5, 100);
        let mut rng = StdRng::seed_from_u64(1);

        let trend = optimizer.optimize(&mut hotspots, &model, &mut rng);
        assert_eq!(trend.counts(), &[0]);
        assert!(trend.converged());
    }

    #[test]
    fn two_conflicting_hotspots_resolve() {
        // One conflicting pair and five channels: the first reassignment
        // always clears it, so the trend is [2, 0].
        let mut hotspots = vec![Hotspot::new(0.0, 0.0, 1), Hotspot::new(100.0, 0.0, 1)];
        let model = PairwiseInterference::new(275.0);
        let optimizer = ChannelOptimizer::new(5, 100);
        let mut rng = StdRng::seed_from_u64(5);

        let trend = optimizer.optimize(&mut hotspots, &model, &mut rng);
        assert_eq!(trend.counts(), &[2, 0]);
        assert_ne!(hotspots[0].channel, hotspots[1].channel);
    }

    #[test]
    fn trend_never_exceeds_iteration_budget() {
        // Dense same-spot cluster with two channels keeps interfering.
        let mut hotspots: Vec<Hotspot> = (0..6)
            .map(|i| Hotspot::new(i as f64, 0.0, 1 + (i % 2) as u8))
            .collect();
        let model = PairwiseInterference::new(50.0);
        let optimizer = ChannelOptimizer::new(2, 25);
        let mut rng = StdRng::seed_from_u64(9);

        let trend = optimizer.optimize(&mut hotspots, &model, &mut rng);
        assert!(trend.len() <= 25);
        assert!(!trend.is_empty());
    }

    #[test]
    fn last_zero_means_final_graph_is_clear() {
        let mut hotspots: Vec<Hotspot> = (0..8)
            .map(|i| Hotspot::new((i / 2) as f64 * 400.0, (i % 2) as f64 * 30.0, 1))
            .collect();
        let model = PairwiseInterference::new(100.0);
        let optimizer = ChannelOptimizer::new(5, 500);
        let mut rng = StdRng::seed_from_u64(21);

        let trend = optimizer.optimize(&mut hotspots, &model, &mut rng);
        if trend.converged() {
            assert!(model.find_interference(&hotspots).is_clear());
        }
    }

    #[test]
    fn positions_are_never_moved() {
        let mut hotspots: Vec<Hotspot> = (0..10)
            .map(|i| Hotspot::new(i as f64 * 20.0, i as f64 * 7.0, 1))
            .collect();
        let before: Vec<(f64, f64)> = hotspots.iter().map(|h| (h.x, h.y)).collect();

        let model = PairwiseInterference::new(120.0);
        let optimizer = ChannelOptimizer::new(5, 50);
        let mut rng = StdRng::seed_from_u64(33);
        optimizer.optimize(&mut hotspots, &model, &mut rng);

        let after: Vec<(f64, f64)> = hotspots.iter().map(|h| (h.x, h.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn reassigned_channels_stay_in_range() {
        let mut hotspots: Vec<Hotspot> =
            (0..12).map(|i| Hotspot::new(i as f64 * 10.0, 0.0, 1)).collect();
        let model = PairwiseInterference::new(200.0);
        let optimizer = ChannelOptimizer::new(3, 40);
        let mut rng = StdRng::seed_from_u64(14);

        optimizer.optimize(&mut hotspots, &model, &mut rng);
        for h in &hotspots {
            assert!((1..=3).contains(&h.channel));
        }
    }
}
