use crate::model::Hotspot;
use crate::prelude::{SimError, SimResult, SimulationParams};
use log::{debug, info};
use rand::Rng;

/// Rejection-sampling placement generator.
///
/// Draws candidate positions uniformly over the square area and accepts a
/// candidate only if it keeps `min_distance` to every hotspot accepted so
/// far. The attempt budget is global: every draw consumes one attempt,
/// accepted or not, so a crowded area fails fast instead of spinning.
pub struct PlacementGenerator {
    params: SimulationParams,
    max_attempts: usize,
}

impl PlacementGenerator {
    pub fn new(params: SimulationParams, max_attempts: usize) -> Self {
        Self {
            params,
            max_attempts,
        }
    }

    /// Produces exactly `target_count` hotspots or fails with
    /// `GenerationExhausted`; never returns a short placement.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> SimResult<Vec<Hotspot>> {
        self.params.validate()?;

        let mut hotspots: Vec<Hotspot> = Vec::with_capacity(self.params.target_count);
        let mut attempts = 0;

        while hotspots.len() < self.params.target_count && attempts < self.max_attempts {
            let x = rng.gen_range(0.0..self.params.area_size);
            let y = rng.gen_range(0.0..self.params.area_size);
            attempts += 1;

            let candidate = Hotspot::new(x, y, 0);
            let too_close = hotspots
                .iter()
                .any(|placed| candidate.distance_to(placed) < self.params.min_distance);
            if too_close {
                continue;
            }

            let channel = rng.gen_range(1..=self.params.num_channels);
            hotspots.push(Hotspot::new(x, y, channel));
        }

        if hotspots.len() < self.params.target_count {
            debug!(
                "placement exhausted at {} of {} after {} attempts",
                hotspots.len(),
                self.params.target_count,
                attempts
            );
            return Err(SimError::GenerationExhausted {
                placed: hotspots.len(),
                target: self.params.target_count,
                attempts,
            });
        }

        info!(
            "placed {} hotspots in {} attempts ({} rejected)",
            hotspots.len(),
            attempts,
            attempts - hotspots.len()
        );
        Ok(hotspots)
    }
}
