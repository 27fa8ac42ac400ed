use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Shared parameters for placement generation and channel optimization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Side length of the square deployment area, in meters.
    pub area_size: f64,
    /// Number of hotspots a successful placement must contain.
    pub target_count: usize,
    /// Minimum pairwise separation enforced at generation time, in meters.
    pub min_distance: f64,
    /// Radius below which same-channel hotspots interfere, in meters.
    pub interference_distance: f64,
    /// Channels are integers in `[1, num_channels]`.
    pub num_channels: u8,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            area_size: 5000.0,
            target_count: 1000,
            min_distance: 50.0,
            interference_distance: 275.0,
            num_channels: 5,
        }
    }
}

impl SimulationParams {
    /// Rejects parameter sets that are non-positive or geometrically
    /// impossible before any sampling begins.
    pub fn validate(&self) -> SimResult<()> {
        if !self.area_size.is_finite() || self.area_size <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "area_size must be positive, got {}",
                self.area_size
            )));
        }
        if !self.min_distance.is_finite() || self.min_distance <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "min_distance must be positive, got {}",
                self.min_distance
            )));
        }
        if !self.interference_distance.is_finite() || self.interference_distance <= 0.0 {
            return Err(SimError::InvalidConfiguration(format!(
                "interference_distance must be positive, got {}",
                self.interference_distance
            )));
        }
        if self.target_count == 0 {
            return Err(SimError::InvalidConfiguration(
                "target_count must be at least 1".to_string(),
            ));
        }
        if self.num_channels < 2 {
            return Err(SimError::InvalidConfiguration(format!(
                "num_channels must be at least 2 so reassignment has an alternative, got {}",
                self.num_channels
            )));
        }

        // Packing bound: each accepted point owns a disjoint disc of radius
        // min_distance / 2, all of which fit in the area padded by one
        // radius on each side. More points than discs cannot exist.
        let radius = self.min_distance / 2.0;
        let padded = self.area_size + self.min_distance;
        let capacity = (padded * padded) / (PI * radius * radius);
        if (self.target_count as f64) > capacity {
            return Err(SimError::InvalidConfiguration(format!(
                "{} hotspots with min_distance {} cannot fit in a {}x{} area",
                self.target_count, self.min_distance, self.area_size, self.area_size
            )));
        }
        Ok(())
    }
}

/// Common error type for the simulation core.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("generation exhausted: placed {placed} of {target} hotspots after {attempts} attempts")]
    GenerationExhausted {
        placed: usize,
        target: usize,
        attempts: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type SimResult<T> = Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(SimulationParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_distances() {
        let params = SimulationParams {
            min_distance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SimError::InvalidConfiguration(_))
        ));

        let params = SimulationParams {
            interference_distance: -1.0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_single_channel_plans() {
        let params = SimulationParams {
            num_channels: 1,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_geometrically_impossible_targets() {
        let params = SimulationParams {
            area_size: 100.0,
            target_count: 5,
            min_distance: 1000.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(SimError::InvalidConfiguration(_))
        ));
    }
}
