use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use wificore::prelude::SimulationParams;

/// Full configuration for one simulation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub area_size: f64,
    pub num_hotspots: usize,
    pub min_distance: f64,
    pub interference_distance: f64,
    pub num_channels: u8,
    pub max_attempts: usize,
    pub max_iterations: usize,
    /// Fixed RNG seed for reproducible runs; omit for an entropy seed.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            area_size: 5000.0,
            num_hotspots: 1000,
            min_distance: 50.0,
            interference_distance: 275.0,
            num_channels: 5,
            max_attempts: 10_000,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading simulation config {}", path_ref.display()))?;
        let config: SimulationConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing simulation config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn to_params(&self) -> SimulationParams {
        SimulationParams {
            area_size: self.area_size,
            target_count: self.num_hotspots,
            min_distance: self.min_distance,
            interference_distance: self.interference_distance,
            num_channels: self.num_channels,
        }
    }
}
