use serde::{Deserialize, Serialize};

use crate::domain::generator::config::{DEFAULT_EDGE_DENSITY, DEFAULT_GRID_SIZE, DEFAULT_SEED};

/// A batch file listing the datasets to generate, in order.
#[derive(Debug, Deserialize, Serialize)]
pub struct BatchConfigDto {
    pub datasets: Vec<GeneratorConfigDto>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfigDto {
    pub num_nodes: usize,
    pub num_vehicles: usize,
    #[serde(default = "default_grid_size")]
    pub grid_size: f64,
    #[serde(default = "default_edge_density")]
    pub edge_density: f64,
    #[serde(default = "default_seed")]
    pub seed: u64,
    pub output_file: String,
}

fn default_grid_size() -> f64 {
    DEFAULT_GRID_SIZE
}

fn default_edge_density() -> f64 {
    DEFAULT_EDGE_DENSITY
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}
