use std::path::PathBuf;

use crate::api::config_dto::{BatchConfigDto, GeneratorConfigDto};
use crate::domain::generator::node_placement::COORDINATE_MARGIN;
use crate::error::{Error, Result};

pub const DEFAULT_GRID_SIZE: f64 = 100.0;
pub const DEFAULT_EDGE_DENSITY: f64 = 0.3;
pub const DEFAULT_SEED: u64 = 42;

/// Smallest grid that still leaves a non-empty placement area inside the margins.
pub const MIN_GRID_SIZE: f64 = 2.0 * COORDINATE_MARGIN;

/// Largest accepted grid. Keeps every distance, and so every road cost, finite.
pub const MAX_GRID_SIZE: f64 = 1.0e6;

/// Parameters of a single generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Number of disaster locations, excluding the depot.
    pub num_nodes: usize,
    pub num_vehicles: usize,
    /// Side length of the square coordinate grid.
    pub grid_size: f64,
    /// Base probability of a road to a nearby location (boosted by 0.4 during construction).
    pub edge_density: f64,
    pub seed: u64,
    pub output_file: PathBuf,
}

impl GeneratorConfig {
    /// Creates a config with the default grid, density and seed.
    pub fn new(num_nodes: usize, num_vehicles: usize, output_file: impl Into<PathBuf>) -> Self {
        Self {
            num_nodes,
            num_vehicles,
            grid_size: DEFAULT_GRID_SIZE,
            edge_density: DEFAULT_EDGE_DENSITY,
            seed: DEFAULT_SEED,
            output_file: output_file.into(),
        }
    }

    pub fn with_grid_size(mut self, grid_size: f64) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_edge_density(mut self, edge_density: f64) -> Self {
        self.edge_density = edge_density;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// The three datasets produced when the tool runs without arguments.
    pub fn presets() -> Vec<Self> {
        vec![
            Self::new(20, 3, "small_dataset.json"),
            Self::new(50, 5, "medium_dataset.json"),
            Self::new(100, 8, "large_dataset.json"),
        ]
    }

    pub fn from_batch(batch: BatchConfigDto) -> Vec<Self> {
        batch.datasets.into_iter().map(Self::from).collect()
    }

    /// Rejects parameters that would make placement or reporting undefined.
    pub fn validate(&self) -> Result<()> {
        if self.num_nodes == 0 {
            return Err(Error::InvalidParameter("num_nodes must be at least 1".to_string()));
        }
        if self.num_vehicles == 0 {
            return Err(Error::InvalidParameter("num_vehicles must be at least 1".to_string()));
        }
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.grid_size) {
            return Err(Error::InvalidParameter(format!(
                "grid_size must lie in [{}, {}], got {}",
                MIN_GRID_SIZE, MAX_GRID_SIZE, self.grid_size
            )));
        }
        if !self.edge_density.is_finite() || self.edge_density < 0.0 {
            return Err(Error::InvalidParameter(format!("edge_density must be a finite value >= 0, got {}", self.edge_density)));
        }
        Ok(())
    }
}

impl From<GeneratorConfigDto> for GeneratorConfig {
    fn from(dto: GeneratorConfigDto) -> Self {
        Self::new(dto.num_nodes, dto.num_vehicles, dto.output_file)
            .with_grid_size(dto.grid_size)
            .with_edge_density(dto.edge_density)
            .with_seed(dto.seed)
    }
}
