//! Randomized scenario synthesis.
//!
//! The random source is always passed in by the caller; nothing here keeps
//! global state, so two generators seeded the same way produce identical
//! scenarios and separate runs never interfere.

pub mod config;
pub mod fleet;
pub mod node_placement;
pub mod road_network;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::generator::config::GeneratorConfig;
use crate::domain::scenario::Scenario;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct ScenarioGenerator {
    config: GeneratorConfig,
}

impl ScenarioGenerator {
    /// Fails with `Error::InvalidParameter` if the config is unusable.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Locations first, then roads derived from their geometry, then the fleet.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Scenario {
        let locations = node_placement::place_locations(self.config.num_nodes, self.config.grid_size, rng);
        info!("Generated {} nodes (including depot)", locations.len());

        let roads = road_network::build_roads(&locations, self.config.edge_density, rng);
        info!("Generated {} road connections", roads.len());

        let vehicles = fleet::build_fleet(self.config.num_vehicles, rng);
        info!("Generated {} vehicles", vehicles.len());

        Scenario { locations, roads, vehicles }
    }

    /// Generates with a fresh `StdRng` seeded from the config.
    pub fn generate_seeded(&self) -> Scenario {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_new_validates_config() {
        let result = ScenarioGenerator::new(GeneratorConfig::new(5, 0, "x.json"));
        assert!(matches!(result, Err(Error::InvalidParameter(_))));
    }

    #[test]
    fn test_generated_scenario_is_valid() {
        for seed in 0..20 {
            let generator = ScenarioGenerator::new(GeneratorConfig::new(35, 4, "x.json").with_seed(seed)).unwrap();
            let scenario = generator.generate_seeded();
            assert!(scenario.validate().is_ok(), "seed {} produced an invalid scenario", seed);
            assert_eq!(scenario.locations.len(), 36);
            assert_eq!(scenario.vehicles.len(), 4);
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = ScenarioGenerator::new(GeneratorConfig::new(25, 3, "x.json").with_seed(99)).unwrap();
        assert_eq!(generator.generate_seeded(), generator.generate_seeded());
    }
}
