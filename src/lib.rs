use log::info;
use rand::Rng;

use crate::api::dataset_dto::DatasetDto;
use crate::domain::generator::ScenarioGenerator;
use crate::domain::generator::config::GeneratorConfig;
use crate::domain::scenario::Scenario;
use crate::domain::statistics::DatasetStatistics;
use crate::error::Result;
use crate::loader::parser::write_json_file;

pub mod api;
pub mod domain;
pub mod error;
pub mod loader;
pub mod logger;

/// Generates a scenario from `config` using the caller's random source.
///
/// The seed stored in `config` is ignored here; use [`generate_dataset`] for
/// the reproducible, seeded path.
pub fn generate_scenario<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Result<Scenario> {
    let generator = ScenarioGenerator::new(config.clone())?;
    Ok(generator.generate(rng))
}

/// Generates the seeded scenario described by `config`, writes it to
/// `config.output_file`, and returns its statistics.
pub fn generate_dataset(config: &GeneratorConfig) -> Result<DatasetStatistics> {
    let generator = ScenarioGenerator::new(config.clone())?;
    info!("Generating dataset with {} locations...", config.num_nodes);

    let scenario = generator.generate_seeded();
    scenario.validate()?;

    write_json_file(&config.output_file, &DatasetDto::from(&scenario))?;
    info!("Dataset saved to: {}", config.output_file.display());

    Ok(DatasetStatistics::from_scenario(&scenario))
}
