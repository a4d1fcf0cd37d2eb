use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::api::config_dto::BatchConfigDto;
use crate::api::dataset_dto::DatasetDto;
use crate::domain::generator::config::GeneratorConfig;
use crate::domain::scenario::Scenario;
use crate::error::Result;

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::Error` variants:
/// - `Error::IoError` if the file cannot be read.
/// - `Error::SerializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: impl AsRef<Path>) -> Result<T> {
    let data = fs::read_to_string(file_path)?;

    let parsed_data: T = serde_json::from_str(&data)?;

    Ok(parsed_data)
}

/// Writes `value` as JSON indented by two spaces, creating missing parent directories.
///
/// A failure part way through may leave a truncated file behind.
pub fn write_json_file<T: Serialize>(file_path: impl AsRef<Path>, value: &T) -> Result<()> {
    let file_path = file_path.as_ref();
    if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(file_path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;

    Ok(())
}

/// Reads a dataset document and checks every dataset invariant.
pub fn load_scenario(file_path: impl AsRef<Path>) -> Result<Scenario> {
    let dto: DatasetDto = parse_json_file(file_path)?;
    Scenario::from_dto(dto)
}

pub fn load_batch_config(file_path: impl AsRef<Path>) -> Result<Vec<GeneratorConfig>> {
    let batch: BatchConfigDto = parse_json_file(file_path)?;
    Ok(GeneratorConfig::from_batch(batch))
}
