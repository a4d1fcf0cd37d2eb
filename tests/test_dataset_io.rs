use std::fs;
use std::path::PathBuf;

use relief_datagen::api::dataset_dto::DatasetDto;
use relief_datagen::domain::generator::config::{GeneratorConfig, MAX_GRID_SIZE};
use relief_datagen::domain::statistics::DatasetStatistics;
use relief_datagen::error::Error;
use relief_datagen::generate_dataset;
use relief_datagen::loader::parser::{load_batch_config, load_scenario, parse_json_file, write_json_file};

/// A fresh directory under the system temp dir, unique per test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("relief_datagen_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_generate_dataset_writes_loadable_document() {
    let dir = scratch_dir("write");
    let output = dir.join("nested").join("small_dataset.json");
    let config = GeneratorConfig::new(20, 3, &output);

    let statistics = generate_dataset(&config).unwrap();
    let scenario = load_scenario(&output).unwrap();

    assert_eq!(statistics, DatasetStatistics::from_scenario(&scenario));
    assert_eq!(statistics.node_count, 21);
    assert_eq!(statistics.location_count, 20);
    assert_eq!(statistics.vehicle_count, 3);
    assert_eq!(
        statistics.high_priority + statistics.medium_priority + statistics.low_priority,
        statistics.location_count
    );

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("{\n  \"nodes\": ["));
    for key in ["\"edges\"", "\"vehicles\"", "\"reliability\"", "\"priority\"", "\"capacity\""] {
        assert!(text.contains(key), "missing key {}", key);
    }

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_repeated_runs_write_identical_bytes() {
    let dir = scratch_dir("determinism");
    let first = dir.join("first.json");
    let second = dir.join("second.json");

    generate_dataset(&GeneratorConfig::new(50, 5, &first)).unwrap();
    generate_dataset(&GeneratorConfig::new(50, 5, &second)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = scratch_dir("invalid");
    let output = dir.join("never.json");

    let result = generate_dataset(&GeneratorConfig::new(20, 0, &output));
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_huge_grid_is_rejected_before_writing() {
    let dir = scratch_dir("huge_grid");
    let output = dir.join("huge.json");

    let result = generate_dataset(&GeneratorConfig::new(5, 1, &output).with_grid_size(1.0e308));
    assert!(matches!(result, Err(Error::InvalidParameter(_))));
    assert!(!output.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_largest_grid_round_trips() {
    let dir = scratch_dir("largest_grid");
    let output = dir.join("largest.json");
    let config = GeneratorConfig::new(30, 2, &output).with_grid_size(MAX_GRID_SIZE);

    generate_dataset(&config).unwrap();
    let scenario = load_scenario(&output).unwrap();
    assert!(scenario.roads.iter().all(|r| r.cost.is_finite()));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_rejects_tampered_dataset() {
    let dir = scratch_dir("tampered");
    let output = dir.join("dataset.json");
    generate_dataset(&GeneratorConfig::new(10, 2, &output)).unwrap();

    let mut dto: DatasetDto = parse_json_file(&output).unwrap();
    dto.edges.push(dto.edges[0].clone());
    write_json_file(&output, &dto).unwrap();

    assert!(matches!(load_scenario(&output), Err(Error::InvalidDataset(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_reports_io_and_parse_errors() {
    let dir = scratch_dir("errors");

    assert!(matches!(load_scenario(dir.join("missing.json")), Err(Error::IoError(_))));

    let garbage = dir.join("garbage.json");
    fs::write(&garbage, "{ \"nodes\": [").unwrap();
    assert!(matches!(load_scenario(&garbage), Err(Error::SerializationError(_))));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_batch_config_drives_generation() {
    let dir = scratch_dir("batch");
    let batch_file = dir.join("batch.json");
    let out_a = dir.join("a.json");
    let out_b = dir.join("b.json");
    fs::write(
        &batch_file,
        format!(
            r#"{{ "datasets": [
                {{ "numNodes": 8, "numVehicles": 2, "outputFile": {:?} }},
                {{ "numNodes": 16, "numVehicles": 3, "seed": 5, "edgeDensity": 0.6, "outputFile": {:?} }}
            ] }}"#,
            out_a.to_str().unwrap(),
            out_b.to_str().unwrap()
        ),
    )
    .unwrap();

    let configs = load_batch_config(&batch_file).unwrap();
    assert_eq!(configs.len(), 2);
    assert_eq!(configs[1].seed, 5);
    assert_eq!(configs[1].edge_density, 0.6);

    for config in &configs {
        generate_dataset(config).unwrap();
    }
    assert_eq!(load_scenario(&out_a).unwrap().locations.len(), 9);
    assert_eq!(load_scenario(&out_b).unwrap().vehicles.len(), 3);

    fs::remove_dir_all(&dir).unwrap();
}
