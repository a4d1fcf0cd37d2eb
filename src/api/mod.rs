pub mod config_dto;
pub mod dataset_dto;
