pub mod generator;
pub mod scenario;
pub mod statistics;
pub mod utils;
