use serde::{Deserialize, Serialize};

/// On-disk layout of a generated scenario, as read by the external solver.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DatasetDto {
    pub nodes: Vec<NodeDto>,
    pub edges: Vec<EdgeDto>,
    pub vehicles: Vec<VehicleDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct NodeDto {
    pub id: usize,
    pub demand: u32,
    pub priority: u8,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EdgeDto {
    pub u: usize,
    pub v: usize,
    pub cost: f64,
    pub reliability: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VehicleDto {
    pub id: usize,
    pub capacity: u32,
}
