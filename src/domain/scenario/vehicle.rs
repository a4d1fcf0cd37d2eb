use crate::api::dataset_dto::VehicleDto;
use crate::domain::utils::id::VehicleId;

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub capacity: u32,
}

impl Vehicle {
    pub fn new(id: VehicleId, capacity: u32) -> Self {
        Self { id, capacity }
    }
}

impl From<&Vehicle> for VehicleDto {
    fn from(vehicle: &Vehicle) -> Self {
        VehicleDto { id: vehicle.id.value(), capacity: vehicle.capacity }
    }
}
