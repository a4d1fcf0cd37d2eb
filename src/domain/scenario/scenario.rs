use std::collections::HashSet;

use crate::api::dataset_dto::{DatasetDto, EdgeDto, NodeDto, VehicleDto};
use crate::domain::scenario::location::{Location, MAX_PRIORITY};
use crate::domain::scenario::road::{Road, RoadKey};
use crate::domain::scenario::vehicle::Vehicle;
use crate::domain::utils::id::{NodeId, VehicleId};
use crate::error::{Error, Result};

/// A complete relief scenario. Built once, written out, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub locations: Vec<Location>,
    pub roads: Vec<Road>,
    pub vehicles: Vec<Vehicle>,
}

impl Scenario {
    /// Builds a scenario from a parsed document and checks every dataset invariant.
    pub fn from_dto(dto: DatasetDto) -> Result<Self> {
        let locations: Vec<Location> = dto.nodes.iter().map(Location::from_dto).collect();

        let mut roads = Vec::with_capacity(dto.edges.len());
        for edge in &dto.edges {
            let key = match RoadKey::new(NodeId::new(edge.u), NodeId::new(edge.v)) {
                Some(key) if key.u().value() == edge.u => key,
                _ => {
                    return Err(Error::InvalidDataset(format!("edge ({}, {}) is not in canonical u < v order", edge.u, edge.v)));
                }
            };
            roads.push(Road::new(key, edge.cost, edge.reliability));
        }

        let vehicles = dto.vehicles.iter().map(|v| Vehicle::new(VehicleId::new(v.id), v.capacity)).collect();

        let scenario = Scenario { locations, roads, vehicles };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn to_dto(&self) -> DatasetDto {
        DatasetDto::from(self)
    }

    pub fn depot(&self) -> Option<&Location> {
        self.locations.first().filter(|location| location.is_depot())
    }

    /// Disaster locations, i.e. every node except the depot.
    pub fn disaster_locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.iter().filter(|location| !location.is_depot())
    }

    pub fn total_demand(&self) -> u64 {
        self.locations.iter().map(|l| u64::from(l.demand)).sum()
    }

    pub fn total_capacity(&self) -> u64 {
        self.vehicles.iter().map(|v| u64::from(v.capacity)).sum()
    }

    /// Checks the structural invariants every dataset must satisfy.
    pub fn validate(&self) -> Result<()> {
        self.validate_locations()?;
        self.validate_roads()?;
        self.validate_vehicles()
    }

    fn validate_locations(&self) -> Result<()> {
        let depot = self.depot().ok_or_else(|| Error::InvalidDataset("first node must be the depot (id 0)".to_string()))?;
        if depot.demand != 0 || depot.priority != 0 {
            return Err(Error::InvalidDataset(format!(
                "depot must have demand 0 and priority 0, found demand {} and priority {}",
                depot.demand, depot.priority
            )));
        }

        for (index, location) in self.locations.iter().enumerate() {
            if location.id.value() != index {
                return Err(Error::InvalidDataset(format!("node at position {} has id {}, ids must be contiguous from 0", index, location.id)));
            }
            if !location.position.x.is_finite() || !location.position.y.is_finite() {
                return Err(Error::InvalidDataset(format!("node {} has non-finite coordinates", location.id)));
            }
            if location.is_depot() {
                continue;
            }
            if !(1..=MAX_PRIORITY).contains(&location.priority) {
                return Err(Error::InvalidDataset(format!("node {} has priority {} outside 1-{}", location.id, location.priority, MAX_PRIORITY)));
            }
            if location.demand == 0 {
                return Err(Error::InvalidDataset(format!("node {} has no demand", location.id)));
            }
        }
        Ok(())
    }

    fn validate_roads(&self) -> Result<()> {
        let node_count = self.locations.len();
        let mut seen: HashSet<RoadKey> = HashSet::with_capacity(self.roads.len());
        let mut connected: HashSet<NodeId> = HashSet::with_capacity(node_count);

        for road in &self.roads {
            let (u, v) = (road.key.u(), road.key.v());
            if v.value() >= node_count {
                return Err(Error::InvalidDataset(format!("edge ({}, {}) references unknown node {}", u, v, v)));
            }
            if !seen.insert(road.key) {
                return Err(Error::InvalidDataset(format!("duplicate edge ({}, {})", u, v)));
            }
            if !road.cost.is_finite() || road.cost < 0.0 {
                return Err(Error::InvalidDataset(format!("edge ({}, {}) has invalid cost {}", u, v, road.cost)));
            }
            if !(road.reliability > 0.0 && road.reliability <= 1.0) {
                return Err(Error::InvalidDataset(format!("edge ({}, {}) has reliability {} outside (0, 1]", u, v, road.reliability)));
            }
            connected.insert(u);
            connected.insert(v);
        }

        if let Some(isolated) = self.disaster_locations().find(|l| !connected.contains(&l.id)) {
            return Err(Error::InvalidDataset(format!("node {} has no incident edge", isolated.id)));
        }
        Ok(())
    }

    fn validate_vehicles(&self) -> Result<()> {
        for (index, vehicle) in self.vehicles.iter().enumerate() {
            if vehicle.id.value() != index + 1 {
                return Err(Error::InvalidDataset(format!("vehicle at position {} has id {}, ids must be contiguous from 1", index, vehicle.id)));
            }
            if vehicle.capacity == 0 {
                return Err(Error::InvalidDataset(format!("vehicle {} has no capacity", vehicle.id)));
            }
        }
        Ok(())
    }
}

impl From<&Scenario> for DatasetDto {
    fn from(scenario: &Scenario) -> Self {
        DatasetDto {
            nodes: scenario.locations.iter().map(NodeDto::from).collect(),
            edges: scenario.roads.iter().map(EdgeDto::from).collect(),
            vehicles: scenario.vehicles.iter().map(VehicleDto::from).collect(),
        }
    }
}
