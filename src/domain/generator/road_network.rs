use std::collections::HashSet;
use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::domain::scenario::{Location, Road, RoadKey};
use crate::domain::utils::geometry::round2;
use crate::domain::utils::id::NodeId;

pub const DEPOT_RELIABILITY: RangeInclusive<f64> = 0.75..=0.95;
pub const NEIGHBOUR_RELIABILITY: RangeInclusive<f64> = 0.7..=1.0;
pub const HIGHWAY_RELIABILITY: RangeInclusive<f64> = 0.85..=0.98;

/// Number of nearest neighbours considered per node.
pub const NEIGHBOUR_COUNT: RangeInclusive<usize> = 2..=4;

/// Added to the configured edge density when deciding whether to keep a neighbour road.
pub const EDGE_DENSITY_BOOST: f64 = 0.4;

/// Highways are faster, so their cost is a fraction of the straight-line distance.
pub const HIGHWAY_COST_FACTOR: f64 = 0.8;
pub const MIN_HIGHWAYS: usize = 3;
pub const LOCATIONS_PER_HIGHWAY: usize = 8;

/// Which construction pass produced a road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoadKind {
    Depot,
    Neighbour,
    Highway,
}

/// Accumulates roads in insertion order and rejects repeated endpoint pairs.
#[derive(Debug, Default)]
struct RoadNetworkBuilder {
    roads: Vec<(RoadKind, Road)>,
    keys: HashSet<RoadKey>,
}

impl RoadNetworkBuilder {
    fn contains(&self, key: &RoadKey) -> bool {
        self.keys.contains(key)
    }

    fn insert(&mut self, kind: RoadKind, key: RoadKey, cost: f64, reliability: f64) -> bool {
        if !self.keys.insert(key) {
            return false;
        }
        self.roads.push((kind, Road::new(key, round2(cost), round2(reliability))));
        true
    }

    fn count(&self, kind: RoadKind) -> usize {
        self.roads.iter().filter(|(k, _)| *k == kind).count()
    }
}

/// Builds the road network over `locations`, whose first entry must be the depot.
///
/// Three passes, in order: a direct road from every location to the depot,
/// roads to 2-4 nearest neighbours kept with probability `edge_density + 0.4`,
/// and a handful of random long-distance highways between disaster locations.
pub fn build_roads<R: Rng>(locations: &[Location], edge_density: f64, rng: &mut R) -> Vec<Road> {
    let network = build_network(locations, edge_density, rng);
    debug!(
        "Road network: {} depot roads, {} neighbour roads, {} highways.",
        network.count(RoadKind::Depot),
        network.count(RoadKind::Neighbour),
        network.count(RoadKind::Highway)
    );
    network.roads.into_iter().map(|(_, road)| road).collect()
}

fn build_network<R: Rng>(locations: &[Location], edge_density: f64, rng: &mut R) -> RoadNetworkBuilder {
    let mut network = RoadNetworkBuilder::default();
    let Some(depot) = locations.first() else {
        return network;
    };
    let acceptance = (edge_density + EDGE_DENSITY_BOOST).clamp(0.0, 1.0);

    for location in locations {
        let neighbours = nearest_first(locations, location);

        if !location.is_depot() {
            let reliability = rng.random_range(DEPOT_RELIABILITY);
            if let Some(key) = RoadKey::new(NodeId::DEPOT, location.id) {
                network.insert(RoadKind::Depot, key, location.position.distance_to(&depot.position), reliability);
            }
        }

        let k = rng.random_range(NEIGHBOUR_COUNT);
        for &(neighbour, distance) in neighbours.iter().take(k) {
            if !rng.random_bool(acceptance) {
                continue;
            }
            let reliability = rng.random_range(NEIGHBOUR_RELIABILITY);
            if let Some(key) = RoadKey::new(location.id, neighbour) {
                network.insert(RoadKind::Neighbour, key, distance, reliability);
            }
        }
    }

    add_highways(locations, &mut network, rng);

    network
}

/// Every other location with its distance, closest first. Ties keep id order.
fn nearest_first(locations: &[Location], from: &Location) -> Vec<(NodeId, f64)> {
    let mut distances: Vec<(NodeId, f64)> = locations
        .iter()
        .filter(|other| other.id != from.id)
        .map(|other| (other.id, from.position.distance_to(&other.position)))
        .collect();
    distances.sort_by(|a, b| a.1.total_cmp(&b.1));
    distances
}

/// Number of highway attempts for a map with `num_locations` disaster locations.
pub fn highway_attempts(num_locations: usize) -> usize {
    MIN_HIGHWAYS.max(num_locations / LOCATIONS_PER_HIGHWAY)
}

fn add_highways<R: Rng>(locations: &[Location], network: &mut RoadNetworkBuilder, rng: &mut R) {
    let num_locations = locations.len().saturating_sub(1);
    if num_locations == 0 {
        return;
    }

    for attempt in 0..highway_attempts(num_locations) {
        let a = rng.random_range(1..=num_locations);
        let b = rng.random_range(1..=num_locations);

        let Some(key) = RoadKey::new(NodeId::new(a), NodeId::new(b)) else {
            debug!("Highway attempt {} drew a self-loop at node {}, skipping.", attempt, a);
            continue;
        };
        if network.contains(&key) {
            debug!("Highway attempt {} hit existing road ({}, {}), skipping.", attempt, key.u(), key.v());
            continue;
        }

        let distance = locations[a].position.distance_to(&locations[b].position);
        let reliability = rng.random_range(HIGHWAY_RELIABILITY);
        network.insert(RoadKind::Highway, key, distance * HIGHWAY_COST_FACTOR, reliability);
    }
}
