use rand::Rng;

use crate::domain::scenario::Location;
use crate::domain::utils::geometry::Point;
use crate::domain::utils::id::NodeId;

/// Locations keep at least this distance from the grid border.
pub const COORDINATE_MARGIN: f64 = 5.0;

/// Maximum per-axis offset of a clustered location from its base location.
pub const CLUSTER_SPREAD: f64 = 15.0;

/// Priorities are drawn uniformly from this multiset: roughly 30% high (4-5),
/// 40% medium (2-3) and the rest low.
pub const PRIORITY_POOL: [u8; 14] = [5, 5, 4, 4, 4, 3, 3, 3, 3, 2, 2, 2, 1, 1];

pub const MAX_DEMAND: u32 = 8;

/// Places the depot at the grid center followed by `num_nodes` disaster locations.
///
/// Every third location after the third is dropped near an earlier location to
/// mimic disasters that hit neighbouring areas together.
pub fn place_locations<R: Rng>(num_nodes: usize, grid_size: f64, rng: &mut R) -> Vec<Location> {
    let (min, max) = (COORDINATE_MARGIN, grid_size - COORDINATE_MARGIN);

    let mut locations = Vec::with_capacity(num_nodes + 1);
    locations.push(Location::depot(grid_size));

    for index in 1..=num_nodes {
        let raw = if is_cluster_index(index) {
            let base = locations[rng.random_range(1..locations.len())].position;
            Point::new(
                base.x + rng.random_range(-CLUSTER_SPREAD..=CLUSTER_SPREAD),
                base.y + rng.random_range(-CLUSTER_SPREAD..=CLUSTER_SPREAD),
            )
        } else {
            Point::new(rng.random_range(min..=max), rng.random_range(min..=max))
        };

        let priority = PRIORITY_POOL[rng.random_range(0..PRIORITY_POOL.len())];
        let demand = rng.random_range(1..=demand_cap(priority));

        locations.push(Location::new(NodeId::new(index), demand, priority, raw.clamped(min, max).rounded()));
    }

    locations
}

fn is_cluster_index(index: usize) -> bool {
    index > 3 && index % 3 == 0
}

/// Higher priorities allow larger demands, up to `MAX_DEMAND`.
pub fn demand_cap(priority: u8) -> u32 {
    (u32::from(priority) * 2).clamp(1, MAX_DEMAND)
}
