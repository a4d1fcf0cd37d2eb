use std::fmt;

use crate::domain::scenario::{PriorityBand, Scenario};

const RULE_WIDTH: usize = 70;

/// Descriptive summary of a scenario. Purely informational: it is printed,
/// never written into the dataset document.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStatistics {
    /// All nodes, depot included.
    pub node_count: usize,
    pub location_count: usize,
    pub edge_count: usize,
    pub vehicle_count: usize,
    pub avg_edges_per_node: f64,
    pub high_priority: usize,
    pub medium_priority: usize,
    pub low_priority: usize,
    pub total_demand: u64,
    pub total_capacity: u64,
    /// Fleet capacity as a percentage of total demand. `None` without demand.
    pub coverage_percent: Option<f64>,
    /// `None` when the scenario has no roads.
    pub avg_reliability: Option<f64>,
    pub damaged_roads: usize,
}

impl DatasetStatistics {
    pub fn from_scenario(scenario: &Scenario) -> Self {
        let node_count = scenario.locations.len();
        let edge_count = scenario.roads.len();

        let avg_edges_per_node = if node_count == 0 { 0.0 } else { (edge_count * 2) as f64 / node_count as f64 };

        let (mut high_priority, mut medium_priority, mut low_priority) = (0, 0, 0);
        for band in scenario.locations.iter().filter_map(|l| l.priority_band()) {
            match band {
                PriorityBand::High => high_priority += 1,
                PriorityBand::Medium => medium_priority += 1,
                PriorityBand::Low => low_priority += 1,
            }
        }

        let total_demand = scenario.total_demand();
        let total_capacity = scenario.total_capacity();
        let coverage_percent = (total_demand > 0).then(|| total_capacity as f64 / total_demand as f64 * 100.0);

        let avg_reliability =
            (edge_count > 0).then(|| scenario.roads.iter().map(|r| r.reliability).sum::<f64>() / edge_count as f64);

        Self {
            node_count,
            location_count: scenario.disaster_locations().count(),
            edge_count,
            vehicle_count: scenario.vehicles.len(),
            avg_edges_per_node,
            high_priority,
            medium_priority,
            low_priority,
            total_demand,
            total_capacity,
            coverage_percent,
            avg_reliability,
            damaged_roads: scenario.roads.iter().filter(|r| r.is_damaged()).count(),
        }
    }
}

impl fmt::Display for DatasetStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "{}", rule)?;
        writeln!(f, "DATASET STATISTICS")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total Locations: {} (+ 1 depot)", self.location_count)?;
        writeln!(f, "Total Roads: {}", self.edge_count)?;
        writeln!(f, "Vehicles: {}", self.vehicle_count)?;
        writeln!(f, "Average Edges per Node: {:.1}", self.avg_edges_per_node)?;

        writeln!(f)?;
        writeln!(f, "Priority Distribution:")?;
        writeln!(f, "  High Priority (4-5): {} locations", self.high_priority)?;
        writeln!(f, "  Medium Priority (3): {} locations", self.medium_priority)?;
        writeln!(f, "  Low Priority (1-2): {} locations", self.low_priority)?;

        writeln!(f)?;
        writeln!(f, "Resource Requirements:")?;
        writeln!(f, "  Total Demand: {} units", self.total_demand)?;
        writeln!(f, "  Total Vehicle Capacity: {} units", self.total_capacity)?;
        match self.coverage_percent {
            Some(coverage) => writeln!(f, "  Coverage: {:.1}%", coverage)?,
            None => writeln!(f, "  Coverage: n/a (no demand)")?,
        }

        writeln!(f)?;
        writeln!(f, "Road Quality:")?;
        match self.avg_reliability {
            Some(reliability) => writeln!(f, "  Average Reliability: {:.2}", reliability)?,
            None => writeln!(f, "  Average Reliability: n/a (no roads)")?,
        }
        writeln!(f, "  Damaged Roads (<0.8): {}", self.damaged_roads)?;
        write!(f, "{}", rule)
    }
}
