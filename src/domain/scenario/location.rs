use crate::api::dataset_dto::NodeDto;
use crate::domain::utils::geometry::Point;
use crate::domain::utils::id::NodeId;

/// Highest urgency a disaster location can carry.
pub const MAX_PRIORITY: u8 = 5;

/// A node of the scenario: either the depot or a disaster-affected location.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: NodeId,
    pub demand: u32,
    pub priority: u8,
    pub position: Point,
}

impl Location {
    pub fn new(id: NodeId, demand: u32, priority: u8, position: Point) -> Self {
        Self { id, demand, priority, position }
    }

    /// The depot sits at the grid midpoint and has neither demand nor priority.
    pub fn depot(grid_size: f64) -> Self {
        Self::new(NodeId::DEPOT, 0, 0, Point::new(grid_size / 2.0, grid_size / 2.0))
    }

    pub fn is_depot(&self) -> bool {
        self.id.is_depot()
    }

    pub fn priority_band(&self) -> Option<PriorityBand> {
        PriorityBand::from_priority(self.priority)
    }

    pub fn from_dto(dto: &NodeDto) -> Self {
        Self::new(NodeId::new(dto.id), dto.demand, dto.priority, Point::new(dto.x, dto.y))
    }
}

impl From<&Location> for NodeDto {
    fn from(location: &Location) -> Self {
        NodeDto {
            id: location.id.value(),
            demand: location.demand,
            priority: location.priority,
            x: location.position.x,
            y: location.position.y,
        }
    }
}

/// Coarse urgency classes used when summarising a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityBand {
    /// Priority 4-5.
    High,
    /// Priority 3.
    Medium,
    /// Priority 1-2.
    Low,
}

impl PriorityBand {
    /// `None` for priority 0 (the depot) and anything out of range.
    pub fn from_priority(priority: u8) -> Option<Self> {
        match priority {
            4..=MAX_PRIORITY => Some(PriorityBand::High),
            3 => Some(PriorityBand::Medium),
            1 | 2 => Some(PriorityBand::Low),
            _ => None,
        }
    }
}
