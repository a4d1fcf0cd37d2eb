use crate::api::dataset_dto::EdgeDto;
use crate::domain::utils::id::NodeId;

/// Roads below this reliability count as damaged in reports.
pub const DAMAGED_RELIABILITY_THRESHOLD: f64 = 0.8;

/// Canonical key of an undirected road: the smaller endpoint always comes first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoadKey {
    u: NodeId,
    v: NodeId,
}

impl RoadKey {
    /// Orders the endpoints. Returns `None` for a self-loop.
    pub fn new(a: NodeId, b: NodeId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { u: a, v: b }),
            std::cmp::Ordering::Greater => Some(Self { u: b, v: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn u(&self) -> NodeId {
        self.u
    }

    pub fn v(&self) -> NodeId {
        self.v
    }

    pub fn touches(&self, node: NodeId) -> bool {
        self.u == node || self.v == node
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Road {
    pub key: RoadKey,
    pub cost: f64,
    pub reliability: f64,
}

impl Road {
    pub fn new(key: RoadKey, cost: f64, reliability: f64) -> Self {
        Self { key, cost, reliability }
    }

    pub fn is_damaged(&self) -> bool {
        self.reliability < DAMAGED_RELIABILITY_THRESHOLD
    }
}

impl From<&Road> for EdgeDto {
    fn from(road: &Road) -> Self {
        EdgeDto {
            u: road.key.u().value(),
            v: road.key.v().value(),
            cost: road.cost,
            reliability: road.reliability,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_canonical() {
        let forward = RoadKey::new(NodeId::new(2), NodeId::new(9)).unwrap();
        let backward = RoadKey::new(NodeId::new(9), NodeId::new(2)).unwrap();
        assert_eq!(forward, backward);
        assert_eq!(forward.u(), NodeId::new(2));
        assert_eq!(forward.v(), NodeId::new(9));
        assert!(forward.touches(NodeId::new(9)));
        assert!(!forward.touches(NodeId::new(3)));
    }

    #[test]
    fn test_self_loop_has_no_key() {
        assert!(RoadKey::new(NodeId::new(4), NodeId::new(4)).is_none());
    }

    #[test]
    fn test_damaged_threshold() {
        let key = RoadKey::new(NodeId::new(0), NodeId::new(1)).unwrap();
        assert!(Road::new(key, 10.0, 0.79).is_damaged());
        assert!(!Road::new(key, 10.0, 0.8).is_damaged());
    }
}
