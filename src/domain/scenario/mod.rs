//! Typed, validated view of a relief scenario: locations (with the depot as
//! node 0), roads between them, and the rescue fleet.

pub mod location;
pub mod road;
pub mod scenario;
pub mod vehicle;

pub use location::{Location, PriorityBand};
pub use road::{Road, RoadKey};
pub use scenario::Scenario;
pub use vehicle::Vehicle;
