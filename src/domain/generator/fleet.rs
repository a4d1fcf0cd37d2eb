use std::ops::RangeInclusive;

use rand::Rng;

use crate::domain::scenario::Vehicle;
use crate::domain::utils::id::VehicleId;

pub const BASE_CAPACITY: u32 = 10;
pub const CAPACITY_SPREAD: RangeInclusive<u32> = 0..=10;

/// Vehicles `1..=count`, each with a capacity in `[10, 20]`.
pub fn build_fleet<R: Rng>(count: usize, rng: &mut R) -> Vec<Vehicle> {
    (1..=count).map(|id| Vehicle::new(VehicleId::new(id), BASE_CAPACITY + rng.random_range(CAPACITY_SPREAD))).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_fleet_ids_and_capacity() {
        let mut rng = StdRng::seed_from_u64(42);
        let fleet = build_fleet(50, &mut rng);

        assert_eq!(fleet.len(), 50);
        for (index, vehicle) in fleet.iter().enumerate() {
            assert_eq!(vehicle.id.value(), index + 1);
            assert!((10..=20).contains(&vehicle.capacity));
        }
    }

    #[test]
    fn test_empty_fleet() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_fleet(0, &mut rng).is_empty());
    }
}
