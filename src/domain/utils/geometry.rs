/// A position on the square scenario grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Clamps both coordinates into `[min, max]`.
    pub fn clamped(self, min: f64, max: f64) -> Self {
        Self::new(self.x.clamp(min, max), self.y.clamp(min, max))
    }

    pub fn rounded(self) -> Self {
        Self::new(round2(self.x), round2(self.y))
    }
}

/// Rounds to two decimal places, the precision of every real number in a dataset.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.5), 2.5);
        assert_eq!(round2(0.996), 1.0);
        assert_eq!(round2(-1.234), -1.23);
    }

    #[test]
    fn test_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
        assert_eq!(b.distance_to(&a), 5.0);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_clamped_and_rounded() {
        let p = Point::new(-3.0, 97.456).clamped(5.0, 95.0);
        assert_eq!(p, Point::new(5.0, 95.0));

        let q = Point::new(12.345_67, 50.0).rounded();
        assert_eq!(q, Point::new(12.35, 50.0));
    }
}
