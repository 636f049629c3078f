//! Distance and proximity queries.
//!
//! These are the hot-path helpers: straight-line arithmetic over two
//! positions, with squared variants so range checks can skip the square
//! root entirely.

use super::position::Position;

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: &Position, p2: &Position) -> f64 {
    (p1.coords - p2.coords).norm()
}

/// Squared Euclidean distance between two points.
///
/// Avoids the square root when only a comparison is needed.
#[inline]
pub fn distance_squared(p1: &Position, p2: &Position) -> f64 {
    (p1.coords - p2.coords).norm_squared()
}

/// Distance in the x/z plane, ignoring the vertical component.
#[inline]
pub fn horizontal_distance(p1: &Position, p2: &Position) -> f64 {
    horizontal_distance_squared(p1, p2).sqrt()
}

/// Squared distance in the x/z plane.
#[inline]
pub fn horizontal_distance_squared(p1: &Position, p2: &Position) -> f64 {
    let dx = p1.coords.x - p2.coords.x;
    let dz = p1.coords.z - p2.coords.z;
    dx * dx + dz * dz
}

/// True iff `p2` lies within `radius` of `p1`.
///
/// The boundary is inclusive: a point exactly `radius` away counts as close.
#[inline]
pub fn is_close(p1: &Position, p2: &Position, radius: f64) -> bool {
    distance_squared(p1, p2) <= radius * radius
}

/// Horizontal-plane variant of [`is_close`].
#[inline]
pub fn is_close_horizontal(p1: &Position, p2: &Position, radius: f64) -> bool {
    horizontal_distance_squared(p1, p2) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Position::new(12.5, -3.0, 700.25);
        assert_eq!(distance(&p, &p), 0.0);
        assert_eq!(distance_squared(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_pythagorean_triple() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);

        assert_relative_eq!(distance(&a, &b), 5.0, epsilon = 1e-12);
        assert_relative_eq!(distance_squared(&a, &b), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = Position::new(1.0, 2.0, 3.0);
        let b = Position::new(-4.0, 0.5, 9.0);

        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance_squared(&a, &b), distance_squared(&b, &a));
    }

    #[test]
    fn test_distance_squared_matches_square_of_distance() {
        let a = Position::new(0.3, -1.7, 2.9);
        let b = Position::new(5.1, 4.4, -6.2);

        let d = distance(&a, &b);
        assert_relative_eq!(distance_squared(&a, &b), d * d, epsilon = 1e-12);
    }

    #[test]
    fn test_horizontal_distance_ignores_y() {
        let a = Position::new(0.0, 5.0, 0.0);
        let b = Position::new(0.0, -100.0, 0.0);
        assert_eq!(horizontal_distance(&a, &b), 0.0);

        // Shifting either endpoint vertically must not change the result
        let c = Position::new(3.0, 0.0, 4.0);
        let c_raised = Position::new(3.0, 55.0, 4.0);
        let origin = Position::new(0.0, -8.0, 0.0);

        assert_relative_eq!(horizontal_distance(&origin, &c), 5.0, epsilon = 1e-12);
        assert_eq!(
            horizontal_distance(&origin, &c),
            horizontal_distance(&origin, &c_raised)
        );
    }

    #[test]
    fn test_horizontal_distance_squared_skips_sqrt() {
        let a = Position::new(1.0, 9.0, 1.0);
        let b = Position::new(4.0, -9.0, 5.0);

        let d = horizontal_distance(&a, &b);
        assert_relative_eq!(horizontal_distance_squared(&a, &b), d * d, epsilon = 1e-12);
    }

    #[test]
    fn test_is_close_boundary_is_inclusive() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 0.0);

        assert!(is_close(&a, &b, 5.0));
        assert!(is_close(&a, &b, 5.1));
        assert!(!is_close(&a, &b, 4.9));
    }

    #[test]
    fn test_is_close_matches_squared_comparison() {
        let a = Position::new(1.0, -2.0, 3.5);
        let b = Position::new(-0.5, 7.0, 2.0);

        for radius in [0.0, 1.0, 9.3, 100.0] {
            assert_eq!(
                is_close(&a, &b, radius),
                distance_squared(&a, &b) <= radius * radius
            );
        }
    }

    #[test]
    fn test_is_close_horizontal_ignores_altitude_gap() {
        let ground = Position::new(10.0, 0.0, 10.0);
        let aircraft = Position::new(11.0, 500.0, 10.0);

        assert!(is_close_horizontal(&ground, &aircraft, 2.0));
        assert!(!is_close(&ground, &aircraft, 2.0));
    }

    #[test]
    fn test_is_close_horizontal_equals_is_close_at_same_y() {
        let a = Position::new(2.0, 7.0, -3.0);
        let b = Position::new(-1.0, 7.0, 4.0);

        for radius in [0.0, 2.0, 7.6, 50.0] {
            assert_eq!(
                is_close(&a, &b, radius),
                is_close_horizontal(&a, &b, radius)
            );
        }
    }

    #[test]
    fn test_negative_radius_acts_as_magnitude() {
        // radius enters squared, so the sign drops out
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(0.0, 0.0, 4.0);

        assert!(is_close(&a, &b, -5.0));
        assert!(!is_close(&a, &b, -3.0));
    }
}
