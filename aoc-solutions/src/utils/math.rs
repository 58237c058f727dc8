//! Numeric helpers

/// Real roots of `0 = ax² + bx + c`, smallest first
///
/// Returns `None` when `a` is zero or there is no real root.
///
/// ```
/// use aoc_solutions::utils::math::quadratic_roots;
///
/// assert_eq!(quadratic_roots(1.0, -3.0, 2.0), Some((1.0, 2.0)));
/// assert_eq!(quadratic_roots(1.0, 0.0, 1.0), None);
/// ```
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
    let discriminant = b * b - 4.0 * a * c;
    if a == 0.0 || discriminant < 0.0 {
        return None;
    }
    let sqrt = discriminant.sqrt();
    let x1 = (-b - sqrt) / (2.0 * a);
    let x2 = (-b + sqrt) / (2.0 * a);
    Some((x1.min(x2), x1.max(x2)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_double_root() {
        assert_eq!(quadratic_roots(1.0, -4.0, 4.0), Some((2.0, 2.0)));
    }

    #[test]
    fn test_negative_leading_coefficient() {
        // -x² + 7x - 10 = 0 at 2 and 5
        assert_eq!(quadratic_roots(-1.0, 7.0, -10.0), Some((2.0, 5.0)));
    }

    #[test]
    fn test_not_quadratic() {
        assert_eq!(quadratic_roots(0.0, 2.0, 1.0), None);
    }

    proptest! {
        /// *For any* two integer roots, expanding `(x - r1)(x - r2)` and solving
        /// gives them back in order.
        #[test]
        fn prop_roots_of_expanded_product(r1 in -1000i32..1000, r2 in -1000i32..1000) {
            let (r1, r2) = (f64::from(r1), f64::from(r2));
            let (lo, hi) = quadratic_roots(1.0, -(r1 + r2), r1 * r2).unwrap();
            prop_assert!((lo - r1.min(r2)).abs() < 1e-6);
            prop_assert!((hi - r1.max(r2)).abs() < 1e-6);
        }
    }
}
