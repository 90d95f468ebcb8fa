use glam::DVec3;

/// Linear interpolation between `a` and `b`.
///
/// `t` is not clamped: values outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Returns `v` scaled to unit length, or `v` unchanged when its length is zero.
///
/// Unlike [`DVec3::normalize`] this never produces NaN for a zero vector.
#[inline]
#[must_use]
pub fn normalize_or_self(v: DVec3) -> DVec3 {
    let len = v.length();
    if len > 0.0 { v * (1.0 / len) } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp(-1.0, 1.0, 0.0), -1.0);
        assert_eq!(lerp(-1.0, 1.0, 1.0), 1.0);
        assert_eq!(lerp(-1.0, 1.0, 0.5), 0.0);
    }

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(lerp(0.0, 2.0, 1.5), 3.0);
        assert_eq!(lerp(0.0, 2.0, -0.5), -1.0);
    }

    #[test]
    fn test_lerp_inverted_range() {
        assert_eq!(lerp(1.0, 0.0, 0.25), 0.75);
    }

    #[test]
    fn test_normalize_produces_unit_length() {
        let n = normalize_or_self(DVec3::new(3.0, -4.0, 12.0));
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n - DVec3::new(3.0, -4.0, 12.0) / 13.0).length() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_is_unchanged() {
        let n = normalize_or_self(DVec3::ZERO);
        assert_eq!(n, DVec3::ZERO);
        assert!(!n.x.is_nan());
    }
}
