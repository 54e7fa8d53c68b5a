/// Constrain `value` into `[min, max]`.
///
/// An inverted range (`max < min`) happens whenever the viewport is smaller
/// than the minimum modal size. In that case `min` wins, so callers always get
/// a usable number back.
pub fn clamp<T: Ord + Copy>(min: T, max: T, value: T) -> T {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_inside_range_is_untouched() {
        assert_eq!(clamp(0, 10, 4), 4);
        assert_eq!(clamp(0, 10, 0), 0);
        assert_eq!(clamp(0, 10, 10), 10);
    }

    #[test]
    fn value_outside_range_snaps_to_nearest_bound() {
        assert_eq!(clamp(0, 10, -3), 0);
        assert_eq!(clamp(0, 10, 42), 10);
    }

    #[test]
    fn inverted_range_returns_min() {
        // viewport 400 wide, modal 500 wide: max = -100
        assert_eq!(clamp(0, -100, 900), 0);
        assert_eq!(clamp(0, -100, -500), 0);
        assert_eq!(clamp(200, 150, 180), 200);
    }

    #[test]
    fn result_always_within_bounds_when_range_is_valid() {
        for v in -50..50 {
            let r = clamp(-10, 10, v);
            assert!((-10..=10).contains(&r));
        }
    }
}
