/// Linear count-up: how far a counter heading for `target` has got after
/// `elapsed_ms` of a `duration_ms` animation.
pub fn animated_value(target: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return target;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (f64::from(target) * progress).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::animated_value;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        assert_eq!(animated_value(42, 0.0, 2000.0), 0);
        assert_eq!(animated_value(42, 2000.0, 2000.0), 42);
        assert_eq!(animated_value(42, 9000.0, 2000.0), 42);
    }

    #[test]
    fn progresses_linearly_and_rounds_down() {
        assert_eq!(animated_value(156, 1000.0, 2000.0), 78);
        assert_eq!(animated_value(42, 500.0, 2000.0), 10);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(animated_value(7, -50.0, 2000.0), 0);
        assert_eq!(animated_value(7, 0.0, 0.0), 7);
    }
}
