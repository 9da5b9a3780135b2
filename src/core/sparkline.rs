/// Glyph levels from the lowest to the highest.
const BARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a numeric sequence as a single-line glyph trend.
///
/// Each value maps to one of 8 levels proportionally to its position between
/// the sequence minimum and maximum; a flat sequence maps everything to the
/// lowest level. Order is preserved, one glyph per value.
pub fn sparkline(values: impl IntoIterator<Item = f64>) -> String {
    let values: Vec<f64> = values.into_iter().collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let level = |value: f64| {
        if max > min { ((value - min) / (max - min) * 7.0) as usize } else { 0 }
    };
    values.into_iter().map(|value| BARS[level(value)]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(sparkline([]), "");
    }

    #[test]
    fn test_monotonic() {
        assert_eq!(sparkline([1.0, 2.0, 3.0]), "▁▄█");
    }

    #[test]
    fn test_flat() {
        assert_eq!(sparkline([5.0, 5.0, 5.0]), "▁▁▁");
    }

    #[test]
    fn test_preserves_order() {
        assert_eq!(sparkline([3.0, 1.0, 3.0]), "█▁█");
    }
}
