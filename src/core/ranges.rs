use itertools::Itertools;

use crate::core::hour::Hour;

/// Merge hour labels into minimal contiguous ranges.
///
/// Ranges are sorted ascending and joined with `", "`. A single hour renders
/// as `"HH:00"`, a longer run as `"HH:00-HH:00"` with an exclusive end label,
/// so a run ending at hour 23 ends at `"00:00"`.
pub fn compress_hours(hours: impl IntoIterator<Item = Hour>) -> String {
    let mut hours = hours.into_iter().sorted_unstable().dedup();
    let Some(first) = hours.next() else {
        return String::new();
    };

    let mut ranges = Vec::new();
    let (mut start, mut end) = (first, first);
    for hour in hours {
        if hour.get() == end.get() + 1 {
            end = hour;
        } else {
            ranges.push(render_run(start, end));
            (start, end) = (hour, hour);
        }
    }
    ranges.push(render_run(start, end));
    ranges.join(", ")
}

fn render_run(start: Hour, end: Hour) -> String {
    if start == end { format!("{start}:00") } else { format!("{start}:00-{}:00", end.succ()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(raw: &[u8]) -> Vec<Hour> {
        raw.iter().map(|hour| Hour::new(*hour).unwrap()).collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(compress_hours(hours(&[])), "");
    }

    #[test]
    fn test_run_and_single() {
        assert_eq!(compress_hours(hours(&[0, 1, 2, 5])), "00:00-03:00, 05:00");
    }

    #[test]
    fn test_unsorted_input() {
        assert_eq!(compress_hours(hours(&[5, 0, 2, 1])), "00:00-03:00, 05:00");
    }

    #[test]
    fn test_single_hour_23_does_not_wrap() {
        assert_eq!(compress_hours(hours(&[23])), "23:00");
    }

    #[test]
    fn test_run_ending_at_23_wraps() {
        assert_eq!(compress_hours(hours(&[22, 23])), "22:00-00:00");
    }

    #[test]
    fn test_no_cross_midnight_merge() {
        assert_eq!(compress_hours(hours(&[22, 23, 0])), "00:00, 22:00-00:00");
    }
}
