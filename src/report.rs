use crate::{
    cli::SortBy,
    core::{hour::Hour, prices::HourlyPrices, ranges::compress_hours, sparkline::sparkline},
    fmt::{format_price, trimmed},
};

/// Prices within this tolerance of the minimum or maximum count as extrema.
const EXTREMUM_TOLERANCE: f64 = 1e-5;

/// Diffs within this tolerance of zero count as stable.
const TREND_TOLERANCE: f64 = 1e-4;

/// Build the single-day report: a title, summary statistics, a trend
/// sparkline, and one line per included hour.
pub fn build_report(prices: &HourlyPrices, date: &str, sort_by: Option<SortBy>) -> String {
    let (Some(average), Some(min), Some(max)) =
        (prices.average(), prices.minimum(), prices.maximum())
    else {
        return format!("No price data for {date}.");
    };

    let cheapest =
        prices.iter().filter(|(_, price)| (price - min).abs() < EXTREMUM_TOLERANCE).map(|(hour, _)| hour);
    let expensive =
        prices.iter().filter(|(_, price)| (price - max).abs() < EXTREMUM_TOLERANCE).map(|(hour, _)| hour);

    let mut lines = vec![
        format!(" HOURLY POWER PRICES (DK1) - {date} "),
        format!("Average Price: {} DKK/kWh", format_price(average)),
        format!("Cheapest: {} ({} DKK/kWh)", compress_hours(cheapest), format_price(min)),
        format!("Most Expensive: {} ({} DKK/kWh)", compress_hours(expensive), format_price(max)),
        format!("Trend Sparkline: {}", sparkline(prices.values())),
    ];

    let mut entries: Vec<(Hour, f64)> = prices.iter().collect();
    match sort_by {
        Some(SortBy::Price) => entries.sort_by(|lhs, rhs| lhs.1.total_cmp(&rhs.1)),
        Some(SortBy::PriceDesc) => entries.sort_by(|lhs, rhs| rhs.1.total_cmp(&lhs.1)),
        _ => {}
    }
    for (hour, price) in entries {
        lines.push(format!("{hour}:00 - {}:00 | {} DKK/kWh", hour.succ(), format_price(price)));
    }
    lines.join("\n")
}

/// Day-over-day diff for one hour present in both days.
struct DiffRecord {
    hour: Hour,
    yesterday: f64,
    today: f64,
    diff: f64,
}

/// Build the two-day comparison: summary statistics over the per-hour diffs
/// and a fixed-width table with one row per hour common to both days.
///
/// Either day being empty yields an empty string.
pub fn build_comparison(
    today: &HourlyPrices,
    today_date: &str,
    yesterday: &HourlyPrices,
    yesterday_date: &str,
    sort_by: Option<SortBy>,
) -> String {
    if today.is_empty() || yesterday.is_empty() {
        return String::new();
    }

    let mut records = Vec::new();
    let (mut up, mut down, mut stable) = (0_u32, 0_u32, 0_u32);
    for hour in Hour::all() {
        let (Some(today), Some(yesterday)) = (today.get(hour), yesterday.get(hour)) else {
            continue;
        };
        let diff = today - yesterday;
        if diff > TREND_TOLERANCE {
            up += 1;
        } else if diff < -TREND_TOLERANCE {
            down += 1;
        } else {
            stable += 1;
        }
        records.push(DiffRecord { hour, yesterday, today, diff });
    }

    let mut lines = vec![format!(" PRICE COMPARISON ({today_date} vs {yesterday_date}) ")];
    if !records.is_empty() {
        #[allow(clippy::cast_precision_loss)]
        let average_diff =
            records.iter().map(|record| record.diff).sum::<f64>() / records.len() as f64;
        lines.push(format!("Avg Change: {} DKK/kWh", format_price(average_diff)));
        lines.push(format!("Increased: {up} | Decreased: {down} | Stable: {stable}"));
        lines.push(format!(
            "Trend Sparkline (Diffs): {}",
            sparkline(records.iter().map(|record| record.diff)),
        ));
    }
    lines.push(format!(
        "{:<11} | {:<8} | {:<8} | {:<8} | {:<8} | {:<5}",
        "Hour", "Yest", "Today", "Change", "% Chg", "Trend",
    ));

    match sort_by {
        Some(SortBy::Diff) => records.sort_by(|lhs, rhs| lhs.diff.total_cmp(&rhs.diff)),
        Some(SortBy::DiffDesc) => records.sort_by(|lhs, rhs| rhs.diff.total_cmp(&lhs.diff)),
        _ => {}
    }
    for record in records {
        lines.push(render_row(&record));
    }
    lines.join("\n")
}

fn render_row(record: &DiffRecord) -> String {
    let change = if record.diff >= 0.0 {
        format_price(record.diff)
    } else {
        format!("-{}", format_price(record.diff.abs()))
    };
    #[allow(clippy::float_cmp)]
    let percentage = if record.yesterday == 0.0 {
        "N/A".to_string()
    } else {
        format!("{}%", trimmed(record.diff / record.yesterday * 100.0, 2))
    };
    let trend = if record.diff > TREND_TOLERANCE {
        "▲"
    } else if record.diff < -TREND_TOLERANCE {
        "▼"
    } else {
        "●"
    };
    format!(
        "{:<11} | {:<8} | {:<8} | {:<8} | {:<8} | {:<5}",
        format!("{}:00-{}:00", record.hour, record.hour.succ()),
        format_price(record.yesterday),
        format_price(record.today),
        change,
        percentage,
        trend,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices(raw: &[(u8, f64)]) -> HourlyPrices {
        raw.iter().map(|(hour, price)| (Hour::new(*hour).unwrap(), *price)).collect()
    }

    #[test]
    fn test_report_empty() {
        assert_eq!(
            build_report(&HourlyPrices::default(), "2025/01/01", None),
            "No price data for 2025/01/01.",
        );
    }

    #[test]
    fn test_report_summary_and_body() {
        let report = build_report(&prices(&[(0, 2.0), (1, 1.0)]), "2025/01/01", None);
        let expected = [
            " HOURLY POWER PRICES (DK1) - 2025/01/01 ",
            "Average Price: 1.5 DKK/kWh",
            "Cheapest: 01:00 (1 DKK/kWh)",
            "Most Expensive: 00:00 (2 DKK/kWh)",
            "Trend Sparkline: █▁",
            "00:00 - 01:00 | 2 DKK/kWh",
            "01:00 - 02:00 | 1 DKK/kWh",
        ];
        assert_eq!(report, expected.join("\n"));
    }

    #[test]
    fn test_report_extrema_are_range_compressed() {
        let report = build_report(&prices(&[(0, 1.0), (1, 1.0), (2, 2.0)]), "2025/01/01", None);
        assert!(report.contains("Cheapest: 00:00-02:00 (1 DKK/kWh)"));
        assert!(report.contains("Most Expensive: 02:00 (2 DKK/kWh)"));
    }

    #[test]
    fn test_report_sorted_by_price() {
        let report =
            build_report(&prices(&[(0, 2.0), (1, 1.0), (2, 3.0)]), "2025/01/01", Some(SortBy::Price));
        let body: Vec<&str> = report.lines().skip(5).collect();
        assert_eq!(
            body,
            ["01:00 - 02:00 | 1 DKK/kWh", "00:00 - 01:00 | 2 DKK/kWh", "02:00 - 03:00 | 3 DKK/kWh"],
        );
    }

    #[test]
    fn test_report_price_ties_keep_hour_order() {
        let report = build_report(
            &prices(&[(0, 1.0), (1, 1.0), (2, 0.5)]),
            "2025/01/01",
            Some(SortBy::PriceDesc),
        );
        let body: Vec<&str> = report.lines().skip(5).collect();
        assert_eq!(
            body,
            ["00:00 - 01:00 | 1 DKK/kWh", "01:00 - 02:00 | 1 DKK/kWh", "02:00 - 03:00 | 0.5 DKK/kWh"],
        );
    }

    #[test]
    fn test_comparison_empty_input() {
        let day = prices(&[(0, 1.0)]);
        assert_eq!(build_comparison(&HourlyPrices::default(), "a", &day, "b", None), "");
        assert_eq!(build_comparison(&day, "a", &HourlyPrices::default(), "b", None), "");
    }

    #[test]
    fn test_comparison_increase() {
        let comparison = build_comparison(
            &prices(&[(0, 2.0)]),
            "2025/01/02",
            &prices(&[(0, 1.0)]),
            "2025/01/01",
            None,
        );
        let expected = [
            " PRICE COMPARISON (2025/01/02 vs 2025/01/01) ",
            "Avg Change: 1 DKK/kWh",
            "Increased: 1 | Decreased: 0 | Stable: 0",
            "Trend Sparkline (Diffs): ▁",
            "Hour        | Yest     | Today    | Change   | % Chg    | Trend",
            "00:00-01:00 | 1        | 2        | 1        | 100%     | ▲    ",
        ];
        assert_eq!(comparison, expected.join("\n"));
    }

    #[test]
    fn test_comparison_decrease_renders_signed_change() {
        let comparison = build_comparison(
            &prices(&[(0, 0.5)]),
            "today",
            &prices(&[(0, 2.0)]),
            "yesterday",
            None,
        );
        assert!(comparison.contains("00:00-01:00 | 2        | 0.5      | -1.5     | -75%     | ▼"));
    }

    #[test]
    fn test_comparison_zero_yesterday_is_not_applicable() {
        let comparison = build_comparison(
            &prices(&[(0, 1.0)]),
            "today",
            &prices(&[(0, 0.0)]),
            "yesterday",
            None,
        );
        assert!(comparison.contains("| N/A      | ▲"));
    }

    #[test]
    fn test_comparison_stable_within_tolerance() {
        let comparison = build_comparison(
            &prices(&[(0, 1.00005)]),
            "today",
            &prices(&[(0, 1.0)]),
            "yesterday",
            None,
        );
        assert!(comparison.contains("Increased: 0 | Decreased: 0 | Stable: 1"));
        assert!(comparison.contains("| ●"));
    }

    #[test]
    fn test_comparison_only_common_hours() {
        let comparison = build_comparison(
            &prices(&[(0, 1.0), (1, 2.0)]),
            "today",
            &prices(&[(1, 1.0), (2, 3.0)]),
            "yesterday",
            None,
        );
        assert!(!comparison.contains("00:00-01:00"));
        assert!(!comparison.contains("02:00-03:00"));
        assert!(comparison.contains("01:00-02:00 | 1        | 2        | 1        | 100%     | ▲"));
    }

    #[test]
    fn test_comparison_sorted_by_diff_descending() {
        let comparison = build_comparison(
            &prices(&[(0, 1.0), (1, 3.0)]),
            "today",
            &prices(&[(0, 2.0), (1, 1.0)]),
            "yesterday",
            Some(SortBy::DiffDesc),
        );
        let rows: Vec<&str> = comparison.lines().skip(5).collect();
        assert!(rows[0].starts_with("01:00-02:00"));
        assert!(rows[1].starts_with("00:00-01:00"));
    }

    #[test]
    fn test_comparison_no_common_hours_has_no_summary() {
        let comparison = build_comparison(
            &prices(&[(0, 1.0)]),
            "today",
            &prices(&[(1, 1.0)]),
            "yesterday",
            None,
        );
        assert!(!comparison.contains("Avg Change"));
        assert!(comparison.contains("Hour        | Yest"));
    }
}
