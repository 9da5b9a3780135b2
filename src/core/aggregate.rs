use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::{hour::Hour, prices::HourlyPrices},
    prelude::*,
};

/// Raw day-price payload as returned by the AURA API.
///
/// A day is one or more chart series, each carrying time points keyed by the
/// hour label. The same hour may occur in several series and the totals are
/// summed per hour.
#[derive(Debug, Deserialize)]
pub struct PricePayload {
    #[serde(rename = "chartSeries")]
    pub chart_series: Option<Vec<ChartSeries>>,
}

#[derive(Debug, Deserialize)]
pub struct ChartSeries {
    #[serde(rename = "timePoints", default)]
    pub time_points: Vec<TimePoint>,
}

#[derive(Debug, Deserialize)]
pub struct TimePoint {
    pub name: String,

    /// The API is not consistent here: the price comes as a JSON number or as
    /// a numeric string, and may be `null`.
    #[serde(rename = "priceWestDenmark", default)]
    pub price_west_denmark: Value,
}

impl TimePoint {
    fn price(&self) -> Option<f64> {
        match &self.price_west_denmark {
            Value::Number(number) => number.as_f64(),
            Value::String(string) => string.parse().ok(),
            _ => None,
        }
    }
}

/// The payload carried no usable price data at all.
#[derive(Debug, thiserror::Error)]
#[error("the payload contains no usable price data")]
pub struct NoData;

/// Reduce the raw payload to per-hour price totals.
///
/// Every parseable price found for an hour label, across all series, is summed
/// into that hour's total; the total is rounded to 4 decimal places. An hour
/// is included only if at least one price parsed. Unparseable prices are
/// logged and skipped, never fatal.
pub fn aggregate(payload: &PricePayload) -> Result<HourlyPrices, NoData> {
    let series =
        payload.chart_series.as_deref().filter(|series| !series.is_empty()).ok_or(NoData)?;

    let mut totals = BTreeMap::<Hour, f64>::new();
    for point in series.iter().flat_map(|series| &series.time_points) {
        // Points whose name is not an hour label never contribute:
        let Ok(hour) = point.name.parse::<Hour>() else {
            continue;
        };
        if point.price_west_denmark.is_null() {
            continue;
        }
        match point.price() {
            Some(price) => *totals.entry(hour).or_insert(0.0) += price,
            None => {
                warn!(%hour, "skipping invalid price {:?}", point.price_west_denmark);
            }
        }
    }

    for hour in Hour::all().filter(|hour| !totals.contains_key(hour)) {
        warn!(%hour, "no price data");
    }

    if totals.is_empty() {
        return Err(NoData);
    }
    Ok(totals.into_iter().map(|(hour, total)| (hour, round_price(total))).collect())
}

/// Round a price total to 4 decimal places.
#[must_use]
pub fn round_price(price: f64) -> f64 {
    (price * 10_000.0).round() / 10_000.0
}
