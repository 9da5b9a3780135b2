use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::hour::Hour;

/// Aggregated per-hour price totals for one day, in DKK per kilowatt-hour.
///
/// Keys are ascending hour labels, so iteration order is the display order.
/// Serializes as a JSON object with string keys, which is also the on-disk
/// cache format.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyPrices(BTreeMap<Hour, f64>);

impl HourlyPrices {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, hour: Hour) -> Option<f64> {
        self.0.get(&hour).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Hour, f64)> + '_ {
        self.0.iter().map(|(hour, price)| (*hour, *price))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.values().copied()
    }

    #[must_use]
    pub fn minimum(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    #[must_use]
    pub fn maximum(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (!self.is_empty()).then(|| self.values().sum::<f64>() / self.len() as f64)
    }
}

impl FromIterator<(Hour, f64)> for HourlyPrices {
    fn from_iter<I: IntoIterator<Item = (Hour, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
