use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::{core::prices::HourlyPrices, prelude::*};

/// Per-day cache of aggregated hourly prices, one JSON file per date.
///
/// The cache is best-effort: any read problem counts as a miss and any write
/// problem is logged and swallowed, so a broken cache never blocks a report.
pub struct Cache {
    directory: PathBuf,
}

impl Cache {
    pub const fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.directory.join(format!("prices_{}.json", date.format("%Y%m%d")))
    }

    #[instrument(skip_all, fields(date = %date))]
    pub fn load(&self, date: NaiveDate) -> Option<HourlyPrices> {
        let path = self.path_for(date);
        if !path.is_file() {
            return None;
        }
        match Self::read(&path) {
            Ok(prices) => {
                info!(path = %path.display(), "loaded cached prices");
                Some(prices)
            }
            Err(error) => {
                warn!(path = %path.display(), "cache read error, fetching fresh: {error:#}");
                None
            }
        }
    }

    fn read(path: &Path) -> Result<HourlyPrices> {
        Ok(serde_json::from_slice(&std::fs::read(path)?)?)
    }

    #[instrument(skip_all, fields(date = %date))]
    pub fn store(&self, date: NaiveDate, prices: &HourlyPrices) {
        if let Err(error) = self.write(date, prices) {
            warn!("cache write error: {error:#}");
        }
    }

    fn write(&self, date: NaiveDate, prices: &HourlyPrices) -> Result {
        std::fs::create_dir_all(&self.directory)?;
        std::fs::write(self.path_for(date), serde_json::to_vec(prices)?)?;
        Ok(())
    }
}
