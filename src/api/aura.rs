//! [AURA](https://www.aura.dk/) hour-price API client.

use chrono::NaiveDate;
use reqwest::Client;

use crate::{api::client, cli::DATE_FORMAT, core::aggregate::PricePayload, prelude::*};

const URL: &str = "https://www.aura.dk/api/hour-price/data";

/// Opaque content-block reference the public endpoint expects.
const CONTENT_REFERENCE: &str = "40291";

pub struct Api(Client);

impl Api {
    pub fn try_new() -> Result<Self> {
        Ok(Self(client::try_new()?))
    }

    /// Fetch the raw day-price payload for the given date.
    #[instrument(skip_all, fields(on = %on.format(DATE_FORMAT)))]
    pub async fn get_day_prices(&self, on: NaiveDate) -> Result<PricePayload> {
        info!("fetching…");
        let date = on.format(DATE_FORMAT).to_string();
        let payload = self
            .0
            .get(URL)
            .query(&[("date", date.as_str()), ("currentBlockContentReference", CONTENT_REFERENCE)])
            .send()
            .await
            .context("failed to call the AURA API")?
            .error_for_status()
            .context("the request failed")?
            .json::<PricePayload>()
            .await
            .context("failed to deserialize the response")?;
        Ok(payload)
    }
}
