#![doc = include_str!("../README.md")]

mod api;
mod cache;
mod cli;
mod core;
mod fmt;
mod prelude;
mod report;

use std::path::{Path, PathBuf};

use chrono::{Days, Local, NaiveDate};
use clap::{Parser, crate_version};

use crate::{
    api::{Aura, Telegram},
    cache::Cache,
    cli::{Args, DATE_FORMAT},
    core::{aggregate, prices::HourlyPrices},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();

    let today = args.date.unwrap_or_else(|| Local::now().date_naive());
    let yesterday = today.checked_sub_days(Days::new(1)).context("no previous day")?;
    let today_label = today.format(DATE_FORMAT).to_string();

    let api = Aura::try_new()?;
    let cache = Cache::new(args.cache_dir.clone());

    let today_prices = fetch_prices(&api, &cache, today)
        .await
        .with_context(|| format!("failed to get prices for {today_label}"))?;

    let mut output = report::build_report(&today_prices, &today_label, args.sort_by);

    if args.compare_yesterday {
        match fetch_prices(&api, &cache, yesterday).await {
            Ok(yesterday_prices) => {
                let comparison = report::build_comparison(
                    &today_prices,
                    &today_label,
                    &yesterday_prices,
                    &yesterday.format(DATE_FORMAT).to_string(),
                    args.sort_by,
                );
                if !comparison.is_empty() {
                    output.push_str("\n\n");
                    output.push_str(&comparison);
                }
            }
            Err(error) => warn!("skipping the comparison: {error:#}"),
        }
    }

    println!("{output}");

    if let Some(output_dir) = &args.output_dir {
        save_report(output_dir, today, &output);
    }

    if args.telegram.send_telegram {
        match (&args.telegram.bot_token, &args.telegram.chat_id) {
            (Some(bot_token), Some(chat_id)) => {
                let telegram = Telegram::try_new(bot_token, chat_id.clone())?;
                if let Err(error) = telegram.send_message(&output).await {
                    error!("failed to send the Telegram message: {error:#}");
                }
            }
            _ => warn!("missing the Telegram token or chat ID, skipping"),
        }
    }

    info!("done!");
    Ok(())
}

/// Get the hourly prices for the date, preferring the day cache over the
/// network.
#[instrument(skip_all, fields(date = %date.format(DATE_FORMAT)))]
async fn fetch_prices(api: &Aura, cache: &Cache, date: NaiveDate) -> Result<HourlyPrices> {
    if let Some(prices) = cache.load(date) {
        return Ok(prices);
    }
    let payload = api.get_day_prices(date).await?;
    let prices = aggregate::aggregate(&payload)?;
    cache.store(date, &prices);
    Ok(prices)
}

/// Write the combined output to `prices_YYYYMMDD.txt` in the directory,
/// logging failures instead of propagating them.
fn save_report(directory: &Path, date: NaiveDate, output: &str) {
    match try_save_report(directory, date, output) {
        Ok(path) => info!(path = %path.display(), "saved"),
        Err(error) => error!("failed to save the report: {error:#}"),
    }
}

fn try_save_report(directory: &Path, date: NaiveDate, output: &str) -> Result<PathBuf> {
    std::fs::create_dir_all(directory)?;
    let path = directory.join(format!("prices_{}.txt", date.format("%Y%m%d")));
    std::fs::write(&path, format!("{output}\n"))?;
    Ok(path)
}
