use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Date format used in report titles, CLI arguments, and the AURA API query.
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Fetch and display hourly power prices for West Denmark from the AURA API.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {
    /// Date to report on, `YYYY/MM/DD`. Defaults to today.
    #[clap(short = 'd', long, value_parser = parse_date)]
    pub date: Option<NaiveDate>,

    /// Save the output to this directory as `prices_YYYYMMDD.txt`.
    #[clap(short = 'o', long = "output-dir", env = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Also report the change against the previous day.
    #[clap(long)]
    pub compare_yesterday: bool,

    /// Sort the hour lines by price, or the comparison rows by diff.
    #[clap(long, value_enum)]
    pub sort_by: Option<SortBy>,

    /// Cache directory for fetched day prices.
    #[clap(long, env = "CACHE_DIR", default_value = ".cache")]
    pub cache_dir: PathBuf,

    #[clap(flatten)]
    pub telegram: TelegramArgs,
}

#[derive(Parser)]
pub struct TelegramArgs {
    /// Send the output to Telegram (requires the token and chat ID).
    #[clap(long)]
    pub send_telegram: bool,

    /// Telegram bot token.
    #[clap(long = "telegram-token", env = "TELEGRAM_BOT_TOKEN")]
    pub bot_token: Option<String>,

    /// Telegram chat ID.
    #[clap(long = "telegram-chat-id", env = "TELEGRAM_CHAT_ID")]
    pub chat_id: Option<String>,
}

#[derive(Copy, Clone, Debug, clap::ValueEnum)]
pub enum SortBy {
    /// Hour lines by ascending price.
    Price,

    /// Hour lines by descending price.
    PriceDesc,

    /// Comparison rows by ascending day-over-day change.
    Diff,

    /// Comparison rows by descending day-over-day change.
    DiffDesc,
}

fn parse_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
}
