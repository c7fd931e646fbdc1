mod config;
mod report;

use std::error::Error;

use log::{info, error};
use chrono::Utc;

use coinboard_util::init_logging;
use coinboard_core::load_snapshot;

const DEFAULT_LOG_FILTERS: &'static str = "info,coinboard_loader=debug";
const CONFIG_PREFIX: &str = "COINBOARD_LOADER";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let env_result = dotenv::dotenv();
    init_logging(DEFAULT_LOG_FILTERS);

    if let Err(err) = env_result {
        error!("Failed to load .env file: {}", err);
    }

    let config = config::config_with_prefix(CONFIG_PREFIX)?;

    let http = reqwest::ClientBuilder::new().build().expect("Failed to build HTTP client");

    info!("Fetching snapshot page...");
    let body = http.get(&config.url)
        .send().await?
        .error_for_status()?
        .text().await?;

    let snapshot = load_snapshot(&body, config.currency)?;
    info!("Decoded snapshot of {} coins at {}", snapshot.table.len(), Utc::now());

    report::print_report(&snapshot, &config);
    Ok(())
}
