use std::env;

use log::info;
use coinboard_domain::models::{CurrencyUnit, Timeframe};
use coinboard_domain::models::defaults::{DEFAULT_SELECTION, DEFAULT_TOP_N};
use coinboard_util::{ConfigContext, ConfigError, IntoConfigResult, MultiTry};

pub const DEFAULT_URL: &str = "https://coinmarketcap.com";

pub struct Config {
    pub url: String,
    pub currency: CurrencyUnit,
    pub timeframe: Timeframe,
    pub symbols: Vec<String>,
    pub top_n: usize,
}

pub fn config_with_prefix(prefix: &str) -> Result<Config, ConfigError> {
    let config = ConfigContext::new(prefix);

    // Defaults apply to unset variables only; a present-but-broken value
    // is an error, never a silent fallback.
    let url: String = config.var_parsed("URL", DEFAULT_URL.into())?;

    let symbols = match config.var("SYMBOLS") {
        Err(ConfigError::BadVariable { source: env::VarError::NotPresent, .. }) =>
            DEFAULT_SELECTION.clone(),
        Err(err) => return Err(err),
        Ok(raw) => parse_symbols(&raw),
    };

    let (currency, timeframe, top_n) =
        config.var_parsed("CURRENCY", CurrencyUnit::Usd)
            .and_try(config.var_parsed("TIMEFRAME", Timeframe::Week))
            .and_try(config.var_parsed("TOP_N", DEFAULT_TOP_N))
            .into_config_result()?;

    info!("Snapshot source: '{}'", url);
    info!("Currency unit: '{}', timeframe: '{}', top-N: {}", currency, timeframe, top_n);
    info!("Symbol selection: {:?}", symbols);

    Ok(Config {
        url,
        currency,
        timeframe,
        symbols,
        top_n,
    })
}

fn parse_symbols(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
