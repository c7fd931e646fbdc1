use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde_json::Value;
use snafu::{Snafu, OptionExt};
use coinboard_domain::models::{CoinRow, CurrencyUnit};

use crate::decode::Record;

#[derive(Debug, Snafu)]
pub enum ProjectError {
    #[snafu(display("Record is missing required field '{}'", key))]
    MissingField {
        key: String,
    },

    #[snafu(display("Field '{}' holds a non-numeric value", key))]
    NonNumericField {
        key: String,
    },

    #[snafu(display("Field '{}' holds a non-text value", key))]
    NonTextField {
        key: String,
    },
}

/// Projects one record into a row under the selected currency unit, reading
/// `quote.<UNIT>.<metric>` for every priced field. A missing key means the
/// upstream schema no longer supports that unit; it is never defaulted.
pub fn project_record(record: &Record, unit: CurrencyUnit) -> Result<CoinRow, ProjectError> {
    let quote = |metric: &str| format!("quote.{}.{}", unit.code(), metric);

    Ok(CoinRow {
        name: text_field(record, "slug")?,
        symbol: text_field(record, "symbol")?,
        price: decimal_field(record, &quote("price"))?,
        percent_change_1h: decimal_field(record, &quote("percentChange1h"))?,
        percent_change_24h: decimal_field(record, &quote("percentChange24h"))?,
        percent_change_7d: decimal_field(record, &quote("percentChange7d"))?,
        market_cap: decimal_field(record, &quote("marketCap"))?,
        volume_24h: decimal_field(record, &quote("volume24h"))?,
    })
}

fn present<'a>(record: &'a Record, key: &str) -> Result<&'a Value, ProjectError> {
    // A JSON null carries no value and counts as absent: reading it as
    // zero would report a materially different price than "unavailable".
    record.get(key)
        .filter(|value| !value.is_null())
        .context(MissingField { key: key.to_owned() })
}

fn text_field(record: &Record, key: &str) -> Result<String, ProjectError> {
    match present(record, key)? {
        Value::String(s) => Ok(s.clone()),
        _ => NonTextField { key: key.to_owned() }.fail(),
    }
}

fn decimal_field(record: &Record, key: &str) -> Result<BigDecimal, ProjectError> {
    match present(record, key)? {
        Value::Number(n) => BigDecimal::from_str(&n.to_string())
            .ok()
            .context(NonNumericField { key: key.to_owned() }),
        _ => NonNumericField { key: key.to_owned() }.fail(),
    }
}
