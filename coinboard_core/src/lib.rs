pub mod payload;
pub mod decode;
pub mod project;
pub mod table;
pub mod summary;

use snafu::{Snafu, ResultExt};
use coinboard_domain::models::{CurrencyUnit, GlobalSummary};

use crate::table::Table;

#[derive(Debug, Snafu)]
pub enum SnapshotError {
    #[snafu(display("Failed to locate the embedded payload: {}", source))]
    ExtractFailed {
        source: payload::ExtractError,
    },

    #[snafu(display("Failed to decode the payload: {}", source))]
    DecodeFailed {
        source: decode::DecodeError,
    },

    #[snafu(display("Failed to project the listing into a table: {}", source))]
    ProjectFailed {
        source: project::ProjectError,
    },
}

/// One fully decoded snapshot: the ordered table plus the page-wide scalars.
pub struct Snapshot {
    pub table: Table,
    pub summary: GlobalSummary,
}

/// Runs the whole pipeline over one document: locate the embedded payload,
/// decode the listing, project it under `unit`, and lift out the summary.
/// Stateless between invocations; every snapshot decodes independently.
pub fn load_snapshot(html: &str, unit: CurrencyUnit) -> Result<Snapshot, SnapshotError> {
    let raw = payload::extract_payload(html).context(ExtractFailed)?;
    let decoded = decode::decode_payload(raw).context(DecodeFailed)?;
    let table = Table::build(&decoded.records, unit).context(ProjectFailed)?;
    let summary = summary::global_summary(&decoded.metrics);

    Ok(Snapshot { table, summary })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use bigdecimal::BigDecimal;
    use serde_json::{json, Value};
    use coinboard_domain::models::Timeframe;

    fn document(data: Value) -> String {
        let initial_state = json!({
            "cryptocurrency": { "listingLatest": { "data": data } }
        }).to_string();

        let next_data = json!({
            "props": {
                "pageProps": {
                    "globalMetrics": {
                        "marketCap": 1624674663413.901,
                        "btcDominance": 42.1384,
                        "ethDominance": 18.0025,
                    }
                },
                "initialState": initial_state,
            }
        }).to_string();

        format!(
            concat!(
                "<html><head><title>Markets</title><script src=\"/app.js\"></script></head>",
                "<body><div id=\"root\"></div>",
                "<script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script>",
                "</body></html>",
            ),
            next_data,
        )
    }

    fn two_coin_listing() -> Value {
        json!([
            { "keysArr": [
                "slug", "symbol",
                "quote.USD.price",
                "quote.USD.percentChange1h",
                "quote.USD.percentChange24h",
                "quote.USD.percentChange7d",
                "quote.USD.marketCap",
                "quote.USD.volume24h",
            ] },
            ["bitcoin", "BTC", 50000.0, 0.2, 5.0, 10.0, 900000000000.0, 30000000000.0],
            ["ethereum", "ETH", 3000.0, -0.1, -2.0, 4.0, 350000000000.0, 15000000000.0],
        ])
    }

    #[test]
    fn end_to_end_two_coin_snapshot() {
        let html = document(two_coin_listing());
        let snapshot = load_snapshot(&html, CurrencyUnit::Usd).unwrap();

        assert_eq!(snapshot.table.len(), 2);
        assert_eq!(snapshot.table.rows()[0].symbol, "BTC");
        assert_eq!(snapshot.table.rows()[1].name, "ethereum");

        let gainers = summary::top_gainers(&snapshot.table, Timeframe::Day, 1);
        assert_eq!(gainers[0].symbol, "BTC");

        let losers = summary::top_losers(&snapshot.table, Timeframe::Day, 1);
        assert_eq!(losers[0].symbol, "ETH");

        assert_eq!(snapshot.summary.total_market_cap,
                   BigDecimal::from_str("1624674663413.901").unwrap());
        let sum = &snapshot.summary.btc_dominance_pct
            + &snapshot.summary.eth_dominance_pct
            + snapshot.summary.alt_dominance_pct();
        assert_eq!(sum, BigDecimal::from(100));
    }

    #[test]
    fn header_only_listing_loads_an_empty_snapshot() {
        let html = document(json!([ { "keysArr": ["slug", "symbol"] } ]));
        let snapshot = load_snapshot(&html, CurrencyUnit::Usd).unwrap();
        assert!(snapshot.table.is_empty());
        assert!(summary::top_gainers(&snapshot.table, Timeframe::Week, 5).is_empty());
    }

    #[test]
    fn page_without_the_marker_fails_extraction() {
        let html = "<html><body><script>var x = 1;</script></body></html>";
        assert!(matches!(load_snapshot(html, CurrencyUnit::Usd),
                         Err(SnapshotError::ExtractFailed { .. })));
    }

    #[test]
    fn malformed_row_fails_the_snapshot() {
        let html = document(json!([
            { "keysArr": ["slug", "symbol"] },
            ["bitcoin"],
        ]));
        assert!(matches!(load_snapshot(&html, CurrencyUnit::Usd),
                         Err(SnapshotError::DecodeFailed { .. })));
    }

    #[test]
    fn unsupported_unit_fails_the_snapshot() {
        let html = document(two_coin_listing());
        assert!(matches!(load_snapshot(&html, CurrencyUnit::Btc),
                         Err(SnapshotError::ProjectFailed { .. })));
    }
}
