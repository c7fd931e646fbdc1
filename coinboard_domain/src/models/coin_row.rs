use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_with::serde_as;
use coinboard_ext_serde::ToStringVerbatim;

use crate::models::Timeframe;

/// One coin of a snapshot, unit-qualified to a single currency.
/// Built once per snapshot and immutable thereafter.
#[serde_as]
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CoinRow {
    pub name: String,
    pub symbol: String,

    #[serde_as(as = "ToStringVerbatim")]
    pub price: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub percent_change_1h: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub percent_change_24h: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub percent_change_7d: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub market_cap: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub volume_24h: BigDecimal,
}

impl CoinRow {
    pub fn percent_change(&self, timeframe: Timeframe) -> &BigDecimal {
        match timeframe {
            Timeframe::Hour => &self.percent_change_1h,
            Timeframe::Day => &self.percent_change_24h,
            Timeframe::Week => &self.percent_change_7d,
        }
    }

    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol)
    }
}

pub mod defaults {

    /// Top-N cutoff for the mover rankings.
    pub const DEFAULT_TOP_N: usize = 5;

    lazy_static! {
        /// Symbols preselected for the comparison views.
        pub static ref DEFAULT_SELECTION: Vec<String> = {
            ["BTC", "ETH", "ADA", "DOGE", "BNB"]
                .iter()
                .map(|s| s.to_string())
                .collect()
        };
    }
}
