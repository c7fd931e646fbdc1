use bigdecimal::BigDecimal;
use serde::Serialize;
use serde_with::serde_as;
use coinboard_ext_serde::ToStringVerbatim;

/// Snapshot-wide scalars taken from the payload's aggregate metrics.
/// These are copied from upstream, never derived from the listing table.
#[serde_as]
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GlobalSummary {
    #[serde_as(as = "ToStringVerbatim")]
    pub total_market_cap: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub btc_dominance_pct: BigDecimal,

    #[serde_as(as = "ToStringVerbatim")]
    pub eth_dominance_pct: BigDecimal,
}

impl GlobalSummary {
    /// Remainder share once BTC and ETH are taken out. Computed on demand
    /// so a replaced snapshot can never serve a stale figure.
    pub fn alt_dominance_pct(&self) -> BigDecimal {
        BigDecimal::from(100) - &self.btc_dominance_pct - &self.eth_dominance_pct
    }

    /// Labeled shares for the dominance split, alt coins last.
    // Vec rather than a map to keep the presentation order fixed
    pub fn dominance_split(&self) -> Vec<(&'static str, BigDecimal)> {
        vec![
            ("Bitcoin", self.btc_dominance_pct.clone()),
            ("Ethereum", self.eth_dominance_pct.clone()),
            ("Alt Coins", self.alt_dominance_pct()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn decimal(x: impl AsRef<str>) -> BigDecimal {
        BigDecimal::from_str(x.as_ref()).unwrap()
    }

    fn summary() -> GlobalSummary {
        GlobalSummary {
            total_market_cap: decimal("1624674663413.901"),
            btc_dominance_pct: decimal("42.1384"),
            eth_dominance_pct: decimal("18.0025"),
        }
    }

    #[test]
    fn dominance_shares_should_sum_total() {
        let summary = summary();
        let sum = &summary.btc_dominance_pct
            + &summary.eth_dominance_pct
            + summary.alt_dominance_pct();
        assert_eq!(sum, BigDecimal::from(100));
    }

    #[test]
    fn split_keeps_alt_coins_last() {
        let split = summary().dominance_split();
        assert_eq!(split[0].0, "Bitcoin");
        assert_eq!(split[1].0, "Ethereum");
        assert_eq!(split[2].0, "Alt Coins");
        assert_eq!(split[2].1, decimal("39.8591"));
    }
}
