use std::fmt;
use std::fmt::{Display, Formatter};

use bigdecimal::BigDecimal;
use serde::Serialize;

/// Human-readable order-of-magnitude label for a market-cap axis.
#[derive(Serialize, Eq, PartialEq, Copy, Clone, Hash, Debug)]
#[serde(rename_all = "snake_case")]
pub enum MagnitudeBand {
    LessThanTenMillion,
    TensOfMillions,
    HundredsOfMillions,
    Billions,
    TensOfBillions,
    HundredsOfBillions,
}

impl MagnitudeBand {
    /// Classifies by digit count of the truncated integer part. Values of
    /// 13+ digits fall back to the smallest band, matching the upstream
    /// band table, which defines nothing above "hundreds of billions".
    pub fn classify(market_cap: &BigDecimal) -> MagnitudeBand {
        let (int_part, _) = market_cap.with_scale(0).as_bigint_and_exponent();
        let digits = int_part.to_string().trim_start_matches('-').len();
        match digits {
            8 => MagnitudeBand::TensOfMillions,
            9 => MagnitudeBand::HundredsOfMillions,
            10 => MagnitudeBand::Billions,
            11 => MagnitudeBand::TensOfBillions,
            12 => MagnitudeBand::HundredsOfBillions,
            _ => MagnitudeBand::LessThanTenMillion,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MagnitudeBand::LessThanTenMillion => "less than ten million",
            MagnitudeBand::TensOfMillions => "tens of millions",
            MagnitudeBand::HundredsOfMillions => "hundreds of millions",
            MagnitudeBand::Billions => "billions",
            MagnitudeBand::TensOfBillions => "tens of billions",
            MagnitudeBand::HundredsOfBillions => "hundreds of billions",
        }
    }
}

impl Display for MagnitudeBand {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
