
mod currency_unit;
pub use currency_unit::{CurrencyUnit, CurrencyUnitParseError};

mod timeframe;
pub use timeframe::{Timeframe, TimeframeParseError};

mod coin_row;
pub use coin_row::CoinRow;

mod global_summary;
pub use global_summary::GlobalSummary;

mod magnitude_band;
pub use magnitude_band::MagnitudeBand;

pub mod defaults {
    pub use super::coin_row::defaults::*;
}
