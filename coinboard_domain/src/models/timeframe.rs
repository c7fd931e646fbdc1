use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Deserializer, de};
use snafu::Snafu;

/// Percent-change window a ranking or filter is computed over.
#[derive(Serialize, Eq, PartialEq, Copy, Clone, Hash, Debug)]
pub enum Timeframe {
    #[serde(rename = "1h")]
    Hour,
    #[serde(rename = "24h")]
    Day,
    #[serde(rename = "7d")]
    Week,
}

impl Timeframe {
    pub fn code(&self) -> &'static str {
        match self {
            Timeframe::Hour => "1h",
            Timeframe::Day => "24h",
            Timeframe::Week => "7d",
        }
    }
}

#[derive(Snafu, Debug)]
pub enum TimeframeParseError {
    #[snafu(display("Invalid percent-change timeframe specified: '{}'", input))]
    InvalidFormat {
        input: String,
    }
}

impl FromStr for Timeframe {
    type Err = TimeframeParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().trim() {
            "1h" => Ok(Timeframe::Hour),
            "24h" => Ok(Timeframe::Day),
            "7d" => Ok(Timeframe::Week),
            _ => InvalidFormat { input: s.to_owned() }.fail()
        }
    }
}

impl<'de> Deserialize<'de> for Timeframe {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Display for Timeframe {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
