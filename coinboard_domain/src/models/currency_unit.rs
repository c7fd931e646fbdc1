use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize, Deserializer, de};
use snafu::Snafu;

/// Currency the quote columns of a listing are qualified to.
#[derive(Serialize, Eq, PartialEq, Copy, Clone, Hash, Debug)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyUnit {
    Usd,
    Btc,
}

impl CurrencyUnit {
    /// Upstream quote key segment, e.g. the `USD` in `quote.USD.price`.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyUnit::Usd => "USD",
            CurrencyUnit::Btc => "BTC",
        }
    }
}

#[derive(Snafu, Debug)]
pub enum CurrencyUnitParseError {
    #[snafu(display("Invalid currency unit specified: '{}'", input))]
    InvalidFormat {
        input: String,
    }
}

impl FromStr for CurrencyUnit {
    type Err = CurrencyUnitParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase()
            .replace(|c: char| !c.is_ascii_alphanumeric(), "")
            .as_str()
        {
            "usd" => Ok(CurrencyUnit::Usd),
            "btc" => Ok(CurrencyUnit::Btc),
            _ => InvalidFormat { input: s.to_owned() }.fail()
        }
    }
}

impl<'de> Deserialize<'de> for CurrencyUnit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where D: Deserializer<'de>
    {
        let s = String::deserialize(deserializer)?;
        FromStr::from_str(&s).map_err(de::Error::custom)
    }
}

impl Display for CurrencyUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_case_insensitively() {
        assert_eq!(CurrencyUnit::from_str("usd").unwrap(), CurrencyUnit::Usd);
        assert_eq!(CurrencyUnit::from_str("BTC").unwrap(), CurrencyUnit::Btc);
        assert!(CurrencyUnit::from_str("EUR").is_err());
    }

    #[test]
    fn should_deserialize() {
        let x: CurrencyUnit = serde_json::from_str(r#""USD""#).unwrap();
        assert_eq!(x, CurrencyUnit::Usd);

        let x: CurrencyUnit = serde_json::from_str(r#""btc""#).unwrap();
        assert_eq!(x, CurrencyUnit::Btc);
    }
}
