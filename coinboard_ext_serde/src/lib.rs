use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Serialize, Serializer, Deserializer, Deserialize};
use serde_with::{SerializeAs, DeserializeAs};
use serde_json::value::RawValue;

/// Deserializes a JSON number into a `BigDecimal` through its decimal string
/// form, so values like `8364520669.848436` survive without an `f64` detour.
pub struct BigDecimalExact;

impl<'de> DeserializeAs<'de, BigDecimal> for BigDecimalExact {
    fn deserialize_as<D>(deserializer: D) -> Result<BigDecimal, D::Error>
        where
            D: Deserializer<'de>,
    {
        <serde_json::Number as Deserialize<'de>>::deserialize(deserializer)
            .and_then(|s| BigDecimal::from_str(&*s.to_string()).map_err(serde::de::Error::custom))
            .map(Into::into)
    }
}

pub struct ToStringVerbatim { }

impl<T> SerializeAs<T> for ToStringVerbatim
    where
        T: ToString,
{
    fn serialize_as<S>(source: &T, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
    {
        let raw_value = RawValue::from_string(source.to_string()).unwrap(); // HACK!
        raw_value.serialize(serializer)
    }
}
