use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::Deserialize;
use serde_json::Value;
use serde_with::serde_as;
use snafu::{Snafu, ResultExt, OptionExt, ensure};
use coinboard_ext_serde::BigDecimalExact;

#[derive(Debug, Snafu)]
pub enum DecodeError {
    #[snafu(display("Embedded payload is not valid JSON: {}", source))]
    InvalidJson {
        source: serde_json::Error,
    },

    #[snafu(display("Listing state sub-document is not valid JSON: {}", source))]
    InvalidListingJson {
        source: serde_json::Error,
    },

    #[snafu(display("Payload is missing the expected structure at '{}': {}", path, source))]
    UnexpectedShape {
        path: &'static str,
        source: serde_json::Error,
    },

    #[snafu(display("Listing header does not carry a field key array"))]
    MissingFieldKeys,

    #[snafu(display("Listing row {} is not a value array", index))]
    RowShape {
        index: usize,
    },

    #[snafu(display("Listing row {} has {} values but the field key array names {}", index, actual, expected))]
    RowLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Aggregate page metrics, decoded exactly (no f64 round-trip).
#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct GlobalMetrics {
    #[serde(rename = "marketCap")]
    #[serde_as(as = "BigDecimalExact")]
    pub market_cap: BigDecimal,

    #[serde(rename = "btcDominance")]
    #[serde_as(as = "BigDecimalExact")]
    pub btc_dominance: BigDecimal,

    #[serde(rename = "ethDominance")]
    #[serde_as(as = "BigDecimalExact")]
    pub eth_dominance: BigDecimal,
}

#[derive(Deserialize)]
struct NextData {
    props: Props,
}

#[derive(Deserialize)]
struct Props {
    #[serde(rename = "pageProps")]
    page_props: PageProps,

    /// The listing payload is a JSON document string-encoded inside the
    /// outer document; it gets parsed separately.
    #[serde(rename = "initialState")]
    initial_state: String,
}

#[derive(Deserialize)]
struct PageProps {
    #[serde(rename = "globalMetrics")]
    global_metrics: GlobalMetrics,
}

#[derive(Deserialize)]
struct InitialState {
    cryptocurrency: CryptocurrencyState,
}

#[derive(Deserialize)]
struct CryptocurrencyState {
    #[serde(rename = "listingLatest")]
    listing_latest: ListingLatest,
}

#[derive(Deserialize)]
struct ListingLatest {
    data: Vec<Value>,
}

#[derive(Deserialize)]
struct ListingHeader {
    #[serde(rename = "keysArr")]
    keys_arr: Vec<String>,
}

/// Positional schema of a listing: the name of every slot of a value array.
#[derive(Clone, Debug)]
pub struct FieldKey {
    names: Vec<String>,
}

impl FieldKey {
    pub fn new(names: Vec<String>) -> FieldKey {
        FieldKey { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Strict positional zip. A length mismatch fails the decode outright:
    /// truncating or padding would corrupt data silently.
    pub fn zip(&self, index: usize, values: Vec<Value>) -> Result<Record, DecodeError> {
        ensure!(values.len() == self.names.len(), RowLength {
            index,
            expected: self.names.len(),
            actual: values.len(),
        });

        let fields = self.names.iter().cloned().zip(values).collect();
        Ok(Record { fields })
    }
}

/// One decoded coin, keyed by field name, before any unit selection.
#[derive(Clone, Debug)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

pub struct DecodedPayload {
    pub metrics: GlobalMetrics,
    pub records: Vec<Record>,
}

/// Decodes the raw payload into aggregate metrics and the ordered record
/// sequence. The first listing element is a header whose `keysArr` names
/// every slot of the subsequent value arrays.
pub fn decode_payload(raw: &str) -> Result<DecodedPayload, DecodeError> {
    let root: Value = serde_json::from_str(raw).context(InvalidJson)?;
    let doc: NextData = serde_json::from_value(root)
        .context(UnexpectedShape { path: "props" })?;

    let listing_root: Value = serde_json::from_str(&doc.props.initial_state)
        .context(InvalidListingJson)?;
    let state: InitialState = serde_json::from_value(listing_root)
        .context(UnexpectedShape { path: "cryptocurrency.listingLatest.data" })?;

    let mut elements = state.cryptocurrency.listing_latest.data.into_iter();
    let header = elements.next()
        .and_then(|value| serde_json::from_value::<ListingHeader>(value).ok())
        .context(MissingFieldKeys)?;
    let key = FieldKey::new(header.keys_arr);

    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.enumerate() {
        let values = match element {
            Value::Array(values) => values,
            _ => return RowShape { index }.fail(),
        };
        records.push(key.zip(index, values)?);
    }

    Ok(DecodedPayload {
        metrics: doc.props.page_props.global_metrics,
        records,
    })
}
