use coinboard_domain::models::{CoinRow, CurrencyUnit};

use crate::decode::Record;
use crate::project::{project_record, ProjectError};

/// The ordered snapshot table. Rows keep the listing order; nothing is
/// deduplicated or re-sorted here.
#[derive(Clone, Debug, Default)]
pub struct Table {
    rows: Vec<CoinRow>,
}

impl Table {
    /// Projects every record in order. One bad record fails the whole
    /// build; a mixed table of valid and invalid rows is never produced.
    /// Zero records build an empty table, which is a valid "no data" state.
    pub fn build(records: &[Record], unit: CurrencyUnit) -> Result<Table, ProjectError> {
        let rows = records.iter()
            .map(|record| project_record(record, unit))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table { rows })
    }

    pub fn rows(&self) -> &[CoinRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<CoinRow>> for Table {
    fn from(rows: Vec<CoinRow>) -> Table {
        Table { rows }
    }
}
