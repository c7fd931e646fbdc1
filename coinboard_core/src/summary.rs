use bigdecimal::BigDecimal;
use coinboard_domain::models::{CoinRow, GlobalSummary, Timeframe};

use crate::decode::GlobalMetrics;
use crate::table::Table;

/// Copies the snapshot-wide scalars out of the aggregate metrics. These are
/// taken from the payload as-is, never re-derived from the listing table.
pub fn global_summary(metrics: &GlobalMetrics) -> GlobalSummary {
    GlobalSummary {
        total_market_cap: metrics.market_cap.clone(),
        btc_dominance_pct: metrics.btc_dominance.clone(),
        eth_dominance_pct: metrics.eth_dominance.clone(),
    }
}

/// The `n` rows with the largest percent change over `timeframe`. The sort
/// is stable, so ties keep their table order.
pub fn top_gainers<'a>(table: &'a Table, timeframe: Timeframe, n: usize) -> Vec<&'a CoinRow> {
    let mut rows: Vec<&CoinRow> = table.rows().iter().collect();
    rows.sort_by(|a, b| b.percent_change(timeframe).cmp(a.percent_change(timeframe)));
    rows.truncate(n);
    rows
}

/// The `n` rows with the smallest percent change over `timeframe`.
pub fn top_losers<'a>(table: &'a Table, timeframe: Timeframe, n: usize) -> Vec<&'a CoinRow> {
    let mut rows: Vec<&CoinRow> = table.rows().iter().collect();
    rows.sort_by(|a, b| a.percent_change(timeframe).cmp(b.percent_change(timeframe)));
    rows.truncate(n);
    rows
}

/// Allow-listed rows in table order. Symbols match ASCII case-insensitively.
pub fn selected_subset<'a>(table: &'a Table, symbols: &[String]) -> Vec<&'a CoinRow> {
    table.rows().iter()
        .filter(|row| symbols.iter().any(|symbol| row.matches_symbol(symbol)))
        .collect()
}

pub fn positive_subset<'a>(table: &'a Table, timeframe: Timeframe, symbols: &[String]) -> Vec<&'a CoinRow> {
    let zero = BigDecimal::from(0);
    selected_subset(table, symbols).into_iter()
        .filter(|row| row.percent_change(timeframe) > &zero)
        .collect()
}

pub fn negative_subset<'a>(table: &'a Table, timeframe: Timeframe, symbols: &[String]) -> Vec<&'a CoinRow> {
    let zero = BigDecimal::from(0);
    selected_subset(table, symbols).into_iter()
        .filter(|row| row.percent_change(timeframe) < &zero)
        .collect()
}

/// The combined charting set: top gainers, positive selection, top losers,
/// negative selection, concatenated in that fixed order. A row sitting in
/// both a top-N slot and the selection appears twice on purpose — the chart
/// emphasizes the overlap, so this is a plain concatenation, not a union.
pub fn chart_set<'a>(
    table: &'a Table,
    timeframe: Timeframe,
    symbols: &[String],
    n: usize,
) -> Vec<&'a CoinRow> {
    let mut rows = top_gainers(table, timeframe, n);
    rows.extend(positive_subset(table, timeframe, symbols));
    rows.extend(top_losers(table, timeframe, n));
    rows.extend(negative_subset(table, timeframe, symbols));
    rows
}

/// Sorted, deduplicated symbols of the table; the option source for a
/// selection widget.
pub fn available_symbols(table: &Table) -> Vec<String> {
    let mut symbols: Vec<String> = table.rows().iter().map(|row| row.symbol.clone()).collect();
    symbols.sort();
    symbols.dedup();
    symbols
}
