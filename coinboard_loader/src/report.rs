use log::info;

use coinboard_core::Snapshot;
use coinboard_core::summary;
use coinboard_domain::models::MagnitudeBand;

use crate::config::Config;

/// Logs the derived views for one snapshot. This is the presentation side
/// of the pipeline; everything here is a read of already-computed data.
pub fn print_report(snapshot: &Snapshot, config: &Config) {
    let summary_scalars = &snapshot.summary;

    info!("Total market cap ({}): {}", config.currency, summary_scalars.total_market_cap.round(2));
    for (label, share) in summary_scalars.dominance_split() {
        info!("  {} dominance: {}%", label, share.round(2));
    }

    let gainers = summary::top_gainers(&snapshot.table, config.timeframe, config.top_n);
    info!("Top {} gainers over {}:", config.top_n, config.timeframe);
    for row in &gainers {
        info!("  {} {}%", row.symbol, row.percent_change(config.timeframe).round(2));
    }

    let losers = summary::top_losers(&snapshot.table, config.timeframe, config.top_n);
    info!("Top {} losers over {}:", config.top_n, config.timeframe);
    for row in &losers {
        info!("  {} {}%", row.symbol, row.percent_change(config.timeframe).round(2));
    }

    let selected = summary::selected_subset(&snapshot.table, &config.symbols);
    if selected.is_empty() {
        info!("No listed coin matched the symbol selection {:?}", config.symbols);
    } else {
        if let Some(max_cap) = selected.iter().map(|row| &row.market_cap).max() {
            info!("Selected coins, market caps in the {}:", MagnitudeBand::classify(max_cap));
        }
        for row in &selected {
            info!("  {} price {} market cap {} volume {}",
                  row.symbol,
                  row.price.round(2),
                  row.market_cap.round(0),
                  row.volume_24h.round(0));
        }
    }

    let chart = summary::chart_set(&snapshot.table, config.timeframe, &config.symbols, config.top_n);
    info!("Chart set holds {} rows", chart.len());
}
