use chrono::{DateTime, Utc};
use common::models::{CoinRecord, SortField, SortState};
use store::ViewStateStore;
use tabled::{builder::Builder, settings::Style};

const TITLE: &str = "Cryptocurrency Market Data";

/// Where the one fetch stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    Loading,
    Ready { fetched_at: DateTime<Utc> },
    Unavailable,
}

/// Render the whole component: title, controls, table and status line.
pub fn render(store: &ViewStateStore, status: &Status, show_images: bool) -> String {
    let mut out = String::new();
    out.push_str(TITLE);
    out.push_str("\n\n");
    out.push_str(&format!("Search: [{}]\n", store.query()));
    out.push_str(&sort_buttons(store.sort()));
    out.push('\n');
    out.push_str(&table(store.visible(), show_images));
    out.push('\n');
    out.push_str(&status_line(store, status));
    out.push('\n');
    out
}

fn sort_buttons(sort: &SortState) -> String {
    let label = |field: &SortField| {
        sort.direction_for(field)
            .map(|direction| direction.to_string())
            .unwrap_or_default()
    };
    format!(
        "[Sort by Market Cap ({})]  [Sort by 24h % Change ({})]\n",
        label(&SortField::MarketCap),
        label(&SortField::PriceChangePercent24h)
    )
}

fn table(coins: &[CoinRecord], show_images: bool) -> String {
    let mut builder = Builder::default();

    let mut header = Vec::with_capacity(7);
    if show_images {
        header.push("Image".to_string());
    }
    header.extend(
        [
            "Name",
            "Symbol",
            "Current Price",
            "Market Cap",
            "Total Volume",
            "24h % Change",
        ]
        .map(String::from),
    );
    builder.push_record(header);

    for coin in coins {
        let mut row = Vec::with_capacity(7);
        if show_images {
            row.push(coin.image_url.clone());
        }
        row.push(coin.name.clone());
        row.push(coin.symbol.to_uppercase());
        row.push(format_usd(coin.current_price));
        row.push(format_usd(coin.market_cap));
        row.push(format_usd(coin.total_volume));
        row.push(format_percent(coin.price_change_percent_24h));
        builder.push_record(row);
    }

    builder.build().with(Style::modern()).to_string()
}

fn status_line(store: &ViewStateStore, status: &Status) -> String {
    match status {
        Status::Loading => "loading market data...".to_string(),
        Status::Unavailable => "no data".to_string(),
        Status::Ready { fetched_at } => format!(
            "showing {} of {} coins, snapshot {}",
            store.visible().len(),
            store.full_set().len(),
            fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
    }
}

/// `$` followed by the amount with en-US digit grouping and at most three
/// fraction digits, trailing zeros dropped.
pub fn format_usd(value: f64) -> String {
    format!("${}", format_grouped(value))
}

/// Signed percentage with two decimals.
pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(rounded.len() + int_part.len() / 3 + 1);
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
