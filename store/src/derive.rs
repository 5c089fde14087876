//! Pure derivation of the visible rows from the full snapshot.

use common::models::{CoinRecord, SortDirection, SortState};
use std::cmp::Ordering;

/// Case-insensitive substring match on name or symbol. An empty query keeps everything.
pub fn filter(records: &[CoinRecord], query: &str) -> Vec<CoinRecord> {
    if query.is_empty() {
        return records.to_vec();
    }

    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|coin| {
            coin.name.to_lowercase().contains(&needle)
                || coin.symbol.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Stable sort by the active field. Unsortable or absent fields leave the order alone.
///
/// NaN values go last in either direction.
pub fn sort(records: &mut [CoinRecord], sort: &SortState) {
    let Some(field) = &sort.field else {
        return;
    };

    records.sort_by(|a, b| match (field.key(a), field.key(b)) {
        (Some(x), Some(y)) => compare_keys(x, y, sort.direction),
        _ => Ordering::Equal,
    });
}

fn compare_keys(x: f64, y: f64, direction: SortDirection) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => match direction {
            SortDirection::Asc => x.total_cmp(&y),
            SortDirection::Desc => y.total_cmp(&x),
        },
    }
}

/// `sort(filter(full_set, query))`
pub fn derive(full_set: &[CoinRecord], query: &str, sort_state: &SortState) -> Vec<CoinRecord> {
    let mut visible = filter(full_set, query);
    sort(&mut visible, sort_state);
    visible
}
