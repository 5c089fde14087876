use crate::derive;
use common::models::{CoinRecord, SortField, SortState};
use tracing::debug;

/// Single source of truth for what the market table shows.
///
/// Owns the full snapshot, the search query and the sort state. The visible
/// rows are a cache of `derive(full_set, query, sort)` and are rebuilt after
/// every mutation, so the active sort is kept when the query changes.
#[derive(Debug, Default)]
pub struct ViewStateStore {
    full_set: Vec<CoinRecord>,
    query: String,
    sort: SortState,
    visible: Vec<CoinRecord>,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the snapshot wholesale.
    pub fn set_full_set(&mut self, records: Vec<CoinRecord>) {
        debug!("Replacing snapshot with {} records", records.len());
        self.full_set = records;
        self.recompute();
    }

    /// Replace the search query verbatim, without trimming.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        debug!("Search query set to {:?}", self.query);
        self.recompute();
    }

    /// Flip the direction if `field` is already active, otherwise make it
    /// active in ascending order.
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort.field.as_ref() == Some(&field) {
            self.sort.direction = self.sort.direction.flip();
        } else {
            self.sort.field = Some(field);
            self.sort.direction = Default::default();
        }
        debug!(
            "Sorting by {:?} {}",
            self.sort.field.as_ref().map(ToString::to_string),
            self.sort.direction
        );
        self.recompute();
    }

    pub fn full_set(&self) -> &[CoinRecord] {
        &self.full_set
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn visible(&self) -> &[CoinRecord] {
        &self.visible
    }

    /// True until a fetch has delivered at least one record.
    pub fn is_empty(&self) -> bool {
        self.full_set.is_empty()
    }

    fn recompute(&mut self) {
        self.visible = derive::derive(&self.full_set, &self.query, &self.sort);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::models::SortDirection;

    fn coin(id: &str, name: &str, symbol: &str, market_cap: f64, change: f64) -> CoinRecord {
        CoinRecord {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            image_url: String::new(),
            current_price: 0.0,
            market_cap,
            total_volume: 0.0,
            price_change_percent_24h: change,
        }
    }

    fn ids(store: &ViewStateStore) -> Vec<&str> {
        store.visible().iter().map(|c| c.id.as_str()).collect()
    }

    fn loaded() -> ViewStateStore {
        let mut store = ViewStateStore::new();
        store.set_full_set(vec![
            coin("bitcoin", "Bitcoin", "btc", 900.0, 2.0),
            coin("ethereum", "Ethereum", "eth", 400.0, -1.0),
            coin("solana", "Solana", "sol", 80.0, 5.0),
            coin("bnb", "BNB", "bnb", 90.0, 0.5),
        ]);
        store
    }

    #[test]
    fn starts_empty_and_unsorted() {
        let store = ViewStateStore::new();
        assert!(store.is_empty());
        assert!(store.visible().is_empty());
        assert_eq!(store.query(), "");
        assert_eq!(store.sort(), &SortState::default());
    }

    #[test]
    fn set_full_set_shows_everything_in_api_order() {
        let store = loaded();
        assert_eq!(ids(&store), ["bitcoin", "ethereum", "solana", "bnb"]);
        assert_eq!(store.visible(), store.full_set());
    }

    #[test]
    fn bitcoin_ethereum_scenario() {
        let mut store = ViewStateStore::new();
        store.set_full_set(vec![
            coin("bitcoin", "Bitcoin", "btc", 900.0, 0.0),
            coin("ethereum", "Ethereum", "eth", 400.0, 0.0),
        ]);

        store.set_query("eth");
        assert_eq!(ids(&store), ["ethereum"]);

        store.toggle_sort(SortField::MarketCap);
        assert_eq!(ids(&store), ["ethereum"]);
    }

    #[test]
    fn toggle_same_field_flips_and_new_field_resets_to_asc() {
        let mut store = loaded();

        store.toggle_sort(SortField::MarketCap);
        assert_eq!(store.sort().direction, SortDirection::Asc);
        assert_eq!(ids(&store), ["solana", "bnb", "ethereum", "bitcoin"]);

        store.toggle_sort(SortField::MarketCap);
        assert_eq!(store.sort().direction, SortDirection::Desc);
        assert_eq!(ids(&store), ["bitcoin", "ethereum", "bnb", "solana"]);

        store.toggle_sort(SortField::PriceChangePercent24h);
        assert_eq!(
            store.sort().field,
            Some(SortField::PriceChangePercent24h)
        );
        assert_eq!(store.sort().direction, SortDirection::Asc);
        assert_eq!(ids(&store), ["ethereum", "bnb", "bitcoin", "solana"]);
    }

    #[test]
    fn asc_desc_asc_returns_to_the_same_order() {
        let mut store = loaded();
        store.toggle_sort(SortField::PriceChangePercent24h);
        let first: Vec<CoinRecord> = store.visible().to_vec();

        store.toggle_sort(SortField::PriceChangePercent24h);
        store.toggle_sort(SortField::PriceChangePercent24h);
        assert_eq!(store.visible(), first.as_slice());
    }

    #[test]
    fn unsupported_field_keeps_api_order() {
        let mut store = loaded();
        store.toggle_sort(SortField::Other("name".to_string()));
        assert_eq!(ids(&store), ["bitcoin", "ethereum", "solana", "bnb"]);
        store.toggle_sort(SortField::Other("name".to_string()));
        assert_eq!(store.sort().direction, SortDirection::Desc);
        assert_eq!(ids(&store), ["bitcoin", "ethereum", "solana", "bnb"]);
    }

    #[test]
    fn active_sort_survives_query_changes() {
        let mut store = loaded();
        store.toggle_sort(SortField::MarketCap);

        store.set_query("b");
        assert_eq!(ids(&store), ["bnb", "bitcoin"]);

        store.set_query("");
        assert_eq!(ids(&store), ["solana", "bnb", "ethereum", "bitcoin"]);
    }

    #[test]
    fn new_snapshot_is_filtered_and_sorted_with_current_state() {
        let mut store = ViewStateStore::new();
        store.set_query("o");
        store.toggle_sort(SortField::MarketCap);
        store.toggle_sort(SortField::MarketCap);

        store.set_full_set(vec![
            coin("solana", "Solana", "sol", 80.0, 0.0),
            coin("ethereum", "Ethereum", "eth", 400.0, 0.0),
            coin("bitcoin", "Bitcoin", "btc", 900.0, 0.0),
        ]);
        assert_eq!(ids(&store), ["bitcoin", "solana"]);
    }
}
