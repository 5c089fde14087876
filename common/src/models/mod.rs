mod coin;
mod sort;

pub use coin::CoinRecord;
pub use sort::{SortDirection, SortField, SortState};
