use crate::models::CoinRecord;

/// Column the table can be sorted by.
///
/// Only the two numeric market columns have an ordering; any other column
/// name is kept so it can become the active field, but it never reorders rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SortField {
    MarketCap,
    PriceChangePercent24h,
    Other(String),
}

impl SortField {
    /// Parse a user-supplied column name. Never fails: unknown names map to `Other`.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "cap" | "mcap" | "market_cap" | "marketcap" => SortField::MarketCap,
            "change" | "24h" | "price_change_percentage_24h" => SortField::PriceChangePercent24h,
            _ => SortField::Other(name.to_string()),
        }
    }

    /// Numeric sort key for this field, if the field is sortable.
    pub fn key(&self, coin: &CoinRecord) -> Option<f64> {
        match self {
            SortField::MarketCap => Some(coin.market_cap),
            SortField::PriceChangePercent24h => Some(coin.price_change_percent_24h),
            SortField::Other(_) => None,
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortField::MarketCap => write!(f, "market_cap"),
            SortField::PriceChangePercent24h => write!(f, "price_change_percentage_24h"),
            SortField::Other(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flip(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "asc"),
            SortDirection::Desc => write!(f, "desc"),
        }
    }
}

/// Active sort: no field until the user picks one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    pub field: Option<SortField>,
    pub direction: SortDirection,
}

impl SortState {
    /// Direction to show next to `field`'s control, if it is the active one.
    pub fn direction_for(&self, field: &SortField) -> Option<SortDirection> {
        match &self.field {
            Some(active) if active == field => Some(self.direction),
            _ => None,
        }
    }
}
