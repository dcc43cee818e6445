//! Sort options and their wire encoding.

use std::str::FromStr;

/// A selectable sort order for the store list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOption {
    /// Name (A-Z)
    #[default]
    NameAsc,
    /// Featured stores first
    FeaturedDesc,
    /// Most popular (click count) first
    PopularityDesc,
    /// Highest cashback first (compound sort)
    CashbackDesc,
}

impl SortOption {
    /// Every selectable option, in menu order.
    pub const ALL: [SortOption; 4] = [
        SortOption::NameAsc,
        SortOption::FeaturedDesc,
        SortOption::PopularityDesc,
        SortOption::CashbackDesc,
    ];

    /// Human-readable URL token (`sort` address-bar parameter).
    pub fn token(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "name-asc",
            SortOption::FeaturedDesc => "featured-desc",
            SortOption::PopularityDesc => "clicks-desc",
            SortOption::CashbackDesc => "cashback-desc",
        }
    }

    /// Display label for a sort menu.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::NameAsc => "Name (A-Z)",
            SortOption::FeaturedDesc => "Featured",
            SortOption::PopularityDesc => "Most Popular",
            SortOption::CashbackDesc => "Highest Cashback",
        }
    }

    /// Parse a URL token back into an option.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|opt| opt.token() == token)
    }

    /// The `(_sort, _order)` pair sent to the backend.
    ///
    /// Fields and orders are comma-joined positionally: sort key *i* pairs
    /// with order token *i*. The cashback sort is compound: fixed-amount
    /// type ascending first, then cashback amount descending.
    pub fn wire_params(&self) -> (&'static str, &'static str) {
        match self {
            SortOption::NameAsc => ("name", "asc"),
            SortOption::FeaturedDesc => ("featured", "desc"),
            SortOption::PopularityDesc => ("clicks", "desc"),
            SortOption::CashbackDesc => ("amount_type,cashback_amount", "asc,desc"),
        }
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| {
            let tokens: Vec<&str> = Self::ALL.iter().map(|o| o.token()).collect();
            format!("unknown sort '{s}' (expected one of: {})", tokens.join(", "))
        })
    }
}
