//! Store catalog record.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Whether the cashback rate is exact or an upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
    /// Exact rate ("Flat")
    Flat,
    /// Upper bound ("Upto")
    Upto,
}

/// Whether the cashback amount is a currency value or a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AmountType {
    /// Fixed currency amount
    Fixed,
    /// Percentage of the purchase
    Percent,
}

/// Publication status of a store.
///
/// Wire tokens follow the backend's CMS vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreStatus {
    #[serde(rename = "publish")]
    Active,
    #[serde(rename = "draft")]
    ComingSoon,
    #[serde(rename = "trash")]
    Discontinued,
}

impl StoreStatus {
    /// Token sent to the backend as the `status` filter value.
    pub fn wire(&self) -> &'static str {
        match self {
            StoreStatus::Active => "publish",
            StoreStatus::ComingSoon => "draft",
            StoreStatus::Discontinued => "trash",
        }
    }

    /// Human-readable display name.
    pub fn label(&self) -> &'static str {
        match self {
            StoreStatus::Active => "Active",
            StoreStatus::ComingSoon => "Coming Soon",
            StoreStatus::Discontinued => "Discontinued",
        }
    }
}

impl FromStr for StoreStatus {
    type Err = String;

    /// Parse either the display form (`active`) or the wire token (`publish`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" | "publish" => Ok(StoreStatus::Active),
            "coming-soon" | "draft" => Ok(StoreStatus::ComingSoon),
            "discontinued" | "trash" => Ok(StoreStatus::Discontinued),
            other => Err(format!(
                "unknown status '{other}' (expected active, coming-soon, or discontinued)"
            )),
        }
    }
}

/// A store fetched from the catalog endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Store {
    /// Store unique identifier
    pub id: u64,

    /// Store display name
    pub name: String,

    /// Logo image reference
    #[serde(default)]
    pub logo: String,

    /// External shop URL
    #[serde(default)]
    pub url: String,

    /// Whether cashback is offered at all
    #[serde(default, deserialize_with = "flag")]
    pub cashback_enabled: bool,

    /// Exact vs upper-bound cashback rate
    #[serde(default = "default_rate_type")]
    pub rate_type: RateType,

    /// Currency vs percentage amount
    #[serde(default = "default_amount_type")]
    pub amount_type: AmountType,

    /// Cashback amount (non-negative)
    #[serde(default)]
    pub cashback_amount: f64,

    /// Promoted placement flag
    #[serde(default, deserialize_with = "flag")]
    pub is_promoted: bool,

    /// Sharable-link flag
    #[serde(default, deserialize_with = "flag")]
    pub is_sharable: bool,

    /// Publication status
    #[serde(default = "default_status")]
    pub status: StoreStatus,
}

impl Store {
    /// Format the cashback offer for display.
    ///
    /// Examples: `Flat $12.00 cashback`, `Upto 5.25% cashback`.
    pub fn cashback_label(&self) -> String {
        if !self.cashback_enabled {
            return "No cashback available".to_string();
        }

        let rate = match self.rate_type {
            RateType::Upto => "Upto",
            RateType::Flat => "Flat",
        };
        let amount = match self.amount_type {
            AmountType::Fixed => format!("${:.2}", self.cashback_amount),
            AmountType::Percent => format!("{:.2}%", self.cashback_amount),
        };

        format!("{rate} {amount} cashback")
    }
}

fn default_rate_type() -> RateType {
    RateType::Flat
}

fn default_amount_type() -> AmountType {
    AmountType::Fixed
}

fn default_status() -> StoreStatus {
    StoreStatus::Active
}

/// Accept both JSON booleans and the backend's 0/1 integer flags.
fn flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> Store {
        Store {
            id: 42,
            name: "Amazon".to_string(),
            logo: "https://example.com/logo.png".to_string(),
            url: "https://amazon.com".to_string(),
            cashback_enabled: true,
            rate_type: RateType::Upto,
            amount_type: AmountType::Percent,
            cashback_amount: 5.25,
            is_promoted: false,
            is_sharable: true,
            status: StoreStatus::Active,
        }
    }

    #[test]
    fn test_cashback_label_percent() {
        assert_eq!(sample_store().cashback_label(), "Upto 5.25% cashback");
    }

    #[test]
    fn test_cashback_label_fixed() {
        let mut store = sample_store();
        store.rate_type = RateType::Flat;
        store.amount_type = AmountType::Fixed;
        store.cashback_amount = 12.0;
        assert_eq!(store.cashback_label(), "Flat $12.00 cashback");
    }

    #[test]
    fn test_cashback_label_disabled() {
        let mut store = sample_store();
        store.cashback_enabled = false;
        assert_eq!(store.cashback_label(), "No cashback available");
    }

    #[test]
    fn test_status_wire_tokens() {
        assert_eq!(StoreStatus::Active.wire(), "publish");
        assert_eq!(StoreStatus::ComingSoon.wire(), "draft");
        assert_eq!(StoreStatus::Discontinued.wire(), "trash");
    }

    #[test]
    fn test_status_from_str_accepts_both_forms() {
        assert_eq!("active".parse::<StoreStatus>(), Ok(StoreStatus::Active));
        assert_eq!("draft".parse::<StoreStatus>(), Ok(StoreStatus::ComingSoon));
        assert!("gone".parse::<StoreStatus>().is_err());
    }

    #[test]
    fn test_deserialize_integer_flags() {
        let json = r#"{
            "id": 7,
            "name": "7-Eleven",
            "cashback_enabled": 1,
            "rate_type": "flat",
            "amount_type": "fixed",
            "cashback_amount": 2.5,
            "is_promoted": 0,
            "is_sharable": true,
            "status": "publish"
        }"#;

        let store: Store = serde_json::from_str(json).unwrap();
        assert!(store.cashback_enabled);
        assert!(!store.is_promoted);
        assert!(store.is_sharable);
        assert_eq!(store.status, StoreStatus::Active);
    }
}
