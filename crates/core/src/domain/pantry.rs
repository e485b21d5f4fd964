use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PantryItemId(pub i64);

/// A single stocked ingredient as recorded by the pantry owner.
///
/// Only `name` and `expiration_date` take part in recipe matching. The remaining
/// fields are carried through untouched for callers that display them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    #[serde(default)]
    pub id: Option<PantryItemId>,
    pub name: String,
    pub expiration_date: NaiveDate,
    #[serde(default)]
    pub quantity: Option<Decimal>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, expiration_date: NaiveDate) -> Self {
        Self {
            id: None,
            name: name.into(),
            expiration_date,
            quantity: None,
            unit: None,
            category: None,
            notes: None,
        }
    }

    /// An item expiring today is still usable today.
    pub fn is_available_on(&self, date: NaiveDate) -> bool {
        self.expiration_date >= date
    }
}
