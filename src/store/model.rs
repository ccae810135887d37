use chrono::{DateTime, SecondsFormat, Utc};
use serde_derive::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
}

/// An order as held by the store. `total` is fixed when the order is created.
#[derive(Clone, Debug, PartialEq)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub total: f64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// ISO-8601 UTC with a `Z` suffix. Fractional seconds appear only when
    /// present, so `2024-01-15T10:30:00Z` and `2024-01-15T10:30:00.123Z`.
    pub fn created_at_iso(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

#[derive(Clone, Debug)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
}

#[derive(Clone, Debug)]
pub struct NewOrder {
    pub user_id: String,
    pub product_ids: Vec<String>,
}
