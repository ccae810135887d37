use std::{fs, path::Path};
use chrono::{DateTime, Utc};
use serde_derive::Deserialize;
use crate::{
    store::model::{Product, User},
    error::Error,
};

const BUILTIN_SEED: &str = include_str!("seed.json");

/// Orders in a seed document carry no total; the store computes it.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedOrder {
    pub id: String,
    pub user_id: String,
    pub product_ids: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<SeedOrder>,
}

impl SeedData {
    pub fn builtin() -> Result<Self, Error> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
