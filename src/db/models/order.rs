//! Order Model
//!
//! Orders embed their product list as snapshots (see [`super::snapshot`]) and
//! may reference an earlier order to inherit fields left unset at creation.

use serde::{Deserialize, Serialize};

use super::serde_helpers;
use super::snapshot::{self, ProductSnapshot, SnapshotDecodeError};

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Buy,
    Sell,
}

/// A placed order, with its embedded products decoded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(deserialize_with = "serde_helpers::numeric_id::deserialize")]
    pub id: i64,
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    #[serde(rename = "References", default, skip_serializing_if = "Option::is_none")]
    pub references: Option<i64>,
    #[serde(rename = "Products")]
    pub products: Vec<ProductSnapshot>,
    #[serde(rename = "Organisation_id")]
    pub organisation_id: i64,
}

/// Order creation payload
///
/// `Type` and `Organisation_id` are required; `References` and `Products`
/// may be omitted, in which case a referenced order can supply the products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    #[serde(rename = "References", default)]
    pub references: Option<i64>,
    #[serde(rename = "Products", default)]
    pub products: Option<Vec<ProductSnapshot>>,
    #[serde(rename = "Organisation_id")]
    pub organisation_id: i64,
}

impl OrderCreate {
    /// Backfill unset fields from a referenced order
    ///
    /// Only `Products` can be inherited; `Type` and `Organisation_id` are
    /// always required on the request itself. Fields the caller did set are
    /// left untouched.
    pub fn fill_from_reference(mut self, reference: &Order) -> Self {
        if self.products.is_none() {
            self.products = Some(reference.products.clone());
        }
        self
    }
}

/// Partial update: only fields that are present get merged onto the row
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderUpdate {
    #[serde(rename = "Type")]
    pub order_type: Option<OrderType>,
    #[serde(rename = "References")]
    pub references: Option<i64>,
    #[serde(rename = "Products")]
    pub products: Option<Vec<ProductSnapshot>>,
    #[serde(rename = "Organisation_id")]
    pub organisation_id: Option<i64>,
}

/// Storage shape of an order: products encoded to delimited strings
#[derive(Debug, Serialize)]
pub struct OrderRecord {
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    #[serde(rename = "References", skip_serializing_if = "Option::is_none")]
    pub references: Option<i64>,
    #[serde(rename = "Products")]
    pub products: Vec<String>,
    #[serde(rename = "Organisation_id")]
    pub organisation_id: i64,
}

impl OrderRecord {
    pub fn from_create(data: &OrderCreate) -> Self {
        Self {
            order_type: data.order_type,
            references: data.references,
            products: snapshot::encode_all(data.products.as_deref().unwrap_or(&[])),
            organisation_id: data.organisation_id,
        }
    }
}

/// Row shape read back from the database, products still encoded
#[derive(Debug, Deserialize)]
pub struct OrderRow {
    #[serde(deserialize_with = "serde_helpers::numeric_id::deserialize")]
    pub id: i64,
    #[serde(rename = "Type")]
    pub order_type: OrderType,
    #[serde(rename = "References", default)]
    pub references: Option<i64>,
    #[serde(rename = "Products", default)]
    pub products: Vec<String>,
    #[serde(rename = "Organisation_id")]
    pub organisation_id: i64,
}

impl OrderRow {
    pub fn decode(self) -> Result<Order, SnapshotDecodeError> {
        Ok(Order {
            id: self.id,
            order_type: self.order_type,
            references: self.references,
            products: snapshot::decode_all(&self.products)?,
            organisation_id: self.organisation_id,
        })
    }
}
