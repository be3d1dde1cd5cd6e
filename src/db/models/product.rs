//! Product Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Catalog product, identified by its (Category, Variety, Packaging) triple
///
/// The triple is unique across the catalog (enforced by a database index).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(deserialize_with = "serde_helpers::numeric_id::deserialize")]
    pub id: i64,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Variety")]
    pub variety: String,
    #[serde(rename = "Packaging")]
    pub packaging: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Variety")]
    pub variety: String,
    #[serde(rename = "Packaging")]
    pub packaging: String,
}

/// Partial update: only fields that are present get merged onto the row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "Variety", skip_serializing_if = "Option::is_none")]
    pub variety: Option<String>,
    #[serde(rename = "Packaging", skip_serializing_if = "Option::is_none")]
    pub packaging: Option<String>,
}
