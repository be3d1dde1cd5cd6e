//! Organisation Model

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Which side of a trade an organisation sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrganisationType {
    Buyer,
    Seller,
}

/// A trading party
///
/// Names are globally unique (enforced by a database index). Organisations
/// are referenced by orders but never cascade-deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organisation {
    #[serde(deserialize_with = "serde_helpers::numeric_id::deserialize")]
    pub id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<OrganisationType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganisationCreate {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<OrganisationType>,
}

/// Partial update: only fields that are present get merged onto the row
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrganisationUpdate {
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub org_type: Option<OrganisationType>,
}
