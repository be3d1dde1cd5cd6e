//! Embedded product snapshot and its storage codec
//!
//! An order carries its product list as a denormalized snapshot stored
//! in-row. Each entry is persisted as a single delimited string:
//!
//! ```text
//! Category,Variety,Packaging,Volume,Price_per_unit
//! ```
//!
//! Round-trip guarantee: `decode(encode(s)) == s` as long as the first four
//! fields contain no comma. Anything after the fourth comma belongs to the
//! price, so `Price_per_unit` may itself contain commas.

use serde::{Deserialize, Serialize};

/// A product entry embedded in an order
///
/// Mirrors the catalog identity triple plus the trade quantities. Volume
/// and price are free-form strings end-to-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSnapshot {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Variety")]
    pub variety: String,
    #[serde(rename = "Packaging")]
    pub packaging: String,
    #[serde(rename = "Volume")]
    pub volume: String,
    #[serde(rename = "Price_per_unit")]
    pub price_per_unit: String,
}

/// Failure to decode a stored snapshot string
#[derive(Debug, thiserror::Error)]
#[error("invalid product snapshot '{raw}': expected 5 comma-separated fields")]
pub struct SnapshotDecodeError {
    pub raw: String,
}

impl ProductSnapshot {
    /// Encode to the delimited storage form
    pub fn encode(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.category, self.variety, self.packaging, self.volume, self.price_per_unit
        )
    }

    /// Decode from the delimited storage form
    pub fn decode(raw: &str) -> Result<Self, SnapshotDecodeError> {
        let mut parts = raw.splitn(5, ',');
        let mut next = || {
            parts.next().map(str::to_string).ok_or(SnapshotDecodeError {
                raw: raw.to_string(),
            })
        };
        Ok(Self {
            category: next()?,
            variety: next()?,
            packaging: next()?,
            volume: next()?,
            price_per_unit: next()?,
        })
    }
}

/// Encode a snapshot list, preserving order
pub fn encode_all(snapshots: &[ProductSnapshot]) -> Vec<String> {
    snapshots.iter().map(ProductSnapshot::encode).collect()
}

/// Decode a stored snapshot list, preserving order
pub fn decode_all(raw: &[String]) -> Result<Vec<ProductSnapshot>, SnapshotDecodeError> {
    raw.iter().map(|s| ProductSnapshot::decode(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> ProductSnapshot {
        ProductSnapshot {
            category: "apples".into(),
            variety: "gala".into(),
            packaging: "crate".into(),
            volume: "120".into(),
            price_per_unit: "1.50".into(),
        }
    }

    #[test]
    fn encode_uses_field_order() {
        assert_eq!(snapshot().encode(), "apples,gala,crate,120,1.50");
    }

    #[test]
    fn decode_round_trips() {
        let original = snapshot();
        let decoded = ProductSnapshot::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn price_keeps_trailing_commas() {
        let mut original = snapshot();
        original.price_per_unit = "1,50 per kg".into();
        let decoded = ProductSnapshot::decode(&original.encode()).unwrap();
        assert_eq!(decoded.price_per_unit, "1,50 per kg");
    }

    #[test]
    fn decode_rejects_missing_fields() {
        let err = ProductSnapshot::decode("apples,gala,crate").unwrap_err();
        assert!(err.to_string().contains("apples,gala,crate"));
    }

    #[test]
    fn decode_all_preserves_order() {
        let first = snapshot();
        let mut second = snapshot();
        second.variety = "fuji".into();
        let decoded = decode_all(&encode_all(&[first.clone(), second.clone()])).unwrap();
        assert_eq!(decoded, vec![first, second]);
    }
}
