//! Common serde helpers for handling record ids from SurrealDB
//!
//! Record keys are integers. Depending on where a value comes from, the id
//! arrives in different shapes:
//! - a plain number (API JSON, projected queries)
//! - a string `"table:id"`
//! - a native `RecordId` (rows read through the SDK)
//!
//! [`numeric_id::deserialize`] accepts all three and yields the integer key.

use serde::Deserializer;
use serde::de::{self, MapAccess, Visitor};
use std::fmt;
use surrealdb::RecordId;

pub mod numeric_id {
    use super::*;
    use serde::Deserialize;

    struct NumericIdVisitor;

    impl<'de> Visitor<'de> for NumericIdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer, a 'table:id' string, or a RecordId")
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            // Strip the table prefix if present ("products:42" -> "42")
            let key = value.rsplit(':').next().unwrap_or(value);
            key.parse::<i64>()
                .map_err(|_| de::Error::custom(format!("invalid numeric record id: {value}")))
        }

        fn visit_map<M>(self, map: M) -> Result<Self::Value, M::Error>
        where
            M: MapAccess<'de>,
        {
            // Delegate to the native RecordId representation, then extract the key
            let id = RecordId::deserialize(de::value::MapAccessDeserializer::new(map))?;
            let key = id.key().to_string();
            key.parse::<i64>().map_err(|_| {
                de::Error::custom(format!("record id {id} does not carry a numeric key"))
            })
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(NumericIdVisitor)
    }
}
