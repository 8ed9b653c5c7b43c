//! Serde helpers that write big integers as decimal strings.
//!
//! Share values routinely exceed what JSON numbers carry without loss, so
//! integers travel as strings such as `"28735619723864"`.

/// Use with `#[serde(with = "recovery_math::serde_utils::decimal")]`.
pub mod decimal {
    use num_bigint::BigInt;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e| {
            serde::de::Error::custom(format!("invalid decimal integer {s:?}: {e}"))
        })
    }
}
