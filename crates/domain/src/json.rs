//! Lenient JSON decoding shared by the resource types.
//!
//! Request bodies follow loose decoding rules: a missing field and an
//! explicit `null` both leave the zero value in place, and keys may use the
//! capitalised or upper-case spelling of a field name.

use serde::{Deserialize, Deserializer};

/// Decode `T`, treating an explicit `null` as `T::default()`.
///
/// # Errors
///
/// Propagates any error other than `null` from `T`'s own deserializer.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Counter {
        #[serde(deserialize_with = "null_as_default")]
        count: i64,
        #[serde(deserialize_with = "null_as_default")]
        label: String,
    }

    #[test]
    fn should_fall_back_to_default_on_null() {
        let decoded: Counter = serde_json::from_str(r#"{"count":null,"label":null}"#).unwrap();
        assert_eq!(decoded.count, 0);
        assert!(decoded.label.is_empty());
    }

    #[test]
    fn should_keep_present_values() {
        let decoded: Counter = serde_json::from_str(r#"{"count":3,"label":"x"}"#).unwrap();
        assert_eq!(decoded.count, 3);
        assert_eq!(decoded.label, "x");
    }

    #[test]
    fn should_still_reject_wrong_types() {
        assert!(serde_json::from_str::<Counter>(r#"{"count":"three"}"#).is_err());
    }
}
