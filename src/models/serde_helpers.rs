//! Serde serialization helpers for ensuring consistent JSON output

use serde::{Serialize, Serializer};

/// Serialize Option<T> as null when None (don't skip the field)
///
/// Opted-out annotations must reach the renderer with an explicit `null`
/// depth/zIndex rather than a missing key.
pub fn serialize_option_as_null<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(v) => serializer.serialize_some(v),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Holder {
        #[serde(serialize_with = "serialize_option_as_null")]
        depth: Option<i32>,
    }

    #[test]
    fn test_none_is_null() {
        let json = serde_json::to_string(&Holder { depth: None }).unwrap();
        assert_eq!(json, r#"{"depth":null}"#);

        let json = serde_json::to_string(&Holder { depth: Some(-2) }).unwrap();
        assert_eq!(json, r#"{"depth":-2}"#);
    }
}
