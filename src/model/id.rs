//! Serde helpers for Discord snowflakes.
//!
//! Snowflakes exceed the 53 bits a JavaScript number holds, so they travel as strings.

pub mod u64_string {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;
        String::deserialize(deserializer)?
            .parse::<u64>()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        #[serde(with = "super::u64_string")]
        id: u64,
    }

    #[test]
    fn snowflake_survives_json_as_string() {
        let json = serde_json::to_string(&Wrapper {
            id: 1_234_567_890_123_456_789,
        })
        .unwrap();
        assert_eq!(json, r#"{"id":"1234567890123456789"}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 1_234_567_890_123_456_789);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let result = serde_json::from_str::<Wrapper>(r#"{"id":"abc"}"#);
        assert!(result.is_err());
    }
}
