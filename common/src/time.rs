/// Serde adapter for the TTL fields, which persist a [`chrono::Duration`]
/// as a whole number of seconds. Sub-second precision is never used by role
/// entries so it is deliberately dropped on encode.
pub mod duration_seconds {
    use chrono::Duration;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(duration.num_seconds())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let seconds = i64::deserialize(deserializer)?;
        Ok(Duration::seconds(seconds))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
    struct Wrapper {
        #[serde(with = "super::duration_seconds")]
        ttl: Duration,
    }

    #[test]
    fn duration_encodes_as_whole_seconds() -> anyhow::Result<()> {
        let json = serde_json::to_string(&Wrapper {
            ttl: Duration::minutes(3),
        })?;

        assert_eq!(json, r#"{"ttl":180}"#);

        Ok(())
    }

    #[test]
    fn seconds_decode_back_into_duration() -> anyhow::Result<()> {
        let wrapper = serde_json::from_str::<Wrapper>(r#"{"ttl":90}"#)?;

        assert_eq!(wrapper.ttl, Duration::seconds(90));

        Ok(())
    }
}
