use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().replace('-', "_").to_ascii_lowercase();
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use pset_core::enums::TaskStatus;

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let status: TaskStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: TaskStatus = parse_enum("in-progress", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn parses_uppercase_input() {
        let status: TaskStatus = parse_enum("NOT_STARTED", "status").expect("status should parse");
        assert_eq!(status, TaskStatus::NotStarted);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<TaskStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
