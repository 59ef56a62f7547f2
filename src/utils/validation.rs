use crate::utils::error::{FinderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(FinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| FinderError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// Shared checks for the knobs every config source exposes.
pub fn validate_discovery_settings(
    timeout_seconds: u64,
    concurrent_requests: usize,
    user_agent: &str,
) -> Result<()> {
    validate_range("timeout_seconds", timeout_seconds, 1, 60)?;
    validate_range("concurrent_requests", concurrent_requests, 1, 64)?;
    validate_non_empty_string("user_agent", user_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_path", "./output").is_ok());
        assert!(validate_path("output_path", "").is_err());
        assert!(validate_path("output_path", "out\0put").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("timeout_seconds", 7u64, 1, 60).is_ok());
        assert!(validate_range("timeout_seconds", 0u64, 1, 60).is_err());
        assert!(validate_range("timeout_seconds", 61u64, 1, 60).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("request.json".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("input", &present).unwrap(), "request.json");
        assert!(matches!(
            validate_required_field("input", &missing),
            Err(FinderError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_discovery_settings() {
        assert!(validate_discovery_settings(7, 4, "Mozilla/5.0").is_ok());
        assert!(validate_discovery_settings(7, 0, "Mozilla/5.0").is_err());
        assert!(validate_discovery_settings(7, 4, "   ").is_err());
    }
}
