//! Service name validation

use crate::error::{Result, ScaffoldError};

const MAX_NAME_LEN: usize = 64;

/// Reject names that cannot be used as a directory, a JSON key and a
/// package name at the same time
///
/// Accepted: lowercase ASCII letters, digits and single inner hyphens,
/// starting with a letter.
pub fn validate_service_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(ScaffoldError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.is_empty() {
        return invalid("name is empty");
    }
    if name.len() > MAX_NAME_LEN {
        return invalid("name is longer than 64 characters");
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return invalid("name must start with a lowercase letter");
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return invalid("only lowercase letters, digits and '-' are allowed");
    }
    if name.ends_with('-') || name.contains("--") {
        return invalid("hyphens must separate words");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for name in ["api", "user-service", "worker2", "a1-b2-c3"] {
            assert!(validate_service_name(name).is_ok(), "{name}");
        }
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "Api", "1api", "-api", "api-", "a--b", "my_service", "a b", "../x"] {
            assert!(validate_service_name(name).is_err(), "{name}");
        }
    }

    #[test]
    fn test_too_long() {
        let name = "a".repeat(65);
        let err = validate_service_name(&name).unwrap_err();
        assert!(err.to_string().contains("64"));
    }
}
