use crate::utils::error::{Result, UtilsError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(UtilsError::InvalidArgument {
            argument: field_name.to_string(),
            reason: "Value cannot be empty".to_string(),
        });
    }

    if value.trim().is_empty() {
        return Err(UtilsError::InvalidArgument {
            argument: field_name.to_string(),
            reason: "Value cannot be whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Namespaces are dot-separated identifiers, e.g. `SwitcherUtils.Templates`.
pub fn validate_namespace(field_name: &str, namespace: &str) -> Result<()> {
    validate_non_empty_string(field_name, namespace)?;

    let malformed = namespace
        .split('.')
        .any(|segment| segment.is_empty() || segment.chars().any(char::is_whitespace));
    if malformed {
        return Err(UtilsError::InvalidArgument {
            argument: field_name.to_string(),
            reason: format!("'{}' is not a dot-separated namespace", namespace),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("resource_name", "Templates.default.toml").is_ok());
        assert!(validate_non_empty_string("resource_name", "").is_err());
        assert!(validate_non_empty_string("resource_name", "  \t\n").is_err());
    }

    #[test]
    fn test_invalid_argument_names_the_field() {
        match validate_non_empty_string("resource_name", " ") {
            Err(UtilsError::InvalidArgument { argument, .. }) => {
                assert_eq!(argument, "resource_name")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_namespace() {
        assert!(validate_namespace("namespace", "SwitcherUtils").is_ok());
        assert!(validate_namespace("namespace", "SwitcherUtils.Templates").is_ok());
        assert!(validate_namespace("namespace", "SwitcherUtils..Templates").is_err());
        assert!(validate_namespace("namespace", ".SwitcherUtils").is_err());
        assert!(validate_namespace("namespace", "Switcher Utils").is_err());
    }
}
