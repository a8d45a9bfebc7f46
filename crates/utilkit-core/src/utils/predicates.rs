//! Type and format predicates
//!
//! The `is_*` functions answer yes/no about a value. The `validate_*`
//! functions check a string and explain what is wrong with it.

use crate::error::UtilsError;
use serde_json::Value;

pub fn is_bool(value: &Value) -> bool {
    value.is_boolean()
}

pub fn is_number(value: &Value) -> bool {
    value.is_number()
}

/// True for numbers without a fractional part, `2.0` included
pub fn is_int(value: &Value) -> bool {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => true,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|float| float.is_finite() && float.fract() == 0.0),
        _ => false,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_email(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|text| validate_email(text).is_ok())
}

pub fn is_url(value: &Value) -> bool {
    value.as_str().is_some_and(|text| validate_url(text).is_ok())
}

fn invalid(message: String) -> crate::AppError {
    UtilsError::Validation { message }.into()
}

/// Validate that a URL is properly formatted
pub fn validate_url(url: &str) -> crate::Result<()> {
    if url.is_empty() {
        return Err(invalid("URL cannot be empty".to_string()));
    }

    let Some(rest) = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
    else {
        return Err(invalid(format!(
            "Invalid URL '{}': URL must start with http:// or https://",
            url
        )));
    };

    let host = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if host.is_empty() || host.chars().any(char::is_whitespace) {
        return Err(invalid(format!("Invalid URL '{}': missing host", url)));
    }

    Ok(())
}

/// Validate email format
pub fn validate_email(email: &str) -> crate::Result<()> {
    if email.is_empty() {
        return Err(invalid("Email cannot be empty".to_string()));
    }

    if !email.contains('@') {
        return Err(invalid(format!(
            "Invalid email '{}': Email must contain @ symbol",
            email
        )));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(invalid(format!(
            "Invalid email '{}': Email must have username and domain parts",
            email
        )));
    }

    let domain = parts[1];
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(invalid(format!(
            "Invalid email '{}': Domain must contain dot",
            email
        )));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid(format!(
            "Invalid email '{}': Email must not contain whitespace",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_type_predicates() {
        assert!(is_bool(&json!(false)));
        assert!(!is_bool(&json!(0)));

        assert!(is_number(&json!(1.5)));
        assert!(!is_number(&json!("1")));

        assert!(is_string(&json!("")));
        assert!(!is_string(&json!(null)));
    }

    #[test]
    fn test_is_int() {
        assert!(is_int(&json!(3)));
        assert!(is_int(&json!(-3)));
        assert!(is_int(&json!(2.0)));
        assert!(is_int(&json!(u64::MAX)));
        assert!(!is_int(&json!(2.5)));
        assert!(!is_int(&json!("3")));
    }

    #[test]
    fn test_validate_url_accepts_valid_urls() {
        assert!(validate_url("http://localhost:3000").is_ok());
        assert!(validate_url("https://example.com/path?q=1").is_ok());
    }

    #[test]
    fn test_validate_url_rejects_invalid_urls() {
        assert!(validate_url("").is_err());
        assert!(validate_url("localhost:3000").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("https://").is_err());
        assert!(validate_url("https:///path").is_err());
    }

    #[test]
    fn test_validate_email_accepts_valid_emails() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("test.email@domain.org").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_invalid_emails() {
        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
        assert!(validate_email("user@domain@com").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("us er@domain.com").is_err());
    }

    #[test]
    fn test_value_format_predicates() {
        assert!(is_email(&json!("user@example.com")));
        assert!(!is_email(&json!(42)));
        assert!(is_url(&json!("https://example.com")));
        assert!(!is_url(&json!(["https://example.com"])));
    }

    #[test]
    fn test_validation_error_message() {
        let err = validate_email("invalid").err().map(|e| e.to_string());
        assert_eq!(
            err.as_deref(),
            Some("UtilsError: Validation error: Invalid email 'invalid': Email must contain @ symbol")
        );
    }
}
