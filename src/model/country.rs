//! Country reference records.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};

/// An ISO 3166 country referenced by profiles.
///
/// The two-letter code is the primary key. Codes and alpha-3 values are
/// normalized to uppercase at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub alpha3: String,
}

impl Country {
    /// Create a country record, validating the code shapes.
    pub fn new(code: String, name: String, alpha3: String) -> ValidationResult<Self> {
        if code.is_empty() {
            return Err(ValidationError::empty_string("code"));
        }
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "code",
                "a two-letter ISO 3166 code",
            ));
        }
        if name.is_empty() {
            return Err(ValidationError::empty_string("name"));
        }
        if alpha3.len() != 3 || !alpha3.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::invalid_format(
                "alpha3",
                "a three-letter ISO 3166 code",
            ));
        }

        Ok(Self {
            code: code.to_ascii_uppercase(),
            name,
            alpha3: alpha3.to_ascii_uppercase(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_country() {
        let country = Country::new(
            "us".to_string(),
            "United States of America".to_string(),
            "usa".to_string(),
        )
        .unwrap();
        assert_eq!(country.code, "US");
        assert_eq!(country.alpha3, "USA");
    }

    #[test]
    fn test_invalid_code_length() {
        let error = Country::new("USA".to_string(), "x".to_string(), "USA".to_string());
        assert!(error.is_err());
    }

    #[test]
    fn test_empty_code() {
        let error = Country::new(String::new(), "x".to_string(), "USA".to_string()).unwrap_err();
        assert_eq!(error.to_string(), "'code' cannot be an empty string");
    }
}
