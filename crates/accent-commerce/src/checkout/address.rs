//! Contact and shipping address types.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// How to reach the customer about an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactInfo {
    /// E-mail address.
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    /// Create contact info with an e-mail address only.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            phone: None,
        }
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Check that the e-mail looks deliverable.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let email = self.email.trim();
        match email.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(CommerceError::Validation(format!(
                "invalid e-mail address: {:?}",
                self.email
            ))),
        }
    }
}

/// A postal address.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Address {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Street address.
    pub street: String,
    /// City.
    pub city: String,
    /// State or province.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal/ZIP code.
    pub zip: String,
    /// Country name.
    pub country: String,
}

impl Address {
    /// Create a new address.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        zip: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            street: street.into(),
            city: city.into(),
            state: None,
            zip: zip.into(),
            country: country.into(),
        }
    }

    /// Set the state or province.
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Format as single line.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.clone(), self.city.clone()];
        if let Some(ref state) = self.state {
            parts.push(state.clone());
        }
        parts.push(self.zip.clone());
        parts.push(self.country.clone());
        parts.join(", ")
    }

    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("street", &self.street),
            ("city", &self.city),
            ("zip", &self.zip),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    /// Check if address is complete.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CommerceError::Validation(format!(
                "address is missing: {}",
                missing.join(", ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> Address {
        Address::new("John", "Doe", "123 Main Street", "New York", "10001", "United States")
            .with_state("NY")
    }

    #[test]
    fn test_address_formatting() {
        let addr = address();
        assert_eq!(addr.full_name(), "John Doe");
        assert_eq!(addr.one_line(), "123 Main Street, New York, NY, 10001, United States");
    }

    #[test]
    fn test_complete_address_validates() {
        assert!(address().validate().is_ok());
    }

    #[test]
    fn test_missing_fields_reported() {
        let mut addr = address();
        addr.city = " ".to_string();
        addr.zip.clear();
        assert_eq!(addr.missing_fields(), vec!["city", "zip"]);
        assert!(addr.validate().is_err());
    }

    #[test]
    fn test_contact_validation() {
        assert!(ContactInfo::new("your@email.com").validate().is_ok());
        assert!(ContactInfo::new("no-at-sign").validate().is_err());
        assert!(ContactInfo::new("@domain.com").validate().is_err());
        assert!(ContactInfo::new("user@").validate().is_err());
    }
}
