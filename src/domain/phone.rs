//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated phone number: exactly ten ASCII digits.
///
/// Construction is the only way in, so every `PhoneNumber` in the system
/// is known to be well-formed. Formatting characters are not accepted.
///
/// # Example
///
/// ```
/// use contact_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("555-1234").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate `phone` and wrap it.
    ///
    /// # Errors
    ///
    /// `ValidationError::InvalidPhone` unless the value is exactly ten
    /// ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self(phone))
    }

    /// Pure validation predicate: ten characters, all ASCII digits.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
    }

    /// The number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Lookup compares against raw input, so allow comparison with plain strings.
impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// On the wire a phone is a bare string; deserialization re-validates.
impl Serialize for PhoneNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        PhoneNumber::new(raw).map_err(serde::de::Error::custom)
    }
}
