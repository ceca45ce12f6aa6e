//! Contact record: one name plus its phone numbers.

use crate::domain::{ContactName, PhoneNumber, ValidationError};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: a name and an ordered sequence of phone numbers.
///
/// Phones keep insertion order and may contain duplicate values. The
/// record exclusively owns its phones; they are never shared across
/// records. The name is fixed at construction; renaming a contact is
/// not supported.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    name: ContactName,
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a new record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: ContactName::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// The phone numbers, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Validate `value` and append it to the phone sequence.
    ///
    /// On validation failure the sequence is unchanged.
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(value)?;
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone whose value equals `value`.
    ///
    /// Returns whether a phone was removed; absence is not an error.
    pub fn remove_phone(&mut self, value: &str) -> bool {
        match self.phones.iter().position(|p| p == value) {
            Some(idx) => {
                self.phones.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`, in place.
    ///
    /// The replacement is validated before the old value is touched, so a
    /// failed edit leaves the record unchanged.
    ///
    /// # Errors
    ///
    /// `RecordError::PhoneNotFound` if `old` is not on the record,
    /// `RecordError::Validation` if `new` is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let idx = self
            .phones
            .iter()
            .position(|p| p == old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;

        let replacement = PhoneNumber::new(new)?;
        self.phones[idx] = replacement;
        Ok(())
    }

    /// Find the first phone whose value equals `value`.
    pub fn find_phone(&self, value: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| *p == value)
    }

    /// The record's primary (first) phone number, if any.
    pub fn first_phone(&self) -> Option<&PhoneNumber> {
        self.phones.first()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_find_phone() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        let found = record.find_phone("1234567890");
        assert_eq!(found.map(|p| p.as_str()), Some("1234567890"));
        assert!(record.find_phone("9999999999").is_none());
    }

    #[test]
    fn test_add_phone_rejects_invalid_without_side_effects() {
        let mut record = ContactRecord::new("John");
        let result = record.add_phone("12345");
        assert!(matches!(result, Err(ValidationError::InvalidPhone(_))));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_phones_keep_insertion_order_and_duplicates() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1234567890", "5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_phone_removes_first_match_only() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_phone("1234567890").unwrap();

        assert!(record.remove_phone("1234567890"));

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["5555555555", "1234567890"]);
    }

    #[test]
    fn test_remove_absent_phone_is_a_noop() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        assert!(!record.remove_phone("9999999999"));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_replaces_in_place() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        record.edit_phone("1234567890", "1112223333").unwrap();

        let values: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(values, vec!["1112223333", "5555555555"]);
    }

    #[test]
    fn test_edit_absent_phone_fails_and_leaves_record_unchanged() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        let before = record.clone();

        let result = record.edit_phone("9999999999", "1112223333");
        assert_eq!(
            result,
            Err(RecordError::PhoneNotFound("9999999999".to_string()))
        );
        assert_eq!(record, before);
    }

    #[test]
    fn test_edit_to_invalid_value_fails_and_leaves_record_unchanged() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        let before = record.clone();

        let result = record.edit_phone("1234567890", "bad");
        assert!(matches!(result, Err(RecordError::Validation(_))));
        assert_eq!(record, before);
    }

    #[test]
    fn test_display_joins_phones() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();

        assert_eq!(
            record.to_string(),
            "Contact name: John, phones: 1234567890; 5555555555"
        );
    }

    #[test]
    fn test_display_with_no_phones() {
        let record = ContactRecord::new("John");
        assert_eq!(record.to_string(), "Contact name: John, phones: ");
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let mut record = ContactRecord::new("John");
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"John","phones":["1234567890"]}"#);

        let back: ContactRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_deserialization_revalidates_phones() {
        let json = r#"{"name":"John","phones":["not-a-phone"]}"#;
        let result: Result<ContactRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
