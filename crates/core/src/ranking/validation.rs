//! Field-level validation of domain entities.
//!
//! A [`Validator`] accumulates violations keyed by field name. Only the first
//! message recorded for a field is kept, so a field never reports more than
//! one problem and re-checking it cannot overwrite the original message.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use url::Url;
use uuid::Uuid;

use super::types::{Attribute, Entry, Rank};

/// Field name to message map produced by a failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    /// Returns the message recorded for a field, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field} {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Accumulates field violations against a candidate entity.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` under `field` when `ok` is false.
    ///
    /// Later violations of an already reported field are dropped.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.errors
                .0
                .entry(field.to_string())
                .or_insert_with(|| message.to_string());
        }
    }

    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Consumes the validator, returning the violations if there are any.
    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.valid() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Returns true if `s` parses as a UUID.
pub fn is_uuid(s: &str) -> bool {
    Uuid::parse_str(s).is_ok()
}

/// Returns true if `s` parses as an absolute URL.
pub fn is_url(s: &str) -> bool {
    Url::parse(s).is_ok()
}

fn length_between(s: &str, min: usize, max: usize) -> bool {
    let len = s.chars().count();
    len >= min && len <= max
}

pub fn validate_rank(v: &mut Validator, rank: &Rank) {
    v.check(is_uuid(&rank.id), "id", "must be a valid UUID");
    v.check(
        length_between(&rank.name, 5, 50),
        "name",
        "must be between 5 and 50 characters long",
    );
}

pub fn validate_attribute(v: &mut Validator, attribute: &Attribute) {
    v.check(is_uuid(&attribute.id), "id", "must be a valid UUID");
    v.check(
        length_between(&attribute.name, 3, 15),
        "name",
        "must be between 3 and 15 characters long",
    );
    v.check(
        attribute.description.chars().count() <= 150,
        "description",
        "must be a maximum of 150 characters long",
    );
    v.check(attribute.order > 0, "order", "must be a positive number");
    v.check(is_uuid(&attribute.rank_id), "rank_id", "must be a valid UUID");
}

pub fn validate_entry(v: &mut Validator, entry: &Entry) {
    v.check(is_uuid(&entry.id), "id", "must be a valid UUID");
    v.check(
        length_between(&entry.name, 3, 60),
        "name",
        "must be between 3 and 60 characters long",
    );
    v.check(is_url(&entry.image_url), "image_url", "must be a valid URL");
    v.check(is_uuid(&entry.rank_id), "rank_id", "must be a valid UUID");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::Scores;

    const RANK_ID: &str = "1ac85e34-cb6f-40c9-97bb-16267877bb13";

    #[test]
    fn test_validator_starts_valid() {
        let v = Validator::new();
        assert!(v.valid());
        assert!(v.errors().is_empty());
        assert!(v.finish().is_ok());
    }

    #[test]
    fn test_validator_keeps_first_message_per_field() {
        let mut v = Validator::new();
        v.check(false, "name", "first");
        v.check(false, "name", "second");
        v.check(true, "id", "never recorded");

        assert!(!v.valid());
        assert_eq!(v.errors().len(), 1);
        assert_eq!(v.errors().get("name"), Some("first"));
        assert_eq!(v.errors().get("id"), None);
    }

    #[test]
    fn test_validation_errors_serialize_as_map() {
        let mut v = Validator::new();
        v.check(false, "name", "must not be empty");
        let json = serde_json::to_value(v.errors()).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "must not be empty" }));
    }

    #[test]
    fn test_is_uuid() {
        assert!(is_uuid(RANK_ID));
        assert!(!is_uuid("R1"));
        assert!(!is_uuid(""));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://videogame.com/snes.png"));
        assert!(is_url("http://localhost:4566/ranking/a.png"));
        assert!(!is_url("videogame.com/snes.png"));
        assert!(!is_url(""));
    }

    #[test]
    fn test_validate_rank_valid() {
        let rank = Rank::new("Video Game Consoles", true);
        let mut v = Validator::new();
        validate_rank(&mut v, &rank);
        assert!(v.valid());
    }

    #[test]
    fn test_validate_rank_name_bounds() {
        let longest = "x".repeat(50);
        let too_long = "x".repeat(51);
        let cases = [
            ("Abcd", false),
            ("Abcde", true),
            (longest.as_str(), true),
            (too_long.as_str(), false),
        ];

        for (name, ok) in cases {
            let rank = Rank::new(name, false);
            let mut v = Validator::new();
            validate_rank(&mut v, &rank);
            assert_eq!(v.valid(), ok, "name of length {}", name.len());
        }
    }

    #[test]
    fn test_validate_rank_reports_every_field() {
        let rank = Rank::new("abc", false).with_id("not-a-uuid");
        let mut v = Validator::new();
        validate_rank(&mut v, &rank);

        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("id"), Some("must be a valid UUID"));
        assert_eq!(
            errors.get("name"),
            Some("must be between 5 and 50 characters long")
        );
    }

    #[test]
    fn test_validate_attribute() {
        let valid = Attribute::new("Controls", "Quality of the controls", 1, RANK_ID);
        let mut v = Validator::new();
        validate_attribute(&mut v, &valid);
        assert!(v.valid());

        let invalid = Attribute::new("Co", "x".repeat(151), 0, "R1");
        let mut v = Validator::new();
        validate_attribute(&mut v, &invalid);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert_eq!(
            errors.get("name"),
            Some("must be between 3 and 15 characters long")
        );
        assert_eq!(
            errors.get("description"),
            Some("must be a maximum of 150 characters long")
        );
        assert_eq!(errors.get("order"), Some("must be a positive number"));
        assert_eq!(errors.get("rank_id"), Some("must be a valid UUID"));
    }

    #[test]
    fn test_validate_attribute_empty_description_allowed() {
        let attribute = Attribute::new("Sound", "", 3, RANK_ID);
        let mut v = Validator::new();
        validate_attribute(&mut v, &attribute);
        assert!(v.valid());
    }

    #[test]
    fn test_validate_entry() {
        let valid = Entry::new("SNES", "https://videogame.com/snes.png", Scores::new(), RANK_ID);
        let mut v = Validator::new();
        validate_entry(&mut v, &valid);
        assert!(v.valid());

        let invalid = Entry::new("NE", "not a url", Scores::new(), RANK_ID).with_id("E1");
        let mut v = Validator::new();
        validate_entry(&mut v, &invalid);
        let errors = v.finish().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get("id"), Some("must be a valid UUID"));
        assert_eq!(errors.get("image_url"), Some("must be a valid URL"));
        assert_eq!(errors.get("rank_id"), None);
    }

    #[test]
    fn test_validation_errors_display() {
        let mut v = Validator::new();
        v.check(false, "name", "is too short");
        v.check(false, "id", "must be a valid UUID");
        assert_eq!(
            v.errors().to_string(),
            "id must be a valid UUID, name is too short"
        );
    }
}
