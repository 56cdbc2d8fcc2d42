//! Strongly-typed value objects used by domain entities.
//!
//! These wrappers enforce basic invariants (e.g., positive identifiers,
//! normalized/validated email, bounded lead score) so that once a value reaches
//! the domain layer it can be treated as trusted.
use std::ops::Deref;

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::{ValidateEmail, ValidateUrl};

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is zero or negative.
    #[error("id must be greater than zero")]
    NonPositiveId,
    /// Provided email failed format validation.
    #[error("invalid email address")]
    InvalidEmail,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Provided value failed custom validation.
    #[error("invalid value: {0}")]
    InvalidValue(String),
    /// Provided url failed format validation.
    #[error("invalid url address")]
    InvalidUrl,
    /// Lead score outside of `0..=100`.
    #[error("lead score must be between {min} and {max}", min = LeadScore::MIN, max = LeadScore::MAX)]
    ScoreOutOfRange,
}

/// Normalizes and validates an email string.
fn normalize_email<S: Into<String>>(email: S) -> Result<String, TypeConstraintError> {
    let normalized = email.into().trim().to_lowercase();
    if normalized.validate_email() {
        Ok(normalized)
    } else {
        Err(TypeConstraintError::InvalidEmail)
    }
}

/// Trims an optional free-form value, turning blank input into `None`.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Strips unsafe HTML from free text and drops blank results.
pub fn sanitize_text(value: Option<String>) -> Option<String> {
    normalize_optional(value.map(|s| ammonia::clean(&s)))
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId)
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(CompanyId, "Unique identifier for a company.");
id_newtype!(ContactId, "Unique identifier for a contact.");
id_newtype!(LeadListId, "Unique identifier for a lead list.");
id_newtype!(SavedSearchId, "Unique identifier for a saved search.");

/// Lower-cased and validated contact email address.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Validates and normalizes an email string.
    pub fn new<S: Into<String>>(email: S) -> Result<Self, TypeConstraintError> {
        let normalized = normalize_email(email)?;
        Ok(Self(normalized))
    }

    /// Borrow the email as a `&str`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the owned inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ContactEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ContactEmail {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContactEmail> for String {
    fn from(value: ContactEmail) -> Self {
        value.0
    }
}

/// Wrapper for non-empty, trimmed strings.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let inner = NonEmptyString::new(value)?;
                Ok(Self(inner.into_inner()))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(CompanyName, "Company name enforcing non-empty values.");

non_empty_string_newtype!(
    PersonName,
    "First or last name of a contact enforcing non-empty values."
);

non_empty_string_newtype!(
    LeadListName,
    "Lead list title enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    SavedSearchName,
    "Saved search label enforcing trimmed, non-empty values."
);

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
/// Absolute web address such as a company website or social profile.
pub struct WebUrl(String);

impl WebUrl {
    /// Width of the url columns.
    pub const MAX_LEN: usize = 255;

    /// Trims the value, assumes `https://` when no scheme is given and validates it.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let url = NonEmptyString::new(value)?.into_inner();
        let url = if url.contains("://") {
            url
        } else {
            format!("https://{url}")
        };

        if url.chars().count() > Self::MAX_LEN {
            return Err(TypeConstraintError::InvalidValue(format!(
                "url must be at most {} characters",
                Self::MAX_LEN
            )));
        }
        if !url.validate_url() {
            Err(TypeConstraintError::InvalidUrl)
        } else {
            Ok(Self(url))
        }
    }

    /// Borrow the url.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the owned url.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for WebUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for WebUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for WebUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WebUrl> for String {
    fn from(value: WebUrl) -> Self {
        value.0
    }
}

/// Lead qualification score, always within `0..=100`.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LeadScore(i32);

impl LeadScore {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 100;

    /// Accepts values inside the allowed range only.
    pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::ScoreOutOfRange)
        }
    }

    /// Builds a score from an unbounded total, saturating at the range edges.
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl Display for LeadScore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i32> for LeadScore {
    type Error = TypeConstraintError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LeadScore> for i32 {
    fn from(value: LeadScore) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(CompanyId::new(0), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(ContactId::new(-3), Err(TypeConstraintError::NonPositiveId));
        assert_eq!(LeadListId::new(7).unwrap().get(), 7);
    }

    #[test]
    fn email_is_trimmed_and_lowercased() {
        let email = ContactEmail::new("  Alex.Chen@TechFlow.io ").unwrap();
        assert_eq!(email.as_str(), "alex.chen@techflow.io");
        assert!(ContactEmail::new("not-an-email").is_err());
    }

    #[test]
    fn names_reject_blank_values() {
        assert_eq!(
            CompanyName::new("   "),
            Err(TypeConstraintError::EmptyString)
        );
        assert_eq!(PersonName::new(" Maria ").unwrap().as_str(), "Maria");
    }

    #[test]
    fn web_url_assumes_https() {
        let url = WebUrl::new("linkedin.com/in/alexchen").unwrap();
        assert_eq!(url.as_str(), "https://linkedin.com/in/alexchen");
        let url = WebUrl::new("http://example.com").unwrap();
        assert_eq!(url.as_str(), "http://example.com");
        assert_eq!(WebUrl::new("https://"), Err(TypeConstraintError::InvalidUrl));
    }

    #[test]
    fn web_url_length_counts_the_added_scheme() {
        let host = format!("{}.com", "a".repeat(250));
        assert!(host.len() <= WebUrl::MAX_LEN);
        assert!(matches!(
            WebUrl::new(host),
            Err(TypeConstraintError::InvalidValue(_))
        ));
    }

    #[test]
    fn lead_score_bounds() {
        assert!(LeadScore::new(101).is_err());
        assert!(LeadScore::new(-1).is_err());
        assert_eq!(LeadScore::new(100).unwrap().get(), 100);
        assert_eq!(LeadScore::clamped(140).get(), 100);
        assert_eq!(LeadScore::clamped(-5).get(), 0);
        assert_eq!(LeadScore::default().get(), 0);
    }

    #[test]
    fn optional_values_are_normalized() {
        assert_eq!(normalize_optional(Some("  ".into())), None);
        assert_eq!(
            normalize_optional(Some(" Austin ".into())),
            Some("Austin".to_string())
        );
        assert_eq!(
            sanitize_text(Some("<script>alert(1)</script>Hello".into())),
            Some("Hello".to_string())
        );
    }
}
