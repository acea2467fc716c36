//! The unlock secret.
//!
//! # Tier Classification
//!
//! - **Tier 2: Validated Newtype** - Wraps a non-empty digit-only `String`

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Digit;
use crate::DomainError;

/// Fixed digit string that unlocks the experience (validated newtype)
///
/// This is a display gate, not a credential. `Debug` still masks the value so
/// it stays out of logs.
///
/// # Validation Rules
///
/// - Must not be empty
/// - Every character must be an ASCII digit
///
/// # Examples
///
/// ```
/// use keepsake_domain::value_objects::{Digit, Secret};
///
/// let secret = Secret::new("1906").unwrap();
/// assert_eq!(secret.len(), 4);
///
/// let entered: Vec<Digit> = "1906".chars().map(|c| Digit::try_from(c).unwrap()).collect();
/// assert!(secret.matches(&entered));
///
/// assert!(Secret::new("").is_err());
/// assert!(Secret::new("12a4").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Secret(String);

impl Secret {
    /// Create a new `Secret`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the value is empty or contains
    /// anything other than ASCII digits.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::validation("secret cannot be empty"));
        }
        if let Some(bad) = value.chars().find(|c| !c.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "secret must contain only digits, found {bad:?}"
            )));
        }
        Ok(Self(value))
    }

    /// Build from a literal known to be valid.
    pub(crate) fn new_unchecked(value: &'static str) -> Self {
        debug_assert!(!value.is_empty() && value.chars().all(|c| c.is_ascii_digit()));
        Self(value.to_string())
    }

    /// Number of digits the entry must reach before auto-verification.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; construction rejects empty secrets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exact comparison against an entered sequence.
    pub fn matches(&self, entered: &[Digit]) -> bool {
        entered.len() == self.0.len()
            && entered
                .iter()
                .map(|d| d.as_char())
                .eq(self.0.chars())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", "*".repeat(self.0.len()))
    }
}

impl From<Secret> for String {
    fn from(secret: Secret) -> Self {
        secret.0
    }
}

impl TryFrom<String> for Secret {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
