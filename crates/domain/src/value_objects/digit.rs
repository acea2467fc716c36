//! A single PIN digit.
//!
//! # Tier Classification
//!
//! - **Tier 2: Validated Newtype** - Wraps `char` restricted to `'0'..='9'`

use std::fmt;

use crate::DomainError;

/// One ASCII digit entered on the keypad or keyboard.
///
/// `*` and `#` exist on the keypad but are not digits and never parse.
///
/// # Examples
///
/// ```
/// use keepsake_domain::value_objects::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
///
/// assert!(Digit::try_from('#').is_err());
/// assert!(Digit::try_from('a').is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit(char);

impl Digit {
    /// Returns the underlying character.
    #[inline]
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Parses the first character of a key label such as `"5"`.
    ///
    /// Returns `None` for multi-character labels (`"Enter"`) or non-digits.
    pub fn from_key(key: &str) -> Option<Self> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c).ok(),
            _ => None,
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = DomainError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if !c.is_ascii_digit() {
            return Err(DomainError::parse(format!("not a digit: {c:?}")));
        }
        Ok(Self(c))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_ascii_digit() {
        for c in '0'..='9' {
            assert_eq!(Digit::try_from(c).unwrap().as_char(), c);
        }
    }

    #[test]
    fn rejects_keypad_symbols() {
        assert!(Digit::try_from('*').is_err());
        assert!(Digit::try_from('#').is_err());
    }

    #[test]
    fn rejects_non_ascii_digits() {
        // Arabic-Indic digit three
        assert!(Digit::try_from('\u{0663}').is_err());
    }

    #[test]
    fn from_key_only_accepts_single_digit_labels() {
        assert_eq!(Digit::from_key("4").map(Digit::as_char), Some('4'));
        assert!(Digit::from_key("Enter").is_none());
        assert!(Digit::from_key("12").is_none());
        assert!(Digit::from_key("").is_none());
    }
}
