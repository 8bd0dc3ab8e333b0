//! Item identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`ItemId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemIdError {
    /// The input string is empty or only whitespace.
    #[error("item id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("item id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
}

/// Opaque, stable identifier of a product in the cart.
///
/// The identifier is compared byte-for-byte; it is never trimmed or
/// normalized, so `"tea"` and `"Tea"` are different items.
///
/// ## Examples
///
/// ```
/// use teahouse_core::ItemId;
///
/// assert!(ItemId::parse("masala-chai").is_ok());
/// assert!(ItemId::parse("").is_err());
/// assert!(ItemId::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Maximum length of an item identifier.
    pub const MAX_LENGTH: usize = 128;

    /// Parse an `ItemId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or longer than
    /// [`ItemId::MAX_LENGTH`] bytes.
    pub fn parse(s: &str) -> Result<Self, ItemIdError> {
        if s.trim().is_empty() {
            return Err(ItemIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ItemIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)?;
        Ok(Self(value))
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_ids() {
        assert!(ItemId::parse("a").is_ok());
        assert!(ItemId::parse("masala-chai").is_ok());
        assert!(ItemId::parse("item 7").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ItemId::parse(""), Err(ItemIdError::Empty));
        assert_eq!(ItemId::parse(" \t"), Err(ItemIdError::Empty));
    }

    #[test]
    fn test_parse_too_long() {
        let long = "x".repeat(ItemId::MAX_LENGTH + 1);
        assert!(matches!(
            ItemId::parse(&long),
            Err(ItemIdError::TooLong { .. })
        ));
    }

    #[test]
    fn test_ids_are_case_sensitive() {
        assert_ne!(ItemId::parse("tea").unwrap(), ItemId::parse("Tea").unwrap());
    }

    #[test]
    fn test_serde_is_a_plain_string() {
        let id = ItemId::parse("cake").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"cake\"");

        let back: ItemId = serde_json::from_str("\"cake\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<ItemId>("\"\"").is_err());
    }
}
