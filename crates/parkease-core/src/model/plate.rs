// ── Vehicle identity ──
//
// The plate is the facility's only identity key: tickets, subscriptions,
// and the lot's vehicle map are all keyed by it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registration plate, normalized to uppercase with surrounding
/// whitespace removed (`" ab-123-cd "` -> `"AB-123-CD"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Plate(String);

impl Plate {
    /// Create a normalized plate from any common spelling.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Plate {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Plate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn plate_normalizes_case() {
        assert_eq!(Plate::new("abc123").as_str(), "ABC123");
    }

    #[test]
    fn plate_trims_whitespace() {
        assert_eq!(Plate::new("  abc123 ").as_str(), "ABC123");
    }

    #[test]
    fn plate_from_str() {
        let plate: Plate = "aaa111".parse().unwrap();
        assert_eq!(plate.to_string(), "AAA111");
    }

    #[test]
    fn equal_plates_compare_equal_after_normalization() {
        assert_eq!(Plate::new("aaa111"), Plate::new("AAA111"));
    }
}
