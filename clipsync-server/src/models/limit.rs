//! List limit handling
//!
//! The limit is validated, never clamped: out-of-range input is a
//! shape-validation failure surfaced to the client.

use super::ValidationError;

/// Smallest accepted limit
const MIN_LIMIT: i64 = 1;

/// Largest accepted limit
const MAX_LIMIT: i64 = 100;

/// Default when the client sends no limit
const DEFAULT_LIMIT: i64 = 10;

/// Validated row limit for list queries, in `1..=100`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLimit(i64);

impl ListLimit {
    /// Create a limit, rejecting values outside `1..=100`.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "limit",
                min: MIN_LIMIT,
                max: MAX_LIMIT,
            });
        }
        Ok(Self(value))
    }

    /// Parse a raw query value; `None` falls back to the default of 10.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(Self(DEFAULT_LIMIT)),
            Some(s) => {
                let value = s.parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
                    field: "limit",
                    reason: "not an integer",
                })?;
                Self::new(value)
            }
        }
    }

    /// Get the SQL LIMIT value.
    pub fn get(&self) -> i64 {
        self.0
    }
}

impl Default for ListLimit {
    fn default() -> Self {
        Self(DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds() {
        assert_eq!(ListLimit::new(1).unwrap().get(), 1);
        assert_eq!(ListLimit::new(100).unwrap().get(), 100);
    }

    #[test]
    fn rejects_outside_bounds() {
        assert!(ListLimit::new(0).is_err());
        assert!(ListLimit::new(101).is_err());
        assert!(ListLimit::new(-5).is_err());
    }

    #[test]
    fn parse_defaults_to_ten() {
        assert_eq!(ListLimit::parse(None).unwrap().get(), 10);
        assert_eq!(ListLimit::default().get(), 10);
    }

    #[test]
    fn parse_rejects_non_integers() {
        let err = ListLimit::parse(Some("abc")).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "limit", .. }));

        assert!(ListLimit::parse(Some("1.5")).is_err());
        assert!(ListLimit::parse(Some("")).is_err());
    }

    #[test]
    fn parse_checks_range() {
        assert!(ListLimit::parse(Some("0")).is_err());
        assert!(ListLimit::parse(Some("101")).is_err());
        assert_eq!(ListLimit::parse(Some("42")).unwrap().get(), 42);
    }
}
