use super::DomainError;
use std::hash::Hash;

/// Trait for aggregate identifier types.
///
/// Identifiers are short prefixed codes such as `BK001` or `USR004`.
pub trait AggregateId: Clone + PartialEq + Eq + Hash + std::fmt::Debug {
    /// Fixed prefix of every identifier of this kind
    const PREFIX: &'static str;

    fn as_string(&self) -> String;

    fn from_string(s: &str) -> Result<Self, DomainError>;
}

/// Normalises a prefixed code: trims, upper-cases the prefix and checks the suffix is present.
pub(crate) fn parse_prefixed(
    raw: &str,
    prefix: &'static str,
    kind: &'static str,
) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let invalid = || DomainError::InvalidId {
        kind,
        value: raw.to_string(),
    };

    if trimmed.len() <= prefix.len() || !trimmed.is_char_boundary(prefix.len()) {
        return Err(invalid());
    }
    let (head, tail) = trimmed.split_at(prefix.len());
    if !head.eq_ignore_ascii_case(prefix) || tail.trim().is_empty() {
        return Err(invalid());
    }
    Ok(format!("{}{}", prefix, tail.to_uppercase()))
}

/// Declares a string-backed id newtype with a fixed prefix.
macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Builds an id from a trusted literal (seed data).
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            const PREFIX: &'static str = $prefix;

            fn as_string(&self) -> String {
                self.0.clone()
            }

            fn from_string(s: &str) -> Result<Self, $crate::domain::common::DomainError> {
                $crate::domain::common::aggregate_id::parse_prefixed(s, $prefix, $kind).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

pub(crate) use prefixed_id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_prefixed() {
        assert_eq!(parse_prefixed("BK001", "BK", "booking").unwrap(), "BK001");
        assert_eq!(parse_prefixed("  bk007 ", "BK", "booking").unwrap(), "BK007");
        assert_eq!(parse_prefixed("OF-ab12cd", "OF-", "offer").unwrap(), "OF-AB12CD");
    }

    #[test]
    fn test_parse_prefixed_rejects_bad_input() {
        assert!(parse_prefixed("BK", "BK", "booking").is_err());
        assert!(parse_prefixed("TXN001", "BK", "booking").is_err());
        assert!(parse_prefixed("", "USR", "user").is_err());
    }
}
