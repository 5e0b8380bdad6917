//! Strongly-typed integer identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a shop (store location).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShopId(u64);

/// Identifier of an inventory record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(u64);

/// Identifier of a transfer request in the ledger.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferId(u64);

/// Identifiers allocated as "max existing + 1, or 1 when empty".
pub trait SequentialId: Copy + Ord {
    /// The id handed out by an empty collection.
    fn first() -> Self;

    /// The id following `self`, or `None` once the id space is exhausted.
    fn next(self) -> Option<Self>;
}

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl SequentialId for $t {
            fn first() -> Self {
                Self(1)
            }

            fn next(self) -> Option<Self> {
                self.0.checked_add(1).map(Self)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = s
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| DomainError::invalid_input(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(ShopId, "ShopId");
impl_int_newtype!(RecordId, "RecordId");
impl_int_newtype!(TransferId, "TransferId");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_integer_ids() {
        assert_eq!(" 7 ".parse::<ShopId>().unwrap(), ShopId::new(7));
    }

    #[test]
    fn rejects_non_numeric_ids() {
        let err = "downtown".parse::<TransferId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(msg) if msg.starts_with("TransferId")));
    }

    #[test]
    fn sequential_ids_start_at_one() {
        assert_eq!(RecordId::first(), RecordId::new(1));
        assert_eq!(RecordId::new(41).next(), Some(RecordId::new(42)));
        assert_eq!(RecordId::new(u64::MAX).next(), None);
    }
}
