//! Strongly-typed surrogate key wrappers for all entity types
//!
//! Ids are plain integers assigned by the storage layer on insert. Wrapping
//! them prevents mixing up ids of different entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

/// Common behavior of every surrogate key type
pub trait RecordId: Copy + Ord + Hash + fmt::Display + fmt::Debug {
    /// Wrap a raw key
    fn from_raw(raw: i64) -> Self;

    /// The raw key value
    fn raw(&self) -> i64;
}

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap an existing key
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Placeholder key for records that have not been stored yet
            pub const fn unassigned() -> Self {
                Self(0)
            }

            /// Whether storage has assigned this key
            pub const fn is_assigned(&self) -> bool {
                self.0 > 0
            }

            /// Get the underlying key
            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl RecordId for $name {
            fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            fn raw(&self) -> i64 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::unassigned()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(UserId, "usr-");
define_id!(AccountId, "acc-");
define_id!(CategoryId, "cat-");
define_id!(TransactionId, "txn-");
define_id!(BudgetId, "bud-");
