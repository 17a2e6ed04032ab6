//! Identifier and row-count types for the person domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned surrogate key of a person record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(i32);

impl PersonId {
    /// Wraps a raw identifier value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    #[must_use]
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for PersonId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of records changed by an update or delete.
///
/// For single-record operations this is either zero or one. Zero is a
/// normal outcome, not an error: callers decide whether it means "not found".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffectedRows {
    affected: usize,
}

impl AffectedRows {
    /// Wraps a row count reported by storage.
    #[must_use]
    pub const fn new(affected: usize) -> Self {
        Self { affected }
    }

    /// Returns the number of affected rows.
    #[must_use]
    pub const fn count(self) -> usize {
        self.affected
    }

    /// Returns `true` when no row was affected.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.affected == 0
    }
}
