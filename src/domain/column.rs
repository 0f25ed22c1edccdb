use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Unique identifier for a column (displayed as col-1, col-2, col-100)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId(u64);

impl ColumnId {
    const DISPLAY_PREFIX: &'static str = "col-";

    /// Creates a new ColumnId from a counter value
    pub fn new(counter: u64) -> Self {
        Self(counter)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl FromStr for ColumnId {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();

        normalized
            .strip_prefix(Self::DISPLAY_PREFIX)
            .and_then(|digits| digits.parse::<u64>().ok())
            .map(Self)
            .ok_or_else(|| crate::error::BoardError::InvalidColumnId(s.to_string()))
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::DISPLAY_PREFIX, self.0)
    }
}

/// A column on the board, rendered as one vertical lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(id: ColumnId, title: String) -> Self {
        Self {
            id,
            title,
            created_at: Utc::now(),
        }
    }
}
