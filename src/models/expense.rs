//! Expense model and category set
//!
//! Expenses are immutable once recorded (deletion only) and belong to the
//! current allowance cycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::ExpenseId;
use super::money::Money;

/// The enumerated set of spending categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Books,
    Entertainment,
    Utilities,
    Rent,
    Other,
}

impl ExpenseCategory {
    /// All known categories, in display order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Transport,
        Self::Books,
        Self::Entertainment,
        Self::Utilities,
        Self::Rent,
        Self::Other,
    ];

    /// Comma-separated list of valid category labels
    pub fn valid_labels() -> String {
        Self::ALL
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Books => "books",
            Self::Entertainment => "entertainment",
            Self::Utilities => "utilities",
            Self::Rent => "rent",
            Self::Other => "other",
        };
        write!(f, "{}", label)
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError(pub String);

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for CategoryParseError {}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "books" => Ok(Self::Books),
            "entertainment" => Ok(Self::Entertainment),
            "utilities" => Ok(Self::Utilities),
            "rent" => Ok(Self::Rent),
            "other" => Ok(Self::Other),
            other => Err(CategoryParseError(other.to_string())),
        }
    }
}

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Spending category
    pub category: ExpenseCategory,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense recorded at the given instant
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            created_at: recorded_at,
        }
    }
}
