//! Category model
//!
//! Categories classify transactions as expense or income.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Whether a category tracks money going out or coming in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CategoryType {
    Expense,
    Income,
}

impl CategoryType {
    /// Integer code used by the storage layer
    pub const fn code(&self) -> i16 {
        match self {
            Self::Expense => 0,
            Self::Income => 1,
        }
    }

    /// Decode a storage code
    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(Self::Expense),
            1 => Some(Self::Income),
            _ => None,
        }
    }

    /// Label used in reports
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Expense => "Expense",
            Self::Income => "Income",
        }
    }

    /// Parse category type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "expense" | "expenses" => Some(Self::Expense),
            "income" => Some(Self::Income),
            _ => None,
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Surrogate key assigned by storage
    pub id: CategoryId,

    /// Category name, unique together with the type
    pub name: String,

    /// Expense or income
    #[serde(rename = "type")]
    pub category_type: CategoryType,

    /// Optional icon (emoji or icon name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Optional display color (e.g. "#4CAF50")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            id: CategoryId::unassigned(),
            name: name.into(),
            category_type,
            icon: None,
            color: None,
        }
    }

    /// Shorthand for an expense category
    pub fn expense(name: impl Into<String>) -> Self {
        Self::new(name, CategoryType::Expense)
    }

    /// Shorthand for an income category
    pub fn income(name: impl Into<String>) -> Self {
        Self::new(name, CategoryType::Income)
    }

    /// Set the surrogate key
    pub fn with_id(mut self, id: CategoryId) -> Self {
        self.id = id;
        self
    }

    /// Whether this category has the same identity key (name, type) as another
    pub fn same_key(&self, name: &str, category_type: CategoryType) -> bool {
        self.category_type == category_type && self.name.eq_ignore_ascii_case(name.trim())
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.icon {
            Some(icon) => write!(f, "{} {}", icon, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryValidationError {
    #[error("Category name cannot be empty")]
    EmptyName,
    #[error("Category name too long ({0} chars, max 50)")]
    NameTooLong(usize),
}
