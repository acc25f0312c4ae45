//! Fact categories and the list filter built on them

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One of the fixed fact categories, each with a display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Science,
    Finance,
    Society,
    Entertainment,
    Health,
    History,
    News,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 8] = [
        Self::Technology,
        Self::Science,
        Self::Finance,
        Self::Society,
        Self::Entertainment,
        Self::Health,
        Self::History,
        Self::News,
    ];

    /// Name stored in the `category` column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Science => "science",
            Self::Finance => "finance",
            Self::Society => "society",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::History => "history",
            Self::News => "news",
        }
    }

    /// CSS color used for the category tag and filter button.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Technology => "#3b82f6",
            Self::Science => "#16a34a",
            Self::Finance => "#ef4444",
            Self::Society => "#eab308",
            Self::Entertainment => "#db2777",
            Self::Health => "#14b8a6",
            Self::History => "#f97316",
            Self::News => "#8b5cf6",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::InvalidInput(format!("unknown category '{needle}'")))
    }
}

/// Active category filter of the fact list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Pseudo-category: no filtering.
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    #[must_use]
    pub const fn as_category(self) -> Option<Category> {
        match self {
            Self::All => None,
            Self::Only(category) => Some(category),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.name(),
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}
