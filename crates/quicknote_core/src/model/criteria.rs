//! Transient view criteria.
//!
//! # Responsibility
//! - Hold the active category filter and the search substring.
//!
//! # Invariants
//! - Criteria are never persisted; they live as long as the owning board.
//! - The `all` token always maps to the wildcard filter.

use crate::model::note::Category;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Token that selects the wildcard filter.
pub const ALL_FILTER_TOKEN: &str = "all";

/// Category filter applied to the note list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    /// Wildcard: every category passes.
    #[default]
    All,
    /// Exact, case-sensitive category match.
    Category(Category),
}

impl Filter {
    /// Parses a filter token; `all` selects the wildcard.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token == ALL_FILTER_TOKEN {
            Self::All
        } else {
            Self::Category(Category::new(token))
        }
    }

    /// Returns the token form used by filter buttons.
    pub fn token(&self) -> &str {
        match self {
            Self::All => ALL_FILTER_TOKEN,
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<Filter> for String {
    fn from(value: Filter) -> Self {
        value.token().to_string()
    }
}

impl From<Category> for Filter {
    fn from(value: Category) -> Self {
        Self::Category(value)
    }
}

/// Current filter/search selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewCriteria {
    /// Wildcard or a specific category.
    pub active_filter: Filter,
    /// Case-insensitive substring; empty matches every note.
    pub search_text: String,
}

impl ViewCriteria {
    pub fn new(active_filter: Filter, search_text: impl Into<String>) -> Self {
        Self {
            active_filter,
            search_text: search_text.into(),
        }
    }
}
