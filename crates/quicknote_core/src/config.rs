//! Board configuration.
//!
//! # Responsibility
//! - Load the category set offered by the UI from an optional JSON file.
//! - Validate category names before any board is built on them.
//!
//! # Invariants
//! - A validated set is non-empty, duplicate-free and excludes `all`.
//! - The default category is always a member of the set.

use crate::model::criteria::ALL_FILTER_TOKEN;
use crate::model::note::Category;
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Categories offered when no config file is supplied.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["personal", "work", "idea"];

static CATEGORY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9_-]*$").expect("valid category regex"));

/// Configuration loading/validation error.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config content is not valid JSON for `NotesConfig`.
    Parse(serde_json::Error),
    /// No categories were configured.
    EmptyCategorySet,
    /// Category name is not a lowercase slug or collides with `all`.
    InvalidCategory(String),
    /// Category name appears more than once.
    DuplicateCategory(String),
    /// `default_category` is not part of `categories`.
    UnknownDefaultCategory(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config: {err}"),
            Self::EmptyCategorySet => write!(f, "config must declare at least one category"),
            Self::InvalidCategory(name) => write!(
                f,
                "invalid category `{name}`; expected a lowercase slug other than `{ALL_FILTER_TOKEN}`"
            ),
            Self::DuplicateCategory(name) => write!(f, "duplicate category `{name}`"),
            Self::UnknownDefaultCategory(name) => {
                write!(f, "default category `{name}` is not a configured category")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Raw, unvalidated configuration as written on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NotesConfig {
    /// Category names in display order.
    pub categories: Vec<String>,
    /// Category preselected for new notes. Defaults to the first category.
    #[serde(default)]
    pub default_category: Option<String>,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|name| name.to_string()).collect(),
            default_category: None,
        }
    }
}

impl NotesConfig {
    /// Parses config from JSON text without validating it.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads config from a JSON file without validating it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Validates names and builds the category set.
    pub fn validate(&self) -> Result<CategorySet, ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::EmptyCategorySet);
        }

        let mut categories: Vec<Category> = Vec::with_capacity(self.categories.len());
        for name in &self.categories {
            if name == ALL_FILTER_TOKEN || !CATEGORY_NAME_RE.is_match(name) {
                return Err(ConfigError::InvalidCategory(name.clone()));
            }
            if categories.iter().any(|known| known.as_str() == name) {
                return Err(ConfigError::DuplicateCategory(name.clone()));
            }
            categories.push(Category::new(name.as_str()));
        }

        let default = match self.default_category.as_deref() {
            Some(name) => categories
                .iter()
                .find(|category| category.as_str() == name)
                .cloned()
                .ok_or_else(|| ConfigError::UnknownDefaultCategory(name.to_string()))?,
            None => categories[0].clone(),
        };

        Ok(CategorySet {
            categories,
            default,
        })
    }
}

/// Loads and validates the category set from a JSON config file.
pub fn load_category_set(path: &Path) -> Result<CategorySet, ConfigError> {
    let set = NotesConfig::load(path)?.validate()?;
    info!(
        "event=config_load module=config status=ok categories={} default={}",
        set.len(),
        set.default_category()
    );
    Ok(set)
}

/// Validated, ordered set of categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySet {
    categories: Vec<Category>,
    default: Category,
}

impl Default for CategorySet {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().copied().map(Category::from).collect(),
            default: Category::from(DEFAULT_CATEGORIES[0]),
        }
    }
}

impl CategorySet {
    /// Looks up a configured category by exact name.
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|category| category.as_str() == name)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    pub fn default_category(&self) -> &Category {
        &self.default
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
