use std::str::FromStr;

use serde::Serialize;

use super::legend::Legend;
use crate::error::DirectoryError;

/// The four membership buckets a legend belongs to.
///
/// Declaration order is the display order used by grouped views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Founders,
    Contributors,
    Achievers,
    Legends,
}

impl Category {
    /// Human-readable label for filter bars and headings.
    pub fn label(self) -> &'static str {
        match self {
            Category::Founders => "Founders",
            Category::Contributors => "Contributors",
            Category::Achievers => "Achievers",
            Category::Legends => "Legends",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Founders => "🚀",
            Category::Contributors => "💻",
            Category::Achievers => "🏆",
            Category::Legends => "⭐",
        }
    }

    /// Parse a lowercase category name such as `"founders"`.
    pub fn parse(value: &str) -> Result<Self, DirectoryError> {
        Category::from_str(value).map_err(|_| DirectoryError::UnknownCategory(value.to_owned()))
    }
}

/// The state of a category filter bar: everything, or a single category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySelection {
    #[default]
    All,
    Only(Category),
}

impl CategorySelection {
    pub fn matches(self, legend: &Legend) -> bool {
        match self {
            CategorySelection::All => true,
            CategorySelection::Only(category) => legend.category == category,
        }
    }
}

impl From<Category> for CategorySelection {
    fn from(category: Category) -> Self {
        CategorySelection::Only(category)
    }
}

impl FromStr for CategorySelection {
    type Err = DirectoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == "all" {
            Ok(CategorySelection::All)
        } else {
            Category::parse(value).map(CategorySelection::Only)
        }
    }
}
