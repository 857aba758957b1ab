//! Dish Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Menu section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DishCategory {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl DishCategory {
    pub const ALL: [DishCategory; 4] = [
        DishCategory::Breakfast,
        DishCategory::Lunch,
        DishCategory::Dinner,
        DishCategory::Snacks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dish category: {0}")]
pub struct UnknownDishCategory(pub String);

impl FromStr for DishCategory {
    type Err = UnknownDishCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDishCategory(s.to_string()))
    }
}

/// Menu listing filter: `all` or a single category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuFilter {
    #[default]
    All,
    Category(DishCategory),
}

impl MenuFilter {
    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => dish.category == *category,
        }
    }
}

impl FromStr for MenuFilter {
    type Err = UnknownDishCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Category)
        }
    }
}

/// Dish entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub category: DishCategory,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    /// Content-addressed image reference (`<sha256>.<ext>`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub is_available: bool,
}

/// Create / update dish payload (the edit form)
///
/// Fields are loose on the wire so an empty form reports
/// "Please fill all required fields" instead of a decode error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
}
