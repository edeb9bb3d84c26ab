//! Dish Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu category (fixed set)
///
/// The category decides which station prepares the dish: `principal` and
/// `lado` go through the kitchen, `bebida` and `postre` are served by the
/// front of house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DishCategory {
    Principal,
    Lado,
    Bebida,
    Postre,
}

/// Station that prepares a dish
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Station {
    Kitchen,
    FrontOfHouse,
}

impl DishCategory {
    /// Menu display order
    pub const ALL: [DishCategory; 4] = [
        DishCategory::Principal,
        DishCategory::Lado,
        DishCategory::Bebida,
        DishCategory::Postre,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Lado => "lado",
            Self::Bebida => "bebida",
            Self::Postre => "postre",
        }
    }

    pub fn station(&self) -> Station {
        match self {
            Self::Principal | Self::Lado => Station::Kitchen,
            Self::Bebida | Self::Postre => Station::FrontOfHouse,
        }
    }

    /// Whether the kitchen board shows dishes of this category
    #[inline]
    pub fn is_kitchen(&self) -> bool {
        self.station() == Station::Kitchen
    }
}

impl fmt::Display for DishCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dish entity (carta)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unit price, 2 decimal places
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: DishCategory,
    /// Preparation time in minutes
    pub prep_time: u32,
    /// Image URL or path
    pub image: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishCreate {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub category: DishCategory,
    pub prep_time: u32,
    #[serde(default)]
    pub image: String,
    pub available: Option<bool>,
}

/// Update dish payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    pub category: Option<DishCategory>,
    pub prep_time: Option<u32>,
    pub image: Option<String>,
    pub available: Option<bool>,
}

/// Query filter for dish listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishQuery {
    pub category: Option<DishCategory>,
}
