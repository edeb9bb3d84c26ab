//! Public menu (carta)

use serde::{Deserialize, Serialize};

use crate::models::{Dish, DishCategory};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: DishCategory,
    pub dishes: Vec<Dish>,
}

/// Available dishes grouped by category in display order, empty sections omitted
pub fn public_menu(dishes: &[Dish], filter: Option<DishCategory>) -> Vec<MenuSection> {
    DishCategory::ALL
        .into_iter()
        .filter(|c| filter.is_none_or(|f| f == *c))
        .filter_map(|category| {
            let dishes: Vec<Dish> = dishes
                .iter()
                .filter(|d| d.available && d.category == category)
                .cloned()
                .collect();
            (!dishes.is_empty()).then_some(MenuSection { category, dishes })
        })
        .collect()
}
