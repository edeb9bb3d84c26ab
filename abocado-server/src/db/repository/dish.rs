//! Dish Repository

use std::sync::Arc;

use chrono::Utc;
use shared::models::{Dish, DishCreate, DishQuery, DishUpdate};
use shared::{AppError, AppResult, ErrorCode};
use uuid::Uuid;

use crate::db::MemoryDb;

#[derive(Clone)]
pub struct DishRepository {
    db: Arc<MemoryDb>,
}

fn not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::DishNotFound, format!("Dish {id} not found"))
}

impl DishRepository {
    pub fn new(db: Arc<MemoryDb>) -> Self {
        Self { db }
    }

    /// All dishes in catalog order, optionally of one category
    pub fn find_all(&self, query: &DishQuery) -> Vec<Dish> {
        self.db
            .read()
            .dishes
            .iter()
            .filter(|d| query.category.is_none_or(|c| c == d.category))
            .cloned()
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> AppResult<Dish> {
        self.db.read().dish(id).cloned().ok_or_else(|| not_found(id))
    }

    pub fn create(&self, data: DishCreate) -> AppResult<Dish> {
        let dish = Dish {
            id: Uuid::new_v4().to_string(),
            name: data.name,
            description: data.description,
            price: data.price,
            category: data.category,
            prep_time: data.prep_time,
            image: data.image,
            available: data.available.unwrap_or(true),
            created_at: Utc::now(),
        };
        self.db.write().dishes.push(dish.clone());
        Ok(dish)
    }

    /// Partial update; existing order totals are never recomputed
    pub fn update(&self, id: &str, data: DishUpdate) -> AppResult<Dish> {
        let mut guard = self.db.write();
        let dish = guard
            .dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| not_found(id))?;

        if let Some(name) = data.name {
            dish.name = name;
        }
        if let Some(description) = data.description {
            dish.description = description;
        }
        if let Some(price) = data.price {
            dish.price = price;
        }
        if let Some(category) = data.category {
            dish.category = category;
        }
        if let Some(prep_time) = data.prep_time {
            dish.prep_time = prep_time;
        }
        if let Some(image) = data.image {
            dish.image = image;
        }
        if let Some(available) = data.available {
            dish.available = available;
        }

        Ok(dish.clone())
    }

    pub fn delete(&self, id: &str) -> AppResult<()> {
        let mut guard = self.db.write();
        let before = guard.dishes.len();
        guard.dishes.retain(|d| d.id != id);
        if guard.dishes.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}
