//! Menu Service - dish catalog held in memory

use super::uploads::{FileStore, UploadedFile};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use shared::models::{Dish, DishCategory, DishInput, MenuFilter};
use std::sync::Arc;

/// Validated create / update payload
struct ValidDish {
    name: String,
    category: DishCategory,
    price: Decimal,
    description: Option<String>,
    is_available: Option<bool>,
}

fn validate_input(input: DishInput) -> AppResult<ValidDish> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&input.description, "description", MAX_NOTE_LEN)?;
    if input.category.trim().is_empty() {
        return Err(AppError::required_field("category"));
    }
    let category: DishCategory = input.category.parse().map_err(|_| {
        AppError::new(ErrorCode::DishInvalidCategory).with_detail("category", input.category.as_str())
    })?;
    let price = input.price.ok_or_else(|| AppError::required_field("price"))?;
    if price < Decimal::ZERO {
        return Err(AppError::new(ErrorCode::DishInvalidPrice).with_detail("price", price.to_string()));
    }

    Ok(ValidDish {
        name: input.name.trim().to_string(),
        category,
        price,
        description: input.description.map(|d| d.trim().to_string()),
        is_available: input.is_available,
    })
}

fn dish_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::DishNotFound, format!("Dish {id} not found")).with_detail("dish_id", id)
}

#[derive(Clone)]
pub struct MenuService {
    dishes: Arc<RwLock<Vec<Dish>>>,
    files: FileStore,
}

impl std::fmt::Debug for MenuService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuService")
            .field("dishes_count", &self.dishes.read().len())
            .finish()
    }
}

impl MenuService {
    pub fn new(dishes: Vec<Dish>, files: FileStore) -> Self {
        Self {
            dishes: Arc::new(RwLock::new(dishes)),
            files,
        }
    }

    pub fn list(&self, filter: MenuFilter) -> Vec<Dish> {
        self.dishes
            .read()
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    /// All dishes (dashboard)
    pub fn all(&self) -> Vec<Dish> {
        self.dishes.read().clone()
    }

    pub fn get(&self, id: &str) -> AppResult<Dish> {
        self.dishes
            .read()
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| dish_not_found(id))
    }

    pub fn create(&self, input: DishInput) -> AppResult<Dish> {
        let valid = validate_input(input)?;
        let mut dishes = self.dishes.write();

        let next_id = dishes
            .iter()
            .filter_map(|d| d.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        let dish = Dish {
            id: next_id.to_string(),
            name: valid.name,
            category: valid.category,
            price: valid.price,
            description: valid.description.unwrap_or_default(),
            image: None,
            is_available: valid.is_available.unwrap_or(true),
        };
        dishes.push(dish.clone());

        tracing::info!(dish_id = %dish.id, name = %dish.name, "Dish created");
        Ok(dish)
    }

    /// Replace the editable fields; the image is managed separately
    pub fn update(&self, id: &str, input: DishInput) -> AppResult<Dish> {
        let valid = validate_input(input)?;
        let mut dishes = self.dishes.write();
        let dish = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| dish_not_found(id))?;

        dish.name = valid.name;
        dish.category = valid.category;
        dish.price = valid.price;
        if let Some(description) = valid.description {
            dish.description = description;
        }
        if let Some(is_available) = valid.is_available {
            dish.is_available = is_available;
        }

        tracing::info!(dish_id = %id, "Dish updated");
        Ok(dish.clone())
    }

    /// Flip availability of exactly one dish
    pub fn toggle_availability(&self, id: &str) -> AppResult<Dish> {
        let mut dishes = self.dishes.write();
        let dish = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| dish_not_found(id))?;
        dish.is_available = !dish.is_available;

        tracing::info!(dish_id = %id, is_available = dish.is_available, "Dish availability toggled");
        Ok(dish.clone())
    }

    pub fn set_image(&self, id: &str, file: &UploadedFile) -> AppResult<Dish> {
        // Fail fast before touching the disk
        self.get(id)?;

        let ext = self.files.validate_image(file)?;
        let stored = self.files.store(&file.data, &ext)?;

        let mut dishes = self.dishes.write();
        let dish = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| dish_not_found(id))?;
        dish.image = Some(stored.stored_as);
        Ok(dish.clone())
    }

    pub fn clear_image(&self, id: &str) -> AppResult<Dish> {
        let mut dishes = self.dishes.write();
        let dish = dishes
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| dish_not_found(id))?;
        dish.image = None;
        Ok(dish.clone())
    }
}
