//! Product Model

use serde::{Deserialize, Serialize};
use shared::models::{CustomizationOption, Product, ProductInput};
use surrealdb::RecordId;

use super::record_key;

/// Embedded customization option
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomizationRecord {
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub price_adjustment: f64,
}

/// Product record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub customization_options: Vec<CustomizationRecord>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl ProductRecord {
    /// Build a record from validated input.
    ///
    /// Required fields are expected to be present; missing ones become
    /// empty values which the table ASSERTs then reject.
    pub fn from_input(input: ProductInput, created_at: i64, updated_at: i64) -> Self {
        Self {
            id: None,
            name: input.name.unwrap_or_default(),
            description: input.description,
            price: input.price.unwrap_or_default(),
            image: input.image,
            category: input.category.unwrap_or_default(),
            subcategory: input.subcategory,
            calories: input.calories.unwrap_or(0.0),
            ingredients: input.ingredients,
            is_popular: input.is_popular,
            customization_options: input
                .customization_options
                .into_iter()
                .map(CustomizationRecord::from)
                .collect(),
            created_at,
            updated_at,
        }
    }
}

impl From<CustomizationOption> for CustomizationRecord {
    fn from(o: CustomizationOption) -> Self {
        Self {
            name: o.name,
            options: o.options,
            price_adjustment: o.price_adjustment,
        }
    }
}

impl From<CustomizationRecord> for CustomizationOption {
    fn from(r: CustomizationRecord) -> Self {
        Self {
            name: r.name,
            options: r.options,
            price_adjustment: r.price_adjustment,
        }
    }
}

impl From<ProductRecord> for Product {
    fn from(r: ProductRecord) -> Self {
        Self {
            id: record_key(&r.id),
            name: r.name,
            description: r.description,
            price: r.price,
            image: r.image,
            category: r.category,
            subcategory: r.subcategory,
            calories: r.calories,
            ingredients: r.ingredients,
            is_popular: r.is_popular,
            customization_options: r
                .customization_options
                .into_iter()
                .map(CustomizationOption::from)
                .collect(),
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Projection used by the category deriver
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryPair {
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
}
