//! Product Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customization a guest can pick (e.g. "Size": small / large, +5)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomizationOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub price_adjustment: f64,
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    /// URL or data URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub calories: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub customization_options: Vec<CustomizationOption>,
    /// Epoch millis, set once at creation
    pub created_at: i64,
    /// Epoch millis
    pub updated_at: i64,
}

/// Create / full-replace payload
///
/// Required fields are `Option` so that a missing field is reported as a
/// validation error listing the field instead of a body parse failure.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 100, message = "name must be between 1 and 100 characters")
    )]
    pub name: Option<String>,
    #[validate(length(max = 1000, message = "description must be at most 1000 characters"))]
    pub description: Option<String>,
    #[validate(
        required(message = "price is required"),
        range(min = 0.0, message = "price must be greater than or equal to 0")
    )]
    pub price: Option<f64>,
    pub image: Option<String>,
    #[validate(
        required(message = "category is required"),
        length(min = 1, message = "category must not be empty")
    )]
    pub category: Option<String>,
    pub subcategory: Option<String>,
    #[validate(range(min = 0.0, message = "calories must be greater than or equal to 0"))]
    pub calories: Option<f64>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub is_popular: bool,
    #[serde(default)]
    pub customization_options: Vec<CustomizationOption>,
}

impl ProductInput {
    /// Trim text fields; blank optional text becomes `None`, blank
    /// ingredients are dropped.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|s| s.trim().to_string()),
            description: non_blank(self.description),
            price: self.price,
            image: non_blank(self.image),
            category: self.category.map(|s| s.trim().to_string()),
            subcategory: non_blank(self.subcategory),
            calories: self.calories,
            ingredients: self
                .ingredients
                .into_iter()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            is_popular: self.is_popular,
            customization_options: self.customization_options,
        }
    }
}

impl From<&Product> for ProductInput {
    fn from(p: &Product) -> Self {
        Self {
            name: Some(p.name.clone()),
            description: p.description.clone(),
            price: Some(p.price),
            image: p.image.clone(),
            category: Some(p.category.clone()),
            subcategory: p.subcategory.clone(),
            calories: Some(p.calories),
            ingredients: p.ingredients.clone(),
            is_popular: p.is_popular,
            customization_options: p.customization_options.clone(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
