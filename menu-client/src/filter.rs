//! Client Filter Engine
//!
//! Narrows a fetched product list in memory. Pure and synchronous: the same
//! inputs always give the same output, in the original order.

use serde::{Deserialize, Serialize};
use shared::models::Product;

/// Sentinel meaning "no constraint"
pub const ALL: &str = "all";

/// A category or subcategory selection
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Selection {
    #[default]
    All,
    Exact(String),
}

impl Selection {
    /// `"all"` maps to [`Selection::All`], anything else is an exact match
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Selection::All
        } else {
            Selection::Exact(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Exact(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::Exact(v) => v,
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Selection::parse(value)
    }
}

/// Current filter criteria
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MenuFilter {
    category: Selection,
    subcategory: Selection,
    query: String,
    popular_only: bool,
}

impl MenuFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &Selection {
        &self.category
    }

    pub fn subcategory(&self) -> &Selection {
        &self.subcategory
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn popular_only(&self) -> bool {
        self.popular_only
    }

    /// Select a category. The subcategory always resets to `all`.
    pub fn select_category(&mut self, category: impl Into<Selection>) {
        self.category = category.into();
        self.subcategory = Selection::All;
    }

    pub fn select_subcategory(&mut self, subcategory: impl Into<Selection>) {
        self.subcategory = subcategory.into();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_popular_only(&mut self, popular_only: bool) {
        self.popular_only = popular_only;
    }

    /// Back to showing everything
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether a single product passes every criterion
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(Some(&product.category)) {
            return false;
        }
        if !self.subcategory.matches(product.subcategory.as_deref()) {
            return false;
        }
        if self.popular_only && !product.is_popular {
            return false;
        }
        self.matches_query(product)
    }

    /// Case-insensitive substring against name or description, taken as
    /// typed (whitespace included). An empty query matches everything; a
    /// missing description never matches.
    fn matches_query(&self, product: &Product) -> bool {
        let needle = self.query.to_lowercase();
        if needle.is_empty() {
            return true;
        }
        product.name.to_lowercase().contains(&needle)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    /// Products that pass the filter, in input order
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
