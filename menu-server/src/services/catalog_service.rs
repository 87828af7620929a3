//! Catalog Service - Product CRUD and the derived category index

use shared::models::{CategoryIndex, Product, ProductInput};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use super::category::derive_categories;
use crate::db::models::ProductRecord;
use crate::db::repository::{ProductRepository, RepoError};

#[derive(Clone, Debug)]
pub struct CatalogService {
    products: ProductRepository,
}

impl CatalogService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            products: ProductRepository::new(db),
        }
    }

    /// All products, newest first
    pub async fn list_all(&self) -> AppResult<Vec<Product>> {
        let records = self.products.find_all().await?;
        Ok(records.into_iter().map(Product::from).collect())
    }

    pub async fn get(&self, id: &str) -> AppResult<Product> {
        self.products
            .find_by_id(id)
            .await?
            .map(Product::from)
            .ok_or_else(|| product_not_found(id))
    }

    /// Validate and persist a new product
    pub async fn create(&self, input: ProductInput) -> AppResult<Product> {
        let input = input.normalized();
        input.validate()?;

        let now = now_millis();
        let created = self
            .products
            .create(ProductRecord::from_input(input, now, now))
            .await?;
        Ok(created.into())
    }

    /// Full replace of the mutable fields; `created_at` is kept
    pub async fn update(&self, id: &str, input: ProductInput) -> AppResult<Product> {
        let input = input.normalized();
        input.validate()?;

        let existing = self
            .products
            .find_by_id(id)
            .await?
            .ok_or_else(|| product_not_found(id))?;

        // Clock skew must not put updated_at before created_at
        let updated_at = now_millis().max(existing.created_at);
        let record = ProductRecord::from_input(input, existing.created_at, updated_at);
        let updated = self
            .products
            .replace(id, record)
            .await
            .map_err(|e| map_not_found(e, id))?;
        Ok(updated.into())
    }

    /// Hard delete; returns the removed product
    pub async fn delete(&self, id: &str) -> AppResult<Product> {
        let deleted = self
            .products
            .delete(id)
            .await
            .map_err(|e| map_not_found(e, id))?;
        Ok(deleted.into())
    }

    /// Category index of the current products
    pub async fn categories(&self) -> AppResult<CategoryIndex> {
        let pairs = self.products.find_category_pairs().await?;
        Ok(derive_categories(
            pairs.into_iter().map(|p| (p.category, p.subcategory)),
        ))
    }
}

fn product_not_found(id: &str) -> AppError {
    AppError::with_message(ErrorCode::ProductNotFound, format!("Product {} not found", id))
        .with_detail("id", id)
}

fn map_not_found(err: RepoError, id: &str) -> AppError {
    match err {
        RepoError::NotFound(_) => product_not_found(id),
        other => other.into(),
    }
}
