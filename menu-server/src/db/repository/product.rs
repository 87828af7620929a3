//! Product Repository

use super::{BaseRepository, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{CategoryPair, ProductRecord};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "product";

#[derive(Clone, Debug)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All products, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<ProductRecord>> {
        let products: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductRecord>> {
        let key = strip_table_prefix(TABLE, id);
        let product: Option<ProductRecord> = self.base.db().select((TABLE, key)).await?;
        Ok(product)
    }

    /// Insert a new product; the store assigns the id
    pub async fn create(&self, record: ProductRecord) -> RepoResult<ProductRecord> {
        let created: Option<ProductRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create product".to_string()))
    }

    /// Replace every stored field of an existing product.
    ///
    /// The caller carries `created_at` over from the existing record.
    pub async fn replace(&self, id: &str, record: ProductRecord) -> RepoResult<ProductRecord> {
        let key = strip_table_prefix(TABLE, id);
        let updated: Option<ProductRecord> =
            self.base.db().update((TABLE, key)).content(record).await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// Hard delete; NotFound when nothing was removed
    pub async fn delete(&self, id: &str) -> RepoResult<ProductRecord> {
        let key = strip_table_prefix(TABLE, id);
        let deleted: Option<ProductRecord> = self.base.db().delete((TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Product {} not found", id)))
    }

    /// (category, subcategory) of every product
    pub async fn find_category_pairs(&self) -> RepoResult<Vec<CategoryPair>> {
        let pairs: Vec<CategoryPair> = self
            .base
            .db()
            .query("SELECT category, subcategory FROM product")
            .await?
            .take(0)?;
        Ok(pairs)
    }
}
