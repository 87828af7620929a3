//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) and the table definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use repository::RepoResult;

/// Table definitions, applied on every start.
///
/// `IF NOT EXISTS` keeps this idempotent; the ASSERTs mirror the input
/// validation so a bypassed validator still cannot persist a bad record.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS product SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON product TYPE string
    ASSERT string::len(string::trim($value)) > 0 AND string::len($value) <= 100;
DEFINE FIELD IF NOT EXISTS description ON product TYPE option<string>;
DEFINE FIELD IF NOT EXISTS price ON product TYPE number ASSERT $value >= 0;
DEFINE FIELD IF NOT EXISTS image ON product TYPE option<string>;
DEFINE FIELD IF NOT EXISTS category ON product TYPE string
    ASSERT string::len(string::trim($value)) > 0;
DEFINE FIELD IF NOT EXISTS subcategory ON product TYPE option<string>;
DEFINE FIELD IF NOT EXISTS calories ON product TYPE number DEFAULT 0 ASSERT $value >= 0;
DEFINE FIELD IF NOT EXISTS ingredients ON product TYPE array<string> DEFAULT [];
DEFINE FIELD IF NOT EXISTS is_popular ON product TYPE bool DEFAULT false;
DEFINE FIELD IF NOT EXISTS customization_options ON product TYPE array<object> DEFAULT [];
DEFINE FIELD IF NOT EXISTS customization_options.*.name ON product TYPE string;
DEFINE FIELD IF NOT EXISTS customization_options.*.options ON product TYPE array<string>;
DEFINE FIELD IF NOT EXISTS customization_options.*.price_adjustment ON product TYPE number;
DEFINE FIELD IF NOT EXISTS created_at ON product TYPE int;
DEFINE FIELD IF NOT EXISTS updated_at ON product TYPE int;
DEFINE INDEX IF NOT EXISTS product_created_at ON product FIELDS created_at;

DEFINE TABLE IF NOT EXISTS review SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS name ON review TYPE string ASSERT string::len(string::trim($value)) > 0;
DEFINE FIELD IF NOT EXISTS phone ON review TYPE string ASSERT string::len(string::trim($value)) > 0;
DEFINE FIELD IF NOT EXISTS comment ON review TYPE string ASSERT string::len(string::trim($value)) > 0;
DEFINE FIELD IF NOT EXISTS rating ON review TYPE int ASSERT $value >= 1 AND $value <= 5;
DEFINE FIELD IF NOT EXISTS is_approved ON review TYPE bool DEFAULT false;
DEFINE FIELD IF NOT EXISTS created_at ON review TYPE int;
DEFINE INDEX IF NOT EXISTS review_created_at ON review FIELDS created_at;
DEFINE INDEX IF NOT EXISTS review_is_approved ON review FIELDS is_approved;
"#;

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the RocksDB store at `path` and apply the schema
    pub async fn new(path: &Path, namespace: &str, database: &str) -> RepoResult<Self> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path).await?;
        db.use_ns(namespace).use_db(database).await?;
        tracing::info!(ns = namespace, db = database, "Database connection established (SurrealDB/RocksDB)");

        apply_schema(&db).await?;
        tracing::info!("Database schema applied");

        Ok(Self { db })
    }
}

/// Apply table definitions to an open database
pub async fn apply_schema(db: &Surreal<Db>) -> RepoResult<()> {
    db.query(SCHEMA).await?.check()?;
    Ok(())
}
