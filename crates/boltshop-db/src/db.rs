//! Storage backends and store operations.

use crate::types::{is_truthy, Database, Fields, ProductRecord};
use crate::DbError;
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where the store document lives.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Load the whole document.
    async fn load(&self) -> Result<Database, DbError>;

    /// Replace the whole document.
    async fn save(&self, db: &Database) -> Result<(), DbError>;
}

/// A JSON file on disk, rewritten in full on every save.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Storage for FileStorage {
    async fn load(&self) -> Result<Database, DbError> {
        let data = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DbError::io(&self.path, e))?;
        Ok(serde_json::from_str(&data)?)
    }

    async fn save(&self, db: &Database) -> Result<(), DbError> {
        let data = serde_json::to_string_pretty(db)?;
        tokio::fs::write(&self.path, data)
            .await
            .map_err(|e| DbError::io(&self.path, e))
    }
}

/// In-process storage for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    inner: RwLock<Database>,
}

impl MemoryStorage {
    pub fn new(db: Database) -> Self {
        Self {
            inner: RwLock::new(db),
        }
    }

    /// Current document.
    pub async fn snapshot(&self) -> Database {
        self.inner.read().await.clone()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn load(&self) -> Result<Database, DbError> {
        Ok(self.inner.read().await.clone())
    }

    async fn save(&self, db: &Database) -> Result<(), DbError> {
        *self.inner.write().await = db.clone();
        Ok(())
    }
}

/// The user and product store.
///
/// Every operation reads the full document, and writes re-save it. There
/// is no locking between the read and the write, so two concurrent writes
/// can lose one of the updates.
#[derive(Clone)]
pub struct Db {
    storage: Arc<dyn Storage>,
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db").finish_non_exhaustive()
    }
}

impl Db {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Arc::new(storage),
        }
    }

    /// Open a store backed by a JSON file.
    ///
    /// The file is not touched until the first operation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(FileStorage::new(path))
    }

    /// Build a store over an in-memory document.
    pub fn in_memory(db: Database) -> Self {
        Self::new(MemoryStorage::new(db))
    }

    /// Load the document.
    ///
    /// A missing or unreadable document is logged and treated as empty.
    pub async fn read(&self) -> Database {
        match self.storage.load().await {
            Ok(db) => db,
            Err(e) => {
                tracing::error!(error = %e, "failed to read store, using empty document");
                Database::default()
            }
        }
    }

    /// Load the document for a read-modify-write.
    ///
    /// Only a missing file starts from an empty document. Any other failure
    /// is returned so the existing file is never overwritten.
    async fn load_for_write(&self) -> Result<Database, DbError> {
        match self.storage.load().await {
            Ok(db) => Ok(db),
            Err(e) if e.is_missing_file() => Ok(Database::default()),
            Err(e) => {
                tracing::error!(error = %e, "failed to read store, refusing to write");
                Err(e)
            }
        }
    }

    async fn write(&self, db: &Database) -> Result<(), DbError> {
        self.storage.save(db).await.inspect_err(|e| {
            tracing::error!(error = %e, "failed to write store");
        })
    }

    /// Check credentials. On success returns the user without its password.
    pub async fn authenticate(&self, username: &str, password: &str) -> Option<Value> {
        let db = self.read().await;
        let user = db.find_user(username, password).map(|u| u.public());
        tracing::debug!(username, success = user.is_some(), "login attempt");
        user
    }

    /// All admin products in stored order.
    pub async fn list_products(&self) -> Vec<ProductRecord> {
        self.read().await.products
    }

    /// Add a product.
    ///
    /// `name` and `price` must be present and truthy. The id is assigned
    /// (one past the max) and any `id` in `fields` is replaced. A falsy
    /// `stock` becomes 0.
    pub async fn create_product(&self, fields: Fields) -> Result<ProductRecord, DbError> {
        if !is_truthy(fields.get("name")) || !is_truthy(fields.get("price")) {
            return Err(DbError::Validation("Name and price are required".to_string()));
        }

        let mut db = self.load_for_write().await?;
        let id = db
            .next_product_id()
            .ok_or_else(|| DbError::Validation("No product id available".to_string()))?;

        let mut record = ProductRecord::new(id, fields);
        if !is_truthy(record.get("stock")) {
            record.fields.insert("stock".to_string(), Value::from(0));
        }

        db.products.push(record.clone());
        self.write(&db).await?;
        tracing::info!(id, name = record.name().unwrap_or_default(), "product created");
        Ok(record)
    }

    /// Shallow-merge `updates` into an existing product.
    pub async fn update_product(&self, id: i64, updates: Fields) -> Result<ProductRecord, DbError> {
        let mut db = self.load_for_write().await?;
        let record = db.product_mut(id).ok_or(DbError::NotFound(id))?;
        record.merge(updates);
        let record = record.clone();

        self.write(&db).await?;
        tracing::info!(id, "product updated");
        Ok(record)
    }
}
