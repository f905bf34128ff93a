//! JSON file store for Boltshop.
//!
//! Holds the login users and the admin-managed product list in a single
//! JSON document, read in full on every operation and rewritten in full
//! on every change.
//!
//! # Example
//!
//! ```rust,no_run
//! use boltshop_db::prelude::*;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), DbError> {
//! let db = Db::open("db.json");
//!
//! let fields = match json!({"name": "Ốc vít", "price": 1500}) {
//!     serde_json::Value::Object(map) => map,
//!     _ => unreachable!(),
//! };
//! let product = db.create_product(fields).await?;
//! assert_eq!(product.get("stock"), Some(&json!(0)));
//!
//! let user = db.authenticate("admin", "admin123").await;
//! # Ok(())
//! # }
//! ```

mod db;
mod error;
mod types;

pub use db::{Db, FileStorage, MemoryStorage, Storage};
pub use error::DbError;
pub use types::{is_truthy, Database, Fields, ProductRecord, UserRecord};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Database, Db, DbError, Fields, ProductRecord, Storage, UserRecord};
}
