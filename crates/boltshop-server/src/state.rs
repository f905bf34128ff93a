//! Shared handler state.

use boltshop_commerce::catalog::Catalog;
use boltshop_db::Db;
use std::sync::Arc;

/// State cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Db,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(db: Db, catalog: Catalog) -> Self {
        Self {
            db,
            catalog: Arc::new(catalog),
        }
    }
}
