//! The product catalog index.

use crate::catalog::asset::{is_image_asset, AssetRef};
use crate::catalog::category::CategorySummary;
use crate::catalog::product::Product;
use crate::error::CommerceError;
use crate::ids::{CategoryKey, ProductId};
use std::collections::HashSet;
use std::path::Path;

/// A de-duplicated list of products, sorted by id.
///
/// Building the same listing twice yields the same catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog from an asset listing.
    ///
    /// When two assets share an id (same stem, different extension) the one
    /// whose path sorts first is kept.
    pub fn from_assets(assets: impl IntoIterator<Item = AssetRef>) -> Self {
        let mut assets: Vec<AssetRef> = assets.into_iter().collect();
        assets.sort();
        let products = assets.iter().map(Product::from_asset).collect();
        let catalog = Self::from_products(products);
        tracing::info!(products = catalog.len(), "catalog built from assets");
        catalog
    }

    /// Build the catalog from a static product list.
    ///
    /// Later duplicates of an id are dropped; the result is sorted by id.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut seen = HashSet::with_capacity(products.len());
        let mut products: Vec<Product> = products
            .into_iter()
            .filter(|product| {
                let fresh = seen.insert(product.id.clone());
                if !fresh {
                    tracing::debug!(id = %product.id, "dropping duplicate catalog entry");
                }
                fresh
            })
            .collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Self { products }
    }

    /// List the image files of a directory and build the catalog from them.
    ///
    /// Each asset's URL is `url_prefix` joined with its filename.
    pub fn from_dir(dir: impl AsRef<Path>, url_prefix: &str) -> Result<Self, CommerceError> {
        let dir = dir.as_ref();
        let io_err = |source| CommerceError::Io {
            path: dir.display().to_string(),
            source,
        };

        let prefix = url_prefix.trim_end_matches('/');
        let mut assets = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            if !entry.file_type().map_err(io_err)?.is_file() {
                continue;
            }
            let file_name = entry.file_name().to_string_lossy().into_owned();
            if !is_image_asset(&file_name) {
                continue;
            }
            let url = format!("{prefix}/{file_name}");
            assets.push(AssetRef::new(entry.path().to_string_lossy(), url));
        }

        tracing::debug!(dir = %dir.display(), assets = assets.len(), "listed asset directory");
        Ok(Self::from_assets(assets))
    }

    /// All products, sorted by id.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products
            .binary_search_by(|p| p.id.cmp(id))
            .ok()
            .map(|idx| &self.products[idx])
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category keys in catalog order.
    pub fn category_keys(&self) -> Vec<&CategoryKey> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| &p.category_key)
            .filter(|key| seen.insert(*key))
            .collect()
    }

    /// Check whether any product uses `key`.
    pub fn has_category(&self, key: &str) -> bool {
        self.products.iter().any(|p| p.category_key.as_str() == key)
    }

    /// Categories with labels and product counts, in catalog order.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for product in &self.products {
            match summaries.iter_mut().find(|s| s.key == product.category_key) {
                Some(summary) => summary.product_count += 1,
                None => {
                    let mut summary = CategorySummary::new(product.category_key.clone());
                    summary.label = product.category.clone();
                    summary.product_count = 1;
                    summaries.push(summary);
                }
            }
        }
        summaries
    }
}
