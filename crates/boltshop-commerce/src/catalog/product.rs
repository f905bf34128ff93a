//! Product type.

use crate::catalog::asset::{AssetName, AssetRef};
use crate::catalog::category::category_label;
use crate::catalog::describe::describe;
use crate::catalog::naming::display_name;
use crate::ids::{CategoryKey, ProductId};
use crate::locale::{Locale, Localized};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock shown for products derived from assets.
pub const ASSET_STOCK: i64 = 9999;

/// A product in the catalog.
///
/// Products are built once when the catalog is indexed and never mutated
/// afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name per locale.
    pub name: Localized<String>,
    /// Canonical category token.
    pub category_key: CategoryKey,
    /// Category label per locale.
    pub category: Localized<String>,
    /// Unit price.
    pub price: Money,
    /// Image URL or asset path.
    pub image: String,
    /// Description per locale.
    pub description: Localized<String>,
    /// Available stock. Informational only.
    pub quantity: i64,
}

impl Product {
    /// Create a product with labels derived from its category key and
    /// empty descriptions.
    pub fn new(
        id: impl Into<ProductId>,
        name: Localized<String>,
        category_key: impl Into<CategoryKey>,
        price: Money,
    ) -> Self {
        let category_key = category_key.into();
        let category = Localized::from_fn(|locale| category_label(category_key.as_str(), locale));
        Self {
            id: id.into(),
            name,
            category_key,
            category,
            price,
            image: String::new(),
            description: Localized::default(),
            quantity: 0,
        }
    }

    /// Derive a product from an asset filename.
    pub fn from_asset(asset: &AssetRef) -> Self {
        let parsed = AssetName::parse(&asset.path);
        let category_key = parsed.category_key();
        let name = Localized::from_fn(|locale| display_name(&parsed, locale));
        let category = Localized::from_fn(|locale| category_label(&parsed.prefix, locale));
        let description = Localized::from_fn(|locale| {
            describe(&parsed, name.get(locale), category.get(locale), locale)
        });

        Self {
            id: parsed.product_id(),
            name,
            category_key,
            category,
            price: Money::default(),
            image: asset.url.clone(),
            description,
            quantity: ASSET_STOCK,
        }
    }

    /// Display name in the given locale.
    pub fn name_in(&self, locale: Locale) -> &str {
        self.name.get(locale)
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: Localized<String>) -> Self {
        self.description = description;
        self
    }

    /// Set the informational stock level.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }
}
