//! Domain logic for the Boltshop hardware store.
//!
//! This crate holds everything the storefront needs that is not rendering:
//!
//! - **Catalog**: products derived from image asset filenames, with
//!   bilingual names, categories and descriptions
//! - **Cart**: the customer's session-local selection and its totals
//! - **Search**: the shop listing query (category, text, sort, pages)
//!
//! # Example
//!
//! ```rust
//! use boltshop_commerce::prelude::*;
//!
//! let catalog = Catalog::from_assets(vec![
//!     AssetRef::new("assets/ocvit_botuocnovit.png", "/assets/ocvit_botuocnovit.png"),
//!     AssetRef::new("assets/ocvit_inox.png", "/assets/ocvit_inox.png"),
//! ]);
//!
//! let mut cart = Cart::new();
//! let product = catalog.get(&ProductId::new("ocvit_inox")).unwrap();
//! cart.add(product, 2);
//! assert_eq!(cart.count(), 2);
//!
//! let page = ShopQuery::new().with_search("oc vit").with_locale(Locale::Vi).run(&catalog);
//! assert_eq!(page.items.len(), 1);
//! ```

pub mod error;
pub mod ids;
pub mod locale;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod search;

pub use error::CommerceError;
pub use ids::{CategoryKey, ProductId};
pub use locale::{Locale, Localized};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{CategoryKey, ProductId};
    pub use crate::locale::{Locale, Localized};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{AssetName, AssetRef, Catalog, CategorySummary, Product};

    // Cart
    pub use crate::cart::{Cart, LineItem, MAX_QUANTITY_PER_ITEM};

    // Search
    pub use crate::search::{Pagination, ProductPage, ShopQuery, SortMode};
}
