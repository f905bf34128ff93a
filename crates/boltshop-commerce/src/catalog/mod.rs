//! Product catalog module.
//!
//! Turns a listing of image assets into products. Everything a product
//! shows (name, category, description) is derived from its filename, so
//! the heuristics here are pure functions of the filename.

mod asset;
mod category;
mod describe;
mod dictionary;
mod index;
mod naming;
mod product;

pub use asset::{is_image_asset, AssetName, AssetRef, IMAGE_EXTENSIONS};
pub use category::{category_label, usage_sentence, CategorySummary};
pub use describe::{describe, features, size_hint, Material, MAX_FEATURES};
pub use dictionary::phrase;
pub use index::Catalog;
pub use naming::{capitalize, display_name, name_from_tokens, title_case};
pub use product::{Product, ASSET_STOCK};
