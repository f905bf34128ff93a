//! Asset references and filename parsing.

use crate::ids::{CategoryKey, ProductId};
use serde::{Deserialize, Serialize};

/// File extensions picked up when listing an asset directory.
pub const IMAGE_EXTENSIONS: &[&str] = &["webp", "png", "jpg", "jpeg", "jfif"];

/// One entry of an asset listing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetRef {
    /// Path of the asset as listed (only the last segment is parsed).
    pub path: String,
    /// URL the storefront loads the image from.
    pub url: String,
}

impl AssetRef {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Check whether a path has one of the [`IMAGE_EXTENSIONS`].
pub fn is_image_asset(path: &str) -> bool {
    let file_name = file_name(path);
    match file_name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
        None => false,
    }
}

/// A filename split into the parts the catalog heuristics work on.
///
/// Parsing never fails: a name without `_` or `-` gets the `misc` prefix
/// and an empty suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetName {
    /// Filename without extension, original case. Becomes the product id.
    pub stem: String,
    /// Lowercased text before the first separator.
    pub prefix: String,
    /// Lowercased text after the first separator.
    pub suffix: String,
}

impl AssetName {
    /// Parse the last segment of `path`.
    ///
    /// `_` takes precedence over `-` as separator: `ocvit_m6-m10` splits
    /// into `ocvit` / `m6-m10`.
    pub fn parse(path: &str) -> Self {
        let stem = strip_extension(file_name(path)).to_string();
        let lower = stem.to_lowercase();

        let (prefix, suffix) = if let Some((prefix, suffix)) = lower.split_once('_') {
            (prefix.to_string(), suffix.to_string())
        } else if let Some((prefix, suffix)) = lower.split_once('-') {
            (prefix.to_string(), suffix.to_string())
        } else {
            (CategoryKey::MISC.to_string(), String::new())
        };

        Self {
            stem,
            prefix,
            suffix,
        }
    }

    pub fn product_id(&self) -> ProductId {
        ProductId::new(self.stem.as_str())
    }

    pub fn category_key(&self) -> CategoryKey {
        CategoryKey::new(self.prefix.as_str())
    }

    /// Suffix tokens, split on `_` only.
    pub fn tokens(&self) -> Vec<&str> {
        if self.suffix.is_empty() {
            Vec::new()
        } else {
            self.suffix.split('_').collect()
        }
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => &name[..idx],
        _ => name,
    }
}
