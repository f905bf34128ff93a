//! Text normalisation and product predicates.

use crate::catalog::Product;
use crate::locale::Locale;
use unicode_normalization::UnicodeNormalization;

/// Combining Diacritical Marks block.
const COMBINING_DIACRITICS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalise text for matching: lowercase, decompose (NFD), drop
/// combining diacritics in U+0300..=U+036F.
///
/// `"Ốc Vít"` becomes `"oc vit"`.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_DIACRITICS.contains(c))
        .collect()
}

/// Check whether a product belongs to a category key.
pub fn matches_category(product: &Product, key: &str) -> bool {
    product.category_key.as_str() == key
}

/// Check whether a product's name in `locale` contains an already
/// normalised needle.
pub fn matches_text(product: &Product, normalized_needle: &str, locale: Locale) -> bool {
    normalize_text(product.name_in(locale)).contains(normalized_needle)
}
