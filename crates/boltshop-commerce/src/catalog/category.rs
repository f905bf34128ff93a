//! Category labels and usage copy keyed by filename prefix.

use crate::catalog::naming::capitalize;
use crate::ids::CategoryKey;
use crate::locale::{Locale, Localized};
use serde::{Deserialize, Serialize};

/// Human-readable label for a category key.
///
/// Unknown keys fall back to the key with its first letter uppercased.
pub fn category_label(key: &str, locale: Locale) -> String {
    let known = match (key, locale) {
        ("bulong", Locale::En) => Some("Bolts"),
        ("bulong", Locale::Vi) => Some("Bu Lông"),
        ("ocvit", Locale::En) => Some("Screws & Nuts"),
        ("ocvit", Locale::Vi) => Some("Ốc Vít"),
        ("khoa", Locale::En) => Some("Locks & Latches"),
        ("khoa", Locale::Vi) => Some("Khóa & Chốt"),
        ("dungcu", Locale::En) => Some("Tools"),
        ("dungcu", Locale::Vi) => Some("Dụng Cụ"),
        ("dungcucokhi", Locale::En) => Some("Mechanical Tools"),
        ("dungcucokhi", Locale::Vi) => Some("Dụng Cụ Cơ Khí"),
        ("vatlieu", Locale::En) => Some("Materials"),
        ("vatlieu", Locale::Vi) => Some("Vật Liệu"),
        _ => None,
    };
    known.map_or_else(|| capitalize(key), str::to_string)
}

/// Closing sentence of a product description: what the category is used for.
pub fn usage_sentence(key: &str, locale: Locale) -> &'static str {
    match (key, locale) {
        ("bulong", Locale::En) => "Suitable for mechanical joints, structures and fixtures.",
        ("bulong", Locale::Vi) => "Phù hợp lắp ghép cơ khí, kết cấu và nội thất.",
        ("ocvit", Locale::En) => "Ideal for fastening wood, metal and plastics.",
        ("ocvit", Locale::Vi) => "Thích hợp bắt giữ với gỗ, kim loại và nhựa.",
        ("khoa", Locale::En) => "For doors, cabinets and safety latching.",
        ("khoa", Locale::Vi) => "Dùng cho cửa, tủ và các vị trí cần chốt/khóa an toàn.",
        ("dungcu" | "dungcucokhi", Locale::En) => {
            "Great for repair, installation and workshop tasks."
        }
        ("dungcu" | "dungcucokhi", Locale::Vi) => "Hữu dụng cho sửa chữa, lắp đặt và gia công.",
        ("vatlieu", Locale::En) => "Base materials for fabrication and construction.",
        ("vatlieu", Locale::Vi) => "Vật liệu đầu vào cho gia công và xây dựng.",
        (_, Locale::En) => "Applicable to various engineering tasks.",
        (_, Locale::Vi) => "Ứng dụng rộng rãi trong kỹ thuật.",
    }
}

/// One entry of the shop's category list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category key used for filtering.
    pub key: CategoryKey,
    /// Display label per locale.
    pub label: Localized<String>,
    /// Number of catalog products under this key.
    pub product_count: usize,
}

impl CategorySummary {
    pub fn new(key: CategoryKey) -> Self {
        let label = Localized::from_fn(|locale| category_label(key.as_str(), locale));
        Self {
            key,
            label,
            product_count: 0,
        }
    }
}
