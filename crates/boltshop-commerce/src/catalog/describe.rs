//! Generated product descriptions.

use crate::catalog::asset::AssetName;
use crate::catalog::category::usage_sentence;
use crate::catalog::dictionary::phrase;
use crate::locale::Locale;
use regex::Regex;
use std::sync::OnceLock;

/// Maximum number of feature phrases listed in a description.
pub const MAX_FEATURES: usize = 3;

/// Tokens that describe the material rather than a feature.
const MATERIAL_MARKERS: &[&str] = &["inox", "nhua", "tandong"];

/// Material inferred from filename tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Material {
    StainlessSteel,
    Plastic,
    Brass,
    #[default]
    CarbonSteel,
}

impl Material {
    /// First matching marker wins, in the order stainless, plastic, brass.
    pub fn from_tokens(tokens: &[&str]) -> Self {
        if tokens.contains(&"inox") {
            Material::StainlessSteel
        } else if tokens.contains(&"nhua") {
            Material::Plastic
        } else if tokens.contains(&"tandong") {
            Material::Brass
        } else {
            Material::CarbonSteel
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Material::StainlessSteel, Locale::En) => "Stainless steel",
            (Material::StainlessSteel, Locale::Vi) => "Thép không gỉ (Inox)",
            (Material::Plastic, Locale::En) => "Plastic",
            (Material::Plastic, Locale::Vi) => "Nhựa",
            (Material::Brass, Locale::En) => "Brass",
            (Material::Brass, Locale::Vi) => "Đồng",
            (Material::CarbonSteel, Locale::En) => "Carbon steel",
            (Material::CarbonSteel, Locale::Vi) => "Thép cacbon",
        }
    }
}

fn size_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)m(\d+)\s*-\s*m(\d+)").expect("valid size range regex"))
}

fn size_single_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)m(\d+)").expect("valid size regex"))
}

fn size_token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)^m\d+$").expect("valid size token regex"))
}

/// Metric thread sizes mentioned in a filename suffix.
///
/// A range (`m6-m10`) wins and is rendered `M6–M10`; otherwise every
/// distinct `M<n>` in order of appearance, comma separated.
pub fn size_hint(suffix: &str) -> Option<String> {
    if let Some(caps) = size_range_re().captures(suffix) {
        return Some(format!("M{}\u{2013}M{}", &caps[1], &caps[2]));
    }

    let mut sizes: Vec<String> = Vec::new();
    for caps in size_single_re().captures_iter(suffix) {
        let size = format!("M{}", &caps[1]);
        if !sizes.contains(&size) {
            sizes.push(size);
        }
    }
    (!sizes.is_empty()).then(|| sizes.join(", "))
}

/// Up to [`MAX_FEATURES`] dictionary phrases, skipping material and size tokens.
pub fn features(tokens: &[&str], locale: Locale) -> Vec<&'static str> {
    tokens
        .iter()
        .copied()
        .filter(|token| !MATERIAL_MARKERS.contains(token))
        .filter(|token| !size_token_re().is_match(token))
        .filter_map(|token| phrase(token, locale))
        .take(MAX_FEATURES)
        .collect()
}

/// Build the description of an asset product.
///
/// Sentences, in order: category membership, features (if any), material,
/// reference sizes (if any), category usage.
pub fn describe(name: &AssetName, display_name: &str, category: &str, locale: Locale) -> String {
    let tokens = name.tokens();
    let material = Material::from_tokens(&tokens).label(locale);
    let features = features(&tokens, locale).join(", ");
    let size = size_hint(&name.suffix);

    let mut parts = Vec::with_capacity(5);
    match locale {
        Locale::En => {
            parts.push(format!("{display_name} belongs to {category}."));
            if !features.is_empty() {
                parts.push(format!("Key features: {features}."));
            }
            parts.push(format!("Material: {material}."));
            if let Some(size) = size {
                parts.push(format!("Reference sizes: {size}."));
            }
        }
        Locale::Vi => {
            parts.push(format!("{display_name} thuộc danh mục {category}."));
            if !features.is_empty() {
                parts.push(format!("Đặc tính: {features}."));
            }
            parts.push(format!("Chất liệu: {material}."));
            if let Some(size) = size {
                parts.push(format!("Kích cỡ tham chiếu: {size}."));
            }
        }
    }
    parts.push(usage_sentence(&name.prefix, locale).to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_material_from_tokens() {
        assert_eq!(Material::from_tokens(&["vit", "inox"]), Material::StainlessSteel);
        assert_eq!(Material::from_tokens(&["nhua"]), Material::Plastic);
        assert_eq!(Material::from_tokens(&["tandong"]), Material::Brass);
        assert_eq!(Material::from_tokens(&["nhua", "inox"]), Material::StainlessSteel);
        assert_eq!(Material::from_tokens(&[]), Material::CarbonSteel);
    }

    #[test]
    fn test_size_range() {
        assert_eq!(size_hint("bulong_m6-m10").as_deref(), Some("M6\u{2013}M10"));
        assert_eq!(size_hint("thanhren_M8 - m12").as_deref(), Some("M8\u{2013}M12"));
    }

    #[test]
    fn test_size_singles_deduplicated() {
        assert_eq!(size_hint("daioc_m8_m10_m8").as_deref(), Some("M8, M10"));
        assert_eq!(size_hint("vit"), None);
        assert_eq!(size_hint(""), None);
    }

    #[test]
    fn test_features_skip_material_and_size() {
        let tokens = ["inox", "m8", "daioc", "longden", "venh", "demphang"];
        assert_eq!(
            features(&tokens, Locale::En),
            vec!["Nut", "Washer", "Spring Washer"]
        );
    }

    #[test]
    fn test_features_ignore_unknown() {
        assert!(features(&["xyz", "m6"], Locale::En).is_empty());
    }

    #[test]
    fn test_describe_en() {
        let name = AssetName::parse("ocvit_vit_inox_m4-m6.png");
        let text = describe(&name, "Screw Stainless Steel Screw M4-M6", "Screws & Nuts", Locale::En);
        assert_eq!(
            text,
            "Screw Stainless Steel Screw M4-M6 belongs to Screws & Nuts. \
             Key features: Screw. Material: Stainless steel. \
             Reference sizes: M4\u{2013}M6. Ideal for fastening wood, metal and plastics."
        );
    }

    #[test]
    fn test_describe_vi_without_features() {
        let name = AssetName::parse("misc.png");
        let text = describe(&name, "Misc", "Misc", Locale::Vi);
        assert_eq!(
            text,
            "Misc thuộc danh mục Misc. Chất liệu: Thép cacbon. Ứng dụng rộng rãi trong kỹ thuật."
        );
    }
}
