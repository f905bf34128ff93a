//! Display locales and bilingual values.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storefront display locale.
///
/// [`Locale::En`] is the default and the fallback for unknown tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    /// Every supported locale, in presentation order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Vi];

    /// Returns the canonical locale label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Vi => "vi",
        }
    }

    /// Parse a locale tag, tolerant of case and region suffixes (`vi-VN`).
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Some(Locale::En),
            "vi" => Some(Locale::Vi),
            _ => None,
        }
    }
}

impl FromStr for Locale {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| CommerceError::InvalidLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value available in every storefront locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Localized<T> {
    pub en: T,
    pub vi: T,
}

impl<T> Localized<T> {
    pub fn new(en: T, vi: T) -> Self {
        Self { en, vi }
    }

    /// Value for the given locale.
    pub fn get(&self, locale: Locale) -> &T {
        match locale {
            Locale::En => &self.en,
            Locale::Vi => &self.vi,
        }
    }

    /// Build a value by evaluating `f` once per locale.
    pub fn from_fn(mut f: impl FnMut(Locale) -> T) -> Self {
        Self {
            en: f(Locale::En),
            vi: f(Locale::Vi),
        }
    }
}

impl Localized<String> {
    /// The same text in every locale.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            en: text.clone(),
            vi: text,
        }
    }
}
