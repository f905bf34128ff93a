//! Shop listing query.

use crate::catalog::{Catalog, Product};
use crate::error::CommerceError;
use crate::locale::Locale;
use crate::search::filter::{matches_category, matches_text, normalize_text};
use crate::search::results::ProductPage;
use crate::search::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "all";

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Catalog order.
    #[default]
    Default,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by display name A-Z.
    NameAsc,
}

impl SortMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Default => "default",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
            SortMode::NameAsc => "name_asc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Default => "Default",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::NameAsc => "Name: A-Z",
        }
    }

    /// Stable-sort products in place.
    pub fn apply(&self, products: &mut [&Product], locale: Locale) {
        match self {
            SortMode::Default => {}
            SortMode::PriceAsc => products.sort_by_key(|p| p.price.amount),
            SortMode::PriceDesc => products.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
            SortMode::NameAsc => products.sort_by(|a, b| compare_names(a, b, locale)),
        }
    }
}

impl FromStr for SortMode {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(SortMode::Default),
            "price_asc" => Ok(SortMode::PriceAsc),
            "price_desc" => Ok(SortMode::PriceDesc),
            "name_asc" => Ok(SortMode::NameAsc),
            other => Err(CommerceError::InvalidSort(other.to_string())),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shop listing query: category, text search, sort and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopQuery {
    /// Lowercase category key, or `"all"`.
    pub category: String,
    /// Search text as typed.
    pub search: String,
    /// Sort option.
    pub sort: SortMode,
    /// Requested page (1-indexed), clamped when the query runs.
    pub page: usize,
    /// Items per page.
    pub page_size: usize,
    /// Locale whose names are searched and sorted.
    pub locale: Locale,
}

impl Default for ShopQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopQuery {
    /// Create a query for the first page of everything.
    pub fn new() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortMode::Default,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            locale: Locale::default(),
        }
    }

    /// Parse URL query parameters.
    ///
    /// Recognised keys: `category`, `search`, `sort`, `page`, `page_size`,
    /// `lang`. Missing or malformed values keep their defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let mut query = Self::new();

        if let Some(category) = params.get("category") {
            query = query.with_category(category);
        }
        if let Some(search) = params.get("search") {
            query = query.with_search(search);
        }
        if let Some(sort) = params.get("sort") {
            match sort.parse() {
                Ok(sort) => query.sort = sort,
                Err(e) => tracing::debug!(error = %e, "ignoring sort parameter"),
            }
        }
        let page = params
            .get("page")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(1);
        let page_size = params
            .get("page_size")
            .and_then(|p| p.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        query = query.with_pagination(page, page_size);
        if let Some(locale) = params.get("lang").and_then(|l| Locale::parse(l)) {
            query.locale = locale;
        }

        query
    }

    /// Set the category. Empty means all.
    pub fn with_category(mut self, category: impl AsRef<str>) -> Self {
        let category = category.as_ref().trim().to_lowercase();
        self.category = if category.is_empty() {
            ALL_CATEGORIES.to_string()
        } else {
            category
        };
        self
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Page is at least 1, page size within `[1, 100]`.
    pub fn with_pagination(mut self, page: usize, page_size: usize) -> Self {
        self.page = page.max(1);
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Run the query against a catalog.
    ///
    /// Steps: category filter, text filter, sort, paginate. A category that
    /// no product uses is treated as search text when no search was given.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> ProductPage<'a> {
        let known_category = self.category == ALL_CATEGORIES || catalog.has_category(&self.category);

        let mut matches: Vec<&Product> = catalog.products().iter().collect();
        if known_category && self.category != ALL_CATEGORIES {
            matches.retain(|p| matches_category(p, &self.category));
        }

        // Whitespace-only search text still suppresses the category fallback.
        let raw = if self.search.is_empty() && !known_category {
            self.category.as_str()
        } else {
            self.search.as_str()
        };
        let needle = raw.trim();
        if !needle.is_empty() {
            let needle = normalize_text(needle);
            matches.retain(|p| matches_text(p, &needle, self.locale));
        }

        self.sort.apply(&mut matches, self.locale);

        let page = ProductPage::slice(&matches, self.page, self.page_size);
        tracing::debug!(
            category = %self.category,
            search = %self.search,
            sort = %self.sort,
            total = page.pagination.total,
            page = page.pagination.page,
            "shop query"
        );
        page
    }
}

/// Compare two products by normalised display name.
pub fn compare_names(a: &Product, b: &Product, locale: Locale) -> Ordering {
    let (a, b) = (a.name_in(locale), b.name_in(locale));
    normalize_text(a)
        .cmp(&normalize_text(b))
        .then_with(|| a.cmp(b))
}
