//! Catalog inspection command.

use anyhow::{Context as _, Result};
use boltshop_commerce::catalog::Catalog;
use boltshop_commerce::search::{Pagination, ProductPage, ShopQuery};
use boltshop_commerce::Locale;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::truncate;

const WIDTHS: [usize; 4] = [28, 32, 18, 12];
const VISIBLE_PAGES: usize = 7;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let dir = ctx.resolve_path(&args.assets_dir);
    let prefix = ctx.config.server.asset_route();
    let catalog = Catalog::from_dir(&dir, &prefix)
        .with_context(|| format!("Failed to index assets in {}", dir.display()))?;

    if args.categories {
        show_categories(&catalog, args.lang, ctx);
        return Ok(());
    }

    let query = build_query(&args);
    let page = query.run(&catalog);

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    show_page(&page, args.lang, ctx);
    Ok(())
}

/// Translate command line flags into a shop query.
pub fn build_query(args: &CatalogArgs) -> ShopQuery {
    ShopQuery::new()
        .with_category(&args.category)
        .with_search(args.search.clone())
        .with_sort(args.sort)
        .with_pagination(args.page, args.page_size)
        .with_locale(args.lang)
}

fn show_categories(catalog: &Catalog, lang: Locale, ctx: &Context) {
    let categories = catalog.categories();
    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return;
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.kv(
            category.key.as_str(),
            &format!("{} ({})", category.label.get(lang), category.product_count),
        );
    }
}

fn show_page(page: &ProductPage<'_>, lang: Locale, ctx: &Context) {
    let p = &page.pagination;
    ctx.output.header(&format!(
        "Products: page {}/{} ({} total)",
        p.page, p.total_pages, p.total
    ));

    if page.is_empty() {
        ctx.output.warn("No products match");
        return;
    }

    ctx.output.table_row(&["ID", "NAME", "CATEGORY", "PRICE"], &WIDTHS);
    for product in &page.items {
        let name = truncate(product.name_in(lang), WIDTHS[1]);
        let category = truncate(product.category.get(lang), WIDTHS[2]);
        let price = product.price.display();
        ctx.output.table_row(
            &[product.id.as_str(), &name, &category, &price],
            &WIDTHS,
        );
    }

    if p.total_pages > 1 {
        ctx.output.info(&page_strip(p));
    }
}

/// Page links around the current page, e.g. `Pages: 1 [2] 3  next: --page 3`.
pub fn page_strip(p: &Pagination) -> String {
    let pages: Vec<String> = p
        .page_numbers(VISIBLE_PAGES)
        .into_iter()
        .map(|n| if n == p.page { format!("[{n}]") } else { n.to_string() })
        .collect();
    let mut line = format!("Pages: {}", pages.join(" "));
    if p.has_next {
        line.push_str(&format!("  next: --page {}", p.page + 1));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use boltshop_commerce::search::SortMode;
    use std::path::PathBuf;

    #[test]
    fn test_build_query() {
        let args = CatalogArgs {
            assets_dir: PathBuf::from("assets"),
            category: "OcVit".to_string(),
            search: "inox".to_string(),
            sort: SortMode::NameAsc,
            page: 0,
            page_size: 500,
            lang: Locale::Vi,
            categories: false,
        };
        let query = build_query(&args);
        assert_eq!(query.category, "ocvit");
        assert_eq!(query.search, "inox");
        assert_eq!(query.sort, SortMode::NameAsc);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 100);
        assert_eq!(query.locale, Locale::Vi);
    }

    #[test]
    fn test_page_strip() {
        assert_eq!(
            page_strip(&Pagination::new(2, 10, 30)),
            "Pages: 1 [2] 3  next: --page 3"
        );
        assert_eq!(page_strip(&Pagination::new(3, 10, 30)), "Pages: 1 2 [3]");
        assert_eq!(
            page_strip(&Pagination::new(10, 1, 20)),
            "Pages: 7 8 9 [10] 11 12 13  next: --page 11"
        );
    }
}
