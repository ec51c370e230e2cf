//! List-page data shaping: search filter and fixed-size pagination.

use crate::models::ShoppingItem;

/// Items shown per page on the list view.
pub const PAGE_SIZE: usize = 12;

/// What the list page asked for.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive substring matched against name and brand.
    pub search: Option<String>,
    /// Requested page, 1-based. Out-of-range values are clamped.
    pub page: usize,
}

/// One page of filtered items.
#[derive(Debug)]
pub struct ListPage<'a> {
    pub items: Vec<&'a ShoppingItem>,
    /// The effective page after clamping.
    pub page: usize,
    pub total_pages: usize,
    /// How many items matched the search, across all pages.
    pub total_matched: usize,
}

/// Whether an item matches a search needle (already lowercased).
fn matches(item: &ShoppingItem, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle) || item.brand.to_lowercase().contains(needle)
}

/// Filter and paginate the collection for display.
///
/// The page is clamped to `[1, total_pages]`, with at least one page even
/// when nothing matched - the list view always renders page 1 of an
/// empty result.
#[must_use]
pub fn list_page<'a>(items: &'a [ShoppingItem], query: &ListQuery) -> ListPage<'a> {
    let needle = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let filtered: Vec<&ShoppingItem> = match &needle {
        Some(needle) => items.iter().filter(|i| matches(i, needle)).collect(),
        None => items.iter().collect(),
    };

    let total_matched = filtered.len();
    let total_pages = total_matched.div_ceil(PAGE_SIZE).max(1);
    let page = query.page.clamp(1, total_pages);
    let items = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    ListPage {
        items,
        page,
        total_pages,
        total_matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, brand: &str) -> ShoppingItem {
        serde_json::from_value(serde_json::json!({
            "id": name,
            "name": name,
            "brand": brand,
        }))
        .unwrap()
    }

    #[test]
    fn test_page_clamps_to_valid_range() {
        let items: Vec<ShoppingItem> = (0..25).map(|i| item(&format!("item-{i}"), "")).collect();
        let page = list_page(
            &items,
            &ListQuery {
                search: None,
                page: 5,
            },
        );
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.page, 3);
        assert_eq!(page.items.len(), 1);
    }

    #[test]
    fn test_page_zero_becomes_one() {
        let items = vec![item("Arroz", "")];
        let page = list_page(&items, &ListQuery::default());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_search_matches_name_or_brand_case_insensitive() {
        let items = vec![
            item("Arroz", "Tio João"),
            item("Feijão", "Camil"),
            item("Café", "tio joão"),
        ];
        let page = list_page(
            &items,
            &ListQuery {
                search: Some("TIO JOÃO".to_string()),
                page: 1,
            },
        );
        assert_eq!(page.total_matched, 2);
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let items = vec![item("Arroz", ""), item("Feijão", "")];
        let page = list_page(
            &items,
            &ListQuery {
                search: Some("   ".to_string()),
                page: 1,
            },
        );
        assert_eq!(page.total_matched, 2);
    }
}
