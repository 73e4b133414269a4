//! Page category constants.
//!
//! Every routed page declares an HTML `id` in the form `{entity}--{category}`
//! (e.g. `"a001_booking--list"`) and a `data-page-category` attribute holding
//! one of the values below. Copying the id from the DOM inspector leads
//! straight to the module that renders it.

/// Filterable list of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Dashboard with cards and charts.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Login, register, settings and fallback pages.
pub const PAGE_CAT_SYSTEM: &str = "system";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
];

/// True when `id` has a non-empty entity and category around `--`.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_ids_need_both_halves() {
        assert!(is_valid_page_id("a001_booking--list"));
        assert!(is_valid_page_id("d002_analytics--dashboard"));
        assert!(!is_valid_page_id("a001_booking"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_booking--"));
    }

    #[test]
    fn known_categories() {
        assert!(is_known_category("list"));
        assert!(is_known_category("system"));
        assert!(!is_known_category("legacy"));
    }
}
