//! Search, select-filter and sort primitives shared by every list page.
//!
//! A list view is always recomputed from the full dataset: search first,
//! then each select predicate, then an optional sort. Row order is kept
//! unless a sort is applied, and sorting is stable.

use std::cmp::Ordering;

/// Search input as typed, plus its lowercase form computed once per pass
#[derive(Debug, Clone)]
pub struct SearchTerm<'a> {
    pub raw: &'a str,
    pub lower: String,
}

impl<'a> SearchTerm<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self {
            raw,
            lower: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }
}

/// Types that can be matched against a search box
pub trait Searchable {
    fn matches_term(&self, term: &SearchTerm<'_>) -> bool;
}

/// Types that can be ordered by a named column
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Closed set of values exposed through a `<select>`.
///
/// `code` is the option value, `label` the visible text.
pub trait Coded: Sized + Copy + PartialEq + 'static {
    fn code(&self) -> &'static str;

    fn label(&self) -> &'static str;

    fn all() -> &'static [Self];

    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }
}

/// Case-insensitive substring test; `needle_lower` must already be lowercase.
pub fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keeps rows matching the search term. An empty term keeps everything.
pub fn filter_by_term<T: Searchable + Clone>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let term = SearchTerm::new(term);
    items
        .iter()
        .filter(|item| item.matches_term(&term))
        .cloned()
        .collect()
}

/// Sorts the list by the given column
pub fn sort_list<T: Sortable>(items: &mut [T], field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// "All / one value" select filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectFilter<T> {
    All,
    Only(T),
}

impl<T> Default for SelectFilter<T> {
    fn default() -> Self {
        SelectFilter::All
    }
}

impl<T: Coded> SelectFilter<T> {
    pub const ALL_VALUE: &'static str = "all";

    /// Parses the `<select>` value; anything unknown falls back to `All`.
    pub fn from_form_value(value: &str) -> Self {
        T::from_code(value).map_or(SelectFilter::All, SelectFilter::Only)
    }

    pub fn form_value(&self) -> &'static str {
        match self {
            SelectFilter::All => Self::ALL_VALUE,
            SelectFilter::Only(v) => v.code(),
        }
    }

    pub fn accepts(&self, value: &T) -> bool {
        match self {
            SelectFilter::All => true,
            SelectFilter::Only(v) => v == value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Color {
        Red,
        Blue,
    }

    impl Coded for Color {
        fn code(&self) -> &'static str {
            match self {
                Color::Red => "red",
                Color::Blue => "blue",
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Color::Red => "Red",
                Color::Blue => "Blue",
            }
        }

        fn all() -> &'static [Self] {
            &[Color::Red, Color::Blue]
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        rank: u32,
    }

    impl Searchable for Row {
        fn matches_term(&self, term: &SearchTerm<'_>) -> bool {
            contains_ci(self.name, &term.lower)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "rank" => self.rank.cmp(&other.rank),
                _ => self.name.cmp(other.name),
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Alpha", rank: 2 },
            Row { name: "beta", rank: 1 },
            Row { name: "Gamma", rank: 2 },
        ]
    }

    #[test]
    fn test_empty_term_keeps_all_rows() {
        assert_eq!(filter_by_term(&rows(), ""), rows());
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let found = filter_by_term(&rows(), "BET");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "beta");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut items = rows();
        sort_list(&mut items, "rank", false);
        let names: Vec<_> = items.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "Gamma", "beta"]);
    }

    #[test]
    fn test_select_filter_form_values() {
        assert_eq!(SelectFilter::<Color>::from_form_value("all"), SelectFilter::All);
        assert_eq!(
            SelectFilter::<Color>::from_form_value("blue"),
            SelectFilter::Only(Color::Blue)
        );
        assert_eq!(SelectFilter::<Color>::from_form_value("green"), SelectFilter::All);
        assert_eq!(SelectFilter::Only(Color::Red).form_value(), "red");
        assert!(SelectFilter::<Color>::All.accepts(&Color::Red));
        assert!(!SelectFilter::Only(Color::Blue).accepts(&Color::Red));
    }
}
