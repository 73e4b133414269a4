/// Search highlighting, sort indicators and the search box shared by list pages
use leptos::prelude::*;

/// Splits `text` into `(segment, is_match)` pieces for a case-insensitive `filter`.
///
/// Matching is done on lowercase copies; segments are cut from the original
/// text, so the case of the row is preserved.
pub fn split_highlight(text: &str, filter: &str) -> Vec<(String, bool)> {
    if filter.is_empty() {
        return vec![(text.to_string(), false)];
    }

    // Offsets found in the lowercase copy are only valid in `text` when every
    // character keeps its byte width; otherwise fall back to a plain span.
    let (Some(text_lower), Some(filter_lower)) = (lower_same_width(text), lower_same_width(filter))
    else {
        return vec![(text.to_string(), false)];
    };

    let mut parts = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if start > last_pos {
            parts.push((text[last_pos..start].to_string(), false));
        }
        parts.push((text[start..end].to_string(), true));
        last_pos = end;
    }
    if last_pos < text.len() || parts.is_empty() {
        parts.push((text[last_pos..].to_string(), false));
    }
    parts
}

/// Lowercases char by char, or `None` when some character changes width or
/// expands into several characters.
fn lower_same_width(text: &str) -> Option<String> {
    let mut lowered = String::with_capacity(text.len());
    for c in text.chars() {
        let mut lower = c.to_lowercase();
        let single = lower.next()?;
        if lower.next().is_some() || single.len_utf8() != c.len_utf8() {
            return None;
        }
        lowered.push(single);
    }
    Some(lowered)
}

/// Renders `text` with every match of `filter` wrapped in a `<mark>`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let parts: Vec<AnyView> = split_highlight(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            if is_match {
                view! { <mark class="search-highlight">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect();

    view! { <>{parts}</> }.into_any()
}

/// Arrow shown next to a sortable column title
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Search box with a clear button, bound directly to a signal
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| value.set(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(parts: &[(String, bool)]) -> Vec<&str> {
        parts
            .iter()
            .filter(|(_, m)| *m)
            .map(|(s, _)| s.as_str())
            .collect()
    }

    #[test]
    fn test_split_keeps_original_case() {
        let parts = split_highlight("Rajesh Kumar", "KUM");
        assert_eq!(
            parts,
            vec![
                ("Rajesh ".to_string(), false),
                ("Kum".to_string(), true),
                ("ar".to_string(), false)
            ]
        );
    }

    #[test]
    fn test_split_multiple_matches() {
        let parts = split_highlight("Mumbai → Pune, Mumbai", "mumbai");
        assert_eq!(marked(&parts), vec!["Mumbai", "Mumbai"]);
        let joined: String = parts.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(joined, "Mumbai → Pune, Mumbai");
    }

    #[test]
    fn test_split_without_match_or_filter() {
        assert_eq!(split_highlight("BK001", ""), vec![("BK001".to_string(), false)]);
        assert_eq!(split_highlight("BK001", "zz"), vec![("BK001".to_string(), false)]);
        assert_eq!(split_highlight("", "a"), vec![(String::new(), false)]);
    }

    #[test]
    fn test_split_width_changing_lowercase_is_left_plain() {
        let text = "\u{1E9E}\u{023A}";
        let filter = "\u{2C65}";
        assert_eq!(text.len(), text.to_lowercase().len());
        assert_eq!(split_highlight(text, filter), vec![(text.to_string(), false)]);
        assert_eq!(
            split_highlight("\u{130}stanbul", "stan"),
            vec![("\u{130}stanbul".to_string(), false)]
        );
    }

    #[test]
    fn test_split_non_ascii_same_width() {
        let parts = split_highlight("Café Müller", "MÜL");
        assert_eq!(marked(&parts), vec!["Mül"]);
    }

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("amount", "amount", true), " ▲");
        assert_eq!(get_sort_indicator("amount", "amount", false), " ▼");
        assert_eq!(get_sort_indicator("date", "amount", true), " ⇅");
    }
}
