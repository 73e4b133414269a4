//! Sortable table header cell.
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Amount"
//!     sort_field="amount"
//!     current_sort_field=Signal::derive(move || state.with(|s| s.sort_field.clone()))
//!     sort_ascending=Signal::derive(move || state.with(|s| s.sort_ascending))
//!     on_sort=Callback::new(move |field| toggle_sort(field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_field: String,
    #[prop(into)] current_sort_field: Signal<String>,
    #[prop(into)] sort_ascending: Signal<bool>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    /// "left" or "right"; numeric columns use "right"
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || get_sort_class(&current_sort_field.get(), &sort_field)>
                    {move || {
                        get_sort_indicator(
                            &current_sort_field.get(),
                            &field_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
