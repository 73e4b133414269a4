use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Filter bar above a list: search and selects go in `children`,
/// the header shows how many filters are active and offers a reset.
#[component]
pub fn FilterPanel(
    #[prop(into)] active_filters_count: Signal<usize>,
    on_clear: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div class="filter-panel-header__left">
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! {
                            <span class="filter-panel__badge">{count}</span>
                        })
                    }}
                </div>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    disabled=Signal::derive(move || active_filters_count.get() == 0)
                    on_click=move |_| on_clear.run(())
                >
                    "Clear"
                </Button>
            </div>
            <div class="filter-panel-content">
                {children()}
            </div>
        </div>
    }
}
