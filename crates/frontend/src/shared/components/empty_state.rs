use crate::shared::icons::icon_sized;
use leptos::prelude::*;

/// Placeholder shown when a filtered list has no rows
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    #[prop(optional, default = "search")] icon_name: &'static str,
    #[prop(optional, into)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon_sized(icon_name, 40)}</div>
            <p class="empty-state__message">{message}</p>
            {hint.map(|h| view! { <p class="empty-state__hint">{h}</p> })}
        </div>
    }
}
