use crate::shared::icons::icon_sized;
use contracts::enums::Tone;
use leptos::prelude::*;

/// Status pill; `glyph` is an optional icon name shown before the label
#[component]
pub fn ToneBadge(tone: Tone, #[prop(into)] label: String, #[prop(optional)] glyph: &'static str) -> impl IntoView {
    view! {
        <span class=tone.badge_class()>
            {(!glyph.is_empty()).then(|| view! { <span class="badge__glyph">{icon_sized(glyph, 12)}</span> })}
            {label}
        </span>
    }
}
