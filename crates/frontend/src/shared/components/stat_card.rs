use crate::shared::icons::icon;
use contracts::enums::Tone;
use leptos::prelude::*;

fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "stat-card stat-card--success",
        Tone::Danger => "stat-card stat-card--error",
        Tone::Warning => "stat-card stat-card--warning",
        Tone::Info => "stat-card stat-card--info",
        Tone::Accent => "stat-card stat-card--accent",
        Tone::Neutral => "stat-card",
    }
}

/// Summary card with an icon, a label and a preformatted value
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, default = Tone::Neutral)] tone: Tone,
    /// Optional caption below the value, e.g. "+12% from last month"
    #[prop(into, optional)]
    caption: Option<String>,
    /// Extra class for the caption line
    #[prop(optional)]
    caption_class: &'static str,
) -> impl IntoView {
    let caption_view = caption.map(|text| {
        let cls = format!("stat-card__subtitle {caption_class}");
        view! { <div class=cls>{text}</div> }
    });

    view! {
        <div class=tone_class(tone)>
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {caption_view}
            </div>
        </div>
    }
}
