use leptos::prelude::*;

/// Five stars with the first `rating` filled
#[component]
pub fn StarRating(rating: u8, #[prop(optional)] large: bool) -> impl IntoView {
    let class = if large {
        "star-rating star-rating--large"
    } else {
        "star-rating"
    };
    view! {
        <span class=class aria-label=format!("{rating} out of 5")>
            {(1..=5u8)
                .map(|i| {
                    let cls = if i <= rating { "star star--filled" } else { "star" };
                    view! { <span class=cls>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}
