pub mod state;

use self::state::create_state;
use crate::shared::components::{EmptyState, FilterPanel, PageHeader, StarRating, ToneBadge};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a004_review::{Rating, Review, ReviewId, ReviewSort, ReviewStats};
use contracts::enums::Tone;
use contracts::shared::list_query::{Coded, SelectFilter};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ReviewList() -> impl IntoView {
    let state = create_state();
    let search = RwSignal::new(String::new());
    let rating = RwSignal::new(SelectFilter::<Rating>::ALL_VALUE.to_string());
    let sort = RwSignal::new(ReviewSort::default().code().to_string());

    Effect::new(move |_| {
        let term = search.get();
        let rating_value = rating.get();
        let sort_value = sort.get();
        state.update(|s| {
            s.filter.search = term;
            s.filter.rating = SelectFilter::from_form_value(&rating_value);
            s.filter.sort = ReviewSort::from_code(&sort_value).unwrap_or_default();
            s.refresh_view();
        });
    });

    let active_filters = Signal::derive(move || {
        usize::from(!search.get().is_empty())
            + usize::from(rating.get() != SelectFilter::<Rating>::ALL_VALUE)
    });
    let clear_filters = Callback::new(move |_| {
        search.set(String::new());
        rating.set(SelectFilter::<Rating>::ALL_VALUE.to_string());
        sort.set(ReviewSort::default().code().to_string());
    });

    let on_helpful = Callback::new(move |id: ReviewId| {
        if let Some(Some(votes)) = state.try_update(|s| s.mark_helpful(&id)) {
            log::info!("Review {} marked helpful ({} votes)", id, votes);
        }
    });

    let stats = Memo::new(move |_| state.with(|s| s.stats()));
    let count = move || state.with(|s| s.items.len());

    view! {
        <PageFrame page_id="a004_review--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Reviews & Ratings"
                subtitle="Track customer feedback and manage your service ratings."
            >
                {()}
            </PageHeader>

            <div class="page__content">
                <RatingOverview stats=stats />

                <FilterPanel active_filters_count=active_filters on_clear=clear_filters>
                    <div class="filter-panel__row">
                        <SearchInput
                            value=search
                            placeholder="Search reviews by customer, content, or booking ID..."
                        />
                        <Select value=rating>
                            <option value="all">"All Ratings"</option>
                            {Rating::all()
                                .iter()
                                .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=sort>
                            {ReviewSort::all()
                                .iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                </FilterPanel>

                <Show
                    when={move || count() > 0}
                    fallback=|| view! {
                        <div class="card">
                            <EmptyState
                                message="No reviews found"
                                hint="Try adjusting your search or filter criteria."
                            />
                        </div>
                    }
                >
                    <div class="review-grid">
                        <For
                            each=move || state.with(|s| s.items.clone())
                            key=|r: &Review| (r.id.to_string(), r.helpful)
                            children=move |r: Review| view! {
                                <ReviewCard review=r search=search on_helpful=on_helpful />
                            }
                        />
                    </div>
                </Show>

                <div class="stats-grid stats-grid--three">
                    <div class="card card--center">
                        <div class="stat-figure stat-figure--success">{move || stats.get().positive}</div>
                        <div class="stat-figure__label">"Positive Reviews"</div>
                    </div>
                    <div class="card card--center">
                        <div class="stat-figure stat-figure--primary">{move || stats.get().helpful_average}</div>
                        <div class="stat-figure__label">"Avg. Helpful Votes"</div>
                    </div>
                    <div class="card card--center">
                        <div class="stat-figure stat-figure--info">{move || stats.get().verified}</div>
                        <div class="stat-figure__label">"Verified Reviews"</div>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

/// Average score card and the 5..1 distribution bars
#[component]
fn RatingOverview(stats: Memo<ReviewStats>) -> impl IntoView {
    view! {
        <div class="rating-overview">
            <div class="card card--center">
                <div class="rating-overview__average">{move || stats.get().average_display()}</div>
                {move || view! { <StarRating rating=stats.get().average_stars() large=true /> }}
                <div class="rating-overview__caption">
                    {move || format!("Based on {} reviews", stats.get().total)}
                </div>
            </div>
            <div class="card rating-overview__distribution">
                <h3 class="card__title">"Rating Distribution"</h3>
                {move || stats
                    .get()
                    .distribution
                    .into_iter()
                    .map(|bucket| view! {
                        <div class="distribution-row">
                            <span class="distribution-row__label">
                                {bucket.rating.value()}{icon_sized("star", 12)}
                            </span>
                            <div class="distribution-row__track">
                                <div
                                    class="distribution-row__bar"
                                    style=format!("width: {:.1}%", bucket.percentage)
                                ></div>
                            </div>
                            <span class="distribution-row__count">
                                {format!("{} ({}%)", bucket.count, bucket.percentage.round())}
                            </span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ReviewCard(review: Review, search: RwSignal<String>, on_helpful: Callback<ReviewId>) -> impl IntoView {
    let name = review.customer_name.clone();
    let route = review.route.clone();
    let text = review.review_text.clone();
    let booking = review.booking_id.to_string();
    let id = review.id.clone();

    view! {
        <div class="card review-card">
            <div class="review-card__header">
                <div class="review-card__author">
                    <span class="review-card__avatar">{icon("user")}</span>
                    <div>
                        <div class="review-card__name">
                            <span>{move || highlight_matches(&name, &search.get())}</span>
                            {review.verified.then(|| view! {
                                <ToneBadge tone=Tone::Success label="Verified" />
                            })}
                        </div>
                        <div class="review-card__meta">
                            <span>{icon_sized("calendar", 12)}{review.date_display()}</span>
                            <span>{icon_sized("map-pin", 12)}{move || highlight_matches(&route, &search.get())}</span>
                        </div>
                    </div>
                </div>
                <ToneBadge tone=review.rating.tone() label=review.rating.badge_text() />
            </div>

            <StarRating rating=review.rating.value() />

            <p class="review-card__text">{move || highlight_matches(&text, &search.get())}</p>

            <div class="review-card__footer">
                <span class="table__muted">
                    "Booking: "{move || highlight_matches(&booking, &search.get())}
                </span>
                <Button
                    appearance=ButtonAppearance::Subtle
                    size=ButtonSize::Small
                    on_click=move |_| on_helpful.run(id.clone())
                >
                    {icon_sized("thumbs-up", 14)}
                    {format!(" {}", review.helpful)}
                </Button>
            </div>
        </div>
    }
}
