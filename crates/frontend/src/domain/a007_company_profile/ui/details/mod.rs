mod form;

use self::form::ProfileForm;
use crate::layout::use_notice;
use crate::shared::components::StarRating;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a007_company_profile::{CompanyProfile, ProfileStats};
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

type FieldGetter = fn(&ProfileForm) -> &String;
type FieldSetter = fn(&mut ProfileForm, String);

/// Mock share of each star level shown under the average
const RATING_SHARES: [(u8, u8); 5] = [(5, 65), (4, 25), (3, 8), (2, 2), (1, 0)];

#[component]
fn ProfileField(
    draft: RwSignal<ProfileForm>,
    editing: RwSignal<bool>,
    label: &'static str,
    get: FieldGetter,
    set: FieldSetter,
    #[prop(optional)] icon_name: &'static str,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let value = move || draft.with(|f| get(f).clone());
    let input = if multiline {
        view! {
            <textarea
                rows="5"
                prop:value=value
                prop:disabled=move || !editing.get()
                placeholder="Tell customers about your company, experience, and services..."
                on:input=move |ev| draft.update(|f| set(f, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                prop:value=value
                prop:disabled=move || !editing.get()
                on:input=move |ev| draft.update(|f| set(f, event_target_value(&ev)))
            />
        }
        .into_any()
    };
    view! {
        <div class="form-group">
            <label>
                {(!icon_name.is_empty()).then(|| icon_sized(icon_name, 14))}
                {label}
            </label>
            {input}
        </div>
    }
}

#[component]
pub fn CompanyProfileDetails() -> impl IntoView {
    let notices = use_notice();
    let saved = RwSignal::new(CompanyProfile::default());
    let draft = RwSignal::new(ProfileForm::from(&CompanyProfile::default()));
    let editing = RwSignal::new(false);
    let stats = ProfileStats::default();
    let average_stars = stats.average_rating.round() as u8;

    let on_cancel = move |_| {
        draft.set(saved.with_untracked(|p| ProfileForm::from(p)));
        editing.set(false);
    };

    let on_save = move |_| match draft.with_untracked(|f| f.to_profile()) {
        Ok(profile) => {
            log::info!("Saved company profile for {}", profile.name);
            draft.set(ProfileForm::from(&profile));
            saved.set(profile);
            editing.set(false);
            notices.success("Company profile updated successfully!");
        }
        Err(e) => notices.error(e.to_string()),
    };

    let on_add_area = move || {
        if let Some(Err(e)) = draft.try_update(|f| f.add_pending_area()) {
            notices.error(e.to_string());
        }
    };

    view! {
        <PageFrame page_id="a007_company_profile--details" category=PAGE_CAT_DETAIL>
            <div class="profile-banner">
                <div class="profile-banner__text">
                    <h1 class="profile-banner__title">{move || saved.with(|p| p.name.clone())}</h1>
                    <p class="profile-banner__subtitle">"Established since 2018 • Licensed & Verified"</p>
                </div>
                <div class="profile-banner__logo">{icon_sized("building", 48)}</div>
                <div class="profile-banner__actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(true)>
                                {icon_sized("edit", 16)}" Edit Profile"
                            </Button>
                        }
                    >
                        <Button appearance=ButtonAppearance::Secondary on_click=on_cancel>"Cancel"</Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            {icon_sized("save", 16)}" Save Changes"
                        </Button>
                    </Show>
                </div>
            </div>

            <div class="profile-layout">
                <div class="profile-layout__main">
                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"Company Information"</h2>
                        </div>
                        <div class="form-grid">
                            <ProfileField draft=draft editing=editing label="Company Name" icon_name="building"
                                get=|f| &f.name set=|f, v| f.name = v />
                            <ProfileField draft=draft editing=editing label="GST Number"
                                get=|f| &f.gst set=|f, v| f.gst = v />
                        </div>
                        <ProfileField draft=draft editing=editing label="Business Address" icon_name="map-pin"
                            get=|f| &f.address set=|f, v| f.address = v />
                        <div class="form-grid form-grid--three">
                            <ProfileField draft=draft editing=editing label="Contact Number" icon_name="phone"
                                get=|f| &f.phone set=|f, v| f.phone = v />
                            <ProfileField draft=draft editing=editing label="Email Address" icon_name="mail"
                                get=|f| &f.email set=|f, v| f.email = v />
                            <ProfileField draft=draft editing=editing label="Website" icon_name="globe"
                                get=|f| &f.website set=|f, v| f.website = v />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">{icon("map-pin")}" Service Areas"</h2>
                        </div>
                        <div class="chip-list">
                            <For
                                each=move || draft.with(|f| f.service_areas.clone())
                                key=|area: &String| area.clone()
                                children=move |area: String| {
                                    let to_remove = area.clone();
                                    view! {
                                        <span class="chip">
                                            {area}
                                            <Show when=move || editing.get()>
                                                {
                                                    let to_remove = to_remove.clone();
                                                    view! {
                                                        <button
                                                            class="chip__remove"
                                                            title="Remove"
                                                            on:click=move |_| draft.update(|f| f.remove_area(&to_remove))
                                                        >
                                                            {icon_sized("x", 12)}
                                                        </button>
                                                    }
                                                }
                                            </Show>
                                        </span>
                                    }
                                }
                            />
                        </div>
                        <Show when=move || editing.get()>
                            <div class="input-with-action">
                                <input
                                    type="text"
                                    placeholder="Add new service area"
                                    prop:value=move || draft.with(|f| f.new_area.clone())
                                    on:input=move |ev| draft.update(|f| f.new_area = event_target_value(&ev))
                                    on:keydown=move |ev| {
                                        if ev.key() == "Enter" {
                                            on_add_area();
                                        }
                                    }
                                />
                                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_add_area()>
                                    {icon_sized("plus", 16)}
                                </Button>
                            </div>
                        </Show>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">{icon("clock")}" Operating Hours"</h2>
                        </div>
                        <div class="form-grid">
                            <ProfileField draft=draft editing=editing label="Weekdays (Mon - Fri)"
                                get=|f| &f.weekdays set=|f, v| f.weekdays = v />
                            <ProfileField draft=draft editing=editing label="Weekends (Sat - Sun)"
                                get=|f| &f.weekends set=|f, v| f.weekends = v />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">{icon("dollar")}" Pricing Details"</h2>
                        </div>
                        <h3 class="form-section__title">"Local Moving (Within City)"</h3>
                        <div class="form-grid">
                            <ProfileField draft=draft editing=editing label="Minimum Price (₹)"
                                get=|f| &f.local_min set=|f, v| f.local_min = v />
                            <ProfileField draft=draft editing=editing label="Maximum Price (₹)"
                                get=|f| &f.local_max set=|f, v| f.local_max = v />
                        </div>
                        <h3 class="form-section__title">"Inter-City Moving"</h3>
                        <div class="form-grid">
                            <ProfileField draft=draft editing=editing label="Minimum Price (₹)"
                                get=|f| &f.intercity_min set=|f, v| f.intercity_min = v />
                            <ProfileField draft=draft editing=editing label="Maximum Price (₹)"
                                get=|f| &f.intercity_max set=|f, v| f.intercity_max = v />
                        </div>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h2 class="card__title">"About Us"</h2>
                        </div>
                        <ProfileField draft=draft editing=editing label="" multiline=true
                            get=|f| &f.about_us set=|f, v| f.about_us = v />
                    </div>
                </div>

                <aside class="profile-layout__side">
                    <div class="card">
                        <h3 class="card__title">"Customer Ratings"</h3>
                        <div class="card--center">
                            <div class="rating-overview__average">{format!("{:.1}", stats.average_rating)}</div>
                            <StarRating rating=average_stars />
                            <div class="rating-overview__caption">
                                {format!("Based on {} reviews", stats.total_reviews)}
                            </div>
                        </div>
                        {RATING_SHARES
                            .iter()
                            .map(|(stars, share)| view! {
                                <div class="distribution-row distribution-row--compact">
                                    <span class="distribution-row__label">
                                        {format!("{} {}", stars, if *stars == 1 { "star" } else { "stars" })}
                                    </span>
                                    <div class="distribution-row__track">
                                        <div class="distribution-row__bar" style=format!("width: {}%", share)></div>
                                    </div>
                                    <span class="distribution-row__count">{format!("{}%", share)}</span>
                                </div>
                            })
                            .collect_view()}
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Business Statistics"</h3>
                        <dl class="key-values">
                            <dt>{icon_sized("calendar", 14)}"Total Completed"</dt>
                            <dd>{stats.completed_bookings}</dd>
                            <dt>{icon_sized("users", 14)}"Active Customers"</dt>
                            <dd>{stats.active_customers}</dd>
                            <dt>{icon_sized("clock", 14)}"Years in Business"</dt>
                            <dd>"6+"</dd>
                        </dl>
                    </div>

                    <div class="card">
                        <h3 class="card__title">"Quick Actions"</h3>
                        <div class="quick-actions">
                            <A href="/reviews" attr:class="quick-actions__item">
                                {icon_sized("star", 16)}" View All Reviews"
                            </A>
                            <button class="quick-actions__item" on:click=move |_| editing.set(true)>
                                {icon_sized("dollar", 16)}" Update Pricing"
                            </button>
                            <button class="quick-actions__item" on:click=move |_| editing.set(true)>
                                {icon_sized("map-pin", 16)}" Manage Service Areas"
                            </button>
                        </div>
                    </div>
                </aside>
            </div>
        </PageFrame>
    }
}
