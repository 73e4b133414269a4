use crate::layout::use_notice;
use crate::shared::components::{EmptyState, PageHeader, ToneBadge};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use chrono::Utc;
use contracts::domain::a005_offer::{sample_offers, DiscountKind, Offer, OfferBook, OfferDraft, OfferId};
use contracts::shared::list_query::Coded;
use leptos::prelude::*;
use thaw::*;

fn confirm_delete(code: &str) -> bool {
    window()
        .confirm_with_message(&format!("Delete offer {}?", code))
        .unwrap_or(false)
}

#[component]
pub fn OfferList() -> impl IntoView {
    let notices = use_notice();
    let book = RwSignal::new(OfferBook::new(sample_offers(Utc::now())));
    let query = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let visible = Memo::new(move |_| book.with(|b| b.search(&query.get())));
    let total = move || book.with(|b| b.len());

    let on_toggle = Callback::new(move |id: OfferId| {
        if let Some(Some(active)) = book.try_update(|b| b.toggle_active(&id)) {
            log::info!("Offer {} active={}", id, active);
        }
    });

    let on_delete = Callback::new(move |offer: Offer| {
        if !confirm_delete(&offer.code) {
            return;
        }
        if book.try_update(|b| b.remove(&offer.id)).unwrap_or(false) {
            log::info!("Deleted offer {}", offer.id);
            notices.info(format!("Offer {} deleted", offer.code));
        }
    });

    view! {
        <PageFrame page_id="a005_offer--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Offers"
                subtitle="Create and manage coupon offers for your customers."
            >
                <SearchInput value=query placeholder="Search code..." />
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| show_create.update(|v| *v = !*v)
                >
                    {icon_sized("plus", 16)}
                    " New Offer"
                </Button>
            </PageHeader>

            <div class="page__content">
                <Show when=move || show_create.get()>
                    <CreateOfferForm book=book open=show_create />
                </Show>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Existing Offers"</h2>
                        <span class="card__meta">{move || format!("{} total", total())}</span>
                    </div>

                    <Show
                        when=move || !visible.with(|v| v.is_empty())
                        fallback=|| view! { <EmptyState message="No offers found" icon_name="tag" /> }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 760px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"Code"</TableHeaderCell>
                                        <TableHeaderCell>"Discount"</TableHeaderCell>
                                        <TableHeaderCell>"Type"</TableHeaderCell>
                                        <TableHeaderCell>"Expires"</TableHeaderCell>
                                        <TableHeaderCell>"Status"</TableHeaderCell>
                                        <TableHeaderCell>"Created"</TableHeaderCell>
                                        <TableHeaderCell>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || visible.get()
                                        key=|o: &Offer| (o.id.to_string(), o.active)
                                        children=move |o: Offer| view! {
                                            <OfferRow offer=o search=query on_toggle=on_toggle on_delete=on_delete />
                                        }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn OfferRow(
    offer: Offer,
    search: RwSignal<String>,
    on_toggle: Callback<OfferId>,
    on_delete: Callback<Offer>,
) -> impl IntoView {
    let code = offer.code.clone();
    let id = offer.id.clone();
    let for_delete = offer.clone();
    let discount_label = offer.discount_label();
    let kind_code = offer.kind.code();
    let expires = offer.expires_display();
    let status_tone = offer.status_tone();
    let status_label = offer.status_label();
    let created = offer.created_display();
    let toggle_label = offer.toggle_label();

    view! {
        <TableRow>
            <TableCell>
                <span class="table__strong">{move || highlight_matches(&code, &search.get())}</span>
            </TableCell>
            <TableCell>{discount_label}</TableCell>
            <TableCell><span class="table__muted">{kind_code}</span></TableCell>
            <TableCell><span class="table__muted">{expires}</span></TableCell>
            <TableCell>
                <ToneBadge tone=status_tone label=status_label />
            </TableCell>
            <TableCell><span class="table__muted">{created}</span></TableCell>
            <TableCell>
                <div class="table__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        size=ButtonSize::Small
                        on_click=move |_| on_toggle.run(id.clone())
                    >
                        {toggle_label}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        size=ButtonSize::Small
                        attr:title="Delete"
                        on_click=move |_| on_delete.run(for_delete.clone())
                    >
                        {icon_sized("trash", 16)}
                    </Button>
                </div>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn CreateOfferForm(book: RwSignal<OfferBook>, open: RwSignal<bool>) -> impl IntoView {
    let notices = use_notice();
    let code = RwSignal::new(String::new());
    let discount = RwSignal::new(String::new());
    let kind = RwSignal::new(DiscountKind::default().code().to_string());
    let usage_limit = RwSignal::new(String::new());
    let expires_at = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let reset = move || {
        code.set(String::new());
        discount.set(String::new());
        kind.set(DiscountKind::default().code().to_string());
        usage_limit.set(String::new());
        expires_at.set(String::new());
        error.set(None);
    };

    let on_create = move |_| {
        let draft = OfferDraft {
            code: code.get_untracked(),
            discount: discount.get_untracked(),
            kind: kind.get_untracked(),
            usage_limit: usage_limit.get_untracked(),
            expires_at: expires_at.get_untracked(),
            active: true,
        };
        let created = draft
            .into_offer(Utc::now())
            .and_then(|offer| {
                let label = offer.code.clone();
                book.try_update(|b| b.create(offer))
                    .unwrap_or(Ok(()))
                    .map(|_| label)
            });
        match created {
            Ok(label) => {
                log::info!("Created offer {}", label);
                notices.success(format!("Offer {} created", label));
                reset();
                open.set(false);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("tag")}" Create Offer"</h2>
            </div>
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            <div class="form-grid form-grid--three">
                <div class="form-group">
                    <Label>"Code"</Label>
                    <Input value=code />
                </div>
                <div class="form-group">
                    <Label>"Discount"</Label>
                    <Input value=discount placeholder="e.g. 10 for 10% or 500 for flat" />
                </div>
                <div class="form-group">
                    <Label>"Type"</Label>
                    <Select value=kind>
                        {DiscountKind::all()
                            .iter()
                            .map(|k| view! { <option value=k.code()>{k.label()}</option> })
                            .collect_view()}
                    </Select>
                </div>
                <div class="form-group">
                    <Label>"Usage Limit"</Label>
                    <Input value=usage_limit placeholder="optional" />
                </div>
                <div class="form-group">
                    <Label>"Expires At"</Label>
                    <input
                        type="date"
                        class="date-input"
                        prop:value=move || expires_at.get()
                        on:input=move |ev| expires_at.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group form-group--actions">
                    <Button appearance=ButtonAppearance::Primary on_click=on_create>"Create"</Button>
                    <Button
                        appearance=ButtonAppearance::Transparent
                        on_click=move |_| {
                            reset();
                            open.set(false);
                        }
                    >
                        "Cancel"
                    </Button>
                </div>
            </div>
        </div>
    }
}
