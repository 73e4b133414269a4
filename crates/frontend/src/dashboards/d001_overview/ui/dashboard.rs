use crate::shared::components::table::TableCellMoney;
use crate::shared::components::{PageHeader, StatCard, ToneBadge};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_auth;
use contracts::dashboards::d001_overview::{
    kpi_cards, recent_bookings, COMPANY_CONTACT, QUICK_ACTIONS,
};
use contracts::domain::a001_booking::{sample_bookings, Booking};
use contracts::shared::list_query::Coded;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Landing page after login
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let (auth, _) = use_auth();
    let recent = recent_bookings(&sample_bookings());

    // Contact card follows the logged-in organization when there is one
    let contact_name = move || {
        auth.with(|a| a.current_org.as_ref().map(|o| o.organization.clone()))
            .unwrap_or_else(|| COMPANY_CONTACT.name.to_string())
    };
    let contact_email = move || {
        auth.with(|a| a.current_org.as_ref().map(|o| o.email.clone()))
            .unwrap_or_else(|| COMPANY_CONTACT.email.to_string())
    };

    view! {
        <PageFrame page_id="d001_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Dashboard"
                subtitle="Welcome back! Here's what's happening with your business."
            >
                {()}
            </PageHeader>

            <div class="page__content">
                <div class="stats-grid">
                    {kpi_cards()
                        .into_iter()
                        .map(|card| view! {
                            <StatCard
                                label=card.title
                                icon_name=card.icon
                                value=card.value.to_string()
                                caption=card.change_caption()
                                caption_class=card.trend.css_class()
                            />
                        })
                        .collect_view()}
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Recent Bookings"</h2>
                        <A href="/bookings" attr:class="button-link">"View All"</A>
                    </div>
                    <div class="table-wrapper">
                        <Table attr:style="width: 100%; min-width: 820px;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Booking ID"</TableHeaderCell>
                                    <TableHeaderCell>"Customer"</TableHeaderCell>
                                    <TableHeaderCell>"Route"</TableHeaderCell>
                                    <TableHeaderCell>"Date"</TableHeaderCell>
                                    <TableHeaderCell>"Status"</TableHeaderCell>
                                    <TableHeaderCell>"Amount"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {recent.into_iter().map(|b| view! { <RecentBookingRow booking=b /> }).collect_view()}
                            </TableBody>
                        </Table>
                    </div>
                </div>

                <div class="dashboard-columns">
                    <div class="card">
                        <h2 class="card__title">"Quick Actions"</h2>
                        <div class="quick-actions">
                            {QUICK_ACTIONS
                                .iter()
                                .map(|action| view! {
                                    <A href=action.href attr:class="quick-actions__item">
                                        {icon_sized(action.icon, 16)}" "{action.label}
                                    </A>
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Company Overview"</h2>
                        <div class="company-card">
                            <span class="company-card__initials">{COMPANY_CONTACT.initials}</span>
                            <div>
                                <div class="company-card__name">{contact_name}</div>
                                <div class="company-card__tagline">{COMPANY_CONTACT.tagline}</div>
                            </div>
                        </div>
                        <ul class="company-card__contacts">
                            <li>{icon_sized("mail", 14)}{contact_email}</li>
                            <li>{icon_sized("phone", 14)}{COMPANY_CONTACT.phone}</li>
                            <li>{icon_sized("map-pin", 14)}{COMPANY_CONTACT.cities}</li>
                        </ul>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn RecentBookingRow(booking: Booking) -> impl IntoView {
    let id = booking.id.to_string();
    let customer_name = booking.customer_name.clone();
    let customer_phone = booking.customer_phone.clone();
    let pickup_city = booking.pickup_city().to_string();
    let drop_city = booking.drop_city().to_string();
    let date = booking.date_display();
    let status_tone = booking.status.tone();
    let status_label = booking.status.label();
    let status_icon = booking.status.icon();

    view! {
        <TableRow>
            <TableCell><span class="table__strong">{id}</span></TableCell>
            <TableCell>
                <div class="table__stack">
                    <span>{customer_name}</span>
                    <span class="table__muted">{customer_phone}</span>
                </div>
            </TableCell>
            <TableCell>
                <span class="table__route">
                    {pickup_city}" → "{drop_city}
                </span>
            </TableCell>
            <TableCell>
                <span>{icon_sized("clock", 12)}{date}</span>
            </TableCell>
            <TableCell>
                <ToneBadge tone=status_tone label=status_label glyph=status_icon />
            </TableCell>
            <TableCellMoney value=booking.amount />
            <TableCell>
                <A href="/bookings" attr:class="button-link button-link--small">{icon("eye")}" View"</A>
            </TableCell>
        </TableRow>
    }
}
