pub mod state;

use self::state::create_state;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::{EmptyState, FilterPanel, PageHeader, StatCard, ToneBadge};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_booking::{Booking, BookingStats, BookingStatus};
use contracts::enums::Tone;
use contracts::shared::list_query::{Coded, SelectFilter};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn BookingList() -> impl IntoView {
    let state = create_state();
    let search = RwSignal::new(String::new());
    let status = RwSignal::new(SelectFilter::<BookingStatus>::ALL_VALUE.to_string());

    // Summary cards count the full dataset, not the filtered view
    let stats = state.with_untracked(|s| BookingStats::from_bookings(&s.all));

    Effect::new(move |_| {
        let term = search.get();
        let status_value = status.get();
        state.update(|s| {
            s.filter.search = term;
            s.filter.status = SelectFilter::from_form_value(&status_value);
            s.refresh_view();
        });
    });

    let active_filters = Signal::derive(move || {
        usize::from(!search.get().is_empty())
            + usize::from(status.get() != SelectFilter::<BookingStatus>::ALL_VALUE)
    });
    let clear_filters = Callback::new(move |_| {
        search.set(String::new());
        status.set(SelectFilter::<BookingStatus>::ALL_VALUE.to_string());
    });

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    let count = move || state.with(|s| s.items.len());

    view! {
        <PageFrame page_id="a001_booking--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Bookings Management"
                subtitle="Manage all your customer bookings and their status."
            >
                {()}
            </PageHeader>

            <div class="page__content">
                <FilterPanel active_filters_count=active_filters on_clear=clear_filters>
                    <div class="filter-panel__row">
                        <SearchInput
                            value=search
                            placeholder="Search by booking ID, customer name, or location..."
                        />
                        <Select value=status>
                            <option value="all">"All Status"</option>
                            {BookingStatus::all()
                                .iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                </FilterPanel>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">{move || format!("All Bookings ({})", count())}</h2>
                    </div>

                    <Show
                        when={move || count() > 0}
                        fallback=|| view! {
                            <EmptyState
                                message="No bookings found"
                                hint="Try adjusting your search or filter criteria."
                            />
                        }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 960px;">
                                <TableHeader>
                                    <TableRow>
                                        <SortableHeaderCell label="Booking ID" sort_field="id"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Customer" sort_field="customer" min_width=180.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <TableHeaderCell min_width=160.0>"Pickup Location"</TableHeaderCell>
                                        <TableHeaderCell min_width=160.0>"Drop Location"</TableHeaderCell>
                                        <SortableHeaderCell label="Date & Time" sort_field="date" min_width=130.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Status" sort_field="status"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Amount" sort_field="amount" align="right"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <TableHeaderCell min_width=90.0>"Items"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || state.with(|s| s.items.clone())
                                        key=|b: &Booking| b.id.to_string()
                                        children=move |b: Booking| view! { <BookingRow booking=b search=search /> }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                    </Show>
                </div>

                <div class="stats-grid">
                    <StatCard label="Pending Bookings" icon_name="clock" tone=Tone::Warning
                        value=stats.pending.to_string() />
                    <StatCard label="Confirmed Bookings" icon_name="check-circle" tone=Tone::Info
                        value=stats.confirmed.to_string() />
                    <StatCard label="In Progress" icon_name="truck" tone=Tone::Success
                        value=stats.in_progress.to_string() />
                    <StatCard label="Completed" icon_name="calendar"
                        value=stats.completed.to_string() />
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn BookingRow(booking: Booking, search: RwSignal<String>) -> impl IntoView {
    let id = booking.id.to_string();
    let name = booking.customer_name.clone();
    let pickup = booking.pickup_location.clone();
    let drop = booking.drop_location.clone();
    let phone = booking.customer_phone.clone();
    let pickup_title = booking.pickup_location.clone();
    let drop_title = booking.drop_location.clone();
    let date = booking.date_display();
    let time = booking.time_display();
    let status_tone = booking.status.tone();
    let status_label = booking.status.label();
    let status_icon = booking.status.icon();
    let items = booking.items.clone();

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout>
                    <span class="table__strong">{move || highlight_matches(&id, &search.get())}</span>
                </TableCellLayout>
            </TableCell>
            <TableCell>
                <div class="table__stack">
                    <span class="table__strong">
                        {icon_sized("user", 14)}
                        {move || highlight_matches(&name, &search.get())}
                    </span>
                    <span class="table__muted">{icon_sized("phone", 12)}{phone}</span>
                </div>
            </TableCell>
            <TableCell>
                <span class="table__location table__location--pickup" title=pickup_title>
                    {icon_sized("map-pin", 14)}
                    {move || highlight_matches(&pickup, &search.get())}
                </span>
            </TableCell>
            <TableCell>
                <span class="table__location table__location--drop" title=drop_title>
                    {icon_sized("map-pin", 14)}
                    {move || highlight_matches(&drop, &search.get())}
                </span>
            </TableCell>
            <TableCell>
                <div class="table__stack">
                    <span>{icon("clock")}{date}</span>
                    <span class="table__muted">{time}</span>
                </div>
            </TableCell>
            <TableCell>
                <ToneBadge
                    tone=status_tone
                    label=status_label
                    glyph=status_icon
                />
            </TableCell>
            <TableCellMoney value=booking.amount bold=true />
            <TableCell>
                <span class="table__muted">{items}</span>
            </TableCell>
        </TableRow>
    }
}
