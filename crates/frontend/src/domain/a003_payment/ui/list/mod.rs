mod csv;
pub mod state;

use self::state::create_state;
use super::integration::GatewayPanel;
use crate::layout::use_notice;
use crate::shared::components::table::{SortableHeaderCell, TableCellMoney};
use crate::shared::components::{EmptyState, FilterPanel, PageHeader, StatCard, ToneBadge};
use crate::shared::config::PAYMENT_EXPORT_FILENAME;
use crate::shared::export::export_to_csv;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_payment::{DateWindow, PaymentMode, PaymentStatus, Transaction};
use contracts::enums::Tone;
use contracts::shared::list_query::{Coded, SelectFilter};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn PaymentList() -> impl IntoView {
    let notices = use_notice();
    let state = create_state();

    let search = RwSignal::new(String::new());
    let status = RwSignal::new(SelectFilter::<PaymentStatus>::ALL_VALUE.to_string());
    let mode = RwSignal::new(SelectFilter::<PaymentMode>::ALL_VALUE.to_string());
    let window = RwSignal::new(DateWindow::All.code().to_string());

    let stats = state.with_untracked(|s| s.stats());

    Effect::new(move |_| {
        let term = search.get();
        let status_value = status.get();
        let mode_value = mode.get();
        let window_value = window.get();
        state.update(|s| {
            s.filter.search = term;
            s.filter.status = SelectFilter::from_form_value(&status_value);
            s.filter.mode = SelectFilter::from_form_value(&mode_value);
            s.filter.window = DateWindow::from_code(&window_value).unwrap_or_default();
            s.refresh_view();
        });
    });

    let active_filters = Signal::derive(move || {
        usize::from(!search.get().is_empty())
            + usize::from(status.get() != SelectFilter::<PaymentStatus>::ALL_VALUE)
            + usize::from(mode.get() != SelectFilter::<PaymentMode>::ALL_VALUE)
            + usize::from(window.get() != DateWindow::All.code())
    });
    let clear_filters = Callback::new(move |_| {
        search.set(String::new());
        status.set(SelectFilter::<PaymentStatus>::ALL_VALUE.to_string());
        mode.set(SelectFilter::<PaymentMode>::ALL_VALUE.to_string());
        window.set(DateWindow::All.code().to_string());
    });

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    let count = move || state.with(|s| s.items.len());

    let on_export = move |_| {
        let rows = state.with_untracked(|s| s.items.clone());
        match export_to_csv(&rows, PAYMENT_EXPORT_FILENAME) {
            Ok(()) => log::info!("Exported {} transactions", rows.len()),
            Err(e) => {
                log::warn!("Payment export failed: {}", e);
                notices.error(e);
            }
        }
    };

    view! {
        <PageFrame page_id="a003_payment--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="Payment Management"
                subtitle="Manage payment integrations and track transaction history."
            >
                {()}
            </PageHeader>

            <div class="page__content">
                <GatewayPanel />

                <div class="stats-grid">
                    <StatCard label="Total Collected" icon_name="dollar" tone=Tone::Success
                        value=stats.successful_revenue.format_inr() />
                    <StatCard label="Successful Payments" icon_name="check-circle" tone=Tone::Info
                        value=stats.success_count.to_string() />
                    <StatCard label="Failed Payments" icon_name="x-circle" tone=Tone::Danger
                        value=stats.failed_count.to_string() />
                    <StatCard label="Total Refunded" icon_name="refresh" tone=Tone::Warning
                        value=stats.refunded_amount.format_inr() />
                </div>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"Payment History"</h2>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=on_export
                        >
                            {icon_sized("download", 16)}
                            " Export CSV"
                        </Button>
                    </div>

                    <FilterPanel active_filters_count=active_filters on_clear=clear_filters>
                        <div class="filter-panel__row">
                            <SearchInput
                                value=search
                                placeholder="Search by transaction ID, customer, or booking ID..."
                            />
                            <Select value=status>
                                <option value="all">"All Status"</option>
                                {PaymentStatus::all()
                                    .iter()
                                    .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                    .collect_view()}
                            </Select>
                            <Select value=mode>
                                <option value="all">"All Modes"</option>
                                {PaymentMode::all()
                                    .iter()
                                    .map(|m| view! { <option value=m.code()>{m.label()}</option> })
                                    .collect_view()}
                            </Select>
                            <Select value=window>
                                {DateWindow::all()
                                    .iter()
                                    .map(|w| view! { <option value=w.code()>{w.label()}</option> })
                                    .collect_view()}
                            </Select>
                        </div>
                    </FilterPanel>

                    <Show
                        when={move || count() > 0}
                        fallback=|| view! {
                            <EmptyState
                                message="No transactions found"
                                icon_name="credit-card"
                                hint="Try adjusting your search or filter criteria."
                            />
                        }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 900px;">
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell min_width=170.0>"Transaction ID"</TableHeaderCell>
                                        <SortableHeaderCell label="Customer Name" sort_field="customer" min_width=160.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Amount" sort_field="amount" align="right"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Date" sort_field="date" min_width=130.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Status" sort_field="status"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Mode" sort_field="mode"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <TableHeaderCell min_width=90.0>"Booking"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || state.with(|s| s.items.clone())
                                        key=|t: &Transaction| t.id.to_string()
                                        children=move |t: Transaction| view! { <TransactionRow transaction=t search=search /> }
                                    />
                                </TableBody>
                            </Table>
                        </div>
                        <div class="table-footer">
                            <span>{move || state.with(|s| s.showing_caption())}</span>
                            <span class="table-footer__total">
                                {move || format!("Total: {}", state.with(|s| s.visible_total().format_inr()))}
                            </span>
                        </div>
                    </Show>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn TransactionRow(transaction: Transaction, search: RwSignal<String>) -> impl IntoView {
    let gateway_id = transaction.transaction_id.clone();
    let name = transaction.customer_name.clone();
    let booking = transaction.booking_id.to_string();

    view! {
        <TableRow>
            <TableCell>
                <div class="table__stack">
                    <span class="table__mono">{move || highlight_matches(&gateway_id, &search.get())}</span>
                    <span class="table__muted">{transaction.id.to_string()}</span>
                </div>
            </TableCell>
            <TableCell>
                <span class="table__strong">{move || highlight_matches(&name, &search.get())}</span>
            </TableCell>
            <TableCellMoney value=transaction.amount bold=true />
            <TableCell>
                <div class="table__stack">
                    <span>{transaction.date.format("%Y-%m-%d").to_string()}</span>
                    <span class="table__muted">{transaction.date.format("%H:%M").to_string()}</span>
                </div>
            </TableCell>
            <TableCell>
                <ToneBadge
                    tone=transaction.status.tone()
                    label=transaction.status.label()
                    glyph=transaction.status.icon()
                />
            </TableCell>
            <TableCell>
                <span class="table__mode">
                    {icon_sized(transaction.mode.icon(), 14)}
                    {transaction.mode.code().to_uppercase()}
                </span>
            </TableCell>
            <TableCell>
                <span class="table__link">{icon("calendar")}{move || highlight_matches(&booking, &search.get())}</span>
            </TableCell>
        </TableRow>
    }
}
