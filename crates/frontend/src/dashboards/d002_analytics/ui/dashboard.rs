use crate::layout::use_notice;
use crate::shared::components::{PageHeader, StatCard, ToneBadge};
use crate::shared::export::{export_to_csv, CsvExportable};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d002_analytics::{change_caption, AnalyticsSnapshot, MonthlyRevenue, TimeRange};
use contracts::enums::Tone;
use contracts::shared::list_query::Coded;
use leptos::prelude::*;
use thaw::*;

const REPORT_FILENAME: &str = "analytics_monthly_revenue.csv";

impl CsvExportable for MonthlyRevenue {
    fn headers() -> Vec<&'static str> {
        vec!["Month", "Revenue", "Bookings"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.month.to_string(),
            self.revenue.value().to_string(),
            self.bookings.to_string(),
        ]
    }
}

/// Medal class for the first three routes
fn rank_class(index: usize) -> &'static str {
    match index {
        0 => "rank rank--gold",
        1 => "rank rank--silver",
        2 => "rank rank--bronze",
        _ => "rank",
    }
}

fn bar_style(fraction: f64) -> String {
    format!("width: {:.1}%", fraction * 100.0)
}

#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let notices = use_notice();
    let range = RwSignal::new(TimeRange::default().code().to_string());
    let snapshot = Memo::new(move |_| {
        let selected = TimeRange::from_code(&range.get()).unwrap_or_default();
        AnalyticsSnapshot::for_range(selected)
    });

    let overview = move || snapshot.with(|s| s.overview);

    let on_export = move |_| {
        let rows = snapshot.with_untracked(|s| s.monthly_revenue.clone());
        match export_to_csv(&rows, REPORT_FILENAME) {
            Ok(()) => log::info!("Exported analytics report ({} months)", rows.len()),
            Err(e) => notices.error(e),
        }
    };

    view! {
        <PageFrame page_id="d002_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader
                title="Analytics Dashboard"
                subtitle="Track your business performance and insights."
            >
                <Select value=range>
                    {TimeRange::all()
                        .iter()
                        .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                        .collect_view()}
                </Select>
            </PageHeader>

            <div class="page__content">
                <div class="stats-grid">
                    <StatCard label="Total Revenue" icon_name="dollar" tone=Tone::Success
                        value=Signal::derive(move || overview().total_revenue.format_inr())
                        caption=change_caption(snapshot.get_untracked().overview.revenue_change)
                        caption_class="stat-card__change--up" />
                    <StatCard label="Total Bookings" icon_name="calendar" tone=Tone::Info
                        value=Signal::derive(move || overview().total_bookings.to_string())
                        caption=change_caption(snapshot.get_untracked().overview.bookings_change)
                        caption_class="stat-card__change--up" />
                    <StatCard label="Avg. Booking Value" icon_name="bar-chart" tone=Tone::Accent
                        value=Signal::derive(move || overview().avg_booking_value.format_inr())
                        caption=change_caption(snapshot.get_untracked().overview.avg_value_change)
                        caption_class="stat-card__change--up" />
                    <StatCard label="Customer Rating" icon_name="star" tone=Tone::Warning
                        value=Signal::derive(move || format!("{}/5.0", overview().customer_satisfaction))
                        caption=format!("+{} from last month", snapshot.get_untracked().overview.satisfaction_change)
                        caption_class="stat-card__change--up" />
                </div>

                <div class="dashboard-columns">
                    <div class="card" id="revenue-trend">
                        <h2 class="card__title">"Monthly Revenue Trend"</h2>
                        {move || snapshot.with(|s| {
                            s.monthly_revenue
                                .iter()
                                .map(|m| view! {
                                    <div class="bar-row">
                                        <span class="bar-row__label">{m.month}</span>
                                        <div class="bar-row__track">
                                            <div class="bar-row__bar" style=bar_style(s.revenue_bar_ratio(m))></div>
                                        </div>
                                        <div class="bar-row__figures">
                                            <span class="bar-row__value">{m.revenue.format_inr()}</span>
                                            <span class="bar-row__caption">{format!("{} bookings", m.bookings)}</span>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Booking Status Distribution"</h2>
                        {move || snapshot.with(|s| {
                            s.bookings_by_status
                                .iter()
                                .map(|share| view! {
                                    <div class="bar-row">
                                        <ToneBadge tone=share.tone() label=share.status />
                                        <div class="bar-row__track">
                                            <div class="bar-row__bar" style=bar_style(share.percentage / 100.0)></div>
                                        </div>
                                        <div class="bar-row__figures">
                                            <span class="bar-row__value">{share.count}</span>
                                            <span class="bar-row__caption">{format!("{}%", share.percentage)}</span>
                                        </div>
                                    </div>
                                })
                                .collect_view()
                        })}
                    </div>
                </div>

                <div class="dashboard-columns">
                    <div class="card">
                        <h2 class="card__title">"Top Performing Routes"</h2>
                        <Table attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Route"</TableHeaderCell>
                                    <TableHeaderCell>"Bookings"</TableHeaderCell>
                                    <TableHeaderCell>"Revenue"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                {move || snapshot.with(|s| {
                                    s.top_routes
                                        .iter()
                                        .enumerate()
                                        .map(|(index, &route)| view! {
                                            <TableRow>
                                                <TableCell>
                                                    <span class=rank_class(index)>{index + 1}</span>
                                                    {icon_sized("map-pin", 14)}
                                                    {route.route}
                                                </TableCell>
                                                <TableCell>{route.bookings}</TableCell>
                                                <TableCell>{route.revenue.format_inr()}</TableCell>
                                            </TableRow>
                                        })
                                        .collect_view()
                                })}
                            </TableBody>
                        </Table>
                    </div>

                    <div class="card">
                        <h2 class="card__title">"Customer Insights"</h2>
                        {move || {
                            let metrics = snapshot.with(|s| s.customer_metrics);
                            view! {
                                <div class="insight-grid">
                                    <div class="insight insight--info">
                                        <div class="insight__value">{metrics.new_customers}</div>
                                        <div class="insight__label">"New Customers"</div>
                                    </div>
                                    <div class="insight insight--success">
                                        <div class="insight__value">{metrics.returning_customers}</div>
                                        <div class="insight__label">"Returning Customers"</div>
                                    </div>
                                </div>
                                <div class="key-value-row">
                                    <span>"Customer Retention Rate"</span>
                                    <strong>{format!("{}%", metrics.retention_rate)}</strong>
                                </div>
                                <div class="bar-row__track">
                                    <div class="bar-row__bar" style=bar_style(metrics.retention_rate / 100.0)></div>
                                </div>
                                <div class="key-value-row key-value-row--divided">
                                    <span>{icon_sized("star", 14)}"Average Rating"</span>
                                    <strong>{format!("{}/5.0", metrics.average_rating)}</strong>
                                </div>
                            }
                        }}
                    </div>
                </div>

                <div class="card">
                    <h2 class="card__title">"Quick Actions"</h2>
                    <div class="quick-actions quick-actions--row">
                        <button class="quick-actions__item" on:click=on_export>
                            {icon("bar-chart")}" Export Analytics Report"
                        </button>
                        <a class="quick-actions__item" href="#revenue-trend">
                            {icon("pie-chart")}" View Detailed Charts"
                        </a>
                        <button
                            class="quick-actions__item"
                            on:click=move |_| notices.info("Scheduled reports are not set up for this account")
                        >
                            {icon("clock")}" Schedule Report"
                        </button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::export::build_csv;

    #[test]
    fn monthly_report_csv() {
        let snapshot = AnalyticsSnapshot::default();
        let csv = build_csv(&snapshot.monthly_revenue[..2]);
        assert_eq!(csv, "Month,Revenue,Bookings\nJan,45000,35\nFeb,52000,42");
    }

    #[test]
    fn bar_style_is_a_percentage_width() {
        assert_eq!(bar_style(1.0), "width: 100.0%");
        assert_eq!(bar_style(0.627), "width: 62.7%");
        assert_eq!(rank_class(0), "rank rank--gold");
        assert_eq!(rank_class(4), "rank");
    }
}
