use crate::dashboards::{AnalyticsDashboard, OverviewDashboard};
use crate::domain::a001_booking::ui::list::BookingList;
use crate::domain::a002_user::ui::list::UserList;
use crate::domain::a003_payment::ui::list::PaymentList;
use crate::domain::a004_review::ui::list::ReviewList;
use crate::domain::a005_offer::ui::list::OfferList;
use crate::domain::a007_company_profile::ui::details::CompanyProfileDetails;
use crate::layout::Shell;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::register::RegisterPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

/// Login and register stand alone; every other page renders inside the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/dashboard" /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <ParentRoute path=path!("") view=Shell>
                    <Route path=path!("dashboard") view=OverviewDashboard />
                    <Route path=path!("bookings") view=BookingList />
                    <Route path=path!("users") view=UserList />
                    <Route path=path!("payment") view=PaymentList />
                    <Route path=path!("profile") view=CompanyProfileDetails />
                    <Route path=path!("reviews") view=ReviewList />
                    <Route path=path!("settings") view=SettingsPage />
                    <Route path=path!("analytics") view=AnalyticsDashboard />
                    <Route path=path!("offers") view=OfferList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
