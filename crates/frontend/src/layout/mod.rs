pub mod global_context;
pub mod left;
pub mod notice_service;

pub use notice_service::{use_notice, NoticeHost, NoticeService};

use global_context::use_global_context;
use left::Sidebar;
use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::shared::icons::icon;

/// Dashboard shell shared by every page except login / register.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |   routed page (Outlet)       |
/// |  (fixed)  |                              |
/// +-----------+------------------------------+
/// ```
///
/// Below the `md` breakpoint the sidebar is hidden and a menu button opens
/// it as an overlay.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <div class="app-layout">
            <button
                class="app-mobile-toggle"
                aria-label="Open menu"
                on:click=move |_| ctx.open_sidebar()
            >
                {icon("menu")}
            </button>

            <aside class="app-sidebar app-sidebar--desktop">
                <Sidebar />
            </aside>

            <Show when=move || ctx.sidebar_open.get()>
                <div class="app-sidebar-overlay" on:click=move |_| ctx.close_sidebar()>
                    <aside
                        class="app-sidebar app-sidebar--mobile"
                        on:click=|e| e.stop_propagation()
                    >
                        <Sidebar />
                    </aside>
                </div>
            </Show>

            <main class="app-main">
                <Outlet />
            </main>
        </div>
    }
}
