use crate::layout::global_context::AppGlobalContext;
use crate::layout::{NoticeHost, NoticeService};
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Sidebar state for the mobile overlay
    provide_context(AppGlobalContext::new());

    // Toast notices in place of browser alerts
    provide_context(NoticeService::new());

    view! {
        <AuthProvider>
            <NoticeHost />
            <AppRoutes />
        </AuthProvider>
    }
}
