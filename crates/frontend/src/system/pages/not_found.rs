use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    log::warn!("404: no route for {}", path);

    view! {
        <PageFrame page_id="sys_not_found--system" category=PAGE_CAT_SYSTEM>
            <div class="not-found">
                <h1 class="not-found__code">"404"</h1>
                <p class="not-found__message">"Oops! Page not found"</p>
                <p class="not-found__path">{path}</p>
                <A href="/dashboard">"Return to Dashboard"</A>
            </div>
        </PageFrame>
    }
}
