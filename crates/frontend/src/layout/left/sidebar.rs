use crate::layout::global_context::use_global_context;
use crate::shared::config::{BRAND_NAME, DEFAULT_ORG_EMAIL, DEFAULT_ORG_NAME};
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use thaw::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    label: &'static str,
    href: &'static str,
    icon: &'static str,
}

const NAVIGATION: &[NavItem] = &[
    NavItem { label: "Dashboard", href: "/dashboard", icon: "dashboard" },
    NavItem { label: "Bookings", href: "/bookings", icon: "calendar" },
    NavItem { label: "Users", href: "/users", icon: "users" },
    NavItem { label: "Payment", href: "/payment", icon: "credit-card" },
    NavItem { label: "Analytics", href: "/analytics", icon: "bar-chart" },
    NavItem { label: "Offers", href: "/offers", icon: "tag" },
    NavItem { label: "Profile", href: "/profile", icon: "building" },
    NavItem { label: "Reviews", href: "/reviews", icon: "star" },
];

const SETTINGS_ITEM: NavItem = NavItem {
    label: "Settings",
    href: "/settings",
    icon: "settings",
};

/// Exact pathname match, so `/bookings/x` does not light up `/bookings`.
fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let active = move || is_active(&location.pathname.get(), item.href);

    view! {
        <A href=item.href attr:class="app-sidebar__link" on:click=move |_| ctx.close_sidebar()>
            <div class="app-sidebar__item" class:app-sidebar__item--active=active>
                <div class="app-sidebar__item-content">
                    {icon(item.icon)}
                    <span>{item.label}</span>
                </div>
            </div>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let org_name = move || {
        auth_state
            .get()
            .current_org
            .map(|o| o.organization)
            .unwrap_or_else(|| DEFAULT_ORG_NAME.to_string())
    };
    let org_email = move || {
        auth_state
            .get()
            .current_org
            .map(|o| o.email)
            .unwrap_or_else(|| DEFAULT_ORG_EMAIL.to_string())
    };

    let on_logout = move |_| {
        do_logout(set_auth_state);
        ctx.close_sidebar();
        navigate("/login", Default::default());
    };

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <div class="app-sidebar__logo">{icon("truck")}</div>
                <span class="app-sidebar__brand-name">{BRAND_NAME}</span>
                <button
                    class="app-sidebar__close"
                    aria-label="Close menu"
                    on:click=move |_| ctx.close_sidebar()
                >
                    {icon("x")}
                </button>
            </div>

            <nav class="app-sidebar__nav">
                {NAVIGATION
                    .iter()
                    .map(|item| view! { <NavLink item=*item /> })
                    .collect_view()}
                <div class="app-sidebar__divider"></div>
                <NavLink item=SETTINGS_ITEM />
            </nav>

            <div class="app-sidebar__footer">
                <div class="app-sidebar__org">
                    <p class="app-sidebar__org-name">{org_name}</p>
                    <p class="app-sidebar__org-email">{org_email}</p>
                </div>
                <Button appearance=ButtonAppearance::Subtle on_click=on_logout>
                    {icon("logout")}
                    " Logout"
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_link_requires_exact_path() {
        assert!(is_active("/bookings", "/bookings"));
        assert!(!is_active("/bookings/BK001", "/bookings"));
        assert!(!is_active("/", "/dashboard"));
    }

    #[test]
    fn navigation_covers_every_page_once() {
        let mut hrefs: Vec<_> = NAVIGATION.iter().map(|i| i.href).collect();
        hrefs.push(SETTINGS_ITEM.href);
        let before = hrefs.len();
        hrefs.sort_unstable();
        hrefs.dedup();
        assert_eq!(before, hrefs.len());
        assert_eq!(before, 9);
    }
}
