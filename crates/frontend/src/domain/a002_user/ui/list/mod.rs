pub mod state;

use self::state::create_state;
use crate::layout::use_notice;
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{EmptyState, FilterPanel, PageHeader, StatCard, ToneBadge};
use crate::shared::icons::{icon, icon_sized};
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_user::{NewUserDraft, User, UserRole, UserStatus};
use contracts::enums::Tone;
use contracts::shared::list_query::{Coded, SelectFilter};
use leptos::prelude::*;
use thaw::*;

const ALL: &str = "all";

#[component]
pub fn UserList() -> impl IntoView {
    let state = create_state();
    let notices = use_notice();

    let search = RwSignal::new(String::new());
    let role = RwSignal::new(ALL.to_string());
    let status = RwSignal::new(ALL.to_string());

    Effect::new(move |_| {
        let term = search.get();
        let role_value = role.get();
        let status_value = status.get();
        state.update(|s| {
            s.filter.search = term;
            s.filter.role = SelectFilter::from_form_value(&role_value);
            s.filter.status = SelectFilter::from_form_value(&status_value);
            s.refresh_view();
        });
    });

    let active_filters = Signal::derive(move || {
        usize::from(!search.get().is_empty())
            + usize::from(role.get() != ALL)
            + usize::from(status.get() != ALL)
    });
    let clear_filters = Callback::new(move |_| {
        search.set(String::new());
        role.set(ALL.to_string());
        status.set(ALL.to_string());
    });

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let sort_field = Signal::derive(move || state.with(|s| s.sort_field.clone()));
    let sort_ascending = Signal::derive(move || state.with(|s| s.sort_ascending));

    let on_toggle_status = Callback::new(move |user: User| {
        let changed = state.try_update(|s| s.toggle_status(&user.id)).flatten();
        if let Some(new_status) = changed {
            notices.info(format!("{} is now {}", user.name, new_status.label().to_lowercase()));
        }
    });

    let stats = Signal::derive(move || state.with(|s| s.stats()));
    let count = move || state.with(|s| s.items.len());
    let dialog_open = RwSignal::new(false);

    view! {
        <PageFrame page_id="a002_user--list" category=PAGE_CAT_LIST>
            <PageHeader
                title="User Management"
                subtitle="Manage your team members and their access permissions."
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| dialog_open.set(true)>
                    {icon("plus")}
                    " Add New User"
                </Button>
            </PageHeader>

            <AddUserDialog open=dialog_open state=state />

            <div class="page__content">
                <div class="stats-grid">
                    <StatCard label="Total Users" icon_name="users"
                        value=Signal::derive(move || stats.get().total.to_string()) />
                    <StatCard label="Active Users" icon_name="check-circle" tone=Tone::Success
                        value=Signal::derive(move || stats.get().active.to_string()) />
                    <StatCard label="Staff Members" icon_name="user" tone=Tone::Info
                        value=Signal::derive(move || stats.get().staff.to_string()) />
                    <StatCard label="Drivers" icon_name="truck" tone=Tone::Success
                        value=Signal::derive(move || stats.get().drivers.to_string()) />
                </div>

                <FilterPanel active_filters_count=active_filters on_clear=clear_filters>
                    <div class="filter-panel__row">
                        <SearchInput value=search placeholder="Search by name, email, or phone..." />
                        <Select value=role>
                            <option value=ALL>"All Roles"</option>
                            {UserRole::all()
                                .iter()
                                .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                                .collect_view()}
                        </Select>
                        <Select value=status>
                            <option value=ALL>"All Status"</option>
                            {UserStatus::all()
                                .iter()
                                .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                .collect_view()}
                        </Select>
                    </div>
                </FilterPanel>

                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">{move || format!("Team Members ({})", count())}</h2>
                    </div>

                    <Show
                        when={move || count() > 0}
                        fallback=|| view! {
                            <EmptyState
                                message="No users found"
                                hint="Try adjusting your search or filter criteria."
                            />
                        }
                    >
                        <div class="table-wrapper">
                            <Table attr:style="width: 100%; min-width: 880px;">
                                <TableHeader>
                                    <TableRow>
                                        <SortableHeaderCell label="Name" sort_field="name" min_width=200.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Role" sort_field="role"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <TableHeaderCell min_width=220.0>"Contact"</TableHeaderCell>
                                        <SortableHeaderCell label="Status" sort_field="status"
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <SortableHeaderCell label="Last Login" sort_field="last_login" min_width=170.0
                                            current_sort_field=sort_field sort_ascending=sort_ascending on_sort=on_sort />
                                        <TableHeaderCell min_width=120.0>"Actions"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=move || state.with(|s| s.items.clone())
                                        key=|u: &User| (u.id.to_string(), u.status)
                                        children=move |u: User| view! {
                                            <UserRow user=u search=search on_toggle_status=on_toggle_status />
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
fn UserRow(user: User, search: RwSignal<String>, on_toggle_status: Callback<User>) -> impl IntoView {
    let name = user.name.clone();
    let email = user.email.clone();
    let phone = user.phone.clone();
    let id_caption = format!("ID: {}", user.id);
    let action_label = match user.status {
        UserStatus::Active => "Deactivate",
        UserStatus::Inactive => "Activate",
    };
    let joined = format!("Joined: {}", user.date_joined.format("%d/%m/%Y"));
    let user_for_action = user.clone();

    view! {
        <TableRow>
            <TableCell>
                <div class="table__stack">
                    <span class="table__strong">{move || highlight_matches(&name, &search.get())}</span>
                    <span class="table__muted">{id_caption}</span>
                </div>
            </TableCell>
            <TableCell>
                <ToneBadge tone=user.role.tone() label=user.role.label() />
            </TableCell>
            <TableCell>
                <div class="table__stack">
                    <span>{icon_sized("mail", 12)}{move || highlight_matches(&email, &search.get())}</span>
                    <span class="table__muted">{icon_sized("phone", 12)}{move || highlight_matches(&phone, &search.get())}</span>
                </div>
            </TableCell>
            <TableCell>
                <ToneBadge tone=user.status.tone() label=user.status.label() glyph=user.status.icon() />
            </TableCell>
            <TableCell>
                <div class="table__stack">
                    <span>{user.last_login_display()}</span>
                    <span class="table__muted">{joined}</span>
                </div>
            </TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| on_toggle_status.run(user_for_action.clone())
                >
                    {action_label}
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn AddUserDialog(open: RwSignal<bool>, state: RwSignal<state::UserListState>) -> impl IntoView {
    let notices = use_notice();

    let name = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);

    let draft = move || NewUserDraft {
        name: name.get(),
        role: role.get(),
        email: email.get(),
        phone: phone.get(),
        password: password.get(),
    };
    let is_complete = Signal::derive(move || draft().is_complete());

    let reset = move || {
        for field in [name, role, email, phone, password] {
            field.set(String::new());
        }
        show_password.set(false);
        error.set(None);
    };

    let on_save = move |_| {
        let now = chrono::Local::now().naive_local();
        let new_user = draft();
        match state.try_update(|s| s.add_user(new_user, now)) {
            Some(Ok(id)) => {
                log::info!("Added user {}", id);
                notices.success(format!("User {} added", id));
                reset();
                open.set(false);
            }
            Some(Err(e)) => error.set(Some(e.to_string())),
            None => log::warn!("User list state is gone"),
        }
    };

    let password_type = Signal::derive(move || {
        if show_password.get() {
            InputType::Text
        } else {
            InputType::Password
        }
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Add New User"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            {move || error.get().map(|e| view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            })}
                            <div class="form-group">
                                <Label>"Full Name"</Label>
                                <Input value=name placeholder="Enter full name" />
                            </div>
                            <div class="form-group">
                                <Label>"Role"</Label>
                                <Select value=role>
                                    <option value="" disabled=true>"Select role"</option>
                                    {UserRole::all()
                                        .iter()
                                        .map(|r| view! { <option value=r.code()>{r.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </div>
                            <div class="form-group">
                                <Label>"Email"</Label>
                                <Input value=email placeholder="Enter email address" />
                            </div>
                            <div class="form-group">
                                <Label>"Phone Number"</Label>
                                <Input value=phone placeholder="Enter phone number" />
                            </div>
                            <div class="form-group">
                                <Label>"Password"</Label>
                                <div class="input-with-action">
                                    <Input value=password input_type=password_type placeholder="Enter password" />
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        on_click=move |_| show_password.update(|v| *v = !*v)
                                    >
                                        {move || if show_password.get() { icon_sized("eye-off", 16) } else { icon_sized("eye", 16) }}
                                    </Button>
                                </div>
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                reset();
                                open.set(false);
                            }
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || !is_complete.get())
                            on_click=on_save
                        >
                            "Add User"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
