use contracts::system::settings::{
    AppSettings, SelectOptions, CURRENCY_OPTIONS, DATE_FORMAT_OPTIONS, LANGUAGE_OPTIONS,
    PAYMENT_METHOD_OPTIONS, THEME_OPTIONS, TIMEZONE_OPTIONS,
};
use leptos::prelude::*;
use thaw::*;

use crate::layout::use_notice;
use crate::shared::components::PageHeader;
use crate::shared::config::STORAGE_SETTINGS_KEY;
use crate::shared::icons::{icon, icon_sized};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::shared::storage;

type TextGetter = fn(&AppSettings) -> &String;
type TextSetter = fn(&mut AppSettings, String);
type FlagGetter = fn(&AppSettings) -> bool;
type FlagSetter = fn(&mut AppSettings, bool);

/// Saved settings, or the defaults when nothing (or garbage) is stored.
fn load_settings() -> AppSettings {
    match storage::get_json::<AppSettings>(STORAGE_SETTINGS_KEY) {
        Some(Ok(saved)) => saved,
        Some(Err(e)) => {
            log::warn!("{}", e);
            AppSettings::default()
        }
        None => AppSettings::default(),
    }
}

#[component]
fn TextSetting(
    settings: RwSignal<AppSettings>,
    label: &'static str,
    id: &'static str,
    get: TextGetter,
    set: TextSetter,
    #[prop(optional, default = "text")] input_type: &'static str,
    #[prop(into, optional)] reveal: Option<Signal<bool>>,
) -> impl IntoView {
    let input_type = move || match reveal {
        Some(shown) if shown.get() => "text",
        _ => input_type,
    };
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                id=id
                type=input_type
                prop:value=move || settings.with(|s| get(s).clone())
                on:input=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SelectSetting(
    settings: RwSignal<AppSettings>,
    label: &'static str,
    id: &'static str,
    options: SelectOptions,
    get: TextGetter,
    set: TextSetter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <select
                id=id
                prop:value=move || settings.with(|s| get(s).clone())
                on:change=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .map(|(value, text)| view! { <option value=*value>{*text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn SwitchSetting(
    settings: RwSignal<AppSettings>,
    label: &'static str,
    hint: &'static str,
    get: FlagGetter,
    set: FlagSetter,
) -> impl IntoView {
    view! {
        <div class="settings-switch">
            <div>
                <div class="settings-switch__label">{label}</div>
                <p class="settings-switch__hint">{hint}</p>
            </div>
            <input
                type="checkbox"
                role="switch"
                class="switch"
                aria-label=label
                prop:checked=move || settings.with(|s| get(s))
                on:change=move |ev| settings.update(|s| set(s, event_target_checked(&ev)))
            />
        </div>
    }
}

#[component]
fn SettingsCard(
    id: &'static str,
    title: &'static str,
    icon_name: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section id=id class="card settings-card">
            <h2 class="card__title">{icon(icon_name)}<span>{title}</span></h2>
            <div class="card__body">{children()}</div>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = RwSignal::new(load_settings());
    let show_password = RwSignal::new(false);
    let notices = use_notice();

    let on_save = move |_| {
        let current = settings.get_untracked();
        if let Err(e) = current.validate() {
            notices.error(format!("Settings not saved: {}", e));
            return;
        }
        if current.wants_password_change() {
            log::info!("Password change requested for {}", current.email);
        }
        match storage::set_json(STORAGE_SETTINGS_KEY, &current.for_storage()) {
            Ok(()) => {
                settings.set(current.for_storage());
                notices.success("Settings saved successfully!");
            }
            Err(e) => {
                log::warn!("{}", e);
                notices.error(e);
            }
        }
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader
                title="Settings"
                subtitle="Manage your account preferences and application settings."
            >
                {()}
            </PageHeader>

            <div class="page__content settings-layout">
                <nav class="card settings-nav">
                    <a href="#account">{icon_sized("user", 16)}<span>"Account"</span></a>
                    <a href="#notifications">{icon_sized("bell", 16)}<span>"Notifications"</span></a>
                    <a href="#payments">{icon_sized("credit-card", 16)}<span>"Payments"</span></a>
                    <a href="#preferences">{icon_sized("settings", 16)}<span>"Preferences"</span></a>
                </nav>

                <div class="settings-sections">
                    <SettingsCard id="account" title="Account Settings" icon_name="user">
                        <h3>"Personal Information"</h3>
                        <div class="form-grid">
                            <TextSetting settings=settings label="First Name" id="firstName"
                                get=|s| &s.first_name set=|s, v| s.first_name = v />
                            <TextSetting settings=settings label="Last Name" id="lastName"
                                get=|s| &s.last_name set=|s, v| s.last_name = v />
                            <TextSetting settings=settings label="Email Address" id="email" input_type="email"
                                get=|s| &s.email set=|s, v| s.email = v />
                            <TextSetting settings=settings label="Phone Number" id="phone"
                                get=|s| &s.phone set=|s, v| s.phone = v />
                        </div>

                        <hr class="separator" />

                        <div class="settings-password__header">
                            <h3>"Change Password"</h3>
                            <button
                                type="button"
                                class="btn-ghost"
                                aria-label="Toggle password visibility"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { icon_sized("eye-off", 16) } else { icon_sized("eye", 16) }}
                            </button>
                        </div>
                        <div class="form-grid form-grid--three">
                            <TextSetting settings=settings label="Current Password" id="currentPassword"
                                input_type="password" reveal=show_password
                                get=|s| &s.current_password set=|s, v| s.current_password = v />
                            <TextSetting settings=settings label="New Password" id="newPassword" input_type="password"
                                get=|s| &s.new_password set=|s, v| s.new_password = v />
                            <TextSetting settings=settings label="Confirm Password" id="confirmPassword" input_type="password"
                                get=|s| &s.confirm_password set=|s, v| s.confirm_password = v />
                        </div>
                    </SettingsCard>

                    <SettingsCard id="notifications" title="Notification Settings" icon_name="bell">
                        <SwitchSetting settings=settings label="Email Notifications" hint="Receive notifications via email"
                            get=|s| s.email_notifications set=|s, v| s.email_notifications = v />
                        <SwitchSetting settings=settings label="SMS Notifications" hint="Receive notifications via SMS"
                            get=|s| s.sms_notifications set=|s, v| s.sms_notifications = v />
                        <SwitchSetting settings=settings label="Push Notifications" hint="Receive browser push notifications"
                            get=|s| s.push_notifications set=|s, v| s.push_notifications = v />

                        <hr class="separator" />
                        <h4>"Notification Types"</h4>

                        <SwitchSetting settings=settings label="Booking Updates" hint="Get notified about booking status changes"
                            get=|s| s.booking_updates set=|s, v| s.booking_updates = v />
                        <SwitchSetting settings=settings label="Payment Notifications" hint="Receive payment confirmations and receipts"
                            get=|s| s.payment_notifications set=|s, v| s.payment_notifications = v />
                        <SwitchSetting settings=settings label="Marketing Emails" hint="Receive promotional content and updates"
                            get=|s| s.marketing_emails set=|s, v| s.marketing_emails = v />
                    </SettingsCard>

                    <SettingsCard id="payments" title="Payment Settings" icon_name="credit-card">
                        <div class="form-grid">
                            <SelectSetting settings=settings label="Default Currency" id="currency" options=CURRENCY_OPTIONS
                                get=|s| &s.currency set=|s, v| s.currency = v />
                            <SelectSetting settings=settings label="Default Payment Method" id="paymentMethod"
                                options=PAYMENT_METHOD_OPTIONS
                                get=|s| &s.payment_method set=|s, v| s.payment_method = v />
                            <TextSetting settings=settings label="Tax Rate (%)" id="taxRate"
                                get=|s| &s.tax_rate set=|s, v| s.tax_rate = v />
                            <TextSetting settings=settings label="Invoice Prefix" id="invoicePrefix"
                                get=|s| &s.invoice_prefix set=|s, v| s.invoice_prefix = v />
                        </div>
                    </SettingsCard>

                    <SettingsCard id="preferences" title="Preferences" icon_name="settings">
                        <div class="form-grid">
                            <SelectSetting settings=settings label="Language" id="language" options=LANGUAGE_OPTIONS
                                get=|s| &s.language set=|s, v| s.language = v />
                            <SelectSetting settings=settings label="Timezone" id="timezone" options=TIMEZONE_OPTIONS
                                get=|s| &s.timezone set=|s, v| s.timezone = v />
                            <SelectSetting settings=settings label="Date Format" id="dateFormat" options=DATE_FORMAT_OPTIONS
                                get=|s| &s.date_format set=|s, v| s.date_format = v />
                            <SelectSetting settings=settings label="Theme" id="theme" options=THEME_OPTIONS
                                get=|s| &s.theme set=|s, v| s.theme = v />
                        </div>
                    </SettingsCard>

                    <div class="card settings-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=on_save>
                            {icon_sized("save", 16)}
                            " Save All Changes"
                        </Button>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
