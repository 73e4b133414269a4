use contracts::domain::a006_organization::RegistrationForm;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, Url};

use crate::layout::use_notice;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::do_register;

/// Selected logo file: its name for the stored record and an object URL for the preview.
fn selected_logo(ev: &leptos::ev::Event) -> Option<(String, Option<String>)> {
    let input = ev.target()?.dyn_into::<HtmlInputElement>().ok()?;
    let file = input.files()?.get(0)?;
    let preview = Url::create_object_url_with_blob(&file).ok();
    Some((file.name(), preview))
}

/// Stores `next` as the preview and hands back the URL it displaced, if any.
fn swap_preview(current: &mut Option<String>, next: Option<String>) -> Option<String> {
    let stale = std::mem::replace(current, next);
    stale.filter(|old| current.as_deref() != Some(old.as_str()))
}

fn revoke_preview(url: Option<String>) {
    if let Some(url) = url {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke logo preview URL: {:?}", e);
        }
    }
}

#[component]
fn TextField(
    label: &'static str,
    id: &'static str,
    value: RwSignal<String>,
    #[prop(optional, default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            <input
                type=input_type
                id=id
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let organization = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let vehicles = RwSignal::new(String::new());
    let services = RwSignal::new(String::new());
    let drivers_count = RwSignal::new(RegistrationForm::default().drivers_count);
    let requirements = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let logo_name = RwSignal::new(Option::<String>::None);
    let logo_preview = RwSignal::new(Option::<String>::None);
    let error_message = RwSignal::new(Option::<String>::None);

    let notices = use_notice();
    let navigate = use_navigate();

    let reset = move || {
        let defaults = RegistrationForm::default();
        organization.set(defaults.organization);
        email.set(defaults.email);
        phone.set(defaults.phone);
        address.set(defaults.address);
        vehicles.set(defaults.vehicles);
        services.set(defaults.services);
        drivers_count.set(defaults.drivers_count);
        requirements.set(defaults.requirements);
        password.set(defaults.password);
        logo_name.set(None);
        revoke_preview(logo_preview.try_update(|slot| swap_preview(slot, None)).flatten());
        error_message.set(None);
    };

    let on_logo_change = move |ev: leptos::ev::Event| {
        let (name, preview) = match selected_logo(&ev) {
            Some((name, preview)) => (Some(name), preview),
            None => (None, None),
        };
        logo_name.set(name);
        revoke_preview(logo_preview.try_update(|slot| swap_preview(slot, preview)).flatten());
    };

    on_cleanup(move || {
        revoke_preview(logo_preview.try_update_untracked(|slot| slot.take()).flatten());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let form = RegistrationForm {
            organization: organization.get_untracked(),
            email: email.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            vehicles: vehicles.get_untracked(),
            services: services.get_untracked(),
            drivers_count: drivers_count.get_untracked(),
            requirements: requirements.get_untracked(),
            logo_name: logo_name.get_untracked(),
            password: password.get_untracked(),
        };
        match do_register(form) {
            Ok(_) => {
                notices.success("Organization registered successfully");
                navigate("/login", Default::default());
            }
            Err(e) => {
                log::warn!("Registration rejected: {}", e);
                error_message.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="sys_register--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box login-box--wide">
                    <div class="page__header">
                        <h1>"Organization Registration"</h1>
                    </div>

                    <div class="page__content">
                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message" role="alert">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form class="form-grid" on:submit=on_submit>
                            <TextField label="Organization Name" id="organization" value=organization required=true />

                            <div class="form-group">
                                <label for="logo">"Logo"</label>
                                <input type="file" id="logo" accept="image/*" on:change=on_logo_change />
                                {move || logo_preview.get().map(|src| view! {
                                    <img class="logo-preview" src=src alt="logo preview" />
                                })}
                            </div>

                            <TextField label="Email" id="email" value=email input_type="email" required=true />
                            <TextField label="Phone" id="phone" value=phone required=true />

                            <div class="form-group form-group--full">
                                <label for="address">"Address"</label>
                                <textarea
                                    id="address"
                                    rows="3"
                                    prop:value=move || address.get()
                                    on:input=move |ev| address.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <TextField label="Vehicles (describe)" id="vehicles" value=vehicles placeholder="e.g. 10 trucks, 5 vans" />
                            <TextField label="Services Offered" id="services" value=services placeholder="comma separated e.g. packing, loading" />
                            <TextField label="Number of Drivers" id="drivers" value=drivers_count input_type="number" />

                            <div class="form-group form-group--full">
                                <label for="requirements">"Other Requirements / Notes"</label>
                                <textarea
                                    id="requirements"
                                    rows="3"
                                    prop:value=move || requirements.get()
                                    on:input=move |ev| requirements.set(event_target_value(&ev))
                                ></textarea>
                            </div>

                            <div class="form-group--full">
                                <TextField label="Password" id="password" value=password input_type="password" required=true />
                            </div>

                            <div class="form-footer form-group--full">
                                <span>
                                    "Already have an account? "
                                    <A href="/login">"Login"</A>
                                </span>
                                <div class="form-footer__actions">
                                    <button type="submit" class="btn-primary">"Register"</button>
                                    <button type="button" class="btn-ghost" on:click=move |_| reset()>"Reset"</button>
                                </div>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_preview_hands_back_previous_url() {
        let mut slot = None;
        assert_eq!(swap_preview(&mut slot, Some("blob:a".into())), None);
        assert_eq!(swap_preview(&mut slot, Some("blob:b".into())), Some("blob:a".to_string()));
        assert_eq!(slot.as_deref(), Some("blob:b"));
        assert_eq!(swap_preview(&mut slot, None), Some("blob:b".to_string()));
        assert_eq!(slot, None);
    }

    #[test]
    fn test_swap_preview_keeps_same_url() {
        let mut slot = Some("blob:a".to_string());
        assert_eq!(swap_preview(&mut slot, Some("blob:a".into())), None);
    }
}
