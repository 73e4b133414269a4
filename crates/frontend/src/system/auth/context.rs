use contracts::domain::a006_organization::{LoginForm, Organization, RegistrationForm};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub current_org: Option<Organization>,
}

/// Restores the current organization from `localStorage` and provides the
/// auth signals. Routes are not guarded; the state only feeds the sidebar card.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState {
        current_org: storage::load_current_org(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Checks the credentials against the stored organizations and remembers
/// the match as the current organization.
pub fn do_login(form: &LoginForm, set_auth_state: WriteSignal<AuthState>) -> Result<Organization, String> {
    form.validate().map_err(|e| e.to_string())?;

    let registry = storage::load_registry();
    let org = registry
        .authenticate(form.email.trim(), &form.password)
        .cloned()
        .ok_or_else(|| "Invalid credentials".to_string())?;

    storage::save_current_org(&org)?;
    set_auth_state.set(AuthState {
        current_org: Some(org.clone()),
    });
    log::info!("Signed in as {}", org.email);
    Ok(org)
}

/// Validates the form and appends the organization to the stored list.
pub fn do_register(form: RegistrationForm) -> Result<Organization, String> {
    let org = form.into_organization().map_err(|e| e.to_string())?;

    let mut registry = storage::load_registry();
    registry.register(org.clone()).map_err(|e| e.to_string())?;
    storage::save_registry(&registry)?;
    log::info!("Registered organization {}", org.organization);
    Ok(org)
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_current_org();
    set_auth_state.set(AuthState::default());
    log::info!("Signed out");
}
