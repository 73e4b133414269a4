use contracts::domain::a006_organization::LoginForm;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::config::BRAND_NAME;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{do_login, use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (_, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        match do_login(&form, set_auth_state) {
            Ok(_) => navigate("/dashboard", Default::default()),
            Err(e) => {
                log::warn!("Login rejected for {}: {}", form.email, e);
                set_error_message.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <div class="page__header">
                        <h1>{BRAND_NAME}</h1>
                        <h2>"Organization Login"</h2>
                    </div>

                    <div class="page__content">
                        <Show when=move || error_message.get().is_some()>
                            <div class="error-message" role="alert">
                                {move || error_message.get().unwrap_or_default()}
                            </div>
                        </Show>

                        <form on:submit=on_submit>
                            <div class="form-group">
                                <label for="email">"Email"</label>
                                <input
                                    type="email"
                                    id="email"
                                    value=move || email.get()
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                />
                            </div>

                            <div class="form-group">
                                <label for="password">"Password"</label>
                                <input
                                    type="password"
                                    id="password"
                                    value=move || password.get()
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    required
                                />
                            </div>

                            <div class="form-footer">
                                <span>
                                    "Don't have an account? "
                                    <A href="/register">"Register"</A>
                                </span>
                                <button type="submit" class="btn-primary">"Login"</button>
                            </div>
                        </form>
                    </div>
                </div>
            </div>
        </PageFrame>
    }
}
