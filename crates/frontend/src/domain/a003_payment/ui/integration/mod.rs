//! Razorpay connection panel. Keys stay in page memory only.
use crate::layout::use_notice;
use crate::shared::components::ToneBadge;
use crate::shared::icons::{icon, icon_sized};
use contracts::domain::a003_payment::GatewayIntegration;
use contracts::enums::Tone;
use leptos::prelude::*;
use thaw::*;

fn secret_input_type(visible: RwSignal<bool>) -> Signal<InputType> {
    Signal::derive(move || {
        if visible.get() {
            InputType::Text
        } else {
            InputType::Password
        }
    })
}

#[component]
pub fn GatewayPanel() -> impl IntoView {
    let notices = use_notice();
    let gateway = RwSignal::new(GatewayIntegration::default());

    let api_key = RwSignal::new(String::new());
    let secret_key = RwSignal::new(String::new());
    let webhook_url = RwSignal::new(gateway.with_untracked(|g| g.webhook_url.clone()));
    let show_api_key = RwSignal::new(false);
    let show_secret_key = RwSignal::new(false);

    let connected = Signal::derive(move || gateway.with(|g| g.connected));
    let read_only = Signal::derive(move || gateway.with(|g| g.is_read_only()));
    let can_connect = Signal::derive(move || {
        !api_key.get().trim().is_empty() && !secret_key.get().trim().is_empty()
    });

    let on_connect = move |_| {
        let mut next = GatewayIntegration {
            api_key: api_key.get_untracked(),
            secret_key: secret_key.get_untracked(),
            webhook_url: webhook_url.get_untracked(),
            connected: false,
        };
        match next.connect() {
            Ok(()) => {
                gateway.set(next);
                log::info!("Razorpay integration connected");
                notices.success("Razorpay integration saved successfully!");
            }
            Err(e) => notices.error(e.to_string()),
        }
    };

    let on_disconnect = move |_| {
        gateway.update(|g| g.disconnect());
        api_key.set(String::new());
        secret_key.set(String::new());
        log::info!("Razorpay integration disconnected");
        notices.success("Razorpay integration disconnected successfully!");
    };

    let on_update = move |_| {
        let url = webhook_url.get_untracked();
        gateway.update(|g| g.webhook_url = url);
        notices.info("Integration settings updated");
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{icon("credit-card")}" Payment Integration"</h2>
                {move || if connected.get() {
                    view! { <ToneBadge tone=Tone::Success label="Connected" glyph="check-circle" /> }.into_any()
                } else {
                    view! { <ToneBadge tone=Tone::Neutral label="Not Connected" glyph="alert-circle" /> }.into_any()
                }}
            </div>

            <div class="gateway">
                <div class="gateway__intro">
                    <span class="gateway__logo">"R"</span>
                    <div>
                        <h3 class="gateway__title">"Razorpay Integration"</h3>
                        <p class="gateway__text">"Connect your Razorpay account to accept online payments"</p>
                    </div>
                </div>

                <div class="form-grid">
                    <div class="form-group">
                        <Label>"API Key"</Label>
                        <div class="input-with-action">
                            <Input
                                value=api_key
                                input_type=secret_input_type(show_api_key)
                                placeholder="rzp_test_..."
                                disabled=read_only
                            />
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |_| show_api_key.update(|v| *v = !*v)
                            >
                                {move || icon_sized(if show_api_key.get() { "eye-off" } else { "eye" }, 16)}
                            </Button>
                        </div>
                    </div>
                    <div class="form-group">
                        <Label>"Secret Key"</Label>
                        <div class="input-with-action">
                            <Input
                                value=secret_key
                                input_type=secret_input_type(show_secret_key)
                                placeholder="Enter secret key"
                                disabled=read_only
                            />
                            <Button
                                appearance=ButtonAppearance::Transparent
                                on_click=move |_| show_secret_key.update(|v| *v = !*v)
                            >
                                {move || icon_sized(if show_secret_key.get() { "eye-off" } else { "eye" }, 16)}
                            </Button>
                        </div>
                    </div>
                    <div class="form-group form-group--wide">
                        <Label>"Webhook URL"</Label>
                        <Input value=webhook_url disabled=read_only />
                        <span class="form-group__hint">"Add this URL to your Razorpay dashboard webhook settings"</span>
                    </div>
                </div>

                <div class="gateway__actions">
                    <Show
                        when=move || connected.get()
                        fallback=move || view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled=Signal::derive(move || !can_connect.get())
                                on_click=on_connect
                            >
                                "Connect Razorpay"
                            </Button>
                        }
                    >
                        <Button appearance=ButtonAppearance::Secondary on_click=on_disconnect>
                            "Disconnect"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=on_update>
                            "Update Settings"
                        </Button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
