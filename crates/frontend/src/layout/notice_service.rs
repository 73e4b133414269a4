use crate::shared::config::NOTICE_TIMEOUT_MS;
use crate::shared::icons::icon;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NoticeKind::Success => "check-circle",
            NoticeKind::Error => "alert-circle",
            NoticeKind::Info => "bell",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Single-slot toast. A newer notice replaces the current one; each notice
/// hides itself after `NOTICE_TIMEOUT_MS` unless it was replaced first.
#[derive(Clone, Copy)]
pub struct NoticeService {
    current: RwSignal<Option<Notice>>,
    generation: RwSignal<u32>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            generation: RwSignal::new(0),
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(NoticeKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(NoticeKind::Info, message.into());
    }

    fn show(&self, kind: NoticeKind, message: String) {
        log::info!("notice [{kind:?}]: {message}");
        self.current.set(Some(Notice { kind, message }));
        self.generation.update(|g| *g = g.wrapping_add(1));
        let issued = self.generation.get_untracked();

        let this = *self;
        Timeout::new(NOTICE_TIMEOUT_MS, move || {
            if this.generation.get_untracked() == issued {
                this.hide();
            }
        })
        .forget();
    }

    pub fn hide(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Option<Notice> {
        self.current.get()
    }
}

pub fn use_notice() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

/// Renders the current notice in the top-right corner
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = use_notice();

    view! {
        {move || {
            notices.current().map(|notice| {
                view! {
                    <div class=notice.kind.css_class() role="status">
                        <span class="notice__icon">{icon(notice.kind.icon_name())}</span>
                        <span class="notice__message">{notice.message}</span>
                        <button
                            class="notice__close"
                            aria-label="Dismiss"
                            on:click=move |_| notices.hide()
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            })
        }}
    }
}
