use leptos::prelude::*;

/// Layout state shared by the sidebar and the mobile toggle
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Mobile overlay sidebar; the desktop sidebar is always visible
    pub sidebar_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(false),
        }
    }

    pub fn open_sidebar(&self) {
        self.sidebar_open.set(true);
    }

    pub fn close_sidebar(&self) {
        self.sidebar_open.set(false);
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
