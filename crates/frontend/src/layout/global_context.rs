use leptos::prelude::*;

/// Состояние каркаса, общее для всех страниц
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }
}

/// Контекст каркаса; предоставляется в `App`
pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().unwrap_or_else(|| {
        leptos::logging::warn!("AppGlobalContext not provided, using defaults");
        AppGlobalContext::new()
    })
}
