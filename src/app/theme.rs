use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, JsonSerdeWasmCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = signal(Theme::default());

    // keep the document root's class in sync; effects only run on the client
    Effect::new(move |_| {
        let Some(root) = document().document_element() else {
            return;
        };
        let list = root.class_list();
        let _ = match theme.get() {
            Theme::Dark => list.add_1("dark"),
            Theme::Light => list.remove_1("dark"),
        };
    });

    view! {
        <button
            type="button"
            aria-label="Toggle color theme"
            class="p-2 rounded-md border border-muted/30 hover:bg-brightBlack/30 transition-colors duration-200"
            on:click=move |_| set_theme.set(theme.get_untracked().flipped())
        >
            {move || match theme.get() {
                Theme::Dark => "🌙",
                Theme::Light => "☀️",
            }}
        </button>
    }
}
