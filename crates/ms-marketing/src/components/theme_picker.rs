//! Theme palette switcher

use leptos::*;
use ms_core::{Theme, ThemeStore};

use crate::app::use_theme;
use crate::storage::BrowserStorage;

#[component]
pub fn ThemePicker() -> impl IntoView {
    let theme = use_theme();

    // Pick up the persisted selection once the page is interactive.
    create_effect(move |_| {
        let store = ThemeStore::new(BrowserStorage);
        theme.set(store.current());
    });

    let pick = move |choice: Theme| {
        let mut store = ThemeStore::new(BrowserStorage);
        store.set(choice);
        theme.set(choice);
    };

    view! {
        <div class="flex items-center gap-1 rounded-md border border-black/5 bg-white/70 p-1 shadow-sm backdrop-blur">
            {Theme::ALL
                .into_iter()
                .map(|choice| {
                    let selected = move || theme.get() == choice;
                    view! {
                        <button
                            title=choice.tokens().name
                            class=move || {
                                format!(
                                    "inline-flex items-center gap-1 rounded px-2 py-1 text-sm transition {}",
                                    if selected() { "bg-black/5" } else { "" },
                                )
                            }
                            on:click=move |_| pick(choice)
                        >
                            <span>"🎨"</span>
                            <span class="hidden sm:inline">{choice.tokens().name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
