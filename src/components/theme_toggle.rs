//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

/// Toggle between light and dark themes, persisting the choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    // Apply the stored preference once the page is interactive.
    Effect::new(move || {
        let preferred = theme::read_preference();
        theme::apply(preferred);
        ui.update(|u| u.dark_mode = preferred);
    });

    let on_click = move |_| {
        ui.update(|u| u.dark_mode = theme::toggle(u.dark_mode));
    };

    let label = move || if ui.get().dark_mode { "Light mode" } else { "Dark mode" };

    view! {
        <button class="theme-toggle" on:click=on_click>
            {label}
        </button>
    }
}
