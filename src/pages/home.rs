//! Landing page: header, profile links, the resume, and the chat launcher.

use leptos::prelude::*;

use crate::components::chat_launcher::ChatLauncher;
use crate::components::resume::Resume;
use crate::components::theme_toggle::ThemeToggle;

/// Single page of the site.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__header">
                <div class="home-page__titles">
                    <h1>"My Interactive Resume"</h1>
                    <p>"Welcome to my professional portfolio"</p>
                </div>
                <ThemeToggle/>
            </header>

            <nav class="home-page__links">
                <a href="https://linkedin.com/in/yourprofile" target="_blank" rel="noreferrer">
                    "LinkedIn"
                </a>
                <a href="https://github.com/yourusername" target="_blank" rel="noreferrer">
                    "GitHub"
                </a>
            </nav>

            <div class="home-page__resume-card">
                <Resume/>
            </div>

            <ChatLauncher/>
        </main>
    }
}
