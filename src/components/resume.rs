//! Static resume content with clickable terms that ask the assistant.

use leptos::prelude::*;

use crate::bridge::AskBridge;

/// A skill or project term the visitor can click to ask the assistant
/// about it. Invokes the ask bridge; a no-op when no panel is mounted.
#[component]
pub fn AskTerm(#[prop(into)] term: String) -> impl IntoView {
    let bridge = expect_context::<AskBridge>();
    let label = term.clone();
    let tooltip = format!("Ask about {term}");

    let on_click = move |_| {
        let _ = bridge.invoke(&format!("Tell me about Jason's experience with {term}"));
    };

    view! {
        <button class="ask-term" on:click=on_click title=tooltip>
            {label}
        </button>
    }
}

/// The resume itself: header, summary, experience, skills, projects,
/// education. Technology and project names are rendered as [`AskTerm`]s.
#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <div class="resume">
            <header class="resume__header">
                <h1 class="resume__name">"Jason"</h1>
                <p class="resume__role">"Software Engineer III"</p>
                <div class="resume__contact">
                    <span>"jason@example.com"</span>
                    <span>"(123) 456-7890"</span>
                    <span>"City, Country"</span>
                </div>
            </header>

            <section class="resume__section">
                <h2>"Professional Summary"</h2>
                <p>
                    "Software engineer focused on AI/ML, backend development, and "
                    "cloud-native architectures. Led in-house AI initiatives from "
                    "fine-tuning pipelines to production hosting, and shipped the "
                    "services and dashboards around them."
                </p>
            </section>

            <section class="resume__section">
                <h2>"Work Experience"</h2>
                <div class="resume__entry">
                    <div class="resume__entry-head">
                        <h3>"Software Engineer III"</h3>
                        <span class="resume__dates">"2021 - Present"</span>
                    </div>
                    <h4 class="resume__company">"Enterprise AI Group"</h4>
                    <ul>
                        <li>
                            "Led development of in-house AI solutions on open-source "
                            <AskTerm term="LLM"/>
                            "s, including fine-tuning pipelines and internal model hosting."
                        </li>
                        <li>
                            "Built AI-driven anomaly detection services with "
                            <AskTerm term="Python"/>
                            " and "
                            <AskTerm term="FastAPI"/>
                            " for "
                            <AskTerm term="Project Sentinel"/>
                            "."
                        </li>
                        <li>
                            "Maintained scalable training and inference infrastructure on "
                            "multi-"
                            <AskTerm term="GPU"/>
                            " clusters with "
                            <AskTerm term="Docker"/>
                            "."
                        </li>
                    </ul>
                </div>
                <div class="resume__entry">
                    <div class="resume__entry-head">
                        <h3>"Full Stack Developer"</h3>
                        <span class="resume__dates">"2018 - 2021"</span>
                    </div>
                    <h4 class="resume__company">"Great Software Inc."</h4>
                    <ul>
                        <li>
                            "Developed monitoring dashboards in "
                            <AskTerm term="React"/>
                            " backed by AI-powered services."
                        </li>
                        <li>
                            "Ran reverse proxying, load balancing, and SSL termination with "
                            <AskTerm term="NGINX"/>
                            " in production."
                        </li>
                    </ul>
                </div>
            </section>

            <section class="resume__section">
                <h2>"Projects"</h2>
                <ul>
                    <li>
                        <AskTerm term="Project Sentinel"/>
                        " — AI-driven anomaly detection for production systems."
                    </li>
                    <li>
                        <AskTerm term="AIQA"/>
                        " — enterprise AI quality assurance tooling."
                    </li>
                </ul>
            </section>

            <section class="resume__section">
                <h2>"Technical Skills"</h2>
                <div class="resume__skills">
                    <div>
                        <h3>"Languages & Frameworks"</h3>
                        <p>
                            <AskTerm term="Python"/>
                            ", "
                            <AskTerm term="FastAPI"/>
                            ", "
                            <AskTerm term="React"/>
                        </p>
                    </div>
                    <div>
                        <h3>"Infrastructure"</h3>
                        <p>
                            <AskTerm term="Docker"/>
                            ", "
                            <AskTerm term="NGINX"/>
                            ", "
                            <AskTerm term="GPU"/>
                            " clusters"
                        </p>
                    </div>
                </div>
            </section>

            <section class="resume__section">
                <h2>"Education"</h2>
                <div class="resume__entry-head">
                    <h3>"B.S. in Computer Science"</h3>
                    <span class="resume__dates">"2014 - 2018"</span>
                </div>
                <p>"University of Technology"</p>
            </section>
        </div>
    }
}
