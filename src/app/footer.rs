use leptos::html;
use leptos::prelude::*;

use crate::content::site;
use crate::motion::RevealPlan;

use super::nav::{ScrollNav, SectionId};
use super::reveal::use_section_reveal;

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let nav = expect_context::<ScrollNav>();
    let profile = &site().profile;
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.1).stage("content", 100),
    );
    // rfc3339 timestamp starts with the year
    let year = &BUILD_TIME[..4];

    view! {
        <footer class="border-t border-muted/30 py-12 px-4 sm:px-6 lg:px-8">
            <section node_ref=section_ref>
                <div class=move || {
                    format!(
                        "max-w-6xl mx-auto transition-all duration-700 {}",
                        reveal.stage_class("content"),
                    )
                }>
                    <div class="flex flex-col md:flex-row items-center justify-between gap-6 mb-8">
                        <button
                            class="text-xl font-bold text-foreground"
                            on:click=move |_| nav.scroll_to(SectionId::Home)
                        >
                            "Sohaib" <span class="text-cyan">"."</span>
                        </button>
                        <div class="flex flex-wrap justify-center gap-6">
                            {SectionId::NAV
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <button
                                            class="text-sm text-muted hover:text-foreground transition-colors"
                                            on:click=move |_| nav.scroll_to(section)
                                        >
                                            {section.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex gap-4">
                            <a
                                href=format!("mailto:{}", profile.contact.email)
                                class="text-muted hover:text-cyan transition-colors text-sm"
                            >
                                {profile.contact.email}
                            </a>
                            <a
                                href=profile.contact.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted hover:text-cyan transition-colors text-sm"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                href=profile.contact.upwork
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-muted hover:text-cyan transition-colors text-sm"
                            >
                                "Upwork"
                            </a>
                        </div>
                    </div>
                    <p class="text-center text-sm text-muted">
                        "© " {year.to_string()} " " {profile.name} ". All rights reserved."
                    </p>
                </div>
            </section>
        </footer>
    }
}
