use std::time::Duration;

use leptos::html;
use leptos::leptos_dom::helpers::{
    set_interval_with_handle, set_timeout_with_handle, IntervalHandle, TimeoutHandle,
};
use leptos::prelude::*;

use crate::content::site;
use crate::motion::{RevealPlan, Typewriter, TYPEWRITER_START_DELAY_MS, TYPEWRITER_TICK_MS};

use super::nav::{ScrollNav, SectionId};
use super::reveal::use_section_reveal;
use super::stats::{StatCounter, StatStyle};

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<ScrollNav>();
    let profile = &site().profile;
    let stats = profile.stats;
    let section_ref = NodeRef::<html::Section>::new();
    // no staged content here; the latch only starts the counters, so a page
    // opened at a deep anchor doesn't burn the animation off-screen
    let reveal = use_section_reveal(section_ref, RevealPlan::new(0.3));

    let (typed, set_typed) = signal(String::new());
    let (typing_done, set_typing_done) = signal(false);
    let machine = StoredValue::new(Typewriter::new(profile.tagline));
    let start_handle = StoredValue::new(None::<TimeoutHandle>);
    let tick_handle = StoredValue::new(None::<IntervalHandle>);

    // effects only run in the browser, so SSR renders the empty tagline
    Effect::new(move |_| {
        let started = set_timeout_with_handle(
            move || {
                let ticking = set_interval_with_handle(
                    move || {
                        let more = machine.try_update_value(|m| m.tick()).unwrap_or(false);
                        if let Some(visible) = machine.try_with_value(|m| m.visible().to_string())
                        {
                            let _ = set_typed.try_set(visible);
                        }
                        if !more {
                            let _ = set_typing_done.try_set(true);
                            tick_handle.update_value(|h| {
                                if let Some(h) = h.take() {
                                    h.clear();
                                }
                            });
                        }
                    },
                    Duration::from_millis(TYPEWRITER_TICK_MS),
                );
                if let Ok(handle) = ticking {
                    tick_handle.set_value(Some(handle));
                }
            },
            Duration::from_millis(TYPEWRITER_START_DELAY_MS),
        );
        if let Ok(handle) = started {
            start_handle.set_value(Some(handle));
        }
    });

    on_cleanup(move || {
        start_handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.clear();
            }
        });
        tick_handle.update_value(|h| {
            if let Some(h) = h.take() {
                h.clear();
            }
        });
    });

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Home.anchor()
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-16"
        >
            <div class="max-w-4xl mx-auto text-center">
                <p class="text-cyan text-sm uppercase tracking-widest mb-4">"Welcome to my portfolio"</p>
                <h1 class="text-4xl md:text-6xl font-bold mb-6">
                    "Hi, I'm " <span class="text-cyan">{profile.name}</span>
                </h1>
                <p class="text-lg md:text-2xl text-muted min-h-16 mb-8">
                    {typed}
                    <span class=move || {
                        if typing_done() { "hidden" } else { "animate-pulse text-cyan" }
                    }>"|"</span>
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mb-16">
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium border border-cyan/30 transition-colors"
                        on:click=move |_| nav.scroll_to(SectionId::Contact)
                    >
                        "Work With Me"
                    </button>
                    <button
                        class="px-8 py-3 rounded-md font-medium border border-muted/30 text-foreground hover:border-cyan/30 hover:text-cyan transition-colors"
                        on:click=move |_| nav.scroll_to(SectionId::Portfolio)
                    >
                        "View My Work"
                    </button>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    <StatCounter
                        target=stats.total_sales
                        style=StatStyle::Sales
                        start=Signal::derive(move || reveal.visible())
                        label="Total Sales Generated"
                    />
                    <StatCounter
                        target=stats.clients_served
                        style=StatStyle::Count
                        start=Signal::derive(move || reveal.visible())
                        label="Clients Served"
                        accent="text-green"
                    />
                    <StatCounter
                        target=stats.years_experience
                        style=StatStyle::Count
                        start=Signal::derive(move || reveal.visible())
                        label="Years Experience"
                        accent="text-purple"
                    />
                    <StatCounter
                        target=stats.projects_completed
                        style=StatStyle::Count
                        start=Signal::derive(move || reveal.visible())
                        label="Projects Completed"
                        accent="text-yellow"
                    />
                </div>
                <button
                    class="mt-16 text-muted hover:text-cyan text-2xl animate-bounce transition-colors"
                    aria-label="Scroll to about section"
                    on:click=move |_| nav.scroll_to(SectionId::About)
                >
                    "⌄"
                </button>
            </div>
        </section>
    }
}
