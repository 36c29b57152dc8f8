use leptos::html;
use leptos::prelude::*;

use crate::content::site;
use crate::motion::RevealPlan;

use super::nav::SectionId;
use super::reveal::use_section_reveal;
use super::stats::{StatCounter, StatStyle};

const BADGES: [&str; 3] = [
    "Top Rated Plus on Upwork",
    "6-Figure Shopify & Amazon Seller",
    "E-commerce Trainer",
];

#[component]
pub fn About() -> impl IntoView {
    let content = site();
    let stats = content.profile.stats;
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.3)
            .stage("title", 100)
            .stage("content", 300)
            .stage("skills", 500)
            .stage("badges", 700),
    );

    view! {
        <section
            node_ref=section_ref
            id=SectionId::About.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"About " <span class="text-cyan">"Me"</span></h2>
                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    <div class=move || {
                        format!(
                            "transition-all duration-700 {}",
                            reveal.stage_class("content"),
                        )
                    }>
                        <p class="text-lg leading-relaxed text-muted mb-8">{content.profile.bio}</p>
                        <div class="grid grid-cols-2 gap-8 mb-8">
                            <StatCounter
                                target=stats.years_experience
                                style=StatStyle::Count
                                start=Signal::derive(move || reveal.visible())
                                label="Years Experience"
                            />
                            <StatCounter
                                target=stats.clients_served
                                style=StatStyle::Count
                                start=Signal::derive(move || reveal.visible())
                                label="Happy Clients"
                                accent="text-green"
                            />
                        </div>
                        <div class=move || {
                            format!(
                                "flex flex-wrap gap-3 transition-all duration-700 {}",
                                reveal.stage_class("badges"),
                            )
                        }>
                            {BADGES
                                .into_iter()
                                .map(|badge| {
                                    view! {
                                        <span class="bg-brightBlack/30 text-cyan text-sm px-4 py-2 rounded-full border border-cyan/30">
                                            {badge}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class=move || {
                        format!(
                            "transition-all duration-700 {}",
                            reveal.stage_class("skills"),
                        )
                    }>
                        <h3 class="text-xl font-bold mb-6">"Skills & Expertise"</h3>
                        <div class="space-y-5">
                            {content
                                .skills
                                .iter()
                                .map(|skill| {
                                    let level = skill.level;
                                    // bars animate from 0 to their level via the width transition
                                    let width = move || {
                                        if reveal.shown("skills") {
                                            format!("{level}%")
                                        } else {
                                            "0%".to_string()
                                        }
                                    };
                                    view! {
                                        <div>
                                            <div class="flex justify-between text-sm mb-1">
                                                <span>{skill.name}</span>
                                                <span class="text-muted">{format!("{level}%")}</span>
                                            </div>
                                            <div class="h-2 bg-brightBlack/30 rounded-full overflow-hidden">
                                                <div
                                                    class="h-full bg-cyan rounded-full transition-all duration-1000 ease-out"
                                                    style:width=width
                                                ></div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
