use leptos::html;
use leptos::prelude::*;

use crate::content::site;
use crate::motion::RevealPlan;

use super::nav::SectionId;
use super::reveal::use_section_reveal;

#[component]
pub fn Experience() -> impl IntoView {
    let content = site();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.1)
            .root_margin("10px 0px")
            .stage("title", 100)
            .staggered("entry", content.experience.len(), 300, 200),
    );

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Experience.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"Work " <span class="text-cyan">"Experience"</span></h2>
                <div class="relative border-l-2 border-muted/30 ml-4 space-y-12">
                    {content
                        .experience
                        .iter()
                        .enumerate()
                        .map(|(i, entry)| {
                            let token = format!("entry-{i}");
                            view! {
                                <div class=move || {
                                    format!(
                                        "relative pl-8 transition-all duration-700 {}",
                                        reveal.stage_class(&token),
                                    )
                                }>
                                    <span class="absolute -left-[9px] top-1 w-4 h-4 rounded-full bg-cyan border-4 border-background"></span>
                                    <p class="text-sm text-cyan mb-1">{entry.duration}</p>
                                    <h3 class="text-xl font-bold">{entry.position}</h3>
                                    <p class="text-muted font-medium mb-2">{entry.company}</p>
                                    <p class="text-muted mb-3">{entry.description}</p>
                                    <ul class="space-y-1">
                                        {entry
                                            .achievements
                                            .iter()
                                            .map(|achievement| {
                                                view! {
                                                    <li class="text-sm text-muted flex items-start gap-2">
                                                        <span class="text-green mt-0.5">"▸"</span>
                                                        {*achievement}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
