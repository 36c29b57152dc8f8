use leptos::html;
use leptos::prelude::*;

use crate::content::site;
use crate::motion::RevealPlan;

use super::nav::{ScrollNav, SectionId};
use super::reveal::use_section_reveal;

#[component]
pub fn Services() -> impl IntoView {
    let nav = expect_context::<ScrollNav>();
    let content = site();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.3)
            .stage("title", 100)
            .staggered("card", content.services.len(), 300, 100)
            .stage("cta", 800),
    );

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Services.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-brightBlack/10"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"My " <span class="text-cyan">"Services"</span></h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {content
                        .services
                        .iter()
                        .enumerate()
                        .map(|(i, service)| {
                            let token = format!("card-{i}");
                            view! {
                                <div class=move || {
                                    format!(
                                        "bg-background p-8 rounded-lg border border-muted/30 hover:border-cyan/30 transition-all duration-700 {}",
                                        reveal.pop_class(&token),
                                    )
                                }>
                                    <div class="text-4xl mb-4">{service.icon}</div>
                                    <h3 class="text-xl font-bold mb-2">{service.title}</h3>
                                    <p class="text-muted mb-4">{service.description}</p>
                                    <ul class="space-y-2 mb-6">
                                        {service
                                            .features
                                            .iter()
                                            .map(|feature| {
                                                view! {
                                                    <li class="text-sm text-muted flex items-center gap-2">
                                                        <span class="text-green">"✓"</span>
                                                        {*feature}
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                    <p class="text-cyan font-medium">{service.price}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!(
                        "text-center mt-12 transition-all duration-700 {}",
                        reveal.stage_class("cta"),
                    )
                }>
                    <p class="text-muted mb-4">"Not sure which service fits your business?"</p>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium border border-cyan/30 transition-colors"
                        on:click=move |_| nav.scroll_to(SectionId::Contact)
                    >
                        "Let's Discuss Your Project"
                    </button>
                </div>
            </div>
        </section>
    }
}
