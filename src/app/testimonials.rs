use leptos::html;
use leptos::prelude::*;
use leptos_use::use_interval_fn;
use leptos_use::utils::Pausable;

use crate::content::site;
use crate::motion::{Carousel, RevealPlan, CAROUSEL_INTERVAL_MS};

use super::nav::{ScrollNav, SectionId};
use super::reveal::use_section_reveal;

#[component]
pub fn Testimonials() -> impl IntoView {
    let nav = expect_context::<ScrollNav>();
    let content = site();
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.1)
            .stage("title", 100)
            .stage("main", 200)
            .stage("controls", 400)
            .stage("preview", 600)
            .stage("cta", 800),
    );

    let (carousel, set_carousel) = signal(Carousel::new(content.testimonials.len()));
    let Pausable { pause, resume, .. } = use_interval_fn(
        move || {
            let _ = set_carousel.try_update(|c| c.tick());
        },
        CAROUSEL_INTERVAL_MS,
    );

    // hover stops the timer itself; resuming recreates it, so the next
    // automatic advance always lands a full interval after hover ends
    let suspend = move |_| {
        set_carousel.update(|c| c.suspend_autoplay());
        pause();
    };
    let resume = move |_| {
        set_carousel.update(|c| c.resume_autoplay());
        resume();
    };
    let current = move || &content.testimonials[carousel.with(|c| c.index())];

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Testimonials.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"Client " <span class="text-cyan">"Testimonials"</span></h2>
                <div class=move || {
                    format!(
                        "bg-brightBlack/20 p-8 md:p-12 rounded-lg border border-muted/30 transition-all duration-700 {}",
                        reveal.stage_class("main"),
                    )
                }>
                    {move || {
                        let t = current();
                        view! {
                            <div class="text-center">
                                <div class="text-yellow text-xl mb-4">
                                    {"★".repeat(t.rating as usize)}
                                </div>
                                <blockquote class="text-lg md:text-xl leading-relaxed mb-8">
                                    "\"" {t.quote} "\""
                                </blockquote>
                                <div class="flex items-center justify-center gap-4">
                                    <div class="w-12 h-12 rounded-full bg-cyan/20 text-cyan flex items-center justify-center font-bold">
                                        {t.initials()}
                                    </div>
                                    <div class="text-left">
                                        <p class="font-bold">{t.author}</p>
                                        <p class="text-sm text-muted">{t.position}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    }}
                    <div class="h-1 bg-brightBlack/30 rounded-full mt-8 overflow-hidden">
                        <div
                            class="h-full bg-cyan rounded-full transition-all duration-500"
                            style:width=move || format!("{}%", carousel.with(|c| c.progress()))
                        ></div>
                    </div>
                </div>
                <div
                    class=move || {
                        format!(
                            "flex items-center justify-center gap-4 mt-8 transition-all duration-700 {}",
                            reveal.stage_class("controls"),
                        )
                    }
                    on:mouseenter=suspend
                    on:mouseleave=resume
                >
                    <button
                        class="w-10 h-10 rounded-full border border-muted/30 hover:border-cyan/30 hover:text-cyan transition-colors"
                        aria-label="Previous testimonial"
                        on:click=move |_| set_carousel.update(|c| c.prev())
                    >
                        "‹"
                    </button>
                    {(0..content.testimonials.len())
                        .map(|i| {
                            let class = move || {
                                if carousel.with(|c| c.index()) == i {
                                    "w-3 h-3 rounded-full bg-cyan transition-colors"
                                } else {
                                    "w-3 h-3 rounded-full bg-muted/30 hover:bg-muted transition-colors"
                                }
                            };
                            view! {
                                <button
                                    class=class
                                    aria-label=format!("Go to testimonial {}", i + 1)
                                    on:click=move |_| set_carousel.update(|c| c.go_to(i))
                                ></button>
                            }
                        })
                        .collect_view()}
                    <button
                        class="w-10 h-10 rounded-full border border-muted/30 hover:border-cyan/30 hover:text-cyan transition-colors"
                        aria-label="Next testimonial"
                        on:click=move |_| set_carousel.update(|c| c.next())
                    >
                        "›"
                    </button>
                </div>
                <div class=move || {
                    format!(
                        "grid grid-cols-2 md:grid-cols-4 gap-4 mt-12 transition-all duration-700 {}",
                        reveal.stage_class("preview"),
                    )
                }>
                    {content
                        .testimonials
                        .iter()
                        .enumerate()
                        .map(|(i, t)| {
                            let class = move || {
                                if carousel.with(|c| c.index()) == i {
                                    "p-4 rounded-lg border border-cyan/30 bg-cyan/10 text-left transition-colors"
                                } else {
                                    "p-4 rounded-lg border border-muted/30 hover:border-cyan/30 text-left transition-colors"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| set_carousel.update(|c| c.go_to(i))>
                                    <p class="font-bold text-sm">{t.author}</p>
                                    <p class="text-xs text-muted">{t.company}</p>
                                </button>
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
                    <p class="text-muted mb-4">"Ready to be the next success story?"</p>
                    <button
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium border border-cyan/30 transition-colors"
                        on:click=move |_| nav.scroll_to(SectionId::Contact)
                    >
                        "Start Your Project"
                    </button>
                </div>
            </div>
        </section>
    }
}
