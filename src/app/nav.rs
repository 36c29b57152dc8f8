use leptos::prelude::*;
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The page's anchor targets, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Services,
    Experience,
    Portfolio,
    Testimonials,
    Contact,
}

impl SectionId {
    pub const NAV: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Services,
        SectionId::Experience,
        SectionId::Portfolio,
        SectionId::Testimonials,
        SectionId::Contact,
    ];

    /// The `id` attribute carried by the section element.
    pub fn anchor(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Experience => "experience",
            SectionId::Portfolio => "portfolio",
            SectionId::Testimonials => "testimonials",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Services => "Services",
            SectionId::Experience => "Experience",
            SectionId::Portfolio => "Portfolio",
            SectionId::Testimonials => "Testimonials",
            SectionId::Contact => "Contact",
        }
    }
}

/// Context-provided navigation: smooth-scrolls to a section anchor.
///
/// A missing anchor is ignored rather than panicking; the worst case is a
/// dead nav link.
#[derive(Debug, Clone, Copy)]
pub struct ScrollNav;

impl ScrollNav {
    pub fn scroll_to(&self, section: SectionId) {
        if let Some(el) = document().get_element_by_id(section.anchor()) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let nav = expect_context::<ScrollNav>();
    let (menu_open, set_menu_open) = signal(false);
    let (_, scroll_y) = use_window_scroll();

    // solid background only once the hero has been scrolled past the top
    let bar_class = move || {
        if scroll_y() > 50.0 {
            "fixed top-0 inset-x-0 z-50 bg-background/95 backdrop-blur shadow-lg transition-colors duration-300"
        } else {
            "fixed top-0 inset-x-0 z-50 bg-transparent transition-colors duration-300"
        }
    };

    let go = move |section: SectionId| {
        set_menu_open(false);
        nav.scroll_to(section);
    };

    view! {
        <nav class=bar_class>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <button
                        class="text-xl font-bold text-foreground"
                        on:click=move |_| go(SectionId::Home)
                    >
                        "Sohaib" <span class="text-cyan">"."</span>
                    </button>
                    <div class="hidden md:flex items-center gap-6">
                        {SectionId::NAV
                            .into_iter()
                            .map(|section| {
                                view! {
                                    <button
                                        class="text-sm text-muted hover:text-foreground transition-colors"
                                        on:click=move |_| go(section)
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                        <button
                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-4 py-2 rounded-md text-sm font-medium border border-cyan/30 transition-colors"
                            on:click=move |_| go(SectionId::Contact)
                        >
                            "Get Started"
                        </button>
                    </div>
                    <button
                        class="md:hidden text-foreground text-2xl"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            {move || {
                menu_open()
                    .then(|| {
                        view! {
                            <div class="md:hidden bg-background/95 backdrop-blur border-t border-muted/30 px-4 py-4 flex flex-col gap-3">
                                {SectionId::NAV
                                    .into_iter()
                                    .map(|section| {
                                        view! {
                                            <button
                                                class="text-left text-muted hover:text-foreground transition-colors"
                                                on:click=move |_| go(section)
                                            >
                                                {section.label()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
