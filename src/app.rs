mod about;
mod contact;
mod experience;
mod footer;
mod hero;
mod nav;
mod portfolio;
mod reveal;
mod services;
mod stats;
mod testimonials;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::gateway::{ContactGateway, StubGateway};

use about::About;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use hero::Hero;
use nav::{Navbar, ScrollNav};
use portfolio::Portfolio;
use services::Services;
use testimonials::Testimonials;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

/// Outbound message collaborator shared with the contact form.
#[derive(Clone)]
pub struct SharedGateway(pub Arc<dyn ContactGateway>);

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(ScrollNav);
    provide_context(SharedGateway(Arc::new(StubGateway)));

    view! {
        // sets the document title
        <Title formatter=|title| format!("Sohaib Mushtaq - {title}") />

        <Router>
            <main class="min-h-screen bg-background text-foreground">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// The single page: every section stacked in fixed order.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="E-commerce Consultant" />
        <Navbar />
        <Hero />
        <About />
        <Services />
        <Experience />
        <Portfolio />
        <Testimonials />
        <Contact />
        <Footer />
    }
}
