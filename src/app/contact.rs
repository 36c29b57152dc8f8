use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::content::{site, SERVICE_OPTIONS};
use crate::gateway::{ContactForm, Notice};
use crate::motion::RevealPlan;

use super::nav::SectionId;
use super::reveal::use_section_reveal;
use super::SharedGateway;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md border border-muted/30 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan/50 focus:border-cyan/30";

#[component]
pub fn Contact() -> impl IntoView {
    let gateway = expect_context::<SharedGateway>();
    let content = site();
    let channels = &content.profile.contact;
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.1)
            .root_margin("10px 0px")
            .stage("title", 100)
            .stage("form", 200)
            .stage("contact", 400),
    );

    let (form, set_form) = signal(ContactForm::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let snapshot = form.get_untracked();
        if snapshot.submitting || !snapshot.is_valid() {
            return;
        }
        set_form.update(|f| f.begin_submit());
        gateway.0.send(
            snapshot.payload(),
            Box::new(move |result| {
                let _ = set_form.try_update(|f| f.finish_submit(&result));
            }),
        );
    };

    let notice = move || {
        form.with(|f| f.notice).map(|notice| {
            let (class, text) = match notice {
                Notice::Sent => (
                    "bg-green/10 text-green border border-green/30 rounded-md px-4 py-3 text-sm",
                    "Thank you! Your message has been sent. I'll get back to you within 24 hours.",
                ),
                Notice::Failed => (
                    "bg-red/10 text-red border border-red/30 rounded-md px-4 py-3 text-sm",
                    "Something went wrong sending your message. Please try again.",
                ),
            };
            view! { <p class=class>{text}</p> }
        })
    };

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Contact.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-brightBlack/10"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"Get In " <span class="text-cyan">"Touch"</span></h2>
                <div class="grid lg:grid-cols-2 gap-12">
                    <form
                        class=move || {
                            format!(
                                "space-y-6 transition-all duration-700 {}",
                                reveal.stage_class("form"),
                            )
                        }
                        on:submit=on_submit
                    >
                        <div class="grid md:grid-cols-2 gap-6">
                            <input
                                type="text"
                                placeholder="Your Name *"
                                required
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| {
                                    set_form.update(|f| f.name = event_target_value(&ev))
                                }
                            />
                            <input
                                type="email"
                                placeholder="Your Email *"
                                required
                                class=INPUT_CLASS
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| {
                                    set_form.update(|f| f.email = event_target_value(&ev))
                                }
                            />
                        </div>
                        <input
                            type="text"
                            placeholder="Company (optional)"
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.company.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.company = event_target_value(&ev))
                            }
                        />
                        <select
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.service.clone())
                            on:change=move |ev| {
                                set_form.update(|f| f.service = event_target_value(&ev))
                            }
                        >
                            <option value="">"Service you're interested in"</option>
                            {SERVICE_OPTIONS
                                .into_iter()
                                .map(|option| view! { <option value=option>{option}</option> })
                                .collect_view()}
                        </select>
                        <textarea
                            placeholder="Tell me about your project *"
                            required
                            rows=5
                            class=INPUT_CLASS
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| {
                                set_form.update(|f| f.message = event_target_value(&ev))
                            }
                        ></textarea>
                        {notice}
                        <button
                            type="submit"
                            class="w-full bg-cyan/20 hover:bg-cyan/30 text-cyan px-8 py-3 rounded-md font-medium border border-cyan/30 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                            prop:disabled=move || form.with(|f| f.submitting)
                        >
                            {move || {
                                if form.with(|f| f.submitting) {
                                    "Sending..."
                                } else {
                                    "Send Message"
                                }
                            }}
                        </button>
                    </form>
                    <div class=move || {
                        format!(
                            "transition-all duration-700 {}",
                            reveal.stage_class("contact"),
                        )
                    }>
                        <h3 class="text-xl font-bold mb-6">"Contact Information"</h3>
                        <div class="space-y-4 mb-8">
                            <p class="flex items-center gap-3">
                                <span class="text-cyan">"📧"</span>
                                <a class="hover:text-cyan transition-colors" href=format!("mailto:{}", channels.email)>
                                    {channels.email}
                                </a>
                            </p>
                            <p class="flex items-center gap-3">
                                <span class="text-cyan">"📞"</span>
                                {channels.phone}
                            </p>
                            <p class="flex items-center gap-3">
                                <span class="text-cyan">"📍"</span>
                                {channels.location}
                            </p>
                        </div>
                        <h3 class="text-xl font-bold mb-4">"Find Me Online"</h3>
                        <div class="flex gap-4">
                            <a
                                href=channels.linkedin
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-muted/30 hover:border-cyan/30 hover:text-cyan transition-colors"
                            >
                                "LinkedIn"
                            </a>
                            <a
                                href=channels.upwork
                                target="_blank"
                                rel="noopener noreferrer"
                                class="px-4 py-2 rounded-md border border-muted/30 hover:border-cyan/30 hover:text-cyan transition-colors"
                            >
                                "Upwork"
                            </a>
                        </div>
                        <div class="bg-brightBlack/30 p-6 rounded-lg border-l-4 border-cyan mt-8">
                            <p class="text-sm text-cyan font-medium mb-2">"⚡ Quick Response"</p>
                            <p class="text-sm text-muted">
                                "I typically respond to project inquiries within 24 hours."
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
