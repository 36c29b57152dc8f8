use leptos::html;
use leptos::prelude::*;

use crate::content::{filter_projects, site, CategoryFilter, Project, ProjectCategory};
use crate::motion::RevealPlan;

use super::nav::SectionId;
use super::reveal::use_section_reveal;

fn filter_options() -> Vec<CategoryFilter> {
    let mut options = vec![CategoryFilter::All];
    options.extend(ProjectCategory::ALL.into_iter().map(CategoryFilter::Only));
    options
}

#[component]
pub fn Portfolio() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let reveal = use_section_reveal(
        section_ref,
        RevealPlan::new(0.1).stage("title", 100).stage("grid", 300),
    );
    let (filter, set_filter) = signal(CategoryFilter::All);

    view! {
        <section
            node_ref=section_ref
            id=SectionId::Portfolio.anchor()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-brightBlack/10"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class=move || {
                    format!(
                        "text-3xl md:text-4xl font-bold text-center mb-12 transition-all duration-700 {}",
                        reveal.stage_class("title"),
                    )
                }>"Featured " <span class="text-cyan">"Projects"</span></h2>
                <div class="flex flex-wrap justify-center gap-3 mb-12">
                    {filter_options()
                        .into_iter()
                        .map(|option| {
                            let class = move || {
                                if filter() == option {
                                    "bg-cyan/20 text-cyan border-cyan/30 px-4 py-2 rounded-full text-sm border transition-colors"
                                } else {
                                    "text-muted border-muted/30 hover:text-foreground px-4 py-2 rounded-full text-sm border transition-colors"
                                }
                            };
                            view! {
                                <button class=class on:click=move |_| set_filter(option)>
                                    {option.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class=move || {
                    format!(
                        "grid md:grid-cols-2 gap-8 transition-all duration-700 {}",
                        reveal.stage_class("grid"),
                    )
                }>
                    {move || {
                        filter_projects(&site().projects, filter())
                            .into_iter()
                            .map(|project| view! { <ProjectCard project /> })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-background p-8 rounded-lg border border-muted/30 hover:border-cyan/30 transition-colors">
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-xl font-bold">{project.title}</h3>
                <span class="text-xs text-cyan bg-cyan/10 px-3 py-1 rounded-full border border-cyan/30">
                    {project.category.label()}
                </span>
            </div>
            <p class="text-muted mb-6">{project.description}</p>
            <div class="grid grid-cols-3 gap-4 mb-6">
                {project
                    .results
                    .iter()
                    .map(|(metric, value)| {
                        view! {
                            <div class="text-center">
                                <div class="text-sm font-bold text-green">{*value}</div>
                                <div class="text-xs text-muted capitalize">{*metric}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="text-xs text-muted bg-brightBlack/30 px-3 py-1 rounded-full">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
