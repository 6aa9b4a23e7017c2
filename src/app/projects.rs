use leptos::prelude::*;
use leptos_meta::Title;

use super::data::{Project, ProjectCategory, PROJECTS};

const CATEGORIES: [ProjectCategory; 3] = [
    ProjectCategory::Web,
    ProjectCategory::FullStack,
    ProjectCategory::Design,
];

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (selected, set_selected) = signal(None::<ProjectCategory>);

    let filter_class = move |category: Option<ProjectCategory>| {
        if selected.get() == category {
            "px-4 py-2 rounded-md bg-cyan/20 text-cyan border border-cyan/30"
        } else {
            "px-4 py-2 rounded-md text-muted border border-muted/30 hover:text-foreground transition-colors duration-200"
        }
    };

    view! {
        <Title text="Projects" />
        <div class="max-w-5xl mx-auto w-full page-content">
            <h1 class="text-3xl font-bold text-center my-8">"Projects"</h1>
            <div class="flex flex-wrap justify-center gap-3 mb-10">
                <button
                    type="button"
                    class=move || filter_class(None)
                    on:click=move |_| set_selected.set(None)
                >
                    "All"
                </button>
                {CATEGORIES
                    .iter()
                    .map(|&category| {
                        view! {
                            <button
                                type="button"
                                class=move || filter_class(Some(category))
                                on:click=move |_| set_selected.set(Some(category))
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {move || {
                    let selected = selected.get();
                    PROJECTS
                        .iter()
                        .filter(|project| selected.map_or(true, |c| project.category == c))
                        .map(project_card)
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn project_card(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-md border border-muted/30 flex flex-col gap-3">
            <div class="flex justify-between items-start">
                <h2 class="text-lg font-bold">{project.title}</h2>
                {project
                    .featured
                    .then(|| {
                        view! {
                            <span class="text-xs text-yellow border border-yellow/40 rounded-full px-2 py-0.5">
                                "Featured"
                            </span>
                        }
                    })}
            </div>
            <p class="text-sm text-muted leading-relaxed">{project.description}</p>
            <div class="flex flex-wrap gap-2">
                {project
                    .technologies
                    .iter()
                    .map(|tech| {
                        view! {
                            <span class="text-xs bg-background rounded-full px-2 py-1 border border-muted/30">
                                {*tech}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-4 mt-auto pt-2">
                {project
                    .github_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-cyan hover:underline"
                            >
                                "Source"
                            </a>
                        }
                    })}
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-green hover:underline"
                            >
                                "Live"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
