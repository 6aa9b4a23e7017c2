use leptos::prelude::*;
use leptos_meta::Title;

use super::data::{Experience, EXPERIENCES};

#[component]
pub fn ExperiencePage() -> impl IntoView {
    view! {
        <Title text="Experience" />
        <div class="max-w-3xl mx-auto w-full page-content">
            <h1 class="text-3xl font-bold text-center my-8">"Experience"</h1>
            <div class="flex flex-col gap-6">
                {EXPERIENCES.iter().map(experience_card).collect_view()}
            </div>
        </div>
    }
}

fn experience_card(exp: &'static Experience) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-6 rounded-md border-l-4 border-cyan">
            <div class="flex flex-col sm:flex-row sm:justify-between sm:items-center gap-1 mb-2">
                <h2 class="text-lg font-bold">
                    {exp.position} <span class="text-cyan">" @ " {exp.company}</span>
                </h2>
                <span class="text-sm text-muted">
                    {exp.duration}
                    {exp
                        .current
                        .then(|| {
                            view! {
                                <span class="ml-2 text-xs text-green border border-green/40 rounded-full px-2 py-0.5">
                                    "Current"
                                </span>
                            }
                        })}
                </span>
            </div>
            <ul class="list-disc list-inside text-sm text-muted space-y-1 mb-3">
                {exp.description.iter().map(|line| view! { <li>{*line}</li> }).collect_view()}
            </ul>
            <div class="flex flex-wrap gap-2">
                {exp.technologies
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
        </div>
    }
}
