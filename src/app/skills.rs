use leptos::prelude::*;
use leptos_meta::Title;

use super::data::{Skill, SkillCategory, SKILLS};

const CATEGORIES: [SkillCategory; 4] = [
    SkillCategory::Frontend,
    SkillCategory::Backend,
    SkillCategory::Database,
    SkillCategory::Tools,
];

#[component]
pub fn SkillsPage() -> impl IntoView {
    // None = show everything
    let (selected, set_selected) = signal(None::<SkillCategory>);

    let filter_class = move |category: Option<SkillCategory>| {
        if selected.get() == category {
            "px-4 py-2 rounded-md bg-cyan/20 text-cyan border border-cyan/30"
        } else {
            "px-4 py-2 rounded-md text-muted border border-muted/30 hover:text-foreground transition-colors duration-200"
        }
    };

    view! {
        <Title text="Skills" />
        <div class="max-w-5xl mx-auto w-full page-content">
            <h1 class="text-3xl font-bold text-center my-8">"Skills"</h1>
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
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                {move || {
                    let selected = selected.get();
                    SKILLS
                        .iter()
                        .filter(|skill| selected.map_or(true, |c| skill.category == c))
                        .map(skill_card)
                        .collect_view()
                }}
            </div>
        </div>
    }
}

fn skill_card(skill: &'static Skill) -> impl IntoView {
    view! {
        <div class="bg-brightBlack/30 p-4 rounded-md border border-muted/30">
            <div class="flex justify-between items-center mb-2">
                <span class="font-medium">{skill.name}</span>
                <span class="text-xs text-muted">{skill.category.label()}</span>
            </div>
            <div class="w-full h-2 rounded-full bg-background overflow-hidden">
                <div
                    class="h-full bg-cyan rounded-full"
                    style=format!("width: {}%", skill.level)
                ></div>
            </div>
        </div>
    }
}
