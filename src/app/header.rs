use leptos::prelude::*;
use leptos_router::{components::*, hooks::use_location};

use super::data::{NAV_LINKS, SITE};
use super::theme::ThemeToggle;

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let pathname = use_location().pathname;

    let link_class = move |href: &'static str| {
        if pathname.get() == href {
            "text-cyan font-semibold"
        } else {
            "text-muted hover:text-foreground transition-colors duration-200"
        }
    };

    view! {
        <header class="shadow-lg sticky top-0 z-40 bg-background/80 backdrop-blur-md">
            <div class="mx-auto max-w-7xl px-4 sm:px-6 lg:px-8 py-4">
                <div class="flex items-center justify-between">
                    <A href="/">
                        <span class="text-xl font-bold">
                            <span class="text-cyan">{SITE.name}</span>
                            <span class="text-muted text-sm ml-2 hidden sm:inline">
                                {SITE.role}
                            </span>
                        </span>
                    </A>
                    <nav class="hidden md:flex items-center gap-6">
                        {NAV_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <A href=link.href>
                                        <span class=move || link_class(link.href)>{link.name}</span>
                                    </A>
                                }
                            })
                            .collect_view()} <ThemeToggle />
                    </nav>
                    <div class="flex md:hidden items-center gap-3">
                        <ThemeToggle />
                        <button
                            type="button"
                            aria-label="Toggle navigation menu"
                            class="p-2 rounded-md border border-muted/30"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                {move || {
                    menu_open
                        .get()
                        .then(|| {
                            view! {
                                <nav class="md:hidden mt-4 flex flex-col gap-3 pb-2">
                                    {NAV_LINKS
                                        .iter()
                                        .map(|link| {
                                            view! {
                                                <A href=link.href on:click=move |_| set_menu_open.set(false)>
                                                    <span class=move || link_class(link.href)>{link.name}</span>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </nav>
                            }
                        })
                }}
            </div>
        </header>
    }
}
