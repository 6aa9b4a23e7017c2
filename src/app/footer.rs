use leptos::prelude::*;

use super::data::{SITE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="mt-16 border-t border-muted/30">
            <div class="mx-auto max-w-7xl px-4 py-8 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="text-sm text-muted">
                    {format!("© {} · built {}", SITE.name, env!("BUILD_TIME"))}
                </div>
                <div class="flex gap-4">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=link.name
                                    class="text-muted hover:text-foreground text-2xl transition-colors duration-200"
                                >
                                    <i class=link.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
