use leptos::prelude::*;
use leptos_meta::Title;

use super::data::{BlogPost, BLOG_POSTS};

#[component]
pub fn BlogPage() -> impl IntoView {
    let featured = BLOG_POSTS.iter().filter(|post| post.featured);
    let recent = BLOG_POSTS.iter().filter(|post| !post.featured);

    view! {
        <Title text="Blog" />
        <div class="max-w-4xl mx-auto w-full page-content">
            <h1 class="text-3xl font-bold text-center my-8">"Blog"</h1>
            <h2 class="text-xl font-bold mb-4">"Featured"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-10">
                {featured.map(post_card).collect_view()}
            </div>
            <h2 class="text-xl font-bold mb-4">"Recent"</h2>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {recent.map(post_card).collect_view()}
            </div>
        </div>
    }
}

fn post_card(post: &'static BlogPost) -> impl IntoView {
    view! {
        <article class="bg-brightBlack/30 p-6 rounded-md border border-muted/30 flex flex-col gap-2">
            <span class="text-xs text-purple uppercase tracking-wider">{post.category}</span>
            <h3 class="text-lg font-bold">{post.title}</h3>
            <p class="text-sm text-muted leading-relaxed">{post.excerpt}</p>
            <div class="text-xs text-muted mt-auto pt-2">
                {post.author} " · " {post.date} " · " {post.read_time}
            </div>
        </article>
    }
}
