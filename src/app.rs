mod about;
mod blog;
mod contact;
mod data;
mod experience;
mod footer;
mod header;
mod meet;
mod projects;
mod scroll_top;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::AboutPage;
use blog::BlogPage;
use contact::ContactPage;
use data::SITE;
use experience::ExperiencePage;
use footer::Footer;
use header::Header;
use meet::MeetPage;
use projects::ProjectsPage;
use scroll_top::ScrollToTop;
use skills::SkillsPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="description" content=SITE.description />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // sets the document title
        <Title formatter=|title| format!("{} - {title}", SITE.name) />

        <Router>
            <Header />
            <main class="flex flex-col flex-grow mx-auto w-full max-w-7xl px-4">
                <Routes fallback=NotFound>
                    <Route path=path!("/") view=AboutPage />
                    <Route path=path!("/skills") view=SkillsPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/experience") view=ExperiencePage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/meet") view=MeetPage />
                </Routes>
            </main>
            <ScrollToTop />
            <Footer />
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Title text="Not Found" />
        <div class="text-center py-24">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-muted mb-8">"This page doesn't exist."</p>
            <A href="/">
                <span class="text-cyan hover:underline">"Back home"</span>
            </A>
        </div>
    }
}
