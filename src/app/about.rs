use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::data::SITE;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About Me" />
        <div class="max-w-6xl mx-auto page-content">
            <section class="text-center lg:mt-12 section-content">
                <h1 class="text-3xl lg:text-4xl font-bold mb-4">
                    "Hi, I'm " <span class="text-cyan">{SITE.name}</span> " - " {SITE.role}
                </h1>
                <p class="text-lg text-muted max-w-2xl mx-auto">{SITE.description}</p>
            </section>
            <section class="flex flex-col lg:flex-row gap-8 lg:gap-12 mt-12 section-content">
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"What I Do"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "I build full-stack web applications end to end: typed APIs, "
                        "server-rendered frontends, and the infrastructure glue between them. "
                        "Lately that means a lot of " <strong>"Rust compiled to WebAssembly"</strong>
                        " alongside the usual TypeScript stack."
                    </p>
                    <p class="text-base mb-4 leading-relaxed">
                        "With a positive attitude and a growth mindset, I'm ready to make a "
                        "meaningful contribution wherever interesting problems live."
                    </p>
                </div>
                <div class="w-full lg:max-w-2xl">
                    <h2 class="text-xl font-bold my-8">"Beyond the Keyboard"</h2>
                    <p class="text-base mb-4 leading-relaxed">
                        "Continuous learner, open-source tinkerer, and occasional blogger. "
                        "I care about readable code, honest estimates, and interfaces that "
                        "don't make users think."
                    </p>
                </div>
            </section>
            <section class="flex justify-center items-center mt-8 section-content">
                <div class="w-full max-w-2xl text-center">
                    <h3 class="text-xl font-bold my-8">"Let's Connect"</h3>
                    <div class="bg-brightBlack/30 p-6 rounded-lg border border-muted/30">
                        <p class="mb-4">
                            "Have a question, a project, or just want to say hello? "
                            "Drop me a message or book a call directly."
                        </p>
                        <div class="flex flex-col sm:flex-row items-center justify-center gap-4 mt-6">
                            <A href="/contact">
                                <span class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium transition-all duration-200 border border-cyan/30">
                                    "📧 Send a message"
                                </span>
                            </A>
                            <A href="/meet">
                                <span class="bg-purple/20 hover:bg-purple/30 text-purple px-6 py-3 rounded-md font-medium transition-all duration-200 border border-purple/30">
                                    "📅 Schedule a meeting"
                                </span>
                            </A>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
