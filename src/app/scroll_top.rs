use leptos::prelude::*;
use leptos_use::{signal_debounced, use_window_scroll};

/// Floating back-to-top control, shown once the page is scrolled roughly a
/// viewport past the fold. Scroll tracking is debounced so the listener stays
/// cheap during fast scrolling.
#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (_x, y) = use_window_scroll();
    let y: Signal<f64> = signal_debounced(y, 10.0);
    let visible = move || y.get() > 480.0;

    view! {
        <button
            type="button"
            aria-label="Scroll back to top"
            class=move || {
                if visible() {
                    "fixed bottom-6 right-6 z-40 p-3 rounded-full bg-cyan/20 border border-cyan/30 text-cyan hover:bg-cyan/30 transition-all duration-200 opacity-100"
                } else {
                    "fixed bottom-6 right-6 z-40 p-3 rounded-full opacity-0 pointer-events-none"
                }
            }
            on:click=move |_| {
                window().scroll_to_with_x_and_y(0.0, 0.0);
            }
        >
            "↑"
        </button>
    }
}
