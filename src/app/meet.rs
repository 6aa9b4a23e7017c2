use chrono::{Datelike, Local, NaiveDate};
use leptos::{html, prelude::*};
use leptos_meta::Title;
use leptos_use::on_click_outside;

use crate::schedule::{
    calendar_url, days_in_month, first_weekday, time_slots, Slot, DAY_INITIALS, DURATIONS, MONTHS,
};

#[component]
pub fn MeetPage() -> impl IntoView {
    let (duration, set_duration) = signal(30u32);
    let (date, set_date) = signal(None::<NaiveDate>);
    let (slot, set_slot) = signal(None::<Slot>);
    let (link, set_link) = signal(None::<String>);

    let ready = move || date.get().is_some() && slot.get().is_some();

    let generate = move |_| {
        let (Some(date), Some(slot)) = (date.get_untracked(), slot.get_untracked()) else {
            return;
        };
        set_link.set(calendar_url(date, slot, duration.get_untracked()));
    };

    view! {
        <Title text="Schedule a Meeting" />
        <div class="max-w-3xl mx-auto w-full page-content">
            <div class="text-center my-8">
                <h1 class="text-3xl font-bold mb-4">"Let's Make It Worth It"</h1>
                <p class="text-muted max-w-2xl mx-auto">
                    "Since you've made it this far, why not take a moment to connect? "
                    "Pick a time that works for you, and we'll instantly set up a video call."
                </p>
            </div>
            <div class="bg-brightBlack/30 p-6 lg:p-8 rounded-md border border-muted/30 space-y-8">
                <div class="space-y-4">
                    <label class="text-xs font-bold text-muted uppercase tracking-wider block">
                        "Select Duration"
                    </label>
                    <div class="grid grid-cols-2 gap-3 sm:gap-4">
                        {DURATIONS
                            .iter()
                            .map(|&minutes| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if duration.get() == minutes {
                                                "px-4 py-3 rounded-md bg-cyan/20 text-cyan border border-cyan/30"
                                            } else {
                                                "px-4 py-3 rounded-md text-muted border border-muted/30 hover:text-foreground transition-colors duration-200"
                                            }
                                        }
                                        on:click=move |_| set_duration.set(minutes)
                                    >
                                        {format!("{minutes} Mins")}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6">
                    <div class="space-y-3">
                        <label class="text-xs font-bold text-muted uppercase tracking-wider block">
                            "Date"
                        </label>
                        <DatePicker date=date set_date=set_date />
                    </div>
                    <div class="space-y-3">
                        <label class="text-xs font-bold text-muted uppercase tracking-wider block">
                            "Time"
                        </label>
                        <TimePicker slot=slot set_slot=set_slot />
                    </div>
                </div>
                <div class="pt-4">
                    {move || match link.get() {
                        None => {
                            view! {
                                <button
                                    type="button"
                                    disabled=move || !ready()
                                    class="w-full py-4 px-6 font-semibold rounded-md bg-cyan/20 text-cyan border border-cyan/30 hover:bg-cyan/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                                    on:click=generate
                                >
                                    "Generate Meeting Link"
                                </button>
                            }
                                .into_any()
                        }
                        Some(url) => {
                            view! {
                                <div class="space-y-3">
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="block text-center w-full py-4 px-6 font-semibold rounded-md bg-green/20 text-green border border-green/30 hover:bg-green/30 transition-all duration-200"
                                    >
                                        "Open in Google Calendar"
                                    </a>
                                    <button
                                        type="button"
                                        class="w-full py-2 text-sm text-muted hover:text-foreground transition-colors duration-200"
                                        on:click=move |_| set_link.set(None)
                                    >
                                        "Reset & Create New"
                                    </button>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn DatePicker(
    date: ReadSignal<Option<NaiveDate>>,
    set_date: WriteSignal<Option<NaiveDate>>,
) -> impl IntoView {
    let today = Local::now().date_naive();
    let (open, set_open) = signal(false);
    // month is 1-based throughout, matching chrono
    let (view_year, set_view_year) = signal(today.year());
    let (view_month, set_view_month) = signal(today.month());
    let container = NodeRef::<html::Div>::new();
    let _ = on_click_outside(container, move |_| set_open.set(false));

    let prev_month = move |_| {
        if view_month.get_untracked() == 1 {
            set_view_month.set(12);
            set_view_year.update(|year| *year -= 1);
        } else {
            set_view_month.update(|month| *month -= 1);
        }
    };
    let next_month = move |_| {
        if view_month.get_untracked() == 12 {
            set_view_month.set(1);
            set_view_year.update(|year| *year += 1);
        } else {
            set_view_month.update(|month| *month += 1);
        }
    };

    let display = move || {
        date.get()
            .map(|d| d.format("%b %-d, %Y").to_string())
            .unwrap_or_else(|| "Select Date".to_string())
    };

    view! {
        <div class="relative w-full" node_ref=container>
            <button
                type="button"
                class=move || picker_button_class(open.get() || date.get().is_some())
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "📅 "
                {display}
            </button>
            {move || {
                open.get()
                    .then(|| {
                        let year = view_year.get();
                        let month = view_month.get();
                        let blanks = first_weekday(year, month);
                        let days = 1..=days_in_month(year, month);
                        view! {
                            <div class="absolute bottom-full left-0 mb-2 w-full sm:w-80 p-4 rounded-md bg-background border border-muted/30 shadow-lg z-50">
                                <div class="flex items-center justify-between mb-4">
                                    <button
                                        type="button"
                                        aria-label="Previous month"
                                        class="p-1 rounded-full hover:bg-brightBlack/30"
                                        on:click=prev_month
                                    >
                                        "‹"
                                    </button>
                                    <span class="font-bold text-sm">
                                        {format!("{} {}", MONTHS[(month - 1) as usize], year)}
                                    </span>
                                    <button
                                        type="button"
                                        aria-label="Next month"
                                        class="p-1 rounded-full hover:bg-brightBlack/30"
                                        on:click=next_month
                                    >
                                        "›"
                                    </button>
                                </div>
                                <div class="grid grid-cols-7 gap-1">
                                    {DAY_INITIALS
                                        .iter()
                                        .map(|initial| {
                                            view! {
                                                <div class="text-center text-[10px] font-bold text-muted py-1">
                                                    {*initial}
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    {(0..blanks).map(|_| view! { <div></div> }).collect_view()}
                                    {days
                                        .map(|day| {
                                            let this = NaiveDate::from_ymd_opt(year, month, day);
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if this.is_some() && date.get() == this {
                                                            "h-8 w-8 rounded-full text-xs bg-cyan text-background font-medium"
                                                        } else {
                                                            "h-8 w-8 rounded-full text-xs hover:bg-brightBlack/30 font-medium"
                                                        }
                                                    }
                                                    on:click=move |_| {
                                                        set_date.set(this);
                                                        set_open.set(false);
                                                    }
                                                >
                                                    {day}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[component]
fn TimePicker(
    slot: ReadSignal<Option<Slot>>,
    set_slot: WriteSignal<Option<Slot>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let container = NodeRef::<html::Div>::new();
    let _ = on_click_outside(container, move |_| set_open.set(false));

    let display = move || {
        slot.get()
            .map(|s| s.to_string())
            .unwrap_or_else(|| "Select Time".to_string())
    };

    view! {
        <div class="relative w-full" node_ref=container>
            <button
                type="button"
                class=move || picker_button_class(open.get() || slot.get().is_some())
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "🕐 "
                {display}
            </button>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="absolute bottom-full left-0 mb-2 w-full p-2 rounded-md bg-background border border-muted/30 shadow-lg z-50">
                                <div class="text-[10px] font-bold text-muted uppercase tracking-wider px-2 py-1 border-b border-muted/30 mb-2">
                                    "Available Slots"
                                </div>
                                <div class="max-h-48 overflow-y-auto flex flex-col gap-1">
                                    {time_slots()
                                        .into_iter()
                                        .map(|s| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class=move || {
                                                        if slot.get() == Some(s) {
                                                            "w-full text-left px-3 py-2 rounded-md text-sm bg-cyan text-background"
                                                        } else {
                                                            "w-full text-left px-3 py-2 rounded-md text-sm text-muted hover:bg-brightBlack/30"
                                                        }
                                                    }
                                                    on:click=move |_| {
                                                        set_slot.set(Some(s));
                                                        set_open.set(false);
                                                    }
                                                >
                                                    {s.to_string()}
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}

fn picker_button_class(active: bool) -> &'static str {
    if active {
        "w-full flex items-center gap-3 px-4 py-3 rounded-md border border-cyan/50 bg-cyan/10 text-cyan text-sm font-medium"
    } else {
        "w-full flex items-center gap-3 px-4 py-3 rounded-md border border-muted/30 text-muted text-sm font-medium hover:border-cyan/30 transition-colors duration-200"
    }
}
