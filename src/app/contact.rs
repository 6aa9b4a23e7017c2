use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::contact::{ContactForm, Field, FieldStatus, FormState};

/// How long the success banner stays up before clearing itself.
const SUCCESS_BANNER_MS: u64 = 5000;

/// The submission collaborator: hands the validated payload to the server.
/// Resolves on acceptance, rejects on any delivery problem. No timeout is
/// enforced on this call.
#[server]
pub async fn send_message(form: ContactForm) -> Result<(), ServerFnError> {
    crate::contact::deliver(&form)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact" />
        <div class="max-w-2xl mx-auto w-full page-content">
            <div class="text-center my-8">
                <h1 class="text-3xl font-bold mb-4">"Let's Start a Conversation"</h1>
                <p class="text-muted">
                    "Have a question or want to work together? I'd love to hear from you."
                </p>
            </div>
            <div class="bg-brightBlack/30 p-6 lg:p-10 rounded-md border border-muted/30">
                <div class="mb-8 text-center">
                    <h2 class="text-2xl font-bold mb-2">"Send a Message"</h2>
                    <p class="text-sm text-muted">
                        "Fill out the form and I'll get back to you within 24 hours"
                    </p>
                </div>
                <ContactFormView />
            </div>
        </div>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    let (submitting, set_submitting) = signal(false);
    let (show_success, set_show_success) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);
    let success_timer = StoredValue::new_local(None::<TimeoutHandle>);

    // a pending banner timer must not fire into an unmounted component
    on_cleanup(move || {
        if let Some(handle) = success_timer.get_value() {
            handle.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        // the disabled control is the duplicate-submit guard, but events can
        // still race a re-render
        if submitting.get_untracked() {
            return;
        }
        let Some(payload) = form.write().begin_submit() else {
            return;
        };
        set_submitting.set(true);
        set_submit_error.set(None);
        spawn_local(async move {
            match send_message(payload).await {
                Ok(()) => {
                    form.write().reset();
                    set_show_success.set(true);
                    if let Some(handle) = success_timer.get_value() {
                        handle.clear();
                    }
                    let handle = set_timeout_with_handle(
                        move || set_show_success.set(false),
                        Duration::from_millis(SUCCESS_BANNER_MS),
                    )
                    .ok();
                    success_timer.set_value(handle);
                }
                Err(err) => {
                    log::error!("contact form submission failed: {err}");
                    set_submit_error.set(Some(
                        "Something went wrong sending your message. Please try again.".to_string(),
                    ));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit>
            <div class="space-y-6">
                <div class="grid md:grid-cols-2 gap-6">
                    <FieldInput field=Field::Name form=form placeholder="John Doe" />
                    <FieldInput
                        field=Field::Email
                        form=form
                        input_type="email"
                        placeholder="john@example.com"
                    />
                </div>
                <FieldInput field=Field::Subject form=form placeholder="How can I help you?" />
                <FieldTextarea
                    field=Field::Message
                    form=form
                    placeholder="Tell me about your project... (minimum 20 characters)"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full py-4 px-6 font-semibold rounded-md bg-cyan/20 text-cyan border border-cyan/30 hover:bg-cyan/30 transition-all duration-200 disabled:opacity-50 disabled:cursor-not-allowed"
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </button>
                {move || {
                    show_success
                        .get()
                        .then(|| {
                            view! {
                                <div class="p-4 border-2 border-green rounded-md bg-green/10">
                                    <p class="font-semibold text-green">
                                        "Message sent successfully!"
                                    </p>
                                    <p class="text-sm text-muted">
                                        "I'll get back to you within 24 hours."
                                    </p>
                                </div>
                            }
                        })
                }}
                {move || {
                    submit_error
                        .get()
                        .map(|msg| {
                            view! {
                                <div class="p-4 border-2 border-red rounded-md bg-red/10">
                                    <p class="font-semibold text-red">{msg}</p>
                                </div>
                            }
                        })
                }}
            </div>
        </form>
    }
}

fn field_class(status: FieldStatus) -> &'static str {
    match status {
        FieldStatus::Invalid => {
            "w-full px-4 py-3 rounded-md border-2 border-red bg-red/10 text-foreground focus:outline-none focus:ring-2 focus:ring-red/30"
        }
        FieldStatus::Valid => {
            "w-full px-4 py-3 rounded-md border-2 border-green bg-green/10 text-foreground focus:outline-none focus:ring-2 focus:ring-green/30"
        }
        FieldStatus::Default => {
            "w-full px-4 py-3 rounded-md border border-muted/30 bg-background text-foreground focus:outline-none focus:ring-2 focus:ring-cyan/30"
        }
    }
}

#[component]
fn FieldInput(
    field: Field,
    form: RwSignal<FormState>,
    #[prop(optional)] input_type: Option<&'static str>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label for=field.key() class="block text-sm font-semibold">
                {field.label()}
                " *"
            </label>
            <input
                id=field.key()
                name=field.key()
                type=input_type.unwrap_or("text")
                placeholder=placeholder
                prop:value=move || form.with(|state| state.value(field).to_string())
                on:input=move |ev| form.write().edit(field, event_target_value(&ev))
                on:blur=move |_| form.write().blur(field)
                class=move || field_class(form.with(|state| state.status(field)))
            />
            <FieldError field=field form=form />
        </div>
    }
}

#[component]
fn FieldTextarea(
    field: Field,
    form: RwSignal<FormState>,
    placeholder: &'static str,
) -> impl IntoView {
    let char_count = move || form.with(|state| state.value(field).chars().count());
    let counter_class = move || {
        let count = char_count();
        if count > 950 {
            "text-xs font-medium text-red"
        } else if count > 800 {
            "text-xs font-medium text-yellow"
        } else {
            "text-xs font-medium text-muted"
        }
    };

    view! {
        <div class="space-y-2">
            <div class="flex justify-between items-center">
                <label for=field.key() class="block text-sm font-semibold">
                    {field.label()}
                    " *"
                </label>
                <span class=counter_class>{move || format!("{}/1000", char_count())}</span>
            </div>
            <textarea
                id=field.key()
                name=field.key()
                rows=6
                maxlength=1000
                placeholder=placeholder
                prop:value=move || form.with(|state| state.value(field).to_string())
                on:input=move |ev| form.write().edit(field, event_target_value(&ev))
                on:blur=move |_| form.write().blur(field)
                class=move || field_class(form.with(|state| state.status(field)))
            ></textarea>
            <FieldError field=field form=form />
        </div>
    }
}

#[component]
fn FieldError(field: Field, form: RwSignal<FormState>) -> impl IntoView {
    view! {
        {move || {
            form.with(|state| state.visible_error(field).map(str::to_string))
                .map(|msg| view! { <p class="text-sm text-red">{msg}</p> })
        }}
    }
}
