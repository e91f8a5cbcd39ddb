//! Contact form
//!
//! Sending is simulated: a valid submit only shows the confirmation notice.
//! Nothing is transmitted and the typed values stay in place.

use leptos::*;

use crate::model::{self, Field};

const INPUT_CLASS: &str = "rounded-xl border border-blue-200 bg-white px-3 py-2 outline-none focus:ring-2 focus:ring-blue-600";

pub const CONFIRMATION: &str = "Thanks! We’ll be in touch shortly.";

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = create_rw_signal(model::ContactForm::new());
    view! { <ContactFormBody form=form/> }
}

/// Form markup bound to an existing form state.
#[component]
pub fn ContactFormBody(form: RwSignal<model::ContactForm>) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        form.update(|form| match form.submit() {
            Ok(()) => tracing::debug!("contact form submitted"),
            Err(err) => tracing::warn!(%err, "contact form submit refused"),
        });
    };

    view! {
        <form on:submit=on_submit class="mx-auto mt-10 max-w-2xl grid gap-4">
            <div class="grid gap-4 sm:grid-cols-2">
                <FieldInput field=Field::Name form=form/>
                <FieldInput field=Field::Email form=form/>
            </div>

            <FieldInput field=Field::Phone form=form/>
            <FieldInput field=Field::Message form=form/>

            <div class="flex items-center justify-between">
                <p class="text-xs text-blue-700">"We’ll never share your information."</p>
                <button
                    type="submit"
                    class="rounded-xl bg-gradient-to-r from-blue-600 to-blue-800 px-5 py-2.5 text-sm font-medium text-white shadow"
                >
                    "Send message"
                </button>
            </div>

            <Show when=move || form.with(model::ContactForm::is_submitted)>
                <div
                    role="status"
                    class="rounded-xl border border-emerald-500/30 bg-emerald-500/10 p-3 text-sm text-emerald-700"
                >
                    {CONFIRMATION}
                </div>
            </Show>
        </form>
    }
}

#[component]
fn FieldInput(field: Field, form: RwSignal<model::ContactForm>) -> impl IntoView {
    let value = move || form.with(|form| form.draft().get(field).to_string());
    let on_input = move |ev: ev::Event| {
        form.update(|form| form.update_field(field, event_target_value(&ev)));
    };

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                placeholder=field.placeholder()
                class=INPUT_CLASS
                on:input=on_input
                prop:value=value
            ></textarea>
        }
        .into_view()
    } else {
        view! {
            <input
                id=field.name()
                name=field.name()
                type=field.input_type()
                required=field.required()
                placeholder=field.placeholder()
                class=INPUT_CLASS
                on:input=on_input
                prop:value=value
            />
        }
        .into_view()
    };

    view! {
        <div class="grid gap-2">
            <label for=field.name() class="text-sm">{field.label()}</label>
            {control}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render(form: model::ContactForm) -> String {
        leptos::ssr::render_to_string(move || {
            let form = create_rw_signal(form);
            view! { <ContactFormBody form=form/> }
        })
        .to_string()
    }

    #[test]
    fn test_fresh_form_has_no_notice() {
        let html = render(model::ContactForm::new());
        assert!(!html.contains("Thanks!"));
        assert_eq!(html.matches("required").count(), 2);
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("<textarea"));
    }

    #[test]
    fn test_submitted_form_shows_notice_and_keeps_fields() {
        let mut form = model::ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        form.update_field(Field::Email, "john@example.com");
        form.submit().unwrap();

        let html = render(form);
        assert!(html.contains("Thanks!"));
        assert!(html.contains("<form"));
        assert!(html.contains("Send message"));
    }

    #[test]
    fn test_refused_submit_keeps_notice_hidden() {
        let mut form = model::ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        assert!(form.submit().is_err());

        let html = render(form);
        assert!(!html.contains("Thanks!"));
    }
}
