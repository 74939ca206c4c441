//! Contact section: three required fields posted to the mail relay.
//!
//! SYSTEM CONTEXT
//! ==============
//! All lifecycle rules live in `state::contact`. This component only wires
//! DOM events to the store and runs the relay call on the event loop; the
//! auto-revert timer is installed once by `app::App`.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::net::mail_relay::RelayHandle;
use crate::state::contact::{ContactState, FormField, FormStatus};
use crate::state::nav::Section;

#[component]
pub fn ContactSection() -> impl IntoView {
    let contact = expect_context::<RwSignal<ContactState>>();
    let relay = expect_context::<RelayHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_contact(contact, relay.clone());
    };

    let value_of = move |field: FormField| contact.with(|s| s.data().get(field).to_owned());

    view! {
        <section id=Section::Contact.anchor() class="contact">
            <h2 class="section-title">"Contact Us"</h2>
            <p class="contact__intro">"Ready to build or transform your website? Get in touch today!"</p>
            <form class="contact-form" on:submit=on_submit>
                <input
                    class="contact-form__input"
                    type="text"
                    name=FormField::Name.input_name()
                    placeholder="Your Name"
                    prop:value=move || value_of(FormField::Name)
                    on:input=move |ev| contact.update(|s| s.update_field(FormField::Name, event_target_value(&ev)))
                />
                <input
                    class="contact-form__input"
                    type="email"
                    name=FormField::Email.input_name()
                    placeholder="Your Email"
                    prop:value=move || value_of(FormField::Email)
                    on:input=move |ev| contact.update(|s| s.update_field(FormField::Email, event_target_value(&ev)))
                />
                <textarea
                    class="contact-form__input contact-form__input--message"
                    name=FormField::Message.input_name()
                    placeholder="Your Message"
                    rows="6"
                    prop:value=move || value_of(FormField::Message)
                    on:input=move |ev| contact.update(|s| s.update_field(FormField::Message, event_target_value(&ev)))
                ></textarea>

                <Show when=move || contact.with(|s| s.message().is_some())>
                    <div class=move || status_class(contact.with(ContactState::status))>
                        {move || contact.with(|s| s.message().unwrap_or_default().to_owned())}
                    </div>
                </Show>

                <button
                    class="nav-button contact-form__submit"
                    type="submit"
                    disabled=move || contact.with(ContactState::is_submit_disabled)
                >
                    {move || contact.with(ContactState::submit_label)}
                </button>
            </form>
        </section>
    }
}

fn status_class(status: FormStatus) -> &'static str {
    if status == FormStatus::Success {
        "contact-form__status contact-form__status--success"
    } else {
        "contact-form__status contact-form__status--error"
    }
}

/// Run one submit click: validate, then hand the request to the relay and
/// fold the outcome back into the store.
fn submit_contact(contact: RwSignal<ContactState>, relay: RelayHandle) {
    let request = match contact.try_update(ContactState::begin_submit) {
        Some(Ok(request)) => request,
        Some(Err(e)) => {
            log::debug!("submit blocked: {e}");
            return;
        }
        None => return,
    };

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let outcome = relay.send(&request).await;
            contact.update(|s| s.finish_submit(outcome));
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        drop((relay, request));
        contact.update(|s| s.finish_submit(Err(no_event_loop())));
    }
}

#[cfg(not(feature = "csr"))]
fn no_event_loop() -> crate::error::SubmissionError {
    crate::error::SubmissionError::Transport("no event loop outside the browser".to_owned())
}
