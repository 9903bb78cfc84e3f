use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::state::{DemoRequest, Field, SubmissionStatus};

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub form: DemoRequest,
    pub status: SubmissionStatus,
    /// `(input name, new value)` on every keystroke.
    pub on_input: Callback<(String, String)>,
    pub on_submit: Callback<()>,
    pub on_copy_email: Callback<()>,
}

/// Banner text under the form, `(css class, message)`.
pub fn status_message(status: SubmissionStatus) -> Option<(&'static str, String)> {
    match status {
        SubmissionStatus::Idle | SubmissionStatus::Sending(_) => None,
        SubmissionStatus::Success(_) => Some((
            "form-status success",
            "Thanks! Your demo request is on its way. We'll be in touch within one business day.".to_string(),
        )),
        SubmissionStatus::Error(_) => Some((
            "form-status error",
            format!("Something went wrong sending your request. Please email us directly at {}.", CONTACT_EMAIL),
        )),
    }
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let ContactProps { form, status, on_input, on_submit, on_copy_email } = props;

    let oninput = {
        let on_input = on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_input.emit((input.name(), input.value()));
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                on_input.emit((area.name(), area.value()));
            }
        })
    };

    let onsubmit = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let copy_email = {
        let on_copy_email = on_copy_email.clone();
        Callback::from(move |_: MouseEvent| on_copy_email.emit(()))
    };

    let sending = status.is_sending();

    html! {
        <section class="cta-section" id="contact">
            <div class="cta-content">
                <h2 class="cta-title">{"Ready to Modernize Your Practice?"}</h2>
                <p class="cta-subtitle">
                    {"Join surgical teams managing 300+ patients with enterprise reliability."}
                </p>

                <form class="demo-form" {onsubmit}>
                    <div class="form-row">
                        <input
                            type="text"
                            name={Field::Name.input_name()}
                            placeholder="Full name"
                            required={true}
                            value={form.name.clone()}
                            oninput={oninput.clone()}
                        />
                        <input
                            type="email"
                            name={Field::Email.input_name()}
                            placeholder="Work email"
                            required={true}
                            value={form.email.clone()}
                            oninput={oninput.clone()}
                        />
                    </div>
                    <input
                        type="text"
                        name={Field::Organization.input_name()}
                        placeholder="Practice or organization"
                        required={true}
                        value={form.organization.clone()}
                        oninput={oninput.clone()}
                    />
                    <textarea
                        name={Field::Message.input_name()}
                        rows="4"
                        placeholder="Tell us about your clinics (optional)"
                        value={form.message.clone()}
                        oninput={oninput}
                    />
                    <button type="submit" class="btn-primary-large" disabled={sending}>
                        { if sending { "Sending..." } else { "Schedule Demo" } }
                    </button>
                    {
                        if let Some((class, message)) = status_message(*status) {
                            html! { <div class={class}>{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                </form>

                <div class="cta-buttons">
                    <button class="btn-secondary-large" onclick={copy_email}>
                        {format!("Copy {}", CONTACT_EMAIL)}
                    </button>
                </div>
                <div class="cta-note">
                    {"Trusted by multi-clinic surgical practices • Deployed May–July 2025"}
                </div>
            </div>
        </section>
    }
}
