use gloo_net::http::Request;
use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::animations::{HeadingAlign, Reveal, RevealDirection, SectionHeading};
use crate::config;
use crate::content;
use crate::forms::contact::{
    ContactForm, ContactRequest, Field, SubmissionError, SubmissionStatus,
};

/// Posts the validated request to the form endpoint. Any non-2xx status or
/// network failure counts as a submission failure; the caller keeps the
/// entered values around for a retry.
async fn send_contact_request(request: ContactRequest) -> Result<(), SubmissionError> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(&request)
        .map_err(|e| SubmissionError::new(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmissionError::new(e.to_string()))?;
    if response.ok() {
        Ok(())
    } else {
        Err(SubmissionError::new(format!(
            "contact endpoint returned status {}",
            response.status()
        )))
    }
}

pub enum ContactFormMsg {
    Input(Field, String),
    Submit,
    Resolved(Result<(), SubmissionError>),
}

/// The form section. All validation and status bookkeeping lives in
/// `forms::contact`; this component only wires DOM events to it and runs the
/// round trip.
pub struct ContactFormSection {
    form: ContactForm,
}

impl Component for ContactFormSection {
    type Message = ContactFormMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { form: ContactForm::default() }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactFormMsg::Input(field, value) => {
                self.form.input(field, value);
                true
            }
            ContactFormMsg::Submit => {
                if let Some(request) = self.form.begin_submit() {
                    ctx.link().send_future(async move {
                        ContactFormMsg::Resolved(send_contact_request(request).await)
                    });
                }
                true
            }
            ContactFormMsg::Resolved(outcome) => {
                match &outcome {
                    Ok(()) => info!("contact request delivered"),
                    Err(e) => warn!("contact request failed: {}", e.message),
                }
                self.form.finish_submit(outcome);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactFormMsg::Submit
        });

        html! {
            <form class="contact-form" {onsubmit}>
                <div class="form-row">
                    { self.view_input(ctx, Field::Name, "Full Name", "text", "John Doe", true) }
                    { self.view_input(ctx, Field::Email, "Email Address", "email", "john@example.com", true) }
                </div>
                <div class="form-row">
                    { self.view_input(ctx, Field::Phone, "Phone Number", "tel", "+234 800 000 0000", false) }
                    { self.view_subject(ctx) }
                </div>
                { self.view_message(ctx) }
                {
                    match self.form.status {
                        SubmissionStatus::Success => html! {
                            <div class="form-banner success">
                                {"Thank you! Your message has been sent successfully. We'll get back to you soon."}
                            </div>
                        },
                        SubmissionStatus::Error => html! {
                            <div class="form-banner error">
                                {"Oops! Something went wrong. Please try again later."}
                            </div>
                        },
                        _ => html! {},
                    }
                }
                <button type="submit" class="submit-button" disabled={self.form.is_submitting()}>
                    if self.form.is_submitting() {
                        <span class="loading-spinner"></span>{" Sending..."}
                    } else {
                        {"Send Message ➤"}
                    }
                </button>
            </form>
        }
    }
}

impl ContactFormSection {
    fn view_error(&self, field: Field) -> Html {
        match self.form.errors.get(field) {
            Some(message) => html! { <p class="field-error">{"⚠ "}{ message }</p> },
            None => html! {},
        }
    }

    fn field_class(&self, field: Field) -> Classes {
        classes!(
            "form-input",
            self.form.errors.get(field).map(|_| "invalid"),
        )
    }

    fn view_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        label: &str,
        kind: &'static str,
        placeholder: &'static str,
        required: bool,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Input(field, input.value())
        });
        html! {
            <div class="form-field">
                <label>
                    { label }
                    if required { <span class="required-mark">{" *"}</span> }
                </label>
                <input
                    type={kind}
                    class={self.field_class(field)}
                    value={self.form.fields.get(field).to_string()}
                    {placeholder}
                    {oninput}
                />
                { self.view_error(field) }
            </div>
        }
    }

    fn view_subject(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let select: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Input(Field::Subject, select.value())
        });
        html! {
            <div class="form-field">
                <label>{"Subject"}<span class="required-mark">{" *"}</span></label>
                <select class={self.field_class(Field::Subject)} {oninput}>
                    <option value="" selected={self.form.fields.subject.is_empty()}>
                        {"Select a subject"}
                    </option>
                    { for content::SUBJECT_OPTIONS.iter().map(|option| html! {
                        <option value={*option} selected={self.form.fields.subject == *option}>
                            { option }
                        </option>
                    }) }
                </select>
                { self.view_error(Field::Subject) }
            </div>
        }
    }

    fn view_message(&self, ctx: &Context<Self>) -> Html {
        let oninput = ctx.link().callback(|e: InputEvent| {
            let area: HtmlInputElement = e.target_unchecked_into();
            ContactFormMsg::Input(Field::Message, area.value())
        });
        html! {
            <div class="form-field">
                <label>{"Message"}<span class="required-mark">{" *"}</span></label>
                <textarea
                    rows="6"
                    class={self.field_class(Field::Message)}
                    value={self.form.fields.message.clone()}
                    placeholder="Tell us how we can help you..."
                    {oninput}
                />
                { self.view_error(Field::Message) }
            </div>
        }
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <div class="contact-page">
            <section class="page-hero contact-hero">
                <div class="container">
                    <span class="section-badge">{"Contact Us"}</span>
                    <h1>{"Get in "}<span class="accent">{"Touch"}</span></h1>
                    <p>
                        {"Have a question or want to partner with us? We'd love to hear from you. \
                          Reach out and let's start a conversation."}
                    </p>
                </div>
            </section>

            <section class="contact-info-section">
                <div class="container info-grid">
                    { for content::CONTACT_INFO.iter().enumerate().map(|(index, info)| html! {
                        <Reveal delay_ms={(index as u32) * 100}>
                            <div class="info-card">
                                <div class="info-icon">{ info.icon }</div>
                                <h3>{ info.title }</h3>
                                { for info.details.iter().map(|detail| html! {
                                    <p>{ detail }</p>
                                }) }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section class="contact-form-section">
                <div class="container split-grid">
                    <Reveal direction={RevealDirection::Left}>
                        <SectionHeading
                            badge="Send a Message"
                            title="We're Here to Help"
                            description="Fill out the form and our team will get back to you within 24 hours."
                            align={HeadingAlign::Left}
                        />
                        <ContactFormSection />
                    </Reveal>
                    <Reveal direction={RevealDirection::Right}>
                        <div class="contact-aside">
                            <div class="map-frame">
                                <iframe
                                    src="https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d253682.62283124574!2d3.28395955!3d6.548055099999999!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x103b8b2ae68280c1%3A0xdc9e87a367c3d9cb!2sLagos%2C%20Nigeria!5e0!3m2!1sen!2sus!4v1707000000000!5m2!1sen!2sus"
                                    title="MMM Worldwide Location - Lagos, Nigeria"
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                />
                            </div>
                            <div class="quick-contact">
                                <h3>{"Need Immediate Assistance?"}</h3>
                                <p>
                                    {"Our customer support team is available during business hours \
                                      to help you with any urgent inquiries."}
                                </p>
                                <a href="tel:+2348038592620">{"📞 +234 803 859 2620"}</a>
                                <a href="mailto:support@mmmworldwide.com">{"✉️ support@mmmworldwide.com"}</a>
                                <a href={content::whatsapp_url()} target="_blank" rel="noopener noreferrer">
                                    {"💬 Chat on WhatsApp"}
                                </a>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </section>

            <style>
                {r#"
                .contact-hero {
                    background: linear-gradient(135deg, #0d1b2a 0%, #1b263b 100%);
                }
                .contact-info-section {
                    padding: 3rem 0;
                }
                .info-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }
                .info-card {
                    background: #fff;
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 1.5rem;
                    text-align: center;
                    height: 100%;
                }
                .info-card .info-icon {
                    font-size: 1.8rem;
                    margin-bottom: 0.75rem;
                }
                .info-card h3 {
                    margin-bottom: 0.5rem;
                    font-size: 1.05rem;
                }
                .info-card p {
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .contact-form-section {
                    padding: 4rem 0;
                    background: #f3f4f6;
                }
                .contact-form .form-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1.5rem;
                }
                .contact-form .form-field {
                    margin-bottom: 1.25rem;
                    display: flex;
                    flex-direction: column;
                }
                .contact-form label {
                    font-weight: 600;
                    margin-bottom: 0.4rem;
                    font-size: 0.9rem;
                }
                .required-mark {
                    color: #dc2626;
                }
                .form-input {
                    border: 1px solid #d1d5db;
                    border-radius: 10px;
                    padding: 0.7rem 0.9rem;
                    font-size: 1rem;
                    background: #fff;
                    transition: border-color 0.2s ease;
                }
                .form-input:focus {
                    outline: none;
                    border-color: #d4a017;
                }
                .form-input.invalid {
                    border-color: #dc2626;
                }
                .field-error {
                    color: #dc2626;
                    font-size: 0.85rem;
                    margin-top: 0.35rem;
                }
                .form-banner {
                    border-radius: 12px;
                    padding: 1rem;
                    margin-bottom: 1.25rem;
                    font-weight: 500;
                }
                .form-banner.success {
                    background: rgba(22, 163, 74, 0.1);
                    border: 1px solid rgba(22, 163, 74, 0.3);
                    color: #15803d;
                }
                .form-banner.error {
                    background: rgba(220, 38, 38, 0.1);
                    border: 1px solid rgba(220, 38, 38, 0.3);
                    color: #b91c1c;
                }
                .submit-button {
                    background: #d4a017;
                    color: #0d1b2a;
                    border: none;
                    border-radius: 10px;
                    padding: 0.9rem 2rem;
                    font-size: 1rem;
                    font-weight: 700;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .submit-button:hover:not(:disabled) {
                    background: #e6b325;
                }
                .submit-button:disabled {
                    opacity: 0.6;
                    cursor: not-allowed;
                }
                .loading-spinner {
                    display: inline-block;
                    width: 14px;
                    height: 14px;
                    border: 2px solid rgba(13, 27, 42, 0.3);
                    border-radius: 50%;
                    border-top-color: #0d1b2a;
                    animation: spin 1s ease-in-out infinite;
                }
                @keyframes spin { to { transform: rotate(360deg); } }
                .contact-aside .map-frame {
                    border-radius: 20px;
                    overflow: hidden;
                    border: 1px solid #e5e7eb;
                    height: 380px;
                    margin-bottom: 1.5rem;
                }
                .contact-aside .map-frame iframe {
                    width: 100%;
                    height: 100%;
                    border: 0;
                }
                .quick-contact {
                    background: #0d1b2a;
                    border-radius: 20px;
                    padding: 2rem;
                    color: #fff;
                }
                .quick-contact h3 {
                    margin-bottom: 0.75rem;
                }
                .quick-contact p {
                    color: rgba(255, 255, 255, 0.7);
                    margin-bottom: 1.25rem;
                }
                .quick-contact a {
                    display: block;
                    color: #fff;
                    text-decoration: none;
                    margin-bottom: 0.75rem;
                }
                .quick-contact a:hover {
                    color: #d4a017;
                }
                @media (max-width: 768px) {
                    .contact-form .form-row {
                        grid-template-columns: 1fr;
                        gap: 0;
                    }
                }
                "#}
            </style>
        </div>
    }
}
