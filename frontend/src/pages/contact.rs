use std::rc::Rc;

use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::recaptcha::ReCaptcha;
use crate::config::SiteConfig;
use crate::contact::form::{ContactForm, Field, SubmissionState, SubmitRejection, NEED_MAX_LEN};
use crate::contact::relay::{EmailJsRelay, EmailRelay, RelayError};
use crate::i18n::{CopyText, Locale};
use crate::scroll::Section;

#[derive(Properties, PartialEq)]
pub struct ContactSectionProps {
    pub locale: Locale,
}

pub enum ContactMsg {
    Edit(Field, String),
    TokenIssued(String),
    TokenExpired,
    Submit,
    Delivered(Result<(), RelayError>),
}

pub struct ContactSection {
    form: ContactForm,
    relay: Rc<EmailJsRelay>,
    site_key: Option<AttrValue>,
    rejection: Option<SubmitRejection>,
    widget_generation: u32,
}

impl ContactSection {
    fn text_input(
        &self,
        ctx: &Context<Self>,
        field: Field,
        kind: &'static str,
        placeholder: &'static str,
        value: &str,
    ) -> Html {
        let oninput = ctx.link().callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            ContactMsg::Edit(field, input.value())
        });
        html! {
            <input
                type={kind}
                class="form-input"
                {placeholder}
                value={value.to_string()}
                {oninput}
            />
        }
    }

    fn status_line(&self, copy: &CopyText) -> Html {
        if let Some(message) = self.rejection.and_then(|r| r.message(copy)) {
            return html! { <div class="form-status warning">{message}</div> };
        }
        match (self.form.state(), self.form.last_error()) {
            (SubmissionState::SentOk, _) => {
                html! { <div class="form-status ok">{copy.form_sent_ok}</div> }
            }
            (SubmissionState::SentError, Some(RelayError::Config(_))) => {
                html! { <div class="form-status error">{copy.form_config_error}</div> }
            }
            (SubmissionState::SentError, _) => {
                html! { <div class="form-status error">{copy.form_sent_error}</div> }
            }
            _ => html! {},
        }
    }
}

impl Component for ContactSection {
    type Message = ContactMsg;
    type Properties = ContactSectionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        let config = SiteConfig::from_build_env();
        let site_key = match config.recaptcha_site_key() {
            Ok(key) => Some(AttrValue::from(key.to_string())),
            Err(e) => {
                warn!("Contact form disabled: {}", e);
                None
            }
        };

        Self {
            form: ContactForm::default(),
            relay: Rc::new(EmailJsRelay::new(config)),
            site_key,
            rejection: None,
            widget_generation: 0,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactMsg::Edit(field, value) => {
                self.form.set(field, value);
                self.rejection = None;
                true
            }
            ContactMsg::TokenIssued(token) => {
                self.form.token_issued(token);
                self.rejection = None;
                true
            }
            ContactMsg::TokenExpired => {
                self.form.token_expired();
                true
            }
            ContactMsg::Submit => match self.form.begin_submit() {
                Ok(payload) => {
                    self.rejection = None;
                    let relay = self.relay.clone();
                    ctx.link().send_future(async move {
                        ContactMsg::Delivered(relay.send(&payload).await)
                    });
                    true
                }
                Err(SubmitRejection::InFlight) => false,
                Err(rejection) => {
                    self.rejection = Some(rejection);
                    true
                }
            },
            ContactMsg::Delivered(outcome) => {
                self.form.finish(outcome);
                if self.form.state() == SubmissionState::SentOk {
                    self.widget_generation = self.widget_generation.wrapping_add(1);
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let copy = ctx.props().locale.copy();
        let draft = self.form.draft();
        let sending = self.form.state() == SubmissionState::Sending;
        let can_send = !sending && self.form.has_token();

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactMsg::Submit
        });
        let on_need = ctx.link().callback(|e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            ContactMsg::Edit(Field::Need, input.value())
        });

        let bot_check = match &self.site_key {
            Some(site_key) => html! {
                <ReCaptcha
                    site_key={site_key.clone()}
                    reset_generation={self.widget_generation}
                    on_token={ctx.link().callback(ContactMsg::TokenIssued)}
                    on_expired={ctx.link().callback(|_: ()| ContactMsg::TokenExpired)}
                />
            },
            None => html! {
                <div class="form-status warning">{copy.captcha_unavailable}</div>
            },
        };

        html! {
            <section id={Section::Contact.id()} class="page-section">
                <div class="contact-panel">
                    <div class="contact-copy">
                        <h2 class="section-title">{copy.contact_title}</h2>
                        <p class="section-body">{copy.contact_body}</p>
                    </div>
                    <form class="contact-form" {onsubmit}>
                        { self.text_input(ctx, Field::Name, "text", copy.form_name, &draft.name) }
                        { self.text_input(ctx, Field::Email, "email", copy.form_email, &draft.email) }
                        { self.text_input(ctx, Field::Company, "text", copy.form_company, &draft.company) }
                        <div class="need-box">
                            <textarea
                                class="form-input"
                                placeholder={copy.form_need}
                                maxlength={NEED_MAX_LEN.to_string()}
                                value={draft.need.clone()}
                                oninput={on_need}
                            />
                            <div class="need-counter">
                                {format!("{}/{}", self.form.need_len(), NEED_MAX_LEN)}
                            </div>
                        </div>
                        <div class="bot-check">{bot_check}</div>
                        <button
                            type="submit"
                            class="btn btn-primary btn-block"
                            disabled={!can_send}
                            title={(!self.form.has_token()).then_some(copy.captcha_hint)}
                        >
                            { if sending { copy.form_sending } else { copy.form_send } }
                        </button>
                        { self.status_line(copy) }
                    </form>
                </div>
                <style>{r#"
.contact-panel {
    display: grid;
    grid-template-columns: 7fr 5fr;
    gap: 2rem;
    align-items: center;
    padding: 2.5rem;
    border: 1px solid rgba(255, 255, 255, 0.12);
    border-radius: 1.75rem;
    background:
        linear-gradient(180deg, rgba(43, 108, 255, 0.18), rgba(0, 0, 0, 0) 70%),
        radial-gradient(800px 380px at 20% 40%, rgba(182, 255, 74, 0.12), rgba(0, 0, 0, 0) 60%);
}
.contact-form {
    display: grid;
    gap: 0.75rem;
    padding: 1.5rem;
    border: 1px solid rgba(255, 255, 255, 0.1);
    border-radius: 1.5rem;
    background: #0f1118;
}
.need-box textarea {
    width: 100%;
    min-height: 140px;
    resize: none;
}
.need-counter {
    margin-top: 0.25rem;
    text-align: right;
    font-size: 0.75rem;
    font-weight: 600;
    color: rgba(255, 255, 255, 0.5);
}
.bot-check {
    display: flex;
    justify-content: flex-end;
}
.form-status {
    font-size: 0.9rem;
    font-weight: 600;
}
.form-status.ok {
    color: #b6ff4a;
}
.form-status.error {
    color: #f87171;
}
.form-status.warning {
    color: #fbbf24;
}
@media (max-width: 768px) {
    .contact-panel {
        grid-template-columns: 1fr;
        padding: 1.5rem;
    }
}
"#}</style>
            </section>
        }
    }
}
