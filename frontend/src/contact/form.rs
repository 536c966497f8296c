//! Contact form state: draft fields, bot-check token and submission status.

use log::{error, info};
use thiserror::Error;

use crate::contact::relay::{RelayError, RelayPayload};
use crate::i18n::CopyText;

/// Measured in UTF-16 code units, the unit the browser's `maxlength` uses.
pub const NEED_MAX_LEN: usize = 500;

fn utf16_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Longest prefix of `text` within `max` UTF-16 units, cut on a char boundary.
fn truncate_utf16(text: String, max: usize) -> String {
    let mut units = 0;
    text.chars()
        .take_while(|c| {
            units += c.len_utf16();
            units <= max
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Company,
    Need,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub company: String,
    pub need: String,
}

impl ContactDraft {
    fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.need]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    SentOk,
    SentError,
}

/// Why a submit was refused before anything was sent.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SubmitRejection {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("bot check has not been completed")]
    MissingBotCheck,
    #[error("name, email and need are required")]
    MissingFields,
}

impl SubmitRejection {
    /// Message for the visitor. An in-flight resubmit is silently dropped.
    pub fn message(self, copy: &CopyText) -> Option<&'static str> {
        match self {
            SubmitRejection::InFlight => None,
            SubmitRejection::MissingBotCheck => Some(copy.alert_captcha),
            SubmitRejection::MissingFields => Some(copy.alert_required),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    token: Option<String>,
    state: SubmissionState,
    last_error: Option<RelayError>,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn last_error(&self) -> Option<&RelayError> {
        self.last_error.as_ref()
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn need_len(&self) -> usize {
        utf16_len(&self.draft.need)
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.draft.name = value,
            Field::Email => self.draft.email = value,
            Field::Company => self.draft.company = value,
            Field::Need => self.draft.need = truncate_utf16(value, NEED_MAX_LEN),
        }
    }

    pub fn token_issued(&mut self, token: String) {
        self.token = Some(token).filter(|t| !t.is_empty());
    }

    pub fn token_expired(&mut self) {
        self.token = None;
    }

    /// Checks the gates and, when they pass, moves to `Sending` and returns
    /// what to send. A rejection leaves the form untouched.
    pub fn begin_submit(&mut self) -> Result<RelayPayload, SubmitRejection> {
        if self.state == SubmissionState::Sending {
            return Err(SubmitRejection::InFlight);
        }
        let token = self.token.clone().ok_or(SubmitRejection::MissingBotCheck)?;
        if !self.draft.has_required_fields() {
            return Err(SubmitRejection::MissingFields);
        }

        info!("Dispatching contact request");
        self.state = SubmissionState::Sending;
        self.last_error = None;
        Ok(RelayPayload {
            from_name: self.draft.name.clone(),
            reply_to: self.draft.email.clone(),
            company: self.draft.company.clone(),
            need: self.draft.need.clone(),
            bot_check_response: token,
        })
    }

    /// Applies the relay outcome. Only the first outcome after a
    /// `begin_submit` has any effect.
    pub fn finish(&mut self, outcome: Result<(), RelayError>) {
        if self.state != SubmissionState::Sending {
            return;
        }
        match outcome {
            Ok(()) => {
                info!("Contact request delivered");
                self.state = SubmissionState::SentOk;
                self.draft = ContactDraft::default();
                self.token = None;
            }
            Err(e) => {
                error!("Contact request failed: {}", e);
                self.state = SubmissionState::SentError;
                self.last_error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::contact::relay::EmailRelay;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingRelay {
        calls: RefCell<Vec<RelayPayload>>,
        reject: bool,
    }

    impl EmailRelay for RecordingRelay {
        async fn send(&self, payload: &RelayPayload) -> Result<(), RelayError> {
            self.calls.borrow_mut().push(payload.clone());
            if self.reject {
                Err(RelayError::Rejected {
                    status: 400,
                    body: "The reCAPTCHA response is invalid".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Same sequence the contact section runs across its messages.
    async fn submit<R: EmailRelay>(
        form: &mut ContactForm,
        relay: &R,
    ) -> Result<(), SubmitRejection> {
        let payload = form.begin_submit()?;
        let outcome = relay.send(&payload).await;
        form.finish(outcome);
        Ok(())
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "Ana".into());
        form.set(Field::Email, "ana@x.com".into());
        form.set(Field::Need, "reduce incidents".into());
        form
    }

    #[test]
    fn missing_token_never_reaches_the_relay() {
        let relay = RecordingRelay::default();
        let mut form = filled();
        let before = form.clone();

        assert_eq!(
            block_on(submit(&mut form, &relay)),
            Err(SubmitRejection::MissingBotCheck)
        );
        assert!(relay.calls.borrow().is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn expired_token_blocks_submission() {
        let relay = RecordingRelay::default();
        let mut form = filled();
        form.token_issued("tok".into());
        form.token_expired();

        assert_eq!(
            block_on(submit(&mut form, &relay)),
            Err(SubmitRejection::MissingBotCheck)
        );
        assert!(relay.calls.borrow().is_empty());
    }

    #[test]
    fn blank_required_fields_are_rejected_locally() {
        for field in [Field::Name, Field::Email, Field::Need] {
            let relay = RecordingRelay::default();
            let mut form = filled();
            form.token_issued("tok".into());
            form.set(field, "   ".into());
            let before = form.clone();

            assert_eq!(
                block_on(submit(&mut form, &relay)),
                Err(SubmitRejection::MissingFields)
            );
            assert!(relay.calls.borrow().is_empty());
            assert_eq!(form, before, "{field:?}");
        }
    }

    #[test]
    fn company_is_optional() {
        let mut form = filled();
        form.token_issued("tok".into());
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn successful_send_dispatches_once_and_clears() {
        let relay = RecordingRelay::default();
        let mut form = filled();
        form.token_issued("tok-1".into());

        assert_eq!(block_on(submit(&mut form, &relay)), Ok(()));

        let calls = relay.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            RelayPayload {
                from_name: "Ana".into(),
                reply_to: "ana@x.com".into(),
                company: "".into(),
                need: "reduce incidents".into(),
                bot_check_response: "tok-1".into(),
            }
        );
        assert_eq!(form.state(), SubmissionState::SentOk);
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(!form.has_token());
    }

    #[test]
    fn rejected_send_keeps_the_draft() {
        let relay = RecordingRelay {
            reject: true,
            ..RecordingRelay::default()
        };
        let mut form = filled();
        form.set(Field::Company, "ACME".into());
        form.token_issued("tok".into());
        let entered = form.draft().clone();

        assert_eq!(block_on(submit(&mut form, &relay)), Ok(()));

        assert_eq!(relay.calls.borrow().len(), 1);
        assert_eq!(form.state(), SubmissionState::SentError);
        assert_eq!(form.draft(), &entered);
        assert!(matches!(form.last_error(), Some(RelayError::Rejected { status: 400, .. })));
    }

    #[test]
    fn resubmit_while_sending_is_a_no_op() {
        let mut form = filled();
        form.token_issued("tok".into());
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.begin_submit(), Err(SubmitRejection::InFlight));
        assert_eq!(form.state(), SubmissionState::Sending);
    }

    #[test]
    fn outcome_resolves_sending_exactly_once() {
        let mut form = filled();
        form.token_issued("tok".into());
        form.begin_submit().unwrap();
        form.finish(Err(RelayError::Network("offline".into())));
        form.finish(Ok(()));
        assert_eq!(form.state(), SubmissionState::SentError);
        assert_eq!(form.draft().name, "Ana");
    }

    #[test]
    fn retry_after_error_starts_a_new_attempt() {
        let mut form = filled();
        form.token_issued("tok".into());
        form.begin_submit().unwrap();
        form.finish(Err(RelayError::Config(ConfigError::Missing("XVAL_EMAILJS_PUBLIC_KEY"))));
        assert!(form.last_error().is_some());

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.state(), SubmissionState::Sending);
        assert!(form.last_error().is_none());
    }

    #[test]
    fn need_is_capped_at_500_units() {
        let mut form = ContactForm::default();
        form.set(Field::Need, "é".repeat(NEED_MAX_LEN + 20));
        assert_eq!(form.need_len(), NEED_MAX_LEN);
        assert_eq!(form.draft().need.chars().count(), NEED_MAX_LEN);
    }

    #[test]
    fn need_counts_astral_characters_as_two_units() {
        let mut form = ContactForm::default();
        form.set(Field::Need, "🚀".repeat(300));
        assert_eq!(form.need_len(), NEED_MAX_LEN);
        assert_eq!(form.draft().need.chars().count(), 250);

        // A surrogate pair that would straddle the limit is dropped whole.
        form.set(Field::Need, format!("{}🚀", "a".repeat(NEED_MAX_LEN - 1)));
        assert_eq!(form.need_len(), NEED_MAX_LEN - 1);
        assert!(form.draft().need.ends_with('a'));
    }

    #[test]
    fn rejection_messages_are_localized() {
        use crate::i18n::{EN, PT};
        assert_eq!(SubmitRejection::MissingBotCheck.message(&PT), Some(PT.alert_captcha));
        assert_eq!(SubmitRejection::MissingFields.message(&EN), Some(EN.alert_required));
        assert_eq!(SubmitRejection::InFlight.message(&EN), None);
    }
}
