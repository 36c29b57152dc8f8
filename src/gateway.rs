//! Outbound contact-message boundary.
//!
//! The page never talks to a real transport: [`StubGateway`] simulates a
//! send and always reports success. The [`ContactGateway`] seam exists so a
//! real transport can be swapped in without touching the form component —
//! until one is wired up, submitted messages go nowhere.

use std::time::Duration;

use leptos::leptos_dom::helpers::set_timeout;
use thiserror::Error;

/// A validated contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// No real transport is configured; a wired-up gateway maps transport
    /// failures onto this error so the form can offer a retry.
    #[error("message could not be delivered")]
    DeliveryFailed,
}

pub type SendResult = Result<(), SendError>;

/// Collaborator that carries a message out of the process.
///
/// Completion is reported through a one-shot callback, which matches the
/// single-threaded event-driven model of the page and lets tests drive the
/// result without timers.
pub trait ContactGateway: Send + Sync {
    fn send(&self, message: ContactMessage, done: Box<dyn FnOnce(SendResult) + Send>);
}

/// How long the stub pretends to be talking to a server.
pub const STUB_SEND_DELAY_MS: u64 = 2000;

/// Simulated transport: drops the message and reports success after a fixed
/// delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubGateway;

impl ContactGateway for StubGateway {
    fn send(&self, _message: ContactMessage, done: Box<dyn FnOnce(SendResult) + Send>) {
        set_timeout(move || done(Ok(())), Duration::from_millis(STUB_SEND_DELAY_MS));
    }
}

/// One-shot outcome notice shown after a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed,
}

/// Transient state of the contact form.
///
/// Fields are cleared only on confirmed success; a failed attempt keeps
/// them so the user can retry without retyping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub message: String,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl ContactForm {
    /// Native browser validation is the first line; this is the model-side
    /// re-check before the gateway is invoked.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && self.email.contains('@')
            && !self.message.trim().is_empty()
    }

    pub fn payload(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            service: self.service.clone(),
            message: self.message.clone(),
        }
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.notice = None;
    }

    pub fn finish_submit(&mut self, result: &SendResult) {
        self.submitting = false;
        match result {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.company.clear();
                self.service.clear();
                self.message.clear();
                self.notice = Some(Notice::Sent);
            }
            Err(_) => {
                self.notice = Some(Notice::Failed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Records the message and hands the completion callback back to the
    /// test instead of running a timer.
    #[derive(Default)]
    struct FakeGateway {
        sent: Arc<Mutex<Vec<ContactMessage>>>,
        pending: Arc<Mutex<Vec<Box<dyn FnOnce(SendResult) + Send>>>>,
    }

    impl ContactGateway for FakeGateway {
        fn send(&self, message: ContactMessage, done: Box<dyn FnOnce(SendResult) + Send>) {
            self.sent.lock().unwrap().push(message);
            self.pending.lock().unwrap().push(done);
        }
    }

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            company: "Acme".into(),
            service: "Brand Design".into(),
            message: "Let's talk about a rebrand.".into(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn required_fields_gate_validity() {
        assert!(filled_form().is_valid());

        let mut form = filled_form();
        form.name.clear();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.email = "not-an-address".into();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.message = "   ".into();
        assert!(!form.is_valid());

        let mut form = filled_form();
        form.company.clear();
        form.service.clear();
        assert!(form.is_valid(), "company and service are optional");
    }

    #[test]
    fn successful_submit_clears_fields_and_shows_sent_notice() {
        let gateway = FakeGateway::default();
        let mut form = filled_form();

        form.begin_submit();
        assert!(form.submitting);
        assert_eq!(form.notice, None);

        gateway.send(form.payload(), Box::new(|_| {}));
        assert_eq!(gateway.sent.lock().unwrap().len(), 1);
        assert_eq!(gateway.sent.lock().unwrap()[0].name, "Jane Doe");

        // deliver the result the way the component would
        let done = gateway.pending.lock().unwrap().pop().unwrap();
        done(Ok(()));
        form.finish_submit(&Ok(()));

        assert!(!form.submitting);
        assert_eq!(form.notice, Some(Notice::Sent));
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.company.is_empty());
        assert!(form.service.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn failed_submit_keeps_fields_for_retry() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(&Err(SendError::DeliveryFailed));

        assert!(!form.submitting, "form must be re-enabled after a failure");
        assert_eq!(form.notice, Some(Notice::Failed));
        assert_eq!(form.name, "Jane Doe");
        assert_eq!(form.message, "Let's talk about a rebrand.");
    }

    #[test]
    fn resubmit_clears_previous_notice() {
        let mut form = filled_form();
        form.begin_submit();
        form.finish_submit(&Err(SendError::DeliveryFailed));
        assert_eq!(form.notice, Some(Notice::Failed));

        form.begin_submit();
        assert_eq!(form.notice, None);
    }
}
