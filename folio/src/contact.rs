//! Contact form state and its simulated submission.
//!
//! The form has no network transport. Submission goes through a
//! [`ContactTransport`], and the shipped [`SimulatedTransport`] waits a fixed
//! delay and reports success. A submit is split in two so the form is never
//! borrowed across the wait:
//!
//! 1. [`ContactForm::begin_submit`] checks the required fields, enters the
//!    loading state and snapshots the message.
//! 2. [`ContactForm::complete`] applies the transport's outcome.
//!
//! [`submit`] drives both halves around one transport call.

use std::{cell::RefCell, fmt, future::Future, time::Duration};

use thiserror::Error;
use tracing::{debug, info, warn};

pub const SUCCESS_MESSAGE: &str = "Thank you for reaching out! I will get back to you soon.";

/// Delay used by [`SimulatedTransport::default`].
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Mobile,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Mobile, Field::Message];

    /// The input's `name` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Mobile => "mobile",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn is_required(self) -> bool {
        !matches!(self, Field::Mobile)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(Field),
    #[error("a message is already being sent")]
    InFlight,
    #[error("sending failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    /// CSS modifier on `.status-message`.
    pub fn class(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub message: String,
}

/// Snapshot of the form taken when a submit begins.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    loading: bool,
    status: Option<Status>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Mobile => &self.fields.mobile,
            Field::Message => &self.fields.message,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Mobile => &mut self.fields.mobile,
            Field::Message => &mut self.fields.message,
        };
        *slot = value.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// First required field that is still empty.
    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.is_required() && self.field(*field).is_empty())
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && self.missing_field().is_none()
    }

    pub fn button_label(&self) -> &'static str {
        if self.loading { "Sending..." } else { "Send Message" }
    }

    /// Enters the loading state and returns what is being sent.
    ///
    /// On error the form is left untouched.
    pub fn begin_submit(&mut self) -> Result<ContactMessage, ContactError> {
        if self.loading {
            return Err(ContactError::InFlight);
        }
        if let Some(field) = self.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        self.loading = true;
        self.status = None;
        debug!("contact submit started");
        Ok(self.fields.clone())
    }

    /// Applies a transport outcome. Success clears the fields; failure keeps them.
    pub fn complete(&mut self, outcome: Result<(), ContactError>) {
        self.loading = false;
        match outcome {
            Ok(()) => {
                self.fields = ContactMessage::default();
                self.status = Some(Status {
                    kind: StatusKind::Success,
                    message: SUCCESS_MESSAGE.to_owned(),
                });
            }
            Err(err) => {
                warn!(error = %err, "contact submit failed");
                self.status = Some(Status {
                    kind: StatusKind::Error,
                    message: err.to_string(),
                });
            }
        }
    }
}

/// Delivers a contact message.
pub trait ContactTransport {
    fn send(&self, message: ContactMessage) -> impl Future<Output = Result<(), ContactError>>;
}

/// Waits a fixed delay and always succeeds. Nothing leaves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new(DEFAULT_SIMULATED_DELAY)
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, message: ContactMessage) -> Result<(), ContactError> {
        folio_ui::time::sleep(self.delay).await;
        info!(
            from = %message.name,
            email = %message.email,
            chars = message.message.chars().count(),
            "contact message accepted (simulated)"
        );
        Ok(())
    }
}

/// Runs one submit against `transport`. `form` is only borrowed outside the wait.
pub async fn submit(
    form: &RefCell<ContactForm>,
    transport: &impl ContactTransport,
) -> Result<(), ContactError> {
    let message = form.borrow_mut().begin_submit()?;
    let outcome = transport.send(message).await;
    form.borrow_mut().complete(outcome.clone());
    outcome
}

#[cfg(test)]
mod tests {
    use tokio::time::Instant;

    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Email, "ada@example.com");
        form.set_field(Field::Message, "Hello there");
        form
    }

    struct Failing;

    impl ContactTransport for Failing {
        async fn send(&self, _message: ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Transport("offline".into()))
        }
    }

    #[test]
    fn required_fields_gate_submission_and_mobile_is_optional() {
        let mut form = ContactForm::new();
        assert_eq!(form.missing_field(), Some(Field::Name));
        assert!(!form.can_submit());

        form.set_field(Field::Name, "Ada");
        form.set_field(Field::Message, "Hi");
        assert_eq!(form.missing_field(), Some(Field::Email));

        form.set_field(Field::Email, "ada@example.com");
        assert!(form.can_submit());
        assert_eq!(form.field(Field::Mobile), "");
    }

    #[test]
    fn rejected_begin_leaves_state_unchanged() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "ada@example.com");
        let before = form.clone();
        assert_eq!(form.begin_submit(), Err(ContactError::MissingField(Field::Name)));
        assert_eq!(form, before);
    }

    #[test]
    fn second_submit_while_in_flight_is_rejected() {
        let mut form = filled();
        let message = form.begin_submit().expect("first submit");
        assert_eq!(message.name, "Ada");
        assert!(form.is_loading());
        assert!(!form.can_submit());
        assert_eq!(form.button_label(), "Sending...");

        let during = form.clone();
        assert_eq!(form.begin_submit(), Err(ContactError::InFlight));
        assert_eq!(form, during);
    }

    #[test]
    fn begin_clears_previous_status() {
        let mut form = filled();
        form.complete(Err(ContactError::Transport("boom".into())));
        assert!(form.status().is_some());
        form.begin_submit().expect("submit");
        assert_eq!(form.status(), None);
    }

    #[test]
    fn field_names_match_inputs() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submit_waits_then_resets_form() {
        let form = RefCell::new(filled());
        form.borrow_mut().set_field(Field::Mobile, "+91-0000000000");
        let transport = SimulatedTransport::default();

        let start = Instant::now();
        submit(&form, &transport).await.expect("simulated send");
        assert!(start.elapsed() >= DEFAULT_SIMULATED_DELAY);

        let form = form.into_inner();
        assert!(!form.is_loading());
        assert_eq!(form.button_label(), "Send Message");
        assert_eq!(
            form.status(),
            Some(&Status {
                kind: StatusKind::Success,
                message: SUCCESS_MESSAGE.to_owned(),
            })
        );
        for field in Field::ALL {
            assert_eq!(form.field(field), "");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn form_is_loading_during_the_wait() {
        let form = RefCell::new(filled());
        let transport = SimulatedTransport::new(Duration::from_millis(200));

        let pending = submit(&form, &transport);
        tokio::pin!(pending);
        assert!(
            tokio::time::timeout(Duration::from_millis(100), pending.as_mut())
                .await
                .is_err()
        );
        assert!(form.borrow().is_loading());

        pending.await.expect("simulated send");
        assert!(!form.borrow().is_loading());
    }

    #[tokio::test]
    async fn transport_failure_keeps_fields() {
        let form = RefCell::new(filled());
        let err = submit(&form, &Failing).await.expect_err("failing transport");
        assert_eq!(err, ContactError::Transport("offline".into()));

        let form = form.borrow();
        assert_eq!(form.field(Field::Name), "Ada");
        assert_eq!(form.status().map(|s| s.kind), Some(StatusKind::Error));
        assert!(form.can_submit());
    }
}
