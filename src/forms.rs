use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;

/// Snapshot of a form's input state taken at submit time. Field names match
/// the markup (`fullName`, `email`, `phone`, ...); values are raw input text.
pub type FieldMap = BTreeMap<&'static str, String>;

pub const BOOKING_REQUIRED: [&'static str; 3] = ["fullName", "email", "phone"];

pub const BOOKING_SUBMIT_DELAY_MS: u32 = 1_500;
pub const NEWSLETTER_SUBMIT_DELAY_MS: u32 = 1_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    MissingField,
    InvalidEmail,
    InvalidPhone,
}

impl ValidationError {
    pub fn message(self) -> &'static str {
        match self {
            ValidationError::MissingField => "Please fill in all required fields.",
            ValidationError::InvalidEmail => "Please enter a valid email address.",
            ValidationError::InvalidPhone => "Please enter a valid phone number.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

fn field<'a>(fields: &'a FieldMap, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or("")
}

fn require_all(fields: &FieldMap, required: &[&str]) -> Result<(), ValidationError> {
    for name in required {
        if field(fields, name).trim().is_empty() {
            return Err(ValidationError::MissingField);
        }
    }
    Ok(())
}

/// `local@domain.tld` shape: one-or-more non-whitespace-non-`@` characters,
/// `@`, one-or-more, `.`, one-or-more.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot + 1 < domain.len(),
        None => false,
    }
}

/// Digits, whitespace, hyphens and parentheses only.
pub fn is_valid_phone(phone: &str) -> bool {
    !phone.is_empty()
        && phone
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')'))
}

/// Booking form rules, in fixed order: required fields, then email shape,
/// then phone character set. Stops at the first failure.
pub fn validate_booking(fields: &FieldMap) -> Result<(), ValidationError> {
    require_all(fields, &BOOKING_REQUIRED)?;
    if !is_valid_email(field(fields, "email")) {
        return Err(ValidationError::InvalidEmail);
    }
    if !is_valid_phone(field(fields, "phone")) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}

/// Newsletter signup validates the email alone.
pub fn validate_newsletter(email: &str) -> Result<(), ValidationError> {
    if email.trim().is_empty() {
        return Err(ValidationError::MissingField);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Validating,
    Rejected,
    Submitting,
    Succeeded,
    Failed,
}

/// Per-attempt submission lifecycle:
/// `Idle -> Validating -> (Rejected | Submitting) -> (Succeeded | Failed) -> Idle`.
///
/// `begin` doubles as the mutual-exclusion gate: while an attempt is in
/// flight it returns `false` and leaves the state untouched, so a second
/// submit event cannot overlap the first even if the disabled attribute
/// never applied.
#[derive(Debug)]
pub struct SubmitFlow {
    state: SubmitState,
}

impl SubmitFlow {
    pub fn new() -> Self {
        Self {
            state: SubmitState::Idle,
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmitState::Submitting
    }

    pub fn begin(&mut self) -> bool {
        if self.state == SubmitState::Idle {
            self.state = SubmitState::Validating;
            true
        } else {
            false
        }
    }

    pub fn reject(&mut self) {
        if self.state == SubmitState::Validating {
            self.state = SubmitState::Rejected;
        }
    }

    pub fn launch(&mut self) {
        if self.state == SubmitState::Validating {
            self.state = SubmitState::Submitting;
        }
    }

    pub fn finish(&mut self, ok: bool) {
        if self.state == SubmitState::Submitting {
            self.state = if ok {
                SubmitState::Succeeded
            } else {
                SubmitState::Failed
            };
        }
    }

    pub fn settle(&mut self) {
        if matches!(
            self.state,
            SubmitState::Rejected | SubmitState::Succeeded | SubmitState::Failed
        ) {
            self.state = SubmitState::Idle;
        }
    }
}

impl Default for SubmitFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitError(pub String);

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<(), SubmitError>>>>;

/// The backend collaborator: takes the field snapshot, resolves
/// success-or-failure after a bounded delay. The real transport slots in
/// behind this trait without touching validation or UI state.
pub trait SubmitBackend {
    fn submit(&self, fields: FieldMap) -> SubmitFuture;
}

/// Stand-in for the not-yet-built booking/newsletter API: waits out the
/// configured delay and always reports success.
pub struct StubBackend {
    delay_ms: u32,
}

impl StubBackend {
    pub fn booking() -> Self {
        Self {
            delay_ms: BOOKING_SUBMIT_DELAY_MS,
        }
    }

    pub fn newsletter() -> Self {
        Self {
            delay_ms: NEWSLETTER_SUBMIT_DELAY_MS,
        }
    }
}

impl SubmitBackend for StubBackend {
    fn submit(&self, fields: FieldMap) -> SubmitFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            log::info!(
                "form submitted ({} pending): {}",
                crate::config::get_booking_api_url(),
                serde_json::to_string(&fields).unwrap_or_default()
            );
            TimeoutFuture::new(delay_ms).await;
            Ok(())
        })
    }
}

/// Shared handle so components can take a backend as a prop with a stub
/// default. Equality is identity; swapping the backend re-renders the form.
#[derive(Clone)]
pub struct BackendHandle(pub Rc<dyn SubmitBackend>);

impl BackendHandle {
    pub fn booking_stub() -> Self {
        Self(Rc::new(StubBackend::booking()))
    }

    pub fn newsletter_stub() -> Self {
        Self(Rc::new(StubBackend::newsletter()))
    }
}

impl PartialEq for BackendHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_fields(full_name: &str, email: &str, phone: &str) -> FieldMap {
        FieldMap::from([
            ("fullName", full_name.to_string()),
            ("email", email.to_string()),
            ("phone", phone.to_string()),
        ])
    }

    #[test]
    fn valid_booking_passes() {
        let fields = booking_fields("Jane Doe", "jane@example.com", "(555) 123-4567");
        assert_eq!(validate_booking(&fields), Ok(()));
    }

    #[test]
    fn blank_required_field_short_circuits() {
        // Phone is also invalid, but the required check runs first and wins.
        let fields = booking_fields("", "x@x.com", "abc");
        assert_eq!(validate_booking(&fields), Err(ValidationError::MissingField));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let fields = booking_fields("   ", "jane@example.com", "555");
        assert_eq!(validate_booking(&fields), Err(ValidationError::MissingField));
    }

    #[test]
    fn absent_key_counts_as_missing() {
        let mut fields = booking_fields("Jane", "jane@example.com", "555");
        fields.remove("phone");
        assert_eq!(validate_booking(&fields), Err(ValidationError::MissingField));
    }

    #[test]
    fn email_checked_before_phone() {
        let fields = booking_fields("Jane", "not-an-email", "abc");
        assert_eq!(validate_booking(&fields), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("jane@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane@example."));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa mple.com"));
        assert!(!is_valid_email("jane@@example.com"));
    }

    #[test]
    fn phone_charset() {
        assert!(is_valid_phone("(555) 123-4567"));
        assert!(is_valid_phone("5551234567"));
        assert!(!is_valid_phone("555-CALL"));
        assert!(!is_valid_phone("+1 555 123"));
        assert!(!is_valid_phone("555.123.4567"));

        let fields = booking_fields("Jane", "jane@example.com", "555-CALL");
        assert_eq!(validate_booking(&fields), Err(ValidationError::InvalidPhone));
    }

    #[test]
    fn newsletter_rules() {
        assert_eq!(validate_newsletter("jane@example.com"), Ok(()));
        assert_eq!(validate_newsletter(""), Err(ValidationError::MissingField));
        assert_eq!(validate_newsletter("  "), Err(ValidationError::MissingField));
        assert_eq!(
            validate_newsletter("not-an-email"),
            Err(ValidationError::InvalidEmail)
        );
    }

    #[test]
    fn submit_flow_success_path() {
        let mut flow = SubmitFlow::new();
        assert_eq!(flow.state(), SubmitState::Idle);
        assert!(flow.begin());
        assert_eq!(flow.state(), SubmitState::Validating);
        flow.launch();
        assert!(flow.is_submitting());
        flow.finish(true);
        assert_eq!(flow.state(), SubmitState::Succeeded);
        flow.settle();
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn submit_flow_rejection_never_submits() {
        let mut flow = SubmitFlow::new();
        assert!(flow.begin());
        flow.reject();
        assert_eq!(flow.state(), SubmitState::Rejected);
        // A rejected attempt cannot be launched.
        flow.launch();
        assert_eq!(flow.state(), SubmitState::Rejected);
        flow.settle();
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn submit_flow_failure_restores_idle() {
        let mut flow = SubmitFlow::new();
        assert!(flow.begin());
        flow.launch();
        flow.finish(false);
        assert_eq!(flow.state(), SubmitState::Failed);
        flow.settle();
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn overlapping_attempts_are_refused() {
        let mut flow = SubmitFlow::new();
        assert!(flow.begin());
        flow.launch();
        assert!(!flow.begin());
        assert!(flow.is_submitting());
        flow.finish(true);
        assert!(!flow.begin());
        flow.settle();
        assert!(flow.begin());
    }

    #[test]
    fn validation_messages_match_site_copy() {
        assert_eq!(
            ValidationError::MissingField.message(),
            "Please fill in all required fields."
        );
        assert_eq!(
            ValidationError::InvalidEmail.message(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ValidationError::InvalidPhone.message(),
            "Please enter a valid phone number."
        );
    }
}
