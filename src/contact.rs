use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The four contact-form fields, in display order.
pub const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Stable lowercase identifier, used for input `id`/`name` attributes.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ContactError {
    #[error("{field}: {message}")]
    Invalid { field: &'static str, message: String },
    #[error("message could not be delivered")]
    Delivery,
}

/// Validates a single field. Returns the first failing rule's message, or
/// `None` when the value is acceptable. Pure - same input, same verdict.
pub fn validate(field: Field, value: &str) -> Option<String> {
    let trimmed = value.trim();
    match field {
        Field::Name => {
            if trimmed.is_empty() {
                Some("Name is required".to_string())
            } else if trimmed.chars().count() < 2 {
                Some("Name must be at least 2 characters".to_string())
            } else if !trimmed
                .chars()
                .all(|c| c.is_ascii_alphabetic() || c.is_whitespace() || c == '\'' || c == '-')
            {
                Some("Name can only contain letters".to_string())
            } else {
                None
            }
        }
        Field::Email => {
            if trimmed.is_empty() {
                Some("Email is required".to_string())
            } else if !is_valid_email(trimmed) {
                Some("Please enter a valid email".to_string())
            } else {
                None
            }
        }
        Field::Subject => {
            if trimmed.is_empty() {
                Some("Subject is required".to_string())
            } else if trimmed.chars().count() < 5 {
                Some("Subject must be at least 5 characters".to_string())
            } else {
                None
            }
        }
        Field::Message => {
            if trimmed.is_empty() {
                Some("Message is required".to_string())
            } else if trimmed.chars().count() < 20 {
                Some("Message must be at least 20 characters".to_string())
            } else {
                None
            }
        }
    }
}

// Minimal local@domain.tld shape, deliberately not RFC 5322: no whitespace,
// exactly one '@', non-empty local part, and a dot strictly inside the domain.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // the domain needs a dot that is neither its first nor last character
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[derive(Debug, Clone, Default, PartialEq)]
struct FieldMap<T> {
    name: T,
    email: T,
    subject: T,
    message: T,
}

impl<T> FieldMap<T> {
    fn get(&self, field: Field) -> &T {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }
}

/// Visual state of a single field, driving border/icon styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Default,
    Valid,
    Invalid,
}

/// Field values plus the per-field error and touched bookkeeping that decides
/// what the form view shows. Lives only as long as the contact page is
/// mounted - nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: ContactForm,
    errors: FieldMap<Option<String>>,
    touched: FieldMap<bool>,
}

impl FormState {
    pub fn value(&self, field: Field) -> &str {
        self.values.get(field)
    }

    /// Change event: store the new value and clear any standing error for the
    /// field. The value is NOT re-validated here - the error only comes back
    /// on the next blur or submit attempt.
    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        *self.errors.get_mut(field) = None;
    }

    /// Blur event: mark the field touched and re-validate it alone.
    pub fn blur(&mut self, field: Field) {
        *self.touched.get_mut(field) = true;
        *self.errors.get_mut(field) = validate(field, self.values.get(field));
    }

    /// Submit-time validation pass: every field is marked touched and
    /// re-validated into a fresh error map. Returns whether the form is clean
    /// and may be handed to the submission call.
    pub fn validate_all(&mut self) -> bool {
        let mut ok = true;
        for field in FIELDS {
            *self.touched.get_mut(field) = true;
            let error = validate(field, self.values.get(field));
            ok &= error.is_none();
            *self.errors.get_mut(field) = error;
        }
        ok
    }

    /// Submit gate: runs the full validation pass and, only when it comes
    /// back clean, hands out a copy of the values for the submission call.
    /// A dirty form returns `None` with its errors showing and nothing is
    /// sent.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        self.validate_all().then(|| self.values.clone())
    }

    /// Clears values, errors, and touched marks back to a pristine form.
    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    /// The error to display, gated on the field having been touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.touched.get(field) {
            return None;
        }
        self.errors.get(field).as_deref()
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        if !self.touched.get(field) {
            FieldStatus::Default
        } else if self.errors.get(field).is_some() {
            FieldStatus::Invalid
        } else {
            FieldStatus::Valid
        }
    }
}

/// Server-side acceptance of a submitted form. Re-runs the validator over the
/// payload (the client already did, but the boundary is untrusted) and logs
/// the accepted message. Stand-in for real delivery.
#[cfg(feature = "ssr")]
pub async fn deliver(form: &ContactForm) -> Result<(), ContactError> {
    for field in FIELDS {
        if let Some(message) = validate(field, form.get(field)) {
            return Err(ContactError::Invalid {
                field: field.label(),
                message,
            });
        }
    }
    tracing::info!(
        from = %form.email,
        subject = %form.subject,
        "contact message accepted"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_valid_state() -> FormState {
        let mut state = FormState::default();
        state.edit(Field::Name, "Mary-Jane O'Neil".to_string());
        state.edit(Field::Email, "mj@example.com".to_string());
        state.edit(Field::Subject, "Project inquiry".to_string());
        state.edit(
            Field::Message,
            "I would like to talk about a new project.".to_string(),
        );
        state
    }

    /// One submit attempt against a synchronous send double, shaped like the
    /// form view's submit handler: gate, send, reset on success.
    fn run_submit<F>(state: &mut FormState, mut send: F) -> bool
    where
        F: FnMut(&ContactForm) -> Result<(), ContactError>,
    {
        let Some(payload) = state.begin_submit() else {
            return false;
        };
        match send(&payload) {
            Ok(()) => {
                state.reset();
                true
            }
            Err(_) => false,
        }
    }

    #[test]
    fn test_every_field_requires_a_value() {
        for field in FIELDS {
            let err = validate(field, "");
            assert!(err.is_some(), "{:?} should require a value", field);
            assert!(err.unwrap().contains("required"));
            // whitespace-only trims down to empty
            assert!(validate(field, "   ").is_some());
        }
    }

    #[test]
    fn test_name_rules() {
        assert!(validate(Field::Name, "J").is_some());
        assert!(validate(Field::Name, "John123").is_some());
        assert!(validate(Field::Name, "John_Doe").is_some());
        assert_eq!(validate(Field::Name, "Mary-Jane O'Neil"), None);
        assert_eq!(validate(Field::Name, "  John Doe  "), None);
    }

    #[test]
    fn test_email_rules() {
        assert!(validate(Field::Email, "not-an-email").is_some());
        assert!(validate(Field::Email, "a@b").is_some());
        assert!(validate(Field::Email, "a@b.").is_some());
        assert!(validate(Field::Email, "a@.co").is_some());
        assert!(validate(Field::Email, "@b.co").is_some());
        assert!(validate(Field::Email, "a@b@c.co").is_some());
        assert!(validate(Field::Email, "a b@c.co").is_some());
        assert_eq!(validate(Field::Email, "a@b.co"), None);
        assert_eq!(validate(Field::Email, "first.last@sub.example.com"), None);
    }

    #[test]
    fn test_subject_and_message_length_rules() {
        assert!(validate(Field::Subject, "Hey").is_some());
        assert_eq!(validate(Field::Subject, "Hello there"), None);
        assert!(validate(Field::Message, "short").is_some());
        assert_eq!(validate(Field::Message, "exactly twenty chars"), None);
    }

    #[test]
    fn test_validator_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(
                validate(Field::Email, "nope"),
                Some("Please enter a valid email".to_string())
            );
            assert_eq!(validate(Field::Email, "a@b.co"), None);
        }
    }

    #[test]
    fn test_errors_hidden_until_touched() {
        let state = FormState::default();
        for field in FIELDS {
            assert_eq!(state.visible_error(field), None);
            assert_eq!(state.status(field), FieldStatus::Default);
        }
    }

    #[test]
    fn test_blur_marks_touched_and_validates() {
        let mut state = FormState::default();
        state.edit(Field::Email, "bad".to_string());
        assert_eq!(state.visible_error(Field::Email), None);

        state.blur(Field::Email);
        assert_eq!(
            state.visible_error(Field::Email),
            Some("Please enter a valid email")
        );
        assert_eq!(state.status(Field::Email), FieldStatus::Invalid);

        state.edit(Field::Email, "a@b.co".to_string());
        state.blur(Field::Email);
        assert_eq!(state.visible_error(Field::Email), None);
        assert_eq!(state.status(Field::Email), FieldStatus::Valid);
    }

    #[test]
    fn test_editing_clears_error_without_revalidating() {
        let mut state = FormState::default();
        state.blur(Field::Name);
        assert!(state.visible_error(Field::Name).is_some());

        // Still invalid, but the slot clears immediately on change and only
        // comes back on the next blur or submit.
        state.edit(Field::Name, "J".to_string());
        assert_eq!(state.visible_error(Field::Name), None);

        state.blur(Field::Name);
        assert_eq!(
            state.visible_error(Field::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_submit_with_empty_form_populates_every_error() {
        let mut state = FormState::default();
        assert!(!state.validate_all());
        for field in FIELDS {
            assert!(state.visible_error(field).is_some(), "{:?}", field);
            assert_eq!(state.status(field), FieldStatus::Invalid);
        }
    }

    #[test]
    fn test_submit_with_valid_form_is_clean() {
        let mut state = filled_valid_state();
        assert!(state.validate_all());
        for field in FIELDS {
            assert_eq!(state.visible_error(field), None);
            assert_eq!(state.status(field), FieldStatus::Valid);
        }
    }

    #[test]
    fn test_empty_form_never_reaches_the_send_call() {
        let mut calls = 0;
        let mut state = FormState::default();
        let sent = run_submit(&mut state, |_| {
            calls += 1;
            Ok(())
        });
        assert!(!sent);
        assert_eq!(calls, 0);
        for field in FIELDS {
            assert!(state.visible_error(field).is_some(), "{:?}", field);
        }
    }

    #[test]
    fn test_valid_form_sends_exactly_once_and_resets() {
        let mut calls = 0;
        let mut state = filled_valid_state();
        let sent = run_submit(&mut state, |payload| {
            calls += 1;
            assert_eq!(payload.email, "mj@example.com");
            assert_eq!(payload.subject, "Project inquiry");
            Ok(())
        });
        assert!(sent);
        assert_eq!(calls, 1);
        // resolution wipes values, errors, and touched marks
        assert_eq!(state, FormState::default());
        for field in FIELDS {
            assert_eq!(state.status(field), FieldStatus::Default);
        }
    }

    #[test]
    fn test_failed_send_keeps_the_entered_values() {
        let mut calls = 0;
        let mut state = filled_valid_state();
        let sent = run_submit(&mut state, |_| {
            calls += 1;
            Err(ContactError::Delivery)
        });
        assert!(!sent);
        assert_eq!(calls, 1);
        assert_eq!(state.value(Field::Email), "mj@example.com");
        assert_eq!(state.value(Field::Message).is_empty(), false);
    }
}
