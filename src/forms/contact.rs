use serde::Serialize;

/// The inputs of the contact form. Phone is the only optional one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// Raw values as typed by the user, before any trimming.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FieldValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Phone => self.phone = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }
}

/// At most one message per field, the first rule it violated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    name: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    subject: Option<String>,
    message: Option<String>,
}

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Subject => self.subject.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    fn set(&mut self, field: Field, message: String) {
        match field {
            Field::Name => self.name = Some(message),
            Field::Email => self.email = Some(message),
            Field::Phone => self.phone = Some(message),
            Field::Subject => self.subject = Some(message),
            Field::Message => self.message = Some(message),
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
            Field::Subject => self.subject = None,
            Field::Message => self.message = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        [&self.name, &self.email, &self.phone, &self.subject, &self.message]
            .iter()
            .filter(|message| message.is_some())
            .count()
    }
}

/// A well-formed, trimmed request ready to be sent.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Copy)]
enum Syntax {
    Freeform,
    Email,
}

struct FieldRule {
    field: Field,
    required: bool,
    min: usize,
    max: usize,
    syntax: Syntax,
    too_short: &'static str,
    too_long: &'static str,
    invalid: &'static str,
}

const RULES: [FieldRule; 5] = [
    FieldRule {
        field: Field::Name,
        required: true,
        min: 2,
        max: 100,
        syntax: Syntax::Freeform,
        too_short: "Name must be at least 2 characters",
        too_long: "Name must be less than 100 characters",
        invalid: "",
    },
    FieldRule {
        field: Field::Email,
        required: true,
        min: 1,
        max: 255,
        syntax: Syntax::Email,
        too_short: "Please enter a valid email address",
        too_long: "Email must be less than 255 characters",
        invalid: "Please enter a valid email address",
    },
    FieldRule {
        field: Field::Phone,
        required: false,
        min: 10,
        max: 20,
        syntax: Syntax::Freeform,
        too_short: "Please enter a valid phone number",
        too_long: "Phone number too long",
        invalid: "",
    },
    FieldRule {
        field: Field::Subject,
        required: true,
        min: 3,
        max: 200,
        syntax: Syntax::Freeform,
        too_short: "Subject must be at least 3 characters",
        too_long: "Subject must be less than 200 characters",
        invalid: "",
    },
    FieldRule {
        field: Field::Message,
        required: true,
        min: 10,
        max: 2000,
        syntax: Syntax::Freeform,
        too_short: "Message must be at least 10 characters",
        too_long: "Message must be less than 2000 characters",
        invalid: "",
    },
];

fn is_valid_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || domain.contains("..") {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !host.starts_with('.') && tld.len() >= 2,
        None => false,
    }
}

/// Checks a single field against its rule, yielding the trimmed value or the
/// first violated rule's message.
fn check(rule: &FieldRule, raw: &str) -> Result<String, String> {
    // Only the raw empty string counts as absent; a whitespace-only entry is
    // present and must satisfy the trimmed length bounds.
    if !rule.required && raw.is_empty() {
        return Ok(String::new());
    }
    let value = raw.trim();
    if let Syntax::Email = rule.syntax {
        if !is_valid_email(value) {
            return Err(rule.invalid.to_string());
        }
    }
    let length = value.chars().count();
    if length < rule.min {
        return Err(rule.too_short.to_string());
    }
    if length > rule.max {
        return Err(rule.too_long.to_string());
    }
    Ok(value.to_string())
}

/// Validates every field independently. All-or-nothing: either all fields pass
/// and a normalized request comes back, or the failing fields are mapped to
/// their messages and the passing ones are absent. Pure, so calling it twice
/// on the same input yields the same result.
pub fn validate(fields: &FieldValues) -> Result<ContactRequest, FieldErrors> {
    let mut trimmed = FieldValues::default();
    let mut errors = FieldErrors::default();
    for rule in &RULES {
        match check(rule, fields.get(rule.field)) {
            Ok(value) => trimmed.set(rule.field, value),
            Err(message) => errors.set(rule.field, message),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(ContactRequest {
        name: trimmed.name,
        email: trimmed.email,
        phone: (!trimmed.phone.is_empty()).then_some(trimmed.phone),
        subject: trimmed.subject,
        message: trimmed.message,
    })
}

/// Where the form is in its submit lifecycle. Never returns to `Idle` on its
/// own; a later submit attempt overwrites `Success`/`Error`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionError {
    pub message: String,
}

impl SubmissionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// The whole state of one contact form instance: current field values, the
/// per-field error map and the submit lifecycle. The page component owns one
/// of these and forwards events to it; everything here stays synchronous and
/// browser-free.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub fields: FieldValues,
    pub errors: FieldErrors,
    pub status: SubmissionStatus,
}

impl ContactForm {
    /// One keystroke: updates exactly one field and clears only that field's
    /// error, leaving the others intact.
    pub fn input(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.clear(field);
    }

    /// A submit attempt. Returns the validated request when the caller should
    /// start the round trip, after the status has moved to `Submitting`.
    /// Refuses while another submit is in flight. On validation failure the
    /// error map is replaced and the status is left alone.
    pub fn begin_submit(&mut self) -> Option<ContactRequest> {
        if self.status == SubmissionStatus::Submitting {
            return None;
        }
        match validate(&self.fields) {
            Ok(request) => {
                self.errors = FieldErrors::default();
                self.status = SubmissionStatus::Submitting;
                Some(request)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// The round trip came back. Success clears the form for the next visitor
    /// message; failure keeps everything the user typed.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmissionError>) {
        match outcome {
            Ok(()) => {
                self.fields = FieldValues::default();
                self.status = SubmissionStatus::Success;
            }
            Err(_) => {
                self.status = SubmissionStatus::Error;
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_fields() -> FieldValues {
        FieldValues {
            name: "Jo".into(),
            email: "jo@x.com".into(),
            phone: String::new(),
            subject: "General Inquiry".into(),
            message: "Hello there, testing.".into(),
        }
    }

    #[test]
    fn short_names_are_rejected() {
        for name in ["", "J", " ", "   ", " a "] {
            let mut fields = valid_fields();
            fields.name = name.into();
            let errors = validate(&fields).unwrap_err();
            assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
            assert_eq!(errors.len(), 1);
        }
    }

    #[test]
    fn whitespace_padding_is_trimmed_before_checks() {
        let mut fields = valid_fields();
        fields.name = "  Jo  ".into();
        let request = validate(&fields).unwrap();
        assert_eq!(request.name, "Jo");
    }

    #[test]
    fn invalid_emails_are_rejected() {
        for email in ["bad-email", "@x.com", "jo@", "jo@nodot", "jo@x.com extra", "jo@.com"] {
            let mut fields = valid_fields();
            fields.email = email.into();
            let errors = validate(&fields).unwrap_err();
            assert_eq!(errors.get(Field::Email), Some("Please enter a valid email address"));
        }
    }

    #[test]
    fn valid_emails_pass() {
        for email in ["jo@x.com", "a.b+c@mail.example.org", "x@sub.domain.co"] {
            let mut fields = valid_fields();
            fields.email = email.into();
            assert!(validate(&fields).is_ok(), "{email} should pass");
        }
    }

    #[test]
    fn overlong_email_is_rejected_after_syntax_passes() {
        let mut fields = valid_fields();
        fields.email = format!("{}@example.com", "a".repeat(250));
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::Email), Some("Email must be less than 255 characters"));
    }

    #[test]
    fn phone_is_optional_but_bounded_when_present() {
        let mut fields = valid_fields();
        fields.phone = String::new();
        assert!(validate(&fields).is_ok());
        assert_eq!(validate(&fields).unwrap().phone, None);

        fields.phone = "   ".into();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(
            errors.get(Field::Phone),
            Some("Please enter a valid phone number"),
            "whitespace-only phone is present and trims below the minimum",
        );

        fields.phone = "123456789".into();
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::Phone), Some("Please enter a valid phone number"));

        fields.phone = "1".repeat(21);
        let errors = validate(&fields).unwrap_err();
        assert_eq!(errors.get(Field::Phone), Some("Phone number too long"));

        fields.phone = "+2348038592620".into();
        assert_eq!(validate(&fields).unwrap().phone.as_deref(), Some("+2348038592620"));
    }

    #[test]
    fn validate_is_idempotent() {
        let good = valid_fields();
        assert_eq!(validate(&good), validate(&good));

        let mut bad = valid_fields();
        bad.email = "bad-email".into();
        assert_eq!(validate(&bad), validate(&bad));
    }

    #[test]
    fn all_failing_fields_are_reported_together() {
        let fields = FieldValues {
            name: "J".into(),
            email: "bad-email".into(),
            phone: String::new(),
            subject: "Hi".into(),
            message: "short".into(),
        };
        let mut form = ContactForm { fields, ..ContactForm::default() };
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.errors.len(), 4);
        assert_eq!(form.errors.get(Field::Name), Some("Name must be at least 2 characters"));
        assert_eq!(form.errors.get(Field::Email), Some("Please enter a valid email address"));
        assert_eq!(form.errors.get(Field::Subject), Some("Subject must be at least 3 characters"));
        assert_eq!(form.errors.get(Field::Message), Some("Message must be at least 10 characters"));
        assert_eq!(form.errors.get(Field::Phone), None);
        assert_eq!(form.status, SubmissionStatus::Idle, "submit never attempted");
    }

    #[test]
    fn editing_a_field_clears_only_its_own_error() {
        let mut form = ContactForm::default();
        assert_eq!(form.begin_submit(), None);
        assert!(form.errors.get(Field::Name).is_some());
        assert!(form.errors.get(Field::Email).is_some());

        form.input(Field::Name, "Jo".into());
        assert_eq!(form.errors.get(Field::Name), None);
        assert!(form.errors.get(Field::Email).is_some(), "other errors stay put");
        assert!(form.errors.get(Field::Message).is_some());
    }

    #[test]
    fn successful_round_trip_resets_the_form() {
        let mut form = ContactForm { fields: valid_fields(), ..ContactForm::default() };
        let request = form.begin_submit().expect("valid input should start a submit");
        assert_eq!(form.status, SubmissionStatus::Submitting);
        assert_eq!(request.name, "Jo");
        assert_eq!(request.phone, None);

        form.finish_submit(Ok(()));
        assert_eq!(form.status, SubmissionStatus::Success);
        assert_eq!(form.fields, FieldValues::default());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn failed_round_trip_keeps_entered_values() {
        let mut form = ContactForm { fields: valid_fields(), ..ContactForm::default() };
        form.begin_submit().expect("valid input");
        form.finish_submit(Err(SubmissionError::new("connection refused")));
        assert_eq!(form.status, SubmissionStatus::Error);
        assert_eq!(form.fields, valid_fields(), "nothing is cleared on failure");
    }

    #[test]
    fn no_second_submit_while_one_is_in_flight() {
        let mut form = ContactForm { fields: valid_fields(), ..ContactForm::default() };
        assert!(form.begin_submit().is_some());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status, SubmissionStatus::Submitting);
    }

    #[test]
    fn resubmit_is_allowed_after_an_error() {
        let mut form = ContactForm { fields: valid_fields(), ..ContactForm::default() };
        form.begin_submit().expect("valid input");
        form.finish_submit(Err(SubmissionError::new("503")));
        assert!(form.begin_submit().is_some(), "error state permits another attempt");
    }

    #[test]
    fn request_serializes_without_absent_phone() {
        let request = validate(&valid_fields()).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("phone").is_none());
        assert_eq!(json["name"], "Jo");
    }
}
