//! Contact form draft and its submit rule
//!
//! Submission never leaves the page: a successful submit only raises the
//! `submitted` flag so the confirmation notice can render.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Valid e-mail address as accepted by `<input type="email">`.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile email pattern")
});

/// Returns true when `value` has the shape of an e-mail address.
///
/// Surrounding whitespace is ignored, matching the value sanitization browsers
/// apply to e-mail inputs.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value.trim())
}

/// One of the four inputs of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Message,
}

impl Field {
    /// All fields in rendering order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Message];

    /// Value of the input's `name` and `id` attributes.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Message => "message",
        }
    }

    /// Resolve an input's `name` attribute back to a field.
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "Email address",
            Field::Phone => "Phone number",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "John Doe",
            Field::Email => "john@gmail.com",
            Field::Phone => "20 111 2345 6789",
            Field::Message => "How can we help?",
        }
    }

    /// Whether the browser must see a value before it fires submit.
    pub fn required(self) -> bool {
        matches!(self, Field::Name | Field::Email)
    }

    /// `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Name | Field::Phone | Field::Message => "text",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Message)
    }
}

/// In-memory values of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Check the constraints the browser enforces before submit.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.name.is_empty() {
            return Err(SubmitError::MissingName);
        }
        if self.email.trim().is_empty() {
            return Err(SubmitError::MissingEmail);
        }
        if !is_valid_email(&self.email) {
            return Err(SubmitError::MalformedEmail);
        }
        Ok(())
    }
}

/// Why a submit attempt was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("name is required")]
    MissingName,

    #[error("email is required")]
    MissingEmail,

    #[error("email address is malformed")]
    MalformedEmail,
}

/// The contact form: a draft plus the one-way `submitted` flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitted: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Accept the draft. Fields are kept as typed and the flag stays raised
    /// for the rest of the form's lifetime.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        self.draft.validate()?;
        self.submitted = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        form.update_field(Field::Email, "john@example.com");
        form
    }

    #[test]
    fn test_new_form_is_empty() {
        let form = ContactForm::new();
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let mut form = ContactForm::new();
        let writes = [
            (Field::Name, "J"),
            (Field::Email, "j@"),
            (Field::Name, "Jo"),
            (Field::Message, "line one\nline two"),
            (Field::Phone, "555"),
            (Field::Email, "jo@example.com"),
            (Field::Name, "Joan"),
            (Field::Phone, ""),
        ];
        for (field, value) in writes {
            form.update_field(field, value);
        }

        assert_eq!(form.draft().get(Field::Name), "Joan");
        assert_eq!(form.draft().get(Field::Email), "jo@example.com");
        assert_eq!(form.draft().get(Field::Phone), "");
        assert_eq!(form.draft().get(Field::Message), "line one\nline two");
    }

    #[test]
    fn test_update_touches_only_one_field() {
        let mut form = filled();
        let before = form.draft().clone();
        form.update_field(Field::Phone, "20 111 2345 6789");

        assert_eq!(form.draft().name, before.name);
        assert_eq!(form.draft().email, before.email);
        assert_eq!(form.draft().message, before.message);
        assert_eq!(form.draft().phone, "20 111 2345 6789");
    }

    #[test]
    fn test_submit_success() {
        let mut form = filled();
        assert_eq!(form.submit(), Ok(()));
        assert!(form.is_submitted());
        assert_eq!(form.draft().name, "John Doe");
        assert_eq!(form.draft().email, "john@example.com");
    }

    #[test]
    fn test_submit_requires_name() {
        let mut form = ContactForm::new();
        form.update_field(Field::Email, "john@example.com");
        assert_eq!(form.submit(), Err(SubmitError::MissingName));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submit_requires_email() {
        let mut form = ContactForm::new();
        form.update_field(Field::Name, "John Doe");
        assert_eq!(form.submit(), Err(SubmitError::MissingEmail));
        assert!(!form.is_submitted());

        form.update_field(Field::Email, "   ");
        assert_eq!(form.submit(), Err(SubmitError::MissingEmail));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submit_rejects_malformed_email() {
        let mut form = filled();
        form.update_field(Field::Email, "john at example.com");
        assert_eq!(form.submit(), Err(SubmitError::MalformedEmail));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_submitted_is_never_reset() {
        let mut form = filled();
        form.submit().unwrap();

        form.update_field(Field::Name, "");
        form.update_field(Field::Message, "follow-up");
        assert!(form.is_submitted());

        assert_eq!(form.submit(), Err(SubmitError::MissingName));
        assert!(form.is_submitted());
    }

    #[test]
    fn test_optional_fields_do_not_block_submit() {
        let mut form = filled();
        form.update_field(Field::Phone, "");
        form.update_field(Field::Message, "");
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_email_shapes() {
        for ok in [
            "john@example.com",
            "a@b",
            "first.last+tag@sub.example.co.in",
            "  padded@example.com  ",
        ] {
            assert!(is_valid_email(ok), "{ok} should be accepted");
        }
        for bad in [
            "",
            "john",
            "@example.com",
            "john@",
            "john@@example.com",
            "john doe@example.com",
            "john@-example.com",
            "john@example..com",
        ] {
            assert!(!is_valid_email(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_internationalised_domain_is_refused() {
        let mut form = filled();
        form.update_field(Field::Email, "kunde@bücher.de");
        assert_eq!(form.submit(), Err(SubmitError::MalformedEmail));
        assert!(!form.is_submitted());
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("company"), None);
    }

    #[test]
    fn test_required_fields() {
        let required: Vec<_> = Field::ALL.into_iter().filter(|f| f.required()).collect();
        assert_eq!(required, vec![Field::Name, Field::Email]);
        assert_eq!(Field::Email.input_type(), "email");
        assert_eq!(Field::Phone.input_type(), "text");
        assert!(Field::Message.is_multiline());
    }
}
