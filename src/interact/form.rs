//! Contact form validation.
//!
//! Validation is synchronous and local; an accepted submission is only
//! acknowledged on the page, never sent anywhere.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Id of the inline error element for this field
    pub fn error_element(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        })
    }
}

/// Inline error messages keyed by field
pub type FieldErrors = BTreeMap<Field, &'static str>;

/// Raw field values as typed by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Check every field and collect one message per invalid field.
///
/// The email pattern is tested against the untrimmed value.
pub fn validate(input: &FormInput) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if input.name.trim().is_empty() {
        errors.insert(Field::Name, "Please enter your name");
    }

    if input.email.trim().is_empty() {
        errors.insert(Field::Email, "Please enter your email");
    } else if !email_pattern().is_match(&input.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    if input.message.trim().is_empty() {
        errors.insert(Field::Message, "Please enter your message");
    }

    errors
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The form was valid; carries the values that were submitted
    Accepted(FormInput),
    Rejected(FieldErrors),
}

/// Form state as shown on the page: current values, visible errors and the
/// success indicator.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: FormInput,
    errors: FieldErrors,
    success_visible: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormInput {
        &self.values
    }

    pub fn set_values(&mut self, values: FormInput) {
        self.values = values;
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn success_visible(&self) -> bool {
        self.success_visible
    }

    pub fn hide_success(&mut self) {
        self.success_visible = false;
    }

    /// Handle a submit attempt with the current values. Previous errors and
    /// the success indicator are cleared first. On success the fields are
    /// reset and the success indicator shown.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors.clear();
        self.success_visible = false;

        let errors = validate(&self.values);
        if !errors.is_empty() {
            self.errors = errors.clone();
            return SubmitOutcome::Rejected(errors);
        }

        let submitted = std::mem::take(&mut self.values);
        self.success_visible = true;
        SubmitOutcome::Accepted(submitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_and_bad_email_give_two_errors() {
        let errors = validate(&FormInput::new("", "bad", "hello"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Name], "Please enter your name");
        assert_eq!(errors[&Field::Email], "Please enter a valid email address");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&FormInput::new("  ", " \t", "\n"));
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[&Field::Email], "Please enter your email");
        assert_eq!(errors[&Field::Message], "Please enter your message");
    }

    #[test]
    fn email_shapes() {
        for ok in ["ana@x.com", "a.b+c@sub.domain.org"] {
            assert!(validate(&FormInput::new("A", ok, "m")).is_empty(), "{}", ok);
        }
        for bad in ["ana@x", "ana@@x.com", "an a@x.com", "@x.com", " ana@x.com"] {
            assert!(validate(&FormInput::new("A", bad, "m")).contains_key(&Field::Email), "{}", bad);
        }
    }

    #[test]
    fn accepted_submit_clears_form_and_shows_success() {
        let mut form = ContactForm::new();
        form.set_values(FormInput::new("Ana", "ana@x.com", "hi"));
        let outcome = form.submit();
        assert_eq!(outcome, SubmitOutcome::Accepted(FormInput::new("Ana", "ana@x.com", "hi")));
        assert!(form.errors().is_empty());
        assert!(form.success_visible());
        assert_eq!(form.values(), &FormInput::default());
    }

    #[test]
    fn rejected_submit_keeps_values_and_hides_success() {
        let mut form = ContactForm::new();
        form.set_values(FormInput::new("Ana", "ana@x.com", "hi"));
        form.submit();
        form.set_values(FormInput::new("", "bad", "hello"));
        assert!(matches!(form.submit(), SubmitOutcome::Rejected(e) if e.len() == 2));
        assert!(!form.success_visible());
        assert_eq!(form.values().email, "bad");
        assert_eq!(form.error(Field::Name), Some("Please enter your name"));
        assert_eq!(Field::Email.error_element(), "emailError");
    }
}
