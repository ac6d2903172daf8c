//! Sign-in form state for the register-analyse page.
//!
//! DESIGN
//! ======
//! The page owns a single `RegisterAnalyseState` record and mutates it only
//! through the transitions below (`on_field_change`, `submit`, `toggle_help`,
//! `close_help`). Nothing here touches the DOM; the page turns a
//! `SubmitOutcome` into focus movement or a mock acknowledgement.

#[cfg(test)]
#[path = "login_form_test.rs"]
mod login_form_test;

use serde::Serialize;

pub const EMAIL_REQUIRED: &str = "Email/Username is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";

/// Form inputs, in the order used for validation and focus tie-breaks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub const COUNT: usize = 2;

    /// Email precedes password when several fields are invalid.
    pub const ORDER: [Field; Field::COUNT] = [Field::Email, Field::Password];

    /// DOM `name`/`id` of the input bound to this field.
    pub fn name(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Id of the inline error element, referenced by `aria-describedby`.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Email => "email-error",
            Field::Password => "password-error",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::Email => 0,
            Field::Password => 1,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Email => EMAIL_REQUIRED,
            Field::Password => PASSWORD_REQUIRED,
        }
    }
}

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}

/// Per-field error messages. An empty set means the form is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    slots: [Option<&'static str>; Field::COUNT],
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.slots[field.index()]
    }

    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Flagged fields with their messages, email first.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        Field::ORDER
            .into_iter()
            .filter_map(|field| self.get(field).map(|message| (field, message)))
    }

    /// First flagged field under the tie-break order.
    pub fn first(&self) -> Option<Field> {
        self.iter().next().map(|(field, _)| field)
    }

    fn set(&mut self, field: Field, message: &'static str) {
        self.slots[field.index()] = Some(message);
    }

    fn clear(&mut self, field: Field) {
        self.slots[field.index()] = None;
    }
}

/// Check every field; a field is invalid when its trimmed value is empty.
pub fn validate(form: &LoginForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    for field in Field::ORDER {
        if form.value(field).trim().is_empty() {
            errors.set(field, field.required_message());
        }
    }
    errors
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    /// No failed submission outstanding.
    #[default]
    Idle,
    /// Last submit failed and at least one field is still flagged.
    Invalid,
    /// Last submit passed validation and was acknowledged locally.
    SubmittedMock,
}

/// Payload of an accepted submission. Logged, never sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MockSubmission {
    pub api_base: Option<String>,
    pub payload: LoginForm,
}

/// Result of a submit transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; `focus` is the field that should receive keyboard focus.
    Rejected { focus: Field },
    Accepted(MockSubmission),
}

/// Everything the register-analyse page renders from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterAnalyseState {
    pub form: LoginForm,
    pub errors: ValidationErrors,
    pub help_visible: bool,
    pub phase: FormPhase,
    api_base: Option<String>,
}

impl RegisterAnalyseState {
    pub fn new(api_base: Option<String>) -> Self {
        Self { api_base, ..Self::default() }
    }

    /// Store a new value and drop that field's error without re-validating.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        *self.form.value_mut(field) = value;
        self.errors.clear(field);
        if self.phase == FormPhase::Invalid && self.errors.is_empty() {
            self.phase = FormPhase::Idle;
        }
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        self.errors = validate(&self.form);
        if let Some(focus) = self.errors.first() {
            self.phase = FormPhase::Invalid;
            return SubmitOutcome::Rejected { focus };
        }

        self.phase = FormPhase::SubmittedMock;
        SubmitOutcome::Accepted(MockSubmission {
            api_base: self.api_base.clone(),
            payload: self.form.clone(),
        })
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    pub fn close_help(&mut self) {
        self.help_visible = false;
    }
}
