use super::*;

fn state_with(email: &str, password: &str) -> RegisterAnalyseState {
    let mut state = RegisterAnalyseState::new(None);
    state.on_field_change(Field::Email, email.to_owned());
    state.on_field_change(Field::Password, password.to_owned());
    state
}

// =============================================================
// Field
// =============================================================

#[test]
fn field_order_puts_email_first() {
    assert_eq!(Field::ORDER, [Field::Email, Field::Password]);
}

#[test]
fn field_dom_ids_match_inputs() {
    assert_eq!(Field::Email.name(), "email");
    assert_eq!(Field::Password.name(), "password");
    assert_eq!(Field::Email.error_id(), "email-error");
    assert_eq!(Field::Password.error_id(), "password-error");
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_flags_only_empty_fields() {
    let form = LoginForm { email: "user@x.com".to_owned(), password: String::new() };
    let errors = validate(&form);
    assert!(!errors.contains(Field::Email));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(errors.iter().count(), 1);
}

#[test]
fn validate_treats_whitespace_as_empty() {
    let form = LoginForm { email: "   ".to_owned(), password: "\t\n".to_owned() };
    let errors = validate(&form);
    assert_eq!(errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(errors.get(Field::Password), Some(PASSWORD_REQUIRED));
}

#[test]
fn validate_reports_errors_in_field_order() {
    let errors = validate(&LoginForm::default());
    let fields: Vec<Field> = errors.iter().map(|(field, _)| field).collect();
    assert_eq!(fields, vec![Field::Email, Field::Password]);
}

#[test]
fn validate_accepts_padded_values() {
    let form = LoginForm { email: "  bob  ".to_owned(), password: " pw ".to_owned() };
    assert!(validate(&form).is_empty());
}

// =============================================================
// submit
// =============================================================

#[test]
fn submit_with_both_empty_focuses_email() {
    let mut state = RegisterAnalyseState::new(None);
    assert_eq!(state.submit(), SubmitOutcome::Rejected { focus: Field::Email });
    assert_eq!(state.errors.get(Field::Email), Some(EMAIL_REQUIRED));
    assert_eq!(state.errors.get(Field::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(state.phase, FormPhase::Invalid);
}

#[test]
fn submit_with_missing_password_focuses_password() {
    let mut state = state_with("user@x.com", "");
    assert_eq!(state.submit(), SubmitOutcome::Rejected { focus: Field::Password });
    assert!(!state.errors.contains(Field::Email));
    assert!(state.errors.contains(Field::Password));
}

#[test]
fn submit_with_valid_form_produces_mock_submission() {
    let mut state = RegisterAnalyseState::new(Some("https://api.example.com".to_owned()));
    state.on_field_change(Field::Email, "user@x.com".to_owned());
    state.on_field_change(Field::Password, "hunter2".to_owned());

    let outcome = state.submit();

    assert_eq!(
        outcome,
        SubmitOutcome::Accepted(MockSubmission {
            api_base: Some("https://api.example.com".to_owned()),
            payload: LoginForm { email: "user@x.com".to_owned(), password: "hunter2".to_owned() },
        })
    );
    assert!(state.errors.is_empty());
    assert_eq!(state.phase, FormPhase::SubmittedMock);
}

#[test]
fn submit_keeps_raw_values_in_payload() {
    let mut state = state_with(" padded@x.com ", " pw ");
    let SubmitOutcome::Accepted(submission) = state.submit() else {
        panic!("expected accepted submission");
    };
    assert_eq!(submission.payload.email, " padded@x.com ");
    assert_eq!(submission.payload.password, " pw ");
}

#[test]
fn resubmit_after_fix_clears_stale_errors() {
    let mut state = RegisterAnalyseState::new(None);
    let _ = state.submit();
    state.on_field_change(Field::Email, "a".to_owned());
    state.on_field_change(Field::Password, "b".to_owned());
    assert!(matches!(state.submit(), SubmitOutcome::Accepted(_)));
    assert!(state.errors.is_empty());
}

// =============================================================
// on_field_change
// =============================================================

#[test]
fn editing_flagged_field_clears_error_even_when_still_empty() {
    let mut state = RegisterAnalyseState::new(None);
    let _ = state.submit();

    state.on_field_change(Field::Email, "   ".to_owned());

    assert!(!state.errors.contains(Field::Email));
    assert!(state.errors.contains(Field::Password));
    assert_eq!(state.phase, FormPhase::Invalid);
}

#[test]
fn clearing_last_error_returns_to_idle() {
    let mut state = state_with("user@x.com", "");
    let _ = state.submit();
    assert_eq!(state.phase, FormPhase::Invalid);

    state.on_field_change(Field::Password, "p".to_owned());

    assert!(state.errors.is_empty());
    assert_eq!(state.phase, FormPhase::Idle);
}

#[test]
fn editing_unflagged_field_leaves_other_errors() {
    let mut state = state_with("user@x.com", "");
    let _ = state.submit();
    state.on_field_change(Field::Email, "other@x.com".to_owned());
    assert_eq!(state.errors.get(Field::Password), Some(PASSWORD_REQUIRED));
    assert_eq!(state.form.email, "other@x.com");
}

// =============================================================
// help visibility
// =============================================================

#[test]
fn help_starts_hidden_and_toggles() {
    let mut state = RegisterAnalyseState::default();
    assert!(!state.help_visible);
    state.toggle_help();
    assert!(state.help_visible);
    state.toggle_help();
    assert!(!state.help_visible);
}

#[test]
fn close_help_is_idempotent() {
    let mut state = RegisterAnalyseState::default();
    state.toggle_help();
    state.close_help();
    state.close_help();
    assert!(!state.help_visible);
}
