use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use vc_core::steps::OnboardingStep;
use vc_error::SubmitError;
use vc_tui::wizard::{App, InputResult, Screen};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

fn press(app: &mut App, code: KeyCode) -> InputResult {
    app.handle_key(key(code))
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

/// Open the focused field, replace its content, and commit.
fn fill_focused_field(app: &mut App, value: &str) {
    press(app, KeyCode::Enter);
    app.handle_key(KeyEvent {
        code: KeyCode::Char('u'),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    });
    type_text(app, value);
    press(app, KeyCode::Enter);
}

/// Fill every field of the current data step in order, leaving focus on the
/// continue action.
fn fill_step(app: &mut App, values: &[&str]) {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            press(app, KeyCode::Down);
        }
        fill_focused_field(app, value);
    }
    press(app, KeyCode::Down);
}

fn attach_document(app: &mut App, name: &str) {
    press(app, KeyCode::Enter);
    type_text(app, name);
    press(app, KeyCode::Enter);
}

#[test]
fn continue_stays_disabled_on_partial_input() {
    let mut app = App::new();
    fill_focused_field(&mut app, "Popescu Andrei");
    press(&mut app, KeyCode::Down);
    fill_focused_field(&mut app, "5010101223344");
    // Email untouched: validity must be false and Enter on the continue
    // action must not advance.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    assert!(!app.continue_enabled());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::PersonalData);
}

#[test]
fn inline_error_clears_when_the_field_is_corrected() {
    let mut app = App::new();
    press(&mut app, KeyCode::Down); // CNP
    fill_focused_field(&mut app, "123");
    assert!(app.form.error(vc_core::validation::Field::Cnp).is_some());

    fill_focused_field(&mut app, "5010101223344");
    assert!(app.form.error(vc_core::validation::Field::Cnp).is_none());
}

#[test]
fn end_to_end_flow_submits_after_phone_fix() {
    let mut app = App::new();

    // Step 1 — personal data.
    fill_step(&mut app, &["Popescu Andrei", "5010101223344", "a@b.com"]);
    assert!(app.continue_enabled());
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Address);

    // Step 2 — address; the missing "+" passes the step-local non-empty rule.
    fill_step(
        &mut app,
        &["Str. Libertatii 10", "Cluj-Napoca", "Cluj", "0721111111"],
    );
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::WorkData);

    // Step 3 — employment.
    fill_step(
        &mut app,
        &["Tech Solutions SRL", "Software developer", "7000", "3"],
    );
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Documents);

    // Step 4 — documents.
    assert!(!app.continue_enabled());
    attach_document(&mut app, "id-front.jpg");
    press(&mut app, KeyCode::Down);
    attach_document(&mut app, "payslip.pdf");
    assert!(app.continue_enabled());
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Summary);

    // Submit with the malformed phone: blocked by the gate.
    press(&mut app, KeyCode::Down);
    let result = press(&mut app, KeyCode::Enter);
    assert_eq!(result, InputResult::Continue);
    assert_eq!(
        app.notice.as_deref(),
        Some(SubmitError::MissingPhonePrefix.to_string().as_str())
    );
    assert_eq!(app.screen, Screen::Wizard);

    // Dismiss the notice, walk back to the address step and fix the phone.
    press(&mut app, KeyCode::Esc); // swallowed by the notice
    press(&mut app, KeyCode::Esc); // summary -> documents
    press(&mut app, KeyCode::Esc); // documents -> employment
    press(&mut app, KeyCode::Esc); // employment -> address
    assert_eq!(app.step(), OnboardingStep::Address);
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    fill_focused_field(&mut app, "+40721111111");
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::WorkData);

    // Revisited steps are seeded from the aggregate and already valid.
    assert!(app.continue_enabled());
    for _ in 0..4 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Documents);
    assert!(app.continue_enabled());
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Summary);

    // Submit again: success this time.
    press(&mut app, KeyCode::Down);
    let result = press(&mut app, KeyCode::Enter);
    let InputResult::Submitted(submission) = result else {
        panic!("expected a successful submission, got {:?}", result);
    };
    assert_eq!(submission.full_name, "Popescu Andrei");
    let digits = submission.application_id.strip_prefix("VC-").unwrap();
    assert!(!digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(app.screen, Screen::Success);

    // Success -> dashboard -> quit.
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen, Screen::Dashboard);
    assert_eq!(press(&mut app, KeyCode::Char('q')), InputResult::Quit);
}

#[test]
fn retreating_and_resubmitting_keeps_other_steps_data() {
    let mut app = App::new();

    fill_step(&mut app, &["Popescu Andrei", "5010101223344", "a@b.com"]);
    press(&mut app, KeyCode::Enter);
    fill_step(
        &mut app,
        &["Str. Libertatii 10", "Cluj-Napoca", "Cluj", "+40721111111"],
    );
    press(&mut app, KeyCode::Enter);
    fill_step(
        &mut app,
        &["Tech Solutions SRL", "Software developer", "7000", "3"],
    );
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::Documents);

    // Back to the address step, change only the city, and come forward again.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.step(), OnboardingStep::Address);
    press(&mut app, KeyCode::Down);
    fill_focused_field(&mut app, "Brasov");
    for _ in 0..3 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.step(), OnboardingStep::WorkData);

    let record = app.record();
    assert_eq!(record.full_name, "Popescu Andrei"); // step 1 untouched
    assert_eq!(record.company, "Tech Solutions SRL"); // step 3 untouched
    assert_eq!(record.city, "Brasov");
    assert_eq!(record.address, "Str. Libertatii 10");
}

#[test]
fn summary_edit_documents_jumps_to_step_four() {
    let mut app = App::new();
    app.goto_step(OnboardingStep::Summary);
    press(&mut app, KeyCode::Enter); // "Edit documents" is the first action
    assert_eq!(app.step(), OnboardingStep::Documents);
}

#[test]
fn first_step_offers_no_back_action() {
    let mut app = App::new();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.step(), OnboardingStep::PersonalData);
    assert_eq!(app.screen, Screen::Wizard);
}

#[test]
fn removing_a_required_document_disables_continue() {
    let mut app = App::new();
    app.goto_step(OnboardingStep::Documents);
    attach_document(&mut app, "id-front.jpg");
    press(&mut app, KeyCode::Down);
    attach_document(&mut app, "payslip.pdf");
    assert!(app.continue_enabled());

    press(&mut app, KeyCode::Char('d')); // clears the focused income-proof slot
    assert!(!app.continue_enabled());
    assert!(app.docs.income_proof.is_none());
    assert_eq!(app.docs.id_card.as_deref(), Some("id-front.jpg"));
}
