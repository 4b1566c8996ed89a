//! Application state machine for the onboarding wizard.
//!
//! All transitions happen synchronously inside [`App::handle_key`]; there is
//! no background work. Draft edits are synced into the step form on every
//! consumed keystroke, so validity (and the continue action it gates) is
//! always live.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use vc_core::application::ApplicationRecord;
use vc_core::form::{DocumentsDraft, StepForm};
use vc_core::session::OnboardingSession;
use vc_core::steps::OnboardingStep;
use vc_core::submit::{self, Submission};

use crate::input::{InputField, InputMode};

/// The three logical destinations of the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Wizard,
    Success,
    Dashboard,
}

/// Result of handling input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    Continue,
    Quit,
    Submitted(Submission),
}

/// Document slot targeted while naming an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocSlot {
    IdCard,
    IncomeProof,
    Other,
}

pub struct App {
    session: OnboardingSession,
    /// Draft form for the current data-entry step (empty field list on the
    /// documents and summary steps).
    pub form: StepForm,
    /// One editor per form field, parallel to `form.fields()`.
    pub inputs: Vec<InputField>,
    /// Draft state for the documents step.
    pub docs: DocumentsDraft,
    /// Shared editor used to name an attachment.
    pub doc_name: InputField,
    /// Which slot the name being typed is destined for.
    pub doc_target: Option<DocSlot>,
    /// Focused item on the current step (fields first, actions after).
    pub focus: usize,
    /// Blocking submission notice; dismissed by the next key press.
    pub notice: Option<String>,
    pub screen: Screen,
    pub submission: Option<Submission>,
}

fn build_inputs(form: &StepForm) -> Vec<InputField> {
    form.fields()
        .iter()
        .map(|f| InputField::new(form.value(*f).to_string(), f.hint(), f.max_len()))
        .collect()
}

impl App {
    pub fn new() -> Self {
        let session = OnboardingSession::new();
        let form = StepForm::new(session.step(), session.record());
        let inputs = build_inputs(&form);
        let docs = DocumentsDraft::new(session.record());
        Self {
            session,
            form,
            inputs,
            docs,
            doc_name: InputField::new(String::new(), "e.g. id-front.jpg", None),
            doc_target: None,
            focus: 0,
            notice: None,
            screen: Screen::Wizard,
            submission: None,
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.session.step()
    }

    pub fn record(&self) -> &ApplicationRecord {
        self.session.record()
    }

    /// Whether the continue/submit affordance is live on the current step.
    /// The summary's submit is always pressable; the gate decides there.
    pub fn continue_enabled(&self) -> bool {
        match self.step() {
            OnboardingStep::Documents => self.docs.is_complete(),
            OnboardingStep::Summary => true,
            _ => self.form.is_valid(),
        }
    }

    /// Focusable items on the current step: form fields, then the step's
    /// actions.
    pub fn item_count(&self) -> usize {
        match self.step() {
            OnboardingStep::Documents => 4, // id card, income proof, other docs, continue
            OnboardingStep::Summary => 2,   // edit documents, submit
            _ => self.form.fields().len() + 1,
        }
    }

    /// True while a text editor owns the keyboard.
    pub fn is_editing(&self) -> bool {
        self.doc_target.is_some()
            || self
                .inputs
                .get(self.focus)
                .is_some_and(|i| i.mode == InputMode::Editing)
    }

    /// Jump to a step and re-seed its draft state from the aggregate. Also
    /// used by the step-dump tooling.
    pub fn goto_step(&mut self, step: OnboardingStep) {
        self.session.jump_to(step);
        self.enter_step();
    }

    // Re-seed the per-step drafts from the aggregate. Runs on every step
    // entry, so revisits always show the committed values.
    fn enter_step(&mut self) {
        self.form = StepForm::new(self.session.step(), self.session.record());
        self.inputs = build_inputs(&self.form);
        self.docs = DocumentsDraft::new(self.session.record());
        self.doc_name.set_value(String::new());
        self.doc_name.mode = InputMode::Normal;
        self.doc_target = None;
        self.focus = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputResult {
        if key.kind != KeyEventKind::Press {
            return InputResult::Continue;
        }

        // A blocking notice swallows the next key press, like a dialog.
        if self.notice.take().is_some() {
            return InputResult::Continue;
        }

        match self.screen {
            Screen::Wizard => self.handle_wizard_key(key),
            Screen::Success => self.handle_success_key(key),
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
    }

    fn handle_success_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Enter => {
                self.screen = Screen::Dashboard;
                InputResult::Continue
            }
            KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) -> InputResult {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => InputResult::Quit,
            _ => InputResult::Continue,
        }
    }

    fn handle_wizard_key(&mut self, key: KeyEvent) -> InputResult {
        if self.is_editing() {
            self.handle_editing_key(key);
            return InputResult::Continue;
        }

        match key.code {
            KeyCode::Char('q') => InputResult::Quit,
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = self.focus.saturating_sub(1);
                InputResult::Continue
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.focus + 1 < self.item_count() {
                    self.focus += 1;
                }
                InputResult::Continue
            }
            KeyCode::Esc => {
                // Back; the first step offers no back action.
                if self.session.step().prev().is_some() {
                    self.session.retreat();
                    self.enter_step();
                }
                InputResult::Continue
            }
            KeyCode::Delete | KeyCode::Char('d')
                if self.session.step() == OnboardingStep::Documents =>
            {
                self.clear_document_slot();
                InputResult::Continue
            }
            KeyCode::Enter => self.activate_focused(),
            _ => InputResult::Continue,
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        if self.doc_target.is_some() {
            match key.code {
                KeyCode::Enter => self.commit_document_name(),
                KeyCode::Esc => {
                    self.doc_target = None;
                    self.doc_name.set_value(String::new());
                    self.doc_name.mode = InputMode::Normal;
                }
                _ => {
                    self.doc_name.handle_key(key);
                }
            }
            return;
        }

        match key.code {
            KeyCode::Enter | KeyCode::Esc => {
                if let Some(input) = self.inputs.get_mut(self.focus) {
                    input.mode = InputMode::Normal;
                }
            }
            _ => {
                let Some(input) = self.inputs.get_mut(self.focus) else {
                    return;
                };
                if input.handle_key(key) {
                    // Keep the form (and its derived validity) in lockstep
                    // with every edit.
                    let field = self.form.fields()[self.focus];
                    let value = input.value().to_string();
                    self.form.set_field(field, value);
                }
            }
        }
    }

    fn activate_focused(&mut self) -> InputResult {
        match self.session.step() {
            OnboardingStep::Documents => match self.focus {
                0 => self.start_document_name(DocSlot::IdCard),
                1 => self.start_document_name(DocSlot::IncomeProof),
                2 => self.start_document_name(DocSlot::Other),
                _ => return self.try_continue(),
            },
            OnboardingStep::Summary => {
                if self.focus == 0 {
                    // Edit documents: the one jump the flow allows.
                    self.goto_step(OnboardingStep::Documents);
                } else {
                    return self.submit_application();
                }
            }
            _ => {
                if self.focus < self.form.fields().len() {
                    if let Some(input) = self.inputs.get_mut(self.focus) {
                        input.mode = InputMode::Editing;
                    }
                } else {
                    return self.try_continue();
                }
            }
        }
        InputResult::Continue
    }

    fn start_document_name(&mut self, slot: DocSlot) {
        self.doc_target = Some(slot);
        self.doc_name.set_value(String::new());
        self.doc_name.mode = InputMode::Editing;
    }

    fn commit_document_name(&mut self) {
        let name = self.doc_name.value().trim().to_string();
        if let (Some(slot), false) = (self.doc_target, name.is_empty()) {
            match slot {
                DocSlot::IdCard => self.docs.id_card = Some(name),
                DocSlot::IncomeProof => self.docs.income_proof = Some(name),
                DocSlot::Other => self.docs.other_docs.push(name),
            }
        }
        self.doc_target = None;
        self.doc_name.set_value(String::new());
        self.doc_name.mode = InputMode::Normal;
    }

    fn clear_document_slot(&mut self) {
        match self.focus {
            0 => self.docs.id_card = None,
            1 => self.docs.income_proof = None,
            2 => {
                self.docs.other_docs.pop();
            }
            _ => {}
        }
    }

    // Submit the current step's draft and move forward. Silently ignored
    // while the step is invalid; the rendered continue action shows as
    // disabled in that state.
    fn try_continue(&mut self) -> InputResult {
        let update = match self.session.step() {
            OnboardingStep::Documents => self.docs.submit(),
            _ => self.form.submit(),
        };
        if let Some(update) = update {
            self.session.merge_update(update);
            self.session.advance();
            self.enter_step();
        }
        InputResult::Continue
    }

    fn submit_application(&mut self) -> InputResult {
        match submit::finalize(self.session.record()) {
            Ok(submission) => {
                self.submission = Some(submission.clone());
                self.screen = Screen::Success;
                InputResult::Submitted(submission)
            }
            Err(e) => {
                log::warn!("submission blocked: {}", e);
                self.notice = Some(e.to_string());
                InputResult::Continue
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
