//! Text content for each screen, shared by the live renderer and the
//! plain-text step dump.

use vc_core::steps::OnboardingStep;

use super::app::{App, Screen};
use crate::input::InputMode;
use crate::widgets::slot_symbol;

pub const APP_TITLE: &str = "VC Onboarding — Credit Application";

pub fn screen_title(app: &App) -> String {
    match app.screen {
        Screen::Wizard => {
            let step = app.step();
            format!("Step {} of 5 — {}", step.index(), step.title())
        }
        Screen::Success => "Application submitted".to_string(),
        Screen::Dashboard => "Dashboard".to_string(),
    }
}

fn focus_marker(app: &App, item: usize) -> &'static str {
    if app.focus == item {
        "> "
    } else {
        "  "
    }
}

fn continue_line(app: &App, item: usize) -> String {
    if app.continue_enabled() {
        format!("{}[ Continue ]", focus_marker(app, item))
    } else {
        format!("{}( Continue — complete the fields above )", focus_marker(app, item))
    }
}

fn form_lines(app: &App) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, field) in app.form.fields().iter().enumerate() {
        let input = &app.inputs[i];
        let editing = input.mode == InputMode::Editing && app.focus == i;
        let shown = if input.value().is_empty() && !editing {
            format!("({})", input.hint)
        } else if editing {
            format!("{}_", input.value())
        } else {
            input.value().to_string()
        };
        lines.push(format!("{}{}: {}", focus_marker(app, i), field.label(), shown));
        if let Some(error) = app.form.error(*field) {
            lines.push(format!("    ! {}", error));
        }
    }
    lines.push(String::new());
    lines.push(continue_line(app, app.form.fields().len()));
    lines
}

fn documents_lines(app: &App) -> Vec<String> {
    let docs = &app.docs;
    let mut lines = vec![
        format!(
            "{}{} Identity document: {}",
            focus_marker(app, 0),
            slot_symbol(docs.id_card.is_some()),
            docs.id_card.as_deref().unwrap_or("(required)")
        ),
        format!(
            "{}{} Income proof: {}",
            focus_marker(app, 1),
            slot_symbol(docs.income_proof.is_some()),
            docs.income_proof.as_deref().unwrap_or("(required)")
        ),
        format!(
            "{}Other documents ({}): {}",
            focus_marker(app, 2),
            docs.other_docs.len(),
            if docs.other_docs.is_empty() {
                "none".to_string()
            } else {
                docs.other_docs.join(", ")
            }
        ),
    ];
    if app.doc_target.is_some() {
        lines.push(String::new());
        lines.push(format!("  Document name: {}_", app.doc_name.value()));
    }
    lines.push(String::new());
    lines.push(continue_line(app, 3));
    lines
}

fn summary_lines(app: &App) -> Vec<String> {
    let record = app.record();
    let docs = &record.documents;
    let mut lines = vec![
        format!("Name:       {}", record.full_name),
        format!("CNP:        {}", record.cnp),
        format!("Email:      {}", record.email),
        format!(
            "Address:    {}, {}, {}",
            record.address, record.city, record.county
        ),
        format!("Phone:      {}", record.phone),
        String::new(),
        format!("Company:    {}", record.company),
        format!("Position:   {}", record.position),
        format!("NET income: {} RON", record.income),
        format!("Experience: {} years", record.experience),
        String::new(),
        "Attached documents:".to_string(),
    ];
    if let Some(id_card) = &docs.id_card {
        lines.push(format!("  - Identity document ({})", id_card));
    }
    if let Some(income_proof) = &docs.income_proof {
        lines.push(format!("  - Income proof ({})", income_proof));
    }
    if !docs.other_docs.is_empty() {
        lines.push(format!("  - {} other document(s)", docs.other_docs.len()));
    }
    lines.push(String::new());
    lines.push(format!("{}[ Edit documents ]", focus_marker(app, 0)));
    lines.push(format!("{}[ Submit application ]", focus_marker(app, 1)));
    lines
}

fn success_lines(app: &App) -> Vec<String> {
    let mut lines = vec!["Your application has been submitted successfully!".to_string()];
    // Tolerate a missing handoff: render without the number block.
    if let Some(submission) = &app.submission {
        lines.push(String::new());
        lines.push(format!("Thank you, {}!", submission.full_name));
        lines.push(String::new());
        lines.push("Credit application number:".to_string());
        lines.push(format!("  {}", submission.application_id));
    }
    lines.push(String::new());
    lines.push(
        "A consultant will review your documents and contact you shortly to complete the process."
            .to_string(),
    );
    lines
}

fn dashboard_lines() -> Vec<String> {
    vec![
        "Welcome to your dashboard.".to_string(),
        String::new(),
        "Submitted applications appear here once a consultant picks them up.".to_string(),
    ]
}

pub fn build_body_lines(app: &App) -> Vec<String> {
    match app.screen {
        Screen::Wizard => match app.step() {
            OnboardingStep::Documents => documents_lines(app),
            OnboardingStep::Summary => summary_lines(app),
            _ => form_lines(app),
        },
        Screen::Success => success_lines(app),
        Screen::Dashboard => dashboard_lines(),
    }
}

/// Context-specific key hints for the legend bar.
pub fn expected_actions(app: &App) -> String {
    match app.screen {
        Screen::Success => "Enter: dashboard | q: quit".to_string(),
        Screen::Dashboard => "q/Enter: quit".to_string(),
        Screen::Wizard => {
            if app.is_editing() {
                return "type to edit | Enter: done | Esc: cancel".to_string();
            }
            let mut hints = vec!["↑/↓: move", "Enter: select"];
            if app.step() == OnboardingStep::Documents {
                hints.push("d: remove");
            }
            if app.step().prev().is_some() {
                hints.push("Esc: back");
            }
            hints.push("q: quit");
            hints.join(" | ")
        }
    }
}

/// One-line status under the body: the blocking notice when present,
/// otherwise the live validity of the current step.
pub fn status_line(app: &App) -> String {
    if let Some(notice) = &app.notice {
        return format!("!! {}", notice);
    }
    match app.screen {
        Screen::Wizard if app.step() != OnboardingStep::Summary => {
            if app.continue_enabled() {
                "Step complete — you can continue.".to_string()
            } else {
                "Fill in the highlighted fields to continue.".to_string()
            }
        }
        _ => String::new(),
    }
}
