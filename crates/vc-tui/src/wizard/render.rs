//! Ratatui rendering for the wizard screens.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use vc_core::steps::OnboardingStep;

use super::app::{App, Screen};
use super::content::{build_body_lines, expected_actions, screen_title, status_line, APP_TITLE};
use crate::widgets::{progress_ratio, step_marker};

fn build_step_sidebar(app: &App) -> String {
    OnboardingStep::all()
        .iter()
        .map(|step| {
            let marker = match app.screen {
                // Past the wizard every step is done.
                Screen::Success | Screen::Dashboard => "[x]",
                Screen::Wizard => step_marker(*step, app.step()),
            };
            format!("{} {}. {}", marker, step.index(), step.title())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn progress_percent(app: &App) -> u16 {
    let ratio = match app.screen {
        Screen::Wizard => progress_ratio(app.step().index(), OnboardingStep::all().len()),
        Screen::Success | Screen::Dashboard => 1.0,
    };
    (ratio * 100.0).round().clamp(0.0, 100.0) as u16
}

pub fn draw(f: &mut Frame, app: &App) {
    // Main layout: Title | Main Body | Progress Bar | Key Legend
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Main body (sidebar + content)
                Constraint::Length(3), // Progress bar
                Constraint::Length(3), // Status + key legend
            ]
            .as_ref(),
        )
        .split(f.area());

    let title_line = Line::from(vec![
        Span::styled(APP_TITLE, Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(screen_title(app), Style::default().fg(Color::Cyan)),
    ]);
    let title = Block::default().borders(Borders::ALL).title(title_line);
    f.render_widget(title, main_chunks[0]);

    // Two-panel layout: Step sidebar | Current screen content
    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)].as_ref())
        .split(main_chunks[1]);

    let sidebar = Paragraph::new(build_step_sidebar(app))
        .block(Block::default().borders(Borders::ALL).title("Steps"));
    f.render_widget(sidebar, body_chunks[0]);

    let list_items = build_body_lines(app)
        .into_iter()
        .map(ListItem::new)
        .collect::<Vec<_>>();
    let content = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(screen_title(app)),
    );
    f.render_widget(content, body_chunks[1]);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(Style::default().fg(Color::Blue))
        .percent(progress_percent(app));
    f.render_widget(gauge, main_chunks[2]);

    let legend_text = format!("{}\n{}", status_line(app), expected_actions(app));
    let legend =
        Paragraph::new(legend_text).block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(legend, main_chunks[3]);
}
