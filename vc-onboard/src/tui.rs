//! Terminal setup and the wizard event loop.

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use vc_core::steps::OnboardingStep;
use vc_tui::wizard::{self, App, InputResult, Screen};

/// Run the onboarding wizard.
pub fn run() -> Result<()> {
    crate::ui::ensure_interactive_terminal()?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let run_result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| wizard::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            match app.handle_key(key) {
                InputResult::Continue => {}
                InputResult::Submitted(submission) => {
                    log::info!(
                        "wizard handed off application {} to the confirmation screen",
                        submission.application_id
                    );
                }
                InputResult::Quit => return Ok(()),
            }
        }
    }
}

/// Print every screen's rendered text to stdout and exit. Review tooling for
/// the wizard copy without a live terminal.
pub fn dump_all_steps() -> Result<()> {
    let mut app = App::new();
    for step in OnboardingStep::all() {
        app.goto_step(*step);
        println!("{}", wizard::dump_step(&app));
    }
    for screen in [Screen::Success, Screen::Dashboard] {
        app.screen = screen;
        println!("{}", wizard::dump_step(&app));
    }
    Ok(())
}
