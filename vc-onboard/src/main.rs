use clap::Parser;

mod cli;
mod tui;
mod ui;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    vc_core::logging::init();

    match args.command {
        Some(cli::Command::DumpSteps) => tui::dump_all_steps(),
        None => tui::run(),
    }
}
