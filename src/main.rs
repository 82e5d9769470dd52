use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use save_text::commands::{self, Cli, Command};
use save_text::{App, Config};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match &cli.command {
        Command::Save(args) => {
            let path = commands::save::run(args, io::stdin().lock())?;
            info!("saved text to {}", path.display());
            Ok(())
        }
        Command::New(args) => {
            commands::new::run(&mut app(&cli)?, args, io::stdin().lock(), &mut stdout)
        }
        Command::List => commands::list::run(&app(&cli)?, &mut stdout),
        Command::Show { id } => commands::show::run(&app(&cli)?, id, &mut stdout),
        Command::Delete { id } => commands::delete::run(&mut app(&cli)?, id, &mut stdout),
        Command::Check => commands::check::run(&mut app(&cli)?, &mut stdout),
    }
}

/// Paste commands need the configured store; writing plain files does not.
fn app(cli: &Cli) -> anyhow::Result<App> {
    let config = Config::load(cli.config.as_deref()).context("failed to load config")?;
    App::new(config)
}
