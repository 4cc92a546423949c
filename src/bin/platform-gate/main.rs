//! Platform Gate CLI - fail builds early on unsupported host platforms

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use platform_gate::util::config::load_config;
use platform_gate::util::{Config, GlobalContext, MessageFormat};

mod cli;
mod commands;

use cli::{Cli, Commands, FormatArgs};

/// Settings shared by every command, after merging config and CLI flags.
pub struct Session {
    pub ctx: GlobalContext,
    pub color: bool,
    pub config: Config,
}

impl Session {
    /// Message format: CLI > config > human.
    pub fn message_format(&self, args: &FormatArgs) -> MessageFormat {
        args.message_format
            .map(MessageFormat::from)
            .or_else(|| self.config.message_format())
            .unwrap_or_default()
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when the gate denied a project.
fn run() -> Result<bool> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries diagnostics only
    let filter = if cli.verbose {
        EnvFilter::new("platform_gate=debug")
    } else {
        EnvFilter::new("platform_gate=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    let ctx = GlobalContext::new()?;
    let config = load_config(&ctx.config_path(), &ctx.project_config_path());
    let color = !cli.no_color && config.color();
    let session = Session { ctx, color, config };

    match cli.command {
        Commands::Check(args) => commands::check::execute(args, &session),
        Commands::Host(args) => commands::host::execute(args, &session).map(|()| true),
        Commands::Rules(args) => commands::rules::execute(args, &session).map(|()| true),
    }
}
