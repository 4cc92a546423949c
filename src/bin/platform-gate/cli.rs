//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use platform_gate::util::MessageFormat;

/// Platform Gate - check that a project's UI frameworks can build on this host
#[derive(Parser)]
#[command(name = "platform-gate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check projects against the current host platform
    Check(CheckArgs),

    /// Show the detected host platform
    Host(FormatArgs),

    /// List the framework platform rules
    Rules(FormatArgs),
}

#[derive(Args)]
pub struct CheckArgs {
    /// Project files to check (defaults to the nearest Project.toml)
    pub manifests: Vec<PathBuf>,

    #[command(flatten)]
    pub format: FormatArgs,
}

#[derive(Args)]
pub struct FormatArgs {
    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub message_format: Option<FormatArg>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Human,
    Json,
}

impl From<FormatArg> for MessageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Human => MessageFormat::Human,
            FormatArg::Json => MessageFormat::Json,
        }
    }
}
