//! mdhook CLI
//!
//! Applies Markdown post-processing hooks to a documentation content tree.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for mdhook.
#[derive(Parser)]
#[command(
    name = "mdhook",
    version,
    about = "Markdown post-processing hooks for documentation sites"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mdhook.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Apply the configured hooks to every page in the content tree
    Apply {
        /// Content directory to read pages from
        #[arg(long, default_value = "docs")]
        content: std::path::PathBuf,
        /// Output directory for transformed pages
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
        /// Include draft pages
        #[arg(long)]
        drafts: bool,
    },
    /// Validate configuration and content
    Check {
        /// Content directory to read pages from
        #[arg(long, default_value = "docs")]
        content: std::path::PathBuf,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    mdhook::init_tracing(cli.verbose);

    match cli.command {
        Commands::Apply {
            content,
            output,
            drafts,
        } => {
            mdhook::cmd::apply::run(&cli.config, &content, &output, drafts)?;
        }
        Commands::Check { content, strict } => {
            mdhook::cmd::check::run(&cli.config, &content, strict)?;
        }
    }

    Ok(())
}
