//! Context Demos CLI - render and replay the cart and blog demos.
//!
//! # Usage
//!
//! ```bash
//! # Render the default demo from seed data
//! cd-cli show
//!
//! # Render the blog demo
//! cd-cli show --demo blog
//!
//! # Replay a script of UI events
//! cd-cli run demos/cart.yaml
//! ```
//!
//! # Commands
//!
//! - `show` - Render every surface of a demo
//! - `run` - Replay a YAML script, re-rendering after each event

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use context_demos_cli::commands::{self, OutputFormat};
use context_demos_cli::{App, CliError, Demo, DemoConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cd-cli")]
#[command(author, version, about = "Provider/consumer state demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a demo from seed data
    Show {
        /// Demo to render (defaults to `CONTEXT_DEMOS_DEFAULT_DEMO`)
        #[arg(short, long, value_enum)]
        demo: Option<Demo>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Replay a YAML script of UI events
    Run {
        /// Path to the script
        script: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Logs go to stderr so rendered views on stdout stay clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "context_demos_cli=info,context_demos_state=warn".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = DemoConfig::from_env()?;

    let output = match cli.command {
        Commands::Show { demo, format } => {
            let app = App::new(demo.unwrap_or(config.default_demo), config.currency);
            commands::show::show(app, format).await?
        }
        Commands::Run { script, format } => {
            commands::run::run_file(&script, config.default_demo, config.currency, format).await?
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
