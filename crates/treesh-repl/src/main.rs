//! treesh entry point.
//!
//! Launch the interactive shell:
//! ```bash
//! cargo run -p treesh-repl
//! ```
//!
//! Or run commands non-interactively:
//! ```bash
//! treesh -c "mkdir /a; cd /a; touch f; ls"
//! treesh setup.tsh
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use treesh_repl::{Repl, ReplConfig};

#[derive(Parser)]
#[command(name = "treesh")]
#[command(about = "An in-memory namespace with a tiny command shell")]
#[command(version)]
struct Cli {
    /// Config file (default: $XDG_CONFIG_HOME/treesh/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Do not load or save line-editor history
    #[arg(long)]
    no_history: bool,

    /// Run `;`-separated commands and exit
    #[arg(short = 'c', value_name = "COMMANDS")]
    commands: Option<String>,

    /// Script file to run, one command per line
    #[arg()]
    script: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(cli.verbose)));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut config = ReplConfig::load(cli.config.as_deref())?;
    if cli.no_history {
        config.history = false;
    }

    let code = if let Some(commands) = cli.commands {
        let mut repl = Repl::with_config(config)?;
        repl.run_commands(&commands, &mut std::io::stdout(), &mut std::io::stderr())?
    } else if let Some(path) = cli.script {
        let script = std::fs::read_to_string(&path)
            .with_context(|| format!("reading script {}", path.display()))?;
        let mut repl = Repl::with_config(config)?;
        repl.run_script(&script, &mut std::io::stdout(), &mut std::io::stderr())?
    } else {
        treesh_repl::run(config)?
    };

    Ok(ExitCode::from(u8::try_from(code).unwrap_or(1)))
}

fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("warn,treesh_kernel={level},treesh_repl={level}")
}
