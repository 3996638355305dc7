//! treesh REPL: interactive shell over the in-memory namespace.
//!
//! Three ways in, all sharing [`Repl::process_line`]:
//!
//! - interactive, with rustyline line editing and persistent history
//! - a script file, one command per line
//! - `-c "cmd; cmd"` one-shot commands

pub mod config;
pub mod paths;

use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use treesh_kernel::{ControlFlow, ExecResult, Kernel};

pub use config::ReplConfig;

/// What a single line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to print.
    Empty,
    /// Text for stdout.
    Output(String),
    /// A failed command: exit code and text for stderr.
    Error { code: i64, message: String },
    /// The session should end with this code.
    Exit(i64),
}

impl Response {
    pub fn code(&self) -> i64 {
        match self {
            Response::Empty | Response::Output(_) => 0,
            Response::Error { code, .. } | Response::Exit(code) => *code,
        }
    }
}

/// REPL state: a kernel plus display settings.
pub struct Repl {
    kernel: Kernel,
    config: ReplConfig,
}

impl Repl {
    /// Create a REPL with default settings.
    pub fn new() -> Result<Self> {
        Self::with_config(ReplConfig::default())
    }

    pub fn with_config(config: ReplConfig) -> Result<Self> {
        let kernel = Kernel::new(config.kernel_config()).context("starting kernel")?;
        Ok(Self { kernel, config })
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    pub fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Prompt for the next line.
    pub fn prompt(&self) -> String {
        self.config.render_prompt(&self.kernel.cwd())
    }

    /// Process a single line of input.
    pub fn process_line(&mut self, line: &str) -> Response {
        match self.kernel.execute(line) {
            ControlFlow::Exit { code } => Response::Exit(code),
            ControlFlow::Normal(result) => present(result),
        }
    }

    /// Run a script, writing output as it goes.
    ///
    /// Blank lines and `#` comments are skipped, and `exit` stops the
    /// script. Returns the code of the last command run.
    pub fn run_script<O, E>(&mut self, script: &str, out: &mut O, err: &mut E) -> Result<i64>
    where
        O: Write,
        E: Write,
    {
        let mut last = 0;
        for line in script.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let response = self.process_line(trimmed);
            last = response.code();
            if let Response::Exit(_) = response {
                break;
            }
            self.write_response(&response, out, err)?;
        }
        Ok(last)
    }

    /// Run `-c` commands, separated by `;`.
    pub fn run_commands<O, E>(&mut self, commands: &str, out: &mut O, err: &mut E) -> Result<i64>
    where
        O: Write,
        E: Write,
    {
        self.run_script(&commands.replace(';', "\n"), out, err)
    }

    fn write_response<O, E>(&self, response: &Response, out: &mut O, err: &mut E) -> Result<()>
    where
        O: Write,
        E: Write,
    {
        match response {
            Response::Output(text) => writeln!(out, "{text}")?,
            Response::Error { message, .. } if self.config.color => {
                writeln!(err, "{}", message.red())?
            }
            Response::Error { message, .. } => writeln!(err, "{message}")?,
            Response::Empty | Response::Exit(_) => {}
        }
        Ok(())
    }
}

/// Turn a kernel result into what the user sees.
fn present(result: ExecResult) -> Response {
    if !result.ok() {
        return Response::Error {
            code: result.code,
            message: result.err,
        };
    }

    match (result.out.is_empty(), result.note) {
        (false, _) => Response::Output(result.out),
        (true, Some(note)) => Response::Output(note),
        (true, None) => Response::Empty,
    }
}

const BANNER: &str = "treesh: in-memory namespace shell. Type `help` for commands, `exit` to leave.";

/// Run the interactive REPL. Returns the exit code.
pub fn run(config: ReplConfig) -> Result<i64> {
    println!("{BANNER}");

    let mut rl: Editor<(), DefaultHistory> = Editor::new().context("Failed to create editor")?;

    let history_path = config.history.then(paths::history_file);
    if let Some(ref path) = history_path {
        if let Err(e) = rl.load_history(path) {
            tracing::debug!(path = %path.display(), error = %e, "no line history loaded");
        }
    }

    let mut repl = Repl::with_config(config)?;
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let mut code = 0;

    loop {
        match rl.readline(&repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let response = repl.process_line(&line);
                code = response.code();
                if let Response::Exit(_) = response {
                    break;
                }
                repl.write_response(&response, &mut stdout.lock(), &mut stderr.lock())?;
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("^D");
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Some(ref path) = history_path {
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = rl.save_history(path) {
            tracing::warn!(path = %path.display(), error = %e, "failed to save line history");
        }
    }

    Ok(code)
}
