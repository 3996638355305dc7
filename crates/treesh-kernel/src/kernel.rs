//! Kernel: the facade that owns a namespace and dispatches command lines.
//!
//! ```text
//! line ──▶ tokenize ──▶ registry lookup ──▶ arity check ──▶ Tool::execute
//!                          │                                   │
//!                          └── exit ──▶ ControlFlow::Exit      └──▶ ControlFlow::Normal
//! ```
//!
//! The kernel never prints. Front ends (the REPL, tests) decide how to show
//! an [`ExecResult`].

use anyhow::{Context, Result};

use crate::interpreter::{ControlFlow, ExecResult};
use crate::tools::{
    register_builtins, ExecContext, ParamSchema, ToolArgs, ToolRegistry, ToolSchema,
    DEFAULT_HISTORY_LIMIT,
};
use crate::vfs::Namespace;

/// Configuration for a kernel instance.
#[derive(Debug, Clone)]
pub struct KernelConfig {
    /// Name of this kernel (shown in logs).
    pub name: String,
    /// Maximum number of command lines kept for `history`.
    pub history_limit: usize,
    /// Directories created before the first command runs.
    pub seed: Vec<String>,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            seed: Vec::new(),
        }
    }
}

impl KernelConfig {
    /// A throwaway kernel: empty namespace, no remembered history.
    pub fn transient() -> Self {
        Self {
            name: "transient".to_string(),
            history_limit: 0,
            seed: Vec::new(),
        }
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Add directories to create at startup.
    pub fn with_seed<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed.extend(dirs.into_iter().map(Into::into));
        self
    }
}

/// The treesh kernel.
pub struct Kernel {
    name: String,
    tools: ToolRegistry,
    ctx: ExecContext,
}

impl Kernel {
    /// Create a kernel, creating any seed directories.
    pub fn new(config: KernelConfig) -> Result<Self> {
        let mut ns = Namespace::new();
        for dir in &config.seed {
            ns.mkdir(dir)
                .with_context(|| format!("seeding directory {dir}"))?;
        }

        let mut tools = ToolRegistry::new();
        register_builtins(&mut tools);
        tools.reserve(exit_schema());

        let mut ctx = ExecContext::new(ns).with_history_limit(config.history_limit);
        ctx.commands = tools.schemas();

        tracing::debug!(name = %config.name, seeded = config.seed.len(), "kernel ready");

        Ok(Self {
            name: config.name,
            tools,
            ctx,
        })
    }

    /// Create a kernel with the default configuration.
    pub fn transient() -> Result<Self> {
        Self::new(KernelConfig::transient())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Execute one command line.
    pub fn execute(&mut self, line: &str) -> ControlFlow {
        let mut tokens = line.split_whitespace();
        let Some(verb) = tokens.next() else {
            return ControlFlow::default();
        };
        let args = ToolArgs::from_tokens(tokens);

        self.ctx.record(line.trim());

        if verb == "exit" {
            return exit(&args);
        }

        let tool = match self.tools.lookup(verb, args.len()) {
            Ok(tool) => tool,
            Err(rejected) => {
                tracing::debug!(verb, err = %rejected.err, "command rejected");
                return ControlFlow::Normal(rejected);
            }
        };

        let result = tool.execute(args, &mut self.ctx);
        if !result.ok() {
            tracing::debug!(verb, code = result.code, err = %result.err, "command failed");
        }
        ControlFlow::Normal(result)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.ctx.ns
    }

    pub fn namespace_mut(&mut self) -> &mut Namespace {
        &mut self.ctx.ns
    }

    pub fn context(&self) -> &ExecContext {
        &self.ctx
    }

    /// Absolute path of the current directory.
    pub fn cwd(&self) -> String {
        self.ctx.ns.cwd_path()
    }

    /// Schemas of every supported verb, `exit` included, sorted by name.
    pub fn tool_schemas(&self) -> &[ToolSchema] {
        &self.ctx.commands
    }
}

fn exit_schema() -> ToolSchema {
    ToolSchema::new("exit", "Leave the shell").param(ParamSchema::optional(
        "code",
        "0",
        "Exit status",
    ))
}

fn exit(args: &ToolArgs) -> ControlFlow {
    match args.get(0).map(str::parse::<i64>) {
        None => ControlFlow::exit_code(0),
        Some(Ok(code)) if args.len() == 1 => ControlFlow::exit_code(code),
        _ => ControlFlow::Normal(ExecResult::usage("exit", &exit_schema().usage())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::EXIT_USAGE;
    use rstest::rstest;

    fn kernel() -> Kernel {
        Kernel::new(KernelConfig::default()).unwrap()
    }

    fn run(kernel: &mut Kernel, line: &str) -> ExecResult {
        kernel
            .execute(line)
            .into_result()
            .unwrap_or_else(|| panic!("{line} exited"))
    }

    #[test]
    fn empty_line_is_a_noop() {
        let mut k = kernel();
        let result = run(&mut k, "   ");
        assert!(result.ok());
        assert!(result.out.is_empty());
        assert_eq!(k.context().history().count(), 0);
    }

    #[test]
    fn dispatches_to_builtins() {
        let mut k = kernel();
        assert!(run(&mut k, "mkdir /a/b").ok());
        assert!(run(&mut k, "cd /a/b").ok());
        assert_eq!(run(&mut k, "pwd").out, "/a/b");
        assert_eq!(k.cwd(), "/a/b");
    }

    #[test]
    fn extra_whitespace_between_tokens() {
        let mut k = kernel();
        run(&mut k, "touch   f");
        run(&mut k, "echo  hello    world   f");
        assert_eq!(run(&mut k, "cat f").out, "hello world");
    }

    #[test]
    fn unknown_verb_lists_supported() {
        let mut k = kernel();
        let result = run(&mut k, "frobnicate x");
        assert_eq!(result.code, EXIT_USAGE);
        assert!(result.err.starts_with("frobnicate: command not found"));
        assert!(result.err.contains("cat, cd, cp, echo, exit, grep"));
    }

    #[rstest]
    #[case::mkdir_none("mkdir")]
    #[case::mkdir_extra("mkdir a b")]
    #[case::cat_none("cat")]
    #[case::grep_one("grep x")]
    #[case::mv_one("mv a")]
    #[case::cp_three("cp a b c")]
    #[case::rm_none("rm")]
    #[case::echo_none("echo")]
    #[case::pwd_extra("pwd x")]
    fn arity_errors_are_usage(#[case] line: &str) {
        let mut k = kernel();
        let result = run(&mut k, line);
        assert_eq!(result.code, EXIT_USAGE, "{line}");
        assert!(result.err.contains("usage:"), "{line}: {}", result.err);
    }

    #[rstest]
    #[case("exit", 0)]
    #[case("exit 3", 3)]
    #[case("  exit  ", 0)]
    fn exit_returns_control_flow(#[case] line: &str, #[case] code: i64) {
        let mut k = kernel();
        match k.execute(line) {
            ControlFlow::Exit { code: got } => assert_eq!(got, code),
            other => panic!("expected exit, got {other:?}"),
        }
    }

    #[test]
    fn exit_with_bad_code_is_usage() {
        let mut k = kernel();
        let result = run(&mut k, "exit soon");
        assert_eq!(result.code, EXIT_USAGE);
    }

    #[test]
    fn seed_directories_are_created() {
        let config = KernelConfig::transient().with_seed(["/home/user", "/tmp"]);
        let mut k = Kernel::new(config).unwrap();
        assert_eq!(run(&mut k, "ls /").out, "home/\ntmp/");
        assert_eq!(k.cwd(), "/");
    }

    #[test]
    fn seed_paths_may_revisit_directories() {
        let config = KernelConfig::transient().with_seed(["/a", "/a/../a/b"]);
        let mut k = Kernel::new(config).unwrap();
        assert_eq!(run(&mut k, "ls /").out, "a/");
        assert_eq!(run(&mut k, "ls /a").out, "b/");
    }

    #[test]
    fn history_records_lines() {
        let mut k = kernel();
        run(&mut k, "mkdir a");
        run(&mut k, "cd  a");
        let result = run(&mut k, "history");
        assert_eq!(result.out, "   1  mkdir a\n   2  cd  a\n   3  history");
    }

    #[test]
    fn transient_keeps_no_history() {
        let mut k = Kernel::transient().unwrap();
        run(&mut k, "pwd");
        assert!(run(&mut k, "history").out.is_empty());
    }

    #[test]
    fn help_includes_exit() {
        let mut k = kernel();
        let result = run(&mut k, "help");
        assert!(result.ok());
        assert!(result.out.lines().any(|l| l.starts_with("exit [code]")));
        assert!(result.out.lines().any(|l| l.starts_with("echo [content...] filename")));
        assert_eq!(result.out.lines().count(), k.tool_schemas().len());
    }

    #[test]
    fn failures_carry_verb_prefix() {
        let mut k = kernel();
        let result = run(&mut k, "cd nowhere");
        assert_eq!(result.code, 1);
        assert_eq!(result.err, "cd: nowhere: No such file or directory");
    }
}
