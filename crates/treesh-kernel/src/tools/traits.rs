//! Tool trait and the argument/schema types builtins share.

use crate::interpreter::ExecResult;

use super::context::ExecContext;

/// A command the dispatcher can run.
pub trait Tool: Send + Sync {
    /// Verb the tool is registered under.
    fn name(&self) -> &str;

    /// Description and parameters, used by `help` and for usage errors.
    fn schema(&self) -> ToolSchema;

    /// Run the tool. Failures are reported through the result, never by
    /// panicking or printing.
    fn execute(&self, args: ToolArgs, ctx: &mut ExecContext) -> ExecResult;
}

/// Description of a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSchema {
    pub name: String,
    pub description: String,
    pub params: Vec<ParamSchema>,
}

impl ToolSchema {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            params: Vec::new(),
        }
    }

    /// Add a parameter (builder style).
    pub fn param(mut self, param: ParamSchema) -> Self {
        self.params.push(param);
        self
    }

    /// One-line usage, e.g. `ls [path]` or `echo [content...] filename`.
    pub fn usage(&self) -> String {
        let mut usage = self.name.clone();
        for param in &self.params {
            usage.push(' ');
            usage.push_str(&param.placeholder());
        }
        usage
    }

    /// Number of positional arguments the tool cannot run without.
    pub fn required_count(&self) -> usize {
        self.params.iter().filter(|p| p.arity == Arity::Required).count()
    }

    /// True if `count` positional arguments fit the parameter list.
    pub fn accepts(&self, count: usize) -> bool {
        let variadic = self.params.iter().any(|p| p.arity == Arity::Variadic);
        count >= self.required_count() && (variadic || count <= self.params.len())
    }
}

/// How many values a parameter takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Required,
    Optional,
    /// Zero or more values.
    Variadic,
}

/// Description of one positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSchema {
    pub name: String,
    pub arity: Arity,
    pub default: Option<String>,
    pub description: String,
}

impl ParamSchema {
    pub fn required(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: Arity::Required,
            default: None,
            description: description.into(),
        }
    }

    pub fn optional(
        name: impl Into<String>,
        default: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arity: Arity::Optional,
            default: Some(default.into()),
            description: description.into(),
        }
    }

    pub fn variadic(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arity: Arity::Variadic,
            default: None,
            description: description.into(),
        }
    }

    fn placeholder(&self) -> String {
        match self.arity {
            Arity::Required => self.name.clone(),
            Arity::Optional => format!("[{}]", self.name),
            Arity::Variadic => format!("[{}...]", self.name),
        }
    }
}

/// Positional arguments for a tool invocation, verb excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolArgs {
    pub positional: Vec<String>,
}

impl ToolArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-split tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            positional: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Positional argument by index.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.positional.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty()
    }
}
