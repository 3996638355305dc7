//! Verb table for the dispatcher.
//!
//! Maps each verb to its tool and vets an invocation before it runs: an
//! unknown verb or a wrong argument count never reaches a tool.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::interpreter::{ExecResult, EXIT_USAGE};

use super::traits::{Tool, ToolSchema};

/// Registered tools plus the verbs the dispatcher handles itself.
#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<String, Arc<dyn Tool>>,
    reserved: BTreeMap<String, ToolSchema>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name, replacing any previous one.
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    /// Declare a verb that has no tool behind it (such as `exit`), so it is
    /// still listed by `help` and in unknown-verb errors.
    pub fn reserve(&mut self, schema: ToolSchema) {
        self.reserved.insert(schema.name.clone(), schema);
    }

    /// Every supported verb, sorted.
    pub fn verbs(&self) -> Vec<&str> {
        let mut verbs: Vec<&str> = self
            .tools
            .keys()
            .chain(self.reserved.keys())
            .map(String::as_str)
            .collect();
        verbs.sort_unstable();
        verbs.dedup();
        verbs
    }

    /// Schemas of every supported verb, sorted by name.
    pub fn schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<ToolSchema> = self
            .tools
            .values()
            .map(|tool| tool.schema())
            .chain(self.reserved.values().cloned())
            .collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    /// Find the tool for `verb` and check it accepts `argc` arguments.
    ///
    /// Rejections come back as ready-to-report usage errors.
    pub fn lookup(&self, verb: &str, argc: usize) -> Result<Arc<dyn Tool>, ExecResult> {
        let Some(tool) = self.tools.get(verb) else {
            return Err(ExecResult::failure(
                EXIT_USAGE,
                format!(
                    "{verb}: command not found (supported: {})",
                    self.verbs().join(", ")
                ),
            ));
        };

        let schema = tool.schema();
        if !schema.accepts(argc) {
            return Err(ExecResult::usage(verb, &schema.usage()));
        }
        Ok(Arc::clone(tool))
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("verbs", &self.verbs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::{ExecContext, ParamSchema, ToolArgs};

    // `unwrap_err` on `Result<Arc<dyn Tool>, _>` needs the Ok type to be Debug.
    impl std::fmt::Debug for dyn Tool {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_tuple("Tool").field(&self.name()).finish()
        }
    }

    struct Greet;

    impl Tool for Greet {
        fn name(&self) -> &str {
            "greet"
        }

        fn schema(&self) -> ToolSchema {
            ToolSchema::new("greet", "Say hello").param(ParamSchema::required("who", "Name"))
        }

        fn execute(&self, args: ToolArgs, _ctx: &mut ExecContext) -> ExecResult {
            ExecResult::success(format!("hello {}", args.get(0).unwrap_or_default()))
        }
    }

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(Greet);
        registry.reserve(ToolSchema::new("exit", "Leave"));
        registry
    }

    #[test]
    fn lookup_runs_registered_tool() {
        let registry = registry();
        let tool = registry.lookup("greet", 1).unwrap();
        let mut ctx = ExecContext::default();
        let result = tool.execute(ToolArgs::from_tokens(["world"]), &mut ctx);
        assert_eq!(result.out, "hello world");
    }

    #[test]
    fn lookup_unknown_lists_verbs_including_reserved() {
        let err = registry().lookup("nope", 0).unwrap_err();
        assert_eq!(err.code, EXIT_USAGE);
        assert_eq!(err.err, "nope: command not found (supported: exit, greet)");
    }

    #[test]
    fn reserved_verbs_have_no_tool() {
        let err = registry().lookup("exit", 0).unwrap_err();
        assert!(err.err.starts_with("exit: command not found"));
    }

    #[test]
    fn lookup_checks_arity() {
        let registry = registry();
        let err = registry.lookup("greet", 0).unwrap_err();
        assert_eq!(err.code, EXIT_USAGE);
        assert_eq!(err.err, "greet: usage: greet who");
        assert!(registry.lookup("greet", 2).is_err());
    }

    #[test]
    fn schemas_are_sorted_and_include_reserved() {
        let names: Vec<String> = registry().schemas().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["exit", "greet"]);
    }
}
