//! Command trait and registry for comment-triggered rules

use stylesort_core::tree::SyntaxTree;
use stylesort_core::{Comment, Diagnostic};

/// The captured parts of a matched trigger comment
#[derive(Debug, Clone, Default)]
pub struct TriggerMatch {
    /// Raw inline-options JSON captured after the trigger phrase
    pub options: Option<String>,
}

/// Everything one command invocation sees: source text, the host's
/// syntax tree, the trigger comment, and its captured options
pub struct CommandContext<'a> {
    pub source: &'a str,
    pub tree: &'a SyntaxTree,
    pub comment: &'a Comment,
    pub options: Option<String>,
}

/// A comment-triggered rule
pub trait Command: Send + Sync {
    /// The unique identifier for this command (e.g., "keep-sorted-css")
    fn name(&self) -> &'static str;

    /// A short description of what this command does
    fn description(&self) -> &'static str;

    /// Decide whether a comment triggers this command
    fn match_comment(&self, comment: &Comment) -> Option<TriggerMatch>;

    /// Run on a matched trigger and return diagnostics
    fn run(&self, ctx: &CommandContext<'_>) -> Vec<Diagnostic>;
}

/// Registry of all available commands
pub struct CommandRegistry {
    commands: Vec<Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new registry with all built-in commands
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
        };

        registry.register(Box::new(
            crate::keep_sorted_css::KeepSortedCssCommand::new(),
        ));

        registry
    }

    /// Register a new command
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Get all command names
    pub fn all_names(&self) -> Vec<&'static str> {
        self.commands.iter().map(|c| c.name()).collect()
    }

    /// Get all commands with their descriptions
    pub fn list_commands(&self) -> Vec<(&'static str, &'static str)> {
        self.commands
            .iter()
            .map(|c| (c.name(), c.description()))
            .collect()
    }

    /// Run every command whose trigger matches the comment. The host calls
    /// this once per scanned comment; comments that trigger nothing cost
    /// one regex check per command.
    pub fn run_matched(
        &self,
        source: &str,
        tree: &SyntaxTree,
        comment: &Comment,
    ) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for command in &self.commands {
            if let Some(matched) = command.match_comment(comment) {
                let ctx = CommandContext {
                    source,
                    tree,
                    comment,
                    options: matched.options,
                };
                diagnostics.extend(command.run(&ctx));
            }
        }
        diagnostics
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
