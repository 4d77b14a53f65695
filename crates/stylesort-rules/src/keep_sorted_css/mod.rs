//! Command: keep-sorted-css
//!
//! Sorts the properties of a CSS style object literal when a marker
//! comment sits directly above it:
//!
//! ```js
//! // keep-sorted-css
//! const style = {
//!   color: 'red',
//!   display: 'flex',
//! };
//! ```
//!
//! The line form accepts `keep-sorted-css` or `sorted-css` after an
//! optional `/`, `@` or `:` sigil; the block form accepts
//! `@keep-sorted-css`. Either form may carry a trailing JSON object
//! overriding the rule configuration, e.g.
//! `// keep-sorted-css {"order":["z-index"]}`.
//!
//! Spreads, computed keys and methods are never moved; they split the
//! property list into segments that sort independently. Vendor-prefixed
//! variants group directly before their standard property unless
//! `groupVendorPrefixes` is disabled.

mod classify;
mod properties;
mod sort;

pub use properties::CSS_PROPERTY_ORDER;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use stylesort_core::tree::{Node, NodeKind, ObjectLiteral};
use stylesort_core::{Comment, CommentKind, Diagnostic};

use crate::registry::{Command, CommandContext, TriggerMatch};
use sort::SortOptions;

const LINE_PATTERN: &str = r"^[/@:]?\s*(?:keep-sorted-css|sorted-css)\s*(\{.*\})?$";
const BLOCK_PATTERN: &str = r"(?:\b|\s)@keep-sorted-css\s*(\{.*\})?(?:\b|\s|$)";

/// Configuration for the keep-sorted-css command, also the shape of the
/// inline trigger JSON
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeepSortedCssConfig {
    /// Custom sort order (earlier in the list = higher priority),
    /// consulted before the built-in property table
    pub order: Vec<String>,
    /// Group vendor-prefixed properties directly before their standard
    /// equivalents
    pub group_vendor_prefixes: bool,
}

impl Default for KeepSortedCssConfig {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            group_vendor_prefixes: true,
        }
    }
}

/// Inline overrides carried by the trigger comment; unset fields fall
/// back to the rule configuration
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct InlineOptions {
    order: Option<Vec<String>>,
    group_vendor_prefixes: Option<bool>,
}

/// Failure to parse the inline options JSON; the message echoes the raw
/// text so the user can see what was rejected
#[derive(Debug, Error)]
#[error("Failed to parse options: {raw}")]
pub struct OptionsError {
    raw: String,
    #[source]
    source: serde_json::Error,
}

pub struct KeepSortedCssCommand {
    config: KeepSortedCssConfig,
}

impl KeepSortedCssCommand {
    pub fn new() -> Self {
        Self::with_config(KeepSortedCssConfig::default())
    }

    pub fn with_config(config: KeepSortedCssConfig) -> Self {
        Self { config }
    }
}

impl Default for KeepSortedCssCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for KeepSortedCssCommand {
    fn name(&self) -> &'static str {
        "keep-sorted-css"
    }

    fn description(&self) -> &'static str {
        "Keep the properties of a CSS style object sorted"
    }

    fn match_comment(&self, comment: &Comment) -> Option<TriggerMatch> {
        let pattern = match comment.kind {
            CommentKind::Line => LINE_PATTERN,
            CommentKind::Block => BLOCK_PATTERN,
        };
        let re = Regex::new(pattern).unwrap();
        let captures = re.captures(comment.text.trim())?;
        Some(TriggerMatch {
            options: captures.get(1).map(|m| m.as_str().to_string()),
        })
    }

    fn run(&self, ctx: &CommandContext<'_>) -> Vec<Diagnostic> {
        // Options are validated before anything else
        let raw = ctx.options.as_deref().unwrap_or("{}");
        let inline = match parse_options(raw) {
            Ok(inline) => inline,
            Err(err) => {
                return vec![Diagnostic::error(self.name(), ctx.comment.span, err.to_string())]
            }
        };
        let options = effective_options(&self.config, inline);

        let Some(object) = locate_object(ctx) else {
            return vec![Diagnostic::error(
                self.name(),
                ctx.comment.span,
                "Unable to find CSS object to sort",
            )];
        };

        match sort::sort_object(ctx.source, object, &options) {
            Some(fix) => vec![Diagnostic::fixable(
                self.name(),
                object.span,
                "CSS properties should be sorted",
                fix,
            )],
            None => Vec::new(),
        }
    }
}

fn parse_options(raw: &str) -> Result<InlineOptions, OptionsError> {
    serde_json::from_str(raw).map_err(|source| OptionsError {
        raw: raw.to_string(),
        source,
    })
}

fn effective_options(config: &KeepSortedCssConfig, inline: InlineOptions) -> SortOptions {
    SortOptions {
        order: inline.order.unwrap_or_else(|| config.order.clone()),
        group_vendor_prefixes: inline
            .group_vendor_prefixes
            .unwrap_or(config.group_vendor_prefixes),
    }
}

/// Walk down from the trigger comment to the object literal to sort:
/// directly, through one type-assertion wrapper, and/or through the first
/// declarator of a variable declaration.
fn locate_object<'a>(ctx: &CommandContext<'a>) -> Option<&'a ObjectLiteral> {
    let position = ctx.comment.span.end;
    let found = ctx
        .tree
        .find_node_below(
            position,
            &[NodeKind::ObjectLiteral, NodeKind::SatisfiesExpression],
        )
        .or_else(|| ctx.tree.find_node_below(position, &[NodeKind::VariableDeclaration]));

    let mut node = found?;
    if let Node::VarDecl(decl) = node {
        node = decl.declarators.first()?.init.as_ref()?;
    }
    if let Node::Satisfies(satisfies) = node {
        node = &satisfies.inner;
    }
    node.as_object()
}
