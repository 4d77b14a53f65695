//! stylesort-rules: Comment-triggered style-sorting rules
//!
//! Available commands:
//! - keep-sorted-css: Sort the properties of a CSS style object literal
//!   found below a `keep-sorted-css` trigger comment

pub mod keep_sorted_css;
pub mod registry;

pub use keep_sorted_css::{KeepSortedCssCommand, KeepSortedCssConfig, CSS_PROPERTY_ORDER};
pub use registry::{Command, CommandContext, CommandRegistry, TriggerMatch};
