//! Formatted output: `%`-templates rendered over tagged values.
//!
//! Implements the template half of the formatter/scanner: directive
//! parsing, per-verb renderers, and the inline reporting of argument
//! mismatches.

pub(crate) mod float;
pub mod render;
pub mod template;

pub use render::{format_value, render};
pub use template::{Directive, Flags, MAX_WIDTH, Segment, Template};
