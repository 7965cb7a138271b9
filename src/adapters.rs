//! Adapter traits for plugins.
//!
//! Each plugin has to implement one of the traits available in this module.

use std::fmt;

/// Implement this adapter for creating a plugin for custom math rendering.
///
/// The adapter is called once per math node, every time a document is formatted.  It must not
/// fail on a malformed expression; errors belong in the markup it writes.
pub trait MathRendererAdapter {
    /// Writes the markup for one math expression.
    ///
    /// `literal`: The expression, without its delimiters.
    /// `display_math`: Whether to render in display (block) style rather than inline style.
    fn write_math(
        &self,
        output: &mut dyn fmt::Write,
        literal: &str,
        display_math: bool,
    ) -> fmt::Result;
}

/// Any `Fn(&str, bool) -> String` is a math renderer: it receives the expression and the
/// display-style flag and returns markup, which is written verbatim.
impl<F> MathRendererAdapter for F
where
    F: Fn(&str, bool) -> String,
{
    fn write_math(
        &self,
        output: &mut dyn fmt::Write,
        literal: &str,
        display_math: bool,
    ) -> fmt::Result {
        output.write_str(&self(literal, display_math))
    }
}
