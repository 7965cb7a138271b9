use crate::html;
use crate::nodes::NodeMath;
use crate::parser::options::Plugins;
use crate::Options;

use std::fmt::{self, Write};

/// The output sink and settings shared by every node while a document is formatted.
pub struct Context<'o, 'p> {
    output: &'o mut dyn Write,
    last_was_lf: bool,

    /// The options the document is formatted with.
    pub options: &'o Options,
    /// The plugins the document is formatted with.
    pub plugins: &'o Plugins<'p>,
}

impl<'o, 'p> Context<'o, 'p> {
    /// Wrap `output` for formatting with `options` and `plugins`.
    pub fn new(output: &'o mut dyn Write, options: &'o Options, plugins: &'o Plugins<'p>) -> Self {
        Context {
            output,
            last_was_lf: true,
            options,
            plugins,
        }
    }

    /// Start a new line unless the output is already at the start of one.
    pub fn cr(&mut self) -> fmt::Result {
        if !self.last_was_lf {
            self.write_str("\n")?;
        }
        Ok(())
    }

    /// Write `buffer` with HTML special characters escaped.
    pub fn escape(&mut self, buffer: &str) -> fmt::Result {
        html::escape(self, buffer)
    }

    /// Write a math expression through the configured renderer, or as escaped source in a
    /// `<span data-math-style>` if there is none.
    pub fn render_math(&mut self, math: &NodeMath) -> fmt::Result {
        match self.plugins.render.math_renderer {
            Some(renderer) => renderer.write_math(self, &math.literal, math.display_math),
            None => {
                let style = if math.display_math { "display" } else { "inline" };
                write!(self, "<span data-math-style=\"{}\">", style)?;
                self.escape(&math.literal)?;
                self.write_str("</span>")
            }
        }
    }
}

impl Write for Context<'_, '_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(&last) = s.as_bytes().last() {
            self.last_was_lf = last == b'\n';
        }
        self.output.write_str(s)
    }
}

impl fmt::Debug for Context<'_, '_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("<dollarmath::html::Context>")
    }
}
