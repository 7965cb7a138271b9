//! Adapter for the KaTeX math typesetting plugin.

use std::fmt;

use crate::adapters::MathRendererAdapter;
use crate::html;

#[derive(Debug, Clone, Default)]
/// KaTeX math renderer plugin.
///
/// Expressions KaTeX rejects are rendered by KaTeX itself as inline error markup; nothing is
/// raised to the caller.
pub struct KatexAdapter {
    error_color: Option<String>,
}

impl KatexAdapter {
    /// Construct a new `KatexAdapter` with KaTeX's default error colour.
    pub fn new() -> Self {
        KatexAdapter { error_color: None }
    }

    /// Construct a new `KatexAdapter` which colours rejected expressions with `color`, given
    /// as a CSS colour.
    pub fn with_error_color(color: &str) -> Self {
        KatexAdapter {
            error_color: Some(color.to_string()),
        }
    }

    fn render(&self, literal: &str, display_math: bool) -> Option<String> {
        let mut builder = katex::Opts::builder();
        builder.display_mode(display_math).throw_on_error(false);
        if let Some(ref color) = self.error_color {
            builder.error_color(color.clone());
        }

        let opts = builder.build().ok()?;
        katex::render_with_opts(literal, &opts).ok()
    }
}

impl MathRendererAdapter for KatexAdapter {
    fn write_math(
        &self,
        output: &mut dyn fmt::Write,
        literal: &str,
        display_math: bool,
    ) -> fmt::Result {
        match self.render(literal, display_math) {
            Some(rendered) => output.write_str(&rendered),
            None => {
                // The JS engine itself failed; keep the source visible in KaTeX's error style.
                output.write_str("<span class=\"katex-error\" title=\"")?;
                html::escape(output, literal)?;
                output.write_str("\">")?;
                html::escape(output, literal)?;
                output.write_str("</span>")
            }
        }
    }
}
