//! Configuration for the parser and renderer.  Extensions affect both.

#[cfg(feature = "bon")]
use bon::Builder;
use std::fmt::{self, Debug, Formatter};

use crate::adapters::MathRendererAdapter;

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Umbrella options struct.
pub struct Options {
    /// Enable extensions.
    #[cfg_attr(feature = "bon", builder(default))]
    pub extension: Extension,

    /// Configure render-time options.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: Render,
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options to select extensions.
pub struct Extension {
    /// Enables math delimited by runs of dollar signs.
    ///
    /// Inline math is written `$$x$$`, display math inline `$$$x$$$`, and a block is fenced by
    /// lines starting with `$$`.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("$$1 + 2$$\n", &options),
    ///            "<p>$$1 + 2$$</p>\n");
    ///
    /// options.extension.math_dollars = true;
    /// assert_eq!(markdown_to_html("Sum: $$1 + 2$$ and $$$x = y$$$\n", &options),
    ///            "<p>Sum: <span data-math-style=\"inline\">1 + 2</span> and \
    ///             <span data-math-style=\"display\">x = y</span></p>\n");
    /// assert_eq!(markdown_to_html("$$\nx^2\n$$\n", &options),
    ///            "<span data-math-style=\"display\">x^2</span>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub math_dollars: bool,
}

#[derive(Default, Debug, Clone, Copy)]
#[cfg_attr(feature = "bon", derive(Builder))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
/// Options for formatter functions.
pub struct Render {
    /// [Soft line breaks](http://spec.commonmark.org/0.27/#soft-line-breaks) in the input
    /// translate into hard line breaks in the output.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(markdown_to_html("Hello.\nWorld.\n", &options),
    ///            "<p>Hello.\nWorld.</p>\n");
    ///
    /// options.render.hardbreaks = true;
    /// assert_eq!(markdown_to_html("Hello.\nWorld.\n", &options),
    ///            "<p>Hello.<br />\nWorld.</p>\n");
    /// ```
    #[cfg_attr(feature = "bon", builder(default))]
    pub hardbreaks: bool,
}

#[derive(Default, Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Umbrella plugins struct.
pub struct Plugins<'p> {
    /// Configure render-time plugins.
    #[cfg_attr(feature = "bon", builder(default))]
    pub render: RenderPlugins<'p>,
}

#[derive(Default, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Plugins for alternative rendering.
pub struct RenderPlugins<'p> {
    /// Provide a math renderer adapter implementation for math nodes.  Without one, math is
    /// written as its escaped source inside a `<span data-math-style>`.
    ///
    /// ```rust
    /// # use dollarmath::{markdown_to_html_with_plugins, Options, options::Plugins};
    /// let mut options = Options::default();
    /// options.extension.math_dollars = true;
    /// let mut plugins = Plugins::default();
    /// let input = "so $$a < b$$";
    ///
    /// assert_eq!(markdown_to_html_with_plugins(input, &options, &plugins),
    ///            "<p>so <span data-math-style=\"inline\">a &lt; b</span></p>\n");
    ///
    /// let renderer = |literal: &str, display_math: bool| {
    ///     format!("<m display={}>{}</m>", display_math, literal)
    /// };
    /// plugins.render.math_renderer = Some(&renderer);
    ///
    /// assert_eq!(markdown_to_html_with_plugins(input, &options, &plugins),
    ///            "<p>so <m display=false>a < b</m></p>\n");
    /// ```
    pub math_renderer: Option<&'p dyn MathRendererAdapter>,
}

impl Debug for RenderPlugins<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderPlugins")
            .field(
                "math_renderer",
                &self.math_renderer.map(|_| "impl MathRendererAdapter"),
            )
            .finish()
    }
}
