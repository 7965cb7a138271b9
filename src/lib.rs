//! Math delimited by runs of dollar signs, for a small Markdown-to-HTML pipeline.
//!
//! Inline math is written `$$x$$`; `$$$x$$$` asks for display style.  A block is fenced by
//! lines starting with `$$`.  Math is handed to a [`MathRendererAdapter`] at render time, such
//! as the KaTeX adapter behind the `katex` feature.
//!
//! You can use `dollarmath::markdown_to_html` directly:
//!
//! ```
//! use dollarmath::{markdown_to_html, Options};
//! let mut options = Options::default();
//! options.extension.math_dollars = true;
//! assert_eq!(markdown_to_html("Euler: $$e^{i\\pi} + 1 = 0$$", &options),
//!            "<p>Euler: <span data-math-style=\"inline\">e^{i\\pi} + 1 = 0</span></p>\n");
//! ```
//!
//! Or you can parse the input into an AST yourself, inspect it, and then use your desired
//! formatter:
//!
//! ```
//! use dollarmath::{format_html, parse_document, Arena, Options};
//! use dollarmath::nodes::NodeValue;
//!
//! let arena = Arena::new();
//! let mut options = Options::default();
//! options.extension.math_dollars = true;
//!
//! let root = parse_document(&arena, "$$\n  a +\n  b\n$$\n", &options);
//!
//! let math = root.first_child().unwrap();
//! let ast = math.data.borrow();
//! match ast.value {
//!     NodeValue::Math(ref m) => {
//!         assert_eq!(m.literal, "a + b");
//!         assert!(m.display_math);
//!     }
//!     _ => unreachable!(),
//! }
//! assert_eq!(ast.lines, Some((0, 4).into()));
//! drop(ast);
//!
//! let mut html = String::new();
//! format_html(root, &options, &mut html).unwrap();
//! assert_eq!(html, "<span data-math-style=\"display\">a + b</span>\n");
//! ```

#![deny(
    missing_docs,
    missing_debug_implementations,
    unstable_features,
    unused_import_braces
)]
#![allow(unknown_lints, clippy::doc_markdown)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod adapters;
pub mod arena_tree;
pub mod html;
pub mod nodes;
mod parser;
pub mod plugins;
mod strings;

pub use html::format_document as format_html;
pub use html::format_document_with_plugins as format_html_with_plugins;
pub use parser::block::{BlockParser, BlockState};
pub use parser::inlines::{InlineParser, InlineState};
pub use parser::math::{block_math, inline_math, register as register_math};
pub use parser::options::{self, Options, Plugins};
pub use parser::ruler::{BlockRule, InlineRule, Ruler};
pub use parser::{parse_document, Parser};

/// Convenience type alias for arena used to hold nodes.
pub type Arena<'a> = typed_arena::Arena<nodes::AstNode<'a>>;

/// Render Markdown to HTML.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html(md: &str, options: &Options) -> String {
    markdown_to_html_with_plugins(md, options, &Plugins::default())
}

/// Render Markdown to HTML using plugins.
///
/// See the documentation of the crate root for an example.
pub fn markdown_to_html_with_plugins(md: &str, options: &Options, plugins: &Plugins) -> String {
    let arena = Arena::new();
    let root = parse_document(&arena, md, options);
    let mut html = String::new();
    format_html_with_plugins(root, options, &mut html, plugins).unwrap();
    html
}
