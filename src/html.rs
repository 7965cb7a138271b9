//! The HTML renderer for the document AST.

mod context;

pub use context::Context;

use std::fmt::{self, Write};

use crate::nodes::{AstNode, NodeValue};
use crate::parser::options::{Options, Plugins};

/// Formats an AST as HTML, modified by the given options.
pub fn format_document<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn Write,
) -> fmt::Result {
    format_document_with_plugins(root, options, output, &Plugins::default())
}

/// Formats an AST as HTML, modified by the given options. Accepts custom plugins.
pub fn format_document_with_plugins<'a>(
    root: &'a AstNode<'a>,
    options: &Options,
    output: &mut dyn Write,
    plugins: &Plugins,
) -> fmt::Result {
    let mut context = Context::new(output, options, plugins);

    enum Phase {
        Pre,
        Post,
    }
    let mut stack = vec![(root, Phase::Pre)];

    while let Some((node, phase)) = stack.pop() {
        match phase {
            Phase::Pre => {
                format_node(&mut context, node, true)?;
                stack.push((node, Phase::Post));

                let children = node.children().collect::<Vec<_>>();
                for child in children.into_iter().rev() {
                    stack.push((child, Phase::Pre));
                }
            }
            Phase::Post => {
                format_node(&mut context, node, false)?;
            }
        }
    }

    Ok(())
}

fn format_node<'a>(
    context: &mut Context<'_, '_>,
    node: &'a AstNode<'a>,
    entering: bool,
) -> fmt::Result {
    let ast = node.data.borrow();

    match ast.value {
        NodeValue::Document => Ok(()),
        NodeValue::Paragraph => {
            if entering {
                context.cr()?;
                context.write_str("<p>")
            } else {
                context.write_str("</p>\n")
            }
        }
        NodeValue::Text(ref literal) => {
            if entering {
                context.escape(literal)?;
            }
            Ok(())
        }
        NodeValue::SoftBreak => {
            if entering {
                if context.options.render.hardbreaks {
                    context.write_str("<br />\n")?;
                } else {
                    context.write_str("\n")?;
                }
            }
            Ok(())
        }
        NodeValue::LineBreak => {
            if entering {
                context.write_str("<br />\n")?;
            }
            Ok(())
        }
        NodeValue::Math(ref math) => {
            if !entering {
                return Ok(());
            }
            if ast.is_block() {
                context.cr()?;
                context.render_math(math)?;
                context.write_str("\n")
            } else {
                context.render_math(math)
            }
        }
    }
}

/// Writes `buffer` to `output`, escaping anything that could be interpreted as an HTML tag,
/// entity or attribute delimiter.
pub fn escape(output: &mut dyn Write, buffer: &str) -> fmt::Result {
    let bytes = buffer.as_bytes();
    let matcher = jetscii::bytes!(b'"', b'&', b'<', b'>');

    let mut offset = 0;
    while let Some(i) = matcher.find(&bytes[offset..]) {
        let esc: &str = match bytes[offset + i] {
            b'"' => "&quot;",
            b'&' => "&amp;",
            b'<' => "&lt;",
            _ => "&gt;",
        };
        output.write_str(&buffer[offset..offset + i])?;
        output.write_str(esc)?;
        offset += i + 1;
    }
    output.write_str(&buffer[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_specials() {
        let mut s = String::new();
        escape(&mut s, "a < b && \"c\" > d").unwrap();
        assert_eq!(s, "a &lt; b &amp;&amp; &quot;c&quot; &gt; d");
    }

    #[test]
    fn escape_plain_is_unchanged() {
        let mut s = String::new();
        escape(&mut s, "x^2 + é").unwrap();
        assert_eq!(s, "x^2 + é");
    }
}
