pub mod block;
pub mod inlines;
pub mod math;
pub mod options;
pub mod ruler;

use crate::nodes::{Ast, AstNode, LineRange, NodeValue};
use crate::parser::block::{BlockParser, BlockState};
use crate::parser::inlines::{InlineParser, InlineState};
pub use crate::parser::options::Options;
use crate::parser::ruler::{BlockRule, InlineRule, Ruler};
use crate::strings;
use crate::Arena;

/// Parse a Markdown document to an AST.
///
/// See the documentation of the crate root for an example.
pub fn parse_document<'a>(arena: &'a Arena<'a>, md: &str, options: &Options) -> &'a AstNode<'a> {
    Parser::new(options).parse(arena, md)
}

/// The block and inline rule chains for one configuration.
///
/// A `Parser` holds no per-document state; every call to [`Parser::parse`] builds its own
/// [`BlockState`] and [`InlineState`]s, so one parser may serve any number of documents.
#[derive(Debug)]
pub struct Parser {
    /// The block phase.
    pub block: BlockParser,

    /// The inline phase.
    pub inline: InlineParser,
}

impl Parser {
    /// Build the default rule chains, adding the math scanners if
    /// `options.extension.math_dollars` is set.
    pub fn new(options: &Options) -> Self {
        let mut block = Ruler::new();
        block.push("paragraph", block::paragraph as BlockRule);

        let mut inline = Ruler::new();
        inline.push("text", inlines::text as InlineRule);
        inline.push("newline", inlines::newline as InlineRule);
        inline.push("escape", inlines::escape as InlineRule);

        let mut parser = Parser {
            block: BlockParser { ruler: block },
            inline: InlineParser { ruler: inline },
        };

        if options.extension.math_dollars {
            math::register(&mut parser);
        }

        parser
    }

    /// Parse `md` into a tree allocated in `arena`.
    pub fn parse<'a>(&self, arena: &'a Arena<'a>, md: &str) -> &'a AstNode<'a> {
        let src = strings::normalize_source(md);
        let mut state = BlockState::new(&src);
        let line_max = state.line_max;

        self.block.tokenize(&mut state, 0, line_max);

        let root: &'a AstNode<'a> = arena.alloc(
            Ast::new_block(NodeValue::Document, LineRange::from((0, line_max)), 0).into(),
        );

        for ast in state.blocks {
            let inline_content = match ast.value {
                NodeValue::Paragraph => Some((ast.content.clone(), ast.level + 1)),
                _ => None,
            };

            let node: &'a AstNode<'a> = arena.alloc(ast.into());
            root.append(node);

            if let Some((content, level)) = inline_content {
                self.parse_inlines(arena, node, &content, level);
            }
        }

        root
    }

    fn parse_inlines<'a>(
        &self,
        arena: &'a Arena<'a>,
        parent: &'a AstNode<'a>,
        content: &str,
        level: usize,
    ) {
        let mut state = InlineState::new(content, level);
        self.inline.tokenize(&mut state);

        for ast in state.nodes {
            parent.append(arena.alloc(ast.into()));
        }
    }
}
