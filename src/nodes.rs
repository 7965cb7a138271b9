//! The document AST.

use crate::arena_tree::Node;
use std::cell::RefCell;

pub use crate::parser::math::NodeMath;

/// The core AST node enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeValue {
    /// The root of every document.  Contains **blocks**.
    Document,

    /// **Block**. A paragraph.  Contains **inlines**.
    Paragraph,

    /// **Inline**.  Textual content.  Literal dollar signs that did not open a math span end up
    /// here too.
    Text(String),

    /// **Inline**.  A soft line break.  If the `hardbreaks` option is set in `Options` during
    /// formatting, it will be formatted as a `LineBreak`.
    SoftBreak,

    /// **Inline**.  A hard line break.
    LineBreak,

    /// **Block** or **Inline**.  A math expression delimited by runs of `$`.
    ///
    /// As a block it is fenced by lines starting with `$$`:
    ///
    /// ``` md
    /// $$
    /// x^2
    /// $$
    /// ```
    ///
    /// Inline it is `$$x$$` (inline style) or `$$$x$$$` (display style).
    Math(NodeMath),
}

impl NodeValue {
    /// Return a reference to the text of a `Text` inline, if this node is one.
    pub fn text(&self) -> Option<&String> {
        match *self {
            NodeValue::Text(ref t) => Some(t),
            _ => None,
        }
    }

    /// Return a reference to the math contents of a `Math` node, if this node is one.
    pub fn math(&self) -> Option<&NodeMath> {
        match *self {
            NodeValue::Math(ref m) => Some(m),
            _ => None,
        }
    }
}

/// A half-open range of zero-based source lines, `start..end`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineRange {
    /// The first line covered.
    pub start: usize,

    /// One past the last line covered.
    pub end: usize,
}

impl From<(usize, usize)> for LineRange {
    fn from((start, end): (usize, usize)) -> LineRange {
        LineRange { start, end }
    }
}

/// A single node in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast {
    /// The node value itself.
    pub value: NodeValue,

    /// The raw source of a paragraph, before inline scanning.  Empty for every other node.
    pub content: String,

    /// The source lines this node was built from.  Only block-level nodes carry one.
    pub lines: Option<LineRange>,

    /// The nesting depth the node was created at.  Top-level blocks are at 0 and the inlines of
    /// a top-level paragraph at 1.
    pub level: usize,
}

impl Ast {
    /// Create a new AST node with the given value at the given nesting level.
    pub fn new(value: NodeValue, level: usize) -> Self {
        Ast {
            value,
            content: String::new(),
            lines: None,
            level,
        }
    }

    /// Whether this node sits at block level.  Math is a block only when the block scanner
    /// produced it, which is recorded by its line range.
    pub fn is_block(&self) -> bool {
        match self.value {
            NodeValue::Document | NodeValue::Paragraph => true,
            NodeValue::Math(..) => self.lines.is_some(),
            _ => false,
        }
    }

    /// Create a new block-level AST node covering `lines`.
    pub fn new_block(value: NodeValue, lines: LineRange, level: usize) -> Self {
        Ast {
            value,
            content: String::new(),
            lines: Some(lines),
            level,
        }
    }
}

/// The type of a node within the document.
///
/// It is bound by the lifetime `'a`, which corresponds to the `Arena` nodes are allocated in.
/// `AstNode`s are almost handled as a reference itself bound by `'a`.  Child `Ast`s are wrapped
/// in `RefCell` for interior mutability.
pub type AstNode<'a> = Node<'a, RefCell<Ast>>;

impl<'a> From<NodeValue> for AstNode<'a> {
    /// Create a new AST node with the given value, at level 0.
    fn from(value: NodeValue) -> Self {
        Node::new(RefCell::new(Ast::new(value, 0)))
    }
}

impl<'a> From<Ast> for AstNode<'a> {
    fn from(ast: Ast) -> Self {
        Node::new(RefCell::new(ast))
    }
}
