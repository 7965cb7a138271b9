//! The inline phase: scanning a block's content for text, breaks and math.

use std::mem;

use crate::nodes::{Ast, NodeValue};
use crate::parser::ruler::{InlineRule, Ruler};
use crate::strings;

/// Scan state for one run of inline content.
///
/// All offsets are byte offsets into `src`.
#[derive(Debug)]
pub struct InlineState<'s> {
    /// The content being scanned.
    pub src: &'s str,

    /// The current scan position.
    pub pos: usize,

    /// The end of the region the tokenizer walks.  Rules may look past it.
    pub pos_max: usize,

    /// Nesting depth of emitted nodes.
    pub level: usize,

    /// Plain text not yet flushed into a `Text` node.
    pub pending: String,

    /// Inline nodes emitted so far, in order.
    pub nodes: Vec<Ast>,
}

impl<'s> InlineState<'s> {
    /// Scan all of `src` at the given nesting level.
    pub fn new(src: &'s str, level: usize) -> Self {
        InlineState {
            src,
            pos: 0,
            pos_max: src.len(),
            level,
            pending: String::new(),
            nodes: vec![],
        }
    }

    /// The byte at `pos`, if it is inside the content.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.src.as_bytes().get(pos).copied()
    }

    /// Emit an inline node, flushing any pending text ahead of it.
    pub fn push(&mut self, value: NodeValue) {
        self.push_pending();
        self.nodes.push(Ast::new(value, self.level));
    }

    /// Flush pending text into a `Text` node.
    pub fn push_pending(&mut self) {
        if !self.pending.is_empty() {
            let text = mem::take(&mut self.pending);
            self.nodes.push(Ast::new(NodeValue::Text(text), self.level));
        }
    }
}

/// Runs the inline rule chain over a run of content.
#[derive(Debug)]
pub struct InlineParser {
    /// The rule chain, tried in order at every position.
    pub ruler: Ruler<InlineRule>,
}

impl InlineParser {
    /// Walk `state.pos..state.pos_max`, offering each position to the rule chain.  Positions no
    /// rule claims become plain text.
    pub fn tokenize(&self, state: &mut InlineState<'_>) {
        let end = state.pos_max;

        while state.pos < end {
            if self.ruler.rules().any(|rule| rule(state, false)) {
                continue;
            }

            match state.src[state.pos..].chars().next() {
                Some(c) => {
                    state.pending.push(c);
                    state.pos += c.len_utf8();
                }
                None => break,
            }
        }

        state.push_pending();
    }
}

fn is_terminator(b: u8) -> bool {
    matches!(b, b'\n' | b'\\' | b'$')
}

/// Consumes a run of ordinary characters into pending text.
pub fn text(state: &mut InlineState<'_>, silent: bool) -> bool {
    let start = state.pos;
    let bytes = state.src.as_bytes();
    let mut pos = start;

    while pos < state.pos_max && !is_terminator(bytes[pos]) {
        pos += 1;
    }

    if pos == start {
        return false;
    }

    if !silent {
        state.pending.push_str(&state.src[start..pos]);
    }
    state.pos = pos;
    true
}

/// Turns a newline into a soft break, or a hard break after two or more trailing spaces.
pub fn newline(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.byte_at(state.pos) != Some(b'\n') {
        return false;
    }

    if !silent {
        let trailing = strings::rtrim_spaces(&mut state.pending);
        if trailing >= 2 {
            state.push(NodeValue::LineBreak);
        } else {
            state.push(NodeValue::SoftBreak);
        }
    }

    state.pos += 1;
    while state.pos < state.pos_max && state.byte_at(state.pos) == Some(b' ') {
        state.pos += 1;
    }
    true
}

/// Backslash escapes: `\$` is a literal dollar, `\` before a newline is a hard break.
pub fn escape(state: &mut InlineState<'_>, silent: bool) -> bool {
    if state.byte_at(state.pos) != Some(b'\\') {
        return false;
    }

    match state.byte_at(state.pos + 1) {
        Some(b'\n') if state.pos + 1 < state.pos_max => {
            if !silent {
                state.push(NodeValue::LineBreak);
            }
            state.pos += 2;
            while state.pos < state.pos_max && state.byte_at(state.pos) == Some(b' ') {
                state.pos += 1;
            }
        }
        Some(c) if c.is_ascii_punctuation() && state.pos + 1 < state.pos_max => {
            if !silent {
                state.pending.push(c as char);
            }
            state.pos += 2;
        }
        _ => {
            if !silent {
                state.pending.push('\\');
            }
            state.pos += 1;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parser() -> InlineParser {
        let mut ruler = Ruler::new();
        ruler.push("text", text as InlineRule);
        ruler.push("newline", newline as InlineRule);
        ruler.push("escape", escape as InlineRule);
        InlineParser { ruler }
    }

    fn scan(src: &str) -> Vec<NodeValue> {
        let mut state = InlineState::new(src, 1);
        parser().tokenize(&mut state);
        state.nodes.into_iter().map(|ast| ast.value).collect()
    }

    fn text_node(s: &str) -> NodeValue {
        NodeValue::Text(s.to_string())
    }

    #[test]
    fn plain_text_is_one_node() {
        assert_eq!(scan("hello world"), vec![text_node("hello world")]);
    }

    #[test]
    fn lone_dollars_become_text() {
        assert_eq!(scan("a $ b $$ c"), vec![text_node("a $ b $$ c")]);
    }

    #[test]
    fn soft_and_hard_breaks() {
        assert_eq!(
            scan("a \n   b  \nc"),
            vec![
                text_node("a"),
                NodeValue::SoftBreak,
                text_node("b"),
                NodeValue::LineBreak,
                text_node("c"),
            ]
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(scan("\\$\\$x\\q\\"), vec![text_node("$$x\\q\\")]);
        assert_eq!(
            scan("a\\\nb"),
            vec![text_node("a"), NodeValue::LineBreak, text_node("b")]
        );
    }

    #[test]
    fn silent_rules_do_not_emit() {
        let mut state = InlineState::new("abc\n", 1);
        assert!(text(&mut state, true));
        assert_eq!(state.pos, 3);
        assert!(newline(&mut state, true));
        assert_eq!(state.pos, 4);
        assert!(state.pending.is_empty());
        assert!(state.nodes.is_empty());
    }

    #[test]
    fn multibyte_fallback() {
        assert_eq!(scan("é$ü"), vec![text_node("é$ü")]);
    }

    #[test]
    fn nodes_carry_level() {
        let mut state = InlineState::new("a\nb", 3);
        parser().tokenize(&mut state);
        assert!(state.nodes.iter().all(|ast| ast.level == 3));
    }
}
