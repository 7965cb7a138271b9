//! Line bookkeeping and the block phase.

use std::cmp::min;

use crate::nodes::{Ast, LineRange, NodeValue};
use crate::parser::ruler::{BlockRule, Ruler};

/// The source buffer as the block phase sees it, together with the mutable scan state that
/// block rules advance.
///
/// All offsets are byte offsets into `src`.
#[derive(Debug)]
pub struct BlockState<'s> {
    /// The normalised document source.
    pub src: &'s str,

    /// Offset of the first byte of each line.
    pub b_marks: Vec<usize>,

    /// Offset of each line's terminating newline, or of the end of input.
    pub e_marks: Vec<usize>,

    /// Count of leading spaces on each line.
    pub t_shift: Vec<usize>,

    /// Indentation of the enclosing block.
    pub blk_indent: usize,

    /// The line the block tokenizer will look at next.
    pub line: usize,

    /// The number of lines in the document.
    pub line_max: usize,

    /// Nesting depth of emitted nodes.
    pub level: usize,

    /// Block nodes emitted so far, in document order.
    pub blocks: Vec<Ast>,
}

impl<'s> BlockState<'s> {
    /// Build line bookkeeping for `src`, which must already be normalised.
    pub fn new(src: &'s str) -> Self {
        let bytes = src.as_bytes();
        let len = bytes.len();

        let mut b_marks = vec![];
        let mut e_marks = vec![];
        let mut t_shift = vec![];

        let matcher = jetscii::bytes!(b'\n');
        let mut ix = 0;

        while ix < len {
            let eol = match matcher.find(&bytes[ix..]) {
                Some(offset) => ix + offset,
                None => len,
            };

            let indent = bytes[ix..eol].iter().take_while(|&&b| b == b' ').count();

            b_marks.push(ix);
            e_marks.push(eol);
            t_shift.push(indent);

            ix = eol + 1;
        }

        let line_max = b_marks.len();

        b_marks.push(len);
        e_marks.push(len);
        t_shift.push(0);

        BlockState {
            src,
            b_marks,
            e_marks,
            t_shift,
            blk_indent: 0,
            line: 0,
            line_max,
            level: 0,
            blocks: vec![],
        }
    }

    /// Emit a block node.
    pub fn push(&mut self, ast: Ast) {
        self.blocks.push(ast);
    }

    /// The byte at `pos`, if it is inside the buffer.
    pub fn byte_at(&self, pos: usize) -> Option<u8> {
        self.src.as_bytes().get(pos).copied()
    }

    /// Whether `line` has no content after its indentation.
    pub fn is_empty(&self, line: usize) -> bool {
        self.b_marks[line] + self.t_shift[line] >= self.e_marks[line]
    }

    /// The first line at or after `from` which is not empty.
    pub fn skip_empty_lines(&self, mut from: usize) -> usize {
        while from < self.line_max && self.is_empty(from) {
            from += 1;
        }
        from
    }

    /// Skip a run of `c` starting at `pos`, returning the offset just after it.
    pub fn skip_chars(&self, mut pos: usize, c: u8) -> usize {
        while self.byte_at(pos) == Some(c) {
            pos += 1;
        }
        pos
    }

    /// Skip a run of spaces starting at `pos`, returning the offset just after it.
    pub fn skip_spaces(&self, pos: usize) -> usize {
        self.skip_chars(pos, b' ')
    }

    /// The source of lines `begin..end`, each stripped of at most `indent` leading spaces.
    ///
    /// Every line keeps its terminating newline, except the last one when `keep_last_lf` is
    /// unset.
    pub fn get_lines(&self, begin: usize, end: usize, indent: usize, keep_last_lf: bool) -> String {
        let mut r = String::new();

        for line in begin..end {
            let first = self.b_marks[line] + min(self.t_shift[line], indent);
            let last = if line + 1 < end || keep_last_lf {
                min(self.e_marks[line] + 1, self.src.len())
            } else {
                self.e_marks[line]
            };

            if first < last {
                r.push_str(&self.src[first..last]);
            }
        }

        r
    }
}

/// Runs the block rule chain over a range of lines.
#[derive(Debug)]
pub struct BlockParser {
    /// The rule chain, tried in order at every line.
    pub ruler: Ruler<BlockRule>,
}

impl BlockParser {
    /// Offer each line in `start_line..end_line` to the rule chain.
    pub fn tokenize(&self, state: &mut BlockState<'_>, start_line: usize, end_line: usize) {
        let mut line = start_line;

        while line < end_line {
            line = state.skip_empty_lines(line);
            state.line = line;
            if line >= end_line {
                break;
            }

            if state.t_shift[line] < state.blk_indent {
                break;
            }

            let claimed = self.ruler.rules().any(|rule| rule(state, line, end_line));

            if !claimed || state.line <= line {
                state.line = line + 1;
            }

            line = state.line;
        }
    }
}

/// Claims a run of non-empty lines as a paragraph.
pub fn paragraph(state: &mut BlockState<'_>, start_line: usize, end_line: usize) -> bool {
    let mut next_line = start_line + 1;

    while next_line < end_line && !state.is_empty(next_line) {
        next_line += 1;
    }

    let content = state
        .get_lines(start_line, next_line, state.blk_indent, false)
        .trim()
        .to_string();

    state.line = next_line;

    let mut ast = Ast::new_block(
        NodeValue::Paragraph,
        LineRange::from((start_line, next_line)),
        state.level,
    );
    ast.content = content;
    state.push(ast);

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn line_marks() {
        let state = BlockState::new("ab\n  cd\n\nef");
        assert_eq!(state.line_max, 4);
        assert_eq!(state.b_marks, vec![0, 3, 8, 9, 11]);
        assert_eq!(state.e_marks, vec![2, 7, 8, 11, 11]);
        assert_eq!(state.t_shift, vec![0, 2, 0, 0, 0]);
    }

    #[test]
    fn trailing_newline_adds_no_line() {
        let state = BlockState::new("ab\n");
        assert_eq!(state.line_max, 1);
        assert_eq!(BlockState::new("").line_max, 0);
    }

    #[test]
    fn empty_lines() {
        let state = BlockState::new("a\n   \n\nb\n");
        assert!(!state.is_empty(0));
        assert!(state.is_empty(1));
        assert!(state.is_empty(2));
        assert_eq!(state.skip_empty_lines(1), 3);
        assert_eq!(state.skip_empty_lines(4), 4);
    }

    #[test]
    fn get_lines_strips_indent() {
        let state = BlockState::new("  a\n    b\nc\n");
        assert_eq!(state.get_lines(0, 3, 2, true), "a\n  b\nc\n");
        assert_eq!(state.get_lines(0, 2, 2, false), "a\n  b");
        assert_eq!(state.get_lines(1, 1, 2, true), "");
    }

    #[test]
    fn skip_primitives() {
        let state = BlockState::new("$$$  x");
        assert_eq!(state.skip_chars(0, b'$'), 3);
        assert_eq!(state.skip_spaces(3), 5);
        assert_eq!(state.skip_chars(6, b'$'), 6);
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let mut ruler = Ruler::new();
        ruler.push("paragraph", paragraph as BlockRule);
        let parser = BlockParser { ruler };

        let mut state = BlockState::new("one\ntwo\n\n\nthree\n");
        let line_max = state.line_max;
        parser.tokenize(&mut state, 0, line_max);

        assert_eq!(state.blocks.len(), 2);
        assert_eq!(state.blocks[0].content, "one\ntwo");
        assert_eq!(state.blocks[0].lines, Some((0, 2).into()));
        assert_eq!(state.blocks[1].content, "three");
        assert_eq!(state.blocks[1].lines, Some((4, 5).into()));
        assert_eq!(state.line, 5);
    }

    #[test]
    fn unclaimed_lines_are_skipped() {
        let parser = BlockParser {
            ruler: Ruler::new(),
        };
        let mut state = BlockState::new("a\nb\n");
        parser.tokenize(&mut state, 0, 2);
        assert!(state.blocks.is_empty());
        assert_eq!(state.line, 2);
    }
}
