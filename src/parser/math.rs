//! Math delimited by runs of `$`.
//!
//! Two scanners share the work.  [`block_math`] recognises fences: a line opening with exactly
//! `$$`, closed by a later line holding only a run of at least two `$`.  [`inline_math`]
//! recognises `$$…$$` (inline style) and `$$$…$$$` (display style) anywhere in running text;
//! a span closes only on a run of exactly the opening length.

use crate::nodes::{Ast, LineRange, NodeValue};
use crate::parser::block::BlockState;
use crate::parser::inlines::InlineState;
use crate::parser::ruler::{BlockRule, InlineRule};
use crate::parser::Parser;
use crate::strings;

const DOLLAR: u8 = b'$';
const FENCE_LENGTH: usize = 2;
const MIN_INLINE_DOLLARS: usize = 2;
const MAX_INLINE_DOLLARS: usize = 3;
const CODE_INDENT: usize = 4;

/// A math expression, inline or block.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct NodeMath {
    /// Whether this is display math: a fenced block, or an inline span using `$$$`.
    pub display_math: bool,

    /// The contents between the delimiters, with every run of spaces and newlines collapsed to
    /// one space and the ends trimmed.  Never includes the delimiters.
    pub literal: String,
}

/// Add both math scanners to `parser`.  The block scanner goes ahead of `paragraph` so fences
/// are seen before paragraphs swallow them; the inline scanner goes at the end of the chain.
pub fn register(parser: &mut Parser) {
    if !parser.block.ruler.before("paragraph", "math", block_math as BlockRule) {
        parser.block.ruler.push("math", block_math as BlockRule);
    }
    parser.inline.ruler.push("math", inline_math as InlineRule);
}

/// Recognise a fenced math block opening at `start_line`.  `end_line` is the exclusive bound
/// of the enclosing block; an unterminated fence is closed there.
pub fn block_math(state: &mut BlockState<'_>, start_line: usize, end_line: usize) -> bool {
    let mut pos = state.b_marks[start_line] + state.t_shift[start_line];
    let max = state.e_marks[start_line];

    if pos + 1 > max {
        return false;
    }

    if state.byte_at(pos) != Some(DOLLAR) {
        return false;
    }

    let mem = pos;
    pos = state.skip_chars(pos, DOLLAR);
    let len = pos - mem;

    if len != FENCE_LENGTH {
        return false;
    }

    let mut next_line = start_line;
    let mut have_end_marker = false;

    loop {
        next_line += 1;
        if next_line >= end_line {
            // Closed by the end of the document or of the parent.
            break;
        }

        let mem = state.b_marks[next_line] + state.t_shift[next_line];
        let max = state.e_marks[next_line];

        if mem < max && state.t_shift[next_line] < state.blk_indent {
            // A non-empty line outdented past the parent ends it, and this block with it.
            break;
        }

        if state.byte_at(mem) != Some(DOLLAR) {
            continue;
        }

        if state.t_shift[next_line].saturating_sub(state.blk_indent) >= CODE_INDENT {
            continue;
        }

        let pos = state.skip_chars(mem, DOLLAR);
        if pos - mem < len {
            continue;
        }

        let pos = state.skip_spaces(pos);
        if pos < max {
            continue;
        }

        have_end_marker = true;
        break;
    }

    let indent = state.t_shift[start_line];
    state.line = next_line + if have_end_marker { 1 } else { 0 };

    let literal =
        strings::collapse_whitespace(&state.get_lines(start_line + 1, next_line, indent, true));

    let ast = Ast::new_block(
        NodeValue::Math(NodeMath {
            display_math: true,
            literal,
        }),
        LineRange::from((start_line, state.line)),
        state.level,
    );
    state.push(ast);

    true
}

/// Recognise an inline math span starting at `state.pos`.
///
/// The closing run is searched for through the whole of `state.src`, not just up to
/// `state.pos_max`, so a span may close beyond the current region.  If no closing run of the
/// same length exists the opening run is consumed as literal text.
pub fn inline_math(state: &mut InlineState<'_>, silent: bool) -> bool {
    let src = state.src;
    let bytes = src.as_bytes();
    let start = state.pos;
    let max = state.pos_max;

    if bytes.get(start) != Some(&DOLLAR) {
        return false;
    }

    let mut pos = start + 1;
    while pos < max && bytes[pos] == DOLLAR {
        pos += 1;
    }

    let opendollars = pos - start;
    if !(MIN_INLINE_DOLLARS..=MAX_INLINE_DOLLARS).contains(&opendollars) {
        return false;
    }

    let finder = jetscii::bytes!(DOLLAR);
    let mut match_end = pos;

    while let Some(offset) = finder.find(&bytes[match_end..]) {
        let match_start = match_end + offset;
        match_end = match_start + 1;

        while bytes.get(match_end) == Some(&DOLLAR) {
            match_end += 1;
        }

        if match_end - match_start == opendollars {
            if !silent {
                let literal = strings::collapse_whitespace(&src[pos..match_start]);
                state.push(NodeValue::Math(NodeMath {
                    display_math: opendollars > MIN_INLINE_DOLLARS,
                    literal,
                }));
            }

            state.pos = match_end;
            return true;
        }
    }

    if !silent {
        state.pending.push_str(&src[start..pos]);
    }
    state.pos = pos;

    true
}
