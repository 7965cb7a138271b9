#![no_main]

use libfuzzer_sys::fuzz_target;

use dollarmath::{block_math, inline_math, BlockState, InlineState};

// Drive the scanners directly with arbitrary bounds.  They must not panic, must move forward
// on every claim, and must leave extracted content trimmed.
fuzz_target!(|input: (&str, u8, u8, bool)| {
    let (src, cut, indent, silent) = input;

    if !src.contains('\r') && !src.contains('\t') {
        let mut state = BlockState::new(src);
        state.blk_indent = indent as usize % 8;
        let end_line = state.line_max.min(cut as usize);

        let mut line = 0;
        while line < end_line {
            if block_math(&mut state, line, end_line) {
                assert!(state.line > line && state.line <= end_line);
                line = state.line;
            } else {
                line += 1;
            }
        }

        for ast in &state.blocks {
            let math = ast.value.math().unwrap();
            assert!(math.display_math);
            assert!(!math.literal.starts_with(' ') && !math.literal.ends_with(' '));
        }
    }

    let mut state = InlineState::new(src, 1);
    state.pos_max = src.len().min(cut as usize);
    while !src.is_char_boundary(state.pos_max) {
        state.pos_max -= 1;
    }

    while state.pos < state.pos_max {
        let before = state.pos;
        if !inline_math(&mut state, silent) {
            match src[state.pos..].chars().next() {
                Some(c) => state.pos += c.len_utf8(),
                None => break,
            }
        }
        assert!(state.pos > before);
    }

    if silent {
        assert!(state.nodes.is_empty() && state.pending.is_empty());
    }
});
