use std::borrow::Cow;

const TAB_STOP: usize = 4;

/// Prepare raw input for line bookkeeping: line endings become `\n`, NUL becomes U+FFFD and
/// tabs are expanded to spaces, so indentation is a plain count of spaces.
pub fn normalize_source(s: &str) -> Cow<'_, str> {
    if !s.bytes().any(|b| matches!(b, b'\r' | b'\t' | 0)) {
        return Cow::Borrowed(s);
    }

    let mut r = String::with_capacity(s.len());
    let mut column = 0;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                r.push('\n');
                column = 0;
            }
            '\n' => {
                r.push('\n');
                column = 0;
            }
            '\t' => {
                let width = TAB_STOP - column % TAB_STOP;
                r.extend(std::iter::repeat(' ').take(width));
                column += width;
            }
            '\0' => {
                r.push('\u{fffd}');
                column += 1;
            }
            c => {
                r.push(c);
                column += 1;
            }
        }
    }

    Cow::Owned(r)
}

/// Collapse every run of spaces and newlines to a single space, then trim the result.
///
/// Applying this twice gives the same string as applying it once.
pub fn collapse_whitespace(s: &str) -> String {
    let mut r = String::with_capacity(s.len());
    let mut in_run = false;

    for c in s.chars() {
        if c == ' ' || c == '\n' {
            if !in_run {
                r.push(' ');
                in_run = true;
            }
        } else {
            r.push(c);
            in_run = false;
        }
    }

    r.trim().to_string()
}

pub fn rtrim_spaces(s: &mut String) -> usize {
    let trimmed = s.trim_end_matches(' ').len();
    let removed = s.len() - trimmed;
    s.truncate(trimmed);
    removed
}
