use super::*;
use ntest::test_case;

#[test_case("t $$2+2$$", "<p>t <math>2+2</math></p>\n")]
#[test_case("t $$   x + y  $$", "<p>t <math>x + y</math></p>\n")]
#[test_case("a $$b$$ c", "<p>a <math>b</math> c</p>\n")]
#[test_case("t $$p\nq$$", "<p>t <math>p q</math></p>\n")]
#[test_case("t $$m < n$$", "<p>t <math>m &lt; n</math></p>\n")]
#[test_case(
    "t $$u$$ and $$v$$",
    "<p>t <math>u</math> and <math>v</math></p>\n"
)]
#[test_case("t $$f$$$g$$", "<p>t <math>f$$$g</math></p>\n")]
#[test_case("t $$ $$", "<p>t <math></math></p>\n")]
#[test_case("t $$z\u{a0}$$", "<p>t <math>z</math></p>\n")]
fn math_dollars_inline(markdown: &str, html: &str) {
    let result = html
        .replace("<math>", "<span data-math-style=\"inline\">")
        .replace("</math>", "</span>");

    html_opts!([extension.math_dollars], markdown, &result);
}

#[test_case("$$$x = y$$$", "<p><math>x = y</math></p>\n")]
#[test_case(
    "text $$$\\sum_i i$$$ more",
    "<p>text <math>\\sum_i i</math> more</p>\n"
)]
#[test_case("$$$$h$$$", "<p>$<math>h</math></p>\n")]
#[test_case("$$$k$$ l$$$", "<p><math>k$$ l</math></p>\n")]
#[test_case("$$$\nr\n$$$\n", "<p><math>r</math></p>\n")]
fn math_dollars_inline_display(markdown: &str, html: &str) {
    let result = html
        .replace("<math>", "<span data-math-style=\"display\">")
        .replace("</math>", "</span>");

    html_opts!([extension.math_dollars], markdown, &result);
}

#[test_case("$x$", "<p>$x$</p>\n")]
#[test_case("t $$a$$$", "<p>t $$a$$$</p>\n")]
#[test_case("$$$$s$$", "<p>$$$$s$$</p>\n")]
#[test_case("$$$$", "<p>$$$$</p>\n")]
#[test_case("\\$$w$$", "<p>$$w$$</p>\n")]
#[test_case("costs $$5 or $$$6", "<p>costs $$5 or $$$6</p>\n")]
fn math_dollars_literal(markdown: &str, html: &str) {
    html_opts!([extension.math_dollars], markdown, html);
}

#[test_case("$$\nx^2\n$$\n", "<math>x^2</math>\n")]
#[test_case("$$\n  a +\n  b\n$$\n", "<math>a + b</math>\n")]
#[test_case("  $$\n    c\n  $$\n", "<math>c</math>\n")]
#[test_case("$$\nd\n$$$$\n", "<math>d</math>\n")]
#[test_case("$$\ne\n$$ f\n$$\n", "<math>e $$ f</math>\n")]
#[test_case("$$\ng\n    $$\n$$\n", "<math>g $$</math>\n")]
#[test_case("$$\nh\n$$   \n", "<math>h</math>\n")]
#[test_case("$$\nk\n\nl\n$$\n", "<math>k l</math>\n")]
#[test_case("$$\n$$\n", "<math></math>\n")]
fn math_dollars_block(markdown: &str, html: &str) {
    let result = html
        .replace("<math>", "<span data-math-style=\"display\">")
        .replace("</math>", "</span>");

    html_opts!([extension.math_dollars], markdown, &result);
}

#[test]
fn math_block_unterminated_runs_to_end() {
    html_opts!(
        [extension.math_dollars],
        "$$\nj\nk\n",
        "<span data-math-style=\"display\">j k</span>\n",
    );
}

#[test]
fn math_block_then_paragraph() {
    html_opts!(
        [extension.math_dollars],
        concat!("$$\n", "x\n", "$$\n", "after\n"),
        concat!(
            "<span data-math-style=\"display\">x</span>\n",
            "<p>after</p>\n"
        ),
    );
}

#[test]
fn math_blocks_back_to_back() {
    html_opts!(
        [extension.math_dollars],
        concat!("$$\n", "a\n", "$$\n", "$$\n", "b\n", "$$\n"),
        concat!(
            "<span data-math-style=\"display\">a</span>\n",
            "<span data-math-style=\"display\">b</span>\n"
        ),
    );
}

#[test]
fn math_fence_does_not_interrupt_paragraph() {
    html_opts!(
        [extension.math_dollars],
        concat!("before\n", "$$\n", "x\n", "$$\n"),
        "<p>before\n<span data-math-style=\"inline\">x</span></p>\n",
    );

    html_opts!(
        [extension.math_dollars],
        concat!("before\n", "\n", "$$\n", "x\n", "$$\n"),
        concat!(
            "<p>before</p>\n",
            "<span data-math-style=\"display\">x</span>\n"
        ),
    );
}

#[test]
fn math_fence_line_tail_is_dropped() {
    html_opts!(
        [extension.math_dollars],
        "$$ tail\ni\n$$\n",
        "<span data-math-style=\"display\">i</span>\n",
    );
    // A paragraph opening with `$$` is a fence, closed here by the end of the document.
    html_opts!(
        [extension.math_dollars],
        "$$a$$ starts a paragraph",
        "<span data-math-style=\"display\"></span>\n",
    );
    html_opts!(
        [extension.math_dollars],
        "$$a$$\nnext\n",
        "<span data-math-style=\"display\">next</span>\n",
    );
    html_opts!(
        [extension.math_dollars],
        "so $$a$$ starts a paragraph",
        "<p>so <span data-math-style=\"inline\">a</span> starts a paragraph</p>\n",
    );
}

#[test]
fn math_disabled() {
    html("$$x$$", "<p>$$x$$</p>\n");
    html("$$$x$$$", "<p>$$$x$$$</p>\n");
    html("$$\nx\n$$\n", "<p>$$\nx\n$$</p>\n");
}

#[test]
fn math_nodes() {
    assert_eq!(
        blocks("$$\n\\frac{1}{2}\n$$\n"),
        vec![NodeValue::Math(nodes::NodeMath {
            display_math: true,
            literal: "\\frac{1}{2}".to_string(),
        })]
    );

    let arena = Arena::new();
    let mut options = Options::default();
    options.extension.math_dollars = true;
    let root = parse_document(&arena, "t $$a$$ $$$b$$$", &options);

    let para = root.first_child().unwrap();
    let inlines = para
        .children()
        .map(|n| n.data.borrow().clone())
        .collect::<Vec<_>>();

    assert_eq!(inlines.len(), 4);
    assert_eq!(inlines[0].value.text().map(String::as_str), Some("t "));
    assert_eq!(
        inlines[1].value.math(),
        Some(&nodes::NodeMath {
            display_math: false,
            literal: "a".to_string(),
        })
    );
    assert_eq!(inlines[2].value.text().map(String::as_str), Some(" "));
    assert!(inlines[3].value.math().unwrap().display_math);

    // Inline math never carries a line range, so it never renders as a block.
    assert!(inlines.iter().all(|ast| ast.lines.is_none() && !ast.is_block()));
}
