#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use dollarmath::{markdown_to_html, Options};

#[derive(Arbitrary, Debug)]
struct Input<'s> {
    markdown: &'s str,
    options: Options,
}

fuzz_target!(|input: Input| {
    markdown_to_html(input.markdown, &input.options);
});
