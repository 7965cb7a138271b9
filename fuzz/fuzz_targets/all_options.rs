#![no_main]

use libfuzzer_sys::fuzz_target;

use dollarmath::options::{Extension, Render};
use dollarmath::{markdown_to_html, markdown_to_html_with_plugins, Options, Plugins};

fuzz_target!(|s: &str| {
    let options = Options {
        extension: Extension { math_dollars: true },
        render: Render { hardbreaks: true },
    };

    markdown_to_html(s, &options);

    let renderer = |literal: &str, display_math: bool| {
        assert!(!literal.starts_with(' ') && !literal.ends_with(' '));
        format!("{}{}", display_math, literal)
    };
    let mut plugins = Plugins::default();
    plugins.render.math_renderer = Some(&renderer);

    markdown_to_html_with_plugins(s, &options, &plugins);
});
