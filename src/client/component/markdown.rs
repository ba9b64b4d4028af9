use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders Discord-flavoured text (bold, italics, code, links) as HTML.
///
/// Raw HTML in the input is dropped so user text cannot inject markup.
pub fn to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, Options::ENABLE_STRIKETHROUGH).filter(|event| {
        !matches!(event, Event::Html(_))
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(text: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let rendered = to_html(&text);

    rsx!(div {
        class: "prose max-w-none {class}",
        dangerous_inner_html: rendered,
    })
}
