use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders markdown to HTML. Raw HTML in the source is dropped.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all())
        .filter(|event| !matches!(event, Event::Html(_)));

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(source: String) -> Element {
    let html_output = render_markdown(&source);

    rsx!(
        div {
            class: "prose prose-sm max-w-none",
            dangerous_inner_html: "{html_output}"
        }
    )
}
