use pulldown_cmark::{Options, Parser, html};

/// Render preprocessed markdown to HTML.
///
/// Insertion happens on raw lines before this point; the renderer sees the
/// document with every marker already replaced.
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
