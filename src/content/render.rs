//! Markdown to HTML for presentation collaborators
//!
//! Fenced code blocks keep their info string as a `language-<lang>` class so a
//! client-side highlighter can pick them up.

use pulldown_cmark::{Options, Parser, html};

/// Render a markdown body to HTML.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
