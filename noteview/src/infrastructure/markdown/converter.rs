use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

lazy_static! {
    static ref NEWLINE_TAG_REGEX: Regex =
        Regex::new(r"\n?(<.+?>)\n?").expect("Failed to compile newline tag regex");
}

/// Render Markdown through a real CommonMark parser.
///
/// Unlike the regex chain, consecutive list items share one list and task
/// items become proper checkbox list entries.
pub fn markdown_to_html(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    remove_newlines_around_tags(&html_output)
}

fn remove_newlines_around_tags(html: &str) -> String {
    NEWLINE_TAG_REGEX.replace_all(html, "$1").to_string()
}
