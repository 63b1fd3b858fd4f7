// src/util/text.rs
use html_escape::decode_html_entities;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK_TAG_REGEX: Regex = Regex::new(r"</?(p|div|br|li|ul|ol|blockquote|pre|h[1-6])[^>]*>")
        .expect("Failed to compile block tag regex");
    static ref TAG_REGEX: Regex = Regex::new(r"<[^>]+>").expect("Failed to compile tag regex");
}

fn plain_lines(html: &str) -> String {
    // Decode HTML entities first
    let decoded = decode_html_entities(html).to_string();

    // Replace block-level HTML tags with newlines to preserve line breaks
    let with_newlines = BLOCK_TAG_REGEX.replace_all(&decoded, "\n").into_owned();

    // Remove all remaining HTML tags
    TAG_REGEX.replace_all(&with_newlines, "").into_owned()
}

/// Extract the first line of plain text from HTML content.
///
/// # Examples
///
/// ```
/// use noteview::util::text::extract_first_line;
///
/// let html = "<h1>Project Kickoff</h1><br /><h2>Attendees</h2>";
/// assert_eq!(extract_first_line(html), "Project Kickoff");
/// ```
pub fn extract_first_line(html: &str) -> String {
    plain_lines(html)
        .lines()
        .map(|line| line.trim())
        .find(|line| !line.is_empty())
        .unwrap_or("")
        .to_string()
}

/// Plain-text preview of rendered HTML, cut at `max_chars` characters with an ellipsis.
///
/// Lines are joined with single spaces.
pub fn excerpt(html: &str, max_chars: usize) -> String {
    let text = plain_lines(html)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
