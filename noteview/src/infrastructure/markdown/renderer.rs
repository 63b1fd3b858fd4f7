//! Regex-chain Markdown renderer.
//!
//! Every rule rewrites the output of the previous one, so the order below is
//! part of the behavior: bold runs before italic, images before links, the
//! generic list rule before the task-list post-pass. Raw HTML in the input is
//! passed through untouched.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use tracing::instrument;

lazy_static! {
    static ref HEADING_REGEXES: Vec<(usize, Regex)> = (1..=6)
        .map(|level| {
            let pattern = format!(r"(?m)^#{{{level}}} (.*)$");
            (level, Regex::new(&pattern).expect("Failed to compile heading regex"))
        })
        .collect();
    static ref BOLD_REGEX: Regex =
        Regex::new(r"\*\*(.*)\*\*").expect("Failed to compile bold regex");
    static ref ITALIC_REGEX: Regex =
        Regex::new(r"\*(.*)\*").expect("Failed to compile italic regex");
    static ref IMAGE_REGEX: Regex =
        Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("Failed to compile image regex");
    static ref LINK_REGEX: Regex =
        Regex::new(r"\[(.*?)\]\((.*?)\)").expect("Failed to compile link regex");
    static ref BLOCKQUOTE_REGEX: Regex =
        Regex::new(r"(?m)^> (.*)$").expect("Failed to compile blockquote regex");
    static ref UNORDERED_ITEM_REGEX: Regex =
        Regex::new(r"(?m)^- (.*)$").expect("Failed to compile list item regex");
    static ref ORDERED_ITEM_REGEX: Regex =
        Regex::new(r"(?m)^[0-9]+\. (.*)$").expect("Failed to compile ordered item regex");
    static ref CODE_FENCE_REGEX: Regex =
        Regex::new(r"(?m)^```([\s\S]*?)```$").expect("Failed to compile code fence regex");
    static ref INLINE_CODE_REGEX: Regex =
        Regex::new(r"`([^`]+)`").expect("Failed to compile inline code regex");
    static ref RULE_REGEX: Regex =
        Regex::new(r"(?m)^---$").expect("Failed to compile horizontal rule regex");
    // Task items as left behind by the unordered list rule: `<ul><li>[ ] text</li></ul>`
    static ref WRAPPED_TASK_REGEX: Regex = Regex::new(r"<ul><li>\[( |x)\] (.*?)</li></ul>")
        .expect("Failed to compile task item regex");
    // Task items the list rule did not see (indented ones): `- [ ] text` up to the next break
    static ref BARE_TASK_REGEX: Regex =
        Regex::new(r"- \[( |x)\] (.*?)(<br />|$)").expect("Failed to compile bare task regex");
}

/// Convert Markdown to HTML with the ordered substitution pipeline.
///
/// Never fails: malformed Markdown is left as literal or partially converted text.
#[instrument(level = "trace", skip(markdown), fields(len = markdown.len()))]
pub fn render_markdown(markdown: &str) -> String {
    // line anchors below only understand `\n`
    let mut html = markdown.replace("\r\n", "\n");

    for (level, regex) in HEADING_REGEXES.iter() {
        html = regex
            .replace_all(&html, format!("<h{level}>${{1}}</h{level}>").as_str())
            .into_owned();
    }

    html = BOLD_REGEX
        .replace_all(&html, "<strong>${1}</strong>")
        .into_owned();
    html = ITALIC_REGEX.replace_all(&html, "<em>${1}</em>").into_owned();
    html = IMAGE_REGEX
        .replace_all(&html, r#"<img alt="${1}" src="${2}" />"#)
        .into_owned();
    html = LINK_REGEX
        .replace_all(&html, r#"<a href="${2}">${1}</a>"#)
        .into_owned();
    html = BLOCKQUOTE_REGEX
        .replace_all(&html, "<blockquote>${1}</blockquote>")
        .into_owned();
    html = UNORDERED_ITEM_REGEX
        .replace_all(&html, "<ul><li>${1}</li></ul>")
        .into_owned();
    html = ORDERED_ITEM_REGEX
        .replace_all(&html, "<ol><li>${1}</li></ol>")
        .into_owned();
    html = CODE_FENCE_REGEX
        .replace_all(&html, "<pre><code>${1}</code></pre>")
        .into_owned();
    html = INLINE_CODE_REGEX
        .replace_all(&html, "<code>${1}</code>")
        .into_owned();
    html = RULE_REGEX.replace_all(&html, "<hr />").into_owned();
    html = html.replace('\n', "<br />");

    render_task_items(&html)
}

fn render_task_items(html: &str) -> String {
    let html = WRAPPED_TASK_REGEX.replace_all(html, |caps: &Captures| {
        format!("<ul><li>{}</li></ul>", task_row(&caps[1] == "x", &caps[2]))
    });

    BARE_TASK_REGEX
        .replace_all(&html, |caps: &Captures| {
            format!("{}{}", task_row(&caps[1] == "x", &caps[2]), &caps[3])
        })
        .into_owned()
}

fn task_row(checked: bool, label: &str) -> String {
    let checkbox = if checked {
        r#"<input type="checkbox" checked disabled />"#
    } else {
        r#"<input type="checkbox" disabled />"#
    };
    format!(r#"<div class="flex items-center space-x-2">{checkbox}<span>{label}</span></div>"#)
}
