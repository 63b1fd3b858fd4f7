// src/ports/html.rs
use html_escape::encode_text;
use tracing::instrument;

use crate::domain::Note;
use crate::infrastructure::markdown::RenderMode;
use crate::util::time::format_long;

const STYLE: &str = r#"
        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
            line-height: 1.6;
            max-width: 860px;
            margin: 2rem auto;
            padding: 0 1rem;
            background-color: #111318;
            color: #e6e6e6;
        }
        a { color: #7aa2f7; }
        .card {
            background: #1a1d24;
            border: 1px solid #2a2e38;
            border-radius: 8px;
            padding: 2rem;
        }
        .meta {
            font-size: 0.9em;
            color: #9aa0aa;
        }
        .badge, .tag {
            display: inline-block;
            background: #2a2e38;
            padding: 2px 8px;
            border-radius: 4px;
            margin-right: 4px;
            font-size: 0.8em;
        }
        pre {
            white-space: pre-wrap;
            word-wrap: break-word;
            background-color: #0d0f13;
            padding: 1rem;
            border-radius: 4px;
        }
        code {
            background-color: #0d0f13;
            padding: 2px 4px;
            border-radius: 3px;
            font-family: monospace;
        }
        blockquote {
            border-left: 3px solid #2a2e38;
            margin: 0;
            padding-left: 1rem;
            color: #9aa0aa;
        }
        .section {
            margin-top: 2rem;
        }
        .version {
            padding: 0.5rem 0;
            border-bottom: 1px solid #2a2e38;
        }"#;

/// Renders notes as standalone HTML pages
#[derive(Debug, Default)]
pub struct HtmlPresenter {
    mode: RenderMode,
}

impl HtmlPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: RenderMode) -> Self {
        Self { mode }
    }

    /// Markdown body only, no page chrome
    #[instrument(level = "trace", skip(self, content))]
    pub fn render_body(&self, content: &str) -> String {
        self.mode.render(content)
    }

    pub fn render(&self, note: &Note) -> String {
        let visibility = if note.is_public { "Public" } else { "Private" };
        let updated_by = note
            .updated_by
            .as_deref()
            .map(|editor| format!(" by {}", encode_text(editor)))
            .unwrap_or_default();
        let tags = if note.tags.is_empty() {
            "<span class=\"meta\">No tags</span>".to_string()
        } else {
            note.tags
                .iter()
                .map(|tag| format!("<span class=\"tag\">{}</span>", encode_text(tag)))
                .collect::<Vec<_>>()
                .join("")
        };

        let mut sections = String::new();
        if !note.shared_with.is_empty() {
            sections.push_str(&self.render_shared_with(note));
        }
        if !note.versions.is_empty() {
            sections.push_str(&self.render_versions(note));
        }

        let body = format!(
            r#"<header>
        <h1>{title}</h1>
        <div class="meta">Updated {updated}{updated_by} <span class="badge">{visibility}</span></div>
        <div class="tags">{tags}</div>
    </header>
    <article class="card">{content}</article>{sections}"#,
            title = encode_text(&note.title),
            updated = format_long(&note.updated_at),
            updated_by = updated_by,
            visibility = visibility,
            tags = tags,
            content = self.render_body(&note.content),
            sections = sections,
        );
        page(&note.title, &body)
    }

    /// Page for a bare Markdown document that is not part of the working set
    pub fn render_document(&self, title: &str, markdown: &str) -> String {
        let body = format!(
            r#"<article class="card">{}</article>"#,
            self.render_body(markdown)
        );
        page(title, &body)
    }

    fn render_shared_with(&self, note: &Note) -> String {
        let people = note
            .shared_with
            .iter()
            .map(|who| format!("<span class=\"tag\">{}</span>", encode_text(who)))
            .collect::<Vec<_>>()
            .join("");
        format!(
            r#"
    <div class="section">
        <h3>Shared with</h3>
        <div>{people}</div>
    </div>"#
        )
    }

    fn render_versions(&self, note: &Note) -> String {
        let last = note.versions.len() - 1;
        let rows = note
            .versions
            .iter()
            .enumerate()
            .map(|(index, version)| {
                let label = if index == last {
                    "Current version".to_string()
                } else {
                    format!("Version {}", index + 1)
                };
                format!(
                    r#"<div class="version"><strong>{label}</strong><div class="meta">{} by {}</div></div>"#,
                    format_long(&version.timestamp),
                    encode_text(&version.editor)
                )
            })
            .collect::<Vec<_>>()
            .join("");
        format!(
            r#"
    <div class="section">
        <h3>Version history</h3>
        {rows}
    </div>"#
        )
    }
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <style>{style}
    </style>
</head>
<body>
    {body}
</body>
</html>"#,
        title = encode_text(title),
        style = STYLE,
        body = body,
    )
}
