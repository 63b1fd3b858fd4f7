pub mod converter;
pub mod renderer;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use converter::markdown_to_html;
pub use renderer::render_markdown;

/// Which Markdown pipeline turns note content into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Ordered regex substitutions, quirks included
    #[default]
    Compat,
    /// Parse-tree rendering through pulldown-cmark
    CommonMark,
}

impl RenderMode {
    pub fn render(&self, markdown: &str) -> String {
        match self {
            RenderMode::Compat => render_markdown(markdown),
            RenderMode::CommonMark => markdown_to_html(markdown),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderMode::Compat => f.write_str("compat"),
            RenderMode::CommonMark => f.write_str("commonmark"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compat" => Ok(RenderMode::Compat),
            "commonmark" | "cmark" => Ok(RenderMode::CommonMark),
            other => Err(format!("unknown render mode: {other}")),
        }
    }
}
