//! Whole-document rendering: front matter table followed by the body
//!
//! The body goes through `pulldown-cmark`; the combined markup is
//! sanitized once at the end.

use crate::core::Layout;
use crate::render::{strip_metadata_from_text, try_render_table, MetadataRenderer};
use log::debug;
use pulldown_cmark::{html, Options, Parser};
use std::str::FromStr;

/// How the document body is turned into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyMode {
    /// Render the body (front matter removed) as GitHub-flavoured Markdown
    #[default]
    Gfm,
    /// Render the whole input, front matter included, as Markdown
    Raw,
}

impl FromStr for BodyMode {
    type Err = std::convert::Infallible;

    /// `"gfm"` selects [`BodyMode::Gfm`]; every other value is raw mode
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "gfm" => Self::Gfm,
            _ => Self::Raw,
        })
    }
}

/// Options for [`render_page`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub mode: BodyMode,
    /// Layout selector for the metadata table
    pub layout: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            mode: BodyMode::Gfm,
            layout: "vertical".to_string(),
        }
    }
}

/// Render Markdown to unsanitized HTML with the GFM extensions enabled
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, parser);
    html_output
}

/// Render the metadata table and the body of `raw` as one sanitized page.
///
/// A document without usable front matter (or with an unknown layout
/// selector) gets no table; the body is rendered either way.
pub fn render_page(renderer: &MetadataRenderer<'_>, raw: &[u8], options: &PageOptions) -> Vec<u8> {
    if raw.is_empty() {
        return Vec::new();
    }

    let table = options
        .layout
        .parse::<Layout>()
        .and_then(|layout| try_render_table(raw, layout))
        .unwrap_or_else(|e| {
            debug!("render_page: no metadata table ({})", e);
            String::new()
        });

    let body_source = match options.mode {
        BodyMode::Gfm => strip_metadata_from_text(raw),
        BodyMode::Raw => raw.into(),
    };
    let body = markdown_to_html(&String::from_utf8_lossy(&body_source));

    let mut page = table;
    page.push_str(&body);
    renderer.sanitizer().sanitize(&page).into_bytes()
}
