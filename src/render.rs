//! Public rendering entry points
//!
//! Each operation has a `Result`-returning core and a public wrapper that
//! turns every failure into "return the input unchanged". A malformed
//! front matter block must never stop the rest of a document from
//! rendering.

use crate::core::{parse_front_matter, render_table, splitter, Layout, Mapping};
use crate::error::{MatterTableError, Result};
use crate::sanitize::Sanitizer;
use log::debug;
use std::borrow::Cow;

/// Decode, detect and parse the front matter of a raw document
fn parse_document(raw: &[u8]) -> Result<(Mapping, splitter::Split<'_>)> {
    let text = std::str::from_utf8(raw)?;
    let split = splitter::split(text).ok_or(MatterTableError::NoFrontMatter)?;
    let mapping = parse_front_matter(&split.header())?;
    Ok((mapping, split))
}

fn passthrough<'a>(raw: &'a [u8], operation: &str, err: &MatterTableError) -> Cow<'a, [u8]> {
    debug!("{}: returning input unchanged ({})", operation, err);
    Cow::Borrowed(raw)
}

/// Render the front matter of `raw` as an unsanitized table
pub fn try_render_table(raw: &[u8], layout: Layout) -> Result<String> {
    let (mapping, _) = parse_document(raw)?;
    Ok(render_table(&mapping, layout))
}

/// Render the front matter of `raw` as a table, or return `raw` unchanged
/// when there is no parseable front matter.
///
/// The result is not sanitized.
pub fn render_metadata_as_table(raw: &[u8], layout: Layout) -> Cow<'_, [u8]> {
    if raw.is_empty() {
        return Cow::Borrowed(raw);
    }
    match try_render_table(raw, layout) {
        Ok(table) => Cow::Owned(table.into_bytes()),
        Err(e) => passthrough(raw, "render_metadata_as_table", &e),
    }
}

/// Like [`render_metadata_as_table`], with the layout named by a selector
/// string. Unknown selectors return `raw` unchanged.
pub fn render_metadata_with_selector<'a>(raw: &'a [u8], selector: &str) -> Cow<'a, [u8]> {
    match selector.parse::<Layout>() {
        Ok(layout) => render_metadata_as_table(raw, layout),
        Err(e) => passthrough(raw, "render_metadata_with_selector", &e),
    }
}

/// The document body with its front matter removed
pub fn try_strip_metadata(raw: &[u8]) -> Result<String> {
    let (_, split) = parse_document(raw)?;
    Ok(split.body())
}

/// Strip the front matter from `raw`, or return `raw` unchanged when it has
/// none or it does not parse
pub fn strip_metadata_from_text(raw: &[u8]) -> Cow<'_, [u8]> {
    if raw.is_empty() {
        return Cow::Borrowed(raw);
    }
    match try_strip_metadata(raw) {
        Ok(body) => Cow::Owned(body.into_bytes()),
        Err(e) => passthrough(raw, "strip_metadata_from_text", &e),
    }
}

/// Renders front matter tables through an injected sanitizer
#[derive(Debug, Clone, Copy)]
pub struct MetadataRenderer<'s> {
    sanitizer: &'s Sanitizer,
}

impl<'s> MetadataRenderer<'s> {
    pub fn new(sanitizer: &'s Sanitizer) -> Self {
        Self { sanitizer }
    }

    pub fn sanitizer(&self) -> &'s Sanitizer {
        self.sanitizer
    }

    /// Vertical table, sanitized; input without front matter is sanitized
    /// and returned instead
    pub fn render_sanitized(&self, raw: &[u8]) -> Vec<u8> {
        let rendered = render_metadata_as_table(raw, Layout::Vertical);
        self.sanitizer.sanitize_bytes(&rendered)
    }

    pub fn render_sanitized_string(&self, raw: &[u8]) -> String {
        let rendered = render_metadata_as_table(raw, Layout::Vertical);
        self.sanitizer.sanitize(&String::from_utf8_lossy(&rendered))
    }
}

impl Default for MetadataRenderer<'static> {
    fn default() -> Self {
        Self::new(Sanitizer::shared())
    }
}

/// [`MetadataRenderer::render_sanitized`] with the shared sanitizer
pub fn render_sanitized(raw: &[u8]) -> Vec<u8> {
    MetadataRenderer::default().render_sanitized(raw)
}
