//! mattertable: render YAML front matter of markdown documents as HTML tables
//!
//! Documents such as repository readmes may open with a metadata block
//! delimited by `---` lines. This library shows that block as an HTML
//! table instead of raw YAML, and strips it from the text so the body can
//! be rendered on its own.
//!
//! # Quick Start
//!
//! ```rust
//! use mattertable::{render_metadata_as_table, strip_metadata_from_text, Layout};
//!
//! let doc = b"---\nname: x\n---\nHello\n";
//!
//! let table = render_metadata_as_table(doc, Layout::Vertical);
//! assert_eq!(
//!     &*table,
//!     br#"<table data="yaml-metadata"><tr><td>name</td><td>x</td></tr></table>"#
//! );
//!
//! let body = strip_metadata_from_text(doc);
//! assert_eq!(&*body, b"Hello\n");
//! ```
//!
//! Table markup is *not* escaped. Anything shown to users should go through
//! a [`Sanitizer`], either directly or via [`MetadataRenderer`]:
//!
//! ```rust
//! use mattertable::{MetadataRenderer, Sanitizer};
//!
//! let sanitizer = Sanitizer::ugc();
//! let renderer = MetadataRenderer::new(&sanitizer);
//! let html = renderer.render_sanitized_string(b"---\ntitle: <script>x</script>Hi\n---\n");
//! assert!(!html.contains("script"));
//! ```
//!
//! # Failure handling
//!
//! None of the rendering entry points fail. Missing front matter, YAML
//! that is neither a mapping nor a single pair, non-UTF-8 input and unknown
//! layout selectors all hand the input back unchanged. The `try_*`
//! variants in [`render`] report the reason as a [`MatterTableError`].
//!
//! # Architecture
//!
//! - [`core`]: splitting, parsing into an ordered tree, table rendering
//! - [`sanitize`]: the allow-list HTML policy
//! - [`render`]: the public entry points
//! - [`page`]: metadata table plus Markdown body as one page
//! - [`io`]: file handling for the command-line tool

// Public API exports
pub use error::{MatterTableError, Result};

pub use crate::core::{Layout, Mapping, Node, Scalar};
pub use page::{render_page, BodyMode, PageOptions};
pub use render::{
    render_metadata_as_table, render_metadata_with_selector, render_sanitized,
    strip_metadata_from_text, MetadataRenderer,
};
pub use sanitize::Sanitizer;

pub mod args;
pub mod core;
pub mod error;
pub mod io;
pub mod page;
pub mod render;
pub mod sanitize;
