//! Allow-list HTML sanitizing
//!
//! Every piece of markup handed back to a caller passes through here,
//! including input that was passed through untouched.

use std::sync::OnceLock;

/// An immutable allow-list policy for user generated content
pub struct Sanitizer {
    policy: ammonia::Builder<'static>,
}

impl Sanitizer {
    /// ammonia's default policy, plus the `data` attribute on tables so the
    /// `yaml-metadata` marker survives
    pub fn ugc() -> Self {
        let mut policy = ammonia::Builder::default();
        policy.add_tag_attributes("table", &["data"]);
        Self { policy }
    }

    /// The process-wide policy, built on first use and never modified
    pub fn shared() -> &'static Sanitizer {
        static SHARED: OnceLock<Sanitizer> = OnceLock::new();
        SHARED.get_or_init(Sanitizer::ugc)
    }

    /// Sanitize an HTML string
    pub fn sanitize(&self, html: &str) -> String {
        self.policy.clean(html).to_string()
    }

    /// Sanitize HTML bytes; invalid UTF-8 is replaced before filtering
    pub fn sanitize_bytes(&self, html: &[u8]) -> Vec<u8> {
        self.sanitize(&String::from_utf8_lossy(html)).into_bytes()
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::ugc()
    }
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer").finish_non_exhaustive()
    }
}
