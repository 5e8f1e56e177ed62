//! Renders a single [`AppRecord`] as a Markdown bullet.

use crate::record::AppRecord;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Listing site that hosts a page for every app.
pub const DEFAULT_BASE_URL: &str = "https://apps.vyrtsev.com";

/// Label of the App Store link. The gaps are U+00A0 so the label never wraps.
pub const APP_STORE_LABEL: &str = "Download\u{a0}on\u{a0}the\u{a0}AppStore";

fn newline_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\n+").expect("newline pattern is valid"))
}

/// Replaces every run of consecutive `\n` characters with a single `\n`.
pub fn collapse_newlines(text: &str) -> Cow<'_, str> {
    newline_runs().replace_all(text, "\n")
}

/// Builds description blocks against a listing site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    base_url: String,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Formatter {
    /// Creates a formatter linking titles to `<base_url>/<id>`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// Site prefix of title links, without a trailing `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Formats `item` as a title line with its description, followed by the
    /// App Store link on its own line.
    pub fn describe(&self, item: &AppRecord) -> String {
        format!(
            "- [{name}]({base}/{id}) - {description}\n[{label}]({link})",
            name = item.name,
            base = self.base_url,
            id = item.id,
            description = collapse_newlines(&item.description),
            label = APP_STORE_LABEL,
            link = item.app_store_link,
        )
    }
}

/// Formats `item` against [`DEFAULT_BASE_URL`].
pub fn describe(item: &AppRecord) -> String {
    Formatter::default().describe(item)
}
