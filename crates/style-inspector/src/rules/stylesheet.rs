//! Stylesheet and source location metadata.

/// The stylesheet owning a rule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSheetRef {
    /// Absolute URL, or `None` for `<style>` elements.
    pub href: Option<String>,
    /// Whether this is a browser-default (user agent) stylesheet.
    pub is_system: bool,
}

impl StyleSheetRef {
    /// An author stylesheet loaded from `href`.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            is_system: false,
        }
    }

    /// A `<style>` element without a URL.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// A user agent stylesheet.
    pub fn user_agent(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            is_system: true,
        }
    }

    /// Short display name: the last path segment of the href.
    pub fn short_name(&self) -> Option<&str> {
        self.href.as_deref().map(short_name)
    }
}

/// Last path segment of a URL, without query or fragment.
///
/// Falls back to the whole input when no segment is left.
pub(crate) fn short_name(href: &str) -> &str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let path = path.trim_end_matches('/');
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => href,
    }
}

/// A rule's line and column in the stylesheet the browser loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl SourceLocation {
    /// Create a location.
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// Where a source map resolved a rule to in the original source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginalLocation {
    /// URL of the original source, when known.
    pub href: Option<String>,
    /// Line and column in the original source.
    pub location: SourceLocation,
}

impl OriginalLocation {
    /// Create an original location.
    pub fn new(href: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            href: Some(href.into()),
            location: SourceLocation::new(line, column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names() {
        assert_eq!(short_name("https://example.com/css/styles.css"), "styles.css");
        assert_eq!(short_name("https://example.com/a.css?v=2#top"), "a.css");
        assert_eq!(short_name("https://example.com/theme/"), "theme");
        assert_eq!(short_name("resource://gre-resources/html.css"), "html.css");
        assert_eq!(short_name("styles.css"), "styles.css");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn stylesheet_refs() {
        let sheet = StyleSheetRef::new("https://example.com/styles.css");
        assert_eq!(sheet.short_name(), Some("styles.css"));
        assert!(!sheet.is_system);

        assert!(StyleSheetRef::user_agent("resource://html.css").is_system);
        assert_eq!(StyleSheetRef::embedded().short_name(), None);
    }
}
