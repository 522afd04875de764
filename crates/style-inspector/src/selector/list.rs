//! Comma-separated selector lists.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// The selectors of one rule, in source order.
///
/// Split from the rule's raw selector text on every `,`, with each piece
/// trimmed and empty pieces dropped. Cloning shares the underlying slice, so
/// lists handed out by the selector cache are cheap to copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorList(Arc<[String]>);

impl SelectorList {
    /// An empty list (inline style pseudo-rules).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Split raw selector text into trimmed selectors.
    ///
    /// Commas inside functional pseudo-classes such as `:is(a, b)` are split
    /// too; rule selector text is treated as a flat list.
    pub fn parse(selector_text: &str) -> Self {
        selector_text
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect()
    }

    /// Number of selectors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no selectors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over selectors.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Canonical display form: selectors joined with `", "`.
    pub fn joined(&self) -> String {
        self.0.join(", ")
    }
}

impl Deref for SelectorList {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for SelectorList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for SelectorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", selector)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_and_trim() {
        let list = SelectorList::parse("  h1,h2 ,\n .title > span ");
        assert_eq!(list.len(), 3);
        assert_eq!(&list[..], ["h1", "h2", ".title > span"]);
        assert_eq!(list.joined(), "h1, h2, .title > span");
        assert_eq!(list.to_string(), list.joined());
    }

    #[test]
    fn empty_pieces_are_dropped() {
        let list = SelectorList::parse("a,, ,b,");
        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(SelectorList::parse(" , ").is_empty());
        assert!(SelectorList::empty().is_empty());
    }
}
