//! Declarations contributed by a rule's style block.

use std::fmt;

/// Declaration priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// `!important`.
    Important,
}

impl Priority {
    /// Tooltip shown next to prioritized declarations.
    pub const TITLE: &'static str = "This rule has !important priority";

    /// Parse a priority as delivered by the rule provider.
    ///
    /// The provider uses `"important"` or an empty string.
    pub fn parse(priority: &str) -> Option<Self> {
        let priority = priority.trim();
        let priority = priority.strip_prefix('!').unwrap_or(priority);
        priority
            .eq_ignore_ascii_case("important")
            .then_some(Self::Important)
    }

    /// Priority keyword without the `!`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Important => "important",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "!{}", self.as_str())
    }
}

/// One `property: value` pair from a style block.
///
/// `overridden` is computed upstream from origin, specificity, source order
/// and priority. It is relayed as given and never recomputed here.
///
/// A shorthand declaration carries the longhands it expands to, each with
/// its own override flag. Computed properties are always longhands, so a
/// shorthand contributes through its longhands only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name as written.
    pub name: String,
    /// Raw value text, without priority.
    pub value: String,
    /// Priority, if any.
    pub priority: Option<Priority>,
    /// Whether a higher-precedence declaration for the same property wins.
    pub overridden: bool,
    /// Longhand expansion of a shorthand; empty for longhands.
    pub longhands: Vec<Declaration>,
}

impl Declaration {
    /// Create a declaration with normal priority that is not overridden.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            priority: None,
            overridden: false,
            longhands: vec![],
        }
    }

    /// Mark as `!important`.
    pub fn important(mut self) -> Self {
        self.priority = Some(Priority::Important);
        self
    }

    /// Set the upstream override flag.
    pub fn overridden(mut self, overridden: bool) -> Self {
        self.overridden = overridden;
        self
    }

    /// Attach the longhand expansion of a shorthand.
    pub fn with_longhands(mut self, longhands: Vec<Declaration>) -> Self {
        self.longhands = longhands;
        self
    }

    /// Check for `!important`.
    pub fn is_important(&self) -> bool {
        self.priority == Some(Priority::Important)
    }

    /// Check if this declaration expands to longhands.
    pub fn is_shorthand(&self) -> bool {
        !self.longhands.is_empty()
    }

    /// The entries that can contribute to a computed property: the
    /// longhands of a shorthand, or the declaration itself.
    pub fn entries(&self) -> &[Declaration] {
        if self.longhands.is_empty() {
            std::slice::from_ref(self)
        } else {
            &self.longhands
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_parsing() {
        assert_eq!(Priority::parse("important"), Some(Priority::Important));
        assert_eq!(Priority::parse(" !IMPORTANT "), Some(Priority::Important));
        assert_eq!(Priority::parse(""), None);
        assert_eq!(Priority::parse("normal"), None);
        assert_eq!(Priority::Important.to_string(), "!important");
    }

    #[test]
    fn longhand_entries() {
        let color = Declaration::new("color", "red");
        assert_eq!(color.entries(), std::slice::from_ref(&color));
        assert!(!color.is_shorthand());

        let margin = Declaration::new("margin", "0 auto").with_longhands(vec![
            Declaration::new("margin-top", "0"),
            Declaration::new("margin-left", "auto").overridden(true),
        ]);
        assert!(margin.is_shorthand());
        let names: Vec<_> = margin.entries().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["margin-top", "margin-left"]);
    }
}
