//! Computed view filtering.

use crate::resolve::ComputedProperty;

/// Search and browser-style visibility for a computed property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Case-insensitive term matched against names and final values.
    pub search: String,
    /// Whether declarations from user agent stylesheets are shown.
    pub show_browser_styles: bool,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            show_browser_styles: true,
        }
    }
}

impl PropertyFilter {
    /// A filter that keeps everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set browser style visibility.
    pub fn show_browser_styles(mut self, show: bool) -> Self {
        self.show_browser_styles = show;
        self
    }

    /// Check a property against the search term.
    pub fn matches_search(&self, property: &ComputedProperty) -> bool {
        let search = self.search.trim();
        if search.is_empty() {
            return true;
        }
        let search = search.to_lowercase();
        property.name.to_lowercase().contains(&search)
            || property.value.to_lowercase().contains(&search)
    }

    /// Apply the filter, returning the properties to display.
    ///
    /// With browser styles hidden, user agent matches are removed and
    /// properties left without any match are dropped.
    pub fn apply(&self, properties: &[ComputedProperty]) -> Vec<ComputedProperty> {
        properties
            .iter()
            .filter(|property| self.matches_search(property))
            .filter_map(|property| {
                if self.show_browser_styles {
                    return Some(property.clone());
                }
                let selectors: Vec<_> = property
                    .selectors
                    .iter()
                    .filter(|selector| !selector.user_agent)
                    .cloned()
                    .collect();
                if selectors.is_empty() {
                    return None;
                }
                Some(ComputedProperty {
                    selectors,
                    ..property.clone()
                })
            })
            .collect()
    }
}
