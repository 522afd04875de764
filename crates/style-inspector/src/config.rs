//! Inspector configuration.

use crate::{Error, Result};

/// Default capacity of each selector cache.
pub const DEFAULT_SELECTOR_CACHE_CAPACITY: usize = 3000;

/// Order of matched selectors within a computed property.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MatchOrder {
    /// Cascade order: least authoritative first, the applied rule last.
    #[default]
    Cascade,
    /// Reverse cascade order, for panels that list the winner on top.
    WinnerFirst,
}

/// Configuration for a [`StyleInspector`](crate::resolve::StyleInspector)
/// session.
#[derive(Debug, Clone)]
pub struct InspectorConfig {
    /// Maximum entries in each of the two selector caches.
    pub selector_cache_capacity: usize,

    /// How matched selectors are ordered inside each computed property.
    pub match_order: MatchOrder,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            selector_cache_capacity: DEFAULT_SELECTOR_CACHE_CAPACITY,
            match_order: MatchOrder::default(),
        }
    }
}

impl InspectorConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector cache capacity.
    pub fn selector_cache_capacity(mut self, capacity: usize) -> Self {
        self.selector_cache_capacity = capacity;
        self
    }

    /// Set the matched selector order.
    pub fn match_order(mut self, order: MatchOrder) -> Self {
        self.match_order = order;
        self
    }

    /// Check the configuration for values the inspector cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.selector_cache_capacity == 0 {
            return Err(Error::invalid_config(
                "selector cache capacity must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = InspectorConfig::default();
        assert_eq!(config.selector_cache_capacity, 3000);
        assert_eq!(config.match_order, MatchOrder::Cascade);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn builder_setters() {
        let config = InspectorConfig::new()
            .selector_cache_capacity(16)
            .match_order(MatchOrder::WinnerFirst);
        assert_eq!(config.selector_cache_capacity, 16);
        assert_eq!(config.match_order, MatchOrder::WinnerFirst);
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = InspectorConfig::new().selector_cache_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
