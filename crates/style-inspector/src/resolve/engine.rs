//! Inspector session facade.

use crate::config::InspectorConfig;
use crate::format::{CssValueFormatter, ValueFormatter};
use crate::resolve::{CascadeResolver, ComputedProperty, SelectorCache};
use crate::rules::{RuleSnapshot, RuleView};
use crate::Result;

/// One inspector session.
///
/// Owns the selector caches, so rule views built for successive elements
/// share split selector text. Create one per session and pass it by
/// reference; nothing here is global.
#[derive(Debug)]
pub struct StyleInspector<F = CssValueFormatter> {
    config: InspectorConfig,
    cache: SelectorCache,
    resolver: CascadeResolver<F>,
}

impl StyleInspector {
    /// Create a session with the default formatter.
    pub fn new(config: InspectorConfig) -> Result<Self> {
        Self::with_formatter(config, CssValueFormatter::new())
    }
}

impl<F: ValueFormatter> StyleInspector<F> {
    /// Create a session with a custom value formatter.
    pub fn with_formatter(config: InspectorConfig, formatter: F) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            selector_cache_capacity = config.selector_cache_capacity,
            match_order = ?config.match_order,
            "created style inspector"
        );

        Ok(Self {
            cache: SelectorCache::with_capacity(config.selector_cache_capacity),
            resolver: CascadeResolver::with_formatter(formatter).match_order(config.match_order),
            config,
        })
    }

    /// The session configuration.
    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// The session's selector caches.
    pub fn cache(&self) -> &SelectorCache {
        &self.cache
    }

    /// The session's resolver.
    pub fn resolver(&self) -> &CascadeResolver<F> {
        &self.resolver
    }

    /// Build a rule view from a provider snapshot.
    pub fn rule_view(&self, snapshot: RuleSnapshot) -> Result<RuleView> {
        RuleView::from_snapshot(snapshot, &self.cache)
    }

    /// Build rule views for a cascade, in order.
    ///
    /// Snapshots that violate the provider contract are skipped with a
    /// warning.
    pub fn rule_views(&self, snapshots: impl IntoIterator<Item = RuleSnapshot>) -> Vec<RuleView> {
        snapshots
            .into_iter()
            .filter_map(|snapshot| match self.rule_view(snapshot) {
                Ok(view) => Some(view),
                Err(e) => {
                    tracing::warn!("Skipping rule: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Resolve matched declarations for each computed property.
    pub fn computed_properties<'a, I>(
        &self,
        rules: &[RuleView],
        computed: I,
    ) -> Vec<ComputedProperty>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        self.resolver.resolve(rules, computed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchOrder;
    use crate::rules::{Declaration, InlineStyleOwner, StyleSheetRef};
    use crate::Error;

    #[test]
    fn invalid_config_is_rejected() {
        let config = InspectorConfig::new().selector_cache_capacity(0);
        assert!(matches!(
            StyleInspector::new(config),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn session_uses_configured_cache() {
        let config = InspectorConfig::new().selector_cache_capacity(8);
        let inspector = StyleInspector::new(config).unwrap();
        assert_eq!(inspector.cache().capacity(), 8);

        let view = inspector
            .rule_view(RuleSnapshot {
                selector_text: Some("h1, h2".into()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(view.selectors().len(), 2);
        assert!(inspector.cache().contains_selectors("h1, h2"));
    }

    #[test]
    fn invalid_snapshots_are_skipped() {
        let inspector = StyleInspector::new(InspectorConfig::default()).unwrap();
        let views = inspector.rule_views([
            RuleSnapshot {
                selector_text: Some("p".into()),
                declarations: Some(vec![Declaration::new("color", "red")]),
                parent_style_sheet: Some(StyleSheetRef::new("https://example.com/a.css")),
                start_line: 3,
                ..Default::default()
            },
            RuleSnapshot::default(),
            RuleSnapshot {
                inline_owner: Some(InlineStyleOwner::Element),
                declarations: Some(vec![Declaration::new("color", "blue")]),
                ..Default::default()
            },
        ]);
        assert_eq!(views.len(), 2);
    }

    #[test]
    fn configured_match_order() {
        let config = InspectorConfig::new().match_order(MatchOrder::WinnerFirst);
        let inspector = StyleInspector::new(config).unwrap();
        let views = inspector.rule_views([
            RuleSnapshot {
                selector_text: Some("p".into()),
                declarations: Some(vec![Declaration::new("color", "red").overridden(true)]),
                ..Default::default()
            },
            RuleSnapshot {
                inline_owner: Some(InlineStyleOwner::Element),
                declarations: Some(vec![Declaration::new("color", "blue")]),
                ..Default::default()
            },
        ]);

        let properties = inspector.computed_properties(&views, [("color", "blue")]);
        let labels: Vec<_> = properties[0]
            .selectors
            .iter()
            .map(|m| m.selector.as_str())
            .collect();
        assert_eq!(labels, ["this.style", "p"]);
    }
}
