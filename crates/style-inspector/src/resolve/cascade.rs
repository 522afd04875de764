//! Matched-declaration resolution for computed properties.

use crate::config::MatchOrder;
use crate::format::{CssValueFormatter, ParsedValue, ValueFormatter};
use crate::rules::{InheritanceCounter, Priority, RuleView, SourceDescriptor};

/// One declaration contributing to a computed property.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MatchedSelector {
    /// Declared value.
    pub value: String,
    /// Display form of the declared value.
    pub parsed_value: ParsedValue,
    /// Selector label (`div`, `this.style`, `#box.style`, `DIV[1].style`).
    pub selector: String,
    /// Stylesheet label.
    pub stylesheet: String,
    /// Stylesheet URL.
    pub stylesheet_url: String,
    /// Whether the declaration lost the cascade.
    pub overridden: bool,
    /// Declaration priority.
    pub priority: Option<Priority>,
    /// Whether the declaring rule is from a user agent stylesheet.
    pub user_agent: bool,
}

impl MatchedSelector {
    /// The value as displayed, with an `!important` suffix when present.
    pub fn display_value(&self) -> String {
        match self.priority {
            Some(priority) => format!("{} {}", self.value, priority),
            None => self.value.clone(),
        }
    }
}

/// A computed property and every declaration that contributed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComputedProperty {
    /// Property name.
    pub name: String,
    /// Final value from the browser's computed style.
    pub value: String,
    /// Display form of the final value.
    pub parsed_value: ParsedValue,
    /// Contributing declarations.
    pub selectors: Vec<MatchedSelector>,
}

/// Builds computed property lists from rule views.
///
/// Override flags are relayed from the declarations as delivered; this
/// resolver does not rank declarations itself. Specificity is display-only
/// here and never reorders matches.
#[derive(Debug, Clone, Default)]
pub struct CascadeResolver<F = CssValueFormatter> {
    formatter: F,
    match_order: MatchOrder,
}

impl CascadeResolver {
    /// Create a resolver with the default formatter.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: ValueFormatter> CascadeResolver<F> {
    /// Create a resolver with a custom formatter.
    pub fn with_formatter(formatter: F) -> Self {
        Self {
            formatter,
            match_order: MatchOrder::default(),
        }
    }

    /// Set the order of matched selectors within each property.
    pub fn match_order(mut self, order: MatchOrder) -> Self {
        self.match_order = order;
        self
    }

    /// The value formatter.
    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Resolve matched declarations for each computed property.
    ///
    /// `rules` must be in cascade order, least authoritative first.
    /// `computed` yields `(name, final value)` pairs; the output keeps its
    /// order. Rules flagged unmatched contribute nothing.
    pub fn resolve<'a, I>(&self, rules: &[RuleView], computed: I) -> Vec<ComputedProperty>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let span = tracing::debug_span!("resolve_cascade", rules = rules.len());
        let _enter = span.enter();

        let descriptors = describe_rules(rules);
        let properties: Vec<_> = computed
            .into_iter()
            .map(|(name, value)| self.resolve_property(name, value, rules, &descriptors))
            .collect();

        tracing::debug!(properties = properties.len(), "resolved computed properties");
        properties
    }

    fn resolve_property(
        &self,
        name: &str,
        value: &str,
        rules: &[RuleView],
        descriptors: &[Option<SourceDescriptor>],
    ) -> ComputedProperty {
        let mut selectors = vec![];

        for (rule, descriptor) in rules.iter().zip(descriptors) {
            let Some(descriptor) = descriptor else {
                continue;
            };

            let entries = rule
                .declarations()
                .iter()
                .flat_map(|declaration| declaration.entries())
                .filter(|entry| entry.name == name);

            for entry in entries {
                selectors.push(MatchedSelector {
                    value: entry.value.clone(),
                    parsed_value: self.formatter.format(name, &entry.value),
                    selector: descriptor.selector.clone(),
                    stylesheet: descriptor.stylesheet.clone(),
                    stylesheet_url: descriptor.stylesheet_url.clone(),
                    overridden: entry.overridden,
                    priority: entry.priority,
                    user_agent: rule.is_user_agent(),
                });
            }
        }

        if self.match_order == MatchOrder::WinnerFirst {
            selectors.reverse();
        }

        tracing::trace!(property = name, matches = selectors.len(), "resolved property");

        ComputedProperty {
            name: name.to_owned(),
            value: value.to_owned(),
            parsed_value: self.formatter.format(name, value),
            selectors,
        }
    }
}

/// Source labels for each rule, in order; `None` for unmatched rules.
///
/// Labels depend only on rule order, so they are computed once per
/// resolution rather than once per property.
fn describe_rules(rules: &[RuleView]) -> Vec<Option<SourceDescriptor>> {
    let mut counter = InheritanceCounter::new();
    rules
        .iter()
        .map(|rule| {
            if rule.is_unmatched() {
                None
            } else {
                Some(rule.source_descriptor(&mut counter))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::SelectorCache;
    use crate::rules::{Declaration, InheritedFrom, SourceLocation, StyleSheetRef};

    fn sheet_rule(
        cache: &SelectorCache,
        selector: &str,
        declarations: Vec<Declaration>,
    ) -> RuleView {
        RuleView::stylesheet(
            selector,
            declarations,
            Some(StyleSheetRef::new("https://example.com/styles.css")),
            SourceLocation::new(1, 1),
            cache,
        )
        .unwrap()
    }

    #[test]
    fn overridden_declarations_in_cascade_order() {
        let cache = SelectorCache::new();
        let rules = [
            sheet_rule(&cache, "div", vec![Declaration::new("color", "red").overridden(true)]),
            sheet_rule(&cache, ".b", vec![Declaration::new("color", "blue")]),
        ];

        let properties = CascadeResolver::new().resolve(&rules, [("color", "blue")]);
        assert_eq!(properties.len(), 1);

        let color = &properties[0];
        assert_eq!(color.name, "color");
        assert_eq!(color.value, "blue");
        let summary: Vec<_> = color
            .selectors
            .iter()
            .map(|m| (m.selector.as_str(), m.value.as_str(), m.overridden))
            .collect();
        assert_eq!(summary, [("div", "red", true), (".b", "blue", false)]);
    }

    #[test]
    fn property_order_follows_computed_style() {
        let cache = SelectorCache::new();
        let rules = [sheet_rule(
            &cache,
            "p",
            vec![Declaration::new("margin-top", "0"), Declaration::new("color", "red")],
        )];

        let computed = [("z-index", "auto"), ("color", "red"), ("margin-top", "0px")];
        let properties = CascadeResolver::new().resolve(&rules, computed);
        let names: Vec<_> = properties.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["z-index", "color", "margin-top"]);
        assert!(properties[0].selectors.is_empty());
        assert_eq!(properties[1].selectors.len(), 1);
    }

    #[test]
    fn empty_computed_style() {
        let cache = SelectorCache::new();
        let rules = [sheet_rule(&cache, "p", vec![Declaration::new("color", "red")])];
        let properties = CascadeResolver::new().resolve(&rules, std::iter::empty());
        assert!(properties.is_empty());
    }

    #[test]
    fn unmatched_rules_are_skipped() {
        let cache = SelectorCache::new();
        let rules = [
            sheet_rule(&cache, "div", vec![Declaration::new("color", "red")]).unmatched(),
            RuleView::inherited_inline(InheritedFrom::tag("section"), vec![]).unmatched(),
            RuleView::inherited_inline(
                InheritedFrom::tag("body"),
                vec![Declaration::new("color", "green")],
            ),
        ];

        let properties = CascadeResolver::new().resolve(&rules, [("color", "green")]);
        let selectors = &properties[0].selectors;
        assert_eq!(selectors.len(), 1);
        // The unmatched ancestor does not take a number.
        assert_eq!(selectors[0].selector, "BODY[1].style");
    }

    #[test]
    fn shorthands_contribute_through_longhands() {
        let cache = SelectorCache::new();
        let rules = [sheet_rule(
            &cache,
            ".card",
            vec![Declaration::new("margin", "0 auto").with_longhands(vec![
                Declaration::new("margin-top", "0"),
                Declaration::new("margin-left", "auto").overridden(true),
            ])],
        )];

        let properties = CascadeResolver::new()
            .resolve(&rules, [("margin", "0px"), ("margin-left", "8px")]);
        assert!(properties[0].selectors.is_empty());
        assert_eq!(properties[1].selectors.len(), 1);
        assert_eq!(properties[1].selectors[0].value, "auto");
        assert!(properties[1].selectors[0].overridden);
    }

    #[test]
    fn winner_first_order() {
        let cache = SelectorCache::new();
        let rules = [
            sheet_rule(&cache, "a", vec![Declaration::new("color", "red").overridden(true)]),
            RuleView::inline(vec![Declaration::new("color", "blue").important()]),
        ];

        let properties = CascadeResolver::new()
            .match_order(MatchOrder::WinnerFirst)
            .resolve(&rules, [("color", "blue")]);
        let selectors = &properties[0].selectors;
        assert_eq!(selectors[0].selector, "this.style");
        assert_eq!(selectors[0].display_value(), "blue !important");
        assert_eq!(selectors[1].selector, "a");
        assert_eq!(selectors[1].display_value(), "red");
    }

    #[test]
    fn values_go_through_the_formatter() {
        let cache = SelectorCache::new();
        let rules = [sheet_rule(&cache, "a", vec![Declaration::new("color", "red")])];
        let formatter = |property: &str, value: &str| {
            ParsedValue::plain(&format!("{property}={value}"))
        };

        let properties =
            CascadeResolver::with_formatter(formatter).resolve(&rules, [("color", "red")]);
        assert_eq!(properties[0].parsed_value.to_string(), "color=red");
        assert_eq!(properties[0].selectors[0].parsed_value.to_string(), "color=red");
    }
}
