//! A view over one resolved style rule.

use std::sync::Arc;

use crate::resolve::SelectorCache;
use crate::rules::stylesheet::short_name;
use crate::rules::{Declaration, OriginalLocation, SourceLocation, StyleSheetRef};
use crate::selector::{SelectorList, Specificity};
use crate::{Error, Result};

/// Source label for inline style pseudo-rules.
const INLINE_SOURCE_LABEL: &str = "element";

/// Source href for inline style pseudo-rules.
const INLINE_SOURCE_HREF: &str = "#";

/// Ancestor whose inline style is inherited by the inspected element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InheritedFrom {
    /// The ancestor's `id` attribute, if it has one.
    pub id: Option<String>,
    /// The ancestor's tag name as displayed (any case).
    pub tag_name: String,
}

impl InheritedFrom {
    /// An ancestor identified by tag name only.
    pub fn tag(tag_name: impl Into<String>) -> Self {
        Self {
            id: None,
            tag_name: tag_name.into(),
        }
    }

    /// An ancestor with an `id` attribute.
    pub fn with_id(tag_name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            tag_name: tag_name.into(),
        }
    }
}

/// A real CSS rule from a stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSheetRule {
    /// Raw selector text as delivered by the provider.
    pub selector_text: String,
    /// Split selectors, shared with the selector cache.
    pub selectors: SelectorList,
    /// Selectors joined for display, shared with the selector cache.
    pub cleaned_selector_text: Arc<str>,
    /// The owning stylesheet, if known.
    pub style_sheet: Option<StyleSheetRef>,
    /// The rule's position in the loaded stylesheet.
    pub location: SourceLocation,
    /// The rule's position in the original source, when source-mapped.
    pub original_location: Option<OriginalLocation>,
}

/// What kind of rule a [`RuleView`] wraps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// A selector-matched stylesheet rule.
    StyleSheet(StyleSheetRule),
    /// The inspected element's own `style` attribute.
    InlineOwn,
    /// An ancestor's `style` attribute, contributing inherited properties.
    InlineInherited(InheritedFrom),
}

/// Labels describing where a rule's declarations come from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SourceDescriptor {
    /// Selector text, or a synthesized `*.style` label for inline styles.
    pub selector: String,
    /// Stylesheet label such as `styles.css:12`, or `element`.
    pub stylesheet: String,
    /// Stylesheet URL, or `#` for inline styles.
    pub stylesheet_url: String,
}

/// Numbering for inherited inline styles of ancestors without an id.
///
/// One counter spans every rule of a single cascade walk, so it is owned by
/// the caller rather than by any one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InheritanceCounter(u32);

impl InheritanceCounter {
    /// Start numbering at 1.
    pub fn new() -> Self {
        Self(1)
    }

    /// The number the next id-less ancestor will get.
    pub fn peek(&self) -> u32 {
        self.0
    }

    fn advance(&mut self) -> u32 {
        let current = self.0;
        self.0 += 1;
        current
    }
}

impl Default for InheritanceCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// One style rule that applies to the inspected element.
///
/// Built once per inspected element and cascade snapshot, then immutable.
/// Specificities are computed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleView {
    kind: RuleKind,
    declarations: Vec<Declaration>,
    specificities: Vec<Specificity>,
    unmatched: bool,
}

impl RuleView {
    /// Create a view of a stylesheet rule.
    ///
    /// Selector splitting and the display string go through `cache`. Fails
    /// when the selector text contains no selectors.
    pub fn stylesheet(
        selector_text: impl Into<String>,
        declarations: Vec<Declaration>,
        style_sheet: Option<StyleSheetRef>,
        location: SourceLocation,
        cache: &SelectorCache,
    ) -> Result<Self> {
        let selector_text = selector_text.into();
        let selectors = cache.selectors(&selector_text);
        if selectors.is_empty() {
            return Err(Error::invalid_selector(
                selector_text,
                "no selectors in selector text",
            ));
        }
        let cleaned_selector_text = cache.cleaned_text(&selector_text);
        let specificities = selectors
            .iter()
            .map(Specificity::of_selector_text)
            .collect();

        Ok(Self {
            kind: RuleKind::StyleSheet(StyleSheetRule {
                selector_text,
                selectors,
                cleaned_selector_text,
                style_sheet,
                location,
                original_location: None,
            }),
            declarations,
            specificities,
            unmatched: false,
        })
    }

    /// Create a view of the inspected element's own inline style.
    pub fn inline(declarations: Vec<Declaration>) -> Self {
        Self::inline_kind(RuleKind::InlineOwn, declarations)
    }

    /// Create a view of an ancestor's inline style.
    pub fn inherited_inline(ancestor: InheritedFrom, declarations: Vec<Declaration>) -> Self {
        Self::inline_kind(RuleKind::InlineInherited(ancestor), declarations)
    }

    fn inline_kind(kind: RuleKind, declarations: Vec<Declaration>) -> Self {
        Self {
            kind,
            declarations,
            specificities: vec![],
            unmatched: false,
        }
    }

    /// Attach the source-mapped original location.
    ///
    /// Ignored for inline styles, which have no source position.
    pub fn with_original_location(mut self, original: OriginalLocation) -> Self {
        if let RuleKind::StyleSheet(rule) = &mut self.kind {
            rule.original_location = Some(original);
        }
        self
    }

    /// Replace the position in the loaded stylesheet.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        if let RuleKind::StyleSheet(rule) = &mut self.kind {
            rule.location = location;
        }
        self
    }

    /// Flag the rule as not matching the inspected element.
    pub fn unmatched(mut self) -> Self {
        self.unmatched = true;
        self
    }

    /// The kind of rule and its kind-specific data.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Check for an inline style pseudo-rule.
    pub fn is_inline(&self) -> bool {
        !matches!(self.kind, RuleKind::StyleSheet(_))
    }

    /// Whether upstream flagged this rule as not matching the element.
    pub fn is_unmatched(&self) -> bool {
        self.unmatched
    }

    /// Declarations in source order.
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    /// Raw selector text; `None` for inline styles.
    pub fn selector_text(&self) -> Option<&str> {
        match &self.kind {
            RuleKind::StyleSheet(rule) => Some(&rule.selector_text),
            _ => None,
        }
    }

    /// Trimmed selectors in source order; empty for inline styles.
    pub fn selectors(&self) -> SelectorList {
        match &self.kind {
            RuleKind::StyleSheet(rule) => rule.selectors.clone(),
            _ => SelectorList::empty(),
        }
    }

    /// Selectors joined with `", "`; empty for inline styles.
    pub fn cleaned_selector_text(&self) -> &str {
        match &self.kind {
            RuleKind::StyleSheet(rule) => &rule.cleaned_selector_text,
            _ => "",
        }
    }

    /// Specificity of each selector, in selector order.
    pub fn specificities(&self) -> &[Specificity] {
        &self.specificities
    }

    /// The highest selector specificity; `(0,0,0)` without selectors.
    ///
    /// On ties the earlier selector is kept.
    pub fn highest_specificity(&self) -> Specificity {
        self.specificities
            .iter()
            .fold(Specificity::ZERO, |highest, &current| {
                if current > highest { current } else { highest }
            })
    }

    /// URL of the rule's source: the original source when source-mapped,
    /// else the owning stylesheet.
    pub fn href(&self) -> Option<&str> {
        let RuleKind::StyleSheet(rule) = &self.kind else {
            return None;
        };
        rule.original_location
            .as_ref()
            .and_then(|original| original.href.as_deref())
            .or_else(|| rule.style_sheet.as_ref().and_then(|sheet| sheet.href.as_deref()))
    }

    /// Line and column, preferring the source-mapped original.
    pub fn location(&self) -> Option<SourceLocation> {
        let RuleKind::StyleSheet(rule) = &self.kind else {
            return None;
        };
        Some(
            rule.original_location
                .as_ref()
                .map_or(rule.location, |original| original.location),
        )
    }

    /// Whether the rule comes from a browser-default stylesheet.
    pub fn is_user_agent(&self) -> bool {
        match &self.kind {
            RuleKind::StyleSheet(rule) => {
                rule.style_sheet.as_ref().is_some_and(|sheet| sheet.is_system)
            }
            _ => false,
        }
    }

    /// Stylesheet label: `<short-name>:<line>`, `inline:<line>` for
    /// stylesheets without a URL, `element` for inline styles.
    pub fn source_label(&self) -> String {
        let line = match self.location() {
            Some(location) => location.line,
            None => return INLINE_SOURCE_LABEL.to_owned(),
        };
        match self.href() {
            Some(href) => format!("{}:{}", short_name(href), line),
            None => format!("inline:{line}"),
        }
    }

    /// Labels for the rule's selector and source.
    ///
    /// Inherited inline styles of ancestors without an id are numbered from
    /// `counter`, which advances once per such rule.
    pub fn source_descriptor(&self, counter: &mut InheritanceCounter) -> SourceDescriptor {
        let selector = match &self.kind {
            RuleKind::StyleSheet(rule) => rule.cleaned_selector_text.to_string(),
            RuleKind::InlineOwn => "this.style".to_owned(),
            RuleKind::InlineInherited(ancestor) => match &ancestor.id {
                Some(id) => format!("#{id}.style"),
                None => format!(
                    "{}[{}].style",
                    ancestor.tag_name.to_uppercase(),
                    counter.advance()
                ),
            },
        };

        let stylesheet_url = if self.is_inline() {
            INLINE_SOURCE_HREF.to_owned()
        } else {
            self.href().unwrap_or_default().to_owned()
        };

        SourceDescriptor {
            selector,
            stylesheet: self.source_label(),
            stylesheet_url,
        }
    }
}
