//! Style cascade inspection for a developer-tools style panel.
//!
//! Given the matched rules of an inspected element, in cascade order, and the
//! element's computed style, this crate produces the per-property view a
//! style inspector shows:
//!
//! - **Rule views**: Stylesheet rules and inline styles with source labels
//! - **Selectors**: Comma splitting and specificity, cached per session
//! - **Cascade**: Every declaration that contributed to each computed property
//! - **Display values**: Colors, URLs and font families picked out for rendering
//! - **Filtering**: Search and browser-style visibility
//!
//! Matching, cascade ranking and the computed values themselves come from
//! the rendering engine; this crate only relays and labels them.
//!
//! # Example
//!
//! ```ignore
//! use style_inspector::prelude::*;
//!
//! let inspector = StyleInspector::new(InspectorConfig::default())?;
//!
//! let rules = inspector.rule_views([
//!     RuleSnapshot {
//!         selector_text: Some("div".into()),
//!         declarations: Some(vec![Declaration::new("color", "red").overridden(true)]),
//!         parent_style_sheet: Some(StyleSheetRef::new("https://example.com/styles.css")),
//!         start_line: 12,
//!         ..Default::default()
//!     },
//!     RuleSnapshot {
//!         inline_owner: Some(InlineStyleOwner::Element),
//!         declarations: Some(vec![Declaration::new("color", "blue")]),
//!         ..Default::default()
//!     },
//! ]);
//!
//! for property in inspector.computed_properties(&rules, [("color", "blue")]) {
//!     for matched in &property.selectors {
//!         println!("{} {} {}", matched.selector, matched.display_value(), matched.stylesheet);
//!     }
//! }
//! ```

pub mod config;
pub mod format;
pub mod resolve;
pub mod rules;
pub mod selector;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::config::{InspectorConfig, MatchOrder};
    pub use crate::format::{CssValueFormatter, ParsedValue, ValueFormatter, ValueSegment};
    pub use crate::resolve::{
        CascadeResolver, ComputedProperty, MatchedSelector, PropertyFilter, SelectorCache,
        StyleInspector,
    };
    pub use crate::rules::{
        Declaration, InheritanceCounter, InheritedFrom, InlineStyleOwner, OriginalLocation,
        Priority, RuleKind, RuleSnapshot, RuleView, SourceLocation, StyleSheetRef,
    };
    pub use crate::selector::{SelectorList, Specificity};
}
