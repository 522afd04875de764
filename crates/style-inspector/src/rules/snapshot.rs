//! Raw rule records from the rule provider.

use crate::resolve::SelectorCache;
use crate::rules::{
    Declaration, InheritedFrom, OriginalLocation, RuleView, SourceLocation, StyleSheetRef,
};
use crate::{Error, Result};

/// Owner of an inline style pseudo-rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineStyleOwner {
    /// The inspected element itself.
    Element,
    /// An ancestor of the inspected element.
    Ancestor(InheritedFrom),
}

/// One matched rule as delivered by the document snapshot.
///
/// Optional fields mirror the provider's data. A snapshot describes either a
/// stylesheet rule (`selector_text` set) or an inline style pseudo-rule
/// (`inline_owner` set), never both.
#[derive(Debug, Clone, Default)]
pub struct RuleSnapshot {
    /// Raw selector text of a stylesheet rule.
    pub selector_text: Option<String>,
    /// The style block's declarations; `None` when the rule has no block.
    pub declarations: Option<Vec<Declaration>>,
    /// The owning stylesheet.
    pub parent_style_sheet: Option<StyleSheetRef>,
    /// Source-mapped position in the original source.
    pub original_location: Option<OriginalLocation>,
    /// Line in the loaded stylesheet.
    pub start_line: u32,
    /// Column in the loaded stylesheet.
    pub start_column: u32,
    /// Set for inline style pseudo-rules.
    pub inline_owner: Option<InlineStyleOwner>,
    /// Set upstream when the rule does not apply to the inspected element.
    pub is_unmatched: bool,
}

impl RuleView {
    /// Build a view from a provider snapshot.
    ///
    /// Fails when the snapshot is neither a stylesheet rule nor an inline
    /// style, or when its selector text contains no selectors. A missing
    /// style block is an empty one.
    pub fn from_snapshot(snapshot: RuleSnapshot, cache: &SelectorCache) -> Result<Self> {
        let declarations = snapshot.declarations.unwrap_or_default();

        let view = match (snapshot.selector_text, snapshot.inline_owner) {
            (Some(selector_text), None) => {
                let view = RuleView::stylesheet(
                    selector_text,
                    declarations,
                    snapshot.parent_style_sheet,
                    SourceLocation::new(snapshot.start_line, snapshot.start_column),
                    cache,
                )?;
                match snapshot.original_location {
                    Some(original) => view.with_original_location(original),
                    None => view,
                }
            }
            (None, Some(InlineStyleOwner::Element)) => RuleView::inline(declarations),
            (None, Some(InlineStyleOwner::Ancestor(ancestor))) => {
                RuleView::inherited_inline(ancestor, declarations)
            }
            (Some(selector_text), Some(_)) => {
                return Err(Error::invalid_rule(format!(
                    "inline style carries selector text '{selector_text}'"
                )));
            }
            (None, None) => {
                return Err(Error::invalid_rule(
                    "no selector text and no inline style owner",
                ));
            }
        };

        Ok(if snapshot.is_unmatched {
            view.unmatched()
        } else {
            view
        })
    }
}
