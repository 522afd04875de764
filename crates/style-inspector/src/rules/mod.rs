//! Rule views over already-resolved style rules.

mod declaration;
mod rule;
mod snapshot;
mod stylesheet;

pub use declaration::{Declaration, Priority};
pub use rule::{
    InheritanceCounter, InheritedFrom, RuleKind, RuleView, SourceDescriptor, StyleSheetRule,
};
pub use snapshot::{InlineStyleOwner, RuleSnapshot};
pub use stylesheet::{OriginalLocation, SourceLocation, StyleSheetRef};
