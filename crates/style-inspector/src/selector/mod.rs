//! Selector lists and specificity.

mod list;
mod specificity;

pub use list::SelectorList;
pub use specificity::Specificity;
