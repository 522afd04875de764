//! Cascade resolution.

mod cache;
mod cascade;
mod engine;
mod filter;

pub use cache::SelectorCache;
pub use cascade::{CascadeResolver, ComputedProperty, MatchedSelector};
pub use engine::StyleInspector;
pub use filter::PropertyFilter;
