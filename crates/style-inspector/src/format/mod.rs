//! Display formatting of declaration values.

mod colors;
mod value;

pub use value::{CssValueFormatter, ParsedValue, ValueFormatter, ValueSegment};
