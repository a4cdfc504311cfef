//! Property values written as plain `name:value;` pairs.

mod multi;
mod value;

pub use multi::{CssValueList, CssValueMultiProperty, CssValueMultiValue, PropertyValue};
pub use value::CssValue;
