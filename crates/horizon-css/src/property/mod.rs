//! Known properties and validation of their values.
//!
//! A [`CssProperty`] couples a [`Property`] name with a [`PropertyKind`]
//! grammar. [`CssProperty::new_value`] turns a value into a writable
//! [`PropertyValue`](crate::propertyvalue::PropertyValue), letting a
//! [`PropertyCustomizer`] add browser specific variants on the way.

mod css_property;
mod customizer;
mod kind;
mod known;
mod name;

pub use css_property::CssProperty;
pub use customizer::{BorderRadiusCustomizer, OpacityCustomizer, PropertyCustomizer};
pub use kind::{GLOBAL_VALUES, PropertyKind};
pub use known::known_property;
pub use name::{Property, strip_hack_prefix};
