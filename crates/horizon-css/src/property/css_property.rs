//! A property bound to a value grammar, an optional vendor prefix and an
//! optional customizer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use super::customizer::PropertyCustomizer;
use super::kind::PropertyKind;
use super::name::Property;
use crate::{Error, Result};
use crate::propertyvalue::{CssValue, PropertyValue};
use crate::vendor::VendorPrefix;
use crate::version::CssVersion;
use crate::writer::CssVersionAware;

/// A validating property definition.
///
/// Equality and hashing consider the property, the vendor prefix and the
/// value grammar. The customizer is not compared.
#[derive(Clone)]
pub struct CssProperty {
    property: Property,
    vendor_prefix: Option<VendorPrefix>,
    kind: PropertyKind,
    customizer: Option<Arc<dyn PropertyCustomizer>>,
}

impl CssProperty {
    pub fn new(property: Property, kind: PropertyKind) -> Self {
        Self {
            property,
            vendor_prefix: None,
            kind,
            customizer: None,
        }
    }

    /// A property without value restrictions.
    pub fn free(property: Property) -> Self {
        Self::new(property, PropertyKind::Free)
    }

    pub fn with_vendor_prefix(mut self, vendor_prefix: Option<VendorPrefix>) -> Self {
        self.vendor_prefix = vendor_prefix;
        self
    }

    pub fn with_customizer(mut self, customizer: Arc<dyn PropertyCustomizer>) -> Self {
        self.customizer = Some(customizer);
        self
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn vendor_prefix(&self) -> Option<VendorPrefix> {
        self.vendor_prefix
    }

    pub fn kind(&self) -> &PropertyKind {
        &self.kind
    }

    pub fn customizer(&self) -> Option<&Arc<dyn PropertyCustomizer>> {
        self.customizer.as_ref()
    }

    /// The name as written, including the vendor prefix if any.
    pub fn property_name(&self) -> String {
        match self.vendor_prefix {
            Some(prefix) => prefix.apply(self.property.name()),
            None => self.property.name().to_string(),
        }
    }

    pub fn min_argument_count(&self) -> usize {
        self.kind.min_argument_count()
    }

    pub fn max_argument_count(&self) -> usize {
        self.kind.max_argument_count()
    }

    pub fn is_valid_value(&self, value: &str) -> bool {
        self.kind.is_valid_value(value)
    }

    /// The same definition for another property.
    pub fn clone_for(&self, property: Property) -> Self {
        Self {
            property,
            ..self.clone()
        }
    }

    /// The same definition with another vendor prefix.
    pub fn clone_with_vendor(&self, vendor_prefix: VendorPrefix) -> Self {
        self.clone().with_vendor_prefix(Some(vendor_prefix))
    }

    /// Create a value for this property.
    ///
    /// A customizer may expand the value into several declarations, for
    /// example to add vendor specific variants.
    pub fn new_value(&self, value: &str, important: bool) -> Result<PropertyValue> {
        if value.is_empty() {
            return Err(Error::invalid_value(self.property_name(), "Value may not be empty"));
        }
        if let Some(special) = self
            .customizer
            .as_ref()
            .and_then(|c| c.create_special_value(self, value, important))
        {
            return Ok(special);
        }
        CssValue::new(self.clone(), value, important).map(PropertyValue::Single)
    }
}

impl CssVersionAware for CssProperty {
    fn min_version(&self) -> CssVersion {
        self.property.min_version()
    }
}

impl PartialEq for CssProperty {
    fn eq(&self, other: &Self) -> bool {
        self.property == other.property
            && self.vendor_prefix == other.vendor_prefix
            && self.kind == other.kind
    }
}

impl Eq for CssProperty {}

impl Hash for CssProperty {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.property.hash(state);
        self.vendor_prefix.hash(state);
        self.kind.hash(state);
    }
}

impl fmt::Debug for CssProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CssProperty")
            .field("property", &self.property)
            .field("vendor_prefix", &self.vendor_prefix)
            .field("kind", &self.kind)
            .field("customizer", &self.customizer.as_ref().map(|c| c.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{CssWriteable, WriterSettings};

    #[test]
    fn test_property_name() {
        let prop = CssProperty::free(Property::BorderRadius);
        assert_eq!(prop.property_name(), "border-radius");
        let moz = prop.clone_with_vendor(VendorPrefix::Mozilla);
        assert_eq!(moz.property_name(), "-moz-border-radius");
        assert_ne!(prop, moz);
        assert_eq!(prop.clone_for(Property::Width).property_name(), "width");
    }

    #[test]
    fn test_new_value() {
        let prop = CssProperty::new(Property::Color, PropertyKind::Color);
        assert!(prop.is_valid_value("red"));
        assert!(!prop.is_valid_value("12px"));

        let value = prop.new_value("red", true).unwrap();
        let css = value.as_css_string(&WriterSettings::default(), 0).unwrap();
        assert_eq!(css, "color:red !important;");
        assert!(prop.new_value("", false).is_err());
    }
}
