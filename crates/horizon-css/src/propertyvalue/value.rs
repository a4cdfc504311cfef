//! A single `name:value` pair bound to a property definition.

use std::fmt;

use crate::decl::{Declaration, Expression};
use crate::{Error, Result};
use crate::property::{CssProperty, Property};
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};

/// A property value, written as `name:value[ !important];`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValue {
    property: CssProperty,
    value: String,
    important: bool,
}

impl CssValue {
    pub fn new(property: CssProperty, value: impl Into<String>, important: bool) -> Result<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::invalid_value(
                property.property_name(),
                "Value may not be empty",
            ));
        }
        Ok(Self {
            property,
            value: value.trim().to_string(),
            important,
        })
    }

    pub fn property(&self) -> &CssProperty {
        &self.property
    }

    pub fn prop(&self) -> Property {
        self.property.property()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) -> Result<()> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(Error::invalid_value(
                self.property.property_name(),
                "Value may not be empty",
            ));
        }
        self.value = value.trim().to_string();
        Ok(())
    }

    pub fn is_important(&self) -> bool {
        self.important
    }

    pub fn set_important(&mut self, important: bool) {
        self.important = important;
    }

    /// Convert into an object model declaration with a single simple term.
    pub fn to_declaration(&self) -> Result<Declaration> {
        Declaration::new(
            &self.property.property_name(),
            Expression::simple(self.value.clone()),
            self.important,
        )
    }
}

impl CssWriteable for CssValue {
    fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
        let name = self.property.property_name();
        settings.check_version_requirements(&name, self.property.min_version())?;
        let important = if self.important { " !important" } else { "" };
        Ok(format!("{name}:{}{important};", self.value))
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let important = if self.important { " !important" } else { "" };
        write!(f, "{}:{}{important};", self.property.property_name(), self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::CssVersion;

    #[test]
    fn test_write() {
        let value = CssValue::new(CssProperty::free(Property::Color), " red ", false).unwrap();
        assert_eq!(value.value(), "red");
        let settings = WriterSettings::default();
        assert_eq!(value.as_css_string(&settings, 0).unwrap(), "color:red;");
        assert_eq!(value.to_string(), "color:red;");

        let value = CssValue::new(CssProperty::free(Property::Width), "1px", true).unwrap();
        assert_eq!(value.as_css_string(&settings, 0).unwrap(), "width:1px !important;");
    }

    #[test]
    fn test_version_gate() {
        let value = CssValue::new(CssProperty::free(Property::BorderRadius), "2px", false).unwrap();
        assert!(value.as_css_string(&WriterSettings::new(CssVersion::Css21), 0).is_err());
        assert!(value.as_css_string(&WriterSettings::new(CssVersion::Css30), 0).is_ok());
    }

    #[test]
    fn test_empty_value() {
        let prop = CssProperty::free(Property::Color);
        assert!(CssValue::new(prop.clone(), "  ", false).is_err());
        let mut value = CssValue::new(prop, "red", false).unwrap();
        assert!(value.set_value("").is_err());
        value.set_value("blue").unwrap();
        assert_eq!(value.value(), "blue");
    }

    #[test]
    fn test_to_declaration() {
        let value = CssValue::new(CssProperty::free(Property::Margin), "0 auto", true).unwrap();
        let decl = value.to_declaration().unwrap();
        assert_eq!(decl.property(), "margin");
        assert!(decl.is_important());
    }
}
