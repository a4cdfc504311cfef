//! Values that expand into several declarations.

use super::value::CssValue;
use crate::{Error, Result};
use crate::property::{CssProperty, Property};
use crate::writer::{CssWriteable, WriterSettings};

fn write_all(values: &[CssValue], settings: &WriterSettings, indent_level: usize) -> Result<String> {
    values
        .iter()
        .map(|v| v.as_css_string(settings, indent_level))
        .collect()
}

fn require_property(property: Property, properties: &[CssProperty]) -> Result<()> {
    if properties.is_empty() {
        return Err(Error::invalid_argument("At least one property is required"));
    }
    if !properties.iter().any(|p| p.property() == property) {
        return Err(Error::invalid_argument(format!(
            "The property '{property}' is not contained in the passed properties"
        )));
    }
    Ok(())
}

/// One property with several values, e.g. a fallback chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValueMultiValue {
    values: Vec<CssValue>,
}

impl CssValueMultiValue {
    pub fn new<I, S>(property: &CssProperty, values: I, important: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|v| CssValue::new(property.clone(), v, important))
            .collect::<Result<Vec<_>>>()?;
        if values.is_empty() {
            return Err(Error::invalid_argument("At least one value is required"));
        }
        Ok(Self { values })
    }

    pub fn prop(&self) -> Property {
        self.values[0].prop()
    }

    pub fn values(&self) -> &[CssValue] {
        &self.values
    }
}

/// One value written for several properties, e.g. vendor prefixed variants.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValueMultiProperty {
    property: Property,
    values: Vec<CssValue>,
}

impl CssValueMultiProperty {
    /// `property` must be the property of at least one of `properties`.
    pub fn new(
        property: Property,
        properties: Vec<CssProperty>,
        value: &str,
        important: bool,
    ) -> Result<Self> {
        require_property(property, &properties)?;
        let values = properties
            .into_iter()
            .map(|p| CssValue::new(p, value, important))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { property, values })
    }

    pub fn prop(&self) -> Property {
        self.property
    }

    pub fn values(&self) -> &[CssValue] {
        &self.values
    }
}

/// Parallel lists of properties and values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CssValueList {
    property: Property,
    values: Vec<CssValue>,
}

impl CssValueList {
    pub fn new(
        property: Property,
        properties: Vec<CssProperty>,
        values: Vec<String>,
        important: bool,
    ) -> Result<Self> {
        require_property(property, &properties)?;
        if properties.len() != values.len() {
            return Err(Error::invalid_argument(format!(
                "Different number of properties ({}) and values ({})",
                properties.len(),
                values.len()
            )));
        }
        let values = properties
            .into_iter()
            .zip(values)
            .map(|(p, v)| CssValue::new(p, v, important))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { property, values })
    }

    pub fn prop(&self) -> Property {
        self.property
    }

    pub fn values(&self) -> &[CssValue] {
        &self.values
    }
}

/// Anything [`CssProperty::new_value`] can produce.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Single(CssValue),
    MultiValue(CssValueMultiValue),
    MultiProperty(CssValueMultiProperty),
    List(CssValueList),
}

impl PropertyValue {
    /// The property this value was created for.
    pub fn prop(&self) -> Property {
        match self {
            PropertyValue::Single(v) => v.prop(),
            PropertyValue::MultiValue(v) => v.prop(),
            PropertyValue::MultiProperty(v) => v.prop(),
            PropertyValue::List(v) => v.prop(),
        }
    }

    /// Every contained single value, in writing order.
    pub fn values(&self) -> &[CssValue] {
        match self {
            PropertyValue::Single(v) => std::slice::from_ref(v),
            PropertyValue::MultiValue(v) => v.values(),
            PropertyValue::MultiProperty(v) => v.values(),
            PropertyValue::List(v) => v.values(),
        }
    }
}

impl CssWriteable for PropertyValue {
    fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
        write_all(self.values(), settings, indent_level)
    }
}

macro_rules! impl_multi_writeable {
    ($($ty:ty),+) => {
        $(
            impl CssWriteable for $ty {
                fn as_css_string(&self, settings: &WriterSettings, indent_level: usize) -> Result<String> {
                    write_all(&self.values, settings, indent_level)
                }
            }
        )+
    };
}

impl_multi_writeable!(CssValueMultiValue, CssValueMultiProperty, CssValueList);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vendor::VendorPrefix;

    #[test]
    fn test_multi_value() {
        let prop = CssProperty::free(Property::Width);
        let value = CssValueMultiValue::new(&prop, ["100px", "calc(100% - 2px)"], false).unwrap();
        assert_eq!(value.prop(), Property::Width);
        assert_eq!(
            value.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "width:100px;width:calc(100% - 2px);"
        );
        assert!(CssValueMultiValue::new(&prop, Vec::<String>::new(), false).is_err());
    }

    #[test]
    fn test_multi_property() {
        let prop = CssProperty::free(Property::BoxSizing);
        let value = CssValueMultiProperty::new(
            Property::BoxSizing,
            vec![prop.clone_with_vendor(VendorPrefix::Webkit), prop.clone()],
            "border-box",
            true,
        )
        .unwrap();
        assert_eq!(
            value.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "-webkit-box-sizing:border-box !important;box-sizing:border-box !important;"
        );

        let err = CssValueMultiProperty::new(Property::Color, vec![prop], "red", false);
        assert!(err.is_err());
    }

    #[test]
    fn test_value_list() {
        let width = CssProperty::free(Property::Width);
        let height = CssProperty::free(Property::Height);
        let list = CssValueList::new(
            Property::Width,
            vec![width.clone(), height.clone()],
            vec!["1px".into(), "2px".into()],
            false,
        )
        .unwrap();
        let value = PropertyValue::List(list);
        assert_eq!(value.values().len(), 2);
        assert_eq!(
            value.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "width:1px;height:2px;"
        );

        let mismatch =
            CssValueList::new(Property::Width, vec![width, height], vec!["1px".into()], false);
        assert!(mismatch.is_err());
    }
}
