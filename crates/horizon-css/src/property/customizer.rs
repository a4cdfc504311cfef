//! Customizers that expand a value into browser specific variants.

use super::css_property::CssProperty;
use super::name::Property;
use crate::propertyvalue::{CssValueList, CssValueMultiProperty, PropertyValue};
use crate::vendor::VendorPrefix;

/// Hook to create a special value for a property.
///
/// Returning `None` falls back to a plain single value.
pub trait PropertyCustomizer: Send + Sync {
    /// A short name, used for debugging output.
    fn name(&self) -> &'static str;

    fn create_special_value(
        &self,
        property: &CssProperty,
        value: &str,
        important: bool,
    ) -> Option<PropertyValue>;
}

static_assertions::assert_obj_safe!(PropertyCustomizer);

/// Writes `border-radius` together with its `-moz-`, `-webkit-` and
/// `-khtml-` variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderRadiusCustomizer;

impl PropertyCustomizer for BorderRadiusCustomizer {
    fn name(&self) -> &'static str {
        "border-radius"
    }

    fn create_special_value(
        &self,
        property: &CssProperty,
        value: &str,
        important: bool,
    ) -> Option<PropertyValue> {
        let properties = vec![
            property.clone(),
            property.clone_with_vendor(VendorPrefix::Mozilla),
            property.clone_with_vendor(VendorPrefix::Webkit),
            property.clone_with_vendor(VendorPrefix::Khtml),
        ];
        CssValueMultiProperty::new(property.property(), properties, value, important)
            .ok()
            .map(PropertyValue::MultiProperty)
    }
}

/// Writes a numeric `opacity` together with the legacy Internet Explorer
/// filters and the vendor prefixed variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpacityCustomizer;

impl PropertyCustomizer for OpacityCustomizer {
    fn name(&self) -> &'static str {
        "opacity"
    }

    fn create_special_value(
        &self,
        property: &CssProperty,
        value: &str,
        important: bool,
    ) -> Option<PropertyValue> {
        let opacity: f64 = value.trim().parse().ok()?;
        let percent = (opacity * 100.0) as i64;

        let filter = CssProperty::free(Property::Filter);
        let properties = vec![
            filter.clone_with_vendor(VendorPrefix::Microsoft),
            filter,
            property.clone_with_vendor(VendorPrefix::Mozilla),
            property.clone_with_vendor(VendorPrefix::Webkit),
            property.clone(),
        ];
        let values = vec![
            format!("\"progid:DXImageTransform.Microsoft.Alpha(Opacity={percent})\""),
            format!("alpha(opacity={percent})"),
            value.to_string(),
            value.to_string(),
            value.to_string(),
        ];
        CssValueList::new(Property::Opacity, properties, values, important)
            .ok()
            .map(PropertyValue::List)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::property::PropertyKind;
    use crate::writer::{CssWriteable, WriterSettings};

    #[test]
    fn test_border_radius() {
        let prop = CssProperty::free(Property::BorderRadius)
            .with_customizer(Arc::new(BorderRadiusCustomizer));
        let value = prop.new_value("5px", false).unwrap();
        assert_eq!(value.values().len(), 4);
        assert_eq!(
            value.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "border-radius:5px;-moz-border-radius:5px;-webkit-border-radius:5px;-khtml-border-radius:5px;"
        );
    }

    #[test]
    fn test_opacity() {
        let prop = CssProperty::new(Property::Opacity, PropertyKind::Decimal)
            .with_customizer(Arc::new(OpacityCustomizer));
        let value = prop.new_value("0.5", false).unwrap();
        assert_eq!(
            value.as_css_string(&WriterSettings::default(), 0).unwrap(),
            "-ms-filter:\"progid:DXImageTransform.Microsoft.Alpha(Opacity=50)\";\
             filter:alpha(opacity=50);-moz-opacity:0.5;-webkit-opacity:0.5;opacity:0.5;"
        );

        // Not a number, so no special value.
        let value = prop.new_value("inherit", false).unwrap();
        assert!(matches!(value, PropertyValue::Single(_)));
    }
}
