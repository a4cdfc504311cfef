//! Default value grammars for well known properties.

use std::sync::Arc;

use super::css_property::CssProperty;
use super::customizer::{BorderRadiusCustomizer, OpacityCustomizer};
use super::kind::PropertyKind;
use super::name::Property;

fn keywords(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn enumeration(values: &[&str]) -> PropertyKind {
    PropertyKind::Enum(keywords(values))
}

fn enum_or_length(values: &[&str]) -> PropertyKind {
    PropertyKind::EnumOrNumber {
        values: keywords(values),
        with_percentage: true,
    }
}

fn enum_or_lengths(values: &[&str], min: usize, max: usize) -> PropertyKind {
    PropertyKind::EnumOrNumbers {
        values: keywords(values),
        with_percentage: true,
        min,
        max,
    }
}

const LENGTH: PropertyKind = PropertyKind::Number {
    with_percentage: true,
};

/// The validating definition of a property.
///
/// Properties without a dedicated grammar accept any value.
pub fn known_property(property: Property) -> CssProperty {
    use Property as P;

    let kind = match property {
        P::Color
        | P::BackgroundColor
        | P::BorderTopColor
        | P::BorderRightColor
        | P::BorderBottomColor
        | P::BorderLeftColor
        | P::OutlineColor => PropertyKind::Color,

        P::TextTransform => enumeration(&["capitalize", "uppercase", "lowercase", "none"]),
        P::TextAlign => enumeration(&["left", "center", "right", "justify"]),
        P::VerticalAlign => enumeration(&[
            "top",
            "middle",
            "bottom",
            "baseline",
            "sub",
            "super",
            "text-top",
            "text-bottom",
        ]),
        P::WhiteSpace => enumeration(&["normal", "pre", "nowrap", "pre-line", "pre-wrap"]),
        P::ListStyleType => enumeration(&[
            "decimal",
            "lower-roman",
            "upper-roman",
            "lower-alpha",
            "upper-alpha",
            "lower-latin",
            "upper-latin",
            "disc",
            "circle",
            "square",
            "none",
        ]),
        P::ListStylePosition => enumeration(&["inside", "outside"]),
        P::CaptionSide => enumeration(&["top", "bottom"]),
        P::TableLayout => enumeration(&["auto", "fixed"]),
        P::BorderCollapse => enumeration(&["separate", "collapse"]),
        P::EmptyCells => enumeration(&["show", "hide"]),
        P::Position => enumeration(&["static", "relative", "absolute", "fixed", "sticky"]),
        P::Overflow => enumeration(&["visible", "hidden", "scroll", "auto"]),
        P::Float => enumeration(&["left", "right", "none"]),
        P::Clear => enumeration(&["left", "right", "both", "none"]),
        P::Visibility => enumeration(&["visible", "hidden", "collapse"]),
        P::Display => enumeration(&[
            "block",
            "inline",
            "inline-block",
            "list-item",
            "run-in",
            "none",
            "table",
            "inline-table",
            "table-row",
            "table-cell",
            "table-row-group",
            "table-header-group",
            "table-footer-group",
            "table-column",
            "table-column-group",
            "table-caption",
            "flex",
            "inline-flex",
            "grid",
            "inline-grid",
        ]),

        P::TextIndent | P::BorderSpacing | P::MinWidth | P::MaxWidth | P::MinHeight
        | P::MaxHeight => LENGTH,
        P::LineHeight => enum_or_length(&["normal"]),
        P::MarginTop
        | P::MarginRight
        | P::MarginBottom
        | P::MarginLeft
        | P::PaddingTop
        | P::PaddingRight
        | P::PaddingBottom
        | P::PaddingLeft
        | P::Top
        | P::Left
        | P::Bottom
        | P::Right
        | P::Width
        | P::Height => enum_or_length(&["auto"]),
        P::Margin | P::Padding => enum_or_lengths(&["auto"], 1, 4),

        P::ZIndex => PropertyKind::EnumOrInteger(keywords(&["auto"])),
        P::Clip => PropertyKind::EnumOrRect(keywords(&["auto"])),
        P::ListStyleImage => PropertyKind::Url,
        P::Opacity => PropertyKind::Decimal,

        _ => PropertyKind::Free,
    };

    let definition = CssProperty::new(property, kind);
    match property {
        P::BorderRadius => definition.with_customizer(Arc::new(BorderRadiusCustomizer)),
        P::Opacity => definition.with_customizer(Arc::new(OpacityCustomizer)),
        _ => definition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::{CssWriteable, WriterSettings};

    #[test]
    fn test_known_property() {
        assert!(known_property(Property::Display).is_valid_value("inline-block"));
        assert!(!known_property(Property::Display).is_valid_value("sideways"));
        assert!(known_property(Property::Margin).is_valid_value("0 auto"));
        assert!(known_property(Property::ZIndex).is_valid_value("10"));
        assert!(known_property(Property::Clip).is_valid_value("rect(0 0 100 50)"));
        assert!(known_property(Property::Content).is_valid_value("anything at all"));
        assert!(known_property(Property::Color).is_valid_value("inherit"));
    }

    #[test]
    fn test_border_radius_expands() {
        let value = known_property(Property::BorderRadius)
            .new_value("3px", true)
            .unwrap();
        assert_eq!(value.values().len(), 4);
        assert!(value.values().iter().all(|v| v.is_important() && v.value() == "3px"));
        let settings = WriterSettings::default();
        assert!(value
            .as_css_string(&settings, 0)
            .unwrap()
            .starts_with("border-radius:3px !important;-moz-border-radius:3px !important;"));
    }
}
