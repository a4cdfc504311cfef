//! Known media types and media features.

use crate::names::css_name_enum;

css_name_enum! {
    /// A media type, as used in `@media print` or `@import url(x) screen`.
    pub enum Medium {
        All => "all",
        Aural => "aural",
        Braille => "braille",
        Embossed => "embossed",
        Handheld => "handheld",
        Print => "print",
        Projection => "projection",
        Screen => "screen",
        Speech => "speech",
        Tty => "tty",
        Tv => "tv",
    }
}

css_name_enum! {
    /// A media feature, as used in `(max-width: 600px)`.
    pub enum MediaFeature {
        Width => "width",
        MinWidth => "min-width",
        MaxWidth => "max-width",
        Height => "height",
        MinHeight => "min-height",
        MaxHeight => "max-height",
        DeviceWidth => "device-width",
        MinDeviceWidth => "min-device-width",
        MaxDeviceWidth => "max-device-width",
        DeviceHeight => "device-height",
        MinDeviceHeight => "min-device-height",
        MaxDeviceHeight => "max-device-height",
        Orientation => "orientation",
        AspectRatio => "aspect-ratio",
        MinAspectRatio => "min-aspect-ratio",
        MaxAspectRatio => "max-aspect-ratio",
        DeviceAspectRatio => "device-aspect-ratio",
        MinDeviceAspectRatio => "min-device-aspect-ratio",
        MaxDeviceAspectRatio => "max-device-aspect-ratio",
        Color => "color",
        MinColor => "min-color",
        MaxColor => "max-color",
        ColorIndex => "color-index",
        MinColorIndex => "min-color-index",
        MaxColorIndex => "max-color-index",
        Monochrome => "monochrome",
        MinMonochrome => "min-monochrome",
        MaxMonochrome => "max-monochrome",
        Resolution => "resolution",
        MinResolution => "min-resolution",
        MaxResolution => "max-resolution",
        Scan => "scan",
        Grid => "grid",
        DevicePixelRatio => "device-pixel-ratio",
        MinDevicePixelRatio => "min-device-pixel-ratio",
        MaxDevicePixelRatio => "max-device-pixel-ratio",
        WebkitDevicePixelRatio => "-webkit-device-pixel-ratio",
        WebkitMinDevicePixelRatio => "-webkit-min-device-pixel-ratio",
        WebkitMaxDevicePixelRatio => "-webkit-max-device-pixel-ratio",
        MozDevicePixelRatio => "-moz-device-pixel-ratio",
        MozMinDevicePixelRatio => "min--moz-device-pixel-ratio",
        MozMaxDevicePixelRatio => "max--moz-device-pixel-ratio",
        OMinDevicePixelRatio => "-o-min-device-pixel-ratio",
        OMaxDevicePixelRatio => "-o-max-device-pixel-ratio",
        PrefersColorScheme => "prefers-color-scheme",
        PrefersReducedMotion => "prefers-reduced-motion",
        PrefersContrast => "prefers-contrast",
        Hover => "hover",
        AnyHover => "any-hover",
        Pointer => "pointer",
        AnyPointer => "any-pointer",
        DisplayMode => "display-mode",
        ForcedColors => "forced-colors",
        Update => "update",
        OverflowBlock => "overflow-block",
        OverflowInline => "overflow-inline",
    }
}

impl MediaFeature {
    /// The feature without its `min-`/`max-` prefix, if it has one.
    pub fn base_feature(&self) -> Option<MediaFeature> {
        let name = self.name();
        let base = name
            .strip_prefix("min-")
            .or_else(|| name.strip_prefix("max-"))
            .or_else(|| name.strip_prefix("-webkit-min-"))
            .or_else(|| name.strip_prefix("-webkit-max-"))?;
        MediaFeature::from_name(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(Medium::from_name("print"), Some(Medium::Print));
        assert_eq!(Medium::from_name("SCREEN"), Some(Medium::Screen));
        assert_eq!(Medium::from_name("hologram"), None);
        assert_eq!(Medium::ALL.len(), 11);

        assert_eq!(
            MediaFeature::from_name("max-width"),
            Some(MediaFeature::MaxWidth)
        );
        assert_eq!(
            MediaFeature::from_name("prefers-color-scheme"),
            Some(MediaFeature::PrefersColorScheme)
        );
        assert_eq!(MediaFeature::from_name("max-foo"), None);
        assert_eq!(MediaFeature::Hover.to_string(), "hover");
    }

    #[test]
    fn test_base_feature() {
        assert_eq!(
            MediaFeature::MinWidth.base_feature(),
            Some(MediaFeature::Width)
        );
        assert_eq!(
            MediaFeature::WebkitMinDevicePixelRatio.base_feature(),
            Some(MediaFeature::DevicePixelRatio)
        );
        assert_eq!(MediaFeature::Width.base_feature(), None);
    }
}
