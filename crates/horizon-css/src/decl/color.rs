//! Color function values: `rgb()`, `rgba()`, `hsl()` and `hsla()`.
//!
//! Components are stored as written (numbers or percentages) so that a
//! value reads back exactly as it was created.

use std::fmt;

use crate::source_location::{SourceMeta, impl_source_location_aware};
use crate::version::CssVersion;
use crate::writer::{CssVersionAware, CssWriteable, WriterSettings};
use crate::{Error, Result};

fn require_component(name: &str, value: String) -> Result<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        Err(Error::invalid_argument(format!("Color component '{name}' may not be empty")))
    } else {
        Ok(value)
    }
}

macro_rules! color_value {
    (
        $(#[$meta:meta])*
        $name:ident, $function:literal, $version:expr, [$($field:ident),+]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name {
            $($field: String,)+
            source: SourceMeta,
        }

        impl $name {
            /// The CSS function name.
            pub const FUNCTION_NAME: &'static str = $function;

            /// Fails if a component is empty.
            pub fn new($($field: impl Into<String>),+) -> Result<Self> {
                Ok(Self {
                    $($field: require_component(stringify!($field), $field.into())?,)+
                    source: SourceMeta::default(),
                })
            }

            $(
                pub fn $field(&self) -> &str {
                    &self.$field
                }
            )+
        }

        impl CssVersionAware for $name {
            fn min_version(&self) -> CssVersion {
                $version
            }
        }

        impl CssWriteable for $name {
            fn as_css_string(&self, settings: &WriterSettings, _indent_level: usize) -> Result<String> {
                settings.check_version_requirements(concat!($function, "()"), self.min_version())?;
                Ok(self.to_string())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let components = [$(self.$field.as_str()),+];
                write!(f, "{}({})", $function, components.join(","))
            }
        }

        impl_source_location_aware!($name);
    };
}

color_value!(
    /// `rgb(red, green, blue)`
    Rgb, "rgb", CssVersion::Css10, [red, green, blue]
);

color_value!(
    /// `rgba(red, green, blue, opacity)`
    Rgba, "rgba", CssVersion::Css30, [red, green, blue, opacity]
);

color_value!(
    /// `hsl(hue, saturation, lightness)`
    Hsl, "hsl", CssVersion::Css30, [hue, saturation, lightness]
);

color_value!(
    /// `hsla(hue, saturation, lightness, opacity)`
    Hsla, "hsla", CssVersion::Css30, [hue, saturation, lightness, opacity]
);

impl Rgb {
    /// An RGB value from integer components, each clamped to `0..=255`.
    pub fn from_ints(red: i32, green: i32, blue: i32) -> Self {
        let clamp = |v: i32| v.clamp(0, 255).to_string();
        Self {
            red: clamp(red),
            green: clamp(green),
            blue: clamp(blue),
            source: SourceMeta::default(),
        }
    }

    /// This color with an opacity.
    pub fn with_opacity(&self, opacity: impl Into<String>) -> Result<Rgba> {
        Rgba::new(
            self.red.clone(),
            self.green.clone(),
            self.blue.clone(),
            opacity,
        )
    }
}

impl Hsl {
    /// This color with an opacity.
    pub fn with_opacity(&self, opacity: impl Into<String>) -> Result<Hsla> {
        Hsla::new(
            self.hue.clone(),
            self.saturation.clone(),
            self.lightness.clone(),
            opacity,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let rgb = Rgb::new("1", "2", "3").unwrap();
        assert_eq!(rgb.to_string(), "rgb(1,2,3)");
        assert_eq!(rgb.with_opacity("0.5").unwrap().to_string(), "rgba(1,2,3,0.5)");

        let hsl = Hsl::new("120", "100%", " 50% ").unwrap();
        assert_eq!(hsl.lightness(), "50%");
        assert_eq!(hsl.with_opacity("1").unwrap().to_string(), "hsla(120,100%,50%,1)");
    }

    #[test]
    fn test_invalid_components() {
        assert!(Rgb::new("1", "", "3").is_err());
        assert!(Hsla::new("1", "2%", "3%", " ").is_err());
        assert_eq!(Rgb::from_ints(-5, 300, 7).to_string(), "rgb(0,255,7)");
    }

    #[test]
    fn test_version() {
        let rgba = Rgba::new("1", "2", "3", "0.1").unwrap();
        assert!(
            rgba.as_css_string(&WriterSettings::new(CssVersion::Css21), 0)
                .is_err()
        );
        let rgb = Rgb::new("1", "2", "3").unwrap();
        assert_eq!(
            rgb.as_css_string(&WriterSettings::new(CssVersion::Css10), 0)
                .unwrap(),
            "rgb(1,2,3)"
        );
    }
}
