//! Browser vendor prefixes.

/// A vendor-specific property or at-rule prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorPrefix {
    Apple,
    Atsc,
    Epub,
    Khtml,
    Microsoft,
    MicrosoftOffice,
    Mozilla,
    Opera,
    Scrollbar,
    Wap,
    Webkit,
}

impl VendorPrefix {
    pub const ALL: [VendorPrefix; 11] = [
        VendorPrefix::Apple,
        VendorPrefix::Atsc,
        VendorPrefix::Epub,
        VendorPrefix::Khtml,
        VendorPrefix::Microsoft,
        VendorPrefix::MicrosoftOffice,
        VendorPrefix::Mozilla,
        VendorPrefix::Opera,
        VendorPrefix::Scrollbar,
        VendorPrefix::Wap,
        VendorPrefix::Webkit,
    ];

    /// The prefix text, including separators (e.g., `-moz-`).
    pub const fn prefix(&self) -> &'static str {
        match self {
            VendorPrefix::Apple => "-apple-",
            VendorPrefix::Atsc => "-atsc-",
            VendorPrefix::Epub => "-epub-",
            VendorPrefix::Khtml => "-khtml-",
            VendorPrefix::Microsoft => "-ms-",
            VendorPrefix::MicrosoftOffice => "mso-",
            VendorPrefix::Mozilla => "-moz-",
            VendorPrefix::Opera => "-o-",
            VendorPrefix::Scrollbar => "scrollbar-",
            VendorPrefix::Wap => "-wap-",
            VendorPrefix::Webkit => "-webkit-",
        }
    }

    pub const fn display_name(&self) -> &'static str {
        match self {
            VendorPrefix::Apple => "Safari",
            VendorPrefix::Atsc => "Advanced Television Standards Committee",
            VendorPrefix::Epub => "EPUB",
            VendorPrefix::Khtml => "Konqueror browser",
            VendorPrefix::Microsoft => "Microsoft",
            VendorPrefix::MicrosoftOffice => "Microsoft Office",
            VendorPrefix::Mozilla => "Mozilla",
            VendorPrefix::Opera => "Opera",
            VendorPrefix::Scrollbar => "Scrollbars",
            VendorPrefix::Wap => "The WAP forum",
            VendorPrefix::Webkit => "WebKit-based browsers",
        }
    }

    /// Find a vendor by its exact prefix text.
    pub fn from_prefix(prefix: &str) -> Option<VendorPrefix> {
        Self::ALL.iter().copied().find(|v| v.prefix() == prefix)
    }

    /// Find the vendor whose prefix starts the given name (e.g. `-moz-opacity`).
    pub fn of_name(name: &str) -> Option<VendorPrefix> {
        Self::ALL.iter().copied().find(|v| name.starts_with(v.prefix()))
    }

    /// Apply the prefix to a name.
    pub fn apply(&self, name: &str) -> String {
        format!("{}{}", self.prefix(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(VendorPrefix::from_prefix("-moz-"), Some(VendorPrefix::Mozilla));
        assert_eq!(VendorPrefix::from_prefix("-moz"), None);
        assert_eq!(VendorPrefix::of_name("-webkit-transition"), Some(VendorPrefix::Webkit));
        assert_eq!(VendorPrefix::of_name("transition"), None);
    }

    #[test]
    fn test_apply() {
        assert_eq!(VendorPrefix::Khtml.apply("border-radius"), "-khtml-border-radius");
    }
}
