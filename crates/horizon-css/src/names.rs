//! Closed tables of CSS names.

/// Defines a fieldless enum whose variants map to CSS names.
///
/// Generates `ALL`, a `const fn name()`, a case-insensitive `from_name()`
/// backed by a lazily built map, and `Display`.
macro_rules! css_name_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every entry of the table, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The CSS name.
            pub const fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Look up an entry by name, ignoring ASCII case.
            pub fn from_name(name: &str) -> Option<$name> {
                static BY_NAME: std::sync::LazyLock<std::collections::HashMap<&'static str, $name>> =
                    std::sync::LazyLock::new(|| {
                        $name::ALL.iter().map(|v| (v.name(), *v)).collect()
                    });
                BY_NAME
                    .get(name)
                    .or_else(|| BY_NAME.get(name.to_ascii_lowercase().as_str()))
                    .copied()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

pub(crate) use css_name_enum;
