//! Macros for defining string-keyed schema enums.
//!
//! The task taxonomy and the output field namespace are both closed enums
//! whose identity is a stable snake_case string. This macro keeps the enum
//! definition, the key mapping, the parser, and the exhaustive variant list
//! in a single declaration so they cannot drift apart.

/// Defines a closed enum whose variants each carry a stable string key.
///
/// Generates:
/// - the enum itself, with `serde` renames matching each key,
/// - an `ALL` constant listing every variant in declaration order,
/// - a `$key_method` accessor returning the key string,
/// - a `parse` function mapping a key string back to its variant,
/// - a `Display` implementation writing the key string.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($key_method:ident) {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $key)]
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the stable string identifier for this variant.
            pub fn $key_method(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)*
                }
            }

            /// Parses a string identifier back into its variant.
            ///
            /// Returns `None` when the string names no known variant.
            pub fn parse(value: &str) -> Option<$name> {
                match value {
                    $($key => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.$key_method())
            }
        }
    };
}

pub(crate) use string_enum;
