//! Macro for implementing Display and FromStr for small domain enums
//!
//! Storage backends, cascade policies and grid metrics all round-trip through
//! plain strings (config files, environment variables, grid field keys). This
//! macro gives them one consistent implementation of both traits.
//!
//! # Example
//!
//! ```rust
//! use merchplan_domain::impl_domain_enum_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Backend {
//!     Memory,
//!     Sqlite,
//! }
//!
//! impl_domain_enum_conversions!(Backend {
//!     Memory => "memory",
//!     Sqlite => "sqlite",
//! });
//!
//! assert_eq!(Backend::Sqlite.to_string(), "sqlite");
//! assert_eq!("MEMORY".parse::<Backend>(), Ok(Backend::Memory));
//! ```

/// Implements Display and FromStr traits for domain enums
///
/// This macro generates:
/// - Display trait: writes the canonical string of the variant
/// - FromStr trait: ASCII case-insensitive match against the canonical strings
///
/// Canonical strings keep their own casing on output, so camelCase names such
/// as `"salesUnits"` survive a round trip.
#[macro_export]
macro_rules! impl_domain_enum_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Canonical string form of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
