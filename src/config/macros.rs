/// Configuration macros for zero-repetition config definitions
///
/// This module provides the `config_struct!` macro that allows defining
/// configuration structures with embedded defaults in a single declaration.

/// Define a configuration struct with embedded defaults
///
/// One declaration per field carries the name, type, default value, optional
/// serde attributes, and optional rendering metadata, and the macro generates:
/// - the struct with public fields
/// - a `Default` implementation with the specified values
/// - serde support with `#[serde(default)]`, so missing fields in persisted
///   data deserialize to their defaults instead of failing
/// - a `field_metadata()` section map fed by the `#[metadata(...)]` attributes
///
/// # Example
/// ```
/// use coinsource::{config_struct, field_metadata};
///
/// config_struct! {
///     pub struct RetryConfig {
///         #[metadata(field_metadata! {
///             label: "max_attempts",
///             min: 1,
///             max: 10,
///         })]
///         max_attempts: u32 = 3,
///         backoff_enabled: bool = true,
///     }
/// }
/// ```
#[macro_export]
macro_rules! config_struct {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[doc $($doc:tt)*])*
                $(#[metadata($extras:expr)])?
                $(#[serde $($serde:tt)*])?
                $field_name:ident: $field_type:ty = $default_value:expr
            ),*
            $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        $vis struct $name {
            $(
                $(#[doc $($doc)*])*
                $(#[serde $($serde)*])?
                pub $field_name: $field_type,
            )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $(
                        $field_name: $default_value,
                    )*
                }
            }
        }

        impl $name {
            /// Per-field rendering metadata for this config section.
            pub fn field_metadata() -> $crate::config::metadata::SectionMetadata {
                let defaults = Self::default();
                let mut section = $crate::config::metadata::SectionMetadata::new();
                $(
                    {
                        #[allow(unused_mut, unused_assignments)]
                        let mut extras = $crate::config::metadata::FieldMetadataExtras::default();
                        $(extras = $extras;)?
                        section.insert(
                            stringify!($field_name),
                            $crate::config::metadata::FieldMetadata::from_parts(
                                &defaults.$field_name,
                                extras,
                            ),
                        );
                    }
                )*
                section
            }
        }
    };
}
