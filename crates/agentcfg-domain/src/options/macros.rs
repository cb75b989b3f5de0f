//! Dynamic Option Definition Macro
//!
//! Generates every piece of the option registry from one declarative
//! list, so that the identifier, wire key, field and parser of an option
//! are written down exactly once.
//!
//! # Example
//!
//! ```ignore
//! define_dynamic_options! {
//!     /// Whether the agent records anything at all
//!     Recording {
//!         key: "recording",
//!         field: recording: bool,
//!         kind: Bool,
//!         parser: parsers::parse_bool,
//!         default: true,
//!     },
//! }
//! ```

/// Macro to define the dynamic option registry
///
/// This macro generates:
/// - `DynamicOption`, the closed enum of option identifiers
/// - `DynamicSettings`, the static value of every option
/// - `DynamicOverrides`, the optional remote value of every option
/// - `DESCRIPTORS`, the key/parser table iterated by the response parser
/// - one resolver per field on `LayeredSnapshot`
///
/// # Parameters
///
/// For each option:
/// - `key`: wire key used by the configuration endpoint
/// - `field`: field name and Rust type of the parsed value
/// - `kind`: the `OptionKind` variant describing the value grammar
/// - `parser`: `fn(&str) -> Result<T, String>` producing the typed value
/// - `default`: value used when the static configuration omits the option
macro_rules! define_dynamic_options {
    (
        $(
            $(#[doc = $doc:literal])*
            $variant:ident {
                key: $key:literal,
                field: $field:ident : $ty:ty,
                kind: $kind:ident,
                parser: $parser:expr,
                default: $default:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Options the central configuration endpoint may change at runtime
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DynamicOption {
            $( $(#[doc = $doc])* $variant ),*
        }

        impl DynamicOption {
            /// Every option, in registry order
            pub const ALL: &'static [DynamicOption] = &[ $( DynamicOption::$variant ),* ];

            /// Wire key of the option
            pub fn key(self) -> &'static str {
                match self {
                    $( DynamicOption::$variant => $key ),*
                }
            }

            pub fn kind(self) -> OptionKind {
                match self {
                    $( DynamicOption::$variant => OptionKind::$kind ),*
                }
            }

            /// Option registered under a wire key
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $( $key => Some(DynamicOption::$variant), )*
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for DynamicOption {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.key())
            }
        }

        /// Static value of every dynamic option
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(default)]
        pub struct DynamicSettings {
            $( $(#[doc = $doc])* pub $field: $ty ),*
        }

        impl Default for DynamicSettings {
            fn default() -> Self {
                Self {
                    $( $field: $default ),*
                }
            }
        }

        impl DynamicSettings {
            /// Value of one option
            pub fn get(&self, option: DynamicOption) -> OptionValue {
                match option {
                    $( DynamicOption::$variant => OptionValue::from(self.$field.clone()) ),*
                }
            }
        }

        /// Remote values received from the central configuration endpoint
        ///
        /// A field is `Some` only when its key was present in the payload
        /// and its value parsed.
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct DynamicOverrides {
            $( pub $field: Option<$ty> ),*
        }

        impl DynamicOverrides {
            /// Value of one option, if overridden
            pub fn get(&self, option: DynamicOption) -> Option<OptionValue> {
                match option {
                    $( DynamicOption::$variant => self.$field.clone().map(OptionValue::from) ),*
                }
            }

            pub fn contains(&self, option: DynamicOption) -> bool {
                match option {
                    $( DynamicOption::$variant => self.$field.is_some() ),*
                }
            }

            /// Options that carry a value
            pub fn options(&self) -> Vec<DynamicOption> {
                DynamicOption::ALL
                    .iter()
                    .copied()
                    .filter(|option| self.contains(*option))
                    .collect()
            }

            pub fn len(&self) -> usize {
                self.options().len()
            }

            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Settings with every present override applied on top of `base`
            pub fn layered_over(&self, base: &DynamicSettings) -> DynamicSettings {
                DynamicSettings {
                    $( $field: self.$field.clone().unwrap_or_else(|| base.$field.clone()) ),*
                }
            }
        }

        static DESCRIPTORS: &[OptionDescriptor] = &[
            $(
                OptionDescriptor {
                    option: DynamicOption::$variant,
                    parse: |raw| ($parser)(raw).map(OptionValue::from),
                    parse_into: |raw, overrides| {
                        overrides.$field = Some(($parser)(raw)?);
                        Ok(())
                    },
                }
            ),*
        ];

        impl $crate::snapshot::LayeredSnapshot {
            $(
                $(#[doc = $doc])*
                pub fn $field(&self) -> &$ty {
                    self.overrides()
                        .and_then(|overrides| overrides.$field.as_ref())
                        .unwrap_or(&self.base().dynamic.$field)
                }
            )*
        }
    };
}
