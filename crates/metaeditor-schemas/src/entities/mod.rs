//! Entity catalogs for timeseries and survey microdata records
//!
//! Each entity is declared once through the `entity!` macro, which produces
//! the public struct together with its field catalog, its checking walk and
//! its wire conversion, so the declared shape and the validated shape are
//! always the same thing.
//!
//! Copyright (c) 2025 Metadata Editor Team
//! Licensed under the Apache-2.0 license

/// Wire name of a field: the explicit `as "..."` literal, or the identifier
macro_rules! wire_name {
    ($field:ident, $wire:literal) => {
        $wire
    };
    ($field:ident) => {
        stringify!($field)
    };
}

/// Declare an entity struct and implement `FieldType` and `Entity` for it
macro_rules! entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident $(as $wire:literal)? : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::validation::FieldType for $name {
            fn conform(
                value: &::serde_json::Value,
                path: &$crate::validation::FieldPath,
                violations: &mut $crate::validation::Violations,
            ) -> Option<Self> {
                let ::serde_json::Value::Object(map) = value else {
                    violations.push(
                        $crate::validation::ViolationKind::ModelType,
                        path,
                        concat!(
                            "Input should be a valid dictionary or instance of ",
                            stringify!($name)
                        ),
                    );
                    return None;
                };
                $(
                    let $field = $crate::validation::conform_member::<$ty>(
                        map,
                        wire_name!($field $(, $wire)?),
                        path,
                        violations,
                    );
                )*
                for key in map.keys() {
                    if !<Self as $crate::validation::Entity>::has_field(key) {
                        violations.push(
                            $crate::validation::ViolationKind::ExtraForbidden,
                            &path.child(key),
                            "Extra inputs are not permitted",
                        );
                    }
                }
                Some(Self {
                    $( $field: $field?, )*
                })
            }

            fn to_value(&self) -> ::serde_json::Value {
                let mut map = ::serde_json::Map::new();
                $(
                    if !$crate::validation::FieldType::is_unset(&self.$field) {
                        map.insert(
                            wire_name!($field $(, $wire)?).to_string(),
                            $crate::validation::FieldType::to_value(&self.$field),
                        );
                    }
                )*
                ::serde_json::Value::Object(map)
            }

            fn placeholder() -> Self {
                Self {
                    $( $field: <$ty as $crate::validation::FieldType>::placeholder(), )*
                }
            }
        }

        impl $crate::validation::Entity for $name {
            const NAME: &'static str = stringify!($name);

            fn field_names() -> &'static [&'static str] {
                &[$( wire_name!($field $(, $wire)?) ),*]
            }

            fn field_value(&self, name: &str) -> Option<::serde_json::Value> {
                $(
                    if name == wire_name!($field $(, $wire)?) {
                        if $crate::validation::FieldType::is_unset(&self.$field) {
                            return None;
                        }
                        return Some($crate::validation::FieldType::to_value(&self.$field));
                    }
                )*
                None
            }

            fn set_field(
                &mut self,
                name: &str,
                value: &::serde_json::Value,
            ) -> Result<(), $crate::validation::SchemaViolation> {
                let path = $crate::validation::FieldPath::root().child(name);
                $(
                    if name == wire_name!($field $(, $wire)?) {
                        let mut violations = $crate::validation::Violations::new();
                        let converted = <$ty as $crate::validation::FieldType>::conform(
                            value,
                            &path,
                            &mut violations,
                        );
                        self.$field = violations.finish(converted)?;
                        return Ok(());
                    }
                )*
                Err($crate::validation::Violation::new(
                    $crate::validation::ViolationKind::ExtraForbidden,
                    path,
                    "Extra inputs are not permitted",
                )
                .into())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                ::serde::Serialize::serialize(
                    &$crate::validation::FieldType::to_value(self),
                    serializer,
                )
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <::serde_json::Value as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::validation::Entity>::from_value(&value)
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

/// Declare a closed set of string choices, checked as a `^(a|b)$` pattern
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident => $first_wire:literal
            $(, $variant:ident => $wire:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $( $variant, )*
        }

        impl $name {
            /// Every accepted wire value, in declaration order
            pub const ALLOWED: &'static [&'static str] = &[$first_wire $(, $wire)*];

            /// Wire value of this choice
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => $first_wire,
                    $( Self::$variant => $wire, )*
                }
            }

            /// Look up a choice by its exact wire value
            pub fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $first_wire => Some(Self::$first),
                    $( $wire => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// The pattern reported when a value is outside the set
            pub fn pattern() -> String {
                format!("^({})$", Self::ALLOWED.join("|"))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::validation::FieldType for $name {
            fn conform(
                value: &::serde_json::Value,
                path: &$crate::validation::FieldPath,
                violations: &mut $crate::validation::Violations,
            ) -> Option<Self> {
                let ::serde_json::Value::String(input) = value else {
                    violations.push(
                        $crate::validation::ViolationKind::StringType,
                        path,
                        "Input should be a valid string",
                    );
                    return None;
                };
                let choice = Self::from_wire(input);
                if choice.is_none() {
                    violations.push(
                        $crate::validation::ViolationKind::StringPatternMismatch,
                        path,
                        format!("String should match pattern '{}'", Self::pattern()),
                    );
                }
                choice
            }

            fn to_value(&self) -> ::serde_json::Value {
                ::serde_json::Value::String(self.as_str().to_string())
            }

            fn placeholder() -> Self {
                Self::$first
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_wire(&value).ok_or_else(|| {
                    ::serde::de::Error::custom(format!(
                        "String should match pattern '{}'",
                        Self::pattern()
                    ))
                })
            }
        }
    };
}

pub mod common;
pub mod microdata;
pub mod timeseries;

pub use common::*;
pub use microdata::*;
pub use timeseries::*;
