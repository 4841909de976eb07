// Copyright 2025 Cowboy AI, LLC.

//! Consumer types declared over a JSON object
//!
//! [`json_record!`](crate::json_record) declares a type that is constructed
//! from a [`JsonObject`] and exposes one lazily bound accessor per field. Each
//! field names its type, its mode and its binding; the JSON key defaults to the
//! field's own name.
//!
//! ```rust
//! use cim_json::{bind, json_object, json_record, JsonWrapper};
//! use chrono::NaiveDate;
//! use uuid::Uuid;
//!
//! json_record! {
//!     /// A pet read from a JSON document
//!     pub struct Pet {
//!         /// Unique identifier
//!         pub id: Uuid = Required(bind::uuid()),
//!         /// Display name
//!         pub name: String = Required(bind::string()),
//!         /// Birthday, stored under a camel-case key
//!         pub date_of_birth as "dateOfBirth": NaiveDate = Checked(bind::date()),
//!     }
//! }
//!
//! let pet = Pet::from_json(json_object! {
//!     "id" => "ba6e5573-06c0-4dd7-99ca-ef481fc2f870",
//!     "name" => "Scamper",
//!     "dateOfBirth" => "2018-04-26",
//! });
//!
//! assert_eq!(pet.name().unwrap(), "Scamper");
//! assert!(pet.date_of_birth().is_success());
//! ```

use crate::json::JsonObject;

/// A type backed by a JSON object.
///
/// Equality, hashing and printing of a wrapper go through its object, never
/// through identity.
pub trait JsonWrapper: Sized {
    /// Wrap `json`. Fields are bound, not evaluated.
    fn from_json(json: JsonObject) -> Self;

    /// The underlying object
    fn json(&self) -> &JsonObject;
}

/// A domain value that projects itself back to a JSON object.
pub trait ToJsonObject {
    /// The object form of `self`
    fn to_json_object(&self) -> JsonObject;
}

#[doc(hidden)]
#[macro_export]
macro_rules! __json_record_key {
    ($field:ident) => {
        ::std::stringify!($field)
    };
    ($field:ident, $key:literal) => {
        $key
    };
}

/// Declare a type whose fields are lazy bindings over a [`JsonObject`].
///
/// Each field reads `name [as "key"]: Type = Mode(binding)` where `Mode` is
/// `Checked` (the accessor returns `&Outcome<JsonInterpretationFailure, Type>`)
/// or `Required` (the accessor returns `JsonResult<&Type>`).
///
/// Every field also gets `with_<field>(value)`, which copies the record with
/// that field's JSON key replaced.
///
/// The generated type implements [`JsonWrapper`], [`ToJsonObject`],
/// `From<JsonObject>`, `Clone` (which starts from unevaluated fields),
/// `PartialEq`, `Eq`, `Hash`, `Debug` and `Display`.
#[macro_export]
macro_rules! json_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident $(as $key:literal)? : $ty:ty = $mode:ident($binding:expr)
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            json: $crate::JsonObject,
            $(
                $field: $crate::LazyField<$ty, $crate::$mode>,
            )*
        }

        impl $name {
            $(
                $(#[$field_meta])*
                $field_vis fn $field(&self) -> <$crate::$mode as $crate::BindingMode>::Read<'_, $ty> {
                    self.$field.read()
                }
            )*
        }

        $crate::__private::paste! {
            impl $name {
                $(
                    /// A copy with this field's key replaced by `value`.
                    ///
                    /// `self` is left untouched; the copy starts with every field unevaluated.
                    #[allow(dead_code)]
                    $field_vis fn [<with_ $field>](&self, value: impl $crate::IntoJsonEntry) -> Self {
                        <Self as $crate::JsonWrapper>::from_json(self.json.replace([(
                            $crate::__json_record_key!($field $(, $key)?),
                            value,
                        )]))
                    }
                )*
            }
        }

        impl $crate::JsonWrapper for $name {
            fn from_json(json: $crate::JsonObject) -> Self {
                Self {
                    $(
                        $field: $crate::LazyField::new(
                            &json,
                            $crate::__json_record_key!($field $(, $key)?),
                            $binding,
                        ),
                    )*
                    json,
                }
            }

            fn json(&self) -> &$crate::JsonObject {
                &self.json
            }
        }

        impl ::std::convert::From<$crate::JsonObject> for $name {
            fn from(json: $crate::JsonObject) -> Self {
                <Self as $crate::JsonWrapper>::from_json(json)
            }
        }

        impl $crate::ToJsonObject for $name {
            fn to_json_object(&self) -> $crate::JsonObject {
                self.json.clone()
            }
        }

        impl ::std::clone::Clone for $name {
            fn clone(&self) -> Self {
                <Self as $crate::JsonWrapper>::from_json(self.json.clone())
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.json == other.json
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                ::std::hash::Hash::hash(&self.json, state);
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_tuple(::std::stringify!($name)).field(&self.json).finish()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.json, f)
            }
        }
    };
}
