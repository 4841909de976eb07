// Copyright 2025 Cowboy AI, LLC.

//! Construction helpers: native values into JSON trees
//!
//! ```rust
//! use cim_json::{json_array, json_object, Json, NULL};
//!
//! let pet = json_object! {
//!     "name" => "Scamper",
//!     "age" => 4,
//!     "nickname" => NULL,
//!     "toys" => json_array!["ball", "rope"],
//! };
//!
//! assert_eq!(pet.get("name"), Some(&Json::from("Scamper")));
//! ```

use serde_json::Number;

use super::{Json, JsonArray, JsonObject};
use crate::errors::JsonError;

/// An explicit JSON null, for use as an object entry or array element.
pub const NULL: Option<Json> = None;

/// A value that can stand as an object entry or array element.
///
/// `Option::None` becomes the JSON null.
pub trait IntoJsonEntry {
    /// Convert into an entry value
    fn into_json_entry(self) -> Option<Json>;
}

impl From<bool> for Json {
    fn from(value: bool) -> Self {
        Json::Boolean(value)
    }
}

impl From<Number> for Json {
    fn from(value: Number) -> Self {
        Json::Number(value)
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json::String(value)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::String(value.to_owned())
    }
}

impl From<JsonObject> for Json {
    fn from(value: JsonObject) -> Self {
        Json::Object(value)
    }
}

impl From<JsonArray> for Json {
    fn from(value: JsonArray) -> Self {
        Json::Array(value)
    }
}

macro_rules! json_from_integer {
    ($($int:ty),* $(,)?) => {
        $(
            impl From<$int> for Json {
                fn from(value: $int) -> Self {
                    Json::Number(Number::from(value))
                }
            }
        )*
    };
}

json_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl TryFrom<f64> for Json {
    type Error = JsonError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Number::from_f64(value)
            .map(Json::Number)
            .ok_or(JsonError::NonFiniteNumber(value))
    }
}

impl TryFrom<f32> for Json {
    type Error = JsonError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        Json::try_from(f64::from(value))
    }
}

/// Implement `IntoJsonEntry` for `T` and `Option<T>` through `From<T> for Json`.
macro_rules! entry_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoJsonEntry for $ty {
                fn into_json_entry(self) -> Option<Json> {
                    Some(Json::from(self))
                }
            }

            impl IntoJsonEntry for Option<$ty> {
                fn into_json_entry(self) -> Option<Json> {
                    self.map(Json::from)
                }
            }
        )*
    };
}

pub(crate) use entry_via_from;

entry_via_from!(
    Json, JsonObject, JsonArray, Number, bool, String, &str,
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize,
);

/// Build a [`JsonObject`] from `key => value` pairs.
///
/// Values go through [`IntoJsonEntry`], so native values, `Option`s and
/// [`NULL`] all work.
#[macro_export]
macro_rules! json_object {
    () => {
        $crate::JsonObject::default()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::JsonObject::from_entries(::std::vec![
            $((
                ::std::string::String::from($key),
                $crate::IntoJsonEntry::into_json_entry($value),
            )),+
        ])
    };
}

/// Build a [`JsonArray`] from values.
#[macro_export]
macro_rules! json_array {
    () => {
        $crate::JsonArray::default()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::JsonArray::from_items(::std::vec![
            $($crate::IntoJsonEntry::into_json_entry($value)),+
        ])
    };
}
