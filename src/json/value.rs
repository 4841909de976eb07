// Copyright 2025 Cowboy AI, LLC.

//! The closed set of JSON shapes

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{JsonArray, JsonObject};

/// A JSON value.
///
/// There is no null variant: an explicit null lives inside a container as
/// `None` (an object entry or an array element), never as a tree of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Json {
    /// `true` or `false`
    Boolean(bool),
    /// An integer or a finite float
    Number(Number),
    /// Text
    String(String),
    /// Ordered key/value entries
    Object(JsonObject),
    /// Ordered elements
    Array(JsonArray),
}

/// The variant tag of a [`Json`] value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum JsonKind {
    /// Boolean tag
    Boolean,
    /// Number tag
    Number,
    /// String tag
    String,
    /// Object tag
    Object,
    /// Array tag
    Array,
}

impl JsonKind {
    /// Lowercase JSON type name
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Object => "object",
            JsonKind::Array => "array",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Json {
    /// The variant tag
    pub fn kind(&self) -> JsonKind {
        match self {
            Json::Boolean(_) => JsonKind::Boolean,
            Json::Number(_) => JsonKind::Number,
            Json::String(_) => JsonKind::String,
            Json::Object(_) => JsonKind::Object,
            Json::Array(_) => JsonKind::Array,
        }
    }

    /// The boolean payload, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The number payload, if this is a number
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Json::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The text payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    /// The object, if this is an object
    pub fn as_object(&self) -> Option<&JsonObject> {
        match self {
            Json::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The array, if this is an array
    pub fn as_array(&self) -> Option<&JsonArray> {
        match self {
            Json::Array(a) => Some(a),
            _ => None,
        }
    }
}

/// Write an optional value, `None` being the JSON null.
pub(crate) fn write_entry(f: &mut fmt::Formatter<'_>, value: Option<&Json>) -> fmt::Result {
    match value {
        Some(json) => fmt::Display::fmt(json, f),
        None => f.write_str("null"),
    }
}

pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    let quoted = serde_json::to_string(text).map_err(|_| fmt::Error)?;
    f.write_str(&quoted)
}

/// Compact JSON text. Object entries print in their stored order, duplicates included.
impl fmt::Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Json::Boolean(b) => write!(f, "{b}"),
            Json::Number(n) => write!(f, "{n}"),
            Json::String(s) => write_quoted(f, s),
            Json::Object(o) => fmt::Display::fmt(o, f),
            Json::Array(a) => fmt::Display::fmt(a, f),
        }
    }
}
