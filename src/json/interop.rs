// Copyright 2025 Cowboy AI, LLC.

//! Hand-over to and from `serde_json` trees
//!
//! Parsing JSON text is an external collaborator's job. Whatever parser it
//! uses, an already parsed `serde_json::Value` converts into a [`Json`] here.

use serde_json::{Map, Value};

use super::{Json, JsonArray, JsonObject};
use crate::errors::{JsonError, JsonResult};

fn entry_from_value(value: Value) -> Option<Json> {
    match value {
        Value::Null => None,
        Value::Bool(b) => Some(Json::Boolean(b)),
        Value::Number(n) => Some(Json::Number(n)),
        Value::String(s) => Some(Json::String(s)),
        Value::Array(items) => Some(Json::Array(JsonArray::from_items(
            items.into_iter().map(entry_from_value).collect(),
        ))),
        Value::Object(map) => Some(Json::Object(JsonObject::from_entries(
            map.into_iter()
                .map(|(key, value)| (key, entry_from_value(value)))
                .collect(),
        ))),
    }
}

fn value_from_entry(entry: Option<&Json>) -> Value {
    entry.map_or(Value::Null, Value::from)
}

impl TryFrom<Value> for Json {
    type Error = JsonError;

    fn try_from(value: Value) -> JsonResult<Self> {
        entry_from_value(value).ok_or(JsonError::NullDocument)
    }
}

/// The map view of objects is used, so duplicate keys collapse last-wins.
impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Boolean(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(n.clone()),
            Json::String(s) => Value::String(s.clone()),
            Json::Object(object) => Value::Object(
                object
                    .entries()
                    .map(|(key, value)| (key.to_owned(), value_from_entry(value)))
                    .collect::<Map<String, Value>>(),
            ),
            Json::Array(array) => Value::Array(array.iter().map(value_from_entry).collect()),
        }
    }
}

impl From<Json> for Value {
    fn from(json: Json) -> Self {
        Value::from(&json)
    }
}
