// Copyright 2025 Cowboy AI, LLC.

//! Payload types a fetch can request

use serde_json::Number;

use super::{Json, JsonArray, JsonKind, JsonObject};

/// A payload type tied to exactly one [`JsonKind`].
pub trait JsonShape: Sized {
    /// The tag this payload lives under
    const KIND: JsonKind;

    /// The payload, when `json` carries this tag
    fn from_json(json: &Json) -> Option<Self>;
}

impl JsonShape for bool {
    const KIND: JsonKind = JsonKind::Boolean;

    fn from_json(json: &Json) -> Option<Self> {
        json.as_bool()
    }
}

impl JsonShape for Number {
    const KIND: JsonKind = JsonKind::Number;

    fn from_json(json: &Json) -> Option<Self> {
        json.as_number().cloned()
    }
}

impl JsonShape for String {
    const KIND: JsonKind = JsonKind::String;

    fn from_json(json: &Json) -> Option<Self> {
        json.as_str().map(str::to_owned)
    }
}

impl JsonShape for JsonObject {
    const KIND: JsonKind = JsonKind::Object;

    fn from_json(json: &Json) -> Option<Self> {
        json.as_object().cloned()
    }
}

impl JsonShape for JsonArray {
    const KIND: JsonKind = JsonKind::Array;

    fn from_json(json: &Json) -> Option<Self> {
        json.as_array().cloned()
    }
}
