// Copyright 2025 Cowboy AI, LLC.

//! Reusable lookup recipes

use std::fmt;
use std::sync::Arc;

use serde_json::Number;

use crate::json::{FailedLookup, Json, JsonArray, JsonInterpretationFailure, JsonObject, JsonShape};
use crate::outcome::Outcome;

// Type alias for the shared recipe function
type Recipe<F, T> = dyn Fn(&JsonObject, &str) -> Outcome<F, T> + Send + Sync;

/// How to read one field out of an object, given the field's key.
///
/// A binding holds no key and no object: both are supplied when the binding is
/// evaluated, which is what lets a field take its key from its own name.
pub struct Binding<F, T> {
    recipe: Arc<Recipe<F, T>>,
}

impl<F, T> Clone for Binding<F, T> {
    fn clone(&self) -> Self {
        Self {
            recipe: Arc::clone(&self.recipe),
        }
    }
}

impl<F, T> fmt::Debug for Binding<F, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

impl<F: 'static, T: 'static> Binding<F, T> {
    /// Wrap a recipe
    pub fn new<R>(recipe: R) -> Self
    where
        R: Fn(&JsonObject, &str) -> Outcome<F, T> + Send + Sync + 'static,
    {
        Self {
            recipe: Arc::new(recipe),
        }
    }

    /// Run the recipe against `source` for `key`
    pub fn evaluate(&self, source: &JsonObject, key: &str) -> Outcome<F, T> {
        (self.recipe)(source, key)
    }

    /// Transform a successful read
    pub fn map<U, G>(self, f: G) -> Binding<F, U>
    where
        U: 'static,
        G: Fn(T) -> U + Send + Sync + 'static,
    {
        Binding::new(move |source, key| self.evaluate(source, key).map(&f))
    }

    /// Widen the failure type
    pub fn widen<F2>(self) -> Binding<F2, T>
    where
        F: Into<F2>,
        F2: 'static,
    {
        Binding::new(move |source, key| self.evaluate(source, key).map_failure(Into::into))
    }

    /// Interpret a successful read with a fallible transform.
    ///
    /// A rejected payload becomes `FailedParse`.
    pub fn parse<U, E, G>(self, f: G) -> Binding<JsonInterpretationFailure, U>
    where
        F: Into<JsonInterpretationFailure>,
        T: Into<Json>,
        U: 'static,
        E: fmt::Display,
        G: Fn(&T) -> Result<U, E> + Send + Sync + 'static,
    {
        Binding::new(move |source, key| {
            self.evaluate(source, key)
                .map_failure(Into::<JsonInterpretationFailure>::into)
                .flat_map(|payload| match f(&payload) {
                    Ok(value) => Outcome::success(value),
                    Err(reason) => Outcome::failure(JsonInterpretationFailure::failed_parse(
                        key, payload, reason,
                    )),
                })
        })
    }
}

impl<T: JsonShape + 'static> Binding<FailedLookup, T> {
    /// Fetch the field as shape `T`
    pub fn fetch() -> Self {
        Binding::new(|source, key| source.fetch::<T>(key))
    }
}

/// Constructors mirroring the [`JsonObject`] accessors, minus the key.
pub mod bind {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    /// A boolean field
    pub fn boolean() -> Binding<FailedLookup, bool> {
        Binding::fetch()
    }

    /// A number field
    pub fn number() -> Binding<FailedLookup, Number> {
        Binding::fetch()
    }

    /// A string field
    pub fn string() -> Binding<FailedLookup, String> {
        Binding::fetch()
    }

    /// A nested object field
    pub fn object() -> Binding<FailedLookup, JsonObject> {
        Binding::fetch()
    }

    /// An array field
    pub fn array() -> Binding<FailedLookup, JsonArray> {
        Binding::fetch()
    }

    /// A string field read through `f`
    pub fn parse_string<U, E, G>(f: G) -> Binding<JsonInterpretationFailure, U>
    where
        U: 'static,
        E: fmt::Display,
        G: Fn(&str) -> Result<U, E> + Send + Sync + 'static,
    {
        string().parse(move |text: &String| f(text.as_str()))
    }

    /// A number field read through `f`
    pub fn parse_number<U, E, G>(f: G) -> Binding<JsonInterpretationFailure, U>
    where
        U: 'static,
        E: fmt::Display,
        G: Fn(&Number) -> Result<U, E> + Send + Sync + 'static,
    {
        number().parse(f)
    }

    /// A boolean field read through `f`
    pub fn parse_boolean<U, E, G>(f: G) -> Binding<JsonInterpretationFailure, U>
    where
        U: 'static,
        E: fmt::Display,
        G: Fn(bool) -> Result<U, E> + Send + Sync + 'static,
    {
        boolean().parse(move |flag: &bool| f(*flag))
    }

    /// A nested object field read through `f`
    pub fn parse_object<U, E, G>(f: G) -> Binding<JsonInterpretationFailure, U>
    where
        U: 'static,
        E: fmt::Display,
        G: Fn(&JsonObject) -> Result<U, E> + Send + Sync + 'static,
    {
        object().parse(f)
    }

    /// An array field read through `f`
    pub fn parse_array<U, E, G>(f: G) -> Binding<JsonInterpretationFailure, U>
    where
        U: 'static,
        E: fmt::Display,
        G: Fn(&JsonArray) -> Result<U, E> + Send + Sync + 'static,
    {
        array().parse(f)
    }

    /// A nested object handed to a consumer type
    pub fn object_as<U, G>(f: G) -> Binding<FailedLookup, U>
    where
        U: 'static,
        G: Fn(JsonObject) -> U + Send + Sync + 'static,
    {
        object().map(f)
    }

    /// An array whose object elements are handed to a consumer type.
    ///
    /// Null and non-object elements read as `None`.
    pub fn array_of<U, G>(f: G) -> Binding<FailedLookup, Vec<Option<U>>>
    where
        U: 'static,
        G: Fn(JsonObject) -> U + Send + Sync + 'static,
    {
        array().map(move |elements| elements.map_objects(&f))
    }

    /// A string field holding a UUID
    pub fn uuid() -> Binding<JsonInterpretationFailure, Uuid> {
        parse_string(Uuid::parse_str)
    }

    /// A string field holding a `YYYY-MM-DD` date
    pub fn date() -> Binding<JsonInterpretationFailure, NaiveDate> {
        parse_string(|text| text.parse::<NaiveDate>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{json_array, json_object, NULL};

    #[test]
    fn test_binding_takes_key_at_evaluation() {
        let doc = json_object! { "first" => "a", "second" => "b" };
        let text = bind::string();

        assert_eq!(text.evaluate(&doc, "first"), Outcome::success("a".to_string()));
        assert_eq!(text.evaluate(&doc, "second"), Outcome::success("b".to_string()));
    }

    #[test]
    fn test_map_and_widen() {
        let doc = json_object! { "name" => "Scamper" };
        let length = bind::string().map(|s| s.len());
        assert_eq!(length.evaluate(&doc, "name"), Outcome::success(7));

        let widened: Binding<JsonInterpretationFailure, usize> = length.widen();
        assert_eq!(
            widened.evaluate(&doc, "other"),
            Outcome::failure(FailedLookup::missing_key("other").into())
        );
    }

    #[test]
    fn test_parse_reports_payload() {
        let doc = json_object! { "count" => "many" };
        let count = bind::parse_string(|s| s.parse::<u32>());

        match count.evaluate(&doc, "count") {
            Outcome::Left(JsonInterpretationFailure::FailedParse { key, actual, .. }) => {
                assert_eq!(key, "count");
                assert_eq!(actual, Json::from("many"));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }
    }

    #[test]
    fn test_array_of_maps_objects() {
        let doc = json_object! {
            "items" => json_array![json_object! { "n" => 1 }, NULL, 5],
        };
        let items = bind::array_of(|object| object.number("n").or_none());

        let read = items.evaluate(&doc, "items").right().unwrap();
        assert_eq!(read, vec![Some(Some(Number::from(1))), None, None]);
    }

    #[test]
    fn test_parse_number_and_boolean() {
        let doc = json_object! { "age" => 3, "ok" => true };

        let age = bind::parse_number(|n| n.as_u64().ok_or("fractional"));
        assert_eq!(age.evaluate(&doc, "age"), Outcome::success(3));

        let label = bind::parse_boolean(|b| Ok::<_, String>(if b { "yes" } else { "no" }));
        assert_eq!(label.evaluate(&doc, "ok"), Outcome::success("yes"));
    }
}
