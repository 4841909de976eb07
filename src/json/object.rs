// Copyright 2025 Cowboy AI, LLC.

//! JSON objects and the typed fetch protocol
//!
//! An object is an ordered sequence of `(key, Option<Json>)` entries. Its map
//! view resolves duplicate keys "last wins" while keeping each key at the
//! position of its first occurrence.
//!
//! Every typed accessor funnels through [`JsonObject::fetch`]:
//!
//! 1. key absent → `MissingKey`
//! 2. key bound to null → `NullValue`
//! 3. tag matches → `Success`
//! 4. otherwise → `UnexpectedType`

use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Number;

use super::failure::{FailedLookup, JsonInterpretationFailure};
use super::shape::JsonShape;
use super::value::{write_entry, write_quoted};
use super::{IntoJsonEntry, Json, JsonArray};
use crate::outcome::Outcome;

type Entry = (String, Option<Json>);

/// An immutable JSON object.
///
/// Cloning is O(1); copies share their entries by reference.
#[derive(Clone, Default)]
pub struct JsonObject {
    entries: Arc<Vec<Entry>>,
    index: Arc<IndexMap<String, usize>>,
}

impl JsonObject {
    /// Build an object from raw entries, `None` being the JSON null.
    pub fn from_entries(entries: Vec<(String, Option<Json>)>) -> Self {
        let mut index = IndexMap::with_capacity(entries.len());
        for (position, (key, _)) in entries.iter().enumerate() {
            index.insert(key.clone(), position);
        }
        Self {
            entries: Arc::new(entries),
            index: Arc::new(index),
        }
    }

    /// Build an object from key/value pairs.
    pub fn new<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: IntoJsonEntry,
    {
        pairs.into_iter().collect()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when the key is present, even if bound to null
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// True when some key maps to `value` in the map view
    pub fn contains_value(&self, value: Option<&Json>) -> bool {
        self.values().any(|candidate| candidate == value)
    }

    /// The value for `key`, `None` when absent or null.
    ///
    /// Use [`contains_key`](Self::contains_key) or [`fetch`](Self::fetch) to
    /// tell the two apart.
    pub fn get(&self, key: &str) -> Option<&Json> {
        self.lookup(key).flatten()
    }

    fn lookup(&self, key: &str) -> Option<Option<&Json>> {
        self.index
            .get(key)
            .map(|&position| self.entries[position].1.as_ref())
    }

    /// Distinct keys in first-occurrence order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Values of the map view, in key order
    pub fn values(&self) -> impl Iterator<Item = Option<&Json>> {
        self.index
            .values()
            .map(|&position| self.entries[position].1.as_ref())
    }

    /// Entries of the map view, in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, Option<&Json>)> {
        self.index.iter().map(|(key, &position)| {
            (key.as_str(), self.entries[position].1.as_ref())
        })
    }

    /// The stored entry sequence, duplicates included
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Json>)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// Fetch `key` as shape `T`.
    pub fn fetch<T: JsonShape>(&self, key: &str) -> Outcome<FailedLookup, T> {
        match self.lookup(key) {
            None => Outcome::failure(FailedLookup::missing_key(key)),
            Some(None) => Outcome::failure(FailedLookup::null_value(key)),
            Some(Some(candidate)) => match T::from_json(candidate) {
                Some(value) => Outcome::success(value),
                None => Outcome::failure(FailedLookup::unexpected_type(
                    key,
                    T::KIND,
                    candidate.clone(),
                )),
            },
        }
    }

    /// Fetch a boolean
    pub fn boolean(&self, key: &str) -> Outcome<FailedLookup, bool> {
        self.fetch(key)
    }

    /// Fetch a number
    pub fn number(&self, key: &str) -> Outcome<FailedLookup, Number> {
        self.fetch(key)
    }

    /// Fetch a string
    pub fn string(&self, key: &str) -> Outcome<FailedLookup, String> {
        self.fetch(key)
    }

    /// Fetch a nested object
    pub fn obj(&self, key: &str) -> Outcome<FailedLookup, JsonObject> {
        self.fetch(key)
    }

    /// Fetch an array
    pub fn array(&self, key: &str) -> Outcome<FailedLookup, JsonArray> {
        self.fetch(key)
    }

    /// Fetch `key` as shape `T` and interpret the payload with `f`.
    ///
    /// A payload `f` rejects becomes `FailedParse`, carrying the payload.
    pub fn parse<T, U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        T: JsonShape + Into<Json>,
        G: FnOnce(&T) -> Result<U, E>,
        E: fmt::Display,
    {
        self.fetch::<T>(key)
            .map_failure(JsonInterpretationFailure::from)
            .flat_map(|payload| match f(&payload) {
                Ok(value) => Outcome::success(value),
                Err(reason) => {
                    Outcome::failure(JsonInterpretationFailure::failed_parse(key, payload, reason))
                }
            })
    }

    /// Fetch a string and interpret it
    pub fn parse_string<U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        G: FnOnce(&str) -> Result<U, E>,
        E: fmt::Display,
    {
        self.parse(key, |text: &String| f(text.as_str()))
    }

    /// Fetch a number and interpret it
    pub fn parse_number<U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        G: FnOnce(&Number) -> Result<U, E>,
        E: fmt::Display,
    {
        self.parse::<Number, _, _, _>(key, f)
    }

    /// Fetch a boolean and interpret it
    pub fn parse_boolean<U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        G: FnOnce(bool) -> Result<U, E>,
        E: fmt::Display,
    {
        self.parse(key, |flag: &bool| f(*flag))
    }

    /// Fetch a nested object and interpret it
    pub fn parse_object<U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        G: FnOnce(&JsonObject) -> Result<U, E>,
        E: fmt::Display,
    {
        self.parse::<JsonObject, _, _, _>(key, f)
    }

    /// Fetch an array and interpret it
    pub fn parse_array<U, E, G>(&self, key: &str, f: G) -> Outcome<JsonInterpretationFailure, U>
    where
        G: FnOnce(&JsonArray) -> Result<U, E>,
        E: fmt::Display,
    {
        self.parse::<JsonArray, _, _, _>(key, f)
    }

    /// A new object with `replacements` substituted.
    ///
    /// A replaced key keeps the position of its first occurrence and any later
    /// duplicates are dropped. Keys not present are appended in the order
    /// given. `self` is left untouched.
    pub fn replace<K, V>(&self, replacements: impl IntoIterator<Item = (K, V)>) -> JsonObject
    where
        K: Into<String>,
        V: IntoJsonEntry,
    {
        let mut pending: IndexMap<String, Option<Json>> = replacements
            .into_iter()
            .map(|(key, value)| (key.into(), value.into_json_entry()))
            .collect();
        let mut replaced = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len() + pending.len());

        for (key, value) in self.entries.iter() {
            if replaced.contains(key) {
                continue;
            }
            match pending.shift_remove(key) {
                Some(substitute) => {
                    replaced.insert(key.clone());
                    entries.push((key.clone(), substitute));
                }
                None => entries.push((key.clone(), value.clone())),
            }
        }
        entries.extend(pending);

        JsonObject::from_entries(entries)
    }

    /// A new object with every entry for `key` removed.
    pub fn without(&self, key: &str) -> JsonObject {
        JsonObject::from_entries(
            self.entries
                .iter()
                .filter(|(candidate, _)| candidate != key)
                .cloned()
                .collect(),
        )
    }
}

/// Equality compares the stored entry sequence, not the map view.
///
/// `{"a":1,"a":3}` and `{"a":3}` read the same through every accessor and
/// convert to the same `serde_json::Value`, yet are not equal. Hashing
/// follows the same rule.
impl PartialEq for JsonObject {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries == other.entries
    }
}

impl Eq for JsonObject {}

impl Hash for JsonObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entries.hash(state);
    }
}

impl fmt::Debug for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (position, (key, value)) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write_quoted(f, key)?;
            f.write_str(":")?;
            write_entry(f, value)?;
        }
        f.write_str("}")
    }
}

impl<K, V> FromIterator<(K, V)> for JsonObject
where
    K: Into<String>,
    V: IntoJsonEntry,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonObject::from_entries(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into_json_entry()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{json_array, json_object, JsonKind, NULL};
    use pretty_assertions::assert_eq;

    fn sample() -> JsonObject {
        json_object! {
            "name" => "Scamper",
            "age" => 4,
            "vaccinated" => true,
            "owner" => NULL,
            "tags" => json_array!["small"],
            "address" => json_object! { "city" => "Austin" },
        }
    }

    #[test]
    fn test_fetch_success_per_shape() {
        let doc = sample();
        assert_eq!(doc.string("name"), Outcome::success("Scamper".to_string()));
        assert_eq!(doc.number("age"), Outcome::success(Number::from(4)));
        assert_eq!(doc.boolean("vaccinated"), Outcome::success(true));
        assert_eq!(doc.array("tags"), Outcome::success(json_array!["small"]));
        assert_eq!(
            doc.obj("address"),
            Outcome::success(json_object! { "city" => "Austin" })
        );
    }

    #[test]
    fn test_fetch_failure_ordering() {
        let doc = sample();
        assert_eq!(
            doc.string("missing"),
            Outcome::failure(FailedLookup::missing_key("missing"))
        );
        assert_eq!(
            doc.number("owner"),
            Outcome::failure(FailedLookup::null_value("owner"))
        );
        assert_eq!(
            doc.boolean("name"),
            Outcome::failure(FailedLookup::unexpected_type(
                "name",
                JsonKind::Boolean,
                Json::from("Scamper")
            ))
        );
    }

    #[test]
    fn test_duplicate_keys_last_wins_first_position() {
        let doc = JsonObject::new(vec![("a", 1), ("b", 2), ("a", 3)]);

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(doc.number("a"), Outcome::success(Number::from(3)));
        assert_eq!(doc.iter().count(), 3);
        assert!(doc.contains_value(Some(&Json::from(3))));
        assert!(!doc.contains_value(Some(&Json::from(1))));
    }

    #[test]
    fn test_get_hides_null_but_contains_key_does_not() {
        let doc = sample();
        assert!(doc.get("owner").is_none());
        assert!(doc.contains_key("owner"));
        assert!(!doc.contains_key("nobody"));
        assert_eq!(doc.get("name"), Some(&Json::from("Scamper")));
    }

    #[test]
    fn test_parse_distinguishes_lookup_from_interpretation() {
        let doc = sample();
        let parsed = doc.parse_number("age", |n| n.as_u64().ok_or("not an integer"));
        assert_eq!(parsed, Outcome::success(4));

        let rejected = doc.parse_string("name", |s| s.parse::<u32>());
        match rejected {
            Outcome::Left(JsonInterpretationFailure::FailedParse { key, actual, .. }) => {
                assert_eq!(key, "name");
                assert_eq!(actual, Json::from("Scamper"));
            }
            other => panic!("expected a parse failure, got {other:?}"),
        }

        let missing = doc.parse_string("nope", |s| s.parse::<u32>());
        assert_eq!(
            missing,
            Outcome::failure(FailedLookup::missing_key("nope").into())
        );
    }

    #[test]
    fn test_replace_is_copy_on_write() {
        let original = JsonObject::new(vec![("a", 1), ("b", 2), ("a", 3)]);
        let updated = original.replace(vec![("a", Json::from(10)), ("c", Json::from(30))]);

        assert_eq!(
            updated.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["a", "b", "c"]
        );
        assert_eq!(updated.number("a"), Outcome::success(Number::from(10)));
        assert_eq!(updated.number("c"), Outcome::success(Number::from(30)));

        assert_eq!(original.number("a"), Outcome::success(Number::from(3)));
        assert!(!original.contains_key("c"));
    }

    #[test]
    fn test_replace_shares_untouched_children() {
        let child = json_object! { "deep" => true };
        let parent = json_object! { "child" => child.clone(), "n" => 1 };
        let updated = parent.replace([("n", 2)]);

        let shared = updated.obj("child").right().unwrap();
        assert!(Arc::ptr_eq(&shared.entries, &child.entries));
    }

    #[test]
    fn test_without_removes_all_occurrences() {
        let doc = JsonObject::new(vec![("a", 1), ("b", 2), ("a", 3)]);
        let trimmed = doc.without("a");
        assert_eq!(trimmed.keys().collect::<Vec<_>>(), vec!["b"]);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_equality_sees_shadowed_duplicates() {
        let with_duplicate = JsonObject::new(vec![("a", 1), ("a", 3)]);
        let collapsed = JsonObject::new(vec![("a", 3)]);

        assert_eq!(with_duplicate.number("a"), collapsed.number("a"));
        assert_eq!(
            serde_json::Value::from(Json::from(with_duplicate.clone())),
            serde_json::Value::from(Json::from(collapsed.clone()))
        );
        assert_ne!(with_duplicate, collapsed);
        assert_eq!(with_duplicate.replace([("a", 3)]), collapsed);
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(sample(), sample());
        assert_ne!(sample(), sample().without("age"));
    }
}
