// Copyright 2025 Cowboy AI, LLC.

//! JSON arrays

use std::fmt;
use std::sync::Arc;

use super::value::write_entry;
use super::{IntoJsonEntry, Json, JsonObject};

/// An immutable, ordered sequence of optional JSON values.
///
/// Cloning is O(1); copies share their elements by reference.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonArray {
    items: Arc<Vec<Option<Json>>>,
}

impl JsonArray {
    /// Build an array from raw elements, `None` being the JSON null.
    pub fn from_items(items: Vec<Option<Json>>) -> Self {
        Self {
            items: Arc::new(items),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`: `None` when out of range, `Some(None)` for null.
    pub fn get(&self, index: usize) -> Option<Option<&Json>> {
        self.items.get(index).map(Option::as_ref)
    }

    /// Elements in order
    pub fn iter(&self) -> impl Iterator<Item = Option<&Json>> {
        self.items.iter().map(Option::as_ref)
    }

    /// Map every object element with `f`; nulls and other shapes map to `None`.
    pub fn map_objects<T, F>(&self, f: F) -> Vec<Option<T>>
    where
        F: Fn(JsonObject) -> T,
    {
        self.iter()
            .map(|element| match element {
                Some(Json::Object(object)) => Some(f(object.clone())),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Debug for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (position, element) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write_entry(f, element)?;
        }
        f.write_str("]")
    }
}

impl<V: IntoJsonEntry> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        JsonArray::from_items(iter.into_iter().map(IntoJsonEntry::into_json_entry).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{json_array, json_object, NULL};
    use serde_json::Number;

    #[test]
    fn test_get_distinguishes_null_from_out_of_range() {
        let array = json_array![1, NULL];
        assert_eq!(array.get(0), Some(Some(&Json::from(1))));
        assert_eq!(array.get(1), Some(None));
        assert_eq!(array.get(2), None);
    }

    #[test]
    fn test_map_objects_skips_non_objects() {
        let array = json_array![
            json_object! { "n" => 1 },
            "not an object",
            NULL,
            json_object! { "n" => 2 },
        ];

        let mapped = array.map_objects(|object| object.number("n").or_none());
        assert_eq!(
            mapped,
            vec![
                Some(Some(Number::from(1))),
                None,
                None,
                Some(Some(Number::from(2))),
            ]
        );
    }

    #[test]
    fn test_collect_from_native_values() {
        let array: JsonArray = vec![Some("a"), None, Some("c")].into_iter().collect();
        assert_eq!(array, json_array!["a", NULL, "c"]);
        assert_eq!(array.len(), 3);
    }
}
