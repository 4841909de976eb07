// Copyright 2025 Cowboy AI, LLC.

use cim_json::{
    json_array, json_object, FailedLookup, Json, JsonInterpretationFailure, JsonKind, JsonObject,
    Number, Outcome, NULL,
};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn document() -> JsonObject {
    json_object! {
        "flag" => true,
        "count" => 3,
        "name" => "Scamper",
        "owner" => json_object! { "name" => "Jo" },
        "toys" => json_array!["ball", NULL],
        "nothing" => NULL,
    }
}

/// Which accessor to run, and what it found
fn fetch_kind(object: &JsonObject, kind: JsonKind, key: &str) -> Outcome<FailedLookup, Json> {
    match kind {
        JsonKind::Boolean => object.boolean(key).map(Json::from),
        JsonKind::Number => object.number(key).map(Json::from),
        JsonKind::String => object.string(key).map(Json::from),
        JsonKind::Object => object.obj(key).map(Json::from),
        JsonKind::Array => object.array(key).map(Json::from),
    }
}

#[test_case(JsonKind::Boolean ; "boolean")]
#[test_case(JsonKind::Number ; "number")]
#[test_case(JsonKind::String ; "string")]
#[test_case(JsonKind::Object ; "object")]
#[test_case(JsonKind::Array ; "array")]
fn absent_key_is_missing_for_every_shape(kind: JsonKind) {
    assert_eq!(
        fetch_kind(&document(), kind, "age"),
        Outcome::failure(FailedLookup::missing_key("age"))
    );
}

#[test_case(JsonKind::Boolean ; "boolean")]
#[test_case(JsonKind::Number ; "number")]
#[test_case(JsonKind::String ; "string")]
#[test_case(JsonKind::Object ; "object")]
#[test_case(JsonKind::Array ; "array")]
fn null_is_null_value_for_every_shape(kind: JsonKind) {
    assert_eq!(
        fetch_kind(&document(), kind, "nothing"),
        Outcome::failure(FailedLookup::null_value("nothing"))
    );
}

#[test_case("flag", JsonKind::Boolean ; "boolean")]
#[test_case("count", JsonKind::Number ; "number")]
#[test_case("name", JsonKind::String ; "string")]
#[test_case("owner", JsonKind::Object ; "object")]
#[test_case("toys", JsonKind::Array ; "array")]
fn matching_shape_succeeds(key: &str, kind: JsonKind) {
    let doc = document();
    let found = fetch_kind(&doc, kind, key).or_none();
    assert_eq!(found.as_ref(), doc.get(key));
}

#[test_case("name", JsonKind::Boolean ; "string read as boolean")]
#[test_case("flag", JsonKind::Number ; "boolean read as number")]
#[test_case("count", JsonKind::String ; "number read as string")]
#[test_case("toys", JsonKind::Object ; "array read as object")]
#[test_case("owner", JsonKind::Array ; "object read as array")]
fn wrong_shape_reports_what_was_found(key: &str, kind: JsonKind) {
    let doc = document();
    let actual = doc.get(key).cloned().unwrap();
    assert_eq!(
        fetch_kind(&doc, kind, key),
        Outcome::failure(FailedLookup::unexpected_type(key, kind, actual))
    );
}

#[test]
fn duplicate_keys_resolve_last_wins_at_first_position() {
    let doc = JsonObject::from_entries(vec![
        ("a".to_string(), Some(Json::from(1))),
        ("b".to_string(), Some(Json::from(2))),
        ("a".to_string(), Some(Json::from("later"))),
    ]);

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.string("a"), Outcome::success("later".to_string()));
    assert_eq!(doc.iter().count(), 3);
}

#[test]
fn duplicate_null_shadows_earlier_value() {
    let doc = JsonObject::from_entries(vec![
        ("a".to_string(), Some(Json::from(1))),
        ("a".to_string(), None),
    ]);

    assert_eq!(doc.number("a"), Outcome::failure(FailedLookup::null_value("a")));
}

#[test]
fn nested_lookups_short_circuit() {
    let doc = document();

    let owner_name = doc.obj("owner").flat_map(|owner| owner.string("name"));
    assert_eq!(owner_name, Outcome::success("Jo".to_string()));

    let vet_name = doc.obj("vet").flat_map(|vet| vet.string("name"));
    assert_eq!(vet_name, Outcome::failure(FailedLookup::missing_key("vet")));
}

#[test]
fn parse_failures_keep_the_payload() {
    let doc = json_object! { "born" => "someday", "id" => 7 };

    match doc.date("born") {
        Outcome::Left(JsonInterpretationFailure::FailedParse { key, actual, .. }) => {
            assert_eq!(key, "born");
            assert_eq!(actual, Json::from("someday"));
        }
        other => panic!("expected a parse failure, got {other:?}"),
    }

    assert_eq!(
        doc.uuid("id"),
        Outcome::failure(
            FailedLookup::unexpected_type("id", JsonKind::String, Json::from(7)).into()
        )
    );
}

#[test]
fn numbers_keep_their_representation() {
    let doc = json_object! {
        "small" => -4,
        "large" => u64::MAX,
        "fraction" => Json::try_from(0.25).unwrap(),
    };

    assert_eq!(doc.number("small"), Outcome::success(Number::from(-4)));
    assert_eq!(doc.number("large").map(|n| n.as_u64()), Outcome::success(Some(u64::MAX)));
    assert_eq!(doc.number("fraction").map(|n| n.as_f64()), Outcome::success(Some(0.25)));
}

#[test]
fn replace_copies_and_leaves_the_source_alone() {
    let doc = json_object! { "name" => "Scamper", "age" => 3 };
    let renamed = doc.replace([("name", "Biscuit")]);

    assert_eq!(doc.string("name"), Outcome::success("Scamper".to_string()));
    assert_eq!(renamed.string("name"), Outcome::success("Biscuit".to_string()));
    assert_eq!(renamed.keys().collect::<Vec<_>>(), vec!["name", "age"]);

    let extended = doc.replace([("owner", NULL)]);
    assert_eq!(extended.keys().collect::<Vec<_>>(), vec!["name", "age", "owner"]);
    assert_eq!(extended.boolean("owner"), Outcome::failure(FailedLookup::null_value("owner")));
}

#[test]
fn serde_json_interop_preserves_shape() {
    let value = serde_json::json!({
        "name": "Scamper",
        "tags": ["a", null],
        "owner": null,
    });

    let json = Json::try_from(value.clone()).unwrap();
    let doc = json.as_object().cloned().unwrap();
    assert_eq!(doc.boolean("owner"), Outcome::failure(FailedLookup::null_value("owner")));
    assert_eq!(serde_json::Value::from(&json), value);

    assert!(Json::try_from(serde_json::Value::Null).is_err());
}
