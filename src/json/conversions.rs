// Copyright 2025 Cowboy AI, LLC.

//! Identifiers and calendar values carried as JSON strings

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::builders::entry_via_from;
use super::failure::JsonInterpretationFailure;
use super::{IntoJsonEntry, Json, JsonObject};
use crate::outcome::Outcome;

impl From<Uuid> for Json {
    fn from(value: Uuid) -> Self {
        Json::String(value.hyphenated().to_string())
    }
}

/// ISO 8601 calendar date, `YYYY-MM-DD`
impl From<NaiveDate> for Json {
    fn from(value: NaiveDate) -> Self {
        Json::String(value.format("%Y-%m-%d").to_string())
    }
}

/// RFC 3339 timestamp
impl From<DateTime<Utc>> for Json {
    fn from(value: DateTime<Utc>) -> Self {
        Json::String(value.to_rfc3339())
    }
}

entry_via_from!(Uuid, NaiveDate, DateTime<Utc>);

impl JsonObject {
    /// Fetch a string and read it as a UUID
    pub fn uuid(&self, key: &str) -> Outcome<JsonInterpretationFailure, Uuid> {
        self.parse_string(key, Uuid::parse_str)
    }

    /// Fetch a string and read it as a `YYYY-MM-DD` date
    pub fn date(&self, key: &str) -> Outcome<JsonInterpretationFailure, NaiveDate> {
        self.parse_string(key, NaiveDate::from_str)
    }

    /// Fetch a string and read it as an RFC 3339 timestamp
    pub fn timestamp(&self, key: &str) -> Outcome<JsonInterpretationFailure, DateTime<Utc>> {
        self.parse_string(key, |text| {
            DateTime::parse_from_rfc3339(text).map(|parsed| parsed.with_timezone(&Utc))
        })
    }
}
