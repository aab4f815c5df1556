//! Reduces every payload shape the backend has been seen to send to one
//! canonical type per resource. A list may arrive bare or as
//! `{ "articles": [...] }`; a single article bare or as `{ "article": {...} }`.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::common::FetchError;
use crate::models::{Article, HistoryEvent};

fn decode<T: DeserializeOwned>(resource: &'static str, value: Value) -> Result<T, FetchError> {
    serde_json::from_value(value).map_err(|e| FetchError::malformed(resource, e.to_string()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub fn articles_from_value(value: Value) -> Result<Vec<Article>, FetchError> {
    match value {
        Value::Array(_) => decode("article list", value),
        Value::Object(mut map) => match map.remove("articles") {
            Some(list @ Value::Array(_)) => decode("article list", list),
            Some(Value::Null) | None => Err(FetchError::malformed(
                "article list",
                "object without an `articles` array",
            )),
            Some(other) => Err(FetchError::malformed(
                "article list",
                format!("`articles` is a {}", kind(&other)),
            )),
        },
        Value::Null => Err(FetchError::Missing("Article list")),
        other => Err(FetchError::malformed(
            "article list",
            format!("expected array or object, got {}", kind(&other)),
        )),
    }
}

pub fn article_from_value(value: Value) -> Result<Article, FetchError> {
    match value {
        Value::Object(mut map) => match map.remove("article") {
            Some(Value::Null) => Err(FetchError::Missing("Article")),
            Some(inner @ Value::Object(_)) => decode("article", inner),
            Some(other) => Err(FetchError::malformed(
                "article",
                format!("`article` is a {}", kind(&other)),
            )),
            None => decode("article", Value::Object(map)),
        },
        Value::Null => Err(FetchError::Missing("Article")),
        other => Err(FetchError::malformed(
            "article",
            format!("expected object, got {}", kind(&other)),
        )),
    }
}

pub fn history_from_value(value: Value) -> Result<HistoryEvent, FetchError> {
    match value {
        Value::Object(_) => decode("history event", value),
        Value::Null => Err(FetchError::Missing("History event")),
        other => Err(FetchError::malformed(
            "history event",
            format!("expected object, got {}", kind(&other)),
        )),
    }
}
