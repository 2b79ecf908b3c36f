//! String storage and query endpoints / 字符串存储与查询接口

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::state::AppState;
use stringlab_backend::error::ServiceError;
use stringlab_backend::models::{FilterConditions, StringRecord};
use stringlab_backend::query;

#[derive(Debug, Deserialize)]
pub struct CreateStringRequest {
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct ListStringsQuery {
    pub is_palindrome: Option<bool>,
    pub min_length: Option<i64>,
    pub max_length: Option<i64>,
    pub word_count: Option<i64>,
    pub contains_character: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageQuery {
    pub query: String,
}

/// POST /strings - store a string with its derived properties
pub async fn create_string(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateStringRequest>,
) -> Result<(StatusCode, Json<StringRecord>), ServiceError> {
    if req.value.is_empty() {
        return Err(ServiceError::Validation(
            "Invalid data type for value field".to_string(),
        ));
    }

    let record = state.store.insert(&req.value)?;
    tracing::debug!("Stored string {} ({} chars)", record.id, record.properties.length);
    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /strings/:value - look up a record by its raw value
pub async fn retrieve_string(
    State(state): State<Arc<AppState>>,
    Path(string_value): Path<String>,
) -> Result<Json<StringRecord>, ServiceError> {
    let record = state.store.get_by_value(&string_value)?;
    Ok(Json(record))
}

/// GET /strings - list records, optionally constrained by query parameters
pub async fn list_strings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListStringsQuery>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let invalid = || {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "detail": "Invalid query parameter values or types" })),
        )
    };

    if params.min_length.is_some_and(|v| v < 0)
        || params.max_length.is_some_and(|v| v < 0)
        || params.word_count.is_some_and(|v| v < 0)
    {
        return Err(invalid());
    }

    let contains_character = match &params.contains_character {
        Some(s) => {
            let mut chars = s.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => return Err(invalid()),
            }
        }
        None => None,
    };

    let conditions = FilterConditions {
        is_palindrome: params.is_palindrome,
        min_length: params.min_length,
        max_length: params.max_length,
        word_count: params.word_count,
        contains_character,
    };

    let filtered = state.store.list(&conditions);

    Ok(Json(json!({
        "data": filtered,
        "count": filtered.len(),
        "filters_applied": {
            "is_palindrome": params.is_palindrome,
            "min_length": params.min_length,
            "max_length": params.max_length,
            "word_count": params.word_count,
            "contains_character": params.contains_character,
        }
    })))
}

/// GET /strings/filter-by-natural-language - heuristic free-text filtering
pub async fn natural_language_filter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NaturalLanguageQuery>,
) -> Result<Json<Value>, ServiceError> {
    if params.query.trim().is_empty() {
        return Err(ServiceError::Interpretation);
    }

    let conditions = query::extract_filters(&params.query);
    if conditions.is_empty() {
        tracing::debug!("Query matched no known pattern: {:?}", params.query);
        return Err(ServiceError::Interpretation);
    }

    let filtered = state.store.list(&conditions);

    Ok(Json(json!({
        "data": filtered,
        "count": filtered.len(),
        "interpreted_query": {
            "original": params.query,
            "parsed_filters": conditions,
        }
    })))
}

/// DELETE /strings/:value - remove a record by its raw value
pub async fn remove_string(
    State(state): State<Arc<AppState>>,
    Path(string_value): Path<String>,
) -> Result<StatusCode, ServiceError> {
    state.store.delete_by_value(&string_value)?;
    tracing::debug!("Deleted string: {}", string_value);
    Ok(StatusCode::NO_CONTENT)
}
