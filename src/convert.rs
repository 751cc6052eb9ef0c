//! Conversion utilities between PostgreSQL rows, JSON, and tool output.
//!
//! Provides row-to-JSON decoding for query results, rendering of query
//! outcomes as MCP text content, and helpers for reading tool arguments.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value as JsonValue};
use sqlx::postgres::{PgColumn, PgRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};
use tracing::warn;
use uuid::Uuid;

use crate::db::QueryOutcome;
use crate::error::{McpError, Result};

/// Convert a row to a JSON object keyed by column name, in column order.
pub fn row_to_json(row: &PgRow) -> Map<String, JsonValue> {
    let mut obj = Map::new();
    for column in row.columns() {
        obj.insert(column.name().to_string(), column_to_json(row, column));
    }
    obj
}

/// Decode a single column to JSON based on its Postgres type.
///
/// NULL decodes to JSON null. Types without a mapping fall back to a text
/// decode, then to null with a warning.
fn column_to_json(row: &PgRow, column: &PgColumn) -> JsonValue {
    let idx = column.ordinal();

    let type_name = match row.try_get_raw(idx) {
        Ok(raw) if raw.is_null() => return JsonValue::Null,
        Ok(raw) => raw.type_info().name().to_string(),
        Err(_) => return JsonValue::Null,
    };

    match type_name.as_str() {
        "BOOL" => decode(row, idx, JsonValue::Bool),
        "INT2" => decode(row, idx, |v: i16| JsonValue::Number(v.into())),
        "INT4" => decode(row, idx, |v: i32| JsonValue::Number(v.into())),
        "INT8" => decode(row, idx, |v: i64| JsonValue::Number(v.into())),
        "FLOAT4" => decode(row, idx, |v: f32| float_to_json(v as f64)),
        "FLOAT8" => decode(row, idx, float_to_json),
        // Rendered as a string so precision survives the JSON round-trip
        "NUMERIC" => decode(row, idx, |v: sqlx::types::Decimal| {
            JsonValue::String(v.to_string())
        }),
        "TEXT" | "VARCHAR" | "CHAR" | "NAME" => decode(row, idx, JsonValue::String),
        "JSON" | "JSONB" => decode(row, idx, |v: JsonValue| v),
        "TIMESTAMPTZ" => decode(row, idx, |v: DateTime<Utc>| {
            JsonValue::String(v.to_rfc3339())
        }),
        "TIMESTAMP" => decode(row, idx, |v: NaiveDateTime| JsonValue::String(v.to_string())),
        "DATE" => decode(row, idx, |v: NaiveDate| JsonValue::String(v.to_string())),
        "TIME" => decode(row, idx, |v: NaiveTime| JsonValue::String(v.to_string())),
        "UUID" => decode(row, idx, |v: Uuid| JsonValue::String(v.to_string())),
        other => match row.try_get::<String, _>(idx) {
            Ok(v) => JsonValue::String(v),
            Err(_) => {
                warn!(column = column.name(), pg_type = other, "unhandled column type");
                JsonValue::Null
            }
        },
    }
}

fn decode<'r, T, F>(row: &'r PgRow, idx: usize, to_json: F) -> JsonValue
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
    F: FnOnce(T) -> JsonValue,
{
    row.try_get::<T, _>(idx)
        .map(to_json)
        .unwrap_or(JsonValue::Null)
}

fn float_to_json(v: f64) -> JsonValue {
    serde_json::Number::from_f64(v)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

/// Convert a query outcome to its JSON representation.
///
/// Reads become an array of row objects; writes become a single-entry
/// array carrying the affected-row count, so both paths render uniformly.
pub fn outcome_to_json(outcome: QueryOutcome) -> JsonValue {
    match outcome {
        QueryOutcome::Rows(rows) => {
            JsonValue::Array(rows.into_iter().map(JsonValue::Object).collect())
        }
        QueryOutcome::Affected(n) => {
            serde_json::json!([{ "affected_rows": n }])
        }
    }
}

/// Render a query outcome as tool content text.
pub fn outcome_to_text(outcome: QueryOutcome) -> Result<String> {
    Ok(serde_json::to_string(&outcome_to_json(outcome))?)
}

/// Helper to get a required string argument from JSON arguments.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| McpError::MissingArg(name.to_string()))
}
