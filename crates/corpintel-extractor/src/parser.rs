//! Parse generation replies into validated records

use crate::error::IntelError;
use crate::types::{CompetitorRecord, SubsidiaryRecord};
use corpintel_domain::NOT_AVAILABLE;
use serde_json::{Map, Value};
use tracing::warn;

/// Keys every competitor row must carry
pub const COMPETITOR_KEYS: &[&str] = &["rank", "company_name", "ticker", "reason"];

/// Keys every subsidiary row must carry
pub const SUBSIDIARY_KEYS: &[&str] = &["company_name", "ticker", "details"];

/// Parse a reply as a JSON array of objects carrying `required_keys`
///
/// Elements that are not objects, or lack any required key, are dropped.
/// Order of the surviving elements is preserved.
pub fn parse_list(
    reply: &str,
    required_keys: &[&str],
) -> Result<Vec<Map<String, Value>>, IntelError> {
    let items = parse_array(reply)?;

    let mut rows = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(obj) => {
                if let Some(missing) = required_keys.iter().find(|k| !obj.contains_key(**k)) {
                    warn!("Dropping row {}: missing key '{}'", idx, missing);
                    continue;
                }
                rows.push(obj);
            }
            other => warn!("Dropping row {}: not an object ({})", idx, type_name(&other)),
        }
    }

    Ok(rows)
}

/// Parse a reply as a JSON array of non-empty strings
pub fn parse_string_list(reply: &str) -> Result<Vec<String>, IntelError> {
    let items = parse_array(reply)?;

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) if !s.trim().is_empty() => Some(s),
            other => {
                warn!("Dropping non-name entry: {}", other);
                None
            }
        })
        .collect())
}

/// Parse competitor rows, dropping rows with missing keys or bad values
pub fn parse_competitors(reply: &str) -> Result<Vec<CompetitorRecord>, IntelError> {
    let rows = parse_list(reply, COMPETITOR_KEYS)?;
    Ok(rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| match competitor_from_row(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping competitor {}: {}", idx, e);
                None
            }
        })
        .collect())
}

/// Parse subsidiary rows, dropping rows with missing keys or bad values
pub fn parse_subsidiaries(reply: &str) -> Result<Vec<SubsidiaryRecord>, IntelError> {
    let rows = parse_list(reply, SUBSIDIARY_KEYS)?;
    Ok(rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| match subsidiary_from_row(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Dropping subsidiary {}: {}", idx, e);
                None
            }
        })
        .collect())
}

/// Trim, unwrap a Markdown fence if present, and require a top-level array
fn parse_array(reply: &str) -> Result<Vec<Value>, IntelError> {
    let json_str = strip_code_fence(reply.trim());

    let json: Value = serde_json::from_str(json_str)
        .map_err(|e| IntelError::MalformedResponse(format!("JSON parse error: {}", e)))?;

    match json {
        Value::Array(items) => Ok(items),
        other => Err(IntelError::MalformedResponse(format!(
            "Expected JSON array, got {}",
            type_name(&other)
        ))),
    }
}

/// Strip a surrounding ```json ... ``` or ``` ... ``` block
fn strip_code_fence(trimmed: &str) -> &str {
    let Some(body) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the language tag, which may share a line with the payload
    let body = match body.find('\n') {
        Some(newline) => &body[newline + 1..],
        None => body.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
    };

    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn competitor_from_row(row: &Map<String, Value>) -> Result<CompetitorRecord, String> {
    let rank = row
        .get("rank")
        .and_then(Value::as_u64)
        .filter(|r| *r > 0)
        .and_then(|r| u32::try_from(r).ok())
        .ok_or_else(|| "'rank' is not a positive integer".to_string())?;

    Ok(CompetitorRecord {
        rank,
        company_name: required_text(row, "company_name")?,
        ticker: ticker(row)?,
        reason: text(row, "reason")?,
    })
}

fn subsidiary_from_row(row: &Map<String, Value>) -> Result<SubsidiaryRecord, String> {
    Ok(SubsidiaryRecord {
        company_name: required_text(row, "company_name")?,
        ticker: ticker(row)?,
        details: text(row, "details")?,
    })
}

fn text(row: &Map<String, Value>, key: &str) -> Result<String, String> {
    row.get(key)
        .and_then(Value::as_str)
        .map(|s| s.trim().to_string())
        .ok_or_else(|| format!("'{}' is not a string", key))
}

fn required_text(row: &Map<String, Value>, key: &str) -> Result<String, String> {
    let value = text(row, key)?;
    if value.is_empty() {
        return Err(format!("'{}' is empty", key));
    }
    Ok(value)
}

/// Blank or null tickers become the "N/A" sentinel
fn ticker(row: &Map<String, Value>) -> Result<String, String> {
    match row.get("ticker") {
        Some(Value::Null) | None => Ok(NOT_AVAILABLE.to_string()),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(NOT_AVAILABLE.to_string()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(_) => Err("'ticker' is not a string".to_string()),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
