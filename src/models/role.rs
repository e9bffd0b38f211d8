use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// One assignment slot within an event: a label, a point value, a capacity,
/// and the teachers currently assigned to it.
///
/// Stored blobs were written by several generations of clients, so the decode
/// path accepts loose encodings (numeric strings, floats, missing fields) and
/// normalizes everything to this shape. A headcount of 0 means "not specified"
/// during merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub role: String,
    pub points: i64,
    pub headcount: i64,
    pub teachers: Vec<String>,
}

#[derive(Debug, Error)]
pub enum RoleDecodeError {
    #[error("roles payload is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("roles payload must be an array of objects")]
    Shape,
}

/// Decodes a loosely-typed roles document into normalized entries.
///
/// The top level must be an array of objects; anything else fails. Individual
/// fields never fail, they coerce:
/// - `role`: string as-is, numbers rendered as integer text, otherwise `""`
/// - `points` / `headcount`: float (truncated), integer, or integer string; otherwise 0
/// - `teachers`: array of string-coerced values; absent or null becomes `[]`
pub fn decode_roles(value: &Value) -> Result<Vec<Role>, RoleDecodeError> {
    let entries = value.as_array().ok_or(RoleDecodeError::Shape)?;

    entries
        .iter()
        .map(|entry| {
            let fields = entry.as_object().ok_or(RoleDecodeError::Shape)?;
            Ok(Role {
                role: coerce_string(fields.get("role")),
                points: coerce_int(fields.get("points")),
                headcount: coerce_int(fields.get("headcount")),
                teachers: coerce_string_list(fields.get("teachers")),
            })
        })
        .collect()
}

/// Decodes the raw stored blob. Called on every read path before a record is
/// handed to any caller.
pub fn decode_roles_json(raw: &str) -> Result<Vec<Role>, RoleDecodeError> {
    let value: Value = serde_json::from_str(raw)?;
    decode_roles(&value)
}

/// Serializes roles back to the stored form. `teachers` is always present,
/// encoding as `[]` when empty.
pub fn encode_roles(roles: &[Role]) -> String {
    serde_json::to_string(roles).expect("role serialization is infallible")
}

/// Reconciles an incoming role list against the previously stored one.
///
/// The incoming list wins: output has its cardinality and order, and existing
/// roles absent from it are dropped. The single exception is the headcount
/// sentinel: an incoming entry with headcount 0 inherits the headcount of the
/// first existing entry whose name matches exactly. Clients routinely resubmit
/// the full role list without headcount, and this keeps that from zeroing a
/// server-maintained value.
pub fn merge_roles(existing: &[Role], mut incoming: Vec<Role>) -> Vec<Role> {
    for entry in &mut incoming {
        if entry.headcount == 0 {
            if let Some(prior) = existing.iter().find(|e| e.role == entry.role) {
                entry.headcount = prior.headcount;
            }
        }
    }
    incoming
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match int_of(n) {
            Some(i) => i.to_string(),
            None => String::new(),
        },
        _ => String::new(),
    }
}

fn coerce_int(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => int_of(n).unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(|v| coerce_string(Some(v))).collect(),
        _ => Vec::new(),
    }
}

fn int_of(n: &serde_json::Number) -> Option<i64> {
    n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))
}
