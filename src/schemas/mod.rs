//! Declarative request schemas.
//!
//! A [`Schema`] turns one untyped request part (route parameters or the JSON
//! body) into a typed value, or reports every failing field with the message
//! the schema declares for it. A [`RequestSchema`] pairs the two parts for one
//! operation; the validation middleware is generic over it.

pub mod post;

use std::fmt::Debug;

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

pub use post::{CreatePostRequest, DeletePostRequest, PostBody, PostIdParams, UpdatePostRequest};

/// A single failing field, with the schema-authored message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Which part of the request a validation issue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPart {
    Params,
    Body,
}

/// A field issue tagged with the request part it was found in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub location: RequestPart,
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn from_field(location: RequestPart, issue: FieldIssue) -> Self {
        Self {
            location,
            field: issue.field,
            message: issue.message,
        }
    }
}

/// Shape validation for one request part.
pub trait Schema: Sized + Clone + Debug + Send + Sync + 'static {
    /// Parts whose schema is not declared are never read or checked.
    const DECLARED: bool = true;

    fn parse(input: &Value) -> Result<Self, Vec<FieldIssue>>;
}

/// The unit schema marks an undeclared part.
impl Schema for () {
    const DECLARED: bool = false;

    fn parse(_input: &Value) -> Result<Self, Vec<FieldIssue>> {
        Ok(())
    }
}

/// The schema mapping for one operation.
pub trait RequestSchema: Send + Sync + 'static {
    type Params: Schema;
    type Body: Schema;
}

/// Typed, constraint-satisfying view of a request, attached by the validation
/// middleware for the downstream handler.
pub struct ValidatedRequest<S: RequestSchema> {
    pub params: S::Params,
    pub body: S::Body,
}

impl<S: RequestSchema> ValidatedRequest<S> {
    pub fn new(params: S::Params, body: S::Body) -> Self {
        Self { params, body }
    }
}

impl<S: RequestSchema> Clone for ValidatedRequest<S> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            body: self.body.clone(),
        }
    }
}

impl<S: RequestSchema> Debug for ValidatedRequest<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatedRequest")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish()
    }
}

/// Field-level rules shared by the schemas.
pub mod fields {
    use super::*;

    /// View any JSON value as an object; non-objects behave like `{}` so every
    /// required field reports its own message.
    pub fn object(input: &Value) -> Map<String, Value> {
        match input {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        }
    }

    /// A string that is present and not empty.
    pub fn required_string(
        obj: &Map<String, Value>,
        field: &str,
        message: &str,
    ) -> Result<String, FieldIssue> {
        match obj.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
            _ => Err(FieldIssue::new(field, message)),
        }
    }

    /// A boolean that falls back to `default` when the key is absent.
    /// An explicit `null` is not absent.
    pub fn optional_bool(
        obj: &Map<String, Value>,
        field: &str,
        default: bool,
        message: &str,
    ) -> Result<bool, FieldIssue> {
        match obj.get(field) {
            None => Ok(default),
            Some(Value::Bool(b)) => Ok(*b),
            Some(_) => Err(FieldIssue::new(field, message)),
        }
    }

    /// A UUID in canonical hyphenated form with RFC 9562 version (1-8) and
    /// variant bits. The nil and max UUIDs are also accepted.
    pub fn uuid(obj: &Map<String, Value>, field: &str, message: &str) -> Result<Uuid, FieldIssue> {
        match obj.get(field) {
            Some(Value::String(s)) if is_hyphenated_uuid(s) => {
                Uuid::parse_str(s).map_err(|_| FieldIssue::new(field, message))
            }
            _ => Err(FieldIssue::new(field, message)),
        }
    }

    fn is_hyphenated_uuid(value: &str) -> bool {
        let well_formed = value.len() == 36
            && value.char_indices().all(|(i, c)| match i {
                8 | 13 | 18 | 23 => c == '-',
                _ => c.is_ascii_hexdigit(),
            });
        if !well_formed {
            return false;
        }
        if value == "00000000-0000-0000-0000-000000000000"
            || value.eq_ignore_ascii_case("ffffffff-ffff-ffff-ffff-ffffffffffff")
        {
            return true;
        }

        let bytes = value.as_bytes();
        let version = (bytes[14] as char).to_digit(16);
        let variant = (bytes[19] as char).to_ascii_lowercase();
        matches!(version, Some(1..=8)) && matches!(variant, '8' | '9' | 'a' | 'b')
    }
}
