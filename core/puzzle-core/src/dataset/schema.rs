use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub const DIFFICULTIES: &[&str] = &["EASY", "MEDIUM", "HARD"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// Non-negative JSON integer.
    Integer,
}

impl FieldKind {
    fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Integer => value.as_u64().is_some(),
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => f.write_str("string"),
            FieldKind::Integer => f.write_str("non-negative integer"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub kind: FieldKind,
    pub allowed: Option<&'static [&'static str]>,
}

impl FieldSpec {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, presence: Presence::Required, kind, allowed: None }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, presence: Presence::Optional, kind, allowed: None }
    }

    pub const fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }
}

/// Declarative shape of one document kind. `subject` is the word used in
/// diagnostics ("Unexpected field in metadata: ...").
#[derive(Debug)]
pub struct Schema {
    pub subject: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}

pub static INDEX_SCHEMA: Schema = Schema {
    subject: "metadata",
    fields: &[
        FieldSpec::required("length", FieldKind::Integer),
        FieldSpec::required("type", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("description", FieldKind::String),
        FieldSpec::required("email", FieldKind::String),
        FieldSpec::optional("twitter", FieldKind::String),
        FieldSpec::optional("github", FieldKind::String),
        FieldSpec::optional("youtube", FieldKind::String),
        FieldSpec::optional("discord", FieldKind::String),
    ],
};

pub static RECORD_SCHEMA: Schema = Schema {
    subject: "data",
    fields: &[
        FieldSpec::required("question", FieldKind::String),
        FieldSpec::required("solution", FieldKind::String),
        FieldSpec::required("difficulty", FieldKind::String).one_of(DIFFICULTIES),
        FieldSpec::optional("source", FieldKind::String),
        FieldSpec::optional("hints", FieldKind::String),
        FieldSpec::optional("coverImage", FieldKind::String),
    ],
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaViolation {
    #[error("expected a JSON object, got {actual}")]
    NotAnObject { actual: &'static str },
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },
    #[error("Unexpected field in {subject}: {field}")]
    UnexpectedField { subject: &'static str, field: String },
    #[error("'{field}' field must be a {expected}, got {actual}")]
    WrongType {
        field: &'static str,
        expected: FieldKind,
        actual: &'static str,
    },
    #[error("Invalid {field}: '{value}'. Must be one of {}", .allowed.join(", "))]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(n) if n.is_u64() => "integer",
        Value::Number(_) => "negative integer",
    }
}

/// Checks `doc` against `schema` and returns the first violation.
///
/// Order: missing required fields (schema order), unknown fields (document
/// order), kind mismatches (schema order), then closed enumerations.
pub fn check_document(schema: &Schema, doc: &Value) -> Result<(), SchemaViolation> {
    let obj = doc
        .as_object()
        .ok_or(SchemaViolation::NotAnObject { actual: kind_name(doc) })?;

    if let Some(spec) = schema
        .fields
        .iter()
        .find(|f| f.presence == Presence::Required && !obj.contains_key(f.name))
    {
        return Err(SchemaViolation::MissingField { field: spec.name });
    }

    if let Some(key) = obj.keys().find(|k| schema.field(k).is_none()) {
        return Err(SchemaViolation::UnexpectedField {
            subject: schema.subject,
            field: key.clone(),
        });
    }

    for spec in schema.fields {
        if let Some(value) = obj.get(spec.name) {
            if !spec.kind.matches(value) {
                return Err(SchemaViolation::WrongType {
                    field: spec.name,
                    expected: spec.kind,
                    actual: kind_name(value),
                });
            }
        }
    }

    for spec in schema.fields {
        let (Some(allowed), Some(value)) = (spec.allowed, obj.get(spec.name)) else {
            continue;
        };
        let text = match value.as_str() {
            Some(s) => s.to_string(),
            None => value.to_string(),
        };
        if !allowed.contains(&text.as_str()) {
            return Err(SchemaViolation::NotAllowed { field: spec.name, value: text, allowed });
        }
    }

    Ok(())
}
