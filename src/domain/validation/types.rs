use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape check over a single field value.
///
/// A plain function pointer: predicates cannot capture state, so they cannot
/// perform I/O through a captured handle or observe anything but their input.
/// A missing field is presented as `Value::Null`.
pub type Predicate = fn(&Value) -> bool;

/// Boolean test over the whole request and the name of its discriminant field.
pub type BranchTest = fn(&Value, &str) -> bool;

/// One field that failed its shape check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Look up a request field, treating absent fields and non-object bodies as `null`
pub fn field_value<'a>(request: &'a Value, field: &str) -> &'a Value {
    request.get(field).unwrap_or(&Value::Null)
}
