//! The `Validator` trait and the field, branching and table combinators

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::types::{field_value, BranchTest, Predicate, ValidationError};

/// A rule that inspects a request body and reports the fields it finds malformed.
///
/// Validators never fail: every outcome, including a malformed body, is
/// expressed as a (possibly empty) list of violations.
pub trait Validator: Send + Sync {
    /// Check the request and return every violation found
    fn validate(&self, request: &Value) -> Vec<ValidationError>;

    /// Fields this validator may report violations on
    fn fields(&self) -> Vec<&str>;

    /// Fields whose value selects which rule runs
    fn discriminants(&self) -> Vec<&str> {
        Vec::new()
    }

    fn into_shared(self) -> Arc<dyn Validator>
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

/// Checks one field with one predicate
#[derive(Debug, Clone)]
pub struct FieldValidator {
    field: String,
    message: String,
    predicate: Predicate,
}

impl FieldValidator {
    pub fn new(field: impl Into<String>, message: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            predicate,
        }
    }
}

impl Validator for FieldValidator {
    fn validate(&self, request: &Value) -> Vec<ValidationError> {
        if (self.predicate)(field_value(request, &self.field)) {
            Vec::new()
        } else {
            vec![ValidationError::new(self.field.as_str(), self.message.as_str())]
        }
    }

    fn fields(&self) -> Vec<&str> {
        vec![self.field.as_str()]
    }
}

/// Runs exactly one of two validators, chosen by a test over the discriminant
pub struct BranchingValidator {
    discriminant: String,
    test: BranchTest,
    on_true: Arc<dyn Validator>,
    on_false: Arc<dyn Validator>,
}

impl BranchingValidator {
    pub fn new(
        discriminant: impl Into<String>,
        test: BranchTest,
        on_true: Arc<dyn Validator>,
        on_false: Arc<dyn Validator>,
    ) -> Self {
        Self {
            discriminant: discriminant.into(),
            test,
            on_true,
            on_false,
        }
    }
}

impl Validator for BranchingValidator {
    fn validate(&self, request: &Value) -> Vec<ValidationError> {
        if (self.test)(request, &self.discriminant) {
            self.on_true.validate(request)
        } else {
            self.on_false.validate(request)
        }
    }

    fn fields(&self) -> Vec<&str> {
        let mut fields = self.on_true.fields();
        fields.extend(self.on_false.fields());
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    fn discriminants(&self) -> Vec<&str> {
        let mut discriminants = vec![self.discriminant.as_str()];
        discriminants.extend(self.on_true.discriminants());
        discriminants.extend(self.on_false.discriminants());
        discriminants.sort_unstable();
        discriminants.dedup();
        discriminants
    }
}

/// Selects a validator by the exact string value of the discriminant field.
///
/// An absent, non-string or unknown discriminant yields no violations; the
/// discriminant's own validity must be checked by a separate rule in the same
/// request validator (see `RequestValidator::ensure_guarded`).
pub struct MultiValidator {
    discriminant: String,
    table: HashMap<String, Arc<dyn Validator>>,
}

impl MultiValidator {
    pub fn new(discriminant: impl Into<String>) -> Self {
        Self {
            discriminant: discriminant.into(),
            table: HashMap::new(),
        }
    }

    /// Register the validator used when the discriminant equals `key`
    pub fn with(mut self, key: impl Into<String>, validator: Arc<dyn Validator>) -> Self {
        self.table.insert(key.into(), validator);
        self
    }

    pub fn discriminant(&self) -> &str {
        &self.discriminant
    }

    /// Keys with a registered validator
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }
}

impl Validator for MultiValidator {
    fn validate(&self, request: &Value) -> Vec<ValidationError> {
        field_value(request, &self.discriminant)
            .as_str()
            .and_then(|key| self.table.get(key))
            .map(|validator| validator.validate(request))
            .unwrap_or_default()
    }

    fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.table.values().flat_map(|v| v.fields()).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    fn discriminants(&self) -> Vec<&str> {
        let mut discriminants = vec![self.discriminant.as_str()];
        discriminants.extend(self.table.values().flat_map(|v| v.discriminants()));
        discriminants.sort_unstable();
        discriminants.dedup();
        discriminants
    }
}
