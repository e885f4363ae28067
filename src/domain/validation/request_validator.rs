use std::sync::Arc;

use serde_json::Value;

use super::types::ValidationError;
use super::validator::Validator;
use crate::shared::error::{AppError, AppResult};

/// Whole-request validator: an ordered, fixed list of checks.
///
/// Every check runs on every request; violations are concatenated in check
/// order and reported together in a single `AppError::RequestValidation`.
#[derive(Clone)]
pub struct RequestValidator {
    checks: Vec<Arc<dyn Validator>>,
}

impl RequestValidator {
    pub fn new(checks: Vec<Arc<dyn Validator>>) -> Self {
        Self { checks }
    }

    /// Run every check and concatenate the violations in declaration order
    pub fn collect(&self, request: &Value) -> Vec<ValidationError> {
        self.checks
            .iter()
            .flat_map(|check| check.validate(request))
            .collect()
    }

    /// Validate a request body, failing once with the complete violation list
    pub fn validate(&self, request: &Value) -> AppResult<()> {
        let errors = self.collect(request);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::RequestValidation { errors })
        }
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Discriminants dispatched on by some check but validated by none.
    ///
    /// Dispatching checks stay silent on values they do not recognise, so a
    /// discriminant listed here could carry garbage without any violation.
    pub fn unguarded_discriminants(&self) -> Vec<&str> {
        let covered: Vec<&str> = self.checks.iter().flat_map(|c| c.fields()).collect();
        let mut unguarded: Vec<&str> = self
            .checks
            .iter()
            .flat_map(|c| c.discriminants())
            .filter(|d| !covered.contains(d))
            .collect();
        unguarded.sort_unstable();
        unguarded.dedup();
        unguarded
    }

    /// Refuse a rule set whose dispatch could silently accept a bad discriminant
    pub fn ensure_guarded(&self) -> AppResult<()> {
        let unguarded = self.unguarded_discriminants();
        if unguarded.is_empty() {
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "discriminant fields without their own check: {}",
                unguarded.join(", ")
            )))
        }
    }
}

impl Validator for RequestValidator {
    fn validate(&self, request: &Value) -> Vec<ValidationError> {
        self.collect(request)
    }

    fn fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = self.checks.iter().flat_map(|c| c.fields()).collect();
        fields.sort_unstable();
        fields.dedup();
        fields
    }

    fn discriminants(&self) -> Vec<&str> {
        let mut discriminants: Vec<&str> = self.checks.iter().flat_map(|c| c.discriminants()).collect();
        discriminants.sort_unstable();
        discriminants.dedup();
        discriminants
    }
}

impl std::fmt::Debug for RequestValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestValidator")
            .field("checks", &self.checks.len())
            .field("fields", &Validator::fields(self))
            .finish()
    }
}
