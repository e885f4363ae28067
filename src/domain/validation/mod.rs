//! Domain validation module
//!
//! Declarative shape validation for gateway request bodies: per-field
//! predicates composed into whole-request validators, with branching and
//! table dispatch on a discriminant field.

pub mod predicates;
pub mod request_validator;
pub mod types;
pub mod validator;

pub use predicates::DecodeError;
pub use request_validator::RequestValidator;
pub use types::{field_value, BranchTest, Predicate, ValidationError};
pub use validator::{BranchingValidator, FieldValidator, MultiValidator, Validator};
