//! Domain layer - Core business logic and domain models
//!
//! This module contains the request validation engine, the chain model and
//! the wallet rules, independent of HTTP and storage concerns.

pub mod chain;
pub mod health;
pub mod validation;
pub mod wallet;

pub use chain::{Chain, KeyFormat, UnknownChain};
pub use health::{ComponentCheck, HealthResponse, HealthStatus};
pub use validation::{
    BranchingValidator, FieldValidator, MultiValidator, RequestValidator, ValidationError, Validator,
};
pub use wallet::{AddWalletRequest, RemoveWalletRequest, WalletEntry, WalletStore, WalletValidators};
