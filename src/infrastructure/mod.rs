//! Infrastructure layer - External concerns and adapters
//!
//! This module contains infrastructure concerns including storage adapters
//! and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::InMemoryWalletStore;
