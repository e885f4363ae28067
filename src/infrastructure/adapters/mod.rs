//! Infrastructure adapters module
//!
//! This module contains adapters for storage and other infrastructure concerns.

pub mod wallet_store;

pub use wallet_store::InMemoryWalletStore;
