//! Wallet domain: request models, the validators that guard them and the
//! storage port

pub mod models;
pub mod store;
pub mod validators;

pub use models::{AddWalletRequest, RemoveWalletRequest, WalletEntry};
pub use store::WalletStore;
pub use validators::{add_wallet_validator, remove_wallet_validator, WalletValidators};
