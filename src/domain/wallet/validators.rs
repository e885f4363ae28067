//! Request validators for the wallet routes.
//!
//! The private-key rule dispatches on `chain` and is silent for unknown
//! chains; `chain` is always validated by its own check in the same list.

use std::sync::Arc;

use crate::domain::chain::{Chain, KeyFormat};
use crate::domain::validation::predicates::{
    value_is_eth_private_key, value_is_ripple_seed_key, value_is_sol_private_key, value_is_string,
    value_is_supported_chain,
};
use crate::domain::validation::{FieldValidator, MultiValidator, RequestValidator, Validator};
use crate::shared::error::AppResult;

pub const INVALID_ETH_PRIVATE_KEY_ERROR: &str =
    "The privateKey param is not a valid Ethereum private key (64 hexadecimal characters).";

pub const INVALID_SOL_PRIVATE_KEY_ERROR: &str =
    "The privateKey param is not a valid Solana private key (64 bytes, base 58 encoded).";

pub const INVALID_RIPPLE_PRIVATE_KEY_ERROR: &str =
    "The privateKey param is not a valid Ripple private key (64 bytes, base 58 encoded).";

pub const INVALID_CHAIN_ERROR: &str = "chain must be \"ethereum\", \"solana\", \"avalanche\" or \"harmony\"";

pub const INVALID_NETWORK_ERROR: &str = "expected a string for the network key";

pub const INVALID_ADDRESS_ERROR: &str = "address must be a string";

pub const CHAIN_FIELD: &str = "chain";
pub const NETWORK_FIELD: &str = "network";
pub const ADDRESS_FIELD: &str = "address";
pub const PRIVATE_KEY_FIELD: &str = "privateKey";

fn key_validator(format: KeyFormat) -> FieldValidator {
    match format {
        KeyFormat::EvmHex => {
            FieldValidator::new(PRIVATE_KEY_FIELD, INVALID_ETH_PRIVATE_KEY_ERROR, value_is_eth_private_key)
        }
        KeyFormat::SolanaBase58 => {
            FieldValidator::new(PRIVATE_KEY_FIELD, INVALID_SOL_PRIVATE_KEY_ERROR, value_is_sol_private_key)
        }
        KeyFormat::RippleSeed => FieldValidator::new(
            PRIVATE_KEY_FIELD,
            INVALID_RIPPLE_PRIVATE_KEY_ERROR,
            value_is_ripple_seed_key,
        ),
    }
}

/// `privateKey` check selected by `chain`, one entry per supported chain
pub fn private_key_validator() -> MultiValidator {
    let evm = key_validator(KeyFormat::EvmHex).into_shared();
    Chain::ALL.into_iter().fold(MultiValidator::new(CHAIN_FIELD), |table, chain| {
        let rule = match chain.key_format() {
            KeyFormat::EvmHex => evm.clone(),
            format => key_validator(format).into_shared(),
        };
        table.with(chain.as_str(), rule)
    })
}

pub fn chain_validator() -> FieldValidator {
    FieldValidator::new(CHAIN_FIELD, INVALID_CHAIN_ERROR, value_is_supported_chain)
}

pub fn network_validator() -> FieldValidator {
    FieldValidator::new(NETWORK_FIELD, INVALID_NETWORK_ERROR, value_is_string)
}

pub fn address_validator() -> FieldValidator {
    FieldValidator::new(ADDRESS_FIELD, INVALID_ADDRESS_ERROR, value_is_string)
}

/// `{ chain, network, privateKey }`
pub fn add_wallet_validator() -> RequestValidator {
    RequestValidator::new(vec![
        private_key_validator().into_shared(),
        chain_validator().into_shared(),
        network_validator().into_shared(),
    ])
}

/// `{ chain, address }`
pub fn remove_wallet_validator() -> RequestValidator {
    RequestValidator::new(vec![address_validator().into_shared(), chain_validator().into_shared()])
}

/// Validators for every wallet route, built once at startup
#[derive(Debug, Clone)]
pub struct WalletValidators {
    pub add: Arc<RequestValidator>,
    pub remove: Arc<RequestValidator>,
}

impl WalletValidators {
    /// Assemble the wallet rule sets, refusing any with an unchecked discriminant
    pub fn build() -> AppResult<Self> {
        let add = add_wallet_validator();
        let remove = remove_wallet_validator();
        add.ensure_guarded()?;
        remove.ensure_guarded()?;
        Ok(Self {
            add: Arc::new(add),
            remove: Arc::new(remove),
        })
    }
}
