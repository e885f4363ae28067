//! Shape predicates for wallet request fields.
//!
//! String predicates test a `&str`; the `value_*` wrappers add the JSON
//! string type guard so any non-string (including an absent field) fails.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::domain::chain::Chain;

/// Longest base58 input we are willing to decode.
///
/// Base58 decoding is quadratic in input length. The longest key shape we
/// accept (64 bytes) encodes to at most 88 characters.
pub const MAX_BASE58_INPUT_LEN: usize = 256;

/// Failure to decode base58 text
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("base58 input too long: {len} characters exceeds limit of {max}")]
    TooLong { len: usize, max: usize },

    #[error("invalid base58: {0}")]
    Invalid(#[from] bs58::decode::Error),
}

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

static ETH_PRIVATE_KEY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0x)?[a-fA-F0-9]{64}$").expect("Invalid Ethereum private key regex"));

/// Optionally `0x`-prefixed, exactly 64 hex characters
pub fn is_eth_private_key(s: &str) -> bool {
    ETH_PRIVATE_KEY_REGEX.is_match(s)
}

/// Non-empty and made only of base58 alphabet characters
pub fn is_base58(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| BASE58_ALPHABET.contains(c))
}

/// Decode base58 text, refusing oversized input before any work is done
pub fn decode_base58(s: &str) -> Result<Vec<u8>, DecodeError> {
    if s.len() > MAX_BASE58_INPUT_LEN {
        return Err(DecodeError::TooLong { len: s.len(), max: MAX_BASE58_INPUT_LEN });
    }
    Ok(bs58::decode(s).into_vec()?)
}

fn base58_decodes_to(s: &str, len: usize) -> bool {
    is_base58(s) && decode_base58(s).map(|bytes| bytes.len() == len).unwrap_or(false)
}

/// Base58 text decoding to exactly 64 bytes
pub fn is_sol_private_key(s: &str) -> bool {
    base58_decodes_to(s, 64)
}

/// Base58 text decoding to exactly 23 bytes
pub fn is_ripple_seed_key(s: &str) -> bool {
    base58_decodes_to(s, 23)
}

pub fn value_is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn value_is_eth_private_key(value: &Value) -> bool {
    value.as_str().is_some_and(is_eth_private_key)
}

pub fn value_is_sol_private_key(value: &Value) -> bool {
    value.as_str().is_some_and(is_sol_private_key)
}

pub fn value_is_ripple_seed_key(value: &Value) -> bool {
    value.as_str().is_some_and(is_ripple_seed_key)
}

pub fn value_is_supported_chain(value: &Value) -> bool {
    value.as_str().is_some_and(|s| s.parse::<Chain>().is_ok())
}
