//! Bridge account derivation.
//!
//! The chain only delivers launches addressed to a concrete account, so the
//! bridge derives its own identity once at startup from the configured seed
//! and crypto scheme. Nothing here ever signs anything; the bridge is a
//! read-only consumer and only needs the account id for event filtering.

use std::fmt;
use std::str::FromStr;

use subxt::utils::AccountId32;
use subxt_signer::{ed25519, sr25519, SecretUri};
use thiserror::Error;

/// Failures while turning the configured seed into an account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("unsupported crypto scheme '{0}', expected ED25519 or SR25519")]
    UnsupportedScheme(String),

    #[error("invalid account seed: {0}")]
    InvalidSeed(String),
}

/// The signature schemes the chain accepts for accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoScheme {
    Ed25519,
    Sr25519,
}

impl FromStr for CryptoScheme {
    type Err = AccountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ED25519" => Ok(CryptoScheme::Ed25519),
            "SR25519" => Ok(CryptoScheme::Sr25519),
            other => Err(AccountError::UnsupportedScheme(other.to_string())),
        }
    }
}

impl fmt::Display for CryptoScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoScheme::Ed25519 => f.write_str("ED25519"),
            CryptoScheme::Sr25519 => f.write_str("SR25519"),
        }
    }
}

/// The bridge's own ledger identity.
#[derive(Debug, Clone)]
pub struct Account {
    scheme: CryptoScheme,
    account_id: AccountId32,
}

impl Account {
    /// Derives the account from a secret-URI seed ("//Alice", a mnemonic
    /// phrase, a hex seed, ...) under the scheme named by `scheme_name`.
    ///
    /// The scheme string comes straight from the configuration file; an
    /// unrecognized value fails here rather than at config load, so every
    /// account problem surfaces from the same place.
    pub fn derive(seed: &str, scheme_name: &str) -> Result<Self, AccountError> {
        let scheme: CryptoScheme = scheme_name.parse()?;
        let uri = SecretUri::from_str(seed)
            .map_err(|e| AccountError::InvalidSeed(e.to_string()))?;

        let public: [u8; 32] = match scheme {
            CryptoScheme::Sr25519 => sr25519::Keypair::from_uri(&uri)
                .map_err(|e| AccountError::InvalidSeed(e.to_string()))?
                .public_key()
                .0,
            CryptoScheme::Ed25519 => ed25519::Keypair::from_uri(&uri)
                .map_err(|e| AccountError::InvalidSeed(e.to_string()))?
                .public_key()
                .0,
        };

        Ok(Self {
            scheme,
            account_id: AccountId32(public),
        })
    }

    pub fn scheme(&self) -> CryptoScheme {
        self.scheme
    }

    pub fn account_id(&self) -> &AccountId32 {
        &self.account_id
    }

    /// The SS58 address string, as shown to operators and used on-chain
    /// explorers.
    pub fn address(&self) -> String {
        self.account_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_well_known_alice_sr25519_address() {
        let account = Account::derive("//Alice", "SR25519").unwrap();
        assert_eq!(
            account.address(),
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY"
        );
        assert_eq!(account.scheme(), CryptoScheme::Sr25519);
    }

    #[test]
    fn schemes_derive_distinct_accounts_from_one_seed() {
        let sr = Account::derive("//Alice", "SR25519").unwrap();
        let ed = Account::derive("//Alice", "ED25519").unwrap();
        assert_ne!(sr.account_id(), ed.account_id());
    }

    #[test]
    fn scheme_name_is_case_insensitive() {
        let lower = Account::derive("//Alice", "sr25519").unwrap();
        let upper = Account::derive("//Alice", "SR25519").unwrap();
        assert_eq!(lower.account_id(), upper.account_id());
    }

    #[test]
    fn rejects_unknown_scheme() {
        let err = Account::derive("//Alice", "ECDSA").unwrap_err();
        assert_eq!(err, AccountError::UnsupportedScheme("ECDSA".to_string()));
    }

    #[test]
    fn rejects_malformed_seed() {
        let err = Account::derive("definitely not a valid mnemonic phrase", "SR25519").unwrap_err();
        assert!(matches!(err, AccountError::InvalidSeed(_)));
    }
}
