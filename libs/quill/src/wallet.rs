use std::env;

use ethers::signers::{LocalWallet, Signer};
use ethers::types::Address;

use crate::error::Error;

/// Source of signing accounts. Stands in for the browser wallet: asking
/// it for accounts is the authorization step, and a signer for the
/// adopted account backs the contract session.
pub trait WalletProvider {
    /// Request account authorization. Returns the addresses the provider
    /// is willing to sign for, in its own preference order.
    fn request_accounts(&self) -> Result<Vec<Address>, Error>;

    /// A signer for one of the previously returned accounts.
    fn signer_for(&self, account: Address) -> Result<LocalWallet, Error>;
}

/// Wallet backed by private keys in an environment variable: one or more
/// hex keys separated by commas.
pub struct EnvKeyWallet {
    keys: String,
}

impl EnvKeyWallet {
    /// Returns `None` when the variable is unset, which callers treat as
    /// "no provider installed".
    pub fn from_env(var: &str) -> Option<Self> {
        env::var(var).ok().map(|keys| Self { keys })
    }

    pub fn from_keys(keys: impl Into<String>) -> Self {
        Self { keys: keys.into() }
    }

    fn wallets(&self) -> Result<Vec<LocalWallet>, Error> {
        self.keys
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(|key| key.parse::<LocalWallet>().map_err(Error::from))
            .collect()
    }
}

impl WalletProvider for EnvKeyWallet {
    fn request_accounts(&self) -> Result<Vec<Address>, Error> {
        Ok(self.wallets()?.iter().map(|wallet| wallet.address()).collect())
    }

    fn signer_for(&self, account: Address) -> Result<LocalWallet, Error> {
        self.wallets()?
            .into_iter()
            .find(|wallet| wallet.address() == account)
            .ok_or(Error::UnknownAccount(account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const SECOND_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

    #[test]
    fn accounts_follow_key_order() {
        let wallet = EnvKeyWallet::from_keys(format!("{FIRST_KEY}, {SECOND_KEY}"));
        let first: LocalWallet = FIRST_KEY.parse().unwrap();
        let second: LocalWallet = SECOND_KEY.parse().unwrap();
        assert_eq!(
            wallet.request_accounts().unwrap(),
            vec![first.address(), second.address()]
        );
    }

    #[test]
    fn empty_variable_yields_no_accounts() {
        let wallet = EnvKeyWallet::from_keys("");
        assert!(wallet.request_accounts().unwrap().is_empty());
    }

    #[test]
    fn signer_requires_a_matching_key() {
        let wallet = EnvKeyWallet::from_keys(FIRST_KEY);
        let first: LocalWallet = FIRST_KEY.parse().unwrap();
        assert_eq!(
            wallet.signer_for(first.address()).unwrap().address(),
            first.address()
        );

        let stranger = Address::repeat_byte(0x99);
        assert!(matches!(
            wallet.signer_for(stranger),
            Err(Error::UnknownAccount(account)) if account == stranger
        ));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        let wallet = EnvKeyWallet::from_keys("not-a-key");
        assert!(matches!(
            wallet.request_accounts(),
            Err(Error::InvalidKey(_))
        ));
    }
}
