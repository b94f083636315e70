use ethers::contract::ContractError;
use ethers::providers::ProviderError;
use ethers::signers::WalletError;
use ethers::types::Address;
use thiserror::Error;

use crate::session::EthClient;

/// Everything that can go wrong between the wallet, the endpoint, and the
/// journal contract. None of these is fatal to the process; the workflow
/// converts each into a user-visible notice at the operation boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no wallet provider found")]
    ProviderNotFound,

    #[error("no accounts found")]
    NoAccounts,

    #[error("no signer key matches account {0:?}")]
    UnknownAccount(Address),

    #[error("wallet is not connected")]
    NotConnected,

    #[error("transaction dropped before a receipt was produced")]
    Dropped,

    #[error("transaction reverted on-chain")]
    Reverted,

    #[error("invalid private key: {0}")]
    InvalidKey(#[from] WalletError),

    #[error(transparent)]
    Contract(#[from] ContractError<EthClient>),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("invalid endpoint url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
