use std::sync::Arc;

use async_trait::async_trait;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Middleware, Provider};
use ethers::signers::{LocalWallet, Signer};
use ethers::types::{Address, U256};
use tracing::debug;

use crate::contracts::Journal;
use crate::error::Error;
use crate::posts::{JournalCalls, Post};

/// Middleware stack behind every signed contract call.
pub type EthClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// A signer-bound handle to the journal contract at a fixed address.
/// Derived from the endpoint and the adopted account; recreated whenever
/// the account changes, never persisted.
pub struct JournalSession {
    client: Arc<EthClient>,
    journal: Journal<EthClient>,
}

impl JournalSession {
    /// Connects to the endpoint, binds the wallet to the endpoint's chain
    /// id, and wraps the journal contract at `journal_address`. The
    /// address and interface are taken on faith; a mismatch surfaces as a
    /// call-time failure.
    pub async fn connect(
        rpc_url: &str,
        wallet: LocalWallet,
        journal_address: Address,
    ) -> Result<Self, Error> {
        let provider = Provider::<Http>::try_from(rpc_url)?;
        let chain_id = provider.get_chainid().await?.as_u64();
        debug!(chain_id, %journal_address, "opening journal session");
        let client = Arc::new(SignerMiddleware::new(
            provider,
            wallet.with_chain_id(chain_id),
        ));
        let journal = Journal::new(journal_address, client.clone());
        Ok(Self { client, journal })
    }

    /// The account this session signs and submits from.
    pub fn address(&self) -> Address {
        self.client.address()
    }
}

#[async_trait]
impl JournalCalls for JournalSession {
    async fn post_count(&self) -> Result<u64, Error> {
        let count: U256 = self.journal.get_post_count().call().await?;
        Ok(count.as_u64())
    }

    async fn post_at(&self, index: u64) -> Result<Post, Error> {
        let (title, content, author, timestamp) =
            self.journal.get_post(U256::from(index)).call().await?;
        Ok(Post {
            index,
            title,
            content,
            author,
            timestamp: timestamp.as_u64(),
        })
    }

    async fn create_post(&self, title: &str, content: &str) -> Result<(), Error> {
        let receipt = self
            .journal
            .create_post(title.to_owned(), content.to_owned())
            .send()
            .await?
            .await?
            .ok_or(Error::Dropped)?;
        if receipt.status != Some(1.into()) {
            return Err(Error::Reverted);
        }
        Ok(())
    }
}
