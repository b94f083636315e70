use std::future::Future;

use ethers::types::Address;
use tracing::debug;

use crate::error::Error;
use crate::notify::Notify;
use crate::posts::{fetch_all, Draft, JournalCalls, Post};
use crate::profile::{Profile, ProfileStore};
use crate::wallet::WalletProvider;

/// Where the workflow stands between a fresh start and a usable contract
/// session.
#[derive(Debug)]
pub enum SessionState<J> {
    NoAccount,
    AccountCached { account: Address },
    Ready { account: Address, journal: J },
}

/// The blog workflow: account acquisition, session setup, and the
/// submit/refresh loop. Holds the displayed post snapshot and the draft;
/// every outcome is surfaced through the notifier passed to each
/// operation.
pub struct Blog<J> {
    state: SessionState<J>,
    posts: Vec<Post>,
    pub draft: Draft,
}

impl<J> Default for Blog<J> {
    fn default() -> Self {
        Self::new()
    }
}

impl<J> Blog<J> {
    pub fn new() -> Self {
        Self {
            state: SessionState::NoAccount,
            posts: Vec::new(),
            draft: Draft::default(),
        }
    }

    pub fn account(&self) -> Option<Address> {
        match &self.state {
            SessionState::NoAccount => None,
            SessionState::AccountCached { account }
            | SessionState::Ready { account, .. } => Some(*account),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    /// The displayed snapshot, newest post first. Only ever replaced as a
    /// whole by [`Blog::refresh`].
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Adopt a previously cached account, or report that none exists.
    pub fn restore_account(&mut self, cached: Option<Profile>, notify: &impl Notify) {
        match cached {
            Some(profile) => {
                self.state = SessionState::AccountCached {
                    account: profile.account,
                };
            }
            None => notify.error("No account found in the profile. Connect a wallet first."),
        }
    }

    /// Request account authorization and cache the adopted address. The
    /// first address the provider returns wins; the profile is written
    /// only on success.
    pub fn connect_wallet<W: WalletProvider>(
        &mut self,
        provider: Option<&W>,
        store: &ProfileStore,
        notify: &impl Notify,
    ) -> Result<Address, Error> {
        let Some(provider) = provider else {
            notify.error("No wallet provider found");
            return Err(Error::ProviderNotFound);
        };
        notify.clear();
        let accounts = match provider.request_accounts() {
            Ok(accounts) => accounts,
            Err(err) => {
                notify.error(&format!("Failed to connect wallet: {err}"));
                return Err(err);
            }
        };
        let Some(&account) = accounts.first() else {
            notify.error("No accounts found");
            return Err(Error::NoAccounts);
        };
        if let Err(err) = store.save(&Profile { account }) {
            notify.error(&format!("Failed to store the account: {err}"));
            return Err(err);
        }
        self.state = SessionState::AccountCached { account };
        notify.success(&format!("Wallet connected as {account:?}"));
        Ok(account)
    }

    /// Build the contract session. Attempted if and only if an account is
    /// cached and a provider is present; on failure the state stays
    /// `AccountCached` and dependent operations observe "not ready".
    pub async fn open_session<P, F, Fut>(
        &mut self,
        provider: Option<P>,
        connect: F,
        notify: &impl Notify,
    ) where
        F: FnOnce(P, Address) -> Fut,
        Fut: Future<Output = Result<J, Error>>,
    {
        let account = match &self.state {
            SessionState::AccountCached { account } => *account,
            _ => return,
        };
        let Some(provider) = provider else { return };
        match connect(provider, account).await {
            Ok(journal) => {
                debug!(?account, "journal session ready");
                self.state = SessionState::Ready { account, journal };
            }
            Err(err) => notify.error(&format!("Failed to open the contract session: {err}")),
        }
    }
}

impl<J: JournalCalls> Blog<J> {
    /// Submit the current draft as a new post, then trigger a full
    /// re-fetch. The draft is sent exactly as entered and reset only on
    /// success.
    pub async fn submit(&mut self, notify: &impl Notify) -> Result<(), Error> {
        let SessionState::Ready { journal, .. } = &self.state else {
            notify.error("Connect a wallet before posting");
            return Err(Error::NotConnected);
        };
        let pending = notify.loading("Publishing post on-chain...");
        let submitted = journal
            .create_post(&self.draft.title, &self.draft.content)
            .await;
        match submitted {
            Ok(()) => {
                self.draft.clear();
                // A failed re-fetch reports its own notice and keeps the
                // old snapshot; the submission itself still succeeded.
                let _ = self.refresh(notify).await;
                notify.dismiss(pending);
                notify.success("Post published");
                Ok(())
            }
            Err(err) => {
                notify.dismiss(pending);
                notify.error(&format!("Failed to publish post: {err}"));
                Err(err)
            }
        }
    }

    /// Rebuild the post snapshot from the contract, newest first. A no-op
    /// without a session; a failure leaves the previous snapshot in
    /// place.
    pub async fn refresh(&mut self, notify: &impl Notify) -> Result<(), Error> {
        let SessionState::Ready { journal, .. } = &self.state else {
            return Ok(());
        };
        match fetch_all(journal).await {
            Ok(posts) => {
                self.posts = posts;
                Ok(())
            }
            Err(err) => {
                notify.error(&format!("Failed to fetch posts: {err}"));
                Err(err)
            }
        }
    }
}
