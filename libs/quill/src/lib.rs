//!
//! Client workflow for an on-chain journal: wallet account acquisition,
//! signer-bound contract sessions, and the post submit/list loop.
//!

pub mod blog;
pub mod contracts;
pub mod error;
pub mod notify;
pub mod posts;
pub mod profile;
pub mod session;
pub mod wallet;


pub use blog::{Blog, SessionState};
pub use error::Error;
pub use notify::{LogNotify, NoticeId, Notify};
pub use posts::{fetch_all, Draft, JournalCalls, Post};
pub use profile::{Profile, ProfileStore};
pub use session::{EthClient, JournalSession};
pub use wallet::{EnvKeyWallet, WalletProvider};
