use async_trait::async_trait;
use chrono::DateTime;
use ethers::types::Address;

use crate::error::Error;

/// A single on-chain post, as returned by the journal contract. Immutable
/// once fetched; the contract owns existence and ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub index: u64,
    pub title: String,
    pub content: String,
    pub author: Address,
    pub timestamp: u64,
}

impl Post {
    /// Creation time rendered for display. The contract stores seconds
    /// since the epoch.
    pub fn published_at(&self) -> String {
        match DateTime::from_timestamp(self.timestamp as i64, 0) {
            Some(time) => time.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            None => format!("{}s", self.timestamp),
        }
    }
}

/// In-progress post input, reset only after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub content: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}

/// Journal operations the workflow depends on. The on-chain
/// implementation lives in [`crate::session`]; tests substitute an
/// in-memory journal.
#[async_trait]
pub trait JournalCalls {
    async fn post_count(&self) -> Result<u64, Error>;

    async fn post_at(&self, index: u64) -> Result<Post, Error>;

    /// Submits the post and waits for on-chain confirmation.
    async fn create_post(&self, title: &str, content: &str) -> Result<(), Error>;
}

/// Fetch the full post list, newest index first: one read per index from
/// `count - 1` down to `0`. A failed read aborts the loop and discards
/// the partial batch.
pub async fn fetch_all<J: JournalCalls>(journal: &J) -> Result<Vec<Post>, Error> {
    let count = journal.post_count().await?;
    let mut posts = Vec::with_capacity(count as usize);
    for index in (0..count).rev() {
        posts.push(journal.post_at(index).await?);
    }
    Ok(posts)
}
