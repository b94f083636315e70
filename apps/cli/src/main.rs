use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ethers::types::Address;
use itertools::Itertools;
use quill::{
    Blog, Draft, EnvKeyWallet, JournalSession, LogNotify, ProfileStore, WalletProvider,
};
use tracing_subscriber::EnvFilter;

/// One or more signing keys, comma separated. The CLI-world equivalent
/// of an installed wallet extension: unset means "no provider".
const PRIVATE_KEY_VAR: &str = "QUILL_PRIVATE_KEY";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long)]
    rpc_url: Option<String>,

    #[arg(long)]
    journal_address: String,

    #[arg(long)]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authorize a wallet account and cache it for later commands.
    Connect,
    /// Publish a new post through the journal contract.
    Post {
        #[arg(long)]
        title: String,

        #[arg(long)]
        content: String,
    },
    /// Fetch and print every post, newest first.
    List,
    /// Show the cached account, if any.
    Status,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let rpc_url = cli.rpc_url.unwrap_or("http://localhost:8547".to_owned());
    let journal_address: Address = cli.journal_address.parse()?;

    let store = ProfileStore::new(cli.profile.unwrap_or_else(ProfileStore::default_path));
    let wallet = EnvKeyWallet::from_env(PRIVATE_KEY_VAR);
    let notify = LogNotify::default();
    let mut blog = Blog::<JournalSession>::new();

    match cli.command {
        Command::Connect => {
            let account = blog.connect_wallet(wallet.as_ref(), &store, &notify)?;
            println!("Connected as {account:?}");
            println!("Run `quill --journal-address {journal_address:?} list` to read the journal.");
        }
        Command::Status => match store.load()? {
            Some(profile) => println!("Connected as {:?}", profile.account),
            None => println!("Not connected. Run `quill connect` first."),
        },
        Command::List => {
            open(&mut blog, &store, wallet.as_ref(), &rpc_url, journal_address, &notify).await?;
            if !blog.is_ready() {
                eyre::bail!("no wallet session; run `quill connect` and set {PRIVATE_KEY_VAR}");
            }
            blog.refresh(&notify).await?;
            print_posts(&blog);
        }
        Command::Post { title, content } => {
            open(&mut blog, &store, wallet.as_ref(), &rpc_url, journal_address, &notify).await?;
            blog.draft = Draft::new(title, content);
            blog.submit(&notify).await?;
            print_posts(&blog);
        }
    }

    Ok(())
}

/// Restore the cached account and open the contract session, mirroring
/// what the blog page does on load.
async fn open(
    blog: &mut Blog<JournalSession>,
    store: &ProfileStore,
    wallet: Option<&EnvKeyWallet>,
    rpc_url: &str,
    journal_address: Address,
    notify: &LogNotify,
) -> eyre::Result<()> {
    blog.restore_account(store.load()?, notify);
    blog.open_session(
        wallet,
        |wallet, account| async move {
            let signer = wallet.signer_for(account)?;
            JournalSession::connect(rpc_url, signer, journal_address).await
        },
        notify,
    )
    .await;
    Ok(())
}

fn print_posts(blog: &Blog<JournalSession>) {
    if blog.posts().is_empty() {
        println!("No posts yet. Be the first to create one!");
        return;
    }
    let rendered = blog
        .posts()
        .iter()
        .map(|post| {
            format!(
                "#{} {}\n{}\nBy: {:?}\nOn: {}",
                post.index,
                post.title,
                post.content,
                post.author,
                post.published_at()
            )
        })
        .join("\n\n");
    println!("{rendered}");
}
