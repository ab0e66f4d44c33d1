use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::store::{SqlStore, Store};
use clap::{ArgAction, Parser};
use eyre::WrapErr;
use std::path::PathBuf;
use tracing::{Level, info};

mod command;
mod config;
mod dispatch;
mod display;
mod errors;
mod model;
mod store;

#[derive(Parser)]
#[command(version, about)]
struct Options {
    #[arg(short, long, value_name = "FILE", help = "Use FILE instead of hbdb.toml")]
    config: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "URL",
        env = "HBDB_DATABASE_URL",
        help = "Database URL, overriding the configuration file"
    )]
    database_url: Option<String>,
    #[arg(short, action = ArgAction::Count, help = "Set verbosity level")]
    verbose: u8,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let options = Options::parse();
    let level = match options.verbose {
        0 => Level::ERROR,
        1 => Level::WARN,
        2 => Level::INFO,
        3 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    let config = Config::load_or_default(options.config.as_deref())?;
    let url = config.database_url(options.database_url);
    let store = SqlStore::connect(&url)
        .await
        .wrap_err_with(|| format!("cannot connect to database {url}"))?;
    info!(url = url.as_str(), "connected");
    let mut dispatcher = Dispatcher::new(store);
    let result = dispatcher
        .run(tokio::io::BufReader::new(tokio::io::stdin()), &mut std::io::stdout())
        .await;
    let closed = dispatcher.into_store().close().await;
    session_outcome(result, closed)
}

/// A failure of the session itself takes precedence over a failure to close
/// the connection afterwards.
fn session_outcome(result: eyre::Result<()>, closed: Result<(), sqlx::Error>) -> eyre::Result<()> {
    result.and(closed.wrap_err("cannot close database connection"))
}

#[test]
fn test_session_outcome() {
    let closed = || Err(sqlx::Error::PoolClosed);
    let err = session_outcome(Err(eyre::eyre!("terminal is gone")), closed()).unwrap_err();
    assert_eq!(err.to_string(), "terminal is gone");
    let err = session_outcome(Ok(()), closed()).unwrap_err();
    assert_eq!(err.to_string(), "cannot close database connection");
    assert!(session_outcome(Ok(()), Ok(())).is_ok());
}
