// expense - keeps track of what you spent
//
// This is the main entry point. Parses CLI args and dispatches to the tracker.

use expense_tracker_lib::{
    config::Config,
    core::{dispatcher, Command, Dispatcher, Tracker},
    Database, Result,
};
use std::env;
use std::io;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();

    let command = match Command::parse(args.as_slice()) {
        Ok(command) => command,
        Err(e) if e.is_usage() => {
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
        Err(e) => return Err(e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !command.needs_database() {
        dispatcher::print_usage(&mut out)?;
        return Ok(());
    }

    let config = Config::from_env()?;
    let db = Database::new(&config).await?;
    let dispatcher = Dispatcher::new(Tracker::new(db));

    let stdin = io::stdin();
    let mut input = stdin.lock();
    dispatcher.run(&command, &mut input, &mut out).await?;

    dispatcher.tracker().database().close().await;
    Ok(())
}

// Logs go to stderr so the report on stdout stays clean
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
