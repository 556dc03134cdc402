use std::io::{self, BufRead, Write};

use todo_app::command::{self, HELP};
use todo_app::config::{Config, DEFAULT_LOG_FILTER};
use todo_app::transport::UreqTransport;
use todo_app::{execute, Flow};
use todo_core::{ApiClient, Store};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    info!(base_url = %config.base_url, "starting");

    let mut store = Store::new(ApiClient::new(&config.base_url), UreqTransport::new());
    if let Err(err) = store.load() {
        warn!(error = %err, "initial load incomplete");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", store.view())?;
    writeln!(out, "type `help` for commands")?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };
        match execute(&mut store, command) {
            Flow::Quit => break,
            Flow::Help => writeln!(out, "{HELP}")?,
            Flow::Render => writeln!(out, "{}", store.view())?,
        }
        out.flush()?;
    }

    info!("bye");
    Ok(())
}
