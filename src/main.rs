use anyhow::Result;
use clap::Parser;
use dirtree::{tree, Options};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Options::parse();
    init_logging();

    tracing::debug!(?cli, "parsed options");
    let rendered = tree(&cli)?;

    io::stdout().write_all(rendered.as_bytes())?;
    Ok(())
}

/// Log to stderr so stdout only ever carries the tree.
fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dirtree=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
