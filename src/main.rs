use std::io;

use tracing_subscriber::EnvFilter;

use shelfpick::catalog::load_catalog;
use shelfpick::config::Config;
use shelfpick::session::run_session;

fn main() -> anyhow::Result<()> {
    // Log to stderr so stdout stays the interactive surface
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env()?;

    // A load failure is recoverable: report it and continue with whatever
    // rows made it in before the error (possibly none).
    let mut catalog = Vec::new();
    if let Err(e) = load_catalog(&config.catalog_path, &mut catalog) {
        eprintln!("{}", e);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), &catalog)?;

    Ok(())
}
