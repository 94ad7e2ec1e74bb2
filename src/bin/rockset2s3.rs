use clap::Parser;
use rockset2s3::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    // Diagnostics only; the generated script (and the API key inside it)
    // never goes to the log stream.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::execute_export(cli)?;

    Ok(())
}
