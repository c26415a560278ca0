use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

const DEFAULT_FILTER: &str = "haozpay_cli=info,haozpay_sign=warn";
const VERBOSE_FILTER: &str = "haozpay_cli=debug,haozpay_sign=debug";

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let default = if cli.verbose() {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.run()
}
