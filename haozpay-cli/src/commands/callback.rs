use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haozpay_sign::RequestSigner;

use super::{read_config, read_json};

/**
    Verify an inbound callback with the platform public key and the
    configured inbound scheme.
*/
#[derive(Args)]
pub struct CallbackCommand {
    /// Signer configuration (YAML) with `platform_public_key` set.
    #[arg(short, long)]
    pub config: PathBuf,

    /// Callback payload, a JSON object carrying `sign` (`-` for stdin).
    #[arg(short, long)]
    pub payload: PathBuf,
}

impl CallbackCommand {
    pub fn run(self) -> Result<()> {
        let config = read_config(&self.config)?;
        let signer = RequestSigner::from_config(&config).context("failed to build signer")?;
        let payload = read_json(&self.payload)?;
        signer
            .verify_callback(&payload)
            .context("callback verification failed")?;
        tracing::info!(scheme = %signer.inbound_scheme(), "callback verified");
        println!("OK");
        Ok(())
    }
}
