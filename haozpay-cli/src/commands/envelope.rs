use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haozpay_sign::RequestSigner;

use super::read_config;

/**
    Build and sign an outbound request body with the configured merchant
    key and outbound scheme.
*/
#[derive(Args)]
pub struct EnvelopeCommand {
    /// Signer configuration (YAML).
    #[arg(short, long)]
    pub config: PathBuf,

    /// Business payload as JSON text. Signed exactly as given.
    #[arg(short, long)]
    pub biz_body: String,

    /// Timestamp in milliseconds. Defaults to now.
    #[arg(short, long)]
    pub timestamp: Option<i64>,
}

impl EnvelopeCommand {
    pub fn run(self) -> Result<()> {
        let config = read_config(&self.config)?;
        let signer = RequestSigner::from_config(&config).context("failed to build signer")?;
        serde_json::from_str::<serde_json::Value>(&self.biz_body)
            .context("biz body is not valid JSON")?;

        let request = match self.timestamp {
            Some(ts) => signer.sign_biz_body_at(&self.biz_body, ts),
            None => signer.sign_biz_body(&self.biz_body),
        }
        .context("signing failed")?;

        tracing::info!(
            merchant_no = %request.merchant_no,
            timestamp = request.timestamp,
            scheme = %signer.outbound_scheme(),
            "request signed"
        );
        println!("{}", request.to_json()?);
        Ok(())
    }
}
