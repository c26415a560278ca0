use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haozpay_sign::{PrivateKey, SignScheme};

use super::{read_input, read_params};

/**
    Sign a parameter set and print the base64 signature.
*/
#[derive(Args)]
pub struct SignCommand {
    /// JSON object of parameters (`-` for stdin).
    #[arg(short, long)]
    pub params: PathBuf,

    /// RSA private key file (PKCS#1 or PKCS#8, PEM or bare base64).
    #[arg(short, long)]
    pub key: PathBuf,

    /// Signing scheme, `standard` or `raw-exponentiation` (outbound default).
    #[arg(short, long, default_value = "raw-exponentiation")]
    pub scheme: SignScheme,
}

impl SignCommand {
    pub fn run(self) -> Result<()> {
        let params = read_params(&self.params)?;
        let key_text = read_input(&self.key)?;
        let key = PrivateKey::from_text(&key_text).context("failed to load private key")?;
        let signature =
            haozpay_sign::sign_params(&params, &key, self.scheme).context("signing failed")?;
        tracing::info!(scheme = %self.scheme, bytes = signature.len(), "signed parameters");
        println!("{signature}");
        Ok(())
    }
}
