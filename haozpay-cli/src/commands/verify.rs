use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use haozpay_sign::{PublicKey, SIGN_FIELD, SignScheme, Signature};

use super::{read_input, read_params};

/**
    Verify a signature over a parameter set. Prints `OK` on success and
    exits with an error otherwise.
*/
#[derive(Args)]
pub struct VerifyCommand {
    /// JSON object of parameters (`-` for stdin).
    #[arg(short, long)]
    pub params: PathBuf,

    /// RSA public key file (SPKI, PEM or bare base64).
    #[arg(short, long)]
    pub key: PathBuf,

    /// Base64 signature. Defaults to the `sign` field of the parameters.
    #[arg(long)]
    pub signature: Option<String>,

    /// Signing scheme, `standard` or `raw-exponentiation` (callback default).
    #[arg(short, long, default_value = "standard")]
    pub scheme: SignScheme,
}

impl VerifyCommand {
    pub fn run(self) -> Result<()> {
        let params = read_params(&self.params)?;
        let encoded = match self.signature {
            Some(sig) => sig,
            None => params
                .get(SIGN_FIELD)
                .and_then(|v| v.render())
                .context("no --signature given and no `sign` field in parameters")?,
        };
        let key_text = read_input(&self.key)?;
        let key = PublicKey::from_text(&key_text).context("failed to load public key")?;
        let signature = Signature::from_base64(&encoded).context("failed to decode signature")?;
        haozpay_sign::verify_params(&params, &signature, &key, self.scheme)
            .context("verification failed")?;
        println!("OK");
        Ok(())
    }
}
