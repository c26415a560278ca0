use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use haozpay_sign::Digest;

use super::read_params;

/**
    Print the lowercase hex SHA-256 of a parameter set's canonical string.
*/
#[derive(Args)]
pub struct DigestCommand {
    /// JSON object of parameters (`-` for stdin).
    #[arg(short, long)]
    pub params: PathBuf,
}

impl DigestCommand {
    pub fn run(self) -> Result<()> {
        let params = read_params(&self.params)?;
        let canonical = haozpay_sign::canonicalize(&params);
        tracing::debug!(canonical = %canonical, "canonical string");
        println!("{}", Digest::of(&canonical).to_hex());
        Ok(())
    }
}
