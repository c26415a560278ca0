use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use super::read_params;

/**
    Print the canonical string of a parameter set.
*/
#[derive(Args)]
pub struct CanonicalizeCommand {
    /// JSON object of parameters (`-` for stdin).
    #[arg(short, long)]
    pub params: PathBuf,
}

impl CanonicalizeCommand {
    pub fn run(self) -> Result<()> {
        let params = read_params(&self.params)?;
        println!("{}", haozpay_sign::canonicalize(&params));
        Ok(())
    }
}
