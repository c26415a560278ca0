use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use haozpay_sign::{ParameterSet, SignerConfig};

mod callback;
mod canonicalize;
mod digest;
mod envelope;
mod sign;
mod verify;

pub use self::callback::CallbackCommand;
pub use self::canonicalize::CanonicalizeCommand;
pub use self::digest::DigestCommand;
pub use self::envelope::EnvelopeCommand;
pub use self::sign::SignCommand;
pub use self::verify::VerifyCommand;

/**
    Read a file as text, or stdin when the path is `-`.
*/
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn read_json(path: &Path) -> Result<serde_json::Value> {
    let text = read_input(path)?;
    serde_json::from_str(&text).with_context(|| format!("invalid JSON in {}", path.display()))
}

fn read_params(path: &Path) -> Result<ParameterSet> {
    let value = read_json(path)?;
    ParameterSet::from_json(&value).context("parameters must be a JSON object")
}

fn read_config(path: &Path) -> Result<SignerConfig> {
    let text = read_input(path)?;
    SignerConfig::from_yaml(&text).with_context(|| format!("invalid config {}", path.display()))
}
