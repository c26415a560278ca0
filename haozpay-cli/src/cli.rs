use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    CallbackCommand, CanonicalizeCommand, DigestCommand, EnvelopeCommand, SignCommand,
    VerifyCommand,
};

/**
    HaozPay request signing tool.
*/
#[derive(Parser)]
#[command(name = "haozpay")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the canonical string of a parameter set.
    Canonicalize(CanonicalizeCommand),
    /// Print the SHA-256 digest of a parameter set's canonical string.
    Digest(DigestCommand),
    /// Sign a parameter set.
    Sign(SignCommand),
    /// Verify a signature over a parameter set.
    Verify(VerifyCommand),
    /// Build and sign an outbound request body.
    Envelope(EnvelopeCommand),
    /// Verify an inbound callback payload.
    Callback(CallbackCommand),
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Canonicalize(cmd) => cmd.run(),
            Command::Digest(cmd) => cmd.run(),
            Command::Sign(cmd) => cmd.run(),
            Command::Verify(cmd) => cmd.run(),
            Command::Envelope(cmd) => cmd.run(),
            Command::Callback(cmd) => cmd.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_sign_with_scheme() {
        let cli = Cli::try_parse_from([
            "haozpay", "sign", "--params", "p.json", "--key", "k.pem", "--scheme", "standard",
        ])
        .unwrap();
        assert!(!cli.verbose());
        assert!(matches!(cli.command, Command::Sign(_)));
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["haozpay", "digest", "-v", "--params", "-"]).unwrap();
        assert!(cli.verbose());
    }

    #[test]
    fn rejects_unknown_scheme() {
        let result = Cli::try_parse_from([
            "haozpay", "sign", "--params", "p.json", "--key", "k.pem", "--scheme", "pss",
        ]);
        assert!(result.is_err());
    }
}
