use thiserror::Error;

/**
    Errors from canonicalization, key loading, signing and verification.

    No variant ever carries key text. Key parse failures only describe
    which structure was rejected.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignError {
    // ── Key material ──────────────────────────────────────────────────
    #[error("invalid key material: {0}")]
    KeyFormat(String),

    // ── Block type 1 encoding ─────────────────────────────────────────
    #[error("message of {len} bytes exceeds RSA capacity of {max} bytes")]
    MessageTooLong { len: usize, max: usize },
    #[error("padding string of {len} bytes is shorter than the required {min} bytes")]
    PaddingTooShort { len: usize, min: usize },

    // ── RSA ───────────────────────────────────────────────────────────
    #[error("RSA operation failed: {0}")]
    RsaOperation(String),

    // ── Signatures ────────────────────────────────────────────────────
    #[error("malformed signature: {0}")]
    SignatureFormat(String),
    #[error("signature verification failed")]
    SignatureMismatch,

    // ── Configuration / payloads ──────────────────────────────────────
    #[error("invalid signer configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid callback payload: {0}")]
    InvalidPayload(String),
}

impl From<rsa::Error> for SignError {
    fn from(e: rsa::Error) -> Self {
        Self::RsaOperation(e.to_string())
    }
}

/**
    Error returned by `FromStr` implementations on enum types.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseError {
    pub kind: &'static str,
    pub value: String,
}

/**
    Type alias for results that may return a [`SignError`].
*/
pub type SignResult<T> = std::result::Result<T, SignError>;
