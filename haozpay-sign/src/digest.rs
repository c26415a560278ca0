use sha2::{Digest as _, Sha256};

use crate::canonical::CanonicalString;

/**
    SHA-256 digest of a canonical string.

    Exposed in two forms because the two signing schemes consume different ones:
      - [`Digest::as_bytes`]: the raw 32 bytes (standard PKCS#1 v1.5 signing)
      - [`Digest::hex_bytes`]: the 64-character lowercase hex rendering,
        re-encoded as ASCII bytes (raw exponentiation)
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest {
    raw: [u8; 32],
}

impl Digest {
    /**
        Digest the UTF-8 bytes of a canonical string in a single SHA-256 pass.
    */
    pub fn of(canonical: &CanonicalString) -> Self {
        Self::of_bytes(canonical.as_bytes())
    }

    pub fn of_bytes(data: &[u8]) -> Self {
        Self {
            raw: Sha256::digest(data).into(),
        }
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.raw
    }

    /**
        Lowercase hex text of the digest, always 64 characters.
    */
    pub fn to_hex(&self) -> String {
        hex::encode(self.raw)
    }

    /**
        The hex text as bytes, the payload of a raw-exponentiation signature.
    */
    pub fn hex_bytes(&self) -> Vec<u8> {
        self.to_hex().into_bytes()
    }
}
