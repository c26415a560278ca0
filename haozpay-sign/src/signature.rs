use core::fmt;

use crate::error::{SignError, SignResult};

/**
    An RSA signature, as many bytes as the signing key's modulus.
    Travels as standard base64 (with padding) in the `sign` field.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    /**
        Decode a base64 signature. Surrounding whitespace is ignored.
    */
    pub fn from_base64(text: &str) -> SignResult<Self> {
        data_encoding::BASE64
            .decode(text.trim().as_bytes())
            .map(Self)
            .map_err(|e| SignError::SignatureFormat(format!("invalid base64: {e}")))
    }

    pub fn to_base64(&self) -> String {
        data_encoding::BASE64.encode(&self.0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}
