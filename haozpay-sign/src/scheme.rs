use core::fmt;
use core::str::FromStr;

use rsa::Pkcs1v15Sign;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::canonical::canonicalize;
use crate::crypto::{encode_block_type1, rsa_private_transform};
use crate::digest::Digest;
use crate::error::{ParseError, SignResult};
use crate::key::PrivateKey;
use crate::params::ParameterSet;
use crate::signature::Signature;

/**
    How a digest is turned into a signature.

    The scheme is always chosen explicitly, per direction, and the verifier
    for a signature must use the same scheme that produced it.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignScheme {
    /**
        Conventional RSASSA-PKCS1-v1_5 with SHA-256 over the raw 32-byte
        digest (DigestInfo prefix included).
    */
    Standard,
    /**
        Private-key "encryption" of the 64-byte lowercase hex digest text:
        block type 1 padding followed by `m^d mod n`, with no DigestInfo.
        Byte-compatible with Hutool's `encryptBase64(data, KeyType.PrivateKey)`.
    */
    #[serde(alias = "raw")]
    RawExponentiation,
}

impl SignScheme {
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("standard") {
            Some(Self::Standard)
        } else if name.eq_ignore_ascii_case("raw") || name.eq_ignore_ascii_case("raw-exponentiation")
        {
            Some(Self::RawExponentiation)
        } else {
            None
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::RawExponentiation => "raw-exponentiation",
        }
    }

    /**
        Sign a digest with this scheme.
    */
    pub fn sign(self, digest: &Digest, key: &PrivateKey) -> SignResult<Signature> {
        let bytes = match self {
            Self::Standard => key
                .as_rsa()
                .sign(Pkcs1v15Sign::new::<Sha256>(), digest.as_bytes())?,
            Self::RawExponentiation => {
                let em = encode_block_type1(&digest.hex_bytes(), key.size())?;
                rsa_private_transform(key.as_rsa(), &em)?
            }
        };
        Ok(Signature::from_bytes(bytes))
    }
}

impl fmt::Display for SignScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for SignScheme {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseError {
            kind: "signing scheme",
            value: s.to_owned(),
        })
    }
}

/**
    Canonicalize, digest and sign a parameter set with an already parsed key.
*/
pub fn sign_params(
    params: &ParameterSet,
    key: &PrivateKey,
    scheme: SignScheme,
) -> SignResult<Signature> {
    let canonical = canonicalize(params);
    let digest = Digest::of(&canonical);
    tracing::debug!(
        %scheme,
        canonical_len = canonical.as_str().len(),
        digest = %digest.to_hex(),
        "signing parameter set"
    );
    scheme.sign(&digest, key)
}

/**
    Sign a parameter set with a private key given as text.

    The key is parsed on every call. Callers signing repeatedly should parse
    once with [`PrivateKey::from_text`] and use [`sign_params`].
*/
pub fn sign(
    params: &ParameterSet,
    private_key: &str,
    scheme: SignScheme,
) -> SignResult<Signature> {
    let key = PrivateKey::from_text(private_key)?;
    sign_params(params, &key, scheme)
}
