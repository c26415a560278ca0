use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{SignError, SignResult};
use crate::scheme::SignScheme;

/**
    Merchant credentials and scheme selection for a [`RequestSigner`].

    Keys are held as text, exactly as provisioned (PEM or bare base64), and
    only parsed when a signer is built. The scheme is fixed per direction:
    outbound requests default to raw exponentiation, inbound callbacks to
    standard PKCS#1 v1.5.

    [`RequestSigner`]: crate::RequestSigner
*/
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    pub merchant_no: String,
    pub private_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_public_key: Option<String>,
    #[serde(default = "default_outbound_scheme")]
    pub outbound_scheme: SignScheme,
    #[serde(default = "default_inbound_scheme")]
    pub inbound_scheme: SignScheme,
}

fn default_outbound_scheme() -> SignScheme {
    SignScheme::RawExponentiation
}

fn default_inbound_scheme() -> SignScheme {
    SignScheme::Standard
}

impl SignerConfig {
    pub fn new(merchant_no: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            merchant_no: merchant_no.into(),
            private_key: private_key.into(),
            platform_public_key: None,
            outbound_scheme: default_outbound_scheme(),
            inbound_scheme: default_inbound_scheme(),
        }
    }

    pub fn with_platform_public_key(mut self, key: impl Into<String>) -> Self {
        self.platform_public_key = Some(key.into());
        self
    }

    pub fn with_outbound_scheme(mut self, scheme: SignScheme) -> Self {
        self.outbound_scheme = scheme;
        self
    }

    pub fn with_inbound_scheme(mut self, scheme: SignScheme) -> Self {
        self.inbound_scheme = scheme;
        self
    }

    /**
        Parse a configuration from YAML and validate it.
    */
    pub fn from_yaml(text: &str) -> SignResult<Self> {
        let config: Self = serde_yaml::from_str(text)
            .map_err(|e| SignError::InvalidConfig(format!("yaml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /**
        Check that the mandatory fields are present. Key text is not parsed
        here; that happens when the signer is built.
    */
    pub fn validate(&self) -> SignResult<()> {
        if self.merchant_no.trim().is_empty() {
            return Err(SignError::InvalidConfig("merchant_no is empty".into()));
        }
        if self.private_key.trim().is_empty() {
            return Err(SignError::InvalidConfig("private_key is empty".into()));
        }
        if self
            .platform_public_key
            .as_deref()
            .is_some_and(|key| key.trim().is_empty())
        {
            return Err(SignError::InvalidConfig(
                "platform_public_key is present but empty".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for SignerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignerConfig")
            .field("merchant_no", &self.merchant_no)
            .field("private_key", &"<redacted>")
            .field(
                "platform_public_key",
                &self.platform_public_key.as_ref().map(|_| "<set>"),
            )
            .field("outbound_scheme", &self.outbound_scheme)
            .field("inbound_scheme", &self.inbound_scheme)
            .finish()
    }
}
