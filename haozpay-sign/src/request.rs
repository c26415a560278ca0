use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::SignerConfig;
use crate::constants::SIGN_FIELD;
use crate::error::{SignError, SignResult};
use crate::key::{PrivateKey, PublicKey};
use crate::params::ParameterSet;
use crate::scheme::{SignScheme, sign_params};
use crate::signature::Signature;
use crate::verify::verify_params;

/**
    Milliseconds since the Unix epoch, as carried in the `timestamp` field.
*/
pub fn current_timestamp_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/**
    The outbound request body: the three signed fields plus the signature.

    `biz_body` is the business payload already serialized to JSON text; it
    is signed as that exact string.
*/
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedRequest {
    pub merchant_no: String,
    pub timestamp: i64,
    pub biz_body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<String>,
}

impl SignedRequest {
    pub fn new(merchant_no: impl Into<String>, timestamp: i64, biz_body: impl Into<String>) -> Self {
        Self {
            merchant_no: merchant_no.into(),
            timestamp,
            biz_body: biz_body.into(),
            sign: None,
        }
    }

    /**
        The fields covered by the signature. `sign` itself is never included.
    */
    pub fn params(&self) -> ParameterSet {
        ParameterSet::new()
            .with("merchantNo", self.merchant_no.as_str())
            .with("timestamp", self.timestamp)
            .with("bizBody", self.biz_body.as_str())
    }

    /**
        Sign the envelope in place, replacing any previous signature.
    */
    pub fn sign_with(&mut self, key: &PrivateKey, scheme: SignScheme) -> SignResult<()> {
        let signature = sign_params(&self.params(), key, scheme)?;
        self.sign = Some(signature.to_base64());
        Ok(())
    }

    pub fn to_json(&self) -> SignResult<String> {
        serde_json::to_string(self).map_err(|e| SignError::InvalidPayload(e.to_string()))
    }
}

/**
    Merchant-side signer holding parsed keys.

    Building one parses the configured keys once; every request and
    callback afterwards reuses them.
*/
#[derive(Debug, Clone)]
pub struct RequestSigner {
    merchant_no: String,
    private_key: PrivateKey,
    platform_key: Option<PublicKey>,
    outbound_scheme: SignScheme,
    inbound_scheme: SignScheme,
}

impl RequestSigner {
    pub fn from_config(config: &SignerConfig) -> SignResult<Self> {
        config.validate()?;
        let private_key = PrivateKey::from_text(&config.private_key)?;
        let platform_key = config
            .platform_public_key
            .as_deref()
            .map(PublicKey::from_text)
            .transpose()?;
        tracing::debug!(
            merchant_no = %config.merchant_no,
            outbound = %config.outbound_scheme,
            inbound = %config.inbound_scheme,
            platform_key = platform_key.is_some(),
            "request signer ready"
        );
        Ok(Self {
            merchant_no: config.merchant_no.clone(),
            private_key,
            platform_key,
            outbound_scheme: config.outbound_scheme,
            inbound_scheme: config.inbound_scheme,
        })
    }

    pub fn merchant_no(&self) -> &str {
        &self.merchant_no
    }

    pub fn outbound_scheme(&self) -> SignScheme {
        self.outbound_scheme
    }

    pub fn inbound_scheme(&self) -> SignScheme {
        self.inbound_scheme
    }

    /**
        Build and sign an envelope for `biz_body` stamped with the current time.
    */
    pub fn sign_biz_body(&self, biz_body: &str) -> SignResult<SignedRequest> {
        self.sign_biz_body_at(biz_body, current_timestamp_millis())
    }

    /**
        Build and sign an envelope with an explicit timestamp in milliseconds.
    */
    pub fn sign_biz_body_at(&self, biz_body: &str, timestamp: i64) -> SignResult<SignedRequest> {
        let mut request = SignedRequest::new(self.merchant_no.as_str(), timestamp, biz_body);
        request.sign_with(&self.private_key, self.outbound_scheme)?;
        Ok(request)
    }

    /**
        Serialize `biz` to compact JSON and sign it as the business body.
    */
    pub fn sign_biz<T: Serialize>(&self, biz: &T) -> SignResult<SignedRequest> {
        let body = serde_json::to_string(biz).map_err(|e| SignError::InvalidPayload(e.to_string()))?;
        self.sign_biz_body(&body)
    }

    /**
        Verify an inbound callback: every field except `sign` is covered,
        with the platform public key and the inbound scheme.
    */
    pub fn verify_callback(&self, payload: &Value) -> SignResult<()> {
        let key = self.platform_key.as_ref().ok_or_else(|| {
            SignError::InvalidConfig("platform_public_key is required to verify callbacks".into())
        })?;
        let object = payload
            .as_object()
            .ok_or_else(|| SignError::InvalidPayload("expected a JSON object".into()))?;
        let signature = match object.get(SIGN_FIELD) {
            Some(Value::String(s)) if !s.trim().is_empty() => Signature::from_base64(s)?,
            Some(_) => {
                return Err(SignError::InvalidPayload(
                    "`sign` must be a non-empty string".into(),
                ));
            }
            None => return Err(SignError::InvalidPayload("missing `sign` field".into())),
        };
        let params = ParameterSet::from_json(payload)?;
        verify_params(&params, &signature, key, self.inbound_scheme)
    }
}
