mod canonical;
mod config;
mod constants;
mod digest;
mod error;
mod key;
mod params;
mod request;
mod scheme;
mod signature;
mod verify;

pub mod crypto;

pub use self::canonical::{CanonicalString, canonicalize};
pub use self::config::SignerConfig;
pub use self::constants::SIGN_FIELD;
pub use self::digest::Digest;
pub use self::error::{ParseError, SignError, SignResult};
pub use self::key::{PrivateKey, PublicKey};
pub use self::params::{ParamValue, ParameterSet};
pub use self::request::{RequestSigner, SignedRequest, current_timestamp_millis};
pub use self::scheme::{SignScheme, sign, sign_params};
pub use self::signature::Signature;
pub use self::verify::{verify, verify_digest, verify_params};
