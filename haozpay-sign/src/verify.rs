use rsa::Pkcs1v15Sign;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::canonical::canonicalize;
use crate::crypto::{decode_block_type1, rsa_public_transform};
use crate::digest::Digest;
use crate::error::{SignError, SignResult};
use crate::key::PublicKey;
use crate::params::ParameterSet;
use crate::scheme::SignScheme;
use crate::signature::Signature;

/**
    Check a signature over a digest with the procedure matching `scheme`.

    - Standard: RSASSA-PKCS1-v1_5 verification against the raw digest.
    - RawExponentiation: recover `c^e mod n`, strip block type 1 padding
      and compare the payload with the hex digest text in constant time.

    A signature that is not exactly as long as the modulus fails with
    [`SignError::SignatureFormat`]. Every cryptographic mismatch, including
    malformed padding, fails with [`SignError::SignatureMismatch`].
*/
pub fn verify_digest(
    scheme: SignScheme,
    digest: &Digest,
    signature: &Signature,
    key: &PublicKey,
) -> SignResult<()> {
    let k = key.size();
    if signature.len() != k {
        return Err(SignError::SignatureFormat(format!(
            "expected {k} bytes, got {}",
            signature.len()
        )));
    }

    let valid = match scheme {
        SignScheme::Standard => key
            .as_rsa()
            .verify(
                Pkcs1v15Sign::new::<Sha256>(),
                digest.as_bytes(),
                signature.as_bytes(),
            )
            .is_ok(),
        SignScheme::RawExponentiation => match rsa_public_transform(key.as_rsa(), signature.as_bytes())
        {
            Ok(em) => match decode_block_type1(&em, k) {
                Ok(payload) => bool::from(payload.ct_eq(&digest.hex_bytes())),
                Err(_) => false,
            },
            Err(_) => false,
        },
    };

    if valid {
        Ok(())
    } else {
        tracing::warn!(%scheme, "signature verification failed");
        Err(SignError::SignatureMismatch)
    }
}

/**
    Recompute the canonical string and digest of `params` and check
    `signature` against them. The digest is never taken from the caller.
*/
pub fn verify_params(
    params: &ParameterSet,
    signature: &Signature,
    key: &PublicKey,
    scheme: SignScheme,
) -> SignResult<()> {
    let canonical = canonicalize(params);
    let digest = Digest::of(&canonical);
    tracing::debug!(
        %scheme,
        canonical_len = canonical.as_str().len(),
        digest = %digest.to_hex(),
        "verifying parameter set"
    );
    verify_digest(scheme, &digest, signature, key)
}

/**
    Verify a base64 signature over `params` with a public key given as text.
    The key is parsed on every call.
*/
pub fn verify(
    params: &ParameterSet,
    signature: &str,
    public_key: &str,
    scheme: SignScheme,
) -> SignResult<()> {
    let key = PublicKey::from_text(public_key)?;
    let signature = Signature::from_base64(signature)?;
    verify_params(params, &signature, &key, scheme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{encode_block_type1, rsa_private_transform};
    use crate::key::PrivateKey;
    use crate::params::ParamValue;
    use crate::scheme::{sign, sign_params};
    use proptest::prelude::*;

    const PKCS1_PEM: &str = include_str!("../testfiles/rsa2048_pkcs1.pem");
    const PUBLIC_PEM: &str = include_str!("../testfiles/rsa2048_pub.pem");
    const RSA512_PUBLIC_PEM: &str = include_str!("../testfiles/rsa512_pub.pem");

    const SCHEMES: [SignScheme; 2] = [SignScheme::Standard, SignScheme::RawExponentiation];

    fn scenario() -> ParameterSet {
        ParameterSet::new()
            .with("merchantNo", "HZ1")
            .with("timestamp", 1_700_000_000_000i64)
            .with("bizBody", r#"{"a":1}"#)
    }

    #[test]
    fn round_trip_both_schemes() {
        for scheme in SCHEMES {
            let sig = sign(&scenario(), PKCS1_PEM, scheme).unwrap();
            verify(&scenario(), &sig.to_base64(), PUBLIC_PEM, scheme).unwrap();
        }
    }

    #[test]
    fn sign_field_does_not_affect_verification() {
        let sig = sign(&scenario(), PKCS1_PEM, SignScheme::RawExponentiation).unwrap();
        let received = scenario().with("sign", sig.to_base64());
        verify(&received, &sig.to_base64(), PUBLIC_PEM, SignScheme::RawExponentiation).unwrap();
    }

    #[test]
    fn schemes_are_not_interchangeable() {
        let raw = sign(&scenario(), PKCS1_PEM, SignScheme::RawExponentiation).unwrap();
        let err = verify(&scenario(), &raw.to_base64(), PUBLIC_PEM, SignScheme::Standard);
        assert_eq!(err, Err(SignError::SignatureMismatch));

        let standard = sign(&scenario(), PKCS1_PEM, SignScheme::Standard).unwrap();
        let err = verify(
            &scenario(),
            &standard.to_base64(),
            PUBLIC_PEM,
            SignScheme::RawExponentiation,
        );
        assert_eq!(err, Err(SignError::SignatureMismatch));
    }

    #[test]
    fn every_bit_flip_is_detected() {
        let key = PrivateKey::from_text(PKCS1_PEM).unwrap();
        let public = key.to_public_key();
        for scheme in SCHEMES {
            let sig = sign_params(&scenario(), &key, scheme).unwrap().into_bytes();
            // every byte position, rotating through bit positions
            for i in 0..sig.len() {
                let mut tampered = sig.clone();
                tampered[i] ^= 1 << (i % 8);
                let result =
                    verify_params(&scenario(), &Signature::from_bytes(tampered), &public, scheme);
                assert_eq!(result, Err(SignError::SignatureMismatch), "{scheme} byte {i}");
            }
        }
    }

    #[test]
    fn changed_parameter_is_detected() {
        for scheme in SCHEMES {
            let sig = sign(&scenario(), PKCS1_PEM, scheme).unwrap();
            let mut changed = scenario();
            changed.insert("timestamp", 1_700_000_000_001i64);
            let err = verify(&changed, &sig.to_base64(), PUBLIC_PEM, scheme);
            assert_eq!(err, Err(SignError::SignatureMismatch));

            let added = scenario().with("extra", "1");
            let err = verify(&added, &sig.to_base64(), PUBLIC_PEM, scheme);
            assert_eq!(err, Err(SignError::SignatureMismatch));
        }
    }

    #[test]
    fn ignored_fields_do_not_break_verification() {
        for scheme in SCHEMES {
            let sig = sign(&scenario(), PKCS1_PEM, scheme).unwrap();
            let padded = scenario()
                .with("empty", "")
                .with("blank", "   ")
                .with("absent", ParamValue::Null);
            verify(&padded, &sig.to_base64(), PUBLIC_PEM, scheme).unwrap();
        }
    }

    #[test]
    fn malformed_base64_signature() {
        let err = verify(&scenario(), "%%%", PUBLIC_PEM, SignScheme::Standard).unwrap_err();
        assert!(matches!(err, SignError::SignatureFormat(_)));
    }

    #[test]
    fn wrong_length_signature() {
        for scheme in SCHEMES {
            let err = verify(&scenario(), "AAAA", PUBLIC_PEM, scheme).unwrap_err();
            assert!(matches!(err, SignError::SignatureFormat(_)));
        }
    }

    #[test]
    fn wrong_public_key() {
        let sig = sign(&scenario(), PKCS1_PEM, SignScheme::Standard).unwrap();
        let err = verify(&scenario(), &sig.to_base64(), RSA512_PUBLIC_PEM, SignScheme::Standard);
        assert!(matches!(err, Err(SignError::SignatureFormat(_))));
    }

    #[test]
    fn short_padding_reported_as_mismatch() {
        // hand-build a block whose FF run is only 7 bytes, with the digest
        // text placed so the total is still 256 bytes
        let key = PrivateKey::from_text(PKCS1_PEM).unwrap();
        let digest = Digest::of(&canonicalize(&scenario()));
        let mut em = vec![0x00, 0x01];
        em.extend([0xFF; 7]);
        em.push(0x00);
        em.resize(256 - 64, 0x41);
        em.extend(digest.hex_bytes());
        let forged = rsa_private_transform(key.as_rsa(), &em).unwrap();
        let err = verify_digest(
            SignScheme::RawExponentiation,
            &digest,
            &Signature::from_bytes(forged),
            &key.to_public_key(),
        );
        assert_eq!(err, Err(SignError::SignatureMismatch));
    }

    #[test]
    fn valid_block_with_wrong_payload() {
        let key = PrivateKey::from_text(PKCS1_PEM).unwrap();
        let digest = Digest::of(&canonicalize(&scenario()));
        let em = encode_block_type1(digest.to_hex().to_uppercase().as_bytes(), 256).unwrap();
        let forged = rsa_private_transform(key.as_rsa(), &em).unwrap();
        let err = verify_digest(
            SignScheme::RawExponentiation,
            &digest,
            &Signature::from_bytes(forged),
            &key.to_public_key(),
        );
        assert_eq!(err, Err(SignError::SignatureMismatch));
    }

    #[test]
    #[ignore = "generates a 2048-bit key"]
    fn generated_key_round_trip() {
        let inner = rsa::RsaPrivateKey::new(&mut rand::thread_rng(), 2048).unwrap();
        let key = PrivateKey::from_rsa(inner);
        let public = key.to_public_key();
        assert_eq!(key.size(), 256);
        for scheme in SCHEMES {
            let sig = sign_params(&scenario(), &key, scheme).unwrap();
            assert_eq!(sig.len(), 256);
            verify_params(&scenario(), &sig, &public, scheme).unwrap();

            let mut tampered = sig.into_bytes();
            tampered[128] ^= 0x01;
            let err = verify_params(&scenario(), &Signature::from_bytes(tampered), &public, scheme);
            assert_eq!(err, Err(SignError::SignatureMismatch));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn arbitrary_parameter_sets_round_trip(
            entries in proptest::collection::vec(("[a-zA-Z]{1,6}", "[ -~]{0,16}"), 0..8),
            raw in any::<bool>(),
        ) {
            let scheme = if raw { SignScheme::RawExponentiation } else { SignScheme::Standard };
            let key = PrivateKey::from_text(PKCS1_PEM).unwrap();
            let params: ParameterSet = entries.into_iter().collect();
            let sig = sign_params(&params, &key, scheme).unwrap();
            prop_assert!(verify_params(&params, &sig, &key.to_public_key(), scheme).is_ok());
        }
    }
}
