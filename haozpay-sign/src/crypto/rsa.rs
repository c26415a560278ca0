use rsa::{
    BigUint, RsaPrivateKey, RsaPublicKey,
    traits::{PrivateKeyParts, PublicKeyParts},
};

use crate::error::{SignError, SignResult};

/**
    Apply the private-key transform directly: `c = m^d mod n`.

    `em` is interpreted as a big-endian unsigned integer. The result is
    rendered big-endian and left-padded with zeros to exactly `k` bytes.
    No padding, hashing or blinding is applied here; callers pass an
    already encoded message.
*/
pub fn rsa_private_transform(key: &RsaPrivateKey, em: &[u8]) -> SignResult<Vec<u8>> {
    let k = key.size();
    let m = BigUint::from_bytes_be(em);
    if &m >= key.n() {
        return Err(SignError::RsaOperation(
            "message representative out of range".into(),
        ));
    }
    let c = m.modpow(key.d(), key.n());
    left_pad(&c.to_bytes_be(), k)
}

/**
    Apply the public-key transform: `m = c^e mod n`.

    The signature must be exactly `k` bytes. A representative that is not
    smaller than the modulus can never have been produced by the private
    transform and is reported as a mismatch.
*/
pub fn rsa_public_transform(key: &RsaPublicKey, signature: &[u8]) -> SignResult<Vec<u8>> {
    let k = key.size();
    if signature.len() != k {
        return Err(SignError::SignatureFormat(format!(
            "expected {k} bytes, got {}",
            signature.len()
        )));
    }
    let c = BigUint::from_bytes_be(signature);
    if &c >= key.n() {
        return Err(SignError::SignatureMismatch);
    }
    let m = c.modpow(key.e(), key.n());
    left_pad(&m.to_bytes_be(), k)
}

fn left_pad(bytes: &[u8], k: usize) -> SignResult<Vec<u8>> {
    if bytes.len() > k {
        return Err(SignError::RsaOperation(format!(
            "integer of {} bytes does not fit in {k} bytes",
            bytes.len()
        )));
    }
    let mut out = vec![0u8; k - bytes.len()];
    out.extend_from_slice(bytes);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::PrivateKey;

    const PKCS1_PEM: &str = include_str!("../../testfiles/rsa2048_pkcs1.pem");

    fn key() -> RsaPrivateKey {
        PrivateKey::from_text(PKCS1_PEM).unwrap().as_rsa().clone()
    }

    #[test]
    fn private_then_public_recovers_message() {
        let key = key();
        let mut em = vec![0u8; 256];
        em[1] = 0x01;
        em[255] = 0x2A;
        let c = rsa_private_transform(&key, &em).unwrap();
        assert_eq!(c.len(), 256);
        let m = rsa_public_transform(&key.to_public_key(), &c).unwrap();
        assert_eq!(m, em);
    }

    #[test]
    fn zero_maps_to_zero_block() {
        let key = key();
        let c = rsa_private_transform(&key, &[0u8; 256]).unwrap();
        assert_eq!(c, vec![0u8; 256]);
    }

    #[test]
    fn out_of_range_message() {
        let key = key();
        let err = rsa_private_transform(&key, &[0xFF; 256]).unwrap_err();
        assert!(matches!(err, SignError::RsaOperation(_)));
    }

    #[test]
    fn out_of_range_signature() {
        let public = key().to_public_key();
        let err = rsa_public_transform(&public, &[0xFF; 256]).unwrap_err();
        assert_eq!(err, SignError::SignatureMismatch);
    }

    #[test]
    fn wrong_signature_length() {
        let public = key().to_public_key();
        let err = rsa_public_transform(&public, &[0x01; 255]).unwrap_err();
        assert!(matches!(err, SignError::SignatureFormat(_)));
    }

    #[test]
    fn left_pad_widths() {
        assert_eq!(left_pad(&[1, 2], 4).unwrap(), vec![0, 0, 1, 2]);
        assert_eq!(left_pad(&[1, 2], 2).unwrap(), vec![1, 2]);
        assert!(left_pad(&[1, 2, 3], 2).is_err());
    }
}
