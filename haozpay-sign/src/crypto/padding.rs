use crate::constants::{BLOCK_TYPE1_OVERHEAD, MIN_PADDING_LEN};
use crate::error::{SignError, SignResult};

/**
    Build a PKCS#1 v1.5 block type 1 encoded message of exactly `k` bytes:

    ```text
    EM = 0x00 || 0x01 || PS || 0x00 || data
    ```

    where PS is `k - 3 - data.len()` bytes of `0xFF`. Rejecting any `data`
    longer than `k - 11` keeps PS at or above its 8 byte minimum.
*/
pub fn encode_block_type1(data: &[u8], k: usize) -> SignResult<Vec<u8>> {
    let max = k.saturating_sub(BLOCK_TYPE1_OVERHEAD);
    if k < BLOCK_TYPE1_OVERHEAD || data.len() > max {
        return Err(SignError::MessageTooLong {
            len: data.len(),
            max,
        });
    }

    let ps_len = k - 3 - data.len();
    let mut em = Vec::with_capacity(k);
    em.push(0x00);
    em.push(0x01);
    em.resize(2 + ps_len, 0xFF);
    em.push(0x00);
    em.extend_from_slice(data);
    debug_assert_eq!(em.len(), k);
    Ok(em)
}

/**
    Strip block type 1 padding from a recovered `k`-byte message.

    Returns the embedded data. A well-formed block whose `0xFF` run is
    shorter than 8 bytes fails with [`SignError::PaddingTooShort`]; every
    other structural defect fails with [`SignError::SignatureMismatch`].
*/
pub fn decode_block_type1(em: &[u8], k: usize) -> SignResult<&[u8]> {
    if em.len() != k || k < BLOCK_TYPE1_OVERHEAD || em[0] != 0x00 || em[1] != 0x01 {
        return Err(SignError::SignatureMismatch);
    }

    let ps_len = em[2..].iter().take_while(|&&b| b == 0xFF).count();
    let separator = 2 + ps_len;
    if separator >= em.len() || em[separator] != 0x00 {
        return Err(SignError::SignatureMismatch);
    }
    if ps_len < MIN_PADDING_LEN {
        return Err(SignError::PaddingTooShort {
            len: ps_len,
            min: MIN_PADDING_LEN,
        });
    }

    Ok(&em[separator + 1..])
}
