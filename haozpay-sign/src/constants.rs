/**
    Parameter name holding the signature itself. Never part of the canonical string.
*/
pub const SIGN_FIELD: &str = "sign";

/**
    Minimum length of the `0xFF` padding string in a PKCS#1 v1.5 block.
    Ref: RFC 8017, section 9.2, note 1.
*/
pub const MIN_PADDING_LEN: usize = 8;

/**
    Fixed overhead of a block type 1 encoding: `00 01 || PS || 00`, with
    PS at its minimum length.
*/
pub const BLOCK_TYPE1_OVERHEAD: usize = 3 + MIN_PADDING_LEN;

/**
    Line width used when re-wrapping a bare base64 key body.
*/
pub const PEM_LINE_WIDTH: usize = 64;

pub const PKCS1_PRIVATE_LABEL: &str = "RSA PRIVATE KEY";
pub const PKCS8_PRIVATE_LABEL: &str = "PRIVATE KEY";
pub const SPKI_PUBLIC_LABEL: &str = "PUBLIC KEY";
