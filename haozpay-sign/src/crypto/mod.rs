/*!
    Low-level RSA building blocks for the raw exponentiation scheme.

    - PKCS#1 v1.5 block type 1 encoding and decoding (`00 01 FF.. 00 data`)
    - Private transform `m^d mod n` and public transform `c^e mod n`
      over big-endian integers, fixed to the modulus length
*/

pub mod padding;
pub mod rsa;

pub use self::padding::{decode_block_type1, encode_block_type1};
pub use self::rsa::{rsa_private_transform, rsa_public_transform};
