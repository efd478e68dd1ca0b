//! EMSA-PKCS1-v1_5 message encoding, RFC 8017 Section 9.2.
//!
//! The encoded message has the shape
//! `EM = 0x00 || 0x01 || PS || 0x00 || T`, where `PS` is a run of `0xFF`
//! bytes at least eight long and `T` is the DER encoded `DigestInfo` for the
//! selected hash, followed by the digest itself.

use crate::errors::{Error, Result};
use crate::hash::HashAlgorithm;

// Precomputed DigestInfo prefixes, per RFC 8017 Section 9.2 Note 1.
const SHA1_PREFIX: &[u8] = &[
    0x30, 0x21, 0x30, 0x09, 0x06, 0x05, 0x2b, 0x0e, 0x03, 0x02, 0x1a, 0x05, 0x00, 0x04, 0x14,
];
const SHA224_PREFIX: &[u8] = &[
    0x30, 0x2d, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x04,
    0x05, 0x00, 0x04, 0x1c,
];
const SHA256_PREFIX: &[u8] = &[
    0x30, 0x31, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01,
    0x05, 0x00, 0x04, 0x20,
];
const SHA384_PREFIX: &[u8] = &[
    0x30, 0x41, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x02,
    0x05, 0x00, 0x04, 0x30,
];
const SHA512_PREFIX: &[u8] = &[
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    0x05, 0x00, 0x04, 0x40,
];

pub(crate) fn digest_info_prefix(hash: HashAlgorithm) -> &'static [u8] {
    match hash {
        HashAlgorithm::Sha1 => SHA1_PREFIX,
        HashAlgorithm::Sha224 => SHA224_PREFIX,
        HashAlgorithm::Sha256 => SHA256_PREFIX,
        HashAlgorithm::Sha384 => SHA384_PREFIX,
        HashAlgorithm::Sha512 => SHA512_PREFIX,
    }
}

/// Builds the encoded message of exactly `em_len` bytes for the given digest.
pub(crate) fn emsa_pkcs1v15_encode(
    hash: HashAlgorithm,
    digest: &[u8],
    em_len: usize,
) -> Result<Vec<u8>> {
    ensure!(
        digest.len() == hash.digest_size(),
        "digest length {} does not match {}",
        digest.len(),
        hash
    );

    let prefix = digest_info_prefix(hash);
    let t_len = prefix.len() + digest.len();

    // Needs room for the two marker bytes, the separator and 8 bytes of PS.
    if em_len < t_len + 11 {
        return Err(Error::DigestTooLarge);
    }

    let mut em = vec![0xff; em_len];
    em[0] = 0x00;
    em[1] = 0x01;
    em[em_len - t_len - 1] = 0x00;
    em[em_len - t_len..em_len - digest.len()].copy_from_slice(prefix);
    em[em_len - digest.len()..].copy_from_slice(digest);

    Ok(em)
}
