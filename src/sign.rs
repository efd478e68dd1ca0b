//! PKCS#1 v1.5 signature generation.

use log::debug;
use num_bigint::BigUint;

use crate::errors::Result;
use crate::hash::HashAlgorithm;
use crate::key::{
    required_field, validate_modulus_size, validate_signature_hash, RsaKeyMaterial, RsaPrivateKey,
};
use crate::pkcs1v15::emsa_pkcs1v15_encode;

/// One-shot signing over an owned private key.
pub trait Signer {
    /// Signs `message`, returning the raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// A validated RSA key bound to a hash algorithm, ready to sign.
///
/// Construction runs the full validation chain; a handle that exists can
/// sign. The handle is immutable, signing takes `&self` and is safe to call
/// from multiple threads concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    key: RsaPrivateKey,
    hash: HashAlgorithm,
}

impl SigningKey {
    /// Builds a signing key from raw key material.
    ///
    /// Validation order: hash eligibility, modulus size, key load, key
    /// consistency. The first failure is returned and no handle is created.
    pub fn new(material: &RsaKeyMaterial<'_>, hash: HashAlgorithm) -> Result<Self> {
        validate_signature_hash(hash)?;

        let n = required_field("n", material.n)?;
        validate_modulus_size(n.bits())?;

        let key = RsaPrivateKey::try_from_material(material)?;
        key.validate_consistency()?;

        debug!("n: {}", hex::encode(material.n));
        debug!("e: {}", hex::encode(material.e));
        debug!("RSA signing key ready: {} bit modulus, {}", key.n_bits(), hash);

        Ok(SigningKey { key, hash })
    }

    /// The hash algorithm bound to this key.
    pub fn hash_algorithm(&self) -> HashAlgorithm {
        self.hash
    }

    /// Signature length in bytes, equal to the modulus byte length.
    pub fn signature_len(&self) -> usize {
        self.key.size()
    }
}

impl Signer for SigningKey {
    /// Sign using RSA, with PKCS1v15 padding.
    ///
    /// Deterministic: the same key, hash and message always yield the same
    /// signature bytes. The output is exactly [`SigningKey::signature_len`]
    /// bytes, left padded with zeros if the numeric result is shorter.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let digest = self.hash.digest(message);

        let k = self.key.size();
        let em = emsa_pkcs1v15_encode(self.hash, &digest, k)?;

        let s = self.key.rsasp1(&BigUint::from_bytes_be(&em))?;

        Ok(left_pad(&s.to_bytes_be(), k))
    }
}

fn left_pad(input: &[u8], size: usize) -> Vec<u8> {
    debug_assert!(input.len() <= size);

    let mut out = vec![0u8; size];
    out[size - input.len()..].copy_from_slice(input);
    out
}
