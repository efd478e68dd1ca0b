use std::str::FromStr;

use digest::Digest;
use sha1::Sha1;

use crate::errors::Error;

/// Hash algorithms known to the signing core.
///
/// Only a subset of these is eligible for producing new signatures, see
/// [`HashAlgorithm::is_signature_safe`].
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, derive_more::Display)]
pub enum HashAlgorithm {
    #[display("SHA1")]
    Sha1,
    #[display("SHA224")]
    Sha224,
    #[display("SHA256")]
    Sha256,
    #[display("SHA384")]
    Sha384,
    #[display("SHA512")]
    Sha512,
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        Self::Sha256
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sha1" => Ok(Self::Sha1),
            "sha224" => Ok(Self::Sha224),
            "sha256" => Ok(Self::Sha256),
            "sha384" => Ok(Self::Sha384),
            "sha512" => Ok(Self::Sha512),
            _ => bail!("unknown hash"),
        }
    }
}

impl HashAlgorithm {
    /// Whether this hash may be used to produce new PKCS#1 v1.5 signatures.
    ///
    /// SHA-1 and SHA-224 remain digestible for interoperability but are
    /// rejected for signing.
    pub fn is_signature_safe(self) -> bool {
        matches!(self, Self::Sha256 | Self::Sha384 | Self::Sha512)
    }

    /// Calculate the digest of the given input data.
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            HashAlgorithm::Sha224 => sha2::Sha224::digest(data).to_vec(),
            HashAlgorithm::Sha256 => sha2::Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => sha2::Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => sha2::Sha512::digest(data).to_vec(),
        }
    }

    /// Returns the digest size in bytes for the given algorithm.
    pub fn digest_size(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => <Sha1 as Digest>::output_size(),
            HashAlgorithm::Sha224 => <sha2::Sha224 as Digest>::output_size(),
            HashAlgorithm::Sha256 => <sha2::Sha256 as Digest>::output_size(),
            HashAlgorithm::Sha384 => <sha2::Sha384 as Digest>::output_size(),
            HashAlgorithm::Sha512 => <sha2::Sha512 as Digest>::output_size(),
        }
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_display_parse_hash() {
        assert_eq!(HashAlgorithm::Sha256.to_string(), "SHA256".to_string());
        assert_eq!(HashAlgorithm::Sha512, "SHA512".parse().unwrap());
        assert!("whirlpool".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn test_digest_sizes() {
        assert_eq!(HashAlgorithm::Sha1.digest_size(), 20);
        assert_eq!(HashAlgorithm::Sha224.digest_size(), 28);
        assert_eq!(HashAlgorithm::Sha256.digest_size(), 32);
        assert_eq!(HashAlgorithm::Sha384.digest_size(), 48);
        assert_eq!(HashAlgorithm::Sha512.digest_size(), 64);
    }

    #[test]
    fn test_digest_abc() {
        assert_eq!(
            HashAlgorithm::Sha256.digest(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
        assert_eq!(
            HashAlgorithm::Sha1.digest(b"abc"),
            hex!("a9993e364706816aba3e25717850c26c9cd0d89d")
        );
    }

    #[test]
    fn test_signature_safety() {
        assert!(!HashAlgorithm::Sha1.is_signature_safe());
        assert!(!HashAlgorithm::Sha224.is_signature_safe());
        assert!(HashAlgorithm::Sha256.is_signature_safe());
        assert!(HashAlgorithm::Sha384.is_signature_safe());
        assert!(HashAlgorithm::Sha512.is_signature_safe());
    }
}
