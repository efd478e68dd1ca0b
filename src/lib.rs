//! RSA signature generation under the PKCS#1 v1.5 scheme (RSASSA-PKCS1-v1_5,
//! [RFC 8017]).
//!
//! This crate is a signing primitive for a larger signature-algorithm
//! library: it takes raw RSA private-key material as big-endian byte
//! encodings plus a hash selection, validates the material, and produces
//! deterministic fixed-length signatures.
//!
//! Construction goes through the full validation chain (hash allow-list,
//! modulus size, field parsing, algebraic key consistency); only a key that
//! passes every check yields a [`SigningKey`]. Signing digests the message,
//! applies the EMSA-PKCS1-v1_5 encoding and performs the private-key
//! transform with the CRT parameters.
//!
//! Hash functions come from the RustCrypto digest crates and all big-integer
//! arithmetic from `num-bigint-dig`; key generation, serialization formats
//! and signature verification are out of scope.
//!
//! [RFC 8017]: https://www.rfc-editor.org/rfc/rfc8017

#[macro_use]
pub mod errors;

pub mod hash;
pub mod key;
mod pkcs1v15;
pub mod sign;

pub use crate::errors::{Error, Result};
pub use crate::hash::HashAlgorithm;
pub use crate::key::RsaKeyMaterial;
pub use crate::sign::{Signer, SigningKey};
