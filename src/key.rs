//! RSA private key material: loading and validation.
//!
//! Key fields cross the API boundary only as big-endian byte encodings. They
//! are parsed into [`RsaPrivateKey`], checked for algebraic consistency, and
//! only then handed to the signing side. A key that parses but is
//! inconsistent never signs.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use zeroize::ZeroizeOnDrop;

use crate::errors::{Error, Result};
use crate::hash::HashAlgorithm;

/// Minimum accepted modulus size for signing keys.
pub const MIN_RSA_MODULUS_BITS: usize = 2048;

/// Upper bound on the modulus size we are willing to compute with.
/// The value is the same as gnupgs MPI limit.
pub const MAX_RSA_MODULUS_BITS: usize = 16384;

macro_rules! ensure_key {
    ($cond:expr, $($arg:tt)+) => {
        if !($cond) {
            return Err(Error::InvalidKey { reason: format!($($arg)+) });
        }
    };
}

/// Big-endian byte encodings of the numeric fields of an RSA private key.
///
/// An empty slice models an absent field. The CRT parameters are never
/// derived from `p`, `q` and `d`; all of them must be supplied.
#[derive(Clone, Copy, Default, derive_more::Debug)]
pub struct RsaKeyMaterial<'a> {
    /// Modulus.
    pub n: &'a [u8],
    /// Public exponent.
    pub e: &'a [u8],
    /// Private exponent.
    #[debug("..")]
    pub d: &'a [u8],
    /// First prime factor.
    #[debug("..")]
    pub p: &'a [u8],
    /// Second prime factor.
    #[debug("..")]
    pub q: &'a [u8],
    /// `d mod (p-1)`.
    #[debug("..")]
    pub dp: &'a [u8],
    /// `d mod (q-1)`.
    #[debug("..")]
    pub dq: &'a [u8],
    /// `q^-1 mod p`.
    #[debug("..")]
    pub q_inv: &'a [u8],
}

/// A loaded RSA private key, ready for the exponentiation engine.
#[derive(Clone, PartialEq, Eq, ZeroizeOnDrop, derive_more::Debug)]
pub(crate) struct RsaPrivateKey {
    n: BigUint,
    e: BigUint,
    #[debug("..")]
    d: BigUint,
    #[debug("..")]
    p: BigUint,
    #[debug("..")]
    q: BigUint,
    #[debug("..")]
    dp: BigUint,
    #[debug("..")]
    dq: BigUint,
    #[debug("..")]
    q_inv: BigUint,
}

/// Succeeds iff `hash` is eligible for producing new signatures.
pub(crate) fn validate_signature_hash(hash: HashAlgorithm) -> Result<()> {
    if hash.is_signature_safe() {
        Ok(())
    } else {
        Err(Error::UnsafeHash { algorithm: hash })
    }
}

/// Checks the modulus bit length against the accepted range.
pub(crate) fn validate_modulus_size(bits: usize) -> Result<()> {
    if bits < MIN_RSA_MODULUS_BITS {
        return Err(Error::ModulusTooSmall {
            bits,
            min: MIN_RSA_MODULUS_BITS,
        });
    }
    if bits > MAX_RSA_MODULUS_BITS {
        return Err(Error::ModulusTooLarge {
            bits,
            max: MAX_RSA_MODULUS_BITS,
        });
    }
    Ok(())
}

/// Parses a field whose value must be present.
pub(crate) fn required_field(field: &'static str, raw: &[u8]) -> Result<BigUint> {
    if raw.is_empty() {
        return Err(Error::EmptyKeyField { field });
    }
    Ok(BigUint::from_bytes_be(raw))
}

impl RsaPrivateKey {
    /// Parses all key fields from their big-endian encodings.
    ///
    /// `n`, `e` and `d` must be present. Absent CRT fields parse as zero and
    /// are rejected by [`RsaPrivateKey::validate_consistency`].
    pub(crate) fn try_from_material(material: &RsaKeyMaterial<'_>) -> Result<Self> {
        let n = required_field("n", material.n)?;
        let e = required_field("e", material.e)?;
        let d = required_field("d", material.d)?;

        Ok(RsaPrivateKey {
            n,
            e,
            d,
            p: BigUint::from_bytes_be(material.p),
            q: BigUint::from_bytes_be(material.q),
            dp: BigUint::from_bytes_be(material.dp),
            dq: BigUint::from_bytes_be(material.dq),
            q_inv: BigUint::from_bytes_be(material.q_inv),
        })
    }

    pub(crate) fn n_bits(&self) -> usize {
        self.n.bits()
    }

    /// Modulus length in bytes; signatures have exactly this size.
    pub(crate) fn size(&self) -> usize {
        (self.n.bits() + 7) / 8
    }

    /// Recomputes the algebraic relations between the key fields.
    ///
    /// Rejects degenerate values first so that the modular arithmetic below
    /// cannot divide by zero.
    pub(crate) fn validate_consistency(&self) -> Result<()> {
        let one = BigUint::one();

        ensure_key!(
            !self.n.is_zero() && !self.e.is_zero() && !self.d.is_zero(),
            "n, e and d must be nonzero"
        );
        ensure_key!(self.p > one && self.q > one, "prime factor is degenerate");
        ensure_key!(self.p != self.q, "prime factors are equal");
        ensure_key!(self.e.is_odd(), "public exponent is even");
        ensure_key!(self.e > one, "public exponent must be greater than one");
        ensure_key!(
            &self.p * &self.q == self.n,
            "modulus is not the product of the prime factors"
        );

        let p1 = &self.p - &one;
        let q1 = &self.q - &one;
        let lambda = p1.lcm(&q1);
        ensure_key!(
            (&self.e * &self.d) % &lambda == one,
            "e * d != 1 mod lcm(p-1, q-1)"
        );
        ensure_key!(self.dp == &self.d % &p1, "dp != d mod (p-1)");
        ensure_key!(self.dq == &self.d % &q1, "dq != d mod (q-1)");
        ensure_key!(
            !self.q_inv.is_zero() && self.q_inv < self.p,
            "crt coefficient out of range"
        );
        ensure_key!(
            (&self.q_inv * &self.q) % &self.p == one,
            "qInv * q != 1 mod p"
        );

        Ok(())
    }

    /// RSA signature primitive `em^d mod n` (RSASP1), using the two-prime
    /// CRT optimization.
    ///
    /// The CRT result is re-checked against the public exponent; a mismatch
    /// falls back to direct exponentiation before giving up. Engine failures
    /// carry their diagnostic in the returned error, there is no shared
    /// error state between calls.
    pub(crate) fn rsasp1(&self, em: &BigUint) -> Result<BigUint> {
        if em >= &self.n {
            return Err(Error::Internal {
                reason: "message representative out of range".to_string(),
            });
        }

        let s = self.crt_exp(em);
        if s.modpow(&self.e, &self.n) == *em {
            return Ok(s);
        }

        // CRT result failed the public-exponent recheck, redo without it.
        let s = em.modpow(&self.d, &self.n);
        if s.modpow(&self.e, &self.n) == *em {
            return Ok(s);
        }

        Err(Error::Internal {
            reason: "private key transform produced an inconsistent result".to_string(),
        })
    }

    fn crt_exp(&self, em: &BigUint) -> BigUint {
        let m1 = em.modpow(&self.dp, &self.p);
        let m2 = em.modpow(&self.dq, &self.q);

        let m2p = &m2 % &self.p;
        let diff = if m1 >= m2p {
            m1 - m2p
        } else {
            &self.p + m1 - m2p
        };
        let h = (&self.q_inv * diff) % &self.p;

        m2 + h * &self.q
    }
}
