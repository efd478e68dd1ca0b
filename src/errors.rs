use snafu::Snafu;

use crate::hash::HashAlgorithm;

pub type Result<T, E = Error> = ::std::result::Result<T, E>;

/// Error types
#[derive(Debug, Snafu)]
pub enum Error {
    /// The hash algorithm is not in the allow-list for PKCS#1 v1.5 signing.
    #[snafu(display("hash algorithm {algorithm} is not safe for digital signatures"))]
    UnsafeHash { algorithm: HashAlgorithm },
    #[snafu(display("modulus of {bits} bits is below the minimum of {min} bits"))]
    ModulusTooSmall { bits: usize, min: usize },
    #[snafu(display("modulus of {bits} bits exceeds the maximum of {max} bits"))]
    ModulusTooLarge { bits: usize, max: usize },
    /// A key field that must carry a nonzero value was supplied empty.
    #[snafu(display("key field {field} has an empty encoding"))]
    EmptyKeyField { field: &'static str },
    /// The key material failed the algebraic consistency check.
    #[snafu(display("inconsistent RSA key: {reason}"))]
    InvalidKey { reason: String },
    #[snafu(display("digest too large for the modulus size"))]
    DigestTooLarge,
    /// Failure reported by the modular exponentiation engine.
    #[snafu(display("rsa engine failure: {reason}"))]
    Internal { reason: String },
    #[snafu(display("{message}"))]
    Message { message: String },
}

#[macro_export]
macro_rules! bail {
    ($e:expr) => {
        return Err($crate::errors::Error::Message { message: $e.to_string() })
    };
    ($fmt:expr, $($arg:tt)+) => {
        return Err($crate::errors::Error::Message { message: format!($fmt, $($arg)+) })
    };
}

#[macro_export(local_inner_macros)]
macro_rules! ensure {
    ($cond:expr, $e:expr) => {
        if !($cond) {
            bail!($e);
        }
    };
    ($cond:expr, $fmt:expr, $($arg:tt)+) => {
        if !($cond) {
            bail!($fmt, $($arg)+);
        }
    };
}
