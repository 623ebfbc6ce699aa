//! Error type definitions for field, curve and signature operations

use std::borrow::Cow;
use thiserror::Error as ThisError;

/// Primary error type for bitcrypt operations
///
/// Every variant carries the name of the operation that raised it. None of
/// them are retried internally; the caller decides whether a rejection is
/// recoverable.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A value lies outside the range its type admits (e.g. a field element
    /// not in `[0, p)`).
    #[error("{context}: value out of range: {message}")]
    Domain {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Two field elements with different moduli were combined.
    #[error("{context}: operands belong to different fields")]
    IncompatibleField { context: &'static str },

    /// Two points with different `(a, b)` curve parameters were combined.
    #[error("{context}: operands lie on different curves")]
    IncompatibleCurve { context: &'static str },

    /// Coordinates do not satisfy `y² = x³ + a·x + b`.
    #[error("{context}: point is not on the curve")]
    CurveMembership { context: &'static str },

    /// Multiplicative inverse of the zero element was requested.
    #[error("{context}: division by zero")]
    DivisionByZero { context: &'static str },

    /// DER signature bytes violate the expected structure.
    #[error("{context}: malformed signature: {message}")]
    MalformedSignature {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// A signature was well formed but did not verify.
    #[error("{context}: invalid signature: {message}")]
    InvalidSignature {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text or byte encoding could not be decoded (Base58 alphabet,
    /// checksum, version byte, SEC prefix).
    #[error("{context}: invalid encoding: {message}")]
    InvalidEncoding {
        context: &'static str,
        message: Cow<'static, str>,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: Cow<'static, str>,
    },
}

/// Result type for bitcrypt operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand to create a `Domain` error
    pub fn domain<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Self::Domain {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create a `MalformedSignature` error
    pub fn malformed<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Self::MalformedSignature {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidEncoding` error
    pub fn encoding<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Self::InvalidEncoding {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an `InvalidParameter` error
    pub fn param<M: Into<Cow<'static, str>>>(context: &'static str, message: M) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Replace the context of an existing error, keeping its kind and details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::Domain { message, .. } => Self::Domain { context, message },
            Self::IncompatibleField { .. } => Self::IncompatibleField { context },
            Self::IncompatibleCurve { .. } => Self::IncompatibleCurve { context },
            Self::CurveMembership { .. } => Self::CurveMembership { context },
            Self::DivisionByZero { .. } => Self::DivisionByZero { context },
            Self::MalformedSignature { message, .. } => {
                Self::MalformedSignature { context, message }
            }
            Self::InvalidSignature { message, .. } => Self::InvalidSignature { context, message },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidEncoding { message, .. } => Self::InvalidEncoding { context, message },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
        }
    }
}
