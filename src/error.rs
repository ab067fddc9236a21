//! Error types for enumdex
//!
//! Registration mistakes (unregistered domains, gapped or inverted bounds,
//! missing value bindings) are rejected at compile time by the registration
//! macros and never surface here. The types below cover the remaining
//! runtime failures: reverse conversion lookups and reverse value-mapping
//! lookups.

use thiserror::Error;

/// Errors produced by [`ConversionTable`](crate::ConversionTable) lookups.
///
/// The error is `Clone` because a failed reverse-table build is cached for
/// the lifetime of the table and re-delivered to every later caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError<D> {
    /// The member was never bound to a conversion value.
    #[error("no conversion value is bound for {member:?}")]
    Unbound { member: D },

    /// Two distinct members produce an equal conversion value, so the
    /// reverse direction is not a function. Raised while building the
    /// reverse table, whether or not the queried value is part of the
    /// colliding pair.
    #[error("ambiguous reverse conversion: {first:?} and {second:?} produce the same value")]
    Ambiguous { first: D, second: D },

    /// No member produces the queried value.
    #[error("no member produces the queried value")]
    NoMatch,
}

/// Error produced by [`member_of`](crate::member_of) when no member of the
/// domain is bound to the queried literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no member of `{domain}` is bound to the queried value")]
pub struct MappingError {
    /// Type name of the queried domain.
    pub domain: &'static str,
}
