//! enumdex - indexed metadata and bidirectional value mapping for closed enums
//!
//! enumdex treats a fieldless enum with contiguous discriminants as a
//! *domain*: a closed, ordered set of named constants used as dispatch keys,
//! configuration values, or protocol codes. Registering a domain once, at
//! compile time, buys O(1) indexed access, safe traversal bounds, and two
//! flavors of value translation:
//!
//! - [`register_domain!`] / [`Domain`]: bounds, size, underlying
//!   representation, member/index arithmetic, checked `next`/`prev`
//! - [`DomainMap`]: a fixed-size container with one slot per member,
//!   populated by a per-member generator
//! - [`ConversionTable`]: runtime conversion to and from an arbitrary type,
//!   with a lazily-built, collision-detecting reverse lookup
//! - [`register_values!`] / [`MappedValues`]: compile-known literal values
//!   with O(1) forward lookup and a descending-order tie-break in reverse
//! - [`members`] / [`range`]: forward and backward traversal
//!
//! ```
//! use enumdex::{members, register_domain, register_values, value_of, Domain, DomainMap};
//!
//! register_domain! {
//!     /// Log verbosity levels.
//!     pub enum Verbosity: u8 {
//!         Quiet,
//!         Normal,
//!         Verbose,
//!     }
//! }
//!
//! register_values! {
//!     Verbosity: &'static str {
//!         Quiet => "quiet",
//!         Normal => "normal",
//!         Verbose => "verbose",
//!     }
//! }
//!
//! // Index arithmetic and traversal.
//! assert_eq!(Verbosity::SIZE, 3);
//! assert_eq!(Verbosity::Normal.next(), Some(Verbosity::Verbose));
//! assert_eq!(members::<Verbosity>().count(), 3);
//!
//! // One slot per member.
//! let flag_count = DomainMap::<Verbosity, usize>::from_fn(|v| v.index());
//! assert_eq!(flag_count[Verbosity::Verbose], 2);
//!
//! // Compile-known literals.
//! assert_eq!(*value_of::<&str, _>(Verbosity::Quiet), "quiet");
//! ```
//!
//! All registration is declarative and validated during compilation; a type
//! that was never registered simply does not implement [`Domain`], and a
//! registration with gapped, misordered, or inverted members does not
//! compile.

pub mod convert;
pub mod domain;
pub mod error;
pub mod iter;
pub mod map;
pub mod mapping;

// Re-exports for convenience
pub use convert::{ConversionBuilder, ConversionTable};
pub use domain::{member_at, Domain};
pub use error::{ConversionError, MappingError};
pub use iter::{members, range, Members};
pub use map::DomainMap;
pub use mapping::{member_of, try_member_of, value_of, MappedValues};
