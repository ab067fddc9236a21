//! Runtime conversion between domain members and an external type
//!
//! A [`ConversionTable`] binds members of a domain to values of an arbitrary
//! type `T` known only at runtime. The forward direction is an indexed read;
//! the reverse direction is a hash lookup against a table built lazily on
//! first use and cached for the lifetime of the conversion table.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::domain::Domain;
use crate::error::ConversionError;
use crate::map::DomainMap;

/// Bidirectional runtime mapping between members of `D` and values of `T`.
///
/// Build one with [`ConversionTable::from_fn`] when every member converts,
/// or with [`ConversionTable::builder`] to bind members individually. A
/// member left unbound only fails when *its* conversion is first requested;
/// the rest of the table keeps working.
///
/// The reverse table is constructed once, by whichever caller first asks for
/// a reverse lookup, behind a [`OnceLock`]: concurrent first callers race
/// safely and exactly one construction runs. The outcome is cached either
/// way: if construction fails (two members producing an equal value, or an
/// unbound member discovered mid-build), the same error is returned to every
/// subsequent reverse lookup and the table is never rebuilt. Ambiguity and
/// unbound members are static properties of the bindings, so nothing a
/// caller does can make a retry succeed.
///
/// For a process-wide table, store it in a static:
///
/// ```
/// use std::sync::LazyLock;
///
/// use enumdex::{register_domain, ConversionTable};
///
/// register_domain! {
///     pub enum Compression: u8 {
///         None,
///         Gzip,
///         Zstd,
///     }
/// }
///
/// static CONTENT_ENCODING: LazyLock<ConversionTable<Compression, String>> =
///     LazyLock::new(|| {
///         ConversionTable::from_fn(|method| {
///             match method {
///                 Compression::None => "identity",
///                 Compression::Gzip => "gzip",
///                 Compression::Zstd => "zstd",
///             }
///             .to_string()
///         })
///     });
///
/// assert_eq!(CONTENT_ENCODING.to_value(Compression::Gzip).unwrap(), "gzip");
/// assert_eq!(
///     CONTENT_ENCODING.to_member(&"zstd".to_string()).unwrap(),
///     Compression::Zstd
/// );
/// ```
#[derive(Debug)]
pub struct ConversionTable<D: Domain, T> {
    forward: DomainMap<D, Option<T>>,
    reverse: OnceLock<Result<HashMap<T, D>, ConversionError<D>>>,
}

impl<D: Domain, T> ConversionTable<D, T> {
    /// Starts a builder with no members bound.
    pub fn builder() -> ConversionBuilder<D, T> {
        ConversionBuilder {
            bindings: DomainMap::new(),
        }
    }

    /// Builds a total table: `convert` runs once per member in ascending
    /// index order and every member ends up bound.
    pub fn from_fn(mut convert: impl FnMut(D) -> T) -> Self {
        ConversionTable {
            forward: DomainMap::from_fn(|member| Some(convert(member))),
            reverse: OnceLock::new(),
        }
    }

    /// Converts `member` to its bound value. O(1).
    ///
    /// Fails with [`ConversionError::Unbound`] when `member` was never given
    /// a binding. The check is per member: other members' bindings are not
    /// inspected.
    pub fn to_value(&self, member: D) -> Result<&T, ConversionError<D>> {
        self.forward
            .get(member)
            .as_ref()
            .ok_or(ConversionError::Unbound { member })
    }
}

impl<D: Domain, T> ConversionTable<D, T>
where
    T: Clone + Eq + std::hash::Hash,
{
    /// Converts a value back to the member producing it. O(1) after the
    /// first call.
    ///
    /// The first call builds the reverse table by walking members in index
    /// order. Construction fails with [`ConversionError::Ambiguous`] if any
    /// two members produce an equal value (the queried value need not be
    /// involved) and with [`ConversionError::Unbound`] if a member has no
    /// binding. Either failure is cached: see the type-level documentation.
    /// A value no member produces fails with [`ConversionError::NoMatch`].
    pub fn to_member(&self, value: &T) -> Result<D, ConversionError<D>> {
        match self.reverse.get_or_init(|| self.build_reverse()) {
            Ok(table) => table.get(value).copied().ok_or(ConversionError::NoMatch),
            Err(error) => Err(error.clone()),
        }
    }

    /// Converts a value back to the member producing it, or returns
    /// `fallback` on any failure.
    ///
    /// An ambiguity discovered while building the reverse table is swallowed
    /// exactly like a missing match: both produce the fallback.
    pub fn to_member_or(&self, value: &T, fallback: D) -> D {
        self.to_member(value).unwrap_or(fallback)
    }

    fn build_reverse(&self) -> Result<HashMap<T, D>, ConversionError<D>> {
        let mut table = HashMap::with_capacity(D::SIZE);
        for &member in D::MEMBERS {
            let value = self.to_value(member)?.clone();
            if let Some(&bound) = table.get(&value) {
                return Err(ConversionError::Ambiguous {
                    first: bound,
                    second: member,
                });
            }
            table.insert(value, member);
        }
        Ok(table)
    }
}

/// Binds conversion values member by member; finish with
/// [`ConversionBuilder::finish`].
///
/// Binding the same member twice keeps the later value.
///
/// ```
/// use enumdex::{register_domain, ConversionTable};
///
/// register_domain! {
///     pub enum Door: u8 {
///         Front,
///         Back,
///     }
/// }
///
/// let labels = ConversionTable::<Door, &str>::builder()
///     .bind(Door::Front, "front")
///     .bind_with(Door::Back, || "back")
///     .finish();
///
/// assert_eq!(labels.to_value(Door::Back).copied(), Ok("back"));
/// ```
#[derive(Debug)]
pub struct ConversionBuilder<D: Domain, T> {
    bindings: DomainMap<D, Option<T>>,
}

impl<D: Domain, T> ConversionBuilder<D, T> {
    /// Binds `member` to a literal value.
    pub fn bind(mut self, member: D, value: T) -> Self {
        self.bindings.set(member, Some(value));
        self
    }

    /// Binds `member` to the result of `produce`, invoked immediately and
    /// exactly once.
    pub fn bind_with(self, member: D, produce: impl FnOnce() -> T) -> Self {
        self.bind(member, produce())
    }

    /// Finishes the table with whatever bindings were made. Members left
    /// unbound fail when first converted, not here.
    pub fn finish(self) -> ConversionTable<D, T> {
        ConversionTable {
            forward: self.bindings,
            reverse: OnceLock::new(),
        }
    }
}
