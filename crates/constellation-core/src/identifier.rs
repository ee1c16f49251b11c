//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used to identify diagrams and labels.
//! Interning makes equality and hashing cheap, and the interner's symbol index
//! gives every `Id` a stable position in a total order, which the relationship
//! cache relies on to canonicalize unordered diagram pairs.

use std::{
    cmp::Ordering,
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol, Symbol as _};

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning.
///
/// An `Id` names a diagram or a label value. Two `Id`s created from the same
/// string are equal, and every `Id` is `Copy`, so identities can be passed
/// around freely without cloning strings.
///
/// The [`Ord`] implementation compares interner symbol indices. The resulting
/// order carries no lexical meaning, but it is total and stable for the
/// process lifetime, which is exactly what canonical pair keys need.
///
/// # Examples
///
/// ```
/// use constellation_core::identifier::Id;
///
/// let orders = Id::new("orders");
/// let again = Id::new("orders");
/// assert_eq!(orders, again);
/// assert_eq!(orders, "orders");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `name` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use constellation_core::identifier::Id;
    ///
    /// let diagram_id = Id::new("warehouse");
    /// let label_id = Id::new("Shipping Service");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Returns the interned string for this identifier.
    pub fn resolve(&self) -> String {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        interner
            .resolve(self.0)
            .expect("Symbol should exist in interner")
            .to_owned()
    }
}

impl PartialOrd for Id {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Id {
    /// Total order over interner symbol indices.
    ///
    /// Stable for the process lifetime; not lexicographic.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.to_usize().cmp(&other.0.to_usize())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use constellation_core::identifier::Id;
    ///
    /// let id: Id = "catalog".into();
    /// assert_eq!(id, "catalog");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == name`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
