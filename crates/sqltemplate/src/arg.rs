//! Template arguments.
//!
//! [`Arg`] is the closed set of values a placeholder can consume. The skip
//! marker is its own variant ([`Arg::Skip`]), so no text value can ever be
//! mistaken for a skip request.
//!
//! # Example
//! ```ignore
//! use sqltemplate::{Arg, args, skip};
//!
//! let a = args![5, "O'Brien", None::<i64>, skip()];
//! let cols = Arg::map([("name", Arg::from("x")), ("age", Arg::from(5))]);
//! ```

use indexmap::IndexMap;

/// A collection key.
///
/// Positional keys render as bare values under `?a`; named keys render as
/// `` `key` = value ``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Whether this key counts as positional.
    ///
    /// Named keys whose text is numeric (`"5"`, `"-2"`, `"1.5"`) are positional too.
    pub fn is_positional(&self) -> bool {
        match self {
            Key::Index(_) => true,
            Key::Name(name) => is_numeric(name),
        }
    }
}

fn is_numeric(s: &str) -> bool {
    let s = s.trim();
    // Rejects "inf"/"nan" spellings that `f64::from_str` accepts.
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        && s.parse::<f64>().is_ok()
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<i64> for Key {
    fn from(index: i64) -> Self {
        Key::Index(index)
    }
}

impl From<i32> for Key {
    fn from(index: i32) -> Self {
        Key::Index(index.into())
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index as i64)
    }
}

/// A positional template argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// SQL `NULL`.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered key/value collection used by `?a` and `?#`.
    Collection(IndexMap<Key, Arg>),
    /// Drop the enclosing conditional block.
    Skip,
}

/// Text written in place of a skipped placeholder that has no enclosing block.
pub const SKIP_MARKER: &str = "__--!!--__";

/// Return the skip marker.
///
/// Passing it as an argument removes the `{ ... }` block that contains its placeholder.
pub fn skip() -> Arg {
    Arg::Skip
}

impl Arg {
    /// Build a positional collection (`0, 1, 2, ...` keys).
    pub fn list<T: Into<Arg>>(values: impl IntoIterator<Item = T>) -> Self {
        Arg::Collection(
            values
                .into_iter()
                .enumerate()
                .map(|(i, v)| (Key::from(i), v.into()))
                .collect(),
        )
    }

    /// Build a keyed collection, preserving insertion order.
    ///
    /// A repeated key keeps its first position and takes the last value.
    pub fn map<K: Into<Key>, T: Into<Arg>>(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        Arg::Collection(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Arg::Skip)
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Arg::Null => "null",
            Arg::Bool(_) => "bool",
            Arg::Int(_) => "int",
            Arg::Float(_) => "float",
            Arg::Text(_) => "text",
            Arg::Collection(_) => "collection",
            Arg::Skip => "skip",
        }
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Text(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
    fn from(values: Vec<T>) -> Self {
        Arg::list(values)
    }
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
    fn from(values: [T; N]) -> Self {
        Arg::list(values)
    }
}

impl<K: Into<Key>, T: Into<Arg>> From<IndexMap<K, T>> for Arg {
    fn from(entries: IndexMap<K, T>) -> Self {
        Arg::map(entries)
    }
}

/// Build a `Vec<Arg>` from heterogeneous values.
///
/// ```ignore
/// let args = sqltemplate::args![5, "O'Brien", sqltemplate::skip()];
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_none_is_null() {
        assert_eq!(Arg::from(None::<i32>), Arg::Null);
        assert_eq!(Arg::from(Some(3)), Arg::Int(3));
    }

    #[test]
    fn list_uses_index_keys() {
        let Arg::Collection(map) = Arg::from(vec!["a", "b"]) else {
            panic!("expected collection");
        };
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
    }

    #[test]
    fn map_keeps_insertion_order() {
        let Arg::Collection(map) = Arg::map([("z", 1), ("a", 2), ("m", 3)]) else {
            panic!("expected collection");
        };
        let keys: Vec<_> = map.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("z"), Key::from("a"), Key::from("m")]);
    }

    #[test]
    fn numeric_names_are_positional() {
        assert!(Key::from("5").is_positional());
        assert!(Key::from("-2").is_positional());
        assert!(Key::from("1.5").is_positional());
        assert!(Key::Index(9).is_positional());
        assert!(!Key::from("name").is_positional());
        assert!(!Key::from("inf").is_positional());
        assert!(!Key::from("NaN").is_positional());
        assert!(!Key::from("").is_positional());
    }

    #[test]
    fn args_macro_converts_each_value() {
        let args = args![1, "x", 2.5, true, None::<i64>, skip()];
        assert_eq!(
            args,
            vec![
                Arg::Int(1),
                Arg::Text("x".into()),
                Arg::Float(2.5),
                Arg::Bool(true),
                Arg::Null,
                Arg::Skip,
            ]
        );
        assert!(args![].is_empty());
    }

    #[test]
    fn type_names() {
        assert_eq!(Arg::Null.type_name(), "null");
        assert_eq!(Arg::list([1]).type_name(), "collection");
        assert_eq!(skip().type_name(), "skip");
    }
}
