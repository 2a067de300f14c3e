//! # Vertices
//!
//! Vertices of a [`RelationGraph`](crate::graph::RelationGraph) can be any type
//! with a total order (`Ord`), a hash and a cheap clone. The order is what every
//! deterministic output of the crate (adjacency index, roots, traversals) is
//! sorted by.
//!
//! Two helpers live here:
//!
//! - [`NumericLabel`]: a textual label that orders by the integer it spells, so
//!   `"9" < "10"` even though the strings compare the other way.
//! - [`VertexIndex`] / [`VertexVec`]: the dense index a graph assigns to each
//!   vertex (its rank in ascending order) and a vector that can only be
//!   indexed by it.

use std::{
    cmp::Ordering,
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{From, Into};
use duplicate::duplicate;
use thiserror::Error;

/// Position of a vertex in the ascending vertex order of a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct VertexIndex(pub usize);

/// A `Vec` that is indexed by [`VertexIndex`] instead of `usize`.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct VertexVec<T>(Vec<T>);

impl<T> VertexVec<T> {
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    pub fn with_capacity(c: usize) -> Self {
        Self(Vec::with_capacity(c))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends `value` and returns the index it landed at.
    #[inline]
    pub fn push(&mut self, value: T) -> VertexIndex {
        let idx = VertexIndex(self.0.len());
        self.0.push(value);
        idx
    }

    #[inline]
    pub fn get(&self, idx: VertexIndex) -> Option<&T> {
        self.0.get(idx.0)
    }

    /// Linear search for the first slot holding `value`.
    pub fn position(&self, value: &T) -> Option<VertexIndex>
    where
        T: PartialEq,
    {
        self.0.iter().position(|t| t == value).map(VertexIndex)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (VertexIndex, &T)> + ExactSizeIterator {
        self.0.iter().enumerate().map(|(u, t)| (VertexIndex(u), t))
    }

    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut T> + ExactSizeIterator {
        self.0.iter_mut()
    }

    /// The values in index order, without their indices.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.0.iter()
    }
}

impl<T> Index<VertexIndex> for VertexVec<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: VertexIndex) -> &Self::Output {
        &self.0[i.0]
    }
}

impl<T> IndexMut<VertexIndex> for VertexVec<T> {
    #[inline]
    fn index_mut(&mut self, i: VertexIndex) -> &mut Self::Output {
        &mut self.0[i.0]
    }
}

impl<T> FromIterator<T> for VertexVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        Self(Vec::from_iter(it))
    }
}

impl<T> From<Vec<T>> for VertexVec<T> {
    #[inline]
    fn from(v: Vec<T>) -> Self {
        Self(v)
    }
}

impl<'a, T> IntoIterator for &'a VertexVec<T> {
    type Item = (VertexIndex, &'a T);
    type IntoIter = std::iter::Map<
        std::iter::Enumerate<std::slice::Iter<'a, T>>,
        fn((usize, &T)) -> (VertexIndex, &T),
    >;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().enumerate().map(|(u, t)| (VertexIndex(u), t))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("vertex label {label:?} is not an integer")]
pub struct LabelParseError {
    pub label: String,
}

/// A vertex label that must spell an integer and is ordered by that integer.
///
/// Equality and hashing use the text, so `"7"` and `"07"` are distinct
/// vertices; ordering compares the numeric value first and falls back to the
/// text, which keeps `Ord` consistent with `Eq`.
///
/// ```
/// use relgraph::vertex::NumericLabel;
///
/// let nine: NumericLabel = "9".parse().unwrap();
/// let ten: NumericLabel = "10".parse().unwrap();
/// assert!(nine < ten);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct NumericLabel {
    value: i64,
    text: String,
}

impl NumericLabel {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Ord for NumericLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for NumericLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for NumericLabel {
    type Err = LabelParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|_| LabelParseError {
            label: s.to_owned(),
        })?;
        Ok(NumericLabel {
            value,
            text: s.to_owned(),
        })
    }
}

impl TryFrom<String> for NumericLabel {
    type Error = LabelParseError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| LabelParseError { label: text.clone() })?;
        Ok(NumericLabel { value, text })
    }
}

impl From<NumericLabel> for String {
    fn from(label: NumericLabel) -> Self {
        label.text
    }
}

impl fmt::Display for NumericLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

duplicate! {
    [types; [i8]; [i16]; [i32]; [i64]; [u8]; [u16]; [u32];]

    impl From<types> for NumericLabel {
        fn from(value: types) -> Self {
            NumericLabel {
                value: i64::from(value),
                text: value.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_order_numerically() {
        let mut labels: Vec<NumericLabel> = ["10", "9", "-3", "100", "0"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        labels.sort();
        let texts: Vec<&str> = labels.iter().map(NumericLabel::as_str).collect();
        assert_eq!(texts, ["-3", "0", "9", "10", "100"]);
    }

    #[test]
    fn padded_labels_are_distinct_but_adjacent() {
        let seven: NumericLabel = "7".parse().unwrap();
        let padded: NumericLabel = "07".parse().unwrap();
        let eight = NumericLabel::from(8u8);

        assert_ne!(seven, padded);
        assert_eq!(seven.value(), padded.value());
        assert!(padded < seven);
        assert!(seven < eight);
    }

    #[test]
    fn non_numeric_label_is_rejected() {
        let err = "seven".parse::<NumericLabel>().unwrap_err();
        assert_eq!(err.label, "seven");
        assert_eq!(err.to_string(), "vertex label \"seven\" is not an integer");

        assert!(NumericLabel::try_from(String::from("1.5")).is_err());
    }

    #[test]
    fn vertex_vec_indexing() {
        let mut v: VertexVec<&str> = VertexVec::new();
        let a = v.push("a");
        let b = v.push("b");
        assert_eq!(a, VertexIndex(0));
        assert_eq!(v[b], "b");
        assert_eq!(v.position(&"b"), Some(b));
        assert_eq!(v.position(&"z"), None);
        assert_eq!(v.len(), 2);
        assert_eq!(usize::from(b), 1);
    }
}
