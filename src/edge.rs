use std::fmt;

/// A directed edge from `source` to `destination`.
///
/// Two edges are equal exactly when both endpoints are equal, so a set of
/// edges is a relation over the vertex type. Self-loops are allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bincode", derive(bincode::Encode, bincode::Decode))]
pub struct Edge<V> {
    source: V,
    destination: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, destination: V) -> Self {
        Edge {
            source,
            destination,
        }
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// The same edge pointing the other way.
    pub fn reversed(self) -> Self {
        Edge {
            source: self.destination,
            destination: self.source,
        }
    }

    pub fn into_pair(self) -> (V, V) {
        (self.source, self.destination)
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, destination): (V, V)) -> Self {
        Edge::new(source, destination)
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.destination)
    }
}

#[cfg(test)]
mod test {
    use ahash::AHashSet;

    use super::Edge;

    #[test]
    fn structural_equality() {
        let edges: AHashSet<Edge<u32>> = [(1, 2), (1, 2), (2, 1), (3, 3)]
            .into_iter()
            .map(Edge::from)
            .collect();

        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&Edge::new(2, 1)));
        assert!(Edge::new(3, 3).is_self_loop());
        assert!(!Edge::new(1, 2).is_self_loop());
    }

    #[test]
    fn reversal() {
        let e = Edge::new("a", "b");
        assert_eq!(e.reversed(), Edge::new("b", "a"));
        assert_eq!(e.reversed().reversed(), e);
        assert_eq!(e.to_string(), "a -> b");
    }
}
