//! [Kruskal's algorithm] for a minimum spanning forest of an undirected graph.
//!
//! [Kruskal's algorithm]: https://en.wikipedia.org/wiki/Kruskal%27s_algorithm

use {
    log::debug,
    crate::{
        config::{Config, Linking},
        disjoint_sets::forest::DisjointSetForest,
        error::Result,
    },
};

/// An undirected edge between the vertices `u` and `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge<W> {
    pub u: usize,
    pub v: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    #[inline]
    pub fn new(u: usize, v: usize, weight: W) -> Self {
        Self { u, v, weight }
    }
}

/// Returns the edges of a minimum spanning forest of the graph with the vertices `0 .. len`.
///
/// The edges are considered from the lowest to the highest weight, edges of equal weight in the
/// order they were given.
/// An edge is kept if it connects two vertices that were not connected yet.
/// The kept edges are returned in the order they were chosen.
/// A graph with `c` connected components gives `len - c` edges.
///
/// # Errors
///
/// If an endpoint of any edge is not below `len`.
///
/// # Examples
///
/// ```
/// use disjoint_forest::kruskal::{minimum_spanning_forest, total_weight, Edge};
///
/// # fn main() -> disjoint_forest::Result<()> {
/// let edges = vec![
///     Edge::new(0, 1, 4),
///     Edge::new(1, 2, 1),
///     Edge::new(0, 2, 3),
///     Edge::new(2, 3, 2),
/// ];
///
/// let tree = minimum_spanning_forest(4, edges)?;
///
/// assert!(tree == [Edge::new(1, 2, 1), Edge::new(2, 3, 2), Edge::new(0, 2, 3)]);
/// assert!(total_weight(&tree) == 6);
/// # Ok(())
/// # }
/// ```
pub fn minimum_spanning_forest<W, I>(len: usize, edges: I) -> Result<Vec<Edge<W>>>
where
    W: Ord,
    I: IntoIterator<Item = Edge<W>>,
{
    let config = Config::new().with_linking(Linking::ByRank);
    let mut forest = DisjointSetForest::with_config(len, config);

    let mut edges: Vec<Edge<W>> = edges.into_iter().collect();
    for edge in &edges {
        forest.check(edge.u)?;
        forest.check(edge.v)?;
    }

    edges.sort_by(|first, second| first.weight.cmp(&second.weight));

    let mut tree = Vec::with_capacity(len.saturating_sub(1));
    let considered = edges.len();

    for edge in edges {
        // A single set can not be joined any further.
        if forest.amount_of_sets() <= 1 {
            break
        }

        if forest.unite(edge.u, edge.v)? {
            tree.push(edge);
        }
    }

    debug!(
        "spanning forest of {} vertices uses {} of {} edges in {} components",
        len,
        tree.len(),
        considered,
        forest.amount_of_sets(),
    );

    Ok(tree)
}

/// Returns the sum of the weights of `edges`.
pub fn total_weight<W>(edges: &[Edge<W>]) -> W where W: Copy + std::iter::Sum<W> {
    edges.iter().map(|edge| edge.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn spanning_tree_of_a_connected_graph() {
        // A square with both diagonals.
        let edges = vec![
            Edge::new(0, 1, 1),
            Edge::new(1, 2, 5),
            Edge::new(2, 3, 1),
            Edge::new(3, 0, 4),
            Edge::new(0, 2, 3),
            Edge::new(1, 3, 2),
        ];

        let tree = minimum_spanning_forest(4, edges).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(total_weight(&tree), 4);
        assert_eq!(tree, vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1), Edge::new(1, 3, 2)]);
    }

    #[test]
    fn spanning_forest_of_a_disconnected_graph() {
        let edges = vec![
            Edge::new(0, 1, 7u64),
            Edge::new(1, 2, 3),
            Edge::new(0, 2, 1),
            Edge::new(3, 4, 9),
        ];

        let tree = minimum_spanning_forest(6, edges).unwrap();

        // Three components: {0, 1, 2}, {3, 4} and {5}.
        assert_eq!(tree.len(), 6 - 3);
        assert_eq!(total_weight(&tree), 13);
        assert!(!tree.contains(&Edge::new(0, 1, 7)));
    }

    #[test]
    fn loops_and_parallel_edges_are_skipped() {
        let edges = vec![
            Edge::new(0, 0, 0),
            Edge::new(0, 1, 2),
            Edge::new(1, 0, 1),
        ];

        let tree = minimum_spanning_forest(2, edges).unwrap();

        assert_eq!(tree, vec![Edge::new(1, 0, 1)]);
    }

    #[test]
    fn empty_graph() {
        let tree = minimum_spanning_forest::<u32, _>(0, Vec::new()).unwrap();

        assert!(tree.is_empty());
        assert_eq!(total_weight(&tree), 0);
    }

    #[test]
    fn endpoints_out_of_range_are_errors() {
        let edges = vec![Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(0, 5, 9)];

        assert_eq!(
            minimum_spanning_forest(3, edges),
            Err(Error::IndexOutOfRange { index: 5, len: 3 }),
        );
    }
}
