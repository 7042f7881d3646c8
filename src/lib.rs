//! A [disjoint-sets/union-find] forest over the indices `0 .. n`.
//!
//! The main struct of this crate is [`DisjointSetForest`] which partitions the indices
//! `0 .. n` in disjoint sets.
//! The elements each start in their own set and these sets can be joined with the `unite`
//! method.
//! The representative of a set is given by the `root` method and you can check if elements
//! share a set with the `same_set` method or iterate over the elements in a set with the `set`
//! method.
//!
//! How `root` rewrites the tree while searching and how `unite` joins two trees is chosen with
//! a [`Config`].
//! With full path compression and union by rank the `unite` and `root` methods have an
//! amortized complexity of `O(α(n))` where 'α' is the inverse Ackermann function.
//! The default links the root of the second set under the root of the first set without any
//! balancing, which keeps the representative of the first argument stable.
//!
//! This can be used for example to keep track of the connected components of an undirected
//! graph.
//! It is also a key component in implementing Kruskal's algorithm to find the minimum spanning
//! tree of a graph, which is provided in the [`kruskal`] module.
//!
//! Every method that takes an index returns an [`Error`] if the index is out of range.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetForest`]: struct.DisjointSetForest.html
//! [`Config`]: struct.Config.html
//! [`Error`]: enum.Error.html
//! [`kruskal`]: kruskal/index.html

pub mod config;
pub mod disjoint_sets;
mod error;
pub mod kruskal;

pub use config::{Config, Linking, PathCompression};
pub use disjoint_sets::forest::DisjointSetForest;
pub use error::{Error, Result};
