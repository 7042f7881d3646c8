//! A [disjoint-sets/union-find] forest over the indices `0 .. n`.
//!
//! See [`DisjointSetForest`] for more information.
//!
//! [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//! [`DisjointSetForest`]: struct.DisjointSetForest.html

use {
    std::{
        cmp::Ordering,
        collections::{hash_map, HashMap},
        fmt,
        hash::Hash,
        iter::FusedIterator,
        ops,
    },
    bit_vec::BitVec,
    log::{debug, trace},
    crate::{
        config::{Config, Linking, PathCompression},
        disjoint_sets::node::Node,
        error::{Error, Result},
    },
};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

/// A [disjoint-sets/union-find] forest partitioning the indices `0 .. n` in sets.
///
/// Initially each index has its own set but sets can be joined with the `unite` method.
/// Each set is a tree of parent links and the root of that tree is the representative of the
/// set, returned by the `root` method.
///
/// In addition to the parent we store an additional index for each element.
/// These indices form a circular linked list of the set the element is in.
/// This allows for fast iteration of the set using the `set` method.
///
/// The forest never grows or shrinks after construction and the partition only gets coarser.
/// Lookups compress paths through a shared reference, so a `DisjointSetForest` can be sent to
/// another thread but not shared between threads without a lock.
///
/// # Examples
///
/// ```
/// use disjoint_forest::DisjointSetForest;
///
/// # fn main() -> disjoint_forest::Result<()> {
/// let mut forest = DisjointSetForest::new(5);
/// forest.unite(0, 1)?;
/// forest.unite(1, 2)?;
/// assert!(forest.root(0)? == forest.root(2)?);
///
/// forest.unite(3, 4)?;
/// assert!(forest.root(0)? != forest.root(3)?);
///
/// forest.unite(2, 3)?;
/// assert!(forest.root(0)? == forest.root(4)?);
/// # Ok(())
/// # }
/// ```
///
/// [disjoint-sets/union-find]: https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Clone)]
pub struct DisjointSetForest {
    /// The tree and list structure for each index.
    nodes: Vec<Node>,
    /// The amount of roots in `nodes`.
    sets: usize,
    config: Config,
}

/// Creates a [`DisjointSetForest`] from a list of set labels.
///
/// The forest has an index for every label and indices with equal labels share a set.
/// You can use any labels that implement `Hash` and `Eq`.
/// The labels are only used during construction and are not stored.
///
/// ```
/// # #[macro_use]
/// # extern crate disjoint_forest;
/// #
/// # fn main() {
/// let forest = forest!['a', 'b', 'a', 'c', 'b'];
///
/// assert!(forest.len() == 5);
/// assert!(forest.amount_of_sets() == 3);
/// assert!(forest.same_set(0, 2) == Ok(true));
/// assert!(forest.same_set(1, 4) == Ok(true));
/// assert!(forest.is_singleton(3) == Ok(true));
/// # }
/// ```
///
/// [`DisjointSetForest`]: disjoint_sets/forest/struct.DisjointSetForest.html
#[macro_export]
macro_rules! forest {
    ($($label: expr),+ $(,)?) => {
        <$crate::DisjointSetForest as ::std::iter::FromIterator<_>>::from_iter([$($label),+])
    };
}

impl DisjointSetForest {
    /// Constructs a forest of `len` singleton sets with the default [`Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// let forest = DisjointSetForest::new(3);
    ///
    /// assert!(forest.len() == 3);
    /// assert!(forest.amount_of_sets() == 3);
    /// assert!(forest.root(2) == Ok(2));
    /// ```
    ///
    /// [`Config`]: ../../struct.Config.html
    #[inline]
    pub fn new(len: usize) -> Self {
        Self::with_config(len, Config::default())
    }

    /// Constructs a forest of `len` singleton sets using the strategies of `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::{Config, DisjointSetForest, Linking};
    ///
    /// let config = Config::new().with_linking(Linking::ByRank);
    /// let forest = DisjointSetForest::with_config(4, config);
    ///
    /// assert!(forest.config().linking == Linking::ByRank);
    /// ```
    pub fn with_config(len: usize, config: Config) -> Self {
        debug!("creating a forest of {} singletons with {:?}", len, config);

        Self {
            nodes: (0 .. len).map(Node::new).collect(),
            sets: len,
            config,
        }
    }

    /// Returns the amount of indices in the forest.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the forest has no indices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the strategies used by this forest.
    #[inline]
    pub fn config(&self) -> Config {
        self.config
    }

    /// Gives the representative of the set that `index` belongs to.
    ///
    /// Each index of a set gives the same value until the set is joined with another set.
    /// Depending on the configured [`PathCompression`] the parents visited on the way to the
    /// root are rewritten, this never changes the returned root.
    ///
    /// # Errors
    ///
    /// If `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let mut forest = DisjointSetForest::new(3);
    /// forest.unite(2, 0)?;
    ///
    /// // The root of the first argument stays the root.
    /// assert!(forest.root(0)? == 2);
    /// assert!(forest.root(1)? == 1);
    /// assert!(forest.root(3).is_err());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`PathCompression`]: ../../enum.PathCompression.html
    #[inline]
    pub fn root(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        Ok(self.find(index))
    }

    /// Joins the sets of the `first_index` and the `second_index`.
    ///
    /// Returns `true` if two sets were joined and `false` if both indices already shared a set,
    /// in which case nothing changes.
    /// Which root becomes the root of the joined set is decided by the configured [`Linking`].
    ///
    /// # Errors
    ///
    /// If `first_index` or `second_index` is out of range.
    /// The forest is not changed in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let mut forest = DisjointSetForest::new(4);
    ///
    /// assert!(forest.unite(1, 2)?);
    /// assert!(forest.len_of_set(1)? == 2);
    ///
    /// assert!(forest.unite(2, 3)?);
    /// assert!(forest.len_of_set(1)? == 3);
    ///
    /// // They already share a set.
    /// assert!(!forest.unite(3, 1)?);
    /// assert!(forest.amount_of_sets() == 2);
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// [`Linking`]: ../../enum.Linking.html
    pub fn unite(&mut self, first_index: usize, second_index: usize) -> Result<bool> {
        self.check(first_index)?;
        self.check(second_index)?;

        Ok(self.join(first_index, second_index))
    }

    /// Returns `true` if `first_index` and `second_index` are in the same set.
    ///
    /// # Errors
    ///
    /// If `first_index` or `second_index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let mut forest = DisjointSetForest::new(4);
    ///
    /// forest.unite(1, 3)?;
    /// forest.unite(0, 1)?;
    ///
    /// assert!(forest.same_set(0, 3)?);
    /// assert!(!forest.same_set(0, 2)?);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn same_set(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.root(first_index)? == self.root(second_index)?)
    }

    /// Returns `true` if `first_index` and `second_index` are in different sets.
    ///
    /// # Errors
    ///
    /// If `first_index` or `second_index` is out of range.
    #[inline]
    pub fn other_sets(&self, first_index: usize, second_index: usize) -> Result<bool> {
        Ok(self.root(first_index)? != self.root(second_index)?)
    }

    /// Returns `true` if `index` is the only element of its set.
    ///
    /// # Errors
    ///
    /// If `index` is out of range.
    #[inline]
    pub fn is_singleton(&self, index: usize) -> Result<bool> {
        self.check(index)?;

        Ok(self.nodes[index].link() == index)
    }

    /// Returns the amount of elements in the set that `index` belongs to.
    ///
    /// This method will be executed in `O(m)` time where `m` is the size of the set of `index`.
    ///
    /// # Errors
    ///
    /// If `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let mut forest = DisjointSetForest::new(3);
    /// forest.unite(0, 2)?;
    ///
    /// assert!(forest.len_of_set(0)? == 2);
    /// assert!(forest.len_of_set(1)? == 1);
    /// assert!(forest.len_of_set(2)? == 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn len_of_set(&self, index: usize) -> Result<usize> {
        self.check(index)?;

        let mut current = self.nodes[index].link();
        let mut count = 1;

        while current != index {
            current = self.nodes[current].link();
            count += 1;
        }

        Ok(count)
    }

    /// Returns the amount of sets in the forest.
    ///
    /// After `k` calls to `unite` that joined two sets a forest of `n` elements has `n - k`
    /// sets.
    #[inline]
    pub fn amount_of_sets(&self) -> usize {
        self.sets
    }

    /// Returns an iterator over the indices in the set that `index` belongs to.
    ///
    /// The order the elements are returned in is not specified.
    ///
    /// # Errors
    ///
    /// If `index` is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_forest;
    /// #
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let forest = forest!["first", "first", "second", "first"];
    ///
    /// let mut members: Vec<usize> = forest.set(3)?.collect();
    /// members.sort();
    ///
    /// assert!(members == [0, 1, 3]);
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    pub fn set(&self, index: usize) -> Result<Set<'_>> {
        self.check(index)?;

        Ok(Set {
            forest: self,
            current: Some(index),
            start: index,
        })
    }

    /// Returns an iterator over all sets of the forest.
    ///
    /// Each set is returned exactly once, ordered by the smallest index it contains.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_forest;
    /// #
    /// # fn main() {
    /// let forest = forest![1, 2, 1, 3, 2];
    ///
    /// let sizes: Vec<usize> = forest.all_sets().map(|set| set.count()).collect();
    ///
    /// assert!(sizes == [2, 2, 1]);
    /// # }
    /// ```
    #[inline]
    pub fn all_sets(&self) -> AllSets<'_> {
        AllSets {
            forest: self,
            done: BitVec::from_elem(self.len(), false),
            range: 0 .. self.len(),
        }
    }

    /// Returns an iterator over the representatives of all sets in ascending order.
    ///
    /// This does not rewrite any parents.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(index, node)| node.is_root(index))
            .map(|(index, _)| index)
    }

    /// Returns the root of every index.
    ///
    /// The forest is not changed, the roots are found on a copy of the parents.
    /// With the `rayon` feature the copy is processed in parallel.
    ///
    /// # Examples
    ///
    /// ```
    /// use disjoint_forest::DisjointSetForest;
    ///
    /// # fn main() -> disjoint_forest::Result<()> {
    /// let mut forest = DisjointSetForest::new(4);
    /// forest.unite(3, 1)?;
    /// forest.unite(1, 0)?;
    ///
    /// assert!(forest.labels() == [3, 3, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn labels(&self) -> Vec<usize> {
        let mut labels: Vec<usize> = self.nodes.iter().map(Node::parent).collect();

        // Every round points each index at its grandparent which halves the height of a tree.
        loop {
            let next = jump(&labels);

            if next == labels {
                return labels
            }

            labels = next;
        }
    }

    /// Returns the sets of the forest with their indices in ascending order.
    ///
    /// The sets are ordered by their smallest index.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use]
    /// # extern crate disjoint_forest;
    /// #
    /// # fn main() {
    /// let forest = forest!['x', 'y', 'x', 'z', 'y'];
    ///
    /// assert!(forest.partition() == vec![vec![0, 2], vec![1, 4], vec![3]]);
    /// # }
    /// ```
    pub fn partition(&self) -> Vec<Vec<usize>> {
        self.all_sets()
            .map(|set| {
                let mut set: Vec<usize> = set.collect();
                set.sort_unstable();
                set
            })
            .collect()
    }

    /// Returns an error if `index` is not an index of this forest.
    #[inline]
    pub(crate) fn check(&self, index: usize) -> Result<()> {
        if index < self.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }

    /// Joins the sets of two indices that are known to be in range.
    fn join(&mut self, first_index: usize, second_index: usize) -> bool {
        let i = self.find(first_index);
        let j = self.find(second_index);

        if i == j {
            return false
        }

        // We swap the values of the links which splices the two circular lists.
        let link_i = self.nodes[i].link();
        let link_j = self.nodes[j].link();
        self.nodes[i].set_link(link_j);
        self.nodes[j].set_link(link_i);

        let root = match self.config.linking {
            Linking::FirstRoot => {
                self.nodes[j].set_parent(i);
                i
            },
            // We add to the tree with the highest rank.
            Linking::ByRank => match Ord::cmp(&self.nodes[i].rank(), &self.nodes[j].rank()) {
                Ordering::Less => {
                    self.nodes[i].set_parent(j);
                    j
                },
                Ordering::Equal => {
                    // We add the second tree to the first tree.
                    self.nodes[j].set_parent(i);
                    // The first tree becomes higher.
                    self.nodes[i].set_rank(self.nodes[i].rank() + 1);
                    i
                },
                Ordering::Greater => {
                    self.nodes[j].set_parent(i);
                    i
                },
            },
        };

        self.sets -= 1;
        trace!("joined the sets of {} and {} under root {}", first_index, second_index, root);

        true
    }

    /// Gives the representative of the set that `index` belongs to and compresses the path
    /// according to the configured `PathCompression`.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    pub(crate) fn find(&self, index: usize) -> usize {
        match self.config.compression {
            PathCompression::None => self.find_final(index),
            PathCompression::Full => {
                let root = self.find_final(index);

                // We walk the path again and point everything on it at the root.
                let mut current = index;
                while current != root {
                    let parent = self.nodes[current].parent();
                    self.nodes[current].set_parent(root);
                    current = parent;
                }

                root
            },
            PathCompression::Halving => {
                let mut current = index;

                while !self.nodes[current].is_root(current) {
                    let grandparent = self.nodes[self.nodes[current].parent()].parent();
                    self.nodes[current].set_parent(grandparent);
                    current = grandparent;
                }

                current
            },
        }
    }

    /// Gives the representative of the set that `index` belongs to without updating the
    /// parents while finding it.
    ///
    /// # Panics
    ///
    /// If `index` is out of bounds.
    #[inline]
    pub(crate) fn find_final(&self, mut index: usize) -> usize {
        while !self.nodes[index].is_root(index) {
            index = self.nodes[index].parent();
        }

        index
    }
}

/// Points every index at the parent of its parent.
#[cfg(feature = "rayon")]
fn jump(parents: &[usize]) -> Vec<usize> {
    parents.par_iter().map(|&parent| parents[parent]).collect()
}

/// Points every index at the parent of its parent.
#[cfg(not(feature = "rayon"))]
fn jump(parents: &[usize]) -> Vec<usize> {
    parents.iter().map(|&parent| parents[parent]).collect()
}

impl Default for DisjointSetForest {
    fn default() -> Self {
        Self::new(0)
    }
}

impl fmt::Debug for DisjointSetForest {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        // We map the roots to `usize` names.
        let mut map = HashMap::with_capacity(self.sets);
        let mut builder = formatter.debug_list();

        for (index, root) in self.labels().into_iter().enumerate() {
            let names = map.len();
            let name = *map.entry(root).or_insert(names);

            builder.entry(&format_args!("{} => {}", index, name));
        }

        builder.finish()
    }
}

/// Formats a single set as `{0, 2}`.
struct AsSet<'a>(&'a [usize]);

impl fmt::Debug for AsSet<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.debug_set().entries(self.0.iter()).finish()
    }
}

impl fmt::Display for DisjointSetForest {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let partition = self.partition();

        formatter.debug_set()
            .entries(partition.iter().map(|set| AsSet(set)))
            .finish()
    }
}

impl PartialEq for DisjointSetForest {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() || self.sets != other.sets {
            return false
        }

        // We map the roots of self to the roots of other.
        // With an equal amount of sets this map is a bijection if it is consistent.
        let mut map = HashMap::with_capacity(self.sets);

        for (self_root, other_root) in self.labels().into_iter().zip(other.labels()) {
            match map.entry(self_root) {
                hash_map::Entry::Occupied(occupied) => {
                    if *occupied.get() != other_root {
                        return false
                    }
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(other_root);
                },
            }
        }

        true
    }
}

impl Eq for DisjointSetForest {}

impl<L> FromIterator<L> for DisjointSetForest where L: Hash + Eq {
    fn from_iter<I>(iter: I) -> Self where I: IntoIterator<Item = L> {
        let labels: Vec<L> = iter.into_iter().collect();
        let mut forest = Self::new(labels.len());

        // We map a label to the first index with that label.
        let mut map = HashMap::with_capacity(labels.len());

        for (index, label) in labels.into_iter().enumerate() {
            match map.entry(label) {
                hash_map::Entry::Occupied(occupied) => {
                    forest.join(*occupied.get(), index);
                },
                hash_map::Entry::Vacant(vacant) => {
                    vacant.insert(index);
                },
            }
        }

        forest
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for DisjointSetForest {
    type Parameters = proptest::collection::SizeRange;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(size_range: Self::Parameters) -> Self::Strategy {
        // Trailing zeros of a random number give a few large sets and many small ones.
        proptest::collection::vec(any::<usize>(), size_range)
            .prop_map(|labels| {
                labels.into_iter().map(usize::trailing_zeros).collect::<Self>()
            })
            .boxed()
    }
}

/// An iterator over a set in a `DisjointSetForest`.
///
/// This struct is created by the [`set`] method on [`DisjointSetForest`].
/// See its documentation for more.
///
/// [`set`]: struct.DisjointSetForest.html#method.set
/// [`DisjointSetForest`]: struct.DisjointSetForest.html
#[derive(Clone, Debug)]
pub struct Set<'a> {
    forest: &'a DisjointSetForest,
    current: Option<usize>,
    start: usize,
}

impl Iterator for Set<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let next = self.forest.nodes[current].link();

        // We are back where we started.
        self.current = if next == self.start {
            None
        } else {
            Some(next)
        };

        Some(current)
    }
}

impl FusedIterator for Set<'_> {}

/// An iterator over all sets in a `DisjointSetForest`.
///
/// This struct is created by the [`all_sets`] method on [`DisjointSetForest`].
/// See its documentation for more information.
///
/// [`all_sets`]: struct.DisjointSetForest.html#method.all_sets
/// [`DisjointSetForest`]: struct.DisjointSetForest.html
#[derive(Clone, Debug)]
pub struct AllSets<'a> {
    forest: &'a DisjointSetForest,
    done: BitVec,
    range: ops::Range<usize>,
}

impl<'a> AllSets<'a> {
    /// Returns the set of `index` if it was not returned yet.
    fn visit(&mut self, index: usize) -> Option<Set<'a>> {
        let root = self.forest.find_final(index);

        if self.done[root] {
            return None
        }

        self.done.set(root, true);

        Some(Set {
            forest: self.forest,
            current: Some(root),
            start: root,
        })
    }
}

impl<'a> Iterator for AllSets<'a> {
    type Item = Set<'a>;

    fn next(&mut self) -> Option<Set<'a>> {
        // We keep going until we find a set we have not returned yet.
        loop {
            let index = self.range.next()?;

            if let Some(set) = self.visit(index) {
                return Some(set)
            }
        }
    }
}

impl<'a> DoubleEndedIterator for AllSets<'a> {
    fn next_back(&mut self) -> Option<Set<'a>> {
        loop {
            let index = self.range.next_back()?;

            if let Some(set) = self.visit(index) {
                return Some(set)
            }
        }
    }
}

impl FusedIterator for AllSets<'_> {}
