use std::cell::Cell;

/// This provides the tree and list structure for a given index in the `DisjointSetForest`.
///
/// For each index in the `DisjointSetForest` we store a `Node`.
/// The values are stored in a `Cell` so the parents can be compressed during a lookup
/// through a shared reference.
#[derive(Clone, Debug)]
pub(crate) struct Node {
    /// The parent of the index in its sets tree.
    /// These form an upside down tree where each child has the index of its parent.
    parent: Cell<usize>,
    /// A link to another index.
    /// These form a circular linked list in its subset.
    link: Cell<usize>,
    /// A maximum to the height of the tree below this index.
    /// Only kept up to date when linking by rank, which bounds it by the bits of a `usize`.
    rank: Cell<u8>,
}

impl Node {
    /// Create a new `Node` for an element with the given index.
    pub(crate) fn new(index: usize) -> Self {
        Self {
            parent: Cell::new(index),
            link: Cell::new(index),
            rank: Cell::new(0),
        }
    }

    /// Return `true` if this node, stored at `index`, is the root of its tree.
    pub(crate) fn is_root(&self, index: usize) -> bool {
        self.parent.get() == index
    }

    /// Return the `parent` variable.
    pub(crate) fn parent(&self) -> usize {
        self.parent.get()
    }

    /// Set the `parent` variable.
    pub(crate) fn set_parent(&self, value: usize) {
        self.parent.set(value);
    }

    /// Return the `link` variable.
    pub(crate) fn link(&self) -> usize {
        self.link.get()
    }

    /// Set the `link` variable.
    pub(crate) fn set_link(&self, value: usize) {
        self.link.set(value);
    }

    /// Return the `rank` variable.
    pub(crate) fn rank(&self) -> u8 {
        self.rank.get()
    }

    /// Set the `rank` variable.
    pub(crate) fn set_rank(&self, value: u8) {
        self.rank.set(value);
    }
}
