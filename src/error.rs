/// The errors returned by a [`DisjointSetForest`](struct.DisjointSetForest.html).
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// An index was not below the amount of elements in the forest.
    #[error("index {index} is out of range for a forest of {len} elements")]
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
