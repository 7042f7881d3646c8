//! Strategies used by a [`DisjointSetForest`] while searching and joining trees.
//!
//! [`DisjointSetForest`]: ../struct.DisjointSetForest.html

/// How the `root` method rewrites the parents it visits.
///
/// Compression never changes the partition or the root that is returned,
/// only the shape of the trees.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PathCompression {
    /// Parents are never rewritten.
    /// A lookup takes time linear in the depth of the element.
    None,
    /// Every element on the path is pointed directly at the root.
    #[default]
    Full,
    /// Every other element on the path is pointed at its grandparent.
    /// This needs a single pass over the path.
    Halving,
}

/// Which root becomes the root of the joined set in `unite`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Linking {
    /// The root of the first argument always stays the root.
    ///
    /// No balancing is done so a bad order of unions can build trees of linear depth.
    #[default]
    FirstRoot,
    /// The root with the lower rank is placed under the root with the higher rank.
    /// On a tie the root of the first argument stays the root.
    ByRank,
}

/// The strategies of a [`DisjointSetForest`].
///
/// # Examples
///
/// ```
/// use disjoint_forest::{Config, Linking, PathCompression};
///
/// let config = Config::new()
///     .with_compression(PathCompression::Halving)
///     .with_linking(Linking::ByRank);
///
/// assert!(config.compression == PathCompression::Halving);
/// assert!(Config::default().linking == Linking::FirstRoot);
/// ```
///
/// [`DisjointSetForest`]: ../struct.DisjointSetForest.html
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Config {
    pub compression: PathCompression,
    pub linking: Linking,
}

impl Config {
    /// Full path compression and first root linking.
    #[inline]
    pub const fn new() -> Self {
        Self {
            compression: PathCompression::Full,
            linking: Linking::FirstRoot,
        }
    }

    #[inline]
    pub const fn with_compression(mut self, compression: PathCompression) -> Self {
        self.compression = compression;
        self
    }

    #[inline]
    pub const fn with_linking(mut self, linking: Linking) -> Self {
        self.linking = linking;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_matches_default() {
        assert_eq!(Config::new(), Config::default());
    }
}
