//! Multi-asset trajectory: one [`Path`] per asset on a shared grid.

use std::ops::Index;
use std::sync::Arc;

use pricer_core::types::TimeGrid;

use super::path::Path;

/// Set of per-asset paths sharing one time grid.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pricer_core::types::TimeGrid;
/// use pricer_paths::path::MultiPath;
///
/// let grid = Arc::new(TimeGrid::uniform(1.0, 12).unwrap());
/// let multi = MultiPath::new(3, grid);
///
/// assert_eq!(multi.asset_count(), 3);
/// assert_eq!(multi.path_size(), 12);
/// assert_eq!(multi[2].len(), 12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPath {
    grid: Arc<TimeGrid>,
    paths: Vec<Path>,
}

impl MultiPath {
    /// Creates `asset_count` zero-filled paths over `grid`.
    pub fn new(asset_count: usize, grid: Arc<TimeGrid>) -> Self {
        let paths = (0..asset_count).map(|_| Path::new(Arc::clone(&grid))).collect();
        Self { grid, paths }
    }

    /// Number of assets.
    #[inline]
    pub fn asset_count(&self) -> usize {
        self.paths.len()
    }

    /// Number of steps in each path.
    #[inline]
    pub fn path_size(&self) -> usize {
        self.grid.steps()
    }

    /// Shared time grid.
    #[inline]
    pub fn time_grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Path of asset `j`, if it exists.
    #[inline]
    pub fn get(&self, j: usize) -> Option<&Path> {
        self.paths.get(j)
    }

    /// Iterates over the asset paths in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Path> {
        self.paths.iter()
    }

    #[inline]
    pub(crate) fn paths_mut(&mut self) -> &mut [Path] {
        &mut self.paths
    }
}

impl Index<usize> for MultiPath {
    type Output = Path;

    #[inline]
    fn index(&self, j: usize) -> &Path {
        &self.paths[j]
    }
}

impl<'a> IntoIterator for &'a MultiPath {
    type Item = &'a Path;
    type IntoIter = std::slice::Iter<'a, Path>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_share_grid() {
        let grid = Arc::new(TimeGrid::new(vec![0.0, 0.5, 2.0]).unwrap());
        let multi = MultiPath::new(2, Arc::clone(&grid));

        // One handle held here, one by the multi-path, one per asset path
        assert_eq!(Arc::strong_count(&grid), 4);
        for path in &multi {
            assert_eq!(path.time_grid(), grid.as_ref());
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let grid = Arc::new(TimeGrid::uniform(1.0, 1).unwrap());
        let multi = MultiPath::new(1, grid);
        assert!(multi.get(0).is_some());
        assert!(multi.get(1).is_none());
        assert_eq!(multi.iter().count(), 1);
    }

    #[test]
    fn test_zero_assets() {
        let grid = Arc::new(TimeGrid::uniform(1.0, 4).unwrap());
        let multi = MultiPath::new(0, grid);
        assert_eq!(multi.asset_count(), 0);
        assert_eq!(multi.path_size(), 4);
    }
}
