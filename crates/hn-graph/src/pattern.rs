//! Sparse boolean matrix pattern.
//!
//! Stores only the set entries of a square `n x n` matrix, row by row, with
//! column indexes kept sorted. Used for the node connectivity relation.

/// Square sparse boolean matrix.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SparseMatrixPattern {
    /// Sorted column indexes per row.
    rows: Vec<Vec<usize>>,
}

impl SparseMatrixPattern {
    /// Create an empty `n x n` pattern.
    pub fn new(n: usize) -> Self {
        Self {
            rows: vec![Vec::new(); n],
        }
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    /// Number of set entries.
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether entry `(i, j)` is set. Out-of-range entries are never set.
    pub fn test(&self, i: usize, j: usize) -> bool {
        self.rows
            .get(i)
            .is_some_and(|row| row.binary_search(&j).is_ok())
    }

    /// Set entry `(i, j)`. Returns `true` if the entry was newly set.
    ///
    /// # Panics
    ///
    /// Panics if `i` or `j` is not below [`SparseMatrixPattern::dim`].
    pub fn set(&mut self, i: usize, j: usize) -> bool {
        let n = self.rows.len();
        assert!(i < n && j < n, "pattern entry ({i}, {j}) outside {n}x{n}");
        let row = &mut self.rows[i];
        match row.binary_search(&j) {
            Ok(_) => false,
            Err(pos) => {
                row.insert(pos, j);
                true
            }
        }
    }

    /// Set both `(i, j)` and `(j, i)`.
    pub fn set_symmetric(&mut self, i: usize, j: usize) -> bool {
        let a = self.set(i, j);
        let b = self.set(j, i);
        a || b
    }

    /// Column indexes of the set entries in row `i`, ascending.
    pub fn indexes_per_row(&self, i: usize) -> &[usize] {
        self.rows.get(i).map_or(&[], Vec::as_slice)
    }

    /// Close a symmetric pattern under transitivity.
    ///
    /// For every intermediate `k`, every pair `(i, j)` with `(i, k)` and
    /// `(k, j)` set becomes set (in both directions). Entries only ever go
    /// from unset to set, so a single sweep over `k` reaches the fixed point.
    /// Returns the number of entries added.
    pub fn transitive_closure(&mut self) -> usize {
        let mut added = 0;
        for k in 0..self.dim() {
            // Snapshot: row k may grow while its own entries are expanded.
            let reach = self.rows[k].clone();
            for &i in &reach {
                for &j in &reach {
                    if self.set_symmetric(i, j) {
                        added += 1;
                    }
                }
            }
        }
        added
    }
}
