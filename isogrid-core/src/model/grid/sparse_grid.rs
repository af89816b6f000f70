use super::{CellKey, GridAddressing};
use crate::model::{metric::MergeCell, SampleGridError};
use itertools::Itertools;
use std::collections::HashMap;

/// a sparse regular grid storing one accumulated value per occupied cell.
///
/// cells are created lazily on their first contribution. enumeration always
/// follows the Z-order of the cell keys, regardless of insertion order, so that
/// downstream contouring is reproducible.
#[derive(Debug, Clone)]
pub struct SparseGrid<V> {
    addressing: GridAddressing,
    cells: HashMap<CellKey, V>,
}

impl<V> SparseGrid<V> {
    pub fn new(addressing: GridAddressing) -> SparseGrid<V> {
        SparseGrid {
            addressing,
            cells: HashMap::new(),
        }
    }

    /// creates an empty grid, reserving room for `capacity` cells up front.
    pub fn with_capacity(addressing: GridAddressing, capacity: usize) -> SparseGrid<V> {
        SparseGrid {
            addressing,
            cells: HashMap::with_capacity(capacity),
        }
    }

    pub fn addressing(&self) -> &GridAddressing {
        &self.addressing
    }

    /// merges a contribution into the cell at `key`. if the cell does not exist,
    /// it is first created from `empty` and then merged.
    pub fn upsert<E, F>(&mut self, key: CellKey, empty: E, merge: F)
    where
        E: FnOnce() -> V,
        F: FnOnce(&mut V),
    {
        let cell = self.cells.entry(key).or_insert_with(empty);
        merge(cell);
    }

    pub fn get(&self, key: &CellKey) -> Option<&V> {
        self.cells.get(key)
    }

    /// iterates over a snapshot of all cells in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&CellKey, &V)> + '_ {
        self.cells.iter().sorted_by_key(|(key, _)| **key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &CellKey> + '_ {
        self.cells.keys().sorted()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<V: MergeCell> SparseGrid<V> {
    /// folds another grid into this one, cell by cell. used to recombine grids
    /// built from disjoint shards of the same sample set.
    ///
    /// # Arguments
    ///
    /// * `other` - grid built with the same addressing as this one
    ///
    /// # Returns
    ///
    /// * an error if the two grids do not share origin and cell size
    pub fn merge(&mut self, other: SparseGrid<V>) -> Result<(), SampleGridError> {
        if self.addressing != other.addressing {
            return Err(SampleGridError::MismatchedGrids(format!(
                "grid addressing {:?} does not match {:?}",
                self.addressing, other.addressing
            )));
        }
        for (key, value) in other.cells.into_iter() {
            match self.cells.get_mut(&key) {
                Some(existing) => existing.merge_cell(&value),
                None => {
                    self.cells.insert(key, value);
                }
            }
        }
        Ok(())
    }
}
