use isogrid_core::model::{
    grid::{CellKey, GridAddressing},
    metric::Wtwd,
};
use serde::{Deserialize, Serialize};

/// one cell of a sample grid as written to CSV. the position is the cell anchor.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GridRow {
    pub column: i32,
    pub row: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub time: f64,
    pub boardings: f64,
    pub walk_distance: f64,
    pub min_distance: f64,
    pub weight: f64,
}

impl GridRow {
    pub fn new(key: &CellKey, cell: &Wtwd, addressing: &GridAddressing) -> GridRow {
        let anchor = addressing.cell_anchor(key);
        GridRow {
            column: key.col,
            row: key.row,
            longitude: anchor.x,
            latitude: anchor.y,
            time: cell.time(),
            boardings: cell.boardings(),
            walk_distance: cell.walk_distance(),
            min_distance: cell.d,
            weight: cell.w,
        }
    }
}
