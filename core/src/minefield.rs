use core::ops::{Index, IndexMut};
use ndarray::Array2;

use crate::*;

/// The grid: every cell's mine, flag and reveal state.
#[derive(Clone, Debug, PartialEq)]
pub struct Minefield {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Minefield {
    /// Builds an untouched field where `mine_mask[[x, y]]` marks the mines.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (x_len, y_len) = mine_mask.dim();
        let max = usize::from(Coord::MAX);
        if x_len == 0 || y_len == 0 || x_len > max || y_len > max {
            return Err(GameError::InvalidBoardShape);
        }

        let cells = mine_mask.mapv(|is_mine| Cell {
            is_mine,
            ..Cell::default()
        });
        Ok(Self::from_cells(cells))
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidBoardShape);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Callers guarantee both dimensions are within `1..=Coord::MAX`.
    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        let mine_count = cells.iter().filter(|cell| cell.is_mine).count();
        Self {
            cells,
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
        }
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (x_len, y_len) = self.cells.dim();
        // bounded by construction
        (x_len as Coord, y_len as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (x_len, y_len) = self.size();
        mult(x_len, y_len)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        neighbors(coords, self.size())
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, |cell| cell.is_mine)
    }

    pub fn adjacent_flag_count(&self, coords: Coord2) -> u8 {
        self.count_neighbors(coords, Cell::has_active_flag)
    }

    fn count_neighbors(&self, coords: Coord2, pred: impl Fn(Cell) -> bool) -> u8 {
        // at most 8, always fits
        self.iter_neighbors(coords)
            .filter(|&pos| pred(self[pos]))
            .count() as u8
    }

    /// Flags placed on cells that are still hidden.
    pub fn flagged_count(&self) -> CellCount {
        self.count_cells(|cell| cell.has_active_flag())
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_cells(|cell| cell.is_revealed)
    }

    fn count_cells(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        let count = self.cells.iter().filter(|cell| pred(cell)).count();
        CellCount::try_from(count).unwrap_or(CellCount::MAX)
    }

    /// Every safe cell is revealed. Flags do not matter.
    ///
    /// Sweeps never reveal a mine, so comparing counts is enough.
    pub fn check_did_win(&self) -> bool {
        self.revealed_count() == self.safe_cell_count()
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        let Cell {
            is_mine,
            is_flagged,
            is_revealed,
        } = self[coords];
        CellView {
            is_mine,
            is_flagged,
            is_revealed,
            adjacent_mines: self.adjacent_mine_count(coords),
        }
    }

    /// Flips the flag on a hidden cell, returns the new flag state.
    pub(crate) fn toggle_flag(&mut self, coords: Coord2) -> Option<bool> {
        let cell = &mut self[coords];
        if cell.is_revealed {
            return None;
        }
        cell.is_flagged = !cell.is_flagged;
        Some(cell.is_flagged)
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Minefield {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}
