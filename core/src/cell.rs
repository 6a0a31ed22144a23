/// Stored state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
}

impl Cell {
    pub const fn mine() -> Self {
        Self {
            is_mine: true,
            is_flagged: false,
            is_revealed: false,
        }
    }

    /// Hidden and not locked by a flag.
    pub const fn is_sweepable(self) -> bool {
        !self.is_revealed && !self.is_flagged
    }

    /// A flag only counts while the cell is still hidden.
    pub const fn has_active_flag(self) -> bool {
        self.is_flagged && !self.is_revealed
    }
}

/// Read-only snapshot of a cell for rendering.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CellView {
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
    pub adjacent_mines: u8,
}
