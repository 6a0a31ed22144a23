use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Minefield;
}

/// Shuffles every coordinate with `rng` and turns the first `config.mines` of them into mines.
///
/// The mine count is capped at the board area. Nothing keeps the first reveal safe.
pub fn generate_minefield<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Minefield {
    let (size_x, size_y) = (config.size.0.max(1), config.size.1.max(1));
    let total_cells = mult(size_x, size_y);

    if config.mines > total_cells {
        log::warn!(
            "Minefield already full, generated anyway, requested {} but only fits {}",
            config.mines,
            total_cells
        );
    }
    let mines = config.mines.min(total_cells);

    let mut positions: Vec<Coord2> = (0..size_x)
        .flat_map(|x| (0..size_y).map(move |y| (x, y)))
        .collect();
    positions.shuffle(rng);

    let mut cells: Array2<Cell> = Array2::default((size_x, size_y).to_nd_index());
    for &coords in positions.iter().take(mines.into()) {
        cells[coords.to_nd_index()] = Cell::mine();
    }

    let minefield = Minefield::from_cells(cells);
    log::debug!(
        "Generated {}x{} minefield with {} mines",
        size_x,
        size_y,
        minefield.mine_count()
    );
    minefield
}
