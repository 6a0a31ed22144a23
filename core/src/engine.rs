use alloc::collections::VecDeque;
use hashbrown::HashSet;

use crate::*;

/// Why a cell ended up on the sweep worklist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SweepOrigin {
    /// The cell the player asked for.
    Player,
    /// A neighbor queued by an auto-sweep around a revealed cell.
    Chord,
    /// A neighbor of a zero cell, queued by the flood fill.
    Flood,
}

impl SweepOrigin {
    /// Whether hitting a mine from this origin ends the game.
    pub const fn detonates(self) -> bool {
        matches!(self, Self::Player | Self::Chord)
    }
}

/// What a single top-level sweep did to the field.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepReport {
    pub revealed: CellCount,
    pub chorded: bool,
    pub triggered_mine: Option<Coord2>,
}

impl Minefield {
    /// A revealed cell can be chorded once its flagged neighbors cover its mine count.
    pub fn can_chord_at(&self, coords: Coord2) -> bool {
        self[coords].is_revealed && self.adjacent_flag_count(coords) >= self.adjacent_mine_count(coords)
    }

    /// Reveals `origin` on behalf of the player.
    ///
    /// - a revealed cell chords: its hidden, unflagged neighbors are swept when enough flags surround it
    /// - a flagged cell is left alone
    /// - a mine is recorded as the triggered mine
    /// - a safe cell is revealed, and zero cells flood into their neighbors
    ///
    /// The whole worklist drains before returning.
    pub fn sweep(&mut self, origin: Coord2) -> SweepReport {
        let mut report = SweepReport::default();
        let mut visited: HashSet<Coord2> = HashSet::new();
        let mut to_visit = VecDeque::from([(origin, SweepOrigin::Player)]);

        while let Some((coords, from)) = to_visit.pop_front() {
            let cell = self[coords];

            if cell.is_revealed {
                if from == SweepOrigin::Player && self.can_chord_at(coords) {
                    log::debug!("Chording at {:?}", coords);
                    report.chorded = true;
                    to_visit.extend(
                        self.iter_neighbors(coords)
                            .filter(|&pos| self[pos].is_sweepable())
                            .map(|pos| (pos, SweepOrigin::Chord)),
                    );
                }
                continue;
            }

            if cell.is_flagged {
                log::trace!("Skipping flagged cell at {:?}", coords);
                continue;
            }

            if cell.is_mine {
                if from.detonates() {
                    log::debug!("Mine triggered at {:?}", coords);
                    if report.triggered_mine.is_none() {
                        report.triggered_mine = Some(coords);
                    }
                }
                continue;
            }

            let touching = self.adjacent_mine_count(coords);
            self[coords].is_revealed = true;
            report.revealed += 1;
            log::trace!("Revealed {:?} ({:?}), mine count: {}", coords, from, touching);

            if touching == 0 && visited.insert(coords) {
                to_visit.extend(
                    self.iter_neighbors(coords)
                        .filter(|&pos| !visited.contains(&pos) && self[pos].is_sweepable())
                        .map(|pos| (pos, SweepOrigin::Flood)),
                );
            }
        }

        report
    }
}
