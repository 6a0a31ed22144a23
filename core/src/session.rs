use rand::Rng;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Display toggles that survive a restart.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    /// Show every mine while playing.
    pub debug: bool,
    pub show_help: bool,
    pub ascii: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            debug: false,
            show_help: true,
            ascii: false,
        }
    }
}

/// One game from the first frame until restart.
///
/// Whether a finished game was won is derived from the field, only the triggered mine is kept.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    minefield: Minefield,
    cursor: Coord2,
    game_over: bool,
    triggered_mine: Option<Coord2>,
    elapsed_secs: u32,
    prefs: Preferences,
}

impl Session {
    pub fn new<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Self {
        Self::from_minefield(generate_minefield(config, rng))
    }

    pub fn from_minefield(minefield: Minefield) -> Self {
        let (size_x, size_y) = minefield.size();
        Self {
            minefield,
            cursor: ((size_x / 2).saturating_sub(1), (size_y / 2).saturating_sub(1)),
            game_over: false,
            triggered_mine: None,
            elapsed_secs: 0,
            prefs: Preferences::default(),
        }
    }

    pub fn with_preferences(mut self, prefs: Preferences) -> Self {
        self.prefs = prefs;
        self
    }

    /// Fresh board with the same config, keeping preferences and cursor.
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        log::debug!("Restarting game");
        let mut next = Self::new(self.minefield.game_config(), rng).with_preferences(self.prefs);
        next.cursor = self.cursor;
        next
    }

    pub fn size(&self) -> Coord2 {
        self.minefield.size()
    }

    pub fn cursor(&self) -> Coord2 {
        self.cursor
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Every safe cell is revealed and no mine went off.
    pub fn did_win(&self) -> bool {
        self.triggered_mine.is_none() && self.minefield.check_did_win()
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn total_mines(&self) -> CellCount {
        self.minefield.mine_count()
    }

    /// Can go negative when the player over-flags.
    pub fn mines_remaining(&self) -> isize {
        (self.total_mines() as isize) - (self.minefield.flagged_count() as isize)
    }

    pub fn cell_view(&self, coords: Coord2) -> CellView {
        self.minefield.cell_view(coords)
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        let (size_x, size_y) = self.size();
        let (x, y) = self.cursor;
        self.cursor = match direction {
            Direction::Up => (x, wrap_dec(y, size_y)),
            Direction::Down => (x, wrap_inc(y, size_y)),
            Direction::Left => (wrap_dec(x, size_x), y),
            Direction::Right => (wrap_inc(x, size_x), y),
        };
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if self.game_over {
            return RevealOutcome::NoChange;
        }
        let report = self.minefield.sweep(coords);
        self.apply_report(report)
    }

    pub fn reveal_at_cursor(&mut self) -> RevealOutcome {
        self.reveal(self.cursor)
    }

    /// Flags or unflags a hidden cell. On a revealed cell this chords instead.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        if self.game_over {
            return FlagOutcome::NoChange;
        }
        match self.minefield.toggle_flag(coords) {
            Some(true) => FlagOutcome::Flagged,
            Some(false) => FlagOutcome::Unflagged,
            None => {
                let report = self.minefield.sweep(coords);
                FlagOutcome::Chorded(self.apply_report(report))
            }
        }
    }

    pub fn toggle_flag_at_cursor(&mut self) -> FlagOutcome {
        self.toggle_flag(self.cursor)
    }

    pub fn toggle_debug(&mut self) {
        self.prefs.debug = !self.prefs.debug;
    }

    pub fn toggle_help(&mut self) {
        self.prefs.show_help = !self.prefs.show_help;
    }

    pub fn toggle_ascii(&mut self) {
        self.prefs.ascii = !self.prefs.ascii;
    }

    pub fn tick(&mut self) {
        if !self.game_over {
            self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        }
    }

    fn apply_report(&mut self, report: SweepReport) -> RevealOutcome {
        if let Some(coords) = report.triggered_mine {
            self.triggered_mine = Some(coords);
            self.game_over = true;
            log::debug!("Lost after {}s", self.elapsed_secs);
            RevealOutcome::HitMine
        } else if self.minefield.check_did_win() {
            self.game_over = true;
            log::debug!("Won after {}s", self.elapsed_secs);
            RevealOutcome::Won
        } else if report.revealed > 0 {
            RevealOutcome::Revealed
        } else {
            RevealOutcome::NoChange
        }
    }
}

fn wrap_inc(value: Coord, len: Coord) -> Coord {
    if value + 1 >= len { 0 } else { value + 1 }
}

fn wrap_dec(value: Coord, len: Coord) -> Coord {
    if value == 0 { len - 1 } else { value - 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn session(size: Coord2, mines: &[Coord2]) -> Session {
        Session::from_minefield(Minefield::from_mine_coords(size, mines).unwrap())
    }

    #[test]
    fn single_safe_cell_wins_immediately() {
        let mut session = session((1, 1), &[]);

        assert_eq!(session.reveal((0, 0)), RevealOutcome::Won);
        assert!(session.is_game_over());
        assert!(session.did_win());
    }

    #[test]
    fn three_by_three_cascade_wins() {
        let mut session = session((3, 3), &[(2, 2)]);

        assert_eq!(session.reveal((0, 0)), RevealOutcome::Won);
        assert!(!session.cell_view((2, 2)).is_revealed);
        assert!(session.triggered_mine().is_none());
        assert!(session.did_win());
    }

    #[test]
    fn full_board_loses_on_any_reveal() {
        let mut rng = SmallRng::seed_from_u64(9);
        let mut session = Session::new(GameConfig::new((5, 5), 100), &mut rng);
        assert_eq!(session.total_mines(), 25);

        assert_eq!(session.reveal((3, 1)), RevealOutcome::HitMine);
        assert!(session.is_game_over());
        assert!(!session.did_win());
        assert_eq!(session.triggered_mine(), Some((3, 1)));
    }

    #[test]
    fn hitting_a_mine_is_not_a_win() {
        let mut session = session((2, 1), &[(0, 0)]);

        assert_eq!(session.reveal((0, 0)), RevealOutcome::HitMine);
        assert!(session.is_game_over());
        assert!(!session.did_win());
    }

    #[test]
    fn commands_are_ignored_after_game_over() {
        let mut session = session((3, 1), &[(0, 0)]);
        session.reveal((0, 0));
        let before = session.clone();

        assert_eq!(session.reveal((2, 0)), RevealOutcome::NoChange);
        assert_eq!(session.toggle_flag((1, 0)), FlagOutcome::NoChange);
        session.tick();

        assert_eq!(session, before);
        assert_eq!(session.elapsed_seconds(), 0);
    }

    #[test]
    fn tick_counts_seconds_while_playing() {
        let mut session = session((2, 2), &[(0, 0)]);
        session.tick();
        session.tick();
        assert_eq!(session.elapsed_seconds(), 2);
    }

    #[test]
    fn flagging_adjusts_mines_remaining() {
        let mut session = session((3, 3), &[(0, 0)]);

        assert_eq!(session.toggle_flag((2, 2)), FlagOutcome::Flagged);
        assert_eq!(session.toggle_flag((1, 2)), FlagOutcome::Flagged);
        assert_eq!(session.mines_remaining(), -1);
        assert_eq!(session.toggle_flag((2, 2)), FlagOutcome::Unflagged);
        assert_eq!(session.mines_remaining(), 0);
    }

    #[test]
    fn flag_on_revealed_cell_chords() {
        let mut session = session((3, 1), &[(0, 0)]);
        session.reveal((1, 0));
        session.toggle_flag((0, 0));

        let outcome = session.toggle_flag((1, 0));

        assert_eq!(outcome, FlagOutcome::Chorded(RevealOutcome::Won));
        assert!(session.did_win());
    }

    #[test]
    fn flag_chord_through_wrong_flag_loses() {
        let mut session = session((3, 1), &[(0, 0)]);
        session.reveal((1, 0));
        session.toggle_flag((2, 0));

        let outcome = session.toggle_flag((1, 0));

        assert_eq!(outcome, FlagOutcome::Chorded(RevealOutcome::HitMine));
        assert!(session.is_game_over());
        assert!(!session.did_win());
        assert_eq!(session.triggered_mine(), Some((0, 0)));
    }

    #[test]
    fn reveal_on_revealed_cell_chords() {
        let mut session = session((3, 3), &[(0, 1), (2, 1)]);
        session.reveal((1, 1));
        session.toggle_flag((0, 1));
        session.toggle_flag((2, 1));

        assert_eq!(session.reveal((1, 1)), RevealOutcome::Won);
    }

    #[test]
    fn cursor_wraps_both_axes() {
        let mut session = session((3, 2), &[]);
        assert_eq!(session.cursor(), (0, 0));

        session.move_cursor(Direction::Left);
        assert_eq!(session.cursor(), (2, 0));
        session.move_cursor(Direction::Right);
        assert_eq!(session.cursor(), (0, 0));
        session.move_cursor(Direction::Up);
        assert_eq!(session.cursor(), (0, 1));
        session.move_cursor(Direction::Down);
        assert_eq!(session.cursor(), (0, 0));
    }

    #[test]
    fn cursor_starts_near_center() {
        assert_eq!(session((30, 30), &[]).cursor(), (14, 14));
        assert_eq!(session((1, 1), &[]).cursor(), (0, 0));
    }

    #[test]
    fn restart_keeps_preferences_and_cursor() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut session = Session::new(GameConfig::new((9, 9), 10), &mut rng);
        session.toggle_debug();
        session.toggle_help();
        session.toggle_ascii();
        session.move_cursor(Direction::Right);
        session.tick();

        let next = session.restart(&mut rng);

        assert_eq!(next.preferences(), session.preferences());
        assert_eq!(next.cursor(), session.cursor());
        assert_eq!(next.elapsed_seconds(), 0);
        assert_eq!(next.total_mines(), 10);
        assert!(!next.is_game_over());
    }

    #[test]
    fn preferences_default_shows_help() {
        let prefs = session((2, 2), &[]).preferences();
        assert!(prefs.show_help);
        assert!(!prefs.debug);
        assert!(!prefs.ascii);
    }
}
