use crossterm::style::{Color, Stylize, style};
use minesweep_core::{Coord2, Session};

/// What a single board position shows this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Glyph {
    Cursor,
    Exploded,
    Mine,
    Count(u8),
    Flag,
    Hidden,
}

impl Glyph {
    pub fn at(session: &Session, coords: Coord2) -> Self {
        let cell = session.cell_view(coords);
        let show_mines = session.is_game_over() || session.preferences().debug;

        if coords == session.cursor() {
            Glyph::Cursor
        } else if session.triggered_mine() == Some(coords) {
            Glyph::Exploded
        } else if show_mines && cell.is_mine {
            Glyph::Mine
        } else if cell.is_revealed {
            Glyph::Count(cell.adjacent_mines)
        } else if cell.is_flagged {
            Glyph::Flag
        } else {
            Glyph::Hidden
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Glyph::Cursor => "🔳",
            Glyph::Exploded => "💥",
            Glyph::Mine => "💣",
            Glyph::Count(0) => "⬛️",
            Glyph::Count(1) => "1️⃣",
            Glyph::Count(2) => "2️⃣",
            Glyph::Count(3) => "3️⃣",
            Glyph::Count(4) => "4️⃣",
            Glyph::Count(5) => "5️⃣",
            Glyph::Count(6) => "6️⃣",
            Glyph::Count(7) => "7️⃣",
            Glyph::Count(_) => "8️⃣",
            Glyph::Flag => "🟨",
            Glyph::Hidden => "⬜️",
        }
    }

    pub fn ascii(self) -> char {
        match self {
            Glyph::Cursor => '*',
            Glyph::Exploded => 'X',
            Glyph::Mine => 'B',
            Glyph::Count(count) => char::from(b'0' + count.min(8)),
            Glyph::Flag => 'F',
            Glyph::Hidden => ' ',
        }
    }

    /// Foreground and background for the ascii table.
    fn colors(self) -> (Option<Color>, Option<Color>) {
        const DARK: Color = rgb(0x111111);
        const GREY: Color = rgb(0xbfbfbf);
        const RED: Color = rgb(0xff0000);

        match self {
            Glyph::Cursor => (Some(rgb(0xff33ff)), None),
            Glyph::Exploded => (Some(RED), Some(rgb(0xffee00))),
            Glyph::Mine => (Some(DARK), Some(RED)),
            Glyph::Count(0) => (Some(rgb(0x292929)), None),
            Glyph::Count(1) => (Some(rgb(0x74adf2)), None),
            Glyph::Count(2) => (Some(rgb(0x00ff00)), None),
            Glyph::Count(3) => (Some(RED), None),
            Glyph::Count(4) => (Some(rgb(0x28706d)), None),
            Glyph::Count(5) => (Some(rgb(0xb06446)), None),
            Glyph::Count(6) => (Some(RED), None),
            Glyph::Count(7) => (Some(rgb(0x8a7101)), None),
            Glyph::Count(_) => (Some(DARK), Some(GREY)),
            Glyph::Flag => (Some(DARK), Some(rgb(0xffee00))),
            Glyph::Hidden => (None, Some(GREY)),
        }
    }
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    }
}

/// Turns a session into the lines of one frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Renderer {
    pub color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn frame(&self, session: &Session) -> Vec<String> {
        let mut lines = header(session);
        lines.push(String::new());
        if session.preferences().ascii {
            lines.extend(self.ascii_board(session));
        } else {
            lines.extend(emoji_board(session));
        }
        lines.push(String::new());
        lines.extend(help(session));
        lines
    }

    fn ascii_board(&self, session: &Session) -> Vec<String> {
        let (size_x, size_y) = session.size();
        let rule = |left: &str, mid: &str, right: &str| {
            let segments = vec!["───"; size_x.into()];
            format!("{}{}{}", left, segments.join(mid), right)
        };

        let mut lines = vec![rule("┌", "┬", "┐")];
        for y in 0..size_y {
            if y > 0 {
                lines.push(rule("├", "┼", "┤"));
            }
            let cells: Vec<String> = (0..size_x)
                .map(|x| self.ascii_cell(Glyph::at(session, (x, y))))
                .collect();
            lines.push(format!("│{}│", cells.join("│")));
        }
        lines.push(rule("└", "┴", "┘"));
        lines
    }

    fn ascii_cell(&self, glyph: Glyph) -> String {
        let text = format!(" {} ", glyph.ascii());
        if !self.color {
            return text;
        }
        let mut styled = style(text);
        let (fg, bg) = glyph.colors();
        if let Some(fg) = fg {
            styled = styled.with(fg);
        }
        if let Some(bg) = bg {
            styled = styled.on(bg);
        }
        styled.to_string()
    }
}

fn header(session: &Session) -> Vec<String> {
    let mut lines = Vec::with_capacity(3);
    if session.is_game_over() {
        let verdict = if session.did_win() {
            "You WON!!"
        } else {
            "You lost..."
        };
        lines.push(format!("Game Over! {}", verdict));
    } else {
        lines.push("...go sweep...".to_string());
        lines.push(format!("{} mines left", session.mines_remaining()));
    }
    lines.push(format!("{} seconds elapsed", session.elapsed_seconds()));
    lines
}

fn emoji_board(session: &Session) -> Vec<String> {
    let (size_x, size_y) = session.size();
    (0..size_y)
        .map(|y| {
            (0..size_x)
                .map(|x| Glyph::at(session, (x, y)).emoji())
                .collect::<String>()
        })
        .collect()
}

fn help(session: &Session) -> Vec<String> {
    if !session.preferences().show_help {
        return Vec::new();
    }

    let mut lines = Vec::new();
    if !session.is_game_over() {
        lines.extend([
            "Press h/j/k/l or ←↓↑→ to move",
            "Press enter or space to sweep",
            "Press f to toggle flag.",
            "Press d to toggle debug.",
        ]);
    }
    lines.extend([
        "Press q to quit.",
        "Press r to start a new game.",
        "Press ? to toggle help text",
        "Press a to toggle ascii view",
    ]);
    lines.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use minesweep_core::{Direction, Minefield};

    fn session(size: Coord2, mines: &[Coord2]) -> Session {
        Session::from_minefield(Minefield::from_mine_coords(size, mines).unwrap())
    }

    fn plain() -> Renderer {
        Renderer::new(false)
    }

    #[test]
    fn header_while_playing() {
        let mut session = session((3, 3), &[(0, 0)]);
        session.tick();
        let lines = header(&session);
        assert_eq!(lines, vec!["...go sweep...", "1 mines left", "1 seconds elapsed"]);
    }

    #[test]
    fn header_after_win_and_loss() {
        let mut won = session((1, 1), &[]);
        won.reveal((0, 0));
        assert_eq!(header(&won)[0], "Game Over! You WON!!");

        let mut lost = session((2, 1), &[(1, 0)]);
        lost.reveal((1, 0));
        assert_eq!(header(&lost)[0], "Game Over! You lost...");
    }

    #[test]
    fn cursor_takes_priority() {
        let mut session = session((2, 2), &[(0, 0)]);
        session.toggle_debug();
        assert_eq!(session.cursor(), (0, 0));
        assert_eq!(Glyph::at(&session, (0, 0)), Glyph::Cursor);
    }

    #[test]
    fn mines_hidden_until_debug() {
        let mut session = session((3, 3), &[(2, 2)]);
        assert_eq!(Glyph::at(&session, (2, 2)), Glyph::Hidden);
        session.toggle_debug();
        assert_eq!(Glyph::at(&session, (2, 2)), Glyph::Mine);
    }

    #[test]
    fn loss_marks_triggered_mine() {
        let mut session = session((3, 1), &[(1, 0), (2, 0)]);
        session.reveal((2, 0));
        assert_eq!(Glyph::at(&session, (2, 0)), Glyph::Exploded);
        assert_eq!(Glyph::at(&session, (1, 0)), Glyph::Mine);
    }

    #[test]
    fn flags_and_counts() {
        let mut session = session((3, 1), &[(0, 0)]);
        session.move_cursor(Direction::Right);
        session.move_cursor(Direction::Right);
        session.toggle_flag((0, 0));
        session.reveal((1, 0));
        assert_eq!(Glyph::at(&session, (0, 0)), Glyph::Flag);
        assert_eq!(Glyph::at(&session, (1, 0)), Glyph::Count(1));
    }

    #[test]
    fn emoji_rows_match_board() {
        let session = session((3, 2), &[]);
        let rows = emoji_board(&session);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], "🔳⬜️⬜️");
        assert_eq!(rows[1], "⬜️⬜️⬜️");
    }

    #[test]
    fn ascii_table_layout() {
        let mut session = session((2, 2), &[(1, 1)]);
        session.toggle_ascii();
        session.toggle_debug();
        let lines = plain().ascii_board(&session);
        assert_eq!(
            lines,
            vec![
                "┌───┬───┐",
                "│ * │   │",
                "├───┼───┤",
                "│   │ B │",
                "└───┴───┘",
            ]
        );
    }

    #[test]
    fn colored_cells_keep_text() {
        let cell = Renderer::new(true).ascii_cell(Glyph::Flag);
        assert!(cell.contains(" F "));
    }

    #[test]
    fn help_follows_preferences() {
        let mut session = session((2, 2), &[]);
        assert_eq!(help(&session).len(), 8);
        session.toggle_help();
        assert!(help(&session).is_empty());
    }

    #[test]
    fn help_after_game_over_is_short() {
        let mut session = session((1, 1), &[]);
        session.reveal((0, 0));
        assert_eq!(help(&session).len(), 4);
    }

    #[test]
    fn frame_switches_glyph_set() {
        let mut session = session((2, 2), &[]);
        let emoji = plain().frame(&session);
        session.toggle_ascii();
        let ascii = plain().frame(&session);
        assert!(emoji.iter().any(|line| line.contains('🔳')));
        assert!(ascii.iter().any(|line| line.starts_with('┌')));
    }

    #[test]
    fn ascii_digits() {
        assert_eq!(Glyph::Count(0).ascii(), '0');
        assert_eq!(Glyph::Count(8).ascii(), '8');
    }
}
